// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service layer — wires configuration, the HTTP source, and the workbench
// together, and reads answers from the terminal.

pub mod app_services;
pub mod prompt;
