// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Entry point of the `khr-session` operator CLI.

use clap::Parser;

use khr_bin::error::report_error_and_exit;
use khr_bin::{commands, init_logging, Cli};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.effective_log_level(), cli.log_format);

    if let Err(e) = commands::execute(&cli) {
        report_error_and_exit(e);
    }
}
