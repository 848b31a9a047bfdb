//! Workspace maintenance commands (`cargo xtask`).
//!
//! Exposes manifest export, parity checks, and token inspection through a Cargo alias.

use std::process::ExitCode;

fn main() -> ExitCode {
    xtask::exit_code(xtask::execute_from_env())
}
