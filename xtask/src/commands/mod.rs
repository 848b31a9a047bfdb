//! Top-level xtask command families.

pub mod check;
pub mod manifest;
pub mod tokens;
