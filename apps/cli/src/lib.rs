//! promptduel CLI: compare two prompt variants across AI providers.

pub use cmd::{Cli, Command};

pub mod cmd;
pub mod render;
