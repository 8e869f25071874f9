//! CLI command implementations.
//!
//! Each submodule owns one subcommand: its configuration struct, input
//! validation, and execution. Commands build plain report values from the
//! core modules and hand them to an output writer.

pub mod convert;
pub mod init;
pub mod score;

pub use convert::{run_convert, ConvertConfig};
pub use init::init_config;
pub use score::{run_score, ScoreConfig};
