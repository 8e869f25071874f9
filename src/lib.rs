// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod io;
pub mod scoring;
pub mod weather;

// Re-export commonly used types
pub use crate::config::{load_config, SidelineConfig};
pub use crate::errors::SidelineError;
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::scoring::{enumerate, Combination, PlayType, ScoreReport};
pub use crate::weather::{
    categorize, convert, from_celsius, to_celsius, AdvisoryThresholds, Category, ConvertReport,
    Scale,
};
