//! Configuration loaded from `.sideline.toml`.
//!
//! The file is discovered by walking up the directory hierarchy from the
//! current directory, similar to the way most dotfile-configured tools
//! behave. A missing file means defaults; a malformed file warns and
//! falls back to defaults rather than aborting.

use crate::io::output::OutputFormat;
use crate::weather::AdvisoryThresholds;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".sideline.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidelineConfig {
    pub output: OutputSection,
    pub advisory: AdvisoryThresholds,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Format used when the command line does not pass `--format`.
    pub default_format: Option<OutputFormat>,
}

/// Parse and validate a config from its TOML source.
///
/// Invalid advisory thresholds are reported and replaced with defaults so
/// one bad section cannot take the whole config down.
pub fn parse_and_validate_config(contents: &str) -> Result<SidelineConfig, String> {
    let mut config = toml::from_str::<SidelineConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;

    if let Err(e) = config.advisory.validate() {
        eprintln!("Warning: invalid advisory thresholds: {e}. Using defaults.");
        config.advisory = AdvisoryThresholds::default();
    }

    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<SidelineConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            None
        }
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        parent.pop().then_some(parent)
    })
    .take(max_depth)
}

/// Load the nearest `.sideline.toml`, or defaults when none is found.
pub fn load_config() -> SidelineConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("Failed to get current directory: {e}. Using default config.");
            return SidelineConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!("No {CONFIG_FILE_NAME} found. Using default config.");
            SidelineConfig::default()
        })
}

impl SidelineConfig {
    /// Format to use when the CLI did not specify one.
    pub fn resolve_format(&self, cli_format: Option<OutputFormat>) -> OutputFormat {
        cli_format
            .or(self.output.default_format)
            .unwrap_or(OutputFormat::Terminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_is_default() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, SidelineConfig::default());
    }

    #[test]
    fn test_full_config_parses() {
        let config = parse_and_validate_config(
            r#"
[output]
default_format = "json"

[advisory]
freezing_below = -5.0
cold_below = 5.0
comfortable_below = 20.0
hot_below = 30.0
"#,
        )
        .unwrap();
        assert_eq!(config.output.default_format, Some(OutputFormat::Json));
        assert_eq!(config.advisory.freezing_below, -5.0);
        assert_eq!(config.advisory.hot_below, 30.0);
    }

    #[test]
    fn test_bad_thresholds_fall_back_to_defaults() {
        let config = parse_and_validate_config(
            r#"
[advisory]
freezing_below = 50.0
"#,
        )
        .unwrap();
        assert_eq!(config.advisory, AdvisoryThresholds::default());
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(parse_and_validate_config("not = [valid").is_err());
    }

    #[test]
    fn test_format_resolution_prefers_cli() {
        let mut config = SidelineConfig::default();
        config.output.default_format = Some(OutputFormat::Json);
        assert_eq!(
            config.resolve_format(Some(OutputFormat::Terminal)),
            OutputFormat::Terminal
        );
        assert_eq!(config.resolve_format(None), OutputFormat::Json);
        assert_eq!(
            SidelineConfig::default().resolve_format(None),
            OutputFormat::Terminal
        );
    }
}
