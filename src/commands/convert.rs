//! The `convert` command: temperature conversion plus weather advisory.

use crate::config::SidelineConfig;
use crate::io::output::{create_writer, OutputFormat};
use crate::weather::{ConvertReport, Scale};
use anyhow::Result;
use std::path::PathBuf;

pub struct ConvertConfig {
    pub value: f64,
    pub from: Scale,
    pub to: Scale,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn run_convert(config: ConvertConfig, app_config: &SidelineConfig) -> Result<()> {
    log::debug!(
        "Converting {} from {} to {}",
        config.value,
        config.from,
        config.to
    );
    let report = ConvertReport::build(config.value, config.from, config.to, &app_config.advisory);
    let mut writer = create_writer(config.format, config.output.as_deref())?;
    writer.write_convert_report(&report)
}
