use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if io::file_exists(&config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Sideline configuration

[output]
# Format used when --format is not given: "terminal" or "json"
default_format = "terminal"

[advisory]
# Upper bounds in Celsius (exclusive) for each advisory category,
# strictly ascending. Anything at or above hot_below is Extreme Heat.
freezing_below = 0.0
cold_below = 10.0
comfortable_below = 25.0
hot_below = 35.0
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
