//! Show the effective configuration

use luhnkit::config::Config;
use luhnkit::output::OutputMode;

/// Print the configuration in effect after defaults and file overrides
pub fn show_config(config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Human => {
            println!("# {}", Config::config_path().display());
            print!("{}", config.to_toml()?);
        },
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(config)?),
    }
    Ok(())
}
