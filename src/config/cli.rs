use crate::utils::error::Result;
use crate::utils::validation::{validate_file_exists, validate_positive_real, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "coffee-set")]
#[command(about = "Demo driver for the insertion-ordered coffee set")]
pub struct CliConfig {
    #[arg(long, help = "TOML inventory file; built-in samples are used when omitted")]
    pub inventory: Option<String>,

    #[arg(long, default_value = "70.0", help = "Lower bound of the quality filter demo")]
    pub min_quality: f64,

    #[arg(long, default_value = "90.0", help = "Upper bound of the quality filter demo")]
    pub max_quality: f64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.inventory {
            validate_file_exists("inventory", path)?;
        }
        validate_positive_real("min_quality", self.min_quality)?;
        validate_positive_real("max_quality", self.max_quality)?;
        if self.min_quality > self.max_quality {
            return Err(crate::utils::error::CoffeeError::ConfigError {
                message: format!(
                    "min_quality ({}) exceeds max_quality ({})",
                    self.min_quality, self.max_quality
                ),
            });
        }
        Ok(())
    }
}
