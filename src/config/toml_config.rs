use crate::core::LinkedSet;
use crate::domain::model::Coffee;
use crate::utils::error::{CoffeeError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_real, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A coffee inventory described as a TOML file: an array of `[[coffee]]`
/// tables, one per record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    #[serde(default)]
    pub coffee: Vec<CoffeeEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoffeeEntry {
    pub name: String,
    pub price_per_kg: f64,
    pub quality: f64,
    pub volume_per_kg: f64,
}

impl InventoryConfig {
    /// Loads and validates an inventory from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates an inventory from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Constructs the records and seeds a set with them. Duplicate entries
    /// collapse silently, keeping the first occurrence.
    pub fn into_set(self) -> Result<LinkedSet> {
        let mut set = LinkedSet::new();
        for entry in self.coffee {
            let record = Coffee::new(
                entry.name,
                entry.price_per_kg,
                entry.quality,
                entry.volume_per_kg,
            )?;
            set.add(record);
        }
        Ok(set)
    }
}

impl Validate for InventoryConfig {
    fn validate(&self) -> Result<()> {
        if self.coffee.is_empty() {
            return Err(CoffeeError::ConfigError {
                message: "inventory has no [[coffee]] entries".to_string(),
            });
        }
        for entry in &self.coffee {
            validate_non_empty_string("coffee.name", &entry.name)?;
            validate_positive_real("coffee.price_per_kg", entry.price_per_kg)?;
            validate_positive_real("coffee.quality", entry.quality)?;
            validate_positive_real("coffee.volume_per_kg", entry.volume_per_kg)?;
        }
        Ok(())
    }
}
