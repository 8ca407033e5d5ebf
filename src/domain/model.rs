use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_positive_real};
use std::fmt;

/// An immutable coffee record: a named product with its price, quality score
/// and packed volume, all per kilogram.
///
/// Equality is structural over all four fields, with ordinary `f64` equality
/// (no epsilon). The float fields make a derived `Eq`/`Hash` unsound, so the
/// type deliberately stops at `PartialEq`. The only way to obtain a `Coffee`
/// is `Coffee::new`, so every live record has passed field validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Coffee {
    name: String,
    price_per_kg: f64,
    quality: f64,
    volume_per_kg: f64,
}

impl Coffee {
    /// Builds a record, rejecting non-positive price, quality or volume with
    /// `CoffeeError::InvalidArgument`.
    pub fn new(
        name: impl Into<String>,
        price_per_kg: f64,
        quality: f64,
        volume_per_kg: f64,
    ) -> Result<Self> {
        let name = name.into();
        validate_non_empty_string("name", &name)?;
        validate_positive_real("price_per_kg", price_per_kg)?;
        validate_positive_real("quality", quality)?;
        validate_positive_real("volume_per_kg", volume_per_kg)?;

        Ok(Self {
            name,
            price_per_kg,
            quality,
            volume_per_kg,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price_per_kg(&self) -> f64 {
        self.price_per_kg
    }

    pub fn quality(&self) -> f64 {
        self.quality
    }

    pub fn volume_per_kg(&self) -> f64 {
        self.volume_per_kg
    }

    /// Price per unit of packed volume, used by ratio-sorted views.
    pub fn price_to_volume_ratio(&self) -> f64 {
        self.price_per_kg / self.volume_per_kg
    }
}

impl fmt::Display for Coffee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: price/kg = {:.2}, quality = {:.2}",
            self.name, self.price_per_kg, self.quality
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_validates_fields() {
        assert!(Coffee::new("Arabica", 30.0, 85.0, 0.8).is_ok());
        assert!(Coffee::new("Arabica", 0.0, 85.0, 0.8).is_err());
        assert!(Coffee::new("Arabica", 30.0, -1.0, 0.8).is_err());
        assert!(Coffee::new("Arabica", 30.0, 85.0, 0.0).is_err());
        assert!(Coffee::new("", 30.0, 85.0, 0.8).is_err());
    }

    #[test]
    fn test_structural_equality() {
        let a = Coffee::new("Arabica", 30.0, 85.0, 0.8).unwrap();
        let b = Coffee::new("Arabica", 30.0, 85.0, 0.8).unwrap();
        let c = Coffee::new("Arabica", 30.0, 85.0, 0.81).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_price_to_volume_ratio() {
        let a = Coffee::new("Arabica", 30.0, 85.0, 0.8).unwrap();
        assert!((a.price_to_volume_ratio() - 37.5).abs() < 1e-12);
    }

    #[test]
    fn test_display_format() {
        let a = Coffee::new("Arabica", 30.0, 85.0, 0.8).unwrap();
        assert_eq!(a.to_string(), "Arabica: price/kg = 30.00, quality = 85.00");
    }
}
