//! Form input and field-level validation
//!
//! A [`CoffeeForm`] holds exactly what the user typed. Nothing reaches the
//! store until [`CoffeeForm::validate`] has turned it into a [`NewCoffee`].

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::coffee::{CoffeeItem, CoffeeType, NewCoffee, RoastDegree};

/// Raw add/edit form contents
///
/// Roast degree and type come from fixed choices, so they are already typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoffeeForm {
    pub name: String,
    pub roast_degree: RoastDegree,
    pub coffee_type: CoffeeType,
    pub description: String,
    pub price: String,
    pub volume: String,
}

/// Rejected form input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
pub enum ValidationError {
    #[error("name required.")]
    #[diagnostic(code(coffee::validation::name), help("enter the coffee's name"))]
    NameRequired,

    #[error("invalid price.")]
    #[diagnostic(
        code(coffee::validation::price),
        help("the price must be a number greater than zero, e.g. 1250 or 99,5; do not group thousands")
    )]
    InvalidPrice,

    #[error("invalid volume.")]
    #[diagnostic(
        code(coffee::validation::volume),
        help("the package volume must be a number of grams greater than zero; do not group thousands")
    )]
    InvalidVolume,
}

impl CoffeeForm {
    /// Check the fields in order: name, price, volume
    pub fn validate(&self) -> Result<NewCoffee, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }

        let price = parse_positive(&self.price).ok_or(ValidationError::InvalidPrice)?;
        let volume = parse_positive(&self.volume).ok_or(ValidationError::InvalidVolume)?;

        Ok(NewCoffee {
            name: name.to_string(),
            roast_degree: self.roast_degree,
            coffee_type: self.coffee_type,
            description: self.description.trim().to_string(),
            price,
            volume,
        })
    }
}

impl From<&CoffeeItem> for CoffeeForm {
    fn from(item: &CoffeeItem) -> Self {
        Self {
            name: item.name.clone(),
            roast_degree: item.roast_degree,
            coffee_type: item.coffee_type,
            description: item.description.clone(),
            price: item.price.to_string(),
            volume: item.volume.to_string(),
        }
    }
}

/// Parse a finite decimal strictly greater than zero
///
/// A decimal comma is read as a decimal point. A comma followed by exactly
/// three digits looks like a thousands separator and is refused.
fn parse_positive(input: &str) -> Option<f64> {
    let input = input.trim();
    if let Some((_, fraction)) = input.split_once(',') {
        if fraction.len() == 3 && fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }

    let normalized = input.replace(',', ".");
    if normalized.is_empty() {
        return None;
    }

    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}
