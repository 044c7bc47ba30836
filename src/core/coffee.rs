//! Coffee entity - the single record type kept in the catalog

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Row identifier assigned by the store
pub type CoffeeId = i64;

/// Degree of roast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoastDegree {
    Light,
    #[default]
    Medium,
    Dark,
}

impl RoastDegree {
    pub const ALL: [RoastDegree; 3] = [RoastDegree::Light, RoastDegree::Medium, RoastDegree::Dark];

    /// Catalog label, as stored in the `roast_degree` column
    pub fn label(self) -> &'static str {
        match self {
            RoastDegree::Light => "Светлая",
            RoastDegree::Medium => "Средняя",
            RoastDegree::Dark => "Темная",
        }
    }
}

impl std::fmt::Display for RoastDegree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for RoastDegree {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" | "светлая" => Ok(RoastDegree::Light),
            "medium" | "средняя" => Ok(RoastDegree::Medium),
            "dark" | "темная" | "тёмная" => Ok(RoastDegree::Dark),
            _ => Err(ParseLabelError::Roast(s.to_string())),
        }
    }
}

/// Whole beans or ground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CoffeeType {
    #[default]
    Beans,
    Ground,
}

impl CoffeeType {
    pub const ALL: [CoffeeType; 2] = [CoffeeType::Beans, CoffeeType::Ground];

    /// Catalog label, as stored in the `type` column
    pub fn label(self) -> &'static str {
        match self {
            CoffeeType::Beans => "Зерна",
            CoffeeType::Ground => "Молотый",
        }
    }
}

impl std::fmt::Display for CoffeeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for CoffeeType {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beans" | "зерна" | "зёрна" => Ok(CoffeeType::Beans),
            "ground" | "молотый" => Ok(CoffeeType::Ground),
            _ => Err(ParseLabelError::Type(s.to_string())),
        }
    }
}

/// A label that is not one of the fixed enumeration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLabelError {
    #[error("unknown roast degree '{0}' (expected light, medium or dark)")]
    Roast(String),

    #[error("unknown coffee type '{0}' (expected beans or ground)")]
    Type(String),
}

impl ToSql for RoastDegree {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.label()))
    }
}

impl FromSql for RoastDegree {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

impl ToSql for CoffeeType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.label()))
    }
}

impl FromSql for CoffeeType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

/// A coffee row as stored in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeeItem {
    pub id: CoffeeId,
    pub name: String,
    pub roast_degree: RoastDegree,
    #[serde(rename = "type")]
    pub coffee_type: CoffeeType,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub volume: f64,
}

/// Field values for an insert or a full update
///
/// The store refuses a non-positive or non-finite `price` or `volume`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCoffee {
    pub name: String,
    pub roast_degree: RoastDegree,
    #[serde(rename = "type")]
    pub coffee_type: CoffeeType,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub volume: f64,
}

impl NewCoffee {
    /// Attach a store-assigned id
    pub fn with_id(self, id: CoffeeId) -> CoffeeItem {
        CoffeeItem {
            id,
            name: self.name,
            roast_degree: self.roast_degree,
            coffee_type: self.coffee_type,
            description: self.description,
            price: self.price,
            volume: self.volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roast_parses_english_and_catalog_labels() {
        assert_eq!("light".parse::<RoastDegree>().unwrap(), RoastDegree::Light);
        assert_eq!("Medium".parse::<RoastDegree>().unwrap(), RoastDegree::Medium);
        assert_eq!("Средняя".parse::<RoastDegree>().unwrap(), RoastDegree::Medium);
        assert_eq!("тёмная".parse::<RoastDegree>().unwrap(), RoastDegree::Dark);
        assert_eq!("Темная".parse::<RoastDegree>().unwrap(), RoastDegree::Dark);
    }

    #[test]
    fn test_roast_rejects_unknown_label() {
        let err = "espresso".parse::<RoastDegree>().unwrap_err();
        assert_eq!(err, ParseLabelError::Roast("espresso".to_string()));
    }

    #[test]
    fn test_type_parses_labels() {
        assert_eq!("beans".parse::<CoffeeType>().unwrap(), CoffeeType::Beans);
        assert_eq!("Зерна".parse::<CoffeeType>().unwrap(), CoffeeType::Beans);
        assert_eq!("GROUND".parse::<CoffeeType>().unwrap(), CoffeeType::Ground);
        assert_eq!("Молотый".parse::<CoffeeType>().unwrap(), CoffeeType::Ground);
        assert!("capsules".parse::<CoffeeType>().is_err());
    }

    #[test]
    fn test_display_uses_catalog_label() {
        assert_eq!(RoastDegree::Light.to_string(), "Светлая");
        assert_eq!(CoffeeType::Ground.to_string(), "Молотый");
    }

    #[test]
    fn test_label_roundtrips_through_from_str() {
        for roast in RoastDegree::ALL {
            assert_eq!(roast.label().parse::<RoastDegree>().unwrap(), roast);
        }
        for kind in CoffeeType::ALL {
            assert_eq!(kind.label().parse::<CoffeeType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_serde_uses_type_key() {
        let item = NewCoffee {
            name: "Test".to_string(),
            roast_degree: RoastDegree::Dark,
            coffee_type: CoffeeType::Ground,
            description: String::new(),
            price: 1.0,
            volume: 2.0,
        }
        .with_id(5);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "ground");
        assert_eq!(json["roast_degree"], "dark");
        assert_eq!(json["id"], 5);
    }
}
