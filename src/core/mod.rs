//! Core module - catalog types, storage and orchestration

pub mod coffee;
pub mod config;
pub mod controller;
pub mod store;
pub mod validation;

pub use coffee::{CoffeeId, CoffeeItem, CoffeeType, NewCoffee, ParseLabelError, RoastDegree};
pub use config::Config;
pub use controller::{CatalogController, CatalogError, CatalogView, DeleteOutcome};
pub use store::{CoffeeStore, SchemaReport, StoreError};
pub use validation::{CoffeeForm, ValidationError};
