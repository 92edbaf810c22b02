//! # CarMatch Catalog
//!
//! Shared data model for the recommendation core: the ten lifestyle
//! dimensions, the vehicle and questionnaire records, and the read-only
//! catalogs loaded once at startup.
//!
//! Both user profiles and vehicle fit are expressed as a [`DimensionVector`],
//! a dense vector over the ten [`Dimension`] axes. Keeping the vector
//! fixed-size (rather than an open map) makes the "all ten dimensions are
//! always present" contract structural, so downstream scoring never has to
//! handle a missing axis.

mod catalog;
mod dimension;
mod error;
mod question;
mod vehicle;

pub use catalog::{QuestionCatalog, VehicleCatalog};
pub use dimension::{Dimension, DimensionVector, DIMENSION_COUNT};
pub use error::{CatalogError, Result};
pub use question::{Question, QuestionOption};
pub use vehicle::{BasicInfo, FeatureSet, OwnershipCosts, Specifications, Vehicle};
