use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    /// Startup/configuration failure; nothing can be ranked
    #[error("Vehicle catalog is empty")]
    EmptyCatalog,

    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("Invalid score weights: {0}")]
    InvalidWeights(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
