use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate vehicle id: {0}")]
    DuplicateVehicleId(String),

    #[error("Duplicate question id: {0}")]
    DuplicateQuestionId(String),
}
