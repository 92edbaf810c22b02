use crate::error::{CatalogError, Result};
use crate::question::Question;
use crate::vehicle::Vehicle;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Read-only vehicle collection, loaded once and shared across sessions.
///
/// Insertion order is preserved; the match engine uses it as the final
/// ranking tie-break.
#[derive(Debug, Clone)]
pub struct VehicleCatalog {
    vehicles: Vec<Vehicle>,
    by_id: HashMap<String, usize>,
}

#[derive(Deserialize)]
struct VehicleFile {
    vehicles: Vec<Vehicle>,
}

impl VehicleCatalog {
    /// Build a catalog from records, rejecting duplicate ids
    pub fn new(vehicles: Vec<Vehicle>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(vehicles.len());
        for (idx, vehicle) in vehicles.iter().enumerate() {
            if by_id.insert(vehicle.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateVehicleId(vehicle.id.clone()));
            }
        }
        Ok(Self { vehicles, by_id })
    }

    /// Parse a `{"vehicles": [...]}` document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: VehicleFile = serde_json::from_str(json)?;
        Self::new(file.vehicles)
    }

    /// Load from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&data)?;
        log::info!("Loaded {} vehicles from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Look up a vehicle by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Vehicle> {
        self.by_id.get(id).map(|&idx| &self.vehicles[idx])
    }

    /// All vehicles in insertion order
    #[must_use]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

/// Read-only questionnaire, loaded once at startup
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    by_id: HashMap<String, usize>,
}

#[derive(Deserialize)]
struct QuestionFile {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Build a questionnaire from records, rejecting duplicate ids
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(questions.len());
        for (idx, question) in questions.iter().enumerate() {
            if by_id.insert(question.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateQuestionId(question.id.clone()));
            }
        }
        Ok(Self { questions, by_id })
    }

    /// Parse a `{"questions": [...]}` document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: QuestionFile = serde_json::from_str(json)?;
        Self::new(file.questions)
    }

    /// Load from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&data)?;
        log::info!("Loaded {} questions from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Look up a question by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.by_id.get(id).map(|&idx| &self.questions[idx])
    }

    /// All questions in display order
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
