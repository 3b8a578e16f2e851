use crate::core::fees::FeeRange;
use crate::models::School;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the school catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Immutable collection of school records
///
/// Built once at startup and shared read-only by every request.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    schools: Vec<School>,
}

impl Catalog {
    pub fn new(schools: Vec<School>) -> Self {
        Self { schools }
    }

    /// Parse a catalog from a JSON array of school objects
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let schools: Vec<School> = serde_json::from_str(json)?;
        let catalog = Self::new(schools);
        catalog.report_malformed_fees();
        Ok(catalog)
    }

    /// Read and parse the catalog file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.display().to_string(),
                source,
            })?;

        let catalog = Self::from_json_str(&json)?;

        tracing::info!("Loaded {} schools from {}", catalog.len(), path.display());

        Ok(catalog)
    }

    pub fn schools(&self) -> &[School] {
        &self.schools
    }

    pub fn len(&self) -> usize {
        self.schools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }

    // Malformed entries are kept; they just never satisfy the fee criterion.
    fn report_malformed_fees(&self) {
        for school in &self.schools {
            if let Err(e) = FeeRange::parse(&school.fees) {
                tracing::warn!(
                    "School at {} has unusable fees '{}': {}",
                    school.address,
                    school.fees,
                    e
                );
            }
        }
    }
}
