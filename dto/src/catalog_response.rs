use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Envelope shared by every catalog endpoint:
/// `{ success, results: [...], count }`. `results` and `count` are absent on
/// failure responses.
#[derive(Debug, Getters, PartialEq, Serialize, Deserialize, Clone)]
pub struct CatalogResponse<T> {
    success: bool,
    results: Option<Vec<T>>,
    count: Option<u32>,
}

impl<T> CatalogResponse<T> {
    pub fn new(success: bool, results: Option<Vec<T>>, count: Option<u32>) -> Self {
        Self {
            success,
            results,
            count,
        }
    }

    pub fn into_results(self) -> Vec<T> {
        self.results.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_entry::CatalogEntry;

    #[test]
    fn should_deserialize_success_envelope() {
        let response: CatalogResponse<CatalogEntry> =
            serde_json::from_str(r#"{"success":true,"results":[{"id":5,"nom":"Informatique"}],"count":1}"#)
                .unwrap();

        assert!(*response.success());
        assert_eq!(Some(1), *response.count());
        assert_eq!(1, response.into_results().len());
    }

    #[test]
    fn should_deserialize_failure_envelope_without_results() {
        let response: CatalogResponse<CatalogEntry> =
            serde_json::from_str(r#"{"success":false}"#).unwrap();

        assert!(!*response.success());
        assert!(response.into_results().is_empty());
    }
}
