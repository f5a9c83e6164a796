use crate::catalog_entry::{CatalogEntry, deserialize_id};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A program (filière) option. Same shape as [`CatalogEntry`] plus the
/// program duration in years, used to synthesize generic levels when the
/// backend declares none.
#[derive(Debug, Getters, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct ProgramEntry {
    #[serde(deserialize_with = "deserialize_id")]
    id: String,
    nom: String,
    duree_annees: Option<u8>,
}

impl ProgramEntry {
    pub fn new(id: String, nom: String, duree_annees: Option<u8>) -> Self {
        Self {
            id,
            nom,
            duree_annees,
        }
    }

    pub fn to_catalog_entry(&self) -> CatalogEntry {
        CatalogEntry::new(self.id.clone(), self.nom.clone())
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub fn get_test_programs() -> Vec<ProgramEntry> {
        vec![
            ProgramEntry::new("7".to_owned(), "Génie logiciel".to_owned(), Some(3)),
            ProgramEntry::new("8".to_owned(), "Réseaux".to_owned(), None),
        ]
    }

    #[test]
    fn should_deserialize_without_duration() {
        let program: ProgramEntry = serde_json::from_str(r#"{"id":7,"nom":"Réseaux"}"#).unwrap();
        assert_eq!(None, *program.duree_annees());
    }
}
