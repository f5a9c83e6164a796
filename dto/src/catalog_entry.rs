use derive_getters::Getters;
use serde::{Deserialize, Deserializer, Serialize};

/// A single option of one of the cascading academic dropdowns.
/// The backend sends numeric ids for persisted entities and string ids for
/// synthesized ones (e.g. generic year levels), hence the lenient id field.
#[derive(Debug, Getters, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct CatalogEntry {
    #[serde(deserialize_with = "deserialize_id")]
    id: String,
    nom: String,
}

impl CatalogEntry {
    pub fn new(id: String, nom: String) -> Self {
        Self { id, nom }
    }
}

pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(number) => number.to_string(),
        RawId::Text(text) => text,
    })
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub fn get_test_entries() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("1".to_owned(), "Université de Ouagadougou".to_owned()),
            CatalogEntry::new("2".to_owned(), "Université Nazi Boni".to_owned()),
        ]
    }

    #[test]
    fn should_deserialize_numeric_id() {
        let entry: CatalogEntry = serde_json::from_str(r#"{"id":5,"nom":"Informatique"}"#).unwrap();
        assert_eq!("5", entry.id());
        assert_eq!("Informatique", entry.nom());
    }

    #[test]
    fn should_deserialize_text_id() {
        let entry: CatalogEntry =
            serde_json::from_str(r#"{"id":"niveau-1","nom":"1ère année"}"#).unwrap();
        assert_eq!("niveau-1", entry.id());
    }
}
