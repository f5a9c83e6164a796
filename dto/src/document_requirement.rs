use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A server-declared upload rule for a given program. Read-only on the
/// client; field names follow the backend contract.
#[derive(Debug, Getters, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct DocumentRequirement {
    type_document: String,
    nom: String,
    description: Option<String>,
    est_obligatoire: bool,
    formats_autorises: Vec<String>,
    taille_maximale: u64,
}

impl DocumentRequirement {
    pub fn new(
        type_document: String,
        nom: String,
        description: Option<String>,
        est_obligatoire: bool,
        formats_autorises: Vec<String>,
        taille_maximale: u64,
    ) -> Self {
        Self {
            type_document,
            nom,
            description,
            est_obligatoire,
            formats_autorises,
            taille_maximale,
        }
    }
}

/// `GET /documents-required/{programId}` envelope:
/// `{ success, data: { documents_requis: [...], total } }`.
#[derive(Debug, Getters, PartialEq, Serialize, Deserialize, Clone)]
pub struct DocumentsRequiredResponse {
    success: bool,
    data: Option<DocumentsRequiredData>,
}

#[derive(Debug, Getters, PartialEq, Serialize, Deserialize, Clone)]
pub struct DocumentsRequiredData {
    documents_requis: Vec<DocumentRequirement>,
    total: u32,
}

impl DocumentsRequiredResponse {
    pub fn new(success: bool, data: Option<DocumentsRequiredData>) -> Self {
        Self { success, data }
    }

    pub fn into_requirements(self) -> Vec<DocumentRequirement> {
        self.data
            .map(|data| data.documents_requis)
            .unwrap_or_default()
    }
}

impl DocumentsRequiredData {
    pub fn new(documents_requis: Vec<DocumentRequirement>, total: u32) -> Self {
        Self {
            documents_requis,
            total,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub const ONE_MEGABYTE: u64 = 1024 * 1024;

    pub fn get_test_requirement(type_document: &str, est_obligatoire: bool) -> DocumentRequirement {
        DocumentRequirement::new(
            type_document.to_owned(),
            format!("Document {type_document}"),
            None,
            est_obligatoire,
            vec!["pdf".to_owned(), "jpg".to_owned()],
            2 * ONE_MEGABYTE,
        )
    }

    #[test]
    fn should_deserialize_documents_required_response() {
        let body = r#"{
            "success": true,
            "data": {
                "documents_requis": [{
                    "type_document": "releve_notes",
                    "nom": "Relevé de notes",
                    "description": "Dernier relevé de notes obtenu",
                    "est_obligatoire": true,
                    "formats_autorises": ["pdf"],
                    "taille_maximale": 2097152
                }],
                "total": 1
            }
        }"#;

        let response: DocumentsRequiredResponse = serde_json::from_str(body).unwrap();
        let requirements = response.into_requirements();

        assert_eq!(1, requirements.len());
        assert_eq!("releve_notes", requirements[0].type_document());
        assert!(*requirements[0].est_obligatoire());
    }
}
