use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One entry of the `documents_metadata` JSON sidecar attached to the
/// multipart submission, describing a staged file.
#[derive(Debug, Getters, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct DocumentMetadata {
    type_document: String,
    nom_fichier: String,
    taille: u64,
    type_mime: String,
}

impl DocumentMetadata {
    pub fn new(type_document: String, nom_fichier: String, taille: u64, type_mime: String) -> Self {
        Self {
            type_document,
            nom_fichier,
            taille,
            type_mime,
        }
    }
}
