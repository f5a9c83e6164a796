pub mod catalog_entry;
pub mod catalog_response;
pub mod document_metadata;
pub mod document_requirement;
pub mod program_entry;
pub mod submission_response;
