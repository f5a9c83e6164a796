use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// JSON body of `POST /candidature/create`. Only `success` is guaranteed;
/// the other fields depend on the outcome.
#[derive(Debug, Getters, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct SubmissionResponse {
    success: bool,
    message: Option<String>,
    redirect_url: Option<String>,
    numero_candidature: Option<String>,
}

impl SubmissionResponse {
    pub fn new(
        success: bool,
        message: Option<String>,
        redirect_url: Option<String>,
        numero_candidature: Option<String>,
    ) -> Self {
        Self {
            success,
            message,
            redirect_url,
            numero_candidature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_success_response() {
        let response: SubmissionResponse = serde_json::from_str(
            r#"{"success":true,"redirect_url":"/ok","numero_candidature":"CAND-2025-00042"}"#,
        )
        .unwrap();

        assert!(*response.success());
        assert_eq!(Some("/ok".to_owned()), *response.redirect_url());
        assert_eq!(None, *response.message());
    }
}
