//! Search error types.

use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur while fetching search results.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The search API answered with a non-success status.
    ///
    /// `body` is the error document GitHub returned, re-encoded as JSON.
    #[error("GitHub API error {status}: {body}")]
    Transport { status: u16, body: String },

    /// The request could not be completed or its response decoded.
    #[error("GitHub client error: {0}")]
    Http(#[source] octocrab::Error),
}

impl From<octocrab::Error> for FetchError {
    fn from(error: octocrab::Error) -> Self {
        match error {
            octocrab::Error::GitHub { source, .. } => transport_error(
                source.status_code.as_u16(),
                &source.message,
                source.errors.as_deref(),
                source.documentation_url.as_deref(),
            ),
            other => Self::Http(other),
        }
    }
}

/// Rebuilds the GitHub error document, leaving out absent fields.
fn transport_error(
    status: u16,
    message: &str,
    errors: Option<&[Value]>,
    documentation_url: Option<&str>,
) -> FetchError {
    let mut body = Map::new();
    body.insert("message".to_string(), Value::from(message));
    if let Some(errors) = errors {
        body.insert("errors".to_string(), Value::from(errors.to_vec()));
    }
    if let Some(url) = documentation_url {
        body.insert("documentation_url".to_string(), Value::from(url));
    }

    FetchError::Transport {
        status,
        body: Value::Object(body).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validation_failure_keeps_errors_and_docs() {
        let errors = [json!({
            "resource": "Search",
            "field": "q",
            "code": "invalid",
            "message": "The search contains only logical operators"
        })];

        let error = transport_error(
            422,
            "Validation Failed",
            Some(&errors),
            Some("https://docs.github.com/v3/search/"),
        );

        let FetchError::Transport { status, body } = error else {
            panic!("expected a transport error");
        };
        assert_eq!(status, 422);
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["message"], "Validation Failed");
        assert_eq!(body["errors"][0]["field"], "q");
        assert_eq!(body["errors"][0]["code"], "invalid");
        assert_eq!(body["documentation_url"], "https://docs.github.com/v3/search/");
    }

    #[test]
    fn bare_message_has_no_extra_fields() {
        let error = transport_error(403, "API rate limit exceeded", None, None);

        assert_eq!(
            error.to_string(),
            r#"GitHub API error 403: {"message":"API rate limit exceeded"}"#
        );
    }
}
