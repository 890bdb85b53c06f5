//! Interpretation of table creation responses.
//!
//! NocoDB answers a create request with `200` and the new table's metadata.
//! Creating a table whose name is taken fails with a 4xx and a free-text
//! message containing "already exists"; that case is benign because the
//! table is already where it should be. Everything else is an error.

use reqwest::StatusCode;
use serde_json::Value;

use crate::error::NocoDbError;

/// Status NocoDB uses for a successful table creation.
pub const CREATED_STATUS: StatusCode = StatusCode::OK;

/// Lowercase marker of a name conflict in an error body.
pub const ALREADY_EXISTS_MARKER: &str = "already exists";

/// Characters of an error body kept for diagnostics.
pub const MAX_ERROR_BODY_CHARS: usize = 500;

/// Non-error result of a table creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The table was created; `id` is absent if the metadata had none.
    Created { id: Option<String> },
    /// A table with this name already exists in the base.
    AlreadyExists,
}

/// Classify a create response from its status and body text.
///
/// # Errors
///
/// - [`NocoDbError::Parse`] for a success status whose body is not a JSON
///   object.
/// - [`NocoDbError::Api`] for any other status, carrying the body cut to
///   [`MAX_ERROR_BODY_CHARS`].
pub fn classify(status: StatusCode, body: &str) -> Result<CreateOutcome, NocoDbError> {
    if status == CREATED_STATUS {
        let meta: Value = serde_json::from_str(body)
            .map_err(|e| NocoDbError::Parse(format!("invalid table metadata: {e}")))?;
        let Value::Object(map) = meta else {
            return Err(NocoDbError::Parse(
                "table metadata is not a JSON object".to_string(),
            ));
        };
        let id = match map.get("id") {
            Some(Value::String(id)) => Some(id.clone()),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => None,
        };
        return Ok(CreateOutcome::Created { id });
    }

    if status.is_client_error() && body.to_lowercase().contains(ALREADY_EXISTS_MARKER) {
        return Ok(CreateOutcome::AlreadyExists);
    }

    Err(NocoDbError::Api {
        status: status.as_u16(),
        message: truncate_body(body),
    })
}

/// Read a create response to completion and classify it.
///
/// # Errors
///
/// Returns [`NocoDbError::Http`] if the body cannot be read, otherwise
/// whatever [`classify`] returns.
pub async fn classify_response(resp: reqwest::Response) -> Result<CreateOutcome, NocoDbError> {
    let status = resp.status();
    let body = resp.text().await?;
    classify(status, &body)
}

/// Keep at most [`MAX_ERROR_BODY_CHARS`] characters of `body`.
#[must_use]
pub fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => body[..cut].to_string(),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[test]
    fn success_with_id_is_created() {
        let outcome = classify(StatusCode::OK, r#"{"id":"tbl_a","title":"Sessions"}"#).unwrap();
        assert_eq!(
            outcome,
            CreateOutcome::Created {
                id: Some("tbl_a".into())
            }
        );
    }

    #[test]
    fn success_without_id_is_created_without_id() {
        let outcome = classify(StatusCode::OK, r#"{"title":"Sessions"}"#).unwrap();
        assert_eq!(outcome, CreateOutcome::Created { id: None });
    }

    #[test]
    fn numeric_id_is_stringified() {
        let outcome = classify(StatusCode::OK, r#"{"id":42}"#).unwrap();
        assert_eq!(
            outcome,
            CreateOutcome::Created {
                id: Some("42".into())
            }
        );
    }

    #[rstest]
    #[case("")]
    #[case("<html>gateway</html>")]
    #[case(r#"["tbl_a"]"#)]
    fn success_with_unreadable_body_is_error(#[case] body: &str) {
        let err = classify(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, NocoDbError::Parse(_)), "got {err:?}");
    }

    #[rstest]
    #[case(400, "Table already exists")]
    #[case(400, "TABLE ALREADY EXISTS")]
    #[case(400, r#"{"msg":"Table 'storyception_beats' already exists"}"#)]
    #[case(409, "table already Exists in base")]
    #[case(422, "Already Exists")]
    fn client_error_mentioning_conflict_is_skipped(#[case] status: u16, #[case] body: &str) {
        let status = StatusCode::from_u16(status).unwrap();
        assert_eq!(classify(status, body).unwrap(), CreateOutcome::AlreadyExists);
    }

    #[rstest]
    #[case(400, "column_name is required")]
    #[case(401, "Unauthorized")]
    #[case(403, "forbidden")]
    #[case(404, "Base not found")]
    #[case(500, "internal error")]
    #[case(500, "table already exists")]
    #[case(201, r#"{"id":"tbl_a"}"#)]
    fn other_statuses_are_errors(#[case] status: u16, #[case] body: &str) {
        let status = StatusCode::from_u16(status).unwrap();
        let err = classify(status, body).unwrap_err();
        match err {
            NocoDbError::Api {
                status: code,
                message,
            } => {
                assert_eq!(code, status.as_u16());
                assert_eq!(message, body);
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[test]
    fn error_body_is_truncated() {
        let body = "x".repeat(2_000);
        let err = classify(StatusCode::INTERNAL_SERVER_ERROR, &body).unwrap_err();
        let NocoDbError::Api { message, .. } = err else {
            panic!("expected API error");
        };
        assert_eq!(message.len(), MAX_ERROR_BODY_CHARS);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = "é".repeat(MAX_ERROR_BODY_CHARS + 10);
        let cut = truncate_body(&body);
        assert_eq!(cut.chars().count(), MAX_ERROR_BODY_CHARS);
        assert_eq!(truncate_body("short"), "short");
    }

    #[tokio::test]
    async fn classify_response_reads_body() {
        let resp = mock_response(200, r#"{"id":"tbl_x"}"#);
        assert_eq!(
            classify_response(resp).await.unwrap(),
            CreateOutcome::Created {
                id: Some("tbl_x".into())
            }
        );
    }

    #[tokio::test]
    async fn classify_response_conflict() {
        let resp = mock_response(400, "Table already exists");
        assert_eq!(
            classify_response(resp).await.unwrap(),
            CreateOutcome::AlreadyExists
        );
    }

    #[tokio::test]
    async fn classify_response_server_error() {
        let resp = mock_response(500, "internal error");
        let err = classify_response(resp).await.unwrap_err();
        assert!(matches!(err, NocoDbError::Api { status: 500, .. }));
    }
}
