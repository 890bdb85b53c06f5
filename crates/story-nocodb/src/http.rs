//! Shared HTTP response helpers.

use crate::classify::truncate_body;
use crate::error::NocoDbError;

/// Header NocoDB reads the API token from.
pub const TOKEN_HEADER: &str = "xc-token";

/// Pass a success response through, turn anything else into
/// [`NocoDbError::Api`] with the (truncated) body as message.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, NocoDbError> {
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(error) => {
                tracing::debug!(status, %error, "failed to read error response body");
                String::new()
            }
        };
        return Err(NocoDbError::Api {
            status,
            message: truncate_body(&body),
        });
    }
    Ok(resp)
}
