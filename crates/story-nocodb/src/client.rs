//! NocoDB meta API client.

use serde::{Deserialize, Serialize};
use story_config::NocoDbConfig;
use story_schema::TableDef;

use crate::classify::{CreateOutcome, classify_response};
use crate::error::NocoDbError;
use crate::http::{TOKEN_HEADER, check_response};

/// Table metadata as listed by `GET /api/v2/meta/bases/{base_id}/tables`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMeta {
    pub id: String,
    pub table_name: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Deserialize)]
struct TableList {
    #[serde(default)]
    list: Vec<TableMeta>,
}

/// HTTP client bound to one NocoDB base.
pub struct NocoDbClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl NocoDbClient {
    /// Build a client from connection settings.
    ///
    /// The token is sent as-is; an empty token produces unauthenticated
    /// requests that the server rejects per table.
    ///
    /// # Errors
    ///
    /// Returns [`NocoDbError::Client`] if the HTTP client cannot be built.
    pub fn new(config: &NocoDbConfig) -> Result<Self, NocoDbError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("storyception-setup/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()
            .map_err(NocoDbError::Client)?;

        Ok(Self {
            http,
            endpoint: config.tables_endpoint(),
            token: config.api_token.clone(),
        })
    }

    /// `{base_url}/api/v2/meta/bases/{base_id}/tables`
    #[must_use]
    pub fn tables_endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one table creation request.
    ///
    /// # Errors
    ///
    /// Returns [`NocoDbError`] on transport failure (including timeout),
    /// an unreadable success body, or a status other than success or a
    /// name conflict.
    pub async fn create_table(&self, table: &TableDef) -> Result<CreateOutcome, NocoDbError> {
        tracing::debug!(table = table.table_name, url = %self.endpoint, "creating table");

        let resp = self
            .http
            .post(&self.endpoint)
            .header(TOKEN_HEADER, &self.token)
            .json(table)
            .send()
            .await?;

        tracing::debug!(table = table.table_name, status = %resp.status(), "create response");
        classify_response(resp).await
    }

    /// List the tables that exist in the base.
    ///
    /// # Errors
    ///
    /// Returns [`NocoDbError`] if the request fails, NocoDB returns a
    /// non-success status, or the listing cannot be parsed.
    pub async fn list_tables(&self) -> Result<Vec<TableMeta>, NocoDbError> {
        tracing::debug!(url = %self.endpoint, "listing tables");

        let resp = check_response(
            self.http
                .get(&self.endpoint)
                .header(TOKEN_HEADER, &self.token)
                .send()
                .await?,
        )
        .await?;

        let body = resp.text().await?;
        let data: TableList = serde_json::from_str(&body)
            .map_err(|e| NocoDbError::Parse(format!("invalid table listing: {e}")))?;
        Ok(data.list)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FIXTURE: &str = r#"{
        "list": [
            {
                "id": "m1icipflxgrce6y",
                "table_name": "storyception_sessions",
                "title": "Storyception Sessions",
                "type": "table",
                "meta": null
            },
            {
                "id": "ms4mo8ekjtrqz48",
                "table_name": "storyception_beats",
                "title": "Storyception Beats"
            }
        ],
        "pageInfo": {"isFirstPage": true, "isLastPage": true}
    }"#;

    #[test]
    fn parse_table_listing() {
        let data: TableList = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(data.list.len(), 2);
        assert_eq!(
            data.list[0],
            TableMeta {
                id: "m1icipflxgrce6y".into(),
                table_name: "storyception_sessions".into(),
                title: "Storyception Sessions".into(),
            }
        );
    }

    #[test]
    fn empty_listing() {
        let data: TableList = serde_json::from_str(r#"{"pageInfo": {}}"#).unwrap();
        assert!(data.list.is_empty());
    }

    #[test]
    fn client_uses_configured_endpoint() {
        let config = NocoDbConfig {
            base_url: "http://127.0.0.1:9/".into(),
            base_id: "p_test".into(),
            ..Default::default()
        };
        let client = NocoDbClient::new(&config).unwrap();
        assert_eq!(
            client.tables_endpoint(),
            "http://127.0.0.1:9/api/v2/meta/bases/p_test/tables"
        );
    }

    #[tokio::test]
    #[ignore] // requires network and NOCODB_API_TOKEN
    async fn live_list_tables() {
        let config = NocoDbConfig {
            api_token: std::env::var("NOCODB_API_TOKEN").unwrap_or_default(),
            ..Default::default()
        };
        let client = NocoDbClient::new(&config).unwrap();
        match client.list_tables().await {
            Ok(tables) => {
                for t in tables {
                    println!("  {} {} ({})", t.id, t.table_name, t.title);
                }
            }
            Err(e) => println!("ERROR: {}", e.detail()),
        }
    }
}
