//! HTTP implementation of [`BackendStore`] against a PostgREST-style API.

use async_trait::async_trait;
use reqwest::Client;
use std::env;
use tracing::debug;

use super::{BackendError, BackendStore, BusinessUser, RowQuery, SignUpRequest, UserPatch};
use crate::config::BackendConfig;

const USERS_TABLE: &str = "business_users";

/// REST client for the hosted backend.
pub struct HttpBackend {
    base_url: String,
    api_key: String,
    client: Client,
}

impl HttpBackend {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client: Client::new(),
        }
    }

    /// Create from the environment, falling back to the `[backend]` config
    /// section. SKORE_BACKEND_URL and SKORE_BACKEND_KEY win when set; the
    /// key is sent as a bearer token.
    pub fn from_config(cfg: &BackendConfig) -> Result<Self, BackendError> {
        let (url, key) = Self::resolve_credentials(
            cfg,
            env::var("SKORE_BACKEND_URL").unwrap_or_default(),
            env::var("SKORE_BACKEND_KEY").unwrap_or_default(),
        )?;
        Ok(Self::new(url, key))
    }

    fn resolve_credentials(
        cfg: &BackendConfig,
        env_url: String,
        env_key: String,
    ) -> Result<(String, String), BackendError> {
        let url = if env_url.is_empty() {
            cfg.url.clone()
        } else {
            env_url
        };
        let key = if env_key.is_empty() {
            cfg.key.clone()
        } else {
            env_key
        };
        if url.is_empty() || key.is_empty() {
            return Err(BackendError::NotConfigured);
        }
        Ok((url, key))
    }

    fn users_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, USERS_TABLE)
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(BackendError::Status {
            code: status.as_u16(),
            body,
        })
    }

    /// Query string for a listing: optional name/email filter plus ordering.
    fn list_params(query: &RowQuery) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if !query.search.is_empty() {
            params.push((
                "or".to_string(),
                format!(
                    "(full_name.ilike.*{0}*,email.ilike.*{0}*)",
                    query.search
                ),
            ));
        }
        let column = query.order_by.as_deref().unwrap_or("id");
        let direction = if query.descending { "desc" } else { "asc" };
        params.push(("order".to_string(), format!("{}.{}", column, direction)));
        params
    }
}

#[async_trait]
impl BackendStore for HttpBackend {
    fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.api_key.is_empty()
    }

    async fn list_users(&self, query: &RowQuery) -> Result<Vec<BusinessUser>, BackendError> {
        let params = Self::list_params(query);
        debug!(?params, "listing business users");
        let response = self
            .request(self.client.get(self.users_url()).query(&params))
            .send()
            .await?;
        Ok(Self::check_status(response).await?.json().await?)
    }

    async fn create_user(&self, req: &SignUpRequest) -> Result<BusinessUser, BackendError> {
        let response = self
            .request(self.client.post(self.users_url()).json(req))
            .header("Prefer", "return=representation")
            .send()
            .await?;
        let mut rows: Vec<BusinessUser> = Self::check_status(response).await?.json().await?;
        rows.pop().ok_or(BackendError::Status {
            code: 200,
            body: "insert returned no rows".to_string(),
        })
    }

    async fn update_user(&self, id: u64, patch: &UserPatch) -> Result<BusinessUser, BackendError> {
        let response = self
            .request(
                self.client
                    .patch(self.users_url())
                    .query(&[("id", format!("eq.{}", id))])
                    .json(patch),
            )
            .header("Prefer", "return=representation")
            .send()
            .await?;
        let mut rows: Vec<BusinessUser> = Self::check_status(response).await?.json().await?;
        rows.pop().ok_or(BackendError::Status {
            code: 404,
            body: format!("no user with id {}", id),
        })
    }

    async fn delete_user(&self, id: u64) -> Result<(), BackendError> {
        let response = self
            .request(
                self.client
                    .delete(self.users_url())
                    .query(&[("id", format!("eq.{}", id))]),
            )
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_include_order_default() {
        let params = HttpBackend::list_params(&RowQuery::default());
        assert_eq!(params, vec![("order".to_string(), "id.asc".to_string())]);
    }

    #[test]
    fn test_list_params_with_search_and_sort() {
        let query = RowQuery {
            search: "acme".to_string(),
            order_by: Some("full_name".to_string()),
            descending: true,
        };
        let params = HttpBackend::list_params(&query);
        assert!(params[0].1.contains("full_name.ilike.*acme*"));
        assert_eq!(params[1].1, "full_name.desc");
    }

    #[test]
    fn test_env_credentials_win_over_config() {
        let cfg = BackendConfig {
            url: "https://file.example.com".to_string(),
            key: "file-key".to_string(),
        };
        let (url, key) = HttpBackend::resolve_credentials(
            &cfg,
            "https://env.example.com".to_string(),
            "env-key".to_string(),
        )
        .unwrap();
        assert_eq!(url, "https://env.example.com");
        assert_eq!(key, "env-key");
    }

    #[test]
    fn test_config_fills_in_when_env_is_unset() {
        let cfg = BackendConfig {
            url: "https://file.example.com".to_string(),
            key: "file-key".to_string(),
        };
        let (url, key) =
            HttpBackend::resolve_credentials(&cfg, String::new(), String::new()).unwrap();
        assert_eq!(url, "https://file.example.com");
        assert_eq!(key, "file-key");
    }

    #[test]
    fn test_missing_credentials_everywhere_is_not_configured() {
        let err = HttpBackend::resolve_credentials(
            &BackendConfig::default(),
            String::new(),
            String::new(),
        )
        .unwrap_err();
        assert!(matches!(err, BackendError::NotConfigured));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let backend = HttpBackend::new("https://api.example.com/".to_string(), "k".to_string());
        assert_eq!(
            backend.users_url(),
            "https://api.example.com/rest/v1/business_users"
        );
    }
}
