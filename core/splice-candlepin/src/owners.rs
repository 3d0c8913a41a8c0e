//! Organization ("owner") operations.

use reqwest::Method;
use serde_json::json;
use splice_types::Owner;
use tracing::info;

use crate::client::CandlepinClient;
use crate::error::CandlepinResult;
use crate::oauth::percent_encode;

impl CandlepinClient {
    /// Lists every owner.
    pub async fn get_owners(&self) -> CandlepinResult<Vec<Owner>> {
        self.request_json("/owners", Method::GET, None).await
    }

    /// Creates an owner, with an optional display name.
    pub async fn create_owner(&self, key: &str, display_name: Option<&str>) -> CandlepinResult<Owner> {
        let mut params = json!({ "key": key });
        if let Some(name) = display_name.filter(|n| !n.is_empty()) {
            params["displayName"] = json!(name);
        }

        let owner: Owner = self.request_json("/owners", Method::POST, Some(&params)).await?;
        info!("Created owner {}", owner.key);
        Ok(owner)
    }

    /// Deletes an owner by key.
    pub async fn delete_owner(&self, key: &str) -> CandlepinResult<()> {
        let path = format!("/owners/{}", percent_encode(key));
        self.request_unit(&path, Method::DELETE, None).await?;
        info!("Deleted owner {}", key);
        Ok(())
    }
}
