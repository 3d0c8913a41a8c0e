//! Rules, products and pools.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::Method;
use splice_transform::{translate_pools, translate_products};
use splice_types::{Pool, Product, Rules, Translation};
use tracing::{debug, warn};

use crate::client::{CandlepinClient, ResponseFormat};
use crate::error::{CandlepinError, CandlepinResult};

impl CandlepinClient {
    /// Fetches the rule engine script.
    ///
    /// Candlepin serves it base64-encoded; the decoded bytes are wrapped
    /// with the fixed client-side version.
    pub async fn get_rules(&self) -> CandlepinResult<Rules> {
        let payload = self
            .request("/rules", Method::GET, None, ResponseFormat::Raw)
            .await?;
        let Some(encoded) = payload.into_raw() else {
            return Err(CandlepinError::UnexpectedResponse(
                "empty rules payload".to_string(),
            ));
        };

        let data = BASE64.decode(strip_rules_encoding(&encoded))?;
        debug!("Fetched rules ({} bytes)", data.len());
        Ok(Rules::new(data))
    }

    /// Fetches and translates every product.
    pub async fn get_products(&self) -> CandlepinResult<Translation<Product>> {
        let items = self.request_list("/products").await?;
        let batch = translate_products(&items);
        for rejected in &batch.rejected {
            warn!("Skipping product: {}", rejected);
        }
        Ok(batch)
    }

    /// Fetches and translates every pool.
    pub async fn get_pools(&self) -> CandlepinResult<Translation<Pool>> {
        let items = self.request_list("/pools").await?;
        let batch = translate_pools(&items);
        for rejected in &batch.rejected {
            warn!("Skipping pool: {}", rejected);
        }
        Ok(batch)
    }
}

// Line breaks and JSON string quoting are not part of the encoding.
fn strip_rules_encoding(encoded: &str) -> String {
    encoded
        .trim()
        .trim_matches('"')
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .replace("\\n", "")
}

#[cfg(test)]
mod tests {
    use super::strip_rules_encoding;

    #[test]
    fn strips_whitespace_and_quotes() {
        assert_eq!(strip_rules_encoding("\"YWJj\nZGVm\"\n"), "YWJjZGVm");
    }

    #[test]
    fn strips_escaped_newlines() {
        assert_eq!(strip_rules_encoding("\"YWJj\\nZGVm\""), "YWJjZGVm");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(strip_rules_encoding("YWJjZGVm"), "YWJjZGVm");
    }
}
