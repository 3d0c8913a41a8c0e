//! OAuth-signed REST client for Candlepin.
//!
//! Every request is signed with two-legged OAuth 1.0a (HMAC-SHA1) using a
//! fixed consumer key/secret pair and carries a `cp-user` header naming
//! the acting admin.
//!
//! # Response contract
//!
//! - 404 → [`CandlepinError::NotFound`], which callers may treat as absence
//! - any status other than 200/204 → [`CandlepinError::RequestFailed`]
//! - a body is parsed as JSON or returned raw, per [`ResponseFormat`]
//! - no body → [`Payload::Empty`]
//!
//! # Example
//!
//! ```no_run
//! use splice_candlepin::{CandlepinClient, CandlepinConfig};
//!
//! # async fn run() -> splice_candlepin::CandlepinResult<()> {
//! let client = CandlepinClient::new(CandlepinConfig {
//!     base_url: "https://candlepin.example.com:8443/candlepin".to_string(),
//!     ..Default::default()
//! })?;
//!
//! for owner in client.get_owners().await? {
//!     println!("{}", owner.key);
//! }
//! # Ok(())
//! # }
//! ```

mod catalog;
mod client;
mod config;
mod consumers;
mod error;
pub mod oauth;
mod owners;

pub use client::{CandlepinClient, Payload, ResponseFormat, ADMIN_USER_HEADER};
pub use config::CandlepinConfig;
pub use consumers::{ConsumerUpdate, NewConsumer, SYSTEM_CONSUMER_TYPE};
pub use error::{CandlepinError, CandlepinResult, CreateStep};
