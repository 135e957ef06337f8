// Built-in deps
use std::time::Duration;
// External uses
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
// Local uses
use crate::error::WalletGenError;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Answers which shard a public key belongs to. Shard membership is decided
/// by the network, never computed locally.
#[async_trait]
pub trait ShardResolver {
    async fn resolve(&mut self, public_key: &str) -> Result<u32, WalletGenError>;
}

/// Account metadata returned by the shard-lookup service. Fields other than
/// `shard` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub shard: u32,
}

/// Resolver backed by the network's account-lookup HTTP endpoint.
///
/// Transport failures, timeouts and non-2xx statuses are all reported as
/// `Network` without distinction; only a well-formed response with an
/// unreadable body is `Parse`. No caching and no internal retry, the
/// orchestrator drives all repetition.
#[derive(Debug, Clone)]
pub struct HttpShardResolver {
    client: reqwest::Client,
    base_url: String,
}

impl HttpShardResolver {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl ShardResolver for HttpShardResolver {
    async fn resolve(&mut self, public_key: &str) -> Result<u32, WalletGenError> {
        let query = format!(
            "{}/accounts/{}",
            self.base_url.trim_end_matches('/'),
            public_key
        );

        let response = self
            .client
            .get(&query)
            .header("accept", "application/json")
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| WalletGenError::network(err))?;

        let account = response
            .json::<AccountResponse>()
            .await
            .map_err(|err| WalletGenError::parse(err))?;

        Ok(account.shard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shard_field_is_decoded() {
        let body = r#"{"address":"addr1qtayq3f8","balance":"0","nonce":0,"shard":2}"#;
        let account: AccountResponse = serde_json::from_str(body).unwrap();
        assert_eq!(account.shard, 2);
    }

    #[test]
    fn missing_shard_field_fails_decoding() {
        let body = r#"{"address":"addr1qtayq3f8","balance":"0"}"#;
        assert!(serde_json::from_str::<AccountResponse>(body).is_err());
    }

    #[test]
    fn non_integer_shard_fails_decoding() {
        let body = r#"{"shard":"two"}"#;
        assert!(serde_json::from_str::<AccountResponse>(body).is_err());
    }
}
