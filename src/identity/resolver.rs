//! Name-to-address resolution against two external lookup services.
//!
//! Resolution degrades to "unresolved" on any transport failure, timeout,
//! or malformed response. A registration attempt must never crash because
//! a third-party resolver is down.

use super::is_wallet_address;
use crate::config::ResolverConfig;
use serde::Deserialize;
use std::time::Duration;

/// Suffix handled by the profile resolver (checked before the ENS suffix,
/// which it also matches).
const PROFILE_SUFFIX: &str = ".base.eth";
/// Suffix handled by the ENS resolver.
const ENS_SUFFIX: &str = ".eth";

/// Shape shared by both resolver services: a JSON object with an optional
/// `address` field. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct ResolverResponse {
    address: Option<String>,
}

pub struct NameResolver {
    http: reqwest::Client,
    ens_endpoint: String,
    profile_endpoint: String,
}

impl NameResolver {
    pub fn new(config: &ResolverConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client for name resolution");

        Self {
            http,
            ens_endpoint: config.ens_endpoint.trim_end_matches('/').to_string(),
            profile_endpoint: config.profile_endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a user-entered identifier to a wallet address.
    ///
    /// A well-formed address is returned unchanged without any network call.
    /// Name handles are tried against the matching resolver(s); a name
    /// ending in ".base.eth" falls through to the ENS resolver when the
    /// profile resolver yields nothing. Returns `None` when unresolved.
    pub async fn resolve(&self, input: &str) -> Option<String> {
        if input.is_empty() {
            return None;
        }

        if is_wallet_address(input) {
            return Some(input.to_string());
        }

        if input.ends_with(PROFILE_SUFFIX) {
            if let Some(address) = self.lookup(&self.profile_endpoint, input).await {
                return Some(address);
            }
        }

        if input.ends_with(ENS_SUFFIX) {
            if let Some(address) = self.lookup(&self.ens_endpoint, input).await {
                return Some(address);
            }
        }

        None
    }

    async fn lookup(&self, endpoint: &str, name: &str) -> Option<String> {
        let url = format!("{}/{}", endpoint, name);

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Name resolution request to {} failed: {}", url, e);
                return None;
            }
        };

        let body: ResolverResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Name resolution response from {} malformed: {}", url, e);
                return None;
            }
        };

        body.address.filter(|address| is_wallet_address(address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_resolver() -> NameResolver {
        // Nothing listens on the discard port; lookups fail fast.
        NameResolver::new(&ResolverConfig {
            ens_endpoint: "http://127.0.0.1:9/ens/resolve".to_string(),
            profile_endpoint: "http://127.0.0.1:9/profile".to_string(),
            timeout_secs: 1,
        })
    }

    #[tokio::test]
    async fn test_well_formed_address_passes_through() {
        let resolver = unreachable_resolver();
        let address = "0x3333333333333333333333333333333333333333";

        // No network call happens, so the unreachable endpoints don't matter.
        assert_eq!(resolver.resolve(address).await.as_deref(), Some(address));
    }

    #[tokio::test]
    async fn test_unreachable_resolver_yields_none() {
        let resolver = unreachable_resolver();

        assert_eq!(resolver.resolve("alice.eth").await, None);
        assert_eq!(resolver.resolve("bob.base.eth").await, None);
    }

    #[tokio::test]
    async fn test_unrecognized_input_yields_none() {
        let resolver = unreachable_resolver();

        assert_eq!(resolver.resolve("").await, None);
        assert_eq!(resolver.resolve("not a name").await, None);
        assert_eq!(resolver.resolve("alice.sol").await, None);
    }
}
