//! Wallet identity: address syntax checks and the per-request connected
//! account. Wallet connection state itself lives entirely in the client.

pub mod resolver;

pub use resolver::NameResolver;

use crate::error::{AppError, Result};
use axum::http::HeaderMap;

/// Header carrying the connected wallet address for the active session.
pub const WALLET_ADDRESS_HEADER: &str = "x-wallet-address";

/// Returns true when `input` is a syntactically well-formed account
/// identifier: "0x" followed by exactly 40 hex digits.
pub fn is_wallet_address(input: &str) -> bool {
    match input.strip_prefix("0x") {
        Some(hex) => hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// The connected account supplied with a request, if any.
pub struct WalletIdentity {
    pub address: String,
}

impl WalletIdentity {
    /// Extract the connected wallet address from request headers.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self> {
        let address = headers
            .get(WALLET_ADDRESS_HEADER)
            .and_then(|h| h.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        if !is_wallet_address(address) {
            return Err(AppError::Unauthorized);
        }

        Ok(Self {
            address: address.to_string(),
        })
    }
}
