//! Wallet-connect response handling and widget session state.
//!
//! Wallet libraries answer `connect()` with differently shaped objects. The
//! shape is resolved once, in [`WalletConnectResponse::into_connection`], into
//! an explicit [`WalletConnection`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::format::truncate_address;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletAddressEntry {
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletProfile {
    #[serde(default)]
    pub stx_address: Option<String>,
}

/// Raw object returned by the wallet library's `connect()`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletConnectResponse {
    #[serde(default)]
    pub addresses: Option<Vec<WalletAddressEntry>>,
    #[serde(default)]
    pub profile: Option<WalletProfile>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum WalletError {
    #[error("Wallet returned no address")]
    NoAddress,
    #[error("Wallet library is not available")]
    Unavailable,
    #[error("Wallet request failed: {0}")]
    Rejected(String),
    #[error("Malformed wallet response: {0}")]
    Malformed(String),
}

/// Outcome of a connect attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WalletConnection {
    Connected { address: String },
    Failed { reason: WalletError },
}

impl WalletConnectResponse {
    /// Parse a response; only invalid JSON is an error
    pub fn from_json(json: &str) -> Result<Self, WalletError> {
        let value: Value = serde_json::from_str(json).map_err(|e| WalletError::Malformed(e.to_string()))?;
        Ok(Self::from_value(&value))
    }

    /// Read the known fields leniently. A field holding an unexpected type
    /// counts as absent so that a later fallback can still supply the address.
    pub fn from_value(value: &Value) -> Self {
        let addresses = value.get("addresses").and_then(Value::as_array).map(|entries| {
            entries
                .iter()
                .map(|entry| WalletAddressEntry {
                    address: string_field(entry, "address"),
                })
                .collect()
        });

        let profile = value
            .get("profile")
            .filter(|profile| profile.is_object())
            .map(|profile| WalletProfile {
                stx_address: profile_stx_address(profile),
            });

        Self {
            addresses,
            profile,
            address: string_field(value, "address"),
        }
    }

    /// First usable address, checking `addresses[0].address`,
    /// then `profile.stxAddress`, then `address`
    pub fn into_connection(self) -> WalletConnection {
        let first_entry = self
            .addresses
            .and_then(|entries| entries.into_iter().next())
            .and_then(|entry| entry.address);
        let from_profile = self.profile.and_then(|profile| profile.stx_address);

        match first_entry
            .or(from_profile)
            .or(self.address)
            .filter(|address| !address.is_empty())
        {
            Some(address) => WalletConnection::Connected { address },
            None => WalletConnection::Failed {
                reason: WalletError::NoAddress,
            },
        }
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

// Older wallets report `stxAddress` as `{ "mainnet": .., "testnet": .. }`
fn profile_stx_address(profile: &Value) -> Option<String> {
    let stx_address = profile.get("stxAddress")?;
    match stx_address {
        Value::String(address) => Some(address.clone()),
        Value::Object(_) => string_field(stx_address, "testnet").or_else(|| string_field(stx_address, "mainnet")),
        _ => None,
    }
}

/// State behind the connect button and its dropdown
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletSession {
    pub address: Option<String>,
    pub loading: bool,
    pub menu_open: bool,
    pub copied: bool,
    pub last_error: Option<WalletError>,
}

impl WalletSession {
    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn connect_started(&mut self) {
        self.loading = true;
        self.last_error = None;
    }

    pub fn connect_finished(&mut self, connection: WalletConnection) {
        self.loading = false;
        match connection {
            WalletConnection::Connected { address } => {
                log::info!("Wallet connected: {}", truncate_address(&address));
                self.address = Some(address);
            }
            WalletConnection::Failed { reason } => {
                log::warn!("Wallet connect failed: {}", reason);
                self.address = None;
                self.menu_open = false;
                self.last_error = Some(reason);
            }
        }
    }

    /// Drop the address; the widget returns to its connect button
    pub fn disconnect(&mut self) {
        self.address = None;
        self.menu_open = false;
        self.copied = false;
    }

    pub fn toggle_menu(&mut self) {
        if self.is_connected() {
            self.menu_open = !self.menu_open;
        }
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
