use anyhow::{anyhow, Context, Result};
use std::time::Duration;

use crate::address::Address;
use crate::ens::ENS_REGISTRY;
use crate::network::Network;

const DEFAULT_ORACLE_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone)]
pub struct ScreenerConfig {
    pub rpc_url: String,
    pub network: Network,
    pub oracle: Address,
    pub ens_registry: Address,
    pub oracle_timeout: Duration,
}

impl ScreenerConfig {
    /// Read configuration from the environment. Address and chain id
    /// variables must parse when set; the timeout falls back to its default.
    pub fn from_env() -> Result<Self> {
        let chain_id: u64 = match std::env::var("SCREEN_CHAIN_ID") {
            Ok(v) => v
                .trim()
                .parse()
                .with_context(|| format!("SCREEN_CHAIN_ID={v:?} is not a number"))?,
            Err(_) => 1,
        };
        let network = Network::from_chain_id(chain_id)?;

        let oracle = match std::env::var("SANCTIONS_ORACLE") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("SANCTIONS_ORACLE={v:?} is not an address"))?,
            Err(_) => network.sanctions_oracle(),
        };
        let ens_registry = match std::env::var("ENS_REGISTRY") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("ENS_REGISTRY={v:?} is not an address"))?,
            Err(_) => ENS_REGISTRY,
        };

        let oracle_timeout_ms: u64 = std::env::var("ORACLE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_ORACLE_TIMEOUT_MS);

        Ok(Self {
            rpc_url: rpc_url(network)?,
            network,
            oracle,
            ens_registry,
            oracle_timeout: Duration::from_millis(oracle_timeout_ms),
        })
    }

    pub fn for_network(network: Network, rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            network,
            oracle: network.sanctions_oracle(),
            ens_registry: ENS_REGISTRY,
            oracle_timeout: Duration::from_millis(DEFAULT_ORACLE_TIMEOUT_MS),
        }
    }
}

/// Returns the JSON-RPC endpoint for `network`: `ETH_RPC_URL`, then
/// `RPC_URL`, then the network's Infura endpoint keyed by `INFURA_API_KEY`.
/// Networks without an Infura endpoint need one of the explicit variables.
pub fn rpc_url(network: Network) -> Result<String> {
    if let Ok(url) = std::env::var("ETH_RPC_URL").or_else(|_| std::env::var("RPC_URL")) {
        return Ok(url);
    }
    let host = network.infura_host().ok_or_else(|| {
        anyhow!(
            "no default rpc endpoint for {}; set ETH_RPC_URL or RPC_URL",
            network.name()
        )
    })?;
    let key = std::env::var("INFURA_API_KEY").unwrap_or_default();
    Ok(format!("https://{host}.infura.io/v3/{key}"))
}
