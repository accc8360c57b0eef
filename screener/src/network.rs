use alloy_primitives::address;
use anyhow::{anyhow, Result};

use crate::address::Address;

/// Chainalysis sanctions oracle, deployed at the same address on every
/// supported network.
pub const SANCTIONS_ORACLE: Address =
    Address::from_alloy(address!("40C57923924B5c5c5455c48D93317139ADDaC8fb"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Ethereum,
    Polygon,
    BnbChain,
    Arbitrum,
}

impl Network {
    pub const ALL: [Network; 4] = [
        Network::Ethereum,
        Network::Polygon,
        Network::BnbChain,
        Network::Arbitrum,
    ];

    pub fn from_chain_id(chain_id: u64) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|n| n.chain_id() == chain_id)
            .ok_or_else(|| anyhow!("unsupported chain id {chain_id}"))
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Ethereum => 1,
            Network::Polygon => 137,
            Network::BnbChain => 56,
            Network::Arbitrum => 42161,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Network::Ethereum => "Ethereum",
            Network::Polygon => "Polygon",
            Network::BnbChain => "BNB Smart Chain",
            Network::Arbitrum => "Arbitrum One",
        }
    }

    pub fn block_explorer_url(&self) -> &'static str {
        match self {
            Network::Ethereum => "https://etherscan.io/",
            Network::Polygon => "https://polygonscan.com/",
            Network::BnbChain => "https://bscscan.com/",
            Network::Arbitrum => "https://arbiscan.io/",
        }
    }

    /// Infura subdomain serving this chain. BNB Smart Chain has none.
    pub fn infura_host(&self) -> Option<&'static str> {
        match self {
            Network::Ethereum => Some("mainnet"),
            Network::Polygon => Some("polygon-mainnet"),
            Network::Arbitrum => Some("arbitrum-mainnet"),
            Network::BnbChain => None,
        }
    }

    pub fn sanctions_oracle(&self) -> Address {
        SANCTIONS_ORACLE
    }

    /// ENS lives on Ethereum mainnet only.
    pub fn supports_ens(&self) -> bool {
        matches!(self, Network::Ethereum)
    }

    pub fn token_link(&self, token: &Address) -> String {
        format!("{}token/{}", self.block_explorer_url(), token)
    }
}
