//! Sanctions oracle access.

use alloy_sol_types::{sol, SolCall};
use anyhow::{Context, Result};
use std::future::Future;

use crate::address::Address;
use crate::network::Network;
use crate::rpc::JsonRpcClient;

sol! {
    /// Chainalysis sanctions oracle entry point.
    function isSanctioned(address addr) external view returns (bool);
}

/// Read-only source of truth for whether an address is sanctioned.
///
/// Implementations report transport or decoding problems as `Err`; the
/// screener treats every error as a failed check.
pub trait SanctionsOracle: Send + Sync {
    fn is_sanctioned(&self, addr: &Address) -> impl Future<Output = Result<bool>> + Send;
}

/// `isSanctioned(address) -> bool` on a deployed oracle contract.
#[derive(Debug, Clone)]
pub struct ContractOracle {
    rpc: JsonRpcClient,
    contract: Address,
}

impl ContractOracle {
    pub fn new(rpc: JsonRpcClient, contract: Address) -> Self {
        Self { rpc, contract }
    }

    pub fn for_network(rpc: JsonRpcClient, network: Network) -> Self {
        Self::new(rpc, network.sanctions_oracle())
    }

    pub fn contract(&self) -> Address {
        self.contract
    }
}

impl SanctionsOracle for ContractOracle {
    fn is_sanctioned(&self, addr: &Address) -> impl Future<Output = Result<bool>> + Send {
        let data = isSanctionedCall {
            addr: addr.into_alloy(),
        }
        .abi_encode();
        let addr = *addr;
        async move {
            let ret = self
                .rpc
                .eth_call(&self.contract, &data)
                .await
                .with_context(|| format!("isSanctioned({addr}) on {}", self.contract))?;
            // Validation rejects anything but a clean 0 or 1 word.
            let decoded = isSanctionedCall::abi_decode_returns(&ret, true)
                .context("decoding isSanctioned return data")?;
            Ok(decoded._0)
        }
    }
}
