//! Human-readable name resolution through the ENS registry.
//!
//! Names are normalized by trimming and lowercasing only. Full ENSIP-15
//! normalization (Unicode case folding, confusable and emoji handling) is not
//! applied, so a name outside plain lowercase-able ASCII may hash to a node
//! other than the one the ENS app would register. Such a lookup finds no
//! record and the identifier is reported unresolvable.

use alloy_primitives::{address, keccak256, B256};
use alloy_sol_types::{sol, SolCall};
use anyhow::{anyhow, Context, Result};
use std::future::Future;

use crate::address::Address;
use crate::rpc::JsonRpcClient;

/// ENS registry with fallback, same address on mainnet and testnets.
pub const ENS_REGISTRY: Address =
    Address::from_alloy(address!("00000000000C2E074eC69A0dFb2997BA6C7d2e1e"));

sol! {
    function resolver(bytes32 node) external view returns (address);
    function addr(bytes32 node) external view returns (address);
}

pub trait NameResolver: Send + Sync {
    /// `Ok(None)` when the name has no resolver or no address record.
    fn resolve(&self, name: &str) -> impl Future<Output = Result<Option<Address>>> + Send;
}

/// Whether `s` is shaped like a dotted name worth a registry lookup.
pub fn is_resolvable_name(s: &str) -> bool {
    !s.is_empty()
        && s.contains('.')
        && !s.chars().any(|c| c.is_whitespace() || c.is_control())
        && s.split('.').all(|label| !label.is_empty())
}

/// EIP-137 namehash of an already normalized name.
pub fn namehash(name: &str) -> B256 {
    let mut node = B256::ZERO;
    if name.is_empty() {
        return node;
    }
    for label in name.rsplit('.') {
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(node.as_slice());
        buf[32..].copy_from_slice(keccak256(label.as_bytes()).as_slice());
        node = keccak256(buf);
    }
    node
}

#[derive(Debug, Clone)]
pub struct EnsResolver {
    rpc: JsonRpcClient,
    registry: Address,
}

impl EnsResolver {
    pub fn new(rpc: JsonRpcClient, registry: Address) -> Self {
        Self { rpc, registry }
    }

    async fn lookup(&self, name: &str) -> Result<Option<Address>> {
        let normalized = name.trim().to_lowercase();
        if !is_resolvable_name(&normalized) {
            return Err(anyhow!("{name:?} is not a resolvable name"));
        }
        let node = namehash(&normalized);

        let ret = self
            .rpc
            .eth_call(&self.registry, &resolverCall { node }.abi_encode())
            .await
            .context("ens registry lookup")?;
        let resolver = Address::from(
            resolverCall::abi_decode_returns(&ret, true)
                .context("decoding resolver(bytes32) return data")?
                ._0,
        );
        if resolver.is_zero() {
            tracing::debug!(target = "ens", "no resolver for {normalized}");
            return Ok(None);
        }

        let ret = self
            .rpc
            .eth_call(&resolver, &addrCall { node }.abi_encode())
            .await
            .with_context(|| format!("ens resolver {resolver} addr lookup"))?;
        let addr = Address::from(
            addrCall::abi_decode_returns(&ret, true)
                .context("decoding addr(bytes32) return data")?
                ._0,
        );
        if addr.is_zero() {
            tracing::debug!(target = "ens", "no address record for {normalized}");
            return Ok(None);
        }
        tracing::debug!(target = "ens", "resolved {normalized} -> {addr}");
        Ok(Some(addr))
    }
}

impl NameResolver for EnsResolver {
    fn resolve(&self, name: &str) -> impl Future<Output = Result<Option<Address>>> + Send {
        let name = name.to_string();
        async move { self.lookup(&name).await }
    }
}
