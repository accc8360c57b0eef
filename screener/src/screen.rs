//! Compliance screening of a shielding recipient or token address.
//!
//! A candidate identifier is normalized to a canonical address (deriving it
//! from a raw public key or resolving a name when needed), checked against
//! the static denylist and finally against the sanctions oracle. Any check
//! that cannot complete blocks the identifier.

use anyhow::Result;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::address::{has_valid_checksum, public_key_bytes, Address};
use crate::compliance::Denylist;
use crate::config::ScreenerConfig;
use crate::ens::{is_resolvable_name, EnsResolver, NameResolver};
use crate::error::{ScreenError, ScreeningResult};
use crate::metrics::{
    inc_oracle_call, inc_screening, record_oracle_latency, set_denylist_size,
};
use crate::oracle::{ContractOracle, SanctionsOracle};
use crate::rpc::JsonRpcClient;

pub const DEFAULT_ORACLE_TIMEOUT: Duration = Duration::from_secs(5);

pub struct AddressScreener<O, R> {
    denylist: Arc<Denylist>,
    oracle: Arc<O>,
    resolver: Arc<R>,
    oracle_timeout: Duration,
}

impl<O, R> Clone for AddressScreener<O, R> {
    fn clone(&self) -> Self {
        Self {
            denylist: self.denylist.clone(),
            oracle: self.oracle.clone(),
            resolver: self.resolver.clone(),
            oracle_timeout: self.oracle_timeout,
        }
    }
}

impl AddressScreener<ContractOracle, EnsResolver> {
    /// Contract oracle and ENS resolver sharing one JSON-RPC endpoint.
    pub fn from_config(config: &ScreenerConfig, denylist: Arc<Denylist>) -> Result<Self> {
        let rpc = JsonRpcClient::new(config.rpc_url.clone(), config.oracle_timeout)?;
        let oracle = ContractOracle::new(rpc.clone(), config.oracle);
        let resolver = EnsResolver::new(rpc, config.ens_registry);
        if !config.network.supports_ens() {
            tracing::warn!(
                target = "screen",
                "no ENS registry on {}; name lookups will be unresolvable",
                config.network.name()
            );
        }
        tracing::info!(
            target = "screen",
            "screener ready: network={} oracle={} denylist={}",
            config.network.name(),
            config.oracle,
            denylist.len()
        );
        Ok(Self::new(denylist, oracle, resolver).with_oracle_timeout(config.oracle_timeout))
    }

    pub fn from_env() -> Result<Self> {
        let config = ScreenerConfig::from_env()?;
        Self::from_config(&config, Denylist::from_env()?)
    }
}

impl<O: SanctionsOracle, R: NameResolver> AddressScreener<O, R> {
    pub fn new(denylist: Arc<Denylist>, oracle: O, resolver: R) -> Self {
        set_denylist_size(denylist.len());
        Self {
            denylist,
            oracle: Arc::new(oracle),
            resolver: Arc::new(resolver),
            oracle_timeout: DEFAULT_ORACLE_TIMEOUT,
        }
    }

    /// Time limit for each network-bound step: the name lookup and the
    /// oracle call.
    pub fn with_oracle_timeout(mut self, timeout: Duration) -> Self {
        self.oracle_timeout = timeout;
        self
    }

    pub fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    /// Screen `identifier`; `Ok` carries the canonical address.
    pub async fn screen(&self, identifier: &str) -> ScreeningResult {
        let result = self.check(identifier).await;
        match &result {
            Ok(addr) => {
                tracing::info!(target = "screen", "{addr} passed screening");
                inc_screening("pass");
            }
            Err(e) => {
                tracing::warn!(target = "screen", "{identifier:?} blocked: {e}");
                inc_screening(e.reason());
            }
        }
        result
    }

    /// Same contract as [`screen`](Self::screen), for call sites that gate
    /// the shielding flow with `?`.
    pub async fn assert_supported(&self, identifier: &str) -> Result<Address, ScreenError> {
        self.screen(identifier).await
    }

    async fn check(&self, identifier: &str) -> ScreeningResult {
        let addr = self.canonicalize(identifier).await?;

        if self.denylist.contains(&addr) {
            return Err(ScreenError::Denylisted(addr));
        }

        self.query_oracle(&addr).await?;
        Ok(addr)
    }

    /// Normalize an identifier to its canonical address without running the
    /// compliance checks.
    pub async fn canonicalize(&self, identifier: &str) -> ScreeningResult {
        let id = identifier.trim();

        if let Some(key) = public_key_bytes(id) {
            let addr = Address::from_public_key(&key)
                .map_err(|e| ScreenError::InvalidIdentifier(e.to_string()))?;
            tracing::debug!(target = "screen", "derived {addr} from public key");
            return Ok(addr);
        }

        if let Ok(addr) = id.parse::<Address>() {
            if !has_valid_checksum(id) {
                tracing::debug!(
                    target = "screen",
                    "{id} has a bad checksum; comparing by bytes"
                );
            }
            return Ok(addr);
        }

        if !is_resolvable_name(&id.to_lowercase()) {
            return Err(ScreenError::InvalidIdentifier(format!(
                "{id:?} is neither an address nor a name"
            )));
        }

        let resolved = tokio::time::timeout(self.oracle_timeout, self.resolver.resolve(id)).await;
        match resolved {
            Ok(Ok(Some(addr))) => {
                tracing::debug!(target = "screen", "resolved {id} to {addr}");
                Ok(addr)
            }
            Ok(Ok(None)) => Err(ScreenError::InvalidIdentifier(format!(
                "{id} does not resolve to an address"
            ))),
            Ok(Err(e)) => {
                tracing::warn!(target = "screen", "name resolution for {id} failed: {e:#}");
                Err(ScreenError::InvalidIdentifier(format!(
                    "{id} could not be resolved: {e:#}"
                )))
            }
            Err(_) => {
                tracing::warn!(target = "screen", "name resolution for {id} timed out");
                Err(ScreenError::InvalidIdentifier(format!(
                    "{id} did not resolve within {:?}",
                    self.oracle_timeout
                )))
            }
        }
    }

    async fn query_oracle(&self, addr: &Address) -> Result<(), ScreenError> {
        let start = Instant::now();
        let outcome =
            tokio::time::timeout(self.oracle_timeout, self.oracle.is_sanctioned(addr)).await;
        record_oracle_latency(start.elapsed().as_secs_f64());

        match outcome {
            Ok(Ok(false)) => {
                inc_oracle_call("clean");
                Ok(())
            }
            Ok(Ok(true)) => {
                inc_oracle_call("sanctioned");
                Err(ScreenError::Sanctioned(*addr))
            }
            Ok(Err(e)) => {
                inc_oracle_call("error");
                Err(ScreenError::OracleUnavailable(format!("{e:#}")))
            }
            Err(_) => {
                inc_oracle_call("timeout");
                Err(ScreenError::OracleUnavailable(format!(
                    "no answer within {:?}",
                    self.oracle_timeout
                )))
            }
        }
    }
}
