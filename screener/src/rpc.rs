//! Minimal JSON-RPC transport: read-only `eth_call` over HTTP. Call data is
//! ABI-encoded by the callers.

use alloy_primitives::hex;
use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::address::Address;

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<String>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Clone)]
pub struct JsonRpcClient {
    http: Client,
    url: String,
}

impl JsonRpcClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("building http client")?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// `eth_call` against the latest block; returns the raw return data.
    pub async fn eth_call(&self, to: &Address, data: &[u8]) -> Result<Vec<u8>> {
        let req = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method: "eth_call",
            params: serde_json::json!([
                { "to": to.to_lower_hex(), "data": hex::encode_prefixed(data) },
                "latest"
            ]),
        };
        tracing::debug!(target = "rpc", "eth_call to={} bytes={}", to, data.len());

        let resp: RpcResponse = self
            .http
            .post(&self.url)
            .json(&req)
            .send()
            .await
            .context("rpc request failed")?
            .error_for_status()
            .context("rpc endpoint returned an error status")?
            .json()
            .await
            .context("rpc response is not valid json-rpc")?;

        if let Some(err) = resp.error {
            return Err(anyhow!("rpc error {}: {}", err.code, err.message));
        }
        let raw = resp.result.ok_or_else(|| anyhow!("rpc response has no result"))?;
        let digits = raw
            .strip_prefix("0x")
            .ok_or_else(|| anyhow!("rpc result is not 0x-prefixed: {raw}"))?;
        hex::decode(digits).context("rpc result is not hex")
    }
}
