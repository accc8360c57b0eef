//! Fuzzy search over the shieldable token list.
//!
//! Matching is case-insensitive over address, name and symbol. Lower scores
//! are better: an exact field match scores 0, a substring match scores its
//! offset / 100, anything else `1 - jaro_winkler`. Addresses only match as
//! substrings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strsim::jaro_winkler;

use crate::address::{has_valid_checksum, Address};

pub const MAX_RESULTS: usize = 5;
pub const DEFAULT_THRESHOLD: f64 = 0.2;

const LOCATION_DISTANCE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenListItem {
    pub address: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    #[serde(rename = "logoURI", default)]
    pub logo_uri: String,
    pub chain_id: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Listed(Vec<TokenListItem>),
    /// Nothing listed matched but the term is itself a token address.
    Custom { address: Address, blacklisted: bool },
    Empty,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TokenListDoc {
    Wrapped { tokens: Vec<TokenListItem> },
    Bare(Vec<TokenListItem>),
}

#[derive(Debug, Clone)]
pub struct TokenSearch {
    tokens: Vec<TokenListItem>,
    blacklist: HashSet<Address>,
    threshold: f64,
}

impl TokenSearch {
    pub fn new(tokens: Vec<TokenListItem>) -> Self {
        Self {
            tokens,
            blacklist: HashSet::new(),
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Accepts a bare array of tokens or a token-list document with a
    /// `tokens` field. Only tokens on `chain_id` are kept.
    pub fn from_json(raw: &str, chain_id: u64) -> Result<Self> {
        let doc: TokenListDoc = serde_json::from_str(raw).context("parsing token list")?;
        let tokens = match doc {
            TokenListDoc::Wrapped { tokens } | TokenListDoc::Bare(tokens) => tokens,
        };
        let tokens: Vec<_> = tokens.into_iter().filter(|t| t.chain_id == chain_id).collect();
        tracing::debug!(
            target = "token_search",
            "loaded {} tokens for chain {chain_id}",
            tokens.len()
        );
        Ok(Self::new(tokens))
    }

    /// Token blacklist of the active network, supplied by the host.
    pub fn with_blacklist<I>(mut self, blacklist: I) -> Self
    where
        I: IntoIterator<Item = Address>,
    {
        self.blacklist = blacklist.into_iter().collect();
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn tokens(&self) -> &[TokenListItem] {
        &self.tokens
    }

    pub fn is_blacklisted(&self, token: &Address) -> bool {
        self.blacklist.contains(token)
    }

    pub fn search(&self, term: &str) -> SearchOutcome {
        let term = term.trim();
        if term.is_empty() {
            return listed(self.tokens.iter().take(MAX_RESULTS).cloned().collect());
        }

        let needle = term.to_lowercase();
        let mut scored: Vec<(f64, usize)> = self
            .tokens
            .iter()
            .enumerate()
            .filter_map(|(i, t)| {
                let score = item_score(&needle, t);
                (score <= self.threshold).then_some((score, i))
            })
            .collect();

        if scored.is_empty() {
            // A mixed-case term must carry a valid checksum to count as an
            // address here.
            return match term.parse::<Address>() {
                Ok(address) if has_valid_checksum(term) => SearchOutcome::Custom {
                    address,
                    blacklisted: self.is_blacklisted(&address),
                },
                _ => SearchOutcome::Empty,
            };
        }

        scored.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        listed(
            scored
                .into_iter()
                .take(MAX_RESULTS)
                .map(|(_, i)| self.tokens[i].clone())
                .collect(),
        )
    }
}

fn listed(items: Vec<TokenListItem>) -> SearchOutcome {
    if items.is_empty() {
        SearchOutcome::Empty
    } else {
        SearchOutcome::Listed(items)
    }
}

fn item_score(needle: &str, token: &TokenListItem) -> f64 {
    [
        substring_score(needle, &token.address.to_lower_hex()).unwrap_or(1.0),
        field_score(needle, &token.name.to_lowercase()),
        field_score(needle, &token.symbol.to_lowercase()),
    ]
    .into_iter()
    .fold(1.0, f64::min)
}

fn substring_score(needle: &str, field: &str) -> Option<f64> {
    field
        .find(needle)
        .map(|pos| (pos as f64 / LOCATION_DISTANCE).min(1.0))
}

fn field_score(needle: &str, field: &str) -> f64 {
    substring_score(needle, field).unwrap_or_else(|| 1.0 - jaro_winkler(needle, field))
}
