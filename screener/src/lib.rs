//! Pre-shielding compliance screening and token selection.

pub mod address;
pub mod compliance;
pub mod config;
pub mod ens;
pub mod error;
pub mod metrics;
pub mod network;
pub mod oracle;
pub mod rpc;
pub mod screen;
pub mod token_search;

pub use address::Address;
pub use compliance::Denylist;
pub use config::ScreenerConfig;
pub use ens::{EnsResolver, NameResolver};
pub use error::{ScreenError, ScreeningResult};
pub use network::Network;
pub use oracle::{ContractOracle, SanctionsOracle};
pub use screen::AddressScreener;
pub use token_search::{SearchOutcome, TokenListItem, TokenSearch};
