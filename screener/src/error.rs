use thiserror::Error;

use crate::address::Address;

/// Why a screening did not pass. Every variant blocks the shielding flow.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScreenError {
    #[error("address is invalid or unavailable: {0}")]
    InvalidIdentifier(String),
    #[error("address {0} is on the compliance denylist")]
    Denylisted(Address),
    #[error("address {0} is reported as sanctioned")]
    Sanctioned(Address),
    #[error("sanctions oracle unavailable: {0}")]
    OracleUnavailable(String),
}

impl ScreenError {
    /// Stable reason code for callers that branch on the failure kind.
    pub fn reason(&self) -> &'static str {
        match self {
            ScreenError::InvalidIdentifier(_) => "unresolvable",
            ScreenError::Denylisted(_) => "denylisted",
            ScreenError::Sanctioned(_) => "sanctioned",
            ScreenError::OracleUnavailable(_) => "oracle_unavailable",
        }
    }
}

/// `Ok` carries the canonical address that passed screening.
pub type ScreeningResult = Result<Address, ScreenError>;
