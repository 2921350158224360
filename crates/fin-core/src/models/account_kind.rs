use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The set of account types a user may create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    Checking,
    Savings,
    Investment,
    Digital,
    Wallet,
}

impl AccountKind {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Savings => "savings",
            Self::Investment => "investment",
            Self::Digital => "digital",
            Self::Wallet => "wallet",
        }
    }
}

impl FromStr for AccountKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "checking" => Ok(Self::Checking),
            "savings" => Ok(Self::Savings),
            "investment" => Ok(Self::Investment),
            "digital" => Ok(Self::Digital),
            "wallet" => Ok(Self::Wallet),
            _ => Err(CoreError::InvalidAccountKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
