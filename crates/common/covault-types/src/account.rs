use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of bytes in an account identity.
pub const ACCOUNT_ID_LEN: usize = 20;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountIdError {
    #[error("account id must be {ACCOUNT_ID_LEN} bytes, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex encoding: {0}")]
    InvalidHex(String),
}

/// An opaque, comparable account identity.
///
/// Identities are 20-byte keys rendered as 0x-prefixed hex. The all-zero
/// identity is reserved as the null identity and may never be registered
/// as an owner.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId([u8; ACCOUNT_ID_LEN]);

impl AccountId {
    /// The null identity.
    pub const ZERO: AccountId = AccountId([0u8; ACCOUNT_ID_LEN]);

    pub fn new(bytes: [u8; ACCOUNT_ID_LEN]) -> Self {
        AccountId(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ACCOUNT_ID_LEN] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self)
    }
}

impl FromStr for AccountId {
    type Err = AccountIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped).map_err(|e| AccountIdError::InvalidHex(e.to_string()))?;
        let array: [u8; ACCOUNT_ID_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| AccountIdError::InvalidLength(bytes.len()))?;
        Ok(AccountId(array))
    }
}

impl TryFrom<String> for AccountId {
    type Error = AccountIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> String {
        id.to_string()
    }
}
