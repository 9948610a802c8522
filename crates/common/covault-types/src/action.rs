use crate::account::AccountId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequence number identifying an action in the ledger, starting at 0.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(pub u64);

impl ActionId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ActionId {
    fn from(n: u64) -> Self {
        ActionId(n)
    }
}

/// A proposed unit of work: a call to `target` carrying `value` and an
/// opaque `payload`. The engine never interprets the payload; any bytes
/// are accepted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Action {
    pub target: AccountId,
    pub value: u128,
    #[serde(with = "serde_bytes")]
    pub payload: Vec<u8>,
}

impl Action {
    pub fn new(target: AccountId, value: u128, payload: Vec<u8>) -> Self {
        Action {
            target,
            value,
            payload,
        }
    }
}
