use crate::account::AccountId;
use crate::error::WalletError;
use serde::{Deserialize, Serialize};

/// A self-administration call, carried as the payload of an action whose
/// target is the wallet itself. Encoded as JSON so that hosts and tests can
/// build payloads without sharing code with the engine.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum AdminCall {
    AddOwner(AccountId),
    RemoveOwner(AccountId),
    ReplaceOwner { old: AccountId, new: AccountId },
    ChangeRequirement(usize),
}

impl AdminCall {
    pub fn encode(&self) -> Result<Vec<u8>, WalletError> {
        serde_json::to_vec(self).map_err(|e| WalletError::InvalidPayload(e.to_string()))
    }

    pub fn decode(payload: &[u8]) -> Result<Self, WalletError> {
        serde_json::from_slice(payload).map_err(|e| WalletError::InvalidPayload(e.to_string()))
    }
}
