use covault_types::{AccountId, Action, ActionId, WalletError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One entry in the action ledger: the proposed call, the set of owners who
/// have confirmed it, and the terminal `executed` flag.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ActionRecord {
    action: Action,
    approvals: HashSet<AccountId>,
    executed: bool,
}

impl ActionRecord {
    fn new(action: Action) -> Self {
        ActionRecord {
            action,
            approvals: HashSet::new(),
            executed: false,
        }
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn approvals(&self) -> &HashSet<AccountId> {
        &self.approvals
    }

    pub fn executed(&self) -> bool {
        self.executed
    }
}

/// The ordered collection of proposed actions, addressed by sequence number.
///
/// The ledger validates its own lifecycle rules (unknown ids, the monotonic
/// `executed` flag, double confirm/revoke) but knows nothing about owners or
/// thresholds; that is the wallet's job.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionLedger {
    actions: Vec<ActionRecord>,
}

impl ActionLedger {
    pub fn new() -> Self {
        ActionLedger::default()
    }

    /// Appends a new action with no approvals and returns its sequence number.
    /// Target and payload content are not validated; any bytes are accepted.
    pub fn append(&mut self, action: Action) -> ActionId {
        let id = ActionId(self.actions.len() as u64);
        self.actions.push(ActionRecord::new(action));
        id
    }

    pub fn get(&self, id: ActionId) -> Result<&ActionRecord, WalletError> {
        self.actions
            .get(id.index())
            .ok_or(WalletError::UnknownAction { id })
    }

    fn get_mut(&mut self, id: ActionId) -> Result<&mut ActionRecord, WalletError> {
        self.actions
            .get_mut(id.index())
            .ok_or(WalletError::UnknownAction { id })
    }

    pub fn confirm(&mut self, id: ActionId, owner: AccountId) -> Result<(), WalletError> {
        let record = self.get_mut(id)?;
        if record.executed {
            return Err(WalletError::AlreadyExecuted { id });
        }
        if !record.approvals.insert(owner) {
            return Err(WalletError::AlreadyConfirmed { id, owner });
        }
        Ok(())
    }

    pub fn revoke(&mut self, id: ActionId, owner: &AccountId) -> Result<(), WalletError> {
        let record = self.get_mut(id)?;
        if record.executed {
            return Err(WalletError::AlreadyExecuted { id });
        }
        if !record.approvals.remove(owner) {
            return Err(WalletError::NotConfirmed { id, owner: *owner });
        }
        Ok(())
    }

    pub fn approval_count(&self, id: ActionId) -> Result<usize, WalletError> {
        Ok(self.get(id)?.approvals.len())
    }

    pub fn approvals(&self, id: ActionId) -> Result<&HashSet<AccountId>, WalletError> {
        Ok(&self.get(id)?.approvals)
    }

    pub fn is_executed(&self, id: ActionId) -> Result<bool, WalletError> {
        Ok(self.get(id)?.executed)
    }

    /// Flips the terminal `executed` flag. The caller must already have
    /// checked quorum; the ledger re-asserts the flag's monotonicity.
    pub fn mark_executed(&mut self, id: ActionId) -> Result<(), WalletError> {
        let record = self.get_mut(id)?;
        if record.executed {
            return Err(WalletError::AlreadyExecuted { id });
        }
        record.executed = true;
        Ok(())
    }

    pub fn len(&self) -> u64 {
        self.actions.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
