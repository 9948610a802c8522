use crate::ledger::{ActionLedger, ActionRecord};
use crate::registry::QuorumRegistry;
use covault_types::{
    AccountId, Action, ActionId, AdminCall, DispatchOutcome, Dispatcher, WalletError,
};

/// The quorum wallet: a shared account whose every state-changing action
/// requires approval from at least `required` distinct owners.
///
/// Caller identity is threaded explicitly into every operation rather than
/// read from ambient context. Self-administration (owner set and threshold
/// changes) is only reachable through `execute_transaction` on an action
/// targeting the wallet's own identity; the execute path invokes the admin
/// handlers with the wallet itself as the logical caller.
#[derive(Clone, Debug)]
pub struct QuorumWallet {
    id: AccountId,
    registry: QuorumRegistry,
    ledger: ActionLedger,
}

impl QuorumWallet {
    /// Creates a wallet with the given identity, initial owner set, and
    /// approval threshold. Fails if the identity is the null id, the owner
    /// set is empty or contains duplicates or the null id, or the threshold
    /// falls outside `1..=owners.len()`.
    pub fn new(
        id: AccountId,
        owners: Vec<AccountId>,
        required: usize,
    ) -> Result<Self, WalletError> {
        if id.is_zero() {
            return Err(WalletError::InvalidOwner);
        }
        let registry = QuorumRegistry::new(owners, required)?;
        Ok(QuorumWallet {
            id,
            registry,
            ledger: ActionLedger::new(),
        })
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn owners(&self) -> &[AccountId] {
        self.registry.owners()
    }

    pub fn required(&self) -> usize {
        self.registry.required()
    }

    pub fn is_owner(&self, id: &AccountId) -> bool {
        self.registry.is_owner(id)
    }

    pub fn transaction_count(&self) -> u64 {
        self.ledger.len()
    }

    pub fn transaction(&self, id: ActionId) -> Result<&ActionRecord, WalletError> {
        self.ledger.get(id)
    }

    /// Whether `owner` has a recorded confirmation on the action. Reports the
    /// raw ledger entry; approvals from since-removed owners stay recorded
    /// but no longer count toward quorum.
    pub fn confirmations(&self, id: ActionId, owner: &AccountId) -> Result<bool, WalletError> {
        Ok(self.ledger.approvals(id)?.contains(owner))
    }

    /// Number of approvals that currently count toward quorum: recorded
    /// approvals filtered through the live owner set.
    pub fn approval_count(&self, id: ActionId) -> Result<usize, WalletError> {
        Ok(self
            .ledger
            .approvals(id)?
            .iter()
            .filter(|owner| self.registry.is_owner(owner))
            .count())
    }

    /// Proposes a new action. Submission implies self-approval: the action is
    /// appended and immediately confirmed on behalf of the caller, as one
    /// atomic step.
    #[tracing::instrument(skip(self, payload), fields(wallet = %self.id))]
    pub fn submit_transaction(
        &mut self,
        caller: &AccountId,
        target: AccountId,
        value: u128,
        payload: Vec<u8>,
    ) -> Result<ActionId, WalletError> {
        self.require_owner(caller)?;
        let id = self.ledger.append(Action::new(target, value, payload));
        // A freshly appended action is unexecuted and unconfirmed, so this
        // cannot fail and the append+confirm pair is atomic.
        self.ledger.confirm(id, *caller)?;
        tracing::info!(action = %id, "transaction submitted");
        Ok(id)
    }

    #[tracing::instrument(skip(self), fields(wallet = %self.id))]
    pub fn confirm_transaction(
        &mut self,
        caller: &AccountId,
        id: ActionId,
    ) -> Result<(), WalletError> {
        self.require_owner(caller)?;
        self.ledger.confirm(id, *caller)?;
        tracing::debug!(action = %id, "confirmation recorded");
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(wallet = %self.id))]
    pub fn revoke_confirmation(
        &mut self,
        caller: &AccountId,
        id: ActionId,
    ) -> Result<(), WalletError> {
        self.require_owner(caller)?;
        self.ledger.revoke(id, caller)?;
        tracing::debug!(action = %id, "confirmation revoked");
        Ok(())
    }

    /// Executes an action once quorum is reached and reports the dispatch
    /// outcome. The action is marked executed strictly before the dispatch;
    /// the terminal flag is the re-entrancy guard, so a failed dispatch still
    /// consumes the authorization. Actions targeting the wallet itself are
    /// routed to the self-administration handlers instead of the dispatcher.
    #[tracing::instrument(skip(self, dispatcher), fields(wallet = %self.id))]
    pub fn execute_transaction(
        &mut self,
        caller: &AccountId,
        id: ActionId,
        dispatcher: &mut dyn Dispatcher,
    ) -> Result<DispatchOutcome, WalletError> {
        self.require_owner(caller)?;
        if self.ledger.is_executed(id)? {
            return Err(WalletError::AlreadyExecuted { id });
        }
        let approved = self.approval_count(id)?;
        let required = self.registry.required();
        if approved < required {
            return Err(WalletError::InsufficientApprovals {
                id,
                required,
                approved,
            });
        }

        self.ledger.mark_executed(id)?;
        let action = self.ledger.get(id)?.action().clone();
        let outcome = if action.target == self.id {
            self.dispatch_self(&action.payload)
        } else {
            dispatcher.dispatch(&action.target, action.value, &action.payload)
        };
        match &outcome {
            DispatchOutcome::Succeeded => {
                tracing::info!(action = %id, target = %action.target, "action executed");
            }
            DispatchOutcome::Failed { reason } => {
                tracing::warn!(action = %id, target = %action.target, %reason, "dispatch failed");
            }
        }
        Ok(outcome)
    }

    /// Routes a self-targeted payload to the admin handlers. The logical
    /// caller on this path is the wallet's own identity; handler errors are
    /// dispatch outcomes, not engine errors.
    fn dispatch_self(&mut self, payload: &[u8]) -> DispatchOutcome {
        let call = match AdminCall::decode(payload) {
            Ok(call) => call,
            Err(e) => return DispatchOutcome::failed(e.to_string()),
        };
        let origin = self.id;
        let result = match call {
            AdminCall::AddOwner(owner) => self.add_owner(&origin, owner),
            AdminCall::RemoveOwner(owner) => self.remove_owner(&origin, &owner),
            AdminCall::ReplaceOwner { old, new } => self.replace_owner(&origin, &old, new),
            AdminCall::ChangeRequirement(required) => self.change_requirement(&origin, required),
        };
        match result {
            Ok(()) => DispatchOutcome::Succeeded,
            Err(e) => DispatchOutcome::failed(e.to_string()),
        }
    }

    /// Adds an owner. Only callable with the wallet's own identity, which is
    /// only resolvable through the execute path.
    pub fn add_owner(&mut self, caller: &AccountId, owner: AccountId) -> Result<(), WalletError> {
        self.require_self(caller)?;
        self.registry.add_owner(owner)?;
        tracing::info!(wallet = %self.id, %owner, "owner added");
        Ok(())
    }

    /// Removes an owner, clamping the threshold down if it would otherwise
    /// exceed the remaining owner count.
    pub fn remove_owner(&mut self, caller: &AccountId, owner: &AccountId) -> Result<(), WalletError> {
        self.require_self(caller)?;
        self.registry.remove_owner(owner)?;
        tracing::info!(wallet = %self.id, %owner, required = self.registry.required(), "owner removed");
        Ok(())
    }

    /// Atomically swaps one owner for another, preserving the threshold.
    pub fn replace_owner(
        &mut self,
        caller: &AccountId,
        old: &AccountId,
        new: AccountId,
    ) -> Result<(), WalletError> {
        self.require_self(caller)?;
        self.registry.replace_owner(old, new)?;
        tracing::info!(wallet = %self.id, %old, %new, "owner replaced");
        Ok(())
    }

    /// Changes the approval threshold.
    pub fn change_requirement(
        &mut self,
        caller: &AccountId,
        required: usize,
    ) -> Result<(), WalletError> {
        self.require_self(caller)?;
        self.registry.change_required(required)?;
        tracing::info!(wallet = %self.id, required, "requirement changed");
        Ok(())
    }

    fn require_owner(&self, caller: &AccountId) -> Result<(), WalletError> {
        if !self.registry.is_owner(caller) {
            return Err(WalletError::Unauthorized);
        }
        Ok(())
    }

    fn require_self(&self, caller: &AccountId) -> Result<(), WalletError> {
        if caller != &self.id {
            return Err(WalletError::Unauthorized);
        }
        Ok(())
    }
}
