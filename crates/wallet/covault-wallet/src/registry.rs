use covault_types::{AccountId, WalletError};
use serde::{Deserialize, Serialize};

/// The owner set and approval threshold.
///
/// Invariants, enforced on construction and on every mutation:
/// - `owners` is non-empty and duplicate-free, never contains the null id
/// - `1 <= required <= owners.len()`
///
/// Owners are listed in insertion order; replacement keeps the replaced
/// slot's position. Mutators are `pub(crate)` so the only way to reach them
/// from outside the crate is through the wallet's execute path.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct QuorumRegistry {
    owners: Vec<AccountId>,
    required: usize,
}

impl QuorumRegistry {
    pub fn new(owners: Vec<AccountId>, required: usize) -> Result<Self, WalletError> {
        if required == 0 || required > owners.len() {
            return Err(WalletError::InvalidRequirement {
                required,
                owners: owners.len(),
            });
        }
        for (i, owner) in owners.iter().enumerate() {
            if owner.is_zero() {
                return Err(WalletError::InvalidOwner);
            }
            if owners[..i].contains(owner) {
                return Err(WalletError::AlreadyOwner { owner: *owner });
            }
        }
        Ok(QuorumRegistry { owners, required })
    }

    pub fn is_owner(&self, id: &AccountId) -> bool {
        self.owners.contains(id)
    }

    pub fn owners(&self) -> &[AccountId] {
        &self.owners
    }

    pub fn required(&self) -> usize {
        self.required
    }

    pub(crate) fn add_owner(&mut self, id: AccountId) -> Result<(), WalletError> {
        if id.is_zero() {
            return Err(WalletError::InvalidOwner);
        }
        if self.is_owner(&id) {
            return Err(WalletError::AlreadyOwner { owner: id });
        }
        self.owners.push(id);
        Ok(())
    }

    /// Removes `id`. If the removal leaves `required` above the remaining
    /// owner count, `required` is clamped down rather than the removal being
    /// rejected. Removing the last owner would empty the registry and is
    /// rejected as an invalid requirement.
    pub(crate) fn remove_owner(&mut self, id: &AccountId) -> Result<(), WalletError> {
        let position = self
            .owners
            .iter()
            .position(|owner| owner == id)
            .ok_or(WalletError::NotOwner { owner: *id })?;
        if self.owners.len() == 1 {
            return Err(WalletError::InvalidRequirement {
                required: self.required,
                owners: 0,
            });
        }
        self.owners.remove(position);
        if self.required > self.owners.len() {
            self.required = self.owners.len();
        }
        Ok(())
    }

    /// Atomically swaps `old` for `new` in place, preserving `required` and
    /// the slot's position in the listing order.
    pub(crate) fn replace_owner(
        &mut self,
        old: &AccountId,
        new: AccountId,
    ) -> Result<(), WalletError> {
        if new.is_zero() {
            return Err(WalletError::InvalidOwner);
        }
        if self.is_owner(&new) {
            return Err(WalletError::AlreadyOwner { owner: new });
        }
        let position = self
            .owners
            .iter()
            .position(|owner| owner == old)
            .ok_or(WalletError::NotOwner { owner: *old })?;
        self.owners[position] = new;
        Ok(())
    }

    pub(crate) fn change_required(&mut self, required: usize) -> Result<(), WalletError> {
        if required == 0 || required > self.owners.len() {
            return Err(WalletError::InvalidRequirement {
                required,
                owners: self.owners.len(),
            });
        }
        self.required = required;
        Ok(())
    }
}
