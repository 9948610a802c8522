use covault_types::{AccountId, DispatchOutcome, Dispatcher, WalletError};

/// An owner-gated upgradeable forwarder: forwards like [`StaticForwarder`]
/// against a swappable implementation, with `set_owner` and
/// `set_implementation` restricted to the current single owner.
///
/// [`StaticForwarder`]: crate::forwarder::StaticForwarder
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpgradeableForwarder {
    owner: AccountId,
    implementation: AccountId,
}

impl UpgradeableForwarder {
    pub fn new(owner: AccountId, implementation: AccountId) -> Result<Self, WalletError> {
        if owner.is_zero() {
            return Err(WalletError::InvalidOwner);
        }
        Ok(UpgradeableForwarder {
            owner,
            implementation,
        })
    }

    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    pub fn implementation(&self) -> &AccountId {
        &self.implementation
    }

    pub fn set_owner(&mut self, caller: &AccountId, new: AccountId) -> Result<(), WalletError> {
        self.require_owner(caller)?;
        if new.is_zero() {
            return Err(WalletError::InvalidOwner);
        }
        tracing::info!(old = %self.owner, %new, "forwarder owner changed");
        self.owner = new;
        Ok(())
    }

    pub fn set_implementation(
        &mut self,
        caller: &AccountId,
        new: AccountId,
    ) -> Result<(), WalletError> {
        self.require_owner(caller)?;
        tracing::info!(old = %self.implementation, %new, "forwarder implementation changed");
        self.implementation = new;
        Ok(())
    }

    /// Relays a call to the current implementation, surfacing its outcome
    /// verbatim.
    #[tracing::instrument(skip(self, dispatcher, payload), fields(implementation = %self.implementation))]
    pub fn forward(
        &self,
        dispatcher: &mut dyn Dispatcher,
        value: u128,
        payload: &[u8],
    ) -> DispatchOutcome {
        tracing::debug!("forwarding call");
        dispatcher.dispatch(&self.implementation, value, payload)
    }

    fn require_owner(&self, caller: &AccountId) -> Result<(), WalletError> {
        if caller != &self.owner {
            return Err(WalletError::Unauthorized);
        }
        Ok(())
    }
}
