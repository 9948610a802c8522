use covault_types::{AccountId, DispatchOutcome, Dispatcher};

/// A static call-forwarder: one fixed target identity, set at construction,
/// to which every call is relayed unmodified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticForwarder {
    target: AccountId,
}

impl StaticForwarder {
    pub fn new(target: AccountId) -> Self {
        StaticForwarder { target }
    }

    pub fn target(&self) -> &AccountId {
        &self.target
    }

    /// Relays a call to the fixed target, surfacing the target's outcome
    /// verbatim.
    #[tracing::instrument(skip(self, dispatcher, payload), fields(target = %self.target))]
    pub fn forward(
        &self,
        dispatcher: &mut dyn Dispatcher,
        value: u128,
        payload: &[u8],
    ) -> DispatchOutcome {
        tracing::debug!("forwarding call");
        dispatcher.dispatch(&self.target, value, payload)
    }
}
