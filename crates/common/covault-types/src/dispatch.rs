use crate::account::AccountId;

/// Result of dispatching a call to an external target. A failed dispatch is
/// data, not an engine error: the action that triggered it stays executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    Succeeded,
    Failed { reason: String },
}

impl DispatchOutcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        DispatchOutcome::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DispatchOutcome::Succeeded)
    }
}

/// A callable host environment that resolves a target identity and invokes
/// it with a value and opaque payload. Implemented by the host (or by tests),
/// never by the wallet core.
pub trait Dispatcher {
    fn dispatch(&mut self, target: &AccountId, value: u128, payload: &[u8]) -> DispatchOutcome;
}
