use crate::account::AccountId;
use crate::action::ActionId;
use thiserror::Error;

/// Error surface of the quorum wallet. Every error aborts the triggering
/// operation with no partial mutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("caller is not authorized")]
    Unauthorized,

    #[error("unknown action {id}")]
    UnknownAction { id: ActionId },

    #[error("action {id} has already been executed")]
    AlreadyExecuted { id: ActionId },

    #[error("action {id} is already confirmed by {owner}")]
    AlreadyConfirmed { id: ActionId, owner: AccountId },

    #[error("action {id} is not confirmed by {owner}")]
    NotConfirmed { id: ActionId, owner: AccountId },

    #[error("action {id} has {approved} approvals, {required} required")]
    InsufficientApprovals {
        id: ActionId,
        required: usize,
        approved: usize,
    },

    #[error("{owner} is already an owner")]
    AlreadyOwner { owner: AccountId },

    #[error("{owner} is not an owner")]
    NotOwner { owner: AccountId },

    #[error("invalid owner identity")]
    InvalidOwner,

    #[error("invalid requirement: {required} of {owners} owners")]
    InvalidRequirement { required: usize, owners: usize },

    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}
