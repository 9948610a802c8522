//! Core shared types for the covault quorum wallet.
//! Holds account identities, action records, the admin-call payload codec,
//! the wallet error surface, and the dispatch interface.

pub mod account;
pub mod action;
pub mod admin;
pub mod dispatch;
pub mod error;

pub use account::{AccountId, AccountIdError};
pub use action::{Action, ActionId};
pub use admin::AdminCall;
pub use dispatch::{DispatchOutcome, Dispatcher};
pub use error::WalletError;
