//! covault-wallet: quorum-based transaction authorization.
//!
//! A shared account controlled by a fixed set of owners. Any state-changing
//! action needs confirmation from at least `required` distinct owners before
//! it executes, including changes to the owner set itself.

pub mod ledger;
pub mod registry;
pub mod wallet;

pub use ledger::{ActionLedger, ActionRecord};
pub use registry::QuorumRegistry;
pub use wallet::QuorumWallet;

// Re-export the shared types so hosts only need one import.
pub use covault_types::{
    AccountId, Action, ActionId, AdminCall, DispatchOutcome, Dispatcher, WalletError,
};
