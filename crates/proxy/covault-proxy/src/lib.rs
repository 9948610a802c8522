//! Forwarding shims that sit in front of a dispatch target.
//!
//! Both forwarders are pass-through: they relay value and payload unmodified
//! and surface the target's failure reason verbatim. They hold no wallet
//! state and are independent instances.

pub mod forwarder;
pub mod upgradeable;

pub use forwarder::StaticForwarder;
pub use upgradeable::UpgradeableForwarder;
