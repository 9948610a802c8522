//! TOML configuration for hosts that construct a covault wallet.

use covault_types::AccountId;
use serde::Deserialize;
use std::path::Path;

/// Declarative description of a wallet instance: its identity, initial owner
/// set, and approval threshold. Invariants are not checked here; the wallet
/// constructor validates them.
#[derive(Deserialize, Debug, Clone)]
pub struct WalletConfig {
    /// The wallet's own account identity, 0x-prefixed hex.
    pub wallet: AccountId,
    pub owners: Vec<AccountId>,
    pub required: usize,
}

/// Optional forwarder instances deployed alongside the wallet.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ForwarderConfig {
    pub static_target: Option<AccountId>,
    pub upgradeable_owner: Option<AccountId>,
    pub upgradeable_implementation: Option<AccountId>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CovaultConfig {
    pub wallet: WalletConfig,
    #[serde(default)]
    pub forwarders: ForwarderConfig,
}

pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<CovaultConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read config file {}: {}", path.display(), e))?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> anyhow::Result<CovaultConfig> {
    let config: CovaultConfig =
        toml::from_str(content).map_err(|e| anyhow::anyhow!("failed to parse TOML config: {}", e))?;
    Ok(config)
}
