// Forwarding shims in front of a counter target: the proxy behaves like the
// target it fronts, leaves other targets untouched, and passes failure
// reasons through verbatim.

use covault_proxy::{StaticForwarder, UpgradeableForwarder};
use covault_types::{AccountId, DispatchOutcome, Dispatcher, WalletError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn id(fill: u8) -> AccountId {
    AccountId::new([fill; 20])
}

#[derive(Serialize, Deserialize, Clone, Debug)]
enum CounterCall {
    Increment,
    Fail,
}

/// Host environment holding several independent counter targets.
struct MultiCounterHost {
    counters: HashMap<AccountId, u64>,
}

impl MultiCounterHost {
    fn with_targets(targets: &[AccountId]) -> Self {
        MultiCounterHost {
            counters: targets.iter().map(|t| (*t, 0)).collect(),
        }
    }

    fn counter(&self, target: &AccountId) -> u64 {
        self.counters[target]
    }
}

impl Dispatcher for MultiCounterHost {
    fn dispatch(&mut self, target: &AccountId, _value: u128, payload: &[u8]) -> DispatchOutcome {
        let Some(counter) = self.counters.get_mut(target) else {
            return DispatchOutcome::failed(format!("no such target: {}", target));
        };
        match serde_json::from_slice::<CounterCall>(payload) {
            Ok(CounterCall::Increment) => {
                *counter += 1;
                DispatchOutcome::Succeeded
            }
            Ok(CounterCall::Fail) => DispatchOutcome::failed("This function should fail"),
            Err(e) => DispatchOutcome::failed(format!("bad counter payload: {}", e)),
        }
    }
}

fn increment() -> Vec<u8> {
    serde_json::to_vec(&CounterCall::Increment).unwrap()
}

fn fail() -> Vec<u8> {
    serde_json::to_vec(&CounterCall::Fail).unwrap()
}

#[test]
fn static_forwarder_acts_like_its_target() {
    let counter = id(0xaa);
    let other = id(0xbb);
    let mut host = MultiCounterHost::with_targets(&[counter, other]);
    let proxy = StaticForwarder::new(counter);

    assert!(proxy.forward(&mut host, 0, &increment()).is_success());
    assert_eq!(host.counter(&counter), 1);
    // Other targets are untouched.
    assert_eq!(host.counter(&other), 0);
}

#[test]
fn static_forwarder_passes_failure_reasons_through() {
    let counter = id(0xaa);
    let mut host = MultiCounterHost::with_targets(&[counter]);
    let proxy = StaticForwarder::new(counter);

    let outcome = proxy.forward(&mut host, 0, &fail());
    assert_eq!(outcome, DispatchOutcome::failed("This function should fail"));
}

#[test]
fn upgradeable_forwarder_acts_like_its_implementation() {
    let counter = id(0xaa);
    let mut host = MultiCounterHost::with_targets(&[counter]);
    let proxy = UpgradeableForwarder::new(id(1), counter).unwrap();

    assert!(proxy.forward(&mut host, 0, &increment()).is_success());
    assert_eq!(host.counter(&counter), 1);

    let outcome = proxy.forward(&mut host, 0, &fail());
    assert_eq!(outcome, DispatchOutcome::failed("This function should fail"));
}

#[test]
fn upgrade_switches_the_forwarding_target() {
    let owner = id(1);
    let first = id(0xaa);
    let second = id(0xbb);
    let mut host = MultiCounterHost::with_targets(&[first, second]);
    let mut proxy = UpgradeableForwarder::new(owner, first).unwrap();

    assert!(proxy.forward(&mut host, 0, &increment()).is_success());

    // Only the owner may upgrade.
    assert!(matches!(
        proxy.set_implementation(&id(9), second),
        Err(WalletError::Unauthorized)
    ));
    proxy.set_implementation(&owner, second).unwrap();

    assert!(proxy.forward(&mut host, 0, &increment()).is_success());
    assert_eq!(host.counter(&first), 1);
    assert_eq!(host.counter(&second), 1);
}

#[test]
fn ownership_handover_gates_future_upgrades() {
    let mut proxy = UpgradeableForwarder::new(id(1), id(0xaa)).unwrap();

    assert!(matches!(
        proxy.set_owner(&id(2), id(2)),
        Err(WalletError::Unauthorized)
    ));
    proxy.set_owner(&id(1), id(2)).unwrap();
    assert_eq!(proxy.owner(), &id(2));

    assert!(matches!(
        proxy.set_implementation(&id(1), id(0xbb)),
        Err(WalletError::Unauthorized)
    ));
    proxy.set_implementation(&id(2), id(0xbb)).unwrap();
    assert_eq!(proxy.implementation(), &id(0xbb));
}
