//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Reducers are free functions over `AppStore` so they test natively.

use stackport_config::ApiSettings;
use stackport_core_client::AvailabilityEvent;
use yewdux::store::Store;

use crate::core::availability::{ApplyOutcome, AvailabilityState};

/// Global application store for shared state.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppStore {
    /// Active API settings.
    pub settings: ApiSettings,
    /// Name availability for the current search.
    pub availability: AvailabilityState,
    /// Core wallet state.
    pub wallet: WalletState,
}

/// Core wallet slice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WalletState {
    /// Last refreshed zero-confirmation balance in BTC.
    pub balance: Option<f64>,
    /// Failure from the last refresh.
    pub error: Option<String>,
}

/// Replace the active settings.
pub fn set_settings(store: &mut AppStore, settings: ApiSettings) {
    store.settings = settings;
}

/// Start a new availability search over `names`, returning its generation.
pub fn begin_search(store: &mut AppStore, names: &[String]) -> u64 {
    store.availability.begin(names.iter().cloned())
}

/// Apply an availability event issued under `generation`.
pub fn apply_availability(
    store: &mut AppStore,
    generation: u64,
    name: &str,
    event: &AvailabilityEvent,
) -> ApplyOutcome {
    store.availability.apply(generation, name, event)
}

/// Record the outcome of a wallet balance refresh.
pub fn set_wallet_balance(store: &mut AppStore, result: Result<f64, String>) {
    match result {
        Ok(balance) => {
            store.wallet.balance = Some(balance);
            store.wallet.error = None;
        }
        Err(message) => store.wallet.error = Some(message),
    }
}
