//! Availability and wallet requests for the search page.
//!
//! # Design
//! - Each name is checked in its own task; completion order is unspecified.
//! - Every event is applied through the store's generation fence.

use crate::core::availability::ApplyOutcome;
use crate::core::store::{AppStore, apply_availability, begin_search, set_wallet_balance};
use gloo::console;
use stackport_core_client::CoreClient;
use std::rc::Rc;
use yewdux::prelude::Dispatch;

/// Open a new search generation and start one check per name.
pub(crate) fn dispatch_checks(client: &Rc<CoreClient>, names: Vec<String>) {
    let dispatch = Dispatch::<AppStore>::new();
    let mut generation = 0;
    dispatch.reduce_mut(|store| generation = begin_search(store, &names));
    for name in names {
        let client = Rc::clone(client);
        let dispatch = dispatch.clone();
        yew::platform::spawn_local(async move {
            let result = client
                .check_name_availability_and_price(&name, |event| {
                    let mut outcome = ApplyOutcome::Applied;
                    dispatch.reduce_mut(|store| {
                        outcome = apply_availability(store, generation, &name, &event);
                    });
                    if outcome == ApplyOutcome::Stale {
                        console::debug!("dropping stale availability event", name.clone());
                    }
                })
                .await;
            if let Err(err) = result {
                console::warn!("availability check failed", name.clone(), err.to_string());
            }
        });
    }
}

/// Refresh the core wallet balance into the store.
pub(crate) fn refresh_wallet_balance(client: &Rc<CoreClient>) {
    let client = Rc::clone(client);
    yew::platform::spawn_local(async move {
        let result = client
            .wallet_balance()
            .await
            .map_err(|err| err.to_string());
        if let Err(message) = &result {
            console::warn!("wallet balance refresh failed", message.clone());
        }
        Dispatch::<AppStore>::new().reduce_mut(|store| set_wallet_balance(store, result));
    });
}
