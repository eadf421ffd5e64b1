//! Storage driver configuration requests.
//!
//! # Design
//! - Driver validation runs before any request is spawned.
//! - Accepted settings are persisted and pushed into the store, which
//!   rebuilds the shared client and unlocks the search page.

use crate::app::preferences::persist_settings;
use crate::core::store::{AppStore, set_settings};
use async_trait::async_trait;
use gloo::console;
use stackport_config::ApiSettings;
use stackport_core_client::{
    CoreClient, CoreClientError, CoreResult, ProfilePublisher, SignedProfile, SigningKeypair,
    StorageConfigInput, UploadReceipt,
};
use stackport_profile::Profile;
use yew::Callback;
use yewdux::prelude::Dispatch;

const NO_SIGNING_KEYS: &str = "this browser session holds no profile signing keys";

/// Publisher for sessions without key material; the page never asks for
/// profile replication, so it only guards the contract.
struct KeylessPublisher;

#[async_trait(?Send)]
impl ProfilePublisher for KeylessPublisher {
    fn sign(
        &self,
        _profile: &Profile,
        _keypair: Option<&SigningKeypair>,
    ) -> CoreResult<SignedProfile> {
        Err(CoreClientError::Publish {
            message: NO_SIGNING_KEYS.to_string(),
        })
    }

    async fn upload(
        &self,
        _settings: &ApiSettings,
        _blockchain_id: &str,
        _signed: &SignedProfile,
    ) -> CoreResult<UploadReceipt> {
        Err(CoreClientError::Publish {
            message: NO_SIGNING_KEYS.to_string(),
        })
    }
}

/// Configure the daemon's storage driver with `settings`, reporting the
/// outcome text or the failure message to `on_done`.
pub(crate) fn connect_storage(settings: ApiSettings, on_done: Callback<Result<String, String>>) {
    let client = CoreClient::new(settings.clone());
    let call = match client.prepare_storage_config() {
        Ok(call) => call,
        Err(err) => {
            on_done.emit(Err(err.to_string()));
            return;
        }
    };
    yew::platform::spawn_local(async move {
        let result = client
            .submit_storage_config(call, StorageConfigInput::default(), &KeylessPublisher)
            .await;
        match result {
            Ok(outcome) => {
                persist_settings(&settings);
                Dispatch::<AppStore>::new().reduce_mut(|store| set_settings(store, settings));
                on_done.emit(Ok(outcome.to_string()));
            }
            Err(err) => {
                console::warn!("storage configuration failed", err.to_string());
                on_done.emit(Err(err.to_string()));
            }
        }
    });
}
