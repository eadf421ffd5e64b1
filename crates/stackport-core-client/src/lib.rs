#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(target_arch = "wasm32", allow(clippy::future_not_send))]

//! Client for the Core daemon: status probes, wallet and name lookups, and
//! storage driver configuration.
//!
//! Layout:
//! - `client.rs`: shared `CoreClient`, auth header, and response helpers
//! - `probes.rs`: best-effort checks that never fail
//! - `wallet.rs`, `availability.rs`, `search.rs`: fallible lookups
//! - `storage.rs`: storage driver configuration and profile replication
//! - `error.rs`: `CoreClientError`
//!
//! The crate builds for native targets and for `wasm32` (reqwest uses the
//! browser fetch API there).

pub mod availability;
pub mod client;
pub mod error;
pub mod probes;
pub mod search;
pub mod storage;
pub mod wallet;

pub use availability::AvailabilityEvent;
pub use client::{CoreClient, authorization_header_value};
pub use error::{CoreClientError, CoreResult};
pub use search::SearchHit;
pub use storage::{
    DROPBOX_DRIVER, ProfilePublisher, SignedProfile, SigningKeypair, StorageConfigCall,
    StorageConfigInput, StorageConfigOutcome, UploadReceipt,
};
