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

//! Profile documents and the pure helpers that read and update them.
//!
//! Layout: `model.rs` (serde document types), `routing.rs` (storage routing
//! entries), `legacy.rs` (legacy document adapter), `accessors.rs` (display
//! fields), `names.rs` (name validity).

pub mod accessors;
pub mod legacy;
pub mod model;
pub mod names;
pub mod routing;

pub use accessors::{avatar_url, display_name, social_accounts};
pub use legacy::from_legacy_format;
pub use model::{Account, ImageObject, Profile, WebSite};
pub use names::{is_subdomain_suffix, is_valid_name, normalize_username};
pub use routing::insert_storage_routing_info;
