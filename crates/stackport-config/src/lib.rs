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

//! API settings consumed by the Stackport client, CLI, and web UI.
//!
//! Layout: `model.rs` (typed settings), `defaults.rs` (daemon endpoints),
//! `loader.rs` (JSON + environment loading), `validate.rs` (field checks),
//! `error.rs` (`ConfigError`).

pub mod defaults;
pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use defaults::{
    ADDRESS_PLACEHOLDER, DEFAULT_CORE_API_URL, DEFAULT_NAMESPACE, DEFAULT_SUBDOMAIN_SUFFIX,
    NAME_PLACEHOLDER,
};
pub use error::{ConfigError, ConfigResult};
pub use loader::{apply_env_overrides, load_settings, parse_settings};
pub use model::{ApiSettings, HostedDataLocation, SubdomainSettings};
pub use validate::validate_settings;
