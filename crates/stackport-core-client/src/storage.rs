//! Storage driver configuration and profile replication.
//!
//! # Design
//! - `prepare_storage_config` validates the hosted data location before any
//!   request exists, so unsupported drivers fail without I/O.
//! - Signing and uploading are delegated to a [`ProfilePublisher`].
//! - No retries and no rollback: the first failure is returned as-is.

use std::fmt::{self, Display, Formatter};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use stackport_config::{ApiSettings, HostedDataLocation};
use stackport_profile::{Profile, insert_storage_routing_info};
use tracing::{debug, info, instrument};

use crate::client::CoreClient;
use crate::error::{CoreClientError, CoreResult};

/// Name of the only supported storage driver.
pub const DROPBOX_DRIVER: &str = "dropbox";

/// Key material used to sign a profile before upload.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SigningKeypair {
    /// Hex-encoded private key.
    pub private_key: String,
    /// Hex-encoded public key, when known.
    pub public_key: Option<String>,
}

impl fmt::Debug for SigningKeypair {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SigningKeypair")
            .field("private_key", &"<redacted>")
            .field("public_key", &self.public_key)
            .finish()
    }
}

/// Signed profile document ready for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedProfile {
    /// Serialized signed token file.
    pub document: String,
}

/// Result reported by a successful profile upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadReceipt {
    /// Location the profile was written to.
    pub url: String,
}

/// Signs and uploads profile documents on behalf of the orchestrator.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ProfilePublisher: Send + Sync {
    /// Sign `profile`, optionally with explicit key material.
    ///
    /// # Errors
    ///
    /// Returns [`CoreClientError::Publish`] when the profile cannot be signed.
    fn sign(&self, profile: &Profile, keypair: Option<&SigningKeypair>)
    -> CoreResult<SignedProfile>;

    /// Upload a signed profile for `blockchain_id`.
    async fn upload(
        &self,
        settings: &ApiSettings,
        blockchain_id: &str,
        signed: &SignedProfile,
    ) -> CoreResult<UploadReceipt>;
}

/// Optional inputs for a storage configuration run.
#[derive(Clone, Debug, Default)]
pub struct StorageConfigInput {
    /// Owner of the profile to replicate.
    pub blockchain_id: Option<String>,
    /// Profile to point at the new storage index.
    pub profile: Option<Profile>,
    /// Key material passed through to the publisher.
    pub signing_keypair: Option<SigningKeypair>,
}

/// How a storage configuration run ended.
#[derive(Clone, Debug, PartialEq)]
pub enum StorageConfigOutcome {
    /// The driver was configured and nothing was uploaded.
    Configured,
    /// The routed profile was signed and uploaded.
    Uploaded {
        /// Publisher receipt.
        receipt: UploadReceipt,
        /// Profile as uploaded, including the storage routing entry.
        profile: Profile,
    },
}

impl Display for StorageConfigOutcome {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configured => formatter.write_str("OK"),
            Self::Uploaded { receipt, .. } => {
                write!(formatter, "uploaded profile to {}", receipt.url)
            }
        }
    }
}

/// Validated driver configuration request, not yet sent.
#[derive(Clone, Debug)]
pub struct StorageConfigCall {
    driver: &'static str,
    url: String,
    body: DriverConfigRequest,
}

impl StorageConfigCall {
    /// Storage driver being configured.
    #[must_use]
    pub const fn driver(&self) -> &'static str {
        self.driver
    }

    /// Endpoint the configuration is posted to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Clone, Debug, Serialize)]
struct DriverConfigRequest {
    driver_config: DriverConfig,
}

#[derive(Clone, Debug, Serialize)]
struct DriverConfig {
    token: Option<String>,
}

#[derive(Deserialize)]
struct DriverConfigResponse {
    #[serde(default)]
    index_url: Option<String>,
}

impl CoreClient {
    /// Build the driver configuration request for the configured location.
    ///
    /// # Errors
    ///
    /// Returns [`CoreClientError::UnsupportedStorageDriver`] unless the hosted
    /// data location is Dropbox.
    pub fn prepare_storage_config(&self) -> CoreResult<StorageConfigCall> {
        match self.settings.hosted_data_location {
            HostedDataLocation::Dropbox => Ok(StorageConfigCall {
                driver: DROPBOX_DRIVER,
                url: self.settings.storage_driver_url(DROPBOX_DRIVER),
                body: DriverConfigRequest {
                    driver_config: DriverConfig {
                        token: self.settings.dropbox_access_token.clone(),
                    },
                },
            }),
            location => Err(CoreClientError::UnsupportedStorageDriver {
                location: location.as_str(),
            }),
        }
    }

    /// Configure the storage driver and replicate the profile when possible.
    ///
    /// # Errors
    ///
    /// Returns an error for unsupported drivers, transport failures, any
    /// status other than 200, malformed responses, and publisher failures.
    pub async fn set_core_storage_config(
        &self,
        input: StorageConfigInput,
        publisher: &dyn ProfilePublisher,
    ) -> CoreResult<StorageConfigOutcome> {
        let call = self.prepare_storage_config()?;
        self.submit_storage_config(call, input, publisher).await
    }

    /// Post a prepared driver configuration, returning the index URL if the
    /// daemon reported one.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, any status other than 200, or a
    /// malformed response body.
    #[instrument(skip(self, call), fields(driver = call.driver, url = %call.url))]
    pub async fn configure_storage_driver(
        &self,
        call: &StorageConfigCall,
    ) -> CoreResult<Option<String>> {
        let request = self.authorize(self.http.post(&call.url).json(&call.body), None);
        let response = Self::send(&call.url, request).await?;
        if response.status() != StatusCode::OK {
            return Err(CoreClientError::status(&call.url, response.status()));
        }
        let body: DriverConfigResponse = Self::decode(&call.url, response).await?;
        debug!(index_url = ?body.index_url, "storage driver configured");
        Ok(body.index_url)
    }

    /// Configure the driver from a prepared call and replicate the profile.
    ///
    /// # Errors
    ///
    /// Same as [`CoreClient::set_core_storage_config`], minus driver validation.
    #[instrument(skip(self, call, input, publisher), fields(driver = call.driver, url = %call.url))]
    pub async fn submit_storage_config(
        &self,
        call: StorageConfigCall,
        input: StorageConfigInput,
        publisher: &dyn ProfilePublisher,
    ) -> CoreResult<StorageConfigOutcome> {
        let index_url = self.configure_storage_driver(&call).await?;

        let StorageConfigInput {
            blockchain_id,
            profile,
            signing_keypair,
        } = input;
        let (Some(index_url), Some(profile), Some(blockchain_id)) =
            (index_url, profile, blockchain_id)
        else {
            debug!("storage driver configured without profile replication");
            return Ok(StorageConfigOutcome::Configured);
        };

        let routed = insert_storage_routing_info(&profile, call.driver, &index_url);
        let signed = publisher.sign(&routed, signing_keypair.as_ref())?;
        let receipt = publisher
            .upload(&self.settings, &blockchain_id, &signed)
            .await?;
        info!(%blockchain_id, %index_url, "profile replicated to storage");
        Ok(StorageConfigOutcome::Uploaded {
            receipt,
            profile: routed,
        })
    }
}
