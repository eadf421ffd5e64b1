//! Name availability and price lookups.
//!
//! # Design
//! - Progress is pushed to a caller-supplied sink so the UI store can apply
//!   each step as it happens.
//! - Top-level names resolve through the daemon; subdomains through the
//!   registrar configured for their suffix. Only top-level names are priced.

use reqwest::StatusCode;
use serde::Deserialize;
use stackport_config::DEFAULT_NAMESPACE;
use tracing::{debug, instrument, warn};

use crate::client::CoreClient;
use crate::error::{CoreClientError, CoreResult};

const SATOSHIS_PER_BITCOIN: f64 = 100_000_000.0;
const AVAILABLE: &str = "available";

/// One step of an availability and price check.
#[derive(Clone, Debug, PartialEq)]
pub enum AvailabilityEvent {
    /// The availability request was issued.
    CheckingAvailability,
    /// The name can be registered.
    Available {
        /// Whether the name lives under a subdomain registrar.
        subdomain: bool,
    },
    /// The name is already registered.
    Taken,
    /// The price request was issued.
    CheckingPrice,
    /// Registration price in BTC.
    Priced {
        /// Price in BTC.
        price: f64,
    },
    /// The check stopped on an error.
    Failed {
        /// Human-readable failure.
        message: String,
    },
}

#[derive(Deserialize)]
struct NameLookupResponse {
    #[serde(default)]
    status: Option<String>,
}

#[derive(Deserialize)]
struct PriceResponse {
    #[serde(default)]
    name_price: Option<Satoshis>,
    #[serde(default)]
    satoshis: Option<u64>,
}

#[derive(Deserialize)]
struct Satoshis {
    satoshis: u64,
}

/// Suffix of a fully-qualified name: everything after the first label.
fn suffix_of(name: &str) -> &str {
    name.split_once('.').map_or("", |(_, suffix)| suffix)
}

#[allow(clippy::cast_precision_loss)]
fn satoshis_to_bitcoin(satoshis: u64) -> f64 {
    satoshis as f64 / SATOSHIS_PER_BITCOIN
}

impl CoreClient {
    /// Check whether `name` is available and, for top-level names, its price.
    ///
    /// Every step is reported to `sink`; a failure is reported as
    /// [`AvailabilityEvent::Failed`] before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error when the suffix has no registrar, a request fails, a
    /// lookup answers with an unexpected status, or a price body is malformed.
    #[instrument(skip(self, sink))]
    pub async fn check_name_availability_and_price<F>(
        &self,
        name: &str,
        mut sink: F,
    ) -> CoreResult<()>
    where
        F: FnMut(AvailabilityEvent),
    {
        let outcome = self.run_check(name, &mut sink).await;
        if let Err(err) = &outcome {
            warn!(error = %err, "availability check failed");
            sink(AvailabilityEvent::Failed {
                message: err.to_string(),
            });
        }
        outcome
    }

    async fn run_check<F>(&self, name: &str, sink: &mut F) -> CoreResult<()>
    where
        F: FnMut(AvailabilityEvent),
    {
        let suffix = suffix_of(name);
        let subdomain = suffix != DEFAULT_NAMESPACE;
        let lookup_url = if subdomain {
            let registrar = self.settings.subdomains.get(suffix).ok_or_else(|| {
                CoreClientError::UnknownSuffix {
                    suffix: suffix.to_string(),
                }
            })?;
            format!("{}/v1/names/{name}", registrar.api_url.trim_end_matches('/'))
        } else {
            self.settings.name_lookup_url_for(name)
        };

        sink(AvailabilityEvent::CheckingAvailability);
        if !self.lookup_available(&lookup_url, subdomain).await? {
            debug!("name is taken");
            sink(AvailabilityEvent::Taken);
            return Ok(());
        }
        sink(AvailabilityEvent::Available { subdomain });
        if subdomain {
            return Ok(());
        }

        sink(AvailabilityEvent::CheckingPrice);
        let price = self.name_price(name).await?;
        debug!(price, "name is available");
        sink(AvailabilityEvent::Priced { price });
        Ok(())
    }

    async fn lookup_available(&self, url: &str, subdomain: bool) -> CoreResult<bool> {
        let response = Self::send(url, self.http.get(url)).await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(true);
        }
        if !status.is_success() {
            return Err(CoreClientError::status(url, status));
        }
        // Registrars only answer 2xx for names they already hold.
        if subdomain {
            return Ok(false);
        }
        // Registered names return their record; only an explicit status marks them free.
        let available = Self::decode::<NameLookupResponse>(url, response)
            .await
            .ok()
            .and_then(|body| body.status)
            .is_some_and(|status| status == AVAILABLE);
        Ok(available)
    }

    /// Registration price of a top-level name in BTC.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not a success, or
    /// the body carries no satoshi amount.
    pub async fn name_price(&self, name: &str) -> CoreResult<f64> {
        let url = self.settings.price_check_url_for(name);
        let response = Self::ensure_success(&url, Self::send(&url, self.http.get(&url)).await?)?;
        let body: PriceResponse = Self::decode(&url, response).await?;
        let satoshis = body
            .name_price
            .map(|price| price.satoshis)
            .or(body.satoshis)
            .ok_or_else(|| CoreClientError::Decode {
                url: url.clone(),
                source: serde::de::Error::missing_field("satoshis"),
            })?;
        Ok(satoshis_to_bitcoin(satoshis))
    }
}
