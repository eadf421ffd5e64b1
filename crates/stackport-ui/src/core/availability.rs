//! Per-name availability records and search generations.
//!
//! # Design
//! - Each submitted search opens a new generation; events carry the
//!   generation they were issued under.
//! - Events from an older generation are dropped instead of overwriting
//!   records that belong to the current search.
//! - In-flight checks are never cancelled; their late results are ignored.

use std::collections::BTreeMap;

use stackport_core_client::AvailabilityEvent;

/// Availability state of one fully-qualified name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AvailabilityRecord {
    /// The availability request is in flight.
    pub checking_availability: bool,
    /// The name can be registered.
    pub available: bool,
    /// The price request is in flight.
    pub checking_price: bool,
    /// Last known price in BTC (unrounded).
    pub price: f64,
    /// Failure reported by the last check.
    pub error: Option<String>,
}

impl AvailabilityRecord {
    fn pending() -> Self {
        Self {
            checking_availability: true,
            ..Self::default()
        }
    }

    /// Apply one check event to the record.
    pub fn apply(&mut self, event: &AvailabilityEvent) {
        match event {
            AvailabilityEvent::CheckingAvailability => {
                self.checking_availability = true;
                self.error = None;
            }
            AvailabilityEvent::Available { .. } => {
                self.checking_availability = false;
                self.available = true;
            }
            AvailabilityEvent::Taken => {
                self.checking_availability = false;
                self.available = false;
            }
            AvailabilityEvent::CheckingPrice => self.checking_price = true,
            AvailabilityEvent::Priced { price } => {
                self.checking_price = false;
                self.price = *price;
            }
            AvailabilityEvent::Failed { message } => {
                self.checking_availability = false;
                self.checking_price = false;
                self.error = Some(message.clone());
            }
        }
    }
}

/// Whether an event was applied or discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The event updated the current search.
    Applied,
    /// The event belonged to a superseded search.
    Stale,
}

/// Availability records for the current search generation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AvailabilityState {
    /// Generation of the latest submitted search.
    pub generation: u64,
    /// Records keyed by fully-qualified name.
    pub names: BTreeMap<String, AvailabilityRecord>,
}

impl AvailabilityState {
    /// Open a new generation and mark `names` as being checked.
    ///
    /// Records from earlier generations are dropped.
    pub fn begin<I, S>(&mut self, names: I) -> u64
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.generation += 1;
        self.names.clear();
        for name in names {
            self.names.insert(name.into(), AvailabilityRecord::pending());
        }
        self.generation
    }

    /// Apply an event for `name` if it belongs to the current generation.
    pub fn apply(
        &mut self,
        generation: u64,
        name: &str,
        event: &AvailabilityEvent,
    ) -> ApplyOutcome {
        if generation != self.generation {
            return ApplyOutcome::Stale;
        }
        self.names
            .entry(name.to_string())
            .or_insert_with(AvailabilityRecord::pending)
            .apply(event);
        ApplyOutcome::Applied
    }

    /// Record for `name`, if one exists.
    #[must_use]
    pub fn record(&self, name: &str) -> Option<&AvailabilityRecord> {
        self.names.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::{ApplyOutcome, AvailabilityState};
    use stackport_core_client::AvailabilityEvent;

    #[test]
    fn top_level_name_walks_through_price_states() {
        let mut state = AvailabilityState::default();
        let generation = state.begin(["alice.id"]);
        let events = [
            AvailabilityEvent::CheckingAvailability,
            AvailabilityEvent::Available { subdomain: false },
            AvailabilityEvent::CheckingPrice,
        ];
        for event in &events {
            assert_eq!(
                state.apply(generation, "alice.id", event),
                ApplyOutcome::Applied
            );
        }
        let record = state.record("alice.id").cloned().unwrap_or_default();
        assert!(record.available && record.checking_price && !record.checking_availability);

        state.apply(
            generation,
            "alice.id",
            &AvailabilityEvent::Priced { price: 0.0025 },
        );
        let record = state.record("alice.id").cloned().unwrap_or_default();
        assert!(!record.checking_price);
        assert!((record.price - 0.0025).abs() < f64::EPSILON);
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut state = AvailabilityState::default();
        let first = state.begin(["alice.id"]);
        let second = state.begin(["alice.id"]);
        assert_ne!(first, second);

        let outcome = state.apply(first, "alice.id", &AvailabilityEvent::Taken);
        assert_eq!(outcome, ApplyOutcome::Stale);
        let record = state.record("alice.id").cloned().unwrap_or_default();
        assert!(record.checking_availability);

        state.apply(
            second,
            "alice.id",
            &AvailabilityEvent::Available { subdomain: false },
        );
        assert!(state.record("alice.id").is_some_and(|record| record.available));
    }

    #[test]
    fn failure_clears_progress_flags() {
        let mut state = AvailabilityState::default();
        let generation = state.begin(["bob.id"]);
        state.apply(generation, "bob.id", &AvailabilityEvent::CheckingPrice);
        state.apply(
            generation,
            "bob.id",
            &AvailabilityEvent::Failed {
                message: "offline".to_string(),
            },
        );
        let record = state.record("bob.id").cloned().unwrap_or_default();
        assert!(!record.checking_availability && !record.checking_price);
        assert_eq!(record.error.as_deref(), Some("offline"));
    }

    #[test]
    fn new_search_drops_previous_records() {
        let mut state = AvailabilityState::default();
        let first = state.begin(["alice.id", "alice.personal.id"]);
        state.apply(first, "alice.id", &AvailabilityEvent::Taken);
        state.begin(["bob.id"]);

        assert_eq!(state.names.len(), 1);
        assert!(state.record("alice.id").is_none());
        assert!(state.record("alice.personal.id").is_none());
        assert!(state.record("bob.id").is_some_and(|record| record.checking_availability));
    }
}
