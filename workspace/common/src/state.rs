//! Application state: saved locations, weather cache, search slot and
//! suggestions, mutated only through [`Action`]s.

use std::collections::BTreeMap;

use crate::error::StorageError;
use crate::model::{PanelState, Snapshot};
use crate::storage::{
    KeyValueStore, LOCATIONS_KEY, WEATHER_CACHE_KEY, read_json_or_default, write_json,
};
use crate::suggest::SuggestionEngine;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Save a city. The caller fetches its weather when [`AppState::can_add`]
    /// allowed it.
    AddLocation(String),
    RemoveLocation(String),
    /// Result of a lookup for a saved city.
    WeatherFetched { city: String, snapshot: Snapshot },
    SearchStarted(String),
    SearchFinished { city: String, snapshot: Snapshot },
    /// Search box content changed.
    InputChanged(String),
}

/// The city currently being searched; `snapshot` is `None` while loading.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSlot {
    pub city: String,
    pub snapshot: Option<Snapshot>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    locations: Vec<String>,
    weather: BTreeMap<String, Snapshot>,
    search: Option<SearchSlot>,
    suggestions: Vec<String>,
    error: Option<String>,
    engine: SuggestionEngine,
}

impl AppState {
    /// Restore saved locations and the weather cache. Missing or malformed
    /// entries start empty.
    pub fn load<S>(store: &S) -> Self
    where
        S: KeyValueStore + ?Sized,
    {
        let persisted: Vec<String> = read_json_or_default(store, LOCATIONS_KEY);
        let mut locations: Vec<String> = Vec::with_capacity(persisted.len());
        for city in persisted {
            if !city.trim().is_empty() && !locations.contains(&city) {
                locations.push(city);
            }
        }
        let weather: BTreeMap<String, Snapshot> = read_json_or_default(store, WEATHER_CACHE_KEY);

        tracing::info!(
            "Loaded {} saved locations, {} cached snapshots",
            locations.len(),
            weather.len()
        );

        Self {
            locations,
            weather,
            ..Self::default()
        }
    }

    pub fn persist<S>(&self, store: &S) -> Result<(), StorageError>
    where
        S: KeyValueStore + ?Sized,
    {
        write_json(store, LOCATIONS_KEY, &self.locations)?;
        write_json(store, WEATHER_CACHE_KEY, &self.weather)
    }

    /// A city can be saved unless it is blank, already saved, or its last
    /// known lookup (cached or in the search slot) found nothing.
    pub fn can_add(&self, city: &str) -> bool {
        if city.trim().is_empty() || self.locations.iter().any(|saved| saved == city) {
            return false;
        }
        if matches!(self.weather.get(city), Some(Snapshot::NotAvailable(_))) {
            return false;
        }
        !matches!(
            &self.search,
            Some(SearchSlot { city: searched, snapshot: Some(Snapshot::NotAvailable(_)) })
                if searched == city
        )
    }

    /// Apply an action. Returns `true` when persisted state changed.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::AddLocation(city) => {
                if !self.can_add(&city) {
                    tracing::debug!("Not adding '{}'", city);
                    return false;
                }
                tracing::info!("Saving location {}", city);
                self.locations.push(city);
                self.search = None;
                true
            }
            Action::RemoveLocation(city) => {
                let before = self.locations.len();
                self.locations.retain(|saved| saved != &city);
                let removed_entry = self.weather.remove(&city).is_some();
                let changed = removed_entry || self.locations.len() != before;
                if changed {
                    tracing::info!("Removed location {}", city);
                }
                changed
            }
            Action::WeatherFetched { city, snapshot } => {
                if !self.locations.contains(&city) {
                    tracing::debug!("Dropping weather for {}: no longer saved", city);
                    return false;
                }
                self.record_outcome(&city, &snapshot);
                self.weather.insert(city, snapshot);
                true
            }
            Action::SearchStarted(city) => {
                tracing::debug!("Searching for {}", city);
                self.search = Some(SearchSlot {
                    city,
                    snapshot: None,
                });
                false
            }
            Action::SearchFinished { city, snapshot } => {
                let is_current = self.search.as_ref().is_some_and(|slot| slot.city == city);
                if !is_current {
                    tracing::debug!("Dropping stale search result for {}", city);
                    return false;
                }
                self.record_outcome(&city, &snapshot);
                self.search = Some(SearchSlot {
                    city,
                    snapshot: Some(snapshot),
                });
                false
            }
            Action::InputChanged(query) => {
                self.suggestions = self.engine.suggest(&query);
                false
            }
        }
    }

    fn record_outcome(&mut self, city: &str, snapshot: &Snapshot) {
        if snapshot.is_available() {
            self.error = None;
            self.suggestions.clear();
        } else {
            self.error = Some(format!("City not found: {city}"));
            self.suggestions = self.engine.did_you_mean(city);
        }
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Cities whose weather is re-fetched at startup.
    pub fn refresh_targets(&self) -> Vec<String> {
        self.locations.clone()
    }

    pub fn cached(&self, city: &str) -> Option<&Snapshot> {
        self.weather.get(city)
    }

    pub fn saved_panel(&self, city: &str) -> PanelState {
        PanelState::from(self.weather.get(city))
    }

    pub fn search(&self) -> Option<&SearchSlot> {
        self.search.as_ref()
    }

    pub fn search_panel(&self) -> Option<PanelState> {
        self.search
            .as_ref()
            .map(|slot| PanelState::from(slot.snapshot.as_ref()))
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
