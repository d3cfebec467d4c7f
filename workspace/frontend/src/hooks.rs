use std::collections::HashSet;
use std::rc::Rc;

use skycast_common::{fetch_snapshot, Action, AppState};
use yew::prelude::*;

use crate::api_client::OpenWeatherClient;
use crate::common::toast::ToastContext;
use crate::storage::BrowserStorage;

/// Reducer wrapper around [`AppState`]; persists to local storage whenever an
/// action changes saved locations or the weather cache.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherStore {
    pub state: AppState,
}

impl WeatherStore {
    pub fn load() -> Self {
        Self {
            state: AppState::load(&BrowserStorage),
        }
    }
}

impl Reducible for WeatherStore {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        log::trace!("Applying {:?}", action);
        let mut state = self.state.clone();
        if state.apply(action) {
            if let Err(e) = state.persist(&BrowserStorage) {
                log::error!("Failed to persist weather state: {}", e);
            }
        }
        Rc::new(Self { state })
    }
}

/// State handle plus the user actions wired to it.
#[derive(Clone)]
pub struct WeatherApp {
    pub store: UseReducerHandle<WeatherStore>,
    pub on_search: Callback<String>,
    pub on_add: Callback<String>,
    pub on_remove: Callback<String>,
    pub on_input: Callback<String>,
}

impl WeatherApp {
    pub fn state(&self) -> &AppState {
        &self.store.state
    }
}

/// Adds dispatched since the last render.
///
/// Callbacks see the state of the last render, so two clicks before a
/// re-render would both pass [`AppState::can_add`]. A claim blocks the second
/// one; claims are dropped once a render has applied the queued actions.
#[derive(Debug, Default)]
pub struct PendingAdds {
    cities: HashSet<String>,
}

impl PendingAdds {
    /// Returns `true` if this add should go ahead (toast and fetch).
    pub fn claim(&mut self, state: &AppState, city: &str) -> bool {
        if !state.can_add(city) || self.cities.contains(city) {
            return false;
        }
        self.cities.insert(city.to_string());
        true
    }

    pub fn settle(&mut self) {
        self.cities.clear();
    }
}

fn notify_not_found(toast_ctx: &Option<ToastContext>, city: &str) {
    if let Some(toast_ctx) = toast_ctx {
        toast_ctx.show_error(format!("Could not load weather for {}", city));
    }
}

fn spawn_weather_fetch(
    dispatcher: UseReducerDispatcher<WeatherStore>,
    toast_ctx: Option<ToastContext>,
    city: String,
) {
    wasm_bindgen_futures::spawn_local(async move {
        let client = OpenWeatherClient::from_settings();
        let snapshot = fetch_snapshot(&client, &city).await;
        if !snapshot.is_available() {
            notify_not_found(&toast_ctx, &city);
        }
        dispatcher.dispatch(Action::WeatherFetched { city, snapshot });
    });
}

#[hook]
pub fn use_weather_app() -> WeatherApp {
    let store = use_reducer(WeatherStore::load);
    let toast_ctx = use_context::<ToastContext>();
    let pending_adds = use_mut_ref(PendingAdds::default);

    {
        let pending_adds = pending_adds.clone();
        use_effect(move || {
            pending_adds.borrow_mut().settle();
            || ()
        });
    }

    // Refresh every saved city once on mount; fetches are independent.
    {
        let store = store.clone();
        let toast_ctx = toast_ctx.clone();
        use_effect_with((), move |_| {
            let targets = store.state.refresh_targets();
            log::info!("Refreshing weather for {} saved locations", targets.len());
            for city in targets {
                spawn_weather_fetch(store.dispatcher(), toast_ctx.clone(), city);
            }
            || ()
        });
    }

    let on_search = {
        let dispatcher = store.dispatcher();
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |city: String| {
            log::info!("Searching for {}", city);
            dispatcher.dispatch(Action::SearchStarted(city.clone()));

            let dispatcher = dispatcher.clone();
            let toast_ctx = toast_ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = OpenWeatherClient::from_settings();
                let snapshot = fetch_snapshot(&client, &city).await;
                if !snapshot.is_available() {
                    notify_not_found(&toast_ctx, &city);
                }
                dispatcher.dispatch(Action::SearchFinished { city, snapshot });
            });
        })
    };

    let on_add = {
        let store = store.clone();
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |city: String| {
            if !pending_adds.borrow_mut().claim(&store.state, &city) {
                log::debug!("Ignoring add for {}", city);
                return;
            }
            store.dispatch(Action::AddLocation(city.clone()));
            if let Some(toast_ctx) = &toast_ctx {
                toast_ctx.show_success(format!("Added {}", city));
            }
            spawn_weather_fetch(store.dispatcher(), toast_ctx.clone(), city);
        })
    };

    let on_remove = {
        let dispatcher = store.dispatcher();
        Callback::from(move |city: String| {
            log::info!("Removing {}", city);
            dispatcher.dispatch(Action::RemoveLocation(city.clone()));
            if let Some(toast_ctx) = &toast_ctx {
                toast_ctx.show_info(format!("Removed {}", city));
            }
        })
    };

    let on_input = {
        let dispatcher = store.dispatcher();
        Callback::from(move |value: String| dispatcher.dispatch(Action::InputChanged(value)))
    };

    WeatherApp {
        store,
        on_search,
        on_add,
        on_remove,
        on_input,
    }
}
