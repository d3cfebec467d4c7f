use skycast_common::PanelState;
use yew::prelude::*;

use super::api_key_prompt::ApiKeyPrompt;
use super::location_form::LocationForm;
use super::weather_card::WeatherCard;
use crate::common::error::ErrorBanner;
use crate::hooks::use_weather_app;
use crate::settings;

/// Search form, search result, and the saved-city panels.
#[function_component(WeatherDashboard)]
pub fn weather_dashboard() -> Html {
    let app = use_weather_app();
    let state = app.state();
    let suggestions = state.suggestions().to_vec();
    let has_api_key = settings::get_settings().has_api_key();

    let search_card = state.search().zip(state.search_panel()).map(|(slot, panel)| {
        let title = match &panel {
            PanelState::Available(report) => report.name.clone(),
            PanelState::Loading => slot.city.clone(),
            PanelState::NotAvailable => "City not available".to_string(),
        };
        html! {
            <WeatherCard
                key={format!("search-{}", slot.city)}
                title={title}
                panel={panel}
                suggestions={suggestions.clone()}
                on_add={Some(app.on_add.clone())}
                on_pick={Some(app.on_search.clone())}
                highlight={true}
            />
        }
    });

    html! {
        <>
            {if has_api_key { html! {} } else { html! { <ApiKeyPrompt /> } }}
            <LocationForm
                on_search={app.on_search.clone()}
                on_add={app.on_add.clone()}
                on_input_change={app.on_input.clone()}
                suggestions={suggestions.clone()}
            />
            {if let Some(message) = state.error() {
                html! { <ErrorBanner message={message.to_string()} /> }
            } else {
                html! {}
            }}
            <div class="weather-container grid grid-cols-1 md:grid-cols-2 gap-4">
                {search_card.unwrap_or_default()}
                { for state.locations().iter().map(|city| {
                    let on_delete = {
                        let on_remove = app.on_remove.clone();
                        let city = city.clone();
                        Callback::from(move |_: ()| on_remove.emit(city.clone()))
                    };
                    html! {
                        <WeatherCard
                            key={city.clone()}
                            title={city.clone()}
                            panel={state.saved_panel(city)}
                            saved_city={Some(city.clone())}
                            suggestions={suggestions.clone()}
                            on_delete={Some(on_delete)}
                            on_pick={Some(app.on_search.clone())}
                        />
                    }
                })}
            </div>
        </>
    }
}
