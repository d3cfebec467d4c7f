use skycast_common::{fetch_forecast, DailyForecast, RequestGeneration};
use yew::prelude::*;

use crate::api_client::OpenWeatherClient;

#[derive(Properties, PartialEq)]
pub struct ForecastPanelProps {
    pub city: String,
}

/// Five-day forecast for one city, refetched whenever the city changes.
///
/// A response is applied only if no newer request was started and the panel
/// is still mounted, so a slow answer for a previous city cannot overwrite
/// the current one.
#[function_component(ForecastPanel)]
pub fn forecast_panel(props: &ForecastPanelProps) -> Html {
    let days = use_state(Vec::<DailyForecast>::new);
    let requests = use_mut_ref(RequestGeneration::default);

    {
        let days = days.clone();
        let requests = requests.clone();
        use_effect_with(props.city.clone(), move |city| {
            days.set(Vec::new());
            let generation = requests.borrow_mut().begin();
            let city = city.clone();
            {
                let requests = requests.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let client = OpenWeatherClient::from_settings();
                    let forecast = fetch_forecast(&client, &city).await;
                    if requests.borrow().is_current(generation) {
                        days.set(forecast);
                    } else {
                        log::debug!("Discarding stale forecast for {}", city);
                    }
                });
            }
            move || requests.borrow_mut().cancel()
        });
    }

    html! {
        <div class="forecast-container mt-4">
            <h3 class="font-semibold mb-2">{format!("5-Day Forecast for {}", props.city)}</h3>
            <ul class="forecast-list grid grid-cols-5 gap-2">
                { for days.iter().map(|day| html! {
                    <li key={day.timestamp} class="forecast-item flex flex-col items-center text-sm">
                        <span class="forecast-date text-gray-500">{day.date.format("%a %b %e").to_string()}</span>
                        <span class="forecast-temp font-bold">{format!("{}°C", day.temperature_celsius())}</span>
                        <span class="forecast-desc text-center">{&day.description}</span>
                    </li>
                })}
            </ul>
        </div>
    }
}
