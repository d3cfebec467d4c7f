use skycast_common::{PanelState, WeatherReport};
use yew::prelude::*;

use super::forecast_panel::ForecastPanel;
use super::suggestions::DidYouMean;
use crate::common::loading::Loading;

#[derive(Properties, PartialEq)]
pub struct WeatherCardProps {
    /// Heading for saved cities; search results use the reported name.
    pub title: String,
    pub panel: PanelState,
    pub suggestions: Vec<String>,
    /// Saved-city key; the forecast is fetched for it instead of the
    /// reported name.
    #[prop_or_default]
    pub saved_city: Option<String>,
    #[prop_or_default]
    pub on_delete: Option<Callback<()>>,
    #[prop_or_default]
    pub on_add: Option<Callback<String>>,
    #[prop_or_default]
    pub on_pick: Option<Callback<String>>,
    #[prop_or_default]
    pub highlight: bool,
}

#[function_component(WeatherCard)]
pub fn weather_card(props: &WeatherCardProps) -> Html {
    let delete_button = props.on_delete.as_ref().map(|on_delete| {
        let on_delete = on_delete.clone();
        html! {
            <button class="btn btn-sm btn-ghost delete-btn" onclick={Callback::from(move |_: MouseEvent| on_delete.emit(()))}>
                <i class="fas fa-trash"></i>{" Delete"}
            </button>
        }
    });

    let body = match &props.panel {
        PanelState::Loading => html! { <Loading /> },
        PanelState::NotAvailable => html! {
            <DidYouMean suggestions={props.suggestions.clone()} on_pick={props.on_pick.clone()} />
        },
        PanelState::Available(report) => html! {
            <>
                <WeatherInfo report={report.clone()} />
                {if let Some(on_add) = &props.on_add {
                    let on_add = on_add.clone();
                    let name = report.name.clone();
                    html! {
                        <div class="card-actions mt-2">
                            <button class="btn btn-sm btn-primary" onclick={Callback::from(move |_: MouseEvent| on_add.emit(name.clone()))}>
                                <i class="fas fa-plus"></i>{" Add"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }}
                <ForecastPanel city={forecast_city(props.saved_city.as_deref(), report).to_string()} />
            </>
        },
    };

    html! {
        <div class={classes!("weather-item", "card", "bg-base-100", "shadow", props.highlight.then_some("search-results"))}>
            <div class="card-body">
                <div class="weather-header flex justify-between items-center">
                    <h2 class="card-title">{&props.title}</h2>
                    {delete_button.unwrap_or_default()}
                </div>
                {body}
            </div>
        </div>
    }
}

/// Saved cards follow the key the user saved; search results follow the
/// name the service reported.
fn forecast_city<'a>(saved_city: Option<&'a str>, report: &'a WeatherReport) -> &'a str {
    saved_city.unwrap_or(&report.name)
}

#[derive(Properties, PartialEq)]
struct WeatherInfoProps {
    report: WeatherReport,
}

#[function_component(WeatherInfo)]
fn weather_info(props: &WeatherInfoProps) -> Html {
    let report = &props.report;
    html! {
        <div class="weather-info space-y-1">
            <p><i class="fas fa-temperature-high w-6"></i>{format!("Temperature: {}°C", report.temperature_celsius())}</p>
            <p><i class="fas fa-tint w-6"></i>{format!("Humidity: {}%", report.humidity)}</p>
            <p><i class="fas fa-smog w-6"></i>{format!("Air Quality Index: {}", report.air_quality_label())}</p>
            <p><i class="fas fa-wind w-6"></i>{&report.description}</p>
            <p class="text-xs text-gray-500">{format!("Updated {}", report.observed_at.format("%Y-%m-%d %H:%M UTC"))}</p>
        </div>
    }
}
