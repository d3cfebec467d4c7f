mod api_key_prompt;
mod forecast_panel;
mod location_form;
mod suggestions;
mod view;
mod weather_card;

pub use view::WeatherDashboard;
