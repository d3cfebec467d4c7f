use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LocationFormProps {
    pub on_search: Callback<String>,
    pub on_add: Callback<String>,
    pub on_input_change: Callback<String>,
    pub suggestions: Vec<String>,
}

/// Search box with Search/Add buttons and a live suggestion dropdown.
#[function_component(LocationForm)]
pub fn location_form(props: &LocationFormProps) -> Html {
    let city = use_state(String::new);
    let show_suggestions = use_state(|| false);

    let on_input = {
        let city = city.clone();
        let show_suggestions = show_suggestions.clone();
        let on_input_change = props.on_input_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            show_suggestions.set(!value.is_empty());
            city.set(value.clone());
            on_input_change.emit(value);
        })
    };

    let on_submit = {
        let city = city.clone();
        let show_suggestions = show_suggestions.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if city.trim().is_empty() {
                return;
            }
            on_search.emit((*city).clone());
            show_suggestions.set(false);
        })
    };

    let on_add = {
        let city = city.clone();
        let show_suggestions = show_suggestions.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| {
            if city.trim().is_empty() {
                return;
            }
            on_add.emit((*city).clone());
            city.set(String::new());
            show_suggestions.set(false);
        })
    };

    let on_pick = {
        let city = city.clone();
        let show_suggestions = show_suggestions.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |suggestion: String| {
            log::debug!("Suggestion picked: {}", suggestion);
            city.set(suggestion.clone());
            show_suggestions.set(false);
            on_search.emit(suggestion);
        })
    };

    html! {
        <div class="location-form-container relative mb-6">
            <form onsubmit={on_submit} class="location-form flex gap-2">
                <input
                    type="text"
                    class="input input-bordered flex-1"
                    placeholder="Enter city name"
                    value={(*city).clone()}
                    oninput={on_input}
                />
                <div class="buttons-container flex gap-2">
                    <button type="submit" class="btn btn-primary">
                        <i class="fas fa-search"></i>{" Search"}
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_add}>
                        <i class="fas fa-plus"></i>{" Add"}
                    </button>
                </div>
            </form>
            {if *show_suggestions && !props.suggestions.is_empty() {
                html! {
                    <ul class="suggestions-list menu bg-base-100 shadow rounded-box absolute z-30 w-full mt-1">
                        { for props.suggestions.iter().map(|suggestion| {
                            let on_click = {
                                let on_pick = on_pick.clone();
                                let suggestion = suggestion.clone();
                                Callback::from(move |_: MouseEvent| on_pick.emit(suggestion.clone()))
                            };
                            html! {
                                <li key={suggestion.clone()}><a onclick={on_click}>{suggestion}</a></li>
                            }
                        })}
                    </ul>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
