use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DidYouMeanProps {
    pub suggestions: Vec<String>,
    #[prop_or_default]
    pub on_pick: Option<Callback<String>>,
}

/// "City not available" body with the current did-you-mean candidates.
#[function_component(DidYouMean)]
pub fn did_you_mean(props: &DidYouMeanProps) -> Html {
    html! {
        <div class="not-available text-sm">
            <p class="text-error">{"City not available"}</p>
            {if props.suggestions.is_empty() {
                html! {}
            } else {
                html! {
                    <div class="mt-2">
                        <p class="font-semibold">{"Did you mean:"}</p>
                        <ul class="list-disc list-inside">
                            { for props.suggestions.iter().map(|suggestion| {
                                match &props.on_pick {
                                    Some(on_pick) => {
                                        let on_pick = on_pick.clone();
                                        let picked = suggestion.clone();
                                        html! {
                                            <li key={suggestion.clone()}>
                                                <a class="link" onclick={Callback::from(move |_: MouseEvent| on_pick.emit(picked.clone()))}>
                                                    {suggestion}
                                                </a>
                                            </li>
                                        }
                                    }
                                    None => html! { <li key={suggestion.clone()}>{suggestion}</li> },
                                }
                            })}
                        </ul>
                    </div>
                }
            }}
        </div>
    }
}
