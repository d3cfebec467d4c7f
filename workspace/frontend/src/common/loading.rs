use yew::prelude::*;

/// Placeholder for a panel whose data has not arrived yet.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex flex-col justify-center items-center py-6 gap-2">
            <span class="loading loading-spinner loading-md"></span>
            <p class="text-sm text-gray-500">{"Loading..."}</p>
        </div>
    }
}
