use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    html! {
        <header class="navbar App-header bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4 gap-2">
                <i class="fas fa-cloud-sun text-xl"></i>
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
        </header>
    }
}
