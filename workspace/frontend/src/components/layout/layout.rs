use yew::prelude::*;
use super::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="App flex flex-col min-h-screen bg-base-200">
            <Navbar title={props.title.clone()} />
            <main class="flex-1 p-6 max-w-5xl w-full mx-auto">
                { for props.children.iter() }
            </main>
        </div>
    }
}
