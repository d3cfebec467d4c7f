use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
}

/// Inline error line shown above the weather panels.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    log::debug!("Displaying error to user: {}", props.message);

    html! {
        <div class="alert alert-error error-message my-4">
            <i class="fas fa-exclamation-circle"></i>
            <span>{&props.message}</span>
        </div>
    }
}
