use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: Option<String>,
}

/// The page's single message region. Hidden when there is nothing to say.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let Some(message) = &props.message else {
        return html! {};
    };
    log::debug!("Displaying message to user: {}", message);

    html! {
        <div id="error" role="alert" class="alert alert-warning my-4">
            <i class="fas fa-exclamation-circle text-xl"></i>
            <span class="text-sm">{ message }</span>
        </div>
    }
}
