use chrono::{DateTime, Local, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SubmissionSuccessProps {
    pub title: &'static str,
    pub message: &'static str,
    #[prop_or(Route::Home)]
    pub return_to: Route,
    #[prop_or("Return Home")]
    pub return_text: &'static str,
    #[prop_or_default]
    pub submitted_at: Option<DateTime<Utc>>,
}

#[function_component(SubmissionSuccess)]
pub fn submission_success(props: &SubmissionSuccessProps) -> Html {
    let navigator = use_navigator();

    let onclick = {
        let route = props.return_to.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        })
    };

    html! {
        <div class="submission-success">
            <div class="success-checkmark">{"✓"}</div>
            <h2>{props.title}</h2>
            <p class="success-message">{props.message}</p>
            if let Some(at) = props.submitted_at {
                <p class="success-time">
                    {format!("Received {}", at.with_timezone(&Local).format("%d %b %Y, %H:%M"))}
                </p>
            }
            <button class="gradient-button" {onclick}>{props.return_text}</button>
        </div>
    }
}
