use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let location = use_location();

    use_effect_with_deps(
        |path| {
            warn!("404: no page at {}", path);
            || ()
        },
        location.map(|l| l.path().to_string()).unwrap_or_default(),
    );

    html! {
        <div class="page not-found">
            <h1>{"404"}</h1>
            <p class="muted">{"Oops! Page not found"}</p>
            <Link<Route> to={Route::Home} classes="gradient-button">{"Return to Home"}</Link<Route>>
        </div>
    }
}
