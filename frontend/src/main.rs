use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod collaborator;
mod config;
mod form;
mod components {
    pub mod fields;
    pub mod file_upload;
    pub mod footer;
    pub mod header;
    pub mod notification;
    pub mod our_work;
    pub mod progress_bar;
    pub mod project_ideas;
    pub mod submission_success;
    pub mod theme_toggle;
}
mod pages {
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod project_request;
}

use collaborator::Collaborator;
use components::footer::Footer;
use components::header::Header;
use components::notification::NotificationProvider;
use pages::{contact::Contact, home::Home, not_found::NotFound, project_request::ProjectRequest};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/project-request")]
    ProjectRequest,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::ProjectRequest => {
            info!("Rendering Project Request page");
            html! { <ProjectRequest /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let collaborator = use_memo(|_| Collaborator::default(), ());

    html! {
        <BrowserRouter>
            <ContextProvider<Collaborator> context={(*collaborator).clone()}>
                <NotificationProvider>
                    <Header />
                    <main class="site-main">
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                </NotificationProvider>
            </ContextProvider<Collaborator>>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_match_their_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/project-request"), Some(Route::ProjectRequest));
        assert_eq!(Route::recognize("/contact"), Some(Route::Contact));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
        assert_eq!(Route::ProjectRequest.to_path(), "/project-request");
    }
}
