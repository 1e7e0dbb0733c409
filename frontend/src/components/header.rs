use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::theme_toggle::{use_theme, ThemeToggle};
use crate::Route;

const NAV_LINKS: [(Route, &str); 3] = [
    (Route::Home, "Home"),
    (Route::ProjectRequest, "Project Request"),
    (Route::Contact, "Contact Us"),
];

#[function_component(BrandMark)]
pub fn brand_mark() -> Html {
    html! {
        <span class="brand">
            <span class="brand-badge">{"D"}</span>
            <span class="brand-name">
                <span class="brand-first">{"Decruze"}</span>
                <span class="brand-second">{" Digital"}</span>
            </span>
        </span>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let (theme, toggle_theme) = use_theme();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                        is_scrolled.set(scroll_y > 10.0);
                    }
                });
                if let Some(window) = &window {
                    if window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::warn!("Could not attach scroll listener");
                    }
                }
                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                .site-header {
                    position: sticky;
                    top: 0;
                    z-index: 30;
                    background: var(--card-bg);
                    border-bottom: 1px solid var(--border);
                    transition: box-shadow 0.2s ease;
                }
                .site-header.scrolled { box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08); }
                .header-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .brand { display: flex; align-items: center; gap: 0.5rem; font-weight: 700; font-size: 1.25rem; }
                .brand-badge {
                    height: 2.5rem;
                    width: 2.5rem;
                    border-radius: 0.5rem;
                    display: grid;
                    place-items: center;
                    color: #fff;
                    background: linear-gradient(135deg, var(--brand-purple), var(--brand-teal));
                }
                .brand-first { color: var(--text); }
                .brand-second { color: var(--brand-purple); }
                .desktop-nav { display: flex; align-items: center; gap: 1.5rem; }
                .nav-link { color: var(--text); font-weight: 500; }
                .nav-link:hover { color: var(--brand-purple); }
                .burger-menu { display: none; background: none; border: none; cursor: pointer; font-size: 1.5rem; color: var(--text); }
                .mobile-nav {
                    position: fixed;
                    top: 0;
                    right: 0;
                    bottom: 0;
                    width: 16rem;
                    background: var(--card-bg);
                    box-shadow: -4px 0 16px rgba(0, 0, 0, 0.15);
                    transform: translateX(100%);
                    transition: transform 0.3s ease-in-out;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    z-index: 30;
                }
                .mobile-nav.open { transform: translateX(0); }
                .nav-overlay { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); z-index: 20; }
                @media (max-width: 768px) {
                    .desktop-nav { display: none; }
                    .burger-menu { display: block; }
                    .brand-name { display: none; }
                }
                @media (min-width: 769px) {
                    .mobile-nav, .nav-overlay { display: none; }
                }
                "#}
            </style>
            <div class="header-inner">
                <Link<Route> to={Route::Home}>
                    <BrandMark />
                </Link<Route>>

                <nav class="desktop-nav">
                    { for NAV_LINKS.iter().map(|(route, label)| html! {
                        <Link<Route> to={route.clone()} classes="nav-link">{*label}</Link<Route>>
                    }) }
                    <ThemeToggle {theme} on_toggle={toggle_theme.clone()} />
                    <Link<Route> to={Route::ProjectRequest} classes="gradient-button">
                        {"Start Your Project"}
                    </Link<Route>>
                </nav>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle Menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            <div class={classes!("mobile-nav", (*menu_open).then(|| "open"))}>
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::Home}>
                        <BrandMark />
                    </Link<Route>>
                </div>
                { for NAV_LINKS.iter().map(|(route, label)| html! {
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={route.clone()} classes="nav-link">{*label}</Link<Route>>
                    </div>
                }) }
                <ThemeToggle {theme} on_toggle={toggle_theme.clone()} />
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::ProjectRequest} classes="gradient-button">
                        {"Start Your Project"}
                    </Link<Route>>
                </div>
            </div>

            if *menu_open {
                <div class="nav-overlay" onclick={close_menu}></div>
            }
        </header>
    }
}
