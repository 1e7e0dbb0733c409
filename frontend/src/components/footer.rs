use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    background: #111827;
                    color: #fff;
                    padding: 3rem 1rem 2rem;
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .footer-blurb { color: #d1d5db; max-width: 20rem; }
                .footer-heading { font-size: 1.1rem; font-weight: 600; margin-bottom: 1rem; }
                .footer-list { list-style: none; padding: 0; margin: 0; display: grid; gap: 0.5rem; }
                .footer-list a { color: #d1d5db; }
                .footer-list a:hover { color: #fff; }
                .footer-social { display: flex; gap: 1rem; margin-top: 1rem; }
                .footer-social a { color: #d1d5db; font-size: 0.9rem; }
                .footer-bottom {
                    max-width: 1200px;
                    margin: 2rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid #1f2937;
                    text-align: center;
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                .site-footer .brand-first { color: #fff; }
                .site-footer .brand-second { color: #c4b5fd; }
                @media (max-width: 768px) {
                    .footer-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <crate::components::header::BrandMark />
                    <p class="footer-blurb">
                        {"Helping college students build innovative software projects that transform their academic journey."}
                    </p>
                    <div class="footer-social">
                        <a href="https://github.com/" target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                        <a href="https://linkedin.com/" target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                        <a href="https://instagram.com/" target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                    </div>
                </div>
                <div>
                    <h3 class="footer-heading">{"Quick Links"}</h3>
                    <ul class="footer-list">
                        <li><Link<Route> to={Route::Home}>{"Home"}</Link<Route>></li>
                        <li><Link<Route> to={Route::ProjectRequest}>{"Project Request"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{"Contact Us"}</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h3 class="footer-heading">{"Contact Info"}</h3>
                    <ul class="footer-list">
                        <li>
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{"✉ "}{config::CONTACT_EMAIL}</a>
                        </li>
                        <li>
                            <a href={config::CONTACT_PHONE_HREF}>{"☎ "}{config::CONTACT_PHONE_DISPLAY}</a>
                        </li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", year, config::SITE_NAME)}</p>
            </div>
        </footer>
    }
}
