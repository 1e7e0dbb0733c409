use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::our_work::OurWork;
use crate::components::project_ideas::ProjectIdeas;
use crate::Route;

const HERO_SNIPPET: &str = r#"// Your innovative project
struct Project {
    idea: &'static str,
    execution: &'static str,
    result: &'static str,
}

impl Project {
    fn start(&self) {
        println!("Let's build something amazing!");
    }
}

Project {
    idea: "brilliant",
    execution: "flawless",
    result: "outstanding",
}.start();
// Output: Let's build something amazing!"#;

const FEATURES: [(&str, &str, &str); 4] = [
    ("</>", "Web Development", "Modern, responsive websites and web applications built with the latest technologies."),
    ("◎", "AI & ML Applications", "Intelligent applications that leverage machine learning and artificial intelligence."),
    ("▤", "Database Solutions", "Efficient database design and implementation for your data-driven applications."),
    ("✎", "UI/UX Design", "Intuitive, beautiful interfaces that provide excellent user experience."),
];

const OFFERINGS: [&str; 5] = ["Web Apps", "Mobile Apps", "AI/ML Projects", "UI/UX Design", "Database Solutions"];

#[function_component(Home)]
pub fn home() -> Html {
    let arrow_hovered = use_state(|| false);

    let onmouseenter = {
        let arrow_hovered = arrow_hovered.clone();
        Callback::from(move |_: MouseEvent| arrow_hovered.set(true))
    };
    let onmouseleave = {
        let arrow_hovered = arrow_hovered.clone();
        Callback::from(move |_: MouseEvent| arrow_hovered.set(false))
    };

    html! {
        <div class="home">
            <style>
                {r#"
                .hero { padding: 5rem 1rem; background: linear-gradient(135deg, var(--hero-from), var(--hero-to)); }
                .hero-grid { max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }
                .hero h1 { font-size: 3rem; line-height: 1.1; margin-bottom: 1.5rem; }
                .hero h1 span { color: var(--brand-purple); }
                .hero-actions { display: flex; gap: 1rem; flex-wrap: wrap; margin-top: 2rem; }
                .code-window { background: #1f2937; border-radius: 12px; overflow: hidden; box-shadow: 0 20px 40px rgba(0, 0, 0, 0.25); }
                .code-window-bar { display: flex; gap: 0.4rem; padding: 0.75rem; background: #111827; }
                .code-window-bar span { height: 0.75rem; width: 0.75rem; border-radius: 999px; }
                .code-window pre { margin: 0; padding: 1.25rem; color: #e5e7eb; font-size: 0.85rem; overflow-x: auto; }
                .feature-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.5rem; }
                .feature-card { background: var(--card-bg); border: 1px solid var(--border); border-radius: 12px; padding: 1.5rem; }
                .feature-icon { height: 3rem; width: 3rem; border-radius: 10px; display: grid; place-items: center; background: rgba(139, 92, 246, 0.12); color: var(--brand-purple); margin-bottom: 1rem; font-weight: 700; }
                .arrow-link { display: inline-flex; align-items: center; gap: 0.5rem; color: var(--brand-purple); font-weight: 600; }
                .arrow-link .arrow { transition: transform 0.3s; }
                .arrow-link .arrow.shifted { transform: translateX(4px); }
                .cta-band { background: linear-gradient(90deg, var(--brand-purple), var(--brand-teal)); color: #fff; border-radius: 16px; padding: 3rem; display: flex; justify-content: space-between; align-items: center; gap: 2rem; }
                .cta-band ul { list-style: none; padding: 0; display: flex; flex-wrap: wrap; gap: 1rem; }
                .cta-band .gradient-button { background: #fff; color: var(--brand-purple); }
                @media (max-width: 768px) {
                    .hero-grid, .feature-grid { grid-template-columns: 1fr; }
                    .hero h1 { font-size: 2.25rem; }
                    .cta-band { flex-direction: column; text-align: center; }
                }
                "#}
            </style>

            <section class="hero">
                <div class="hero-grid">
                    <div>
                        <h1>{"Transform Your "}<span>{"Academic Projects"}</span>{" into Reality"}</h1>
                        <p class="lead">
                            {"We empower college students to build innovative software projects that stand out. Share your requirements, and we'll help turn your ideas into functional applications."}
                        </p>
                        <div class="hero-actions">
                            <Link<Route> to={Route::ProjectRequest} classes="gradient-button">{"Submit Project Request"}</Link<Route>>
                            <Link<Route> to={Route::Contact} classes="outline-button">{"Contact Us"}</Link<Route>>
                        </div>
                    </div>
                    <div class="code-window">
                        <div class="code-window-bar">
                            <span style="background: #ef4444;"></span>
                            <span style="background: #f59e0b;"></span>
                            <span style="background: #22c55e;"></span>
                        </div>
                        <pre><code>{HERO_SNIPPET}</code></pre>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="section-heading">
                    <h2>{"Why Choose Decruze Digital?"}</h2>
                    <p>{"We specialize in helping college students bring their software projects to life with industry-standard tools and practices."}</p>
                </div>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|(icon, title, body)| html! {
                        <div class="feature-card" key={*title}>
                            <div class="feature-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p class="muted">{*body}</p>
                        </div>
                    }) }
                </div>
                <div class="centered" {onmouseenter} {onmouseleave}>
                    <Link<Route> to={Route::ProjectRequest} classes="arrow-link">
                        <span>{"Submit your project request"}</span>
                        <span class={classes!("arrow", (*arrow_hovered).then_some("shifted"))}>{"→"}</span>
                    </Link<Route>>
                </div>
            </section>

            <OurWork />
            <ProjectIdeas />

            <section class="section">
                <div class="cta-band">
                    <div>
                        <h2>{"Ready to Build Your Project?"}</h2>
                        <p>
                            {"Let's collaborate to create something amazing. Submit your project details and we'll get back to you within 24 hours to discuss the next steps."}
                        </p>
                        <ul>
                            { for OFFERINGS.iter().map(|item| html! { <li key={*item}>{"✓ "}{*item}</li> }) }
                        </ul>
                    </div>
                    <Link<Route> to={Route::ProjectRequest} classes="gradient-button">{"Start Your Project"}</Link<Route>>
                </div>
            </section>
        </div>
    }
}
