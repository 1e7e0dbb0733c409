use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const AUTO_ADVANCE_MS: u32 = 6_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    All,
    Web,
    Ai,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::All, Category::Web, Category::Ai];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All Work",
            Category::Web => "Web Apps",
            Category::Ai => "AI Projects",
        }
    }

    fn includes(self, work: &Showcase) -> bool {
        self == Category::All || self == work.category
    }
}

#[derive(Debug, PartialEq)]
pub struct Showcase {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: Category,
}

pub const SHOWCASE: [Showcase; 5] = [
    Showcase {
        title: "Campus Connect Portal",
        description: "A student networking platform with event management and resource sharing",
        image: "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?auto=format&fit=crop&w=1200&q=80",
        category: Category::Web,
    },
    Showcase {
        title: "Smart Study Planner",
        description: "AI-powered study scheduler with progress tracking and analytics",
        image: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?auto=format&fit=crop&w=1200&q=80",
        category: Category::Ai,
    },
    Showcase {
        title: "Healthcare Appointment System",
        description: "Comprehensive platform for managing patient appointments and medical records",
        image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&w=1200&q=80",
        category: Category::Web,
    },
    Showcase {
        title: "Sentiment Analysis Dashboard",
        description: "NLP-powered tool for analyzing sentiment from social media and feedback",
        image: "https://images.unsplash.com/photo-1487058792275-0ad4aaf24ca7?auto=format&fit=crop&w=1200&q=80",
        category: Category::Ai,
    },
    Showcase {
        title: "E-commerce Solution",
        description: "Full-featured online store with inventory management and analytics",
        image: "https://images.unsplash.com/photo-1500673922987-e212871fec22?auto=format&fit=crop&w=1200&q=80",
        category: Category::Web,
    },
];

pub fn filtered(category: Category) -> Vec<&'static Showcase> {
    SHOWCASE.iter().filter(|work| category.includes(work)).collect()
}

/// Moves `current` by `delta` positions around a ring of `len` slides.
pub fn wrap_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    ((current as isize + delta).rem_euclid(len)) as usize
}

#[function_component(OurWork)]
pub fn our_work() -> Html {
    let category = use_state(|| Category::All);
    let position = use_state(|| 0usize);
    let works = filtered(*category);
    let len = works.len();

    let step = {
        let position = position.clone();
        move |delta: isize| {
            let position = position.clone();
            Callback::from(move |_: MouseEvent| position.set(wrap_index(*position, delta, len)))
        }
    };

    {
        let position = position.clone();
        use_interval(
            move || position.set(wrap_index(*position, 1, len)),
            AUTO_ADVANCE_MS,
        );
    }

    let visible: Vec<&Showcase> = (0..len.min(3))
        .map(|offset| works[wrap_index(*position, offset as isize, len)])
        .collect();

    html! {
        <section class="section our-work">
            <style>
                {r#"
                .work-filters { display: flex; flex-wrap: wrap; gap: 0.5rem; justify-content: center; margin-bottom: 2rem; }
                .pill { border-radius: 999px; padding: 0.5rem 1.25rem; border: 1px solid var(--border); background: transparent; color: var(--text); cursor: pointer; }
                .pill.active { background: var(--brand-purple); border-color: var(--brand-purple); color: #fff; }
                .carousel { display: flex; align-items: center; gap: 1rem; margin-bottom: 2.5rem; }
                .carousel-track { flex: 1; display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
                .carousel-nav { border-radius: 999px; height: 2.5rem; width: 2.5rem; border: 1px solid var(--border); background: var(--card-bg); color: var(--text); cursor: pointer; }
                .work-card { background: var(--card-bg); border: 1px solid var(--border); border-radius: 12px; overflow: hidden; }
                .work-card img { width: 100%; height: 12rem; object-fit: cover; }
                .work-card-body { padding: 1.25rem; }
                .work-badge { display: inline-block; font-size: 0.75rem; padding: 0.15rem 0.6rem; border-radius: 999px; margin-bottom: 0.5rem; }
                .work-badge.web { background: rgba(139, 92, 246, 0.2); color: var(--brand-purple); }
                .work-badge.ai { background: rgba(20, 184, 166, 0.2); color: var(--brand-teal); }
                @media (max-width: 768px) {
                    .carousel-track { grid-template-columns: 1fr; }
                    .carousel-track .work-card:not(:first-child) { display: none; }
                }
                "#}
            </style>
            <div class="section-heading">
                <h2>{"Our Work"}</h2>
                <p>{"Explore our portfolio of successful student projects and client collaborations that showcase our expertise and innovation."}</p>
            </div>

            <div class="work-filters">
                { for Category::ALL.iter().map(|option| {
                    let chosen = *option;
                    let onclick = {
                        let category = category.clone();
                        let position = position.clone();
                        Callback::from(move |_: MouseEvent| {
                            category.set(chosen);
                            position.set(0);
                        })
                    };
                    html! {
                        <button class={classes!("pill", (*category == chosen).then_some("active"))} {onclick}>
                            {chosen.label()}
                        </button>
                    }
                }) }
            </div>

            <div class="carousel">
                <button class="carousel-nav" onclick={step(-1)} aria-label="Previous">{"‹"}</button>
                <div class="carousel-track">
                    { for visible.into_iter().map(|work| html! {
                        <article class="work-card" key={work.title}>
                            <img src={work.image} alt={work.title} />
                            <div class="work-card-body">
                                { match work.category {
                                    Category::Ai => html! { <span class="work-badge ai">{"AI Project"}</span> },
                                    _ => html! { <span class="work-badge web">{"Web App"}</span> },
                                } }
                                <h3>{work.title}</h3>
                                <p class="muted">{work.description}</p>
                            </div>
                        </article>
                    }) }
                </div>
                <button class="carousel-nav" onclick={step(1)} aria-label="Next">{"›"}</button>
            </div>

            <div class="centered">
                <Link<Route> to={Route::ProjectRequest} classes="gradient-button">{"Start Your Project"}</Link<Route>>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_partition_the_showcase() {
        assert_eq!(filtered(Category::All).len(), 5);
        assert_eq!(filtered(Category::Web).len(), 3);
        assert_eq!(filtered(Category::Ai).len(), 2);
        assert!(filtered(Category::Ai).iter().all(|work| work.category == Category::Ai));
    }

    #[test]
    fn carousel_wraps_in_both_directions() {
        assert_eq!(wrap_index(0, -1, 5), 4);
        assert_eq!(wrap_index(4, 1, 5), 0);
        assert_eq!(wrap_index(1, 1, 2), 0);
        assert_eq!(wrap_index(3, 0, 0), 0);
    }
}
