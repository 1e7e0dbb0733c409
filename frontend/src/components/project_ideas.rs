use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    Easy,
    Medium,
    Advanced,
}

impl Complexity {
    pub fn stars(self) -> usize {
        match self {
            Complexity::Easy => 1,
            Complexity::Medium => 2,
            Complexity::Advanced => 3,
        }
    }

    pub fn star_row(self) -> String {
        "★".repeat(self.stars())
    }

    pub fn label(self) -> &'static str {
        match self {
            Complexity::Easy => "Easy",
            Complexity::Medium => "Medium",
            Complexity::Advanced => "Advanced",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Complexity::Easy => "badge-easy",
            Complexity::Medium => "badge-medium",
            Complexity::Advanced => "badge-advanced",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Idea {
    pub id: u32,
    pub title: &'static str,
    pub complexity: Complexity,
    pub brief: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct SemesterGroup {
    pub tab: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub ideas: [Idea; 4],
}

pub const SEMESTER_GROUPS: [SemesterGroup; 3] = [
    SemesterGroup {
        tab: "sem-3-4",
        title: "Semester 3-4",
        description: "Foundation projects suitable for early CS/IT students",
        ideas: [
            Idea { id: 1, title: "Library Management System", complexity: Complexity::Easy, brief: "Build a simple system to track books, members, and lending records." },
            Idea { id: 2, title: "Student Result Portal", complexity: Complexity::Easy, brief: "Develop a web application to display and manage student exam results." },
            Idea { id: 3, title: "Weather Dashboard", complexity: Complexity::Medium, brief: "Create a weather application that fetches and displays data from a weather API." },
            Idea { id: 4, title: "Personal Blog Platform", complexity: Complexity::Medium, brief: "Build a CMS for creating and managing blog posts with user authentication." },
        ],
    },
    SemesterGroup {
        tab: "sem-5-6",
        title: "Semester 5-6",
        description: "Intermediate projects for growing skills and portfolio development",
        ideas: [
            Idea { id: 5, title: "E-commerce Platform", complexity: Complexity::Medium, brief: "Develop a full-stack online store with product catalog and shopping cart." },
            Idea { id: 6, title: "Expense Tracker with Analytics", complexity: Complexity::Medium, brief: "Create an application to track expenses with visual reports and insights." },
            Idea { id: 7, title: "Sentiment Analysis Dashboard", complexity: Complexity::Advanced, brief: "Build an NLP-powered tool for analyzing sentiment from text data." },
            Idea { id: 8, title: "Real-time Chat Application", complexity: Complexity::Medium, brief: "Create a WebSocket-based live chat platform with multiple rooms." },
        ],
    },
    SemesterGroup {
        tab: "sem-7-8",
        title: "Semester 7-8",
        description: "Advanced projects suitable for final year and placement preparation",
        ideas: [
            Idea { id: 9, title: "AI-Powered Resume Analyzer", complexity: Complexity::Advanced, brief: "Build a system that uses AI to evaluate and score resumes for job positions." },
            Idea { id: 10, title: "Blockchain-based Certificate Verification", complexity: Complexity::Advanced, brief: "Create a platform to issue and verify educational certificates using blockchain." },
            Idea { id: 11, title: "Healthcare Appointment System", complexity: Complexity::Medium, brief: "Develop a comprehensive system for managing patient appointments and records." },
            Idea { id: 12, title: "Computer Vision Object Recognition", complexity: Complexity::Advanced, brief: "Build an application that can identify and classify objects in images and video." },
        ],
    },
];

/// Clicking the open idea collapses it, any other opens it alone.
pub fn toggle_expanded(current: Option<u32>, clicked: u32) -> Option<u32> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(ProjectIdeas)]
pub fn project_ideas() -> Html {
    let active_tab = use_state(|| 0usize);
    let expanded = use_state(|| None::<u32>);

    let group = &SEMESTER_GROUPS[(*active_tab).min(SEMESTER_GROUPS.len() - 1)];

    html! {
        <section class="section project-ideas">
            <style>
                {r#"
                .idea-tabs { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.25rem; background: var(--muted-bg); padding: 0.25rem; border-radius: 8px; margin-bottom: 2rem; }
                .idea-tab { border: none; background: transparent; padding: 0.6rem; border-radius: 6px; cursor: pointer; color: var(--muted); font-weight: 500; }
                .idea-tab.active { background: var(--card-bg); color: var(--text); box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1); }
                .idea-card { background: var(--card-bg); border: 1px solid var(--border); border-radius: 12px; padding: 1.5rem; }
                .idea-item { border-bottom: 1px solid var(--border); }
                .idea-trigger { width: 100%; display: flex; align-items: center; gap: 0.5rem; padding: 1rem 0; background: none; border: none; color: var(--text); cursor: pointer; text-align: left; font-size: 1rem; }
                .idea-stars { margin-left: auto; color: #f59e0b; }
                .idea-body { padding: 1rem; background: var(--muted-bg); border-radius: 8px; margin-bottom: 1rem; }
                .idea-footer { display: flex; justify-content: space-between; align-items: center; }
                .badge-easy { background: #dcfce7; color: #166534; }
                .badge-medium { background: #dbeafe; color: #1e40af; }
                .badge-advanced { background: #f3e8ff; color: #6b21a8; }
                .complexity-badge { padding: 0.15rem 0.6rem; border-radius: 999px; font-size: 0.75rem; }
                "#}
            </style>
            <div class="section-heading">
                <h2>{"Explore Project Ideas"}</h2>
                <p>{"Browse our curated collection of project ideas organized by semester and complexity level. Find the perfect project to enhance your skills and portfolio."}</p>
            </div>

            <div class="idea-tabs" role="tablist">
                { for SEMESTER_GROUPS.iter().enumerate().map(|(index, tab_group)| {
                    let onclick = {
                        let active_tab = active_tab.clone();
                        let expanded = expanded.clone();
                        Callback::from(move |_: MouseEvent| {
                            active_tab.set(index);
                            expanded.set(None);
                        })
                    };
                    html! {
                        <button
                            key={tab_group.tab}
                            role="tab"
                            class={classes!("idea-tab", (*active_tab == index).then_some("active"))}
                            {onclick}
                        >
                            {tab_group.title}
                        </button>
                    }
                }) }
            </div>

            <div class="idea-card">
                <h3>{group.title}</h3>
                <p class="muted">{group.description}</p>
                { for group.ideas.iter().map(|idea| {
                    let open = *expanded == Some(idea.id);
                    let onclick = {
                        let expanded = expanded.clone();
                        let id = idea.id;
                        Callback::from(move |_: MouseEvent| expanded.set(toggle_expanded(*expanded, id)))
                    };
                    html! {
                        <div class="idea-item" key={idea.id}>
                            <button class="idea-trigger" aria-expanded={open.to_string()} {onclick}>
                                <span>{"📘"}</span>
                                <span>{idea.title}</span>
                                <span class="idea-stars">{idea.complexity.star_row()}</span>
                            </button>
                            if open {
                                <div class="idea-body">
                                    <p class="muted">{idea.brief}</p>
                                    <div class="idea-footer">
                                        <span class={classes!("complexity-badge", idea.complexity.class())}>
                                            {idea.complexity.label()}
                                        </span>
                                        <Link<Route> to={Route::ProjectRequest} classes="text-link">
                                            {"Request This Project →"}
                                        </Link<Route>>
                                    </div>
                                </div>
                            }
                        </div>
                    }
                }) }
                <div class="centered idea-cta">
                    <Link<Route> to={Route::ProjectRequest} classes="gradient-button">
                        {"Submit Custom Project Request"}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_follow_complexity() {
        assert_eq!(Complexity::Easy.stars(), 1);
        assert_eq!(Complexity::Medium.stars(), 2);
        assert_eq!(Complexity::Advanced.stars(), 3);
    }

    #[test]
    fn star_row_renders_one_glyph_per_star() {
        assert_eq!(Complexity::Easy.star_row(), "★");
        assert_eq!(Complexity::Advanced.star_row(), "★★★");
        assert_eq!(Complexity::Medium.star_row().chars().count(), 2);
    }

    #[test]
    fn idea_ids_are_unique_across_groups() {
        let mut ids: Vec<u32> = SEMESTER_GROUPS
            .iter()
            .flat_map(|group| group.ideas.iter().map(|idea| idea.id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn only_one_idea_is_open_at_a_time() {
        let open = toggle_expanded(None, 3);
        assert_eq!(open, Some(3));
        assert_eq!(toggle_expanded(open, 5), Some(5));
        assert_eq!(toggle_expanded(Some(5), 5), None);
    }
}
