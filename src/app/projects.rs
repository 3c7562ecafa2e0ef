use leptos::prelude::*;

use super::reveal::{use_scroll_reveal, use_stagger_reveal};
use crate::guide::Section;

struct Project {
    title: &'static str,
    description: &'static str,
    tech: &'static [&'static str],
    repo: &'static str,
    demo: Option<&'static str>,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Ghummakkad",
        description: "A travel and hotel booking platform with 15+ real properties across 9 \
                      Rajasthan destinations, including search, filtering, and booking flows.",
        tech: &["React", "Node.js", "Express", "MongoDB"],
        repo: "https://github.com/dipesh-soni/ghummakkad",
        demo: Some("https://ghummakkad.example.com"),
    },
    Project {
        title: "AI Art Generator",
        description: "Generates images from text prompts through Stability AI's API, with \
                      prompt history and one-click downloads.",
        tech: &["React", "Stability AI", "Tailwind CSS"],
        repo: "https://github.com/dipesh-soni/ai-art-generator",
        demo: Some("https://ai-art.example.com"),
    },
    Project {
        title: "Expense Tracker",
        description: "Real-time budget monitoring with visual charts, category breakdowns, and \
                      monthly summaries.",
        tech: &["React", "Chart.js", "LocalStorage"],
        repo: "https://github.com/dipesh-soni/expense-tracker",
        demo: None,
    },
];

#[component]
pub fn Projects() -> impl IntoView {
    let (reveal_ref, is_visible) = use_scroll_reveal(0.1);
    let (container_ref, visible_items) = use_stagger_reveal(PROJECTS.len(), 200, 0.1);

    view! {
        <section id=Section::Projects.dom_id() class="py-20">
            <div class="container mx-auto px-4 lg:px-6">
                <div
                    node_ref=reveal_ref
                    class=move || {
                        if is_visible() {
                            "transition-all duration-700 opacity-100 translate-y-0"
                        } else {
                            "transition-all duration-700 opacity-0 translate-y-10"
                        }
                    }
                >
                    <p class="text-lg text-slate-600 font-medium mb-4 uppercase tracking-wider text-center">
                        "What I've Built"
                    </p>
                    <h2 class="text-4xl lg:text-5xl font-bold mb-12 text-center text-slate-900">
                        "Featured Projects"
                    </h2>
                </div>
                <div
                    node_ref=container_ref
                    class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-6xl mx-auto"
                >
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            let card_class = move || {
                                let shown = visible_items
                                    .with(|flags| flags.get(index).copied().unwrap_or(false));
                                if shown {
                                    "flex flex-col bg-white border border-slate-200 shadow-xl rounded-xl p-6 transition-all duration-500 opacity-100 translate-y-0"
                                } else {
                                    "flex flex-col bg-white border border-slate-200 shadow-xl rounded-xl p-6 transition-all duration-500 opacity-0 translate-y-10"
                                }
                            };
                            view! {
                                <div class=card_class>
                                    <h3 class="text-xl font-bold mb-2">{project.title}</h3>
                                    <p class="text-slate-600 mb-4 flex-grow">{project.description}</p>
                                    <div class="flex flex-wrap gap-2 mb-4">
                                        {project
                                            .tech
                                            .iter()
                                            .map(|tag| {
                                                view! {
                                                    <span class="rounded-md px-2 py-1 bg-slate-100 text-slate-700 text-sm">
                                                        {*tag}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <div class="flex items-center gap-4 text-sm font-medium">
                                        <a
                                            href=project.repo
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-slate-900 hover:underline"
                                        >
                                            "Source ↗"
                                        </a>
                                        {project
                                            .demo
                                            .map(|demo| {
                                                view! {
                                                    <a
                                                        href=demo
                                                        target="_blank"
                                                        rel="noopener noreferrer"
                                                        class="text-slate-900 hover:underline"
                                                    >
                                                        "Live Demo ↗"
                                                    </a>
                                                }
                                            })}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
