use leptos::prelude::*;

use super::reveal::{use_scroll_reveal, use_stagger_reveal};
use crate::guide::Section;

struct SkillCategory {
    title: &'static str,
    glyph: &'static str,
    skills: &'static [&'static str],
}

const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        glyph: "🎨",
        skills: &["React.js", "Tailwind CSS", "HTML5 & CSS3", "Responsive Design"],
    },
    SkillCategory {
        title: "Backend",
        glyph: "⚙️",
        skills: &["Node.js", "Express.js", "REST APIs", "MongoDB"],
    },
    SkillCategory {
        title: "Languages",
        glyph: "📝",
        skills: &["JavaScript (ES6+)", "TypeScript", "Python", "C++"],
    },
    SkillCategory {
        title: "Tools",
        glyph: "🧰",
        skills: &["Git & GitHub", "Vite", "Postman", "Linux"],
    },
];

#[component]
pub fn Skills() -> impl IntoView {
    let (reveal_ref, is_visible) = use_scroll_reveal(0.2);
    let (container_ref, visible_items) = use_stagger_reveal(SKILL_CATEGORIES.len(), 150, 0.2);

    view! {
        <section id=Section::Skills.dom_id() class="py-20 bg-slate-50">
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
                        "What I Work With"
                    </p>
                    <h2 class="text-4xl lg:text-5xl font-bold mb-12 text-center text-slate-900">
                        "Technical Skills"
                    </h2>
                </div>
                <div
                    node_ref=container_ref
                    class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6 max-w-6xl mx-auto"
                >
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(index, category)| {
                            let item_class = move || {
                                let shown = visible_items
                                    .with(|flags| flags.get(index).copied().unwrap_or(false));
                                if shown {
                                    "bg-white border border-slate-200 shadow-xl rounded-xl p-6 transition-all duration-500 opacity-100 translate-y-0"
                                } else {
                                    "bg-white border border-slate-200 shadow-xl rounded-xl p-6 transition-all duration-500 opacity-0 translate-y-10"
                                }
                            };
                            view! {
                                <div class=item_class>
                                    <div class="text-3xl mb-3">{category.glyph}</div>
                                    <h3 class="text-xl font-bold mb-3">{category.title}</h3>
                                    <ul class="space-y-2 text-slate-600">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| view! { <li>{*skill}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
