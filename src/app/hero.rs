use leptos::prelude::*;

use super::reveal::use_scroll_reveal;
use crate::guide::Section;

#[component]
pub fn Hero() -> impl IntoView {
    let (reveal_ref, is_visible) = use_scroll_reveal(0.1);

    let reveal = move |delay: &str| {
        if is_visible() {
            format!("transition-all duration-1000 {delay} opacity-100 translate-y-0")
        } else {
            format!("transition-all duration-1000 {delay} opacity-0 translate-y-10")
        }
    };

    view! {
        <section
            id=Section::Hero.dom_id()
            class="min-h-screen flex items-center justify-center pt-20 py-8 relative overflow-hidden"
        >
            <div node_ref=reveal_ref class="container mx-auto px-4 text-center">
                <p class=move || reveal("")>
                    <span class="text-lg text-slate-600 uppercase tracking-wider">"Hello, I'm"</span>
                </p>
                <h1 class=move || format!("text-5xl lg:text-7xl font-bold text-slate-900 my-4 {}", reveal("delay-100"))>
                    "Dipesh Soni"
                </h1>
                <p class=move || format!("text-xl lg:text-2xl text-slate-600 mb-8 {}", reveal("delay-200"))>
                    "Full Stack Developer · Problem Solver · System Designer"
                </p>
                <div class=move || format!("flex flex-col sm:flex-row items-center justify-center gap-4 {}", reveal("delay-300"))>
                    <a
                        href="#contact"
                        class="px-8 py-3 bg-slate-900 text-white rounded-md font-medium hover:bg-slate-700 transition-colors duration-200"
                    >
                        "Get in Touch"
                    </a>
                    <a
                        href="#projects"
                        class="px-8 py-3 border border-slate-300 text-slate-900 rounded-md font-medium hover:bg-slate-100 transition-colors duration-200"
                    >
                        "View My Work"
                    </a>
                </div>
                <div class=move || format!("flex items-center justify-center gap-6 mt-10 text-2xl {}", reveal("delay-500"))>
                    <a
                        href="https://github.com/dipesh-soni"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="GitHub Profile"
                        class="text-slate-600 hover:text-slate-900"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                    <a
                        href="https://linkedin.com/in/dipesh-soni"
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="LinkedIn Profile"
                        class="text-slate-600 hover:text-slate-900"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                    <a
                        href="mailto:dipeshsonitech@gmail.com"
                        aria-label="Email"
                        class="text-slate-600 hover:text-slate-900"
                    >
                        "✉"
                    </a>
                </div>
            </div>
        </section>
    }
}
