use leptos::prelude::*;

use super::reveal::use_scroll_reveal;
use crate::guide::Section;

#[component]
pub fn About() -> impl IntoView {
    let (reveal_ref, is_visible) = use_scroll_reveal(0.2);

    let reveal = move |delay: &str| {
        if is_visible() {
            format!("transition-all duration-700 {delay} opacity-100 translate-y-0")
        } else {
            format!("transition-all duration-700 {delay} opacity-0 translate-y-10")
        }
    };

    view! {
        <section id=Section::About.dom_id() class="py-20">
            <div node_ref=reveal_ref class="container mx-auto px-4 lg:px-6 max-w-5xl">
                <div class=move || reveal("")>
                    <p class="text-lg text-slate-600 font-medium mb-4 uppercase tracking-wider text-center">
                        "Who I Am"
                    </p>
                    <h2 class="text-4xl lg:text-5xl font-bold mb-12 text-center text-slate-900">
                        "About Me"
                    </h2>
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-10 items-start">
                    <div class=move || reveal("delay-100")>
                        <p class="text-base mb-4 leading-relaxed text-slate-700">
                            "I'm a full-stack developer who enjoys taking ideas from a rough sketch to a deployed product. I care about clean architecture, fast interfaces, and code that the next person can actually read."
                        </p>
                        <p class="text-base mb-4 leading-relaxed text-slate-700">
                            "Currently pursuing Computer Science at Geetanjali Institute of Technical Studies (GITS), I spend my time outside coursework building real projects and competing in hackathons."
                        </p>
                        <p class="text-base leading-relaxed text-slate-700">
                            "When I'm not coding you'll find me exploring new frameworks, contributing to open source, or helping fellow students debug their way out of trouble."
                        </p>
                    </div>
                    <div class=move || reveal("delay-200")>
                        <div class="bg-white/60 backdrop-blur-sm border border-slate-200 shadow-xl rounded-xl p-6 mb-6">
                            <h3 class="text-xl font-bold mb-2">"🏆 CODEFIESTA 3.0 Winner"</h3>
                            <p class="text-slate-600">
                                "Won a prestigious national-level hackathon, building a complete product under a 36-hour deadline."
                            </p>
                        </div>
                        <div class="bg-white/60 backdrop-blur-sm border border-slate-200 shadow-xl rounded-xl p-6">
                            <h3 class="text-xl font-bold mb-2">"🎓 B.Tech, Computer Science"</h3>
                            <p class="text-slate-600">
                                "Geetanjali Institute of Technical Studies — focused on data structures, systems, and web engineering."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
