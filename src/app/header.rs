use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let past_top = window()
            .scroll_y()
            .map(|y| y > 20.0)
            .unwrap_or(false);
        if past_top != scrolled.get_untracked() {
            set_scrolled(past_top);
        }
    });

    let header_class = move || {
        if scrolled() {
            "fixed top-0 left-0 right-0 z-40 bg-white/90 backdrop-blur-sm shadow-md transition-all duration-300"
        } else {
            "fixed top-0 left-0 right-0 z-40 bg-transparent transition-all duration-300"
        }
    };

    view! {
        <header class=header_class>
            <div class="container mx-auto px-4 lg:px-6 py-4 flex items-center justify-between">
                <a href="#hero" class="text-xl font-bold text-slate-900">
                    "Dipesh Soni"
                </a>
                <nav class="hidden md:flex items-center gap-8">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    href=*href
                                    class="text-slate-600 hover:text-slate-900 font-medium transition-colors duration-200"
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <button
                    class="md:hidden text-2xl text-slate-900"
                    aria-label="Toggle navigation menu"
                    on:click=move |_| set_menu_open(!menu_open.get_untracked())
                >
                    {move || if menu_open() { "✕" } else { "☰" }}
                </button>
            </div>
            {move || {
                menu_open()
                    .then(|| {
                        view! {
                            <nav class="md:hidden bg-white border-t border-slate-200 shadow-lg">
                                <div class="container mx-auto px-4 py-4 flex flex-col gap-4">
                                    {NAV_LINKS
                                        .iter()
                                        .map(|(href, label)| {
                                            view! {
                                                <a
                                                    href=*href
                                                    class="text-slate-600 hover:text-slate-900 font-medium"
                                                    on:click=move |_| set_menu_open(false)
                                                >
                                                    {*label}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </nav>
                        }
                    })
            }}
        </header>
    }
}
