use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 bg-slate-900 text-slate-400">
            <div class="container mx-auto px-4 lg:px-6 flex flex-col sm:flex-row items-center justify-between gap-4">
                <p>"© 2025 Dipesh Soni. All rights reserved."</p>
                <div class="flex items-center gap-6">
                    <a
                        href="https://github.com/dipesh-soni"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-white transition-colors duration-200"
                    >
                        "GitHub"
                    </a>
                    <a
                        href="https://linkedin.com/in/dipesh-soni"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-white transition-colors duration-200"
                    >
                        "LinkedIn"
                    </a>
                    <a href="#hero" class="hover:text-white transition-colors duration-200">
                        "Back to top ↑"
                    </a>
                </div>
            </div>
        </footer>
    }
}
