mod about;
mod contact;
mod footer;
mod guide;
mod header;
mod hero;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use contact::ContactSection;
use footer::Footer;
use guide::PortfolioGuide;
use header::Header;
use hero::Hero;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <meta
                    name="description"
                    content="Portfolio of Dipesh Soni, full-stack developer and hackathon winner."
                />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-white text-slate-900 antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Dipesh Soni - {title}") />

        <Router>
            <Header />
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// Single-page portfolio. All sections live on one route so the guide
/// widget can watch the whole scroll position.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Full Stack Developer" />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <ContactSection />
        <PortfolioGuide />
    }
}
