mod about;
mod blog;
mod contact;
mod experience;
mod header;
mod hero;
mod portfolio;
mod reveal;
mod services;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{OWNER, ROLE};
use about::AboutMe;
use blog::Blog;
use contact::Contact;
use experience::Experience;
use header::Navigation;
use hero::Hero;
use portfolio::Portfolio;
use services::Services;
use skills::Skills;

pub use header::NavContext;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans bg-[#58B19F]">
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
        <Title text=format!("{OWNER} Portfolio") />
        <Meta name="description" content=format!("{ROLE} Portfolio") />

        <Router>
            <Navigation>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </Navigation>
        </Router>
    }
}

/// Every section in navigation order. Section ids must match `nav::SECTIONS`.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <main>
            <Hero />
            <AboutMe />
            <Services />
            <Portfolio />
            <Experience />
            <Skills />
            <Blog />
            <Contact />
        </main>
        <Footer />
    }
}

#[component]
fn Footer() -> impl IntoView {
    let built = chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.format("%b %e, %Y").to_string())
        .unwrap_or_default();
    view! {
        <footer class="bg-[#59437a] text-white text-sm text-center py-6">
            <span>{format!("© {OWNER}")}</span>
            {(!built.is_empty()).then(|| view! { <span class="ml-4 opacity-70">"built " {built}</span> })}
        </footer>
    }
}
