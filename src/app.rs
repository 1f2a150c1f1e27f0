mod about;
mod blog;
mod certifications;
mod contact;
mod experience;
mod github_stats;
mod hero;
mod nav;
mod projects;
mod reveal;
mod skills;
mod testimonials;
mod ui;

use chrono::DateTime;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::portfolio;
use crate::reveal::noscript_css;

use about::About;
use blog::MiniBlog;
use certifications::Certifications;
use contact::Contact;
use experience::ExperienceSection;
use github_stats::GithubStats;
use hero::Hero;
use nav::NavBar;
use projects::Projects;
use skills::Skills;
use testimonials::Testimonials;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // without scripts nothing would ever reveal
    let fallback_css = noscript_css();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <noscript>
                    <style>{fallback_css}</style>
                </noscript>
                <MetaTags />
            </head>
            <body class="bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let owner = portfolio().profile.full_name();

    view! {
        // sets the document title
        <Title formatter=move |title| format!("{owner} - {title}") />
        <Meta name="description" content=portfolio().profile.intro.clone() />

        <Router>
            <NavBar />
            <main class="min-h-screen">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=IndexPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// The single page: every section in display order.
#[component]
fn IndexPage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <ExperienceSection />
        <Projects />
        <Certifications />
        <Skills />
        <GithubStats />
        <MiniBlog />
        <Testimonials />
        <Contact />
    }
}

#[component]
fn Footer() -> impl IntoView {
    let built = DateTime::parse_from_rfc3339(env!("BUILD_TIME")).ok();
    let year = built
        .map(|dt| dt.format("%Y").to_string())
        .unwrap_or_default();
    let deployed = built.map(|dt| dt.format("%b %e %Y").to_string());
    view! {
        <footer class="py-8 border-t border-border/50 text-center text-sm text-muted-foreground">
            <p>
                {format!("© {year} {}", portfolio().profile.full_name())}
                " · Built with Rust & Leptos"
            </p>
            {deployed.map(|d| view! { <p class="mt-1 text-xs">"Last deployed " {d}</p> })}
        </footer>
    }
}
