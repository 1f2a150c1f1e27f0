use leptos::prelude::*;

use super::nav::{on_anchor_click, scroll_to_section};
use super::reveal::RevealSection;
use super::ui::{Glyph, EXTERNAL_REL};
use crate::content::{portfolio, Icon};
use crate::sections::SectionId;

const SOCIAL_CLASS: &str = "p-3 rounded-full bg-card/20 backdrop-blur-sm border border-border/50 text-primary-foreground hover:bg-secondary hover:text-secondary-foreground transition-all duration-300 hover:scale-110 hover:shadow-teal-glow";

/// Headline typed out one character per tick.
fn use_typed_headline(headline: &str) -> ReadSignal<String> {
    let (typed, set_typed) = signal(String::new());

    #[cfg(feature = "hydrate")]
    {
        use leptos_use::{use_interval_fn, utils::Pausable};

        use crate::typewriter::{Typewriter, TYPE_INTERVAL_MS};

        let typewriter = StoredValue::new(Typewriter::new(headline));
        let (done, set_done) = signal(false);
        let Pausable { pause, .. } = use_interval_fn(
            move || match typewriter.try_update_value(|t| t.advance().map(str::to_owned)) {
                Some(Some(prefix)) => set_typed.set(prefix),
                _ => set_done.set(true),
            },
            TYPE_INTERVAL_MS,
        );
        Effect::new(move |_| {
            if done.get() {
                pause();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (headline, set_typed);

    typed
}

#[component]
pub fn Hero() -> impl IntoView {
    let profile = &portfolio().profile;
    let typed = use_typed_headline(&profile.headline);
    // screen readers get the whole line at once
    let headline = profile.headline.clone();

    view! {
        <RevealSection
            section=SectionId::Hero
            class="min-h-screen relative bg-gradient-hero flex items-center justify-center overflow-hidden"
        >
            <div class="absolute inset-0 opacity-10">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-secondary rounded-full blur-3xl animate-pulse"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-accent rounded-full blur-3xl animate-pulse delay-1000"></div>
            </div>

            <div class="container mx-auto px-6 relative z-10">
                <div class="text-center max-w-4xl mx-auto">
                    <h1 class="text-5xl md:text-7xl font-bold text-primary-foreground mb-6 animate-fade-in">
                        {profile.first_name.clone()}
                        " "
                        <span class="text-secondary">{profile.last_name.clone()}</span>
                    </h1>

                    <div class="h-16 mb-8 flex items-center justify-center">
                        <h2 class="text-xl md:text-2xl text-primary-foreground/90 font-medium">
                            <span class="sr-only">{headline}</span>
                            <span aria-hidden="true">{typed}</span>
                            <span class="inline-block w-0.5 h-6 bg-secondary ml-1 animate-blink"></span>
                        </h2>
                    </div>

                    <p class="text-lg md:text-xl text-primary-foreground/80 mb-12 max-w-3xl mx-auto leading-relaxed animate-fade-in-left">
                        {profile.intro.clone()}
                    </p>

                    <div class="flex flex-col sm:flex-row gap-6 justify-center items-center mb-16 animate-fade-in-right">
                        <a
                            href="#projects"
                            on:click=on_anchor_click(SectionId::Projects)
                            class="btn btn-hero btn-xl min-w-48"
                        >
                            "View My Work"
                        </a>
                        <a
                            href="#contact"
                            on:click=on_anchor_click(SectionId::Contact)
                            class="btn btn-glass btn-xl min-w-48"
                        >
                            "Contact Me"
                        </a>
                    </div>

                    <div class="flex justify-center gap-6 mb-12 animate-scale-in">
                        <a
                            href=profile.github.clone()
                            target="_blank"
                            rel=EXTERNAL_REL
                            class=SOCIAL_CLASS
                            aria-label="GitHub Profile"
                        >
                            <Glyph icon=Icon::Github class="text-2xl" />
                        </a>
                        <a
                            href=profile.linkedin.clone()
                            target="_blank"
                            rel=EXTERNAL_REL
                            class=SOCIAL_CLASS
                            aria-label="LinkedIn Profile"
                        >
                            <Glyph icon=Icon::Linkedin class="text-2xl" />
                        </a>
                        <a
                            href=format!("mailto:{}", profile.email)
                            class=SOCIAL_CLASS
                            aria-label="Email"
                        >
                            <Glyph icon=Icon::Mail class="text-2xl" />
                        </a>
                    </div>

                    <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2 animate-bounce">
                        <button
                            on:click=move |_| scroll_to_section(SectionId::About)
                            class="text-primary-foreground/60 hover:text-secondary transition-colors duration-300"
                            aria-label="Scroll to about"
                        >
                            <Glyph icon=Icon::ChevronDown class="text-3xl" />
                        </button>
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}
