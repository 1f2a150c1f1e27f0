use leptos::prelude::*;

use super::reveal::{use_section_reveal, RevealSection};
use super::ui::SectionHeading;
use crate::content::{portfolio, Emphasis, Segment, Tone};
use crate::reveal::RevealStyle;
use crate::sections::SectionId;

fn badge_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Accent => "bg-gradient-accent text-secondary-foreground shadow-soft",
        Tone::Primary => "bg-primary/10 border border-primary/20 text-primary",
        Tone::Secondary => "bg-secondary/10 border border-secondary/20 text-secondary",
        Tone::Success => "bg-success/10 border border-success/20 text-success",
    }
}

fn segment_view(segment: &Segment) -> AnyView {
    let text = segment.text.clone();
    match segment.emphasis {
        Emphasis::Plain => text.into_any(),
        Emphasis::Strong => view! { <strong class="text-foreground">{text}</strong> }.into_any(),
        Emphasis::Accent => view! { <strong class="text-secondary">{text}</strong> }.into_any(),
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <RevealSection section=SectionId::About class="py-20 bg-background">
            <AboutBody />
        </RevealSection>
    }
}

#[component]
fn AboutBody() -> impl IntoView {
    let profile = &portfolio().profile;
    let reveal = use_section_reveal();

    view! {
        <div class="container mx-auto px-6">
            <SectionHeading lead="About" accent="Me" />
            <div class="max-w-5xl mx-auto grid md:grid-cols-[auto_1fr] gap-12 items-center">
                {profile
                    .portrait
                    .clone()
                    .map(|src| {
                        view! {
                            <img
                                src=src
                                alt=profile.full_name()
                                class=reveal
                                    .classes(
                                        "w-48 h-48 md:w-64 md:h-64 mx-auto rounded-full object-cover shadow-large",
                                        RevealStyle::FadeInLeft,
                                    )
                            />
                        }
                    })}
                <div class=reveal.classes("space-y-6", RevealStyle::FadeIn)>
                    <div class="space-y-4 text-muted-foreground text-lg leading-relaxed">
                        {profile
                            .about
                            .iter()
                            .map(|paragraph| {
                                view! { <p>{paragraph.iter().map(segment_view).collect_view()}</p> }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex flex-wrap gap-4 pt-6">
                        {profile
                            .badges
                            .iter()
                            .map(|badge| {
                                view! {
                                    <div class=format!(
                                        "px-4 py-2 rounded-full font-medium {}",
                                        badge_class(badge.tone),
                                    )>{badge.label.clone()}</div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
