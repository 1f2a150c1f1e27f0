use leptos::prelude::*;

use super::reveal::{use_section_reveal, RevealSection};
use super::ui::{tone_classes, Badge, Glyph, SectionHeading};
use crate::content::{portfolio, Experience};
use crate::reveal::{DelayProperty, RevealStyle};
use crate::sections::SectionId;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <RevealSection section=SectionId::Experience class="py-20 bg-muted/30">
            <div class="container mx-auto px-6">
                <SectionHeading
                    lead="My"
                    accent="Experience"
                    subtitle="Building expertise through open source contributions and community leadership"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-7xl mx-auto">
                    {portfolio()
                        .experiences
                        .iter()
                        .enumerate()
                        .map(|(index, experience)| view! { <ExperienceCard index=index experience=experience /> })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn ExperienceCard(index: usize, experience: &'static Experience) -> impl IntoView {
    let reveal = use_section_reveal();
    let tone = tone_classes(experience.tone);
    view! {
        <div
            class=reveal
                .classes(
                    "card group hover:shadow-large transition-all duration-500 transform hover:scale-105",
                    RevealStyle::FadeIn,
                )
            style=reveal.delay(index, DelayProperty::Animation)
        >
            <div class="p-6">
                <div class="flex items-start gap-4 mb-4">
                    <div class=format!(
                        "p-3 rounded-xl {} text-white shadow-medium group-hover:shadow-teal-glow transition-all duration-300",
                        tone.solid,
                    )>
                        <Glyph icon=experience.icon class="text-xl" />
                    </div>
                    <div class="flex-1">
                        <h3 class="text-xl font-semibold text-foreground mb-1">
                            {experience.title.clone()}
                        </h3>
                        <p class="text-secondary font-medium mb-1">
                            {experience.organization.clone()}
                        </p>
                        <p class="text-sm text-muted-foreground">{experience.period.clone()}</p>
                    </div>
                </div>
                <p class="text-muted-foreground leading-relaxed mb-4">
                    {experience.description.clone()}
                </p>
                <div class="flex flex-wrap gap-2">
                    {experience
                        .highlights
                        .iter()
                        .map(|highlight| {
                            view! {
                                <Badge class="border-transparent bg-muted text-muted-foreground hover:bg-secondary hover:text-secondary-foreground transition-colors duration-300">
                                    {highlight.clone()}
                                </Badge>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
