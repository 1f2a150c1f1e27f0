use leptos::prelude::*;

use super::reveal::{use_section_reveal, RevealSection};
use super::ui::{tone_classes, SectionHeading};
use crate::content::{portfolio, SkillCategory};
use crate::reveal::{stagger_ms, DelayProperty, RevealStyle};
use crate::sections::SectionId;

/// Step between skills inside one category.
const SKILL_STEP_MS: u32 = 100;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <RevealSection section=SectionId::Skills class="py-20 bg-muted/30">
            <SkillsBody />
        </RevealSection>
    }
}

#[component]
fn SkillsBody() -> impl IntoView {
    let reveal = use_section_reveal();

    view! {
        <div class="container mx-auto px-6">
            <SectionHeading
                lead="Technical"
                accent="Skills"
                subtitle="Technologies and tools I use to bring ideas to life"
            />
            <div class="max-w-6xl mx-auto space-y-12">
                {portfolio()
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(index, category)| view! { <SkillGroup index=index category=category /> })
                    .collect_view()}
            </div>

            <div
                class=reveal.classes("mt-16 text-center", RevealStyle::FadeIn)
                style=reveal.delay_ms(800, DelayProperty::Animation)
            >
                <div class="inline-block p-8 bg-gradient-card rounded-2xl shadow-large">
                    <h4 class="text-lg font-semibold text-foreground mb-4">
                        "Always Learning & Growing"
                    </h4>
                    <p class="text-muted-foreground">
                        "Passionate about staying current with emerging technologies and best practices in software development."
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SkillGroup(index: usize, category: &'static SkillCategory) -> impl IntoView {
    let reveal = use_section_reveal();
    let group_delay = stagger_ms(index, reveal.step_ms());
    let badge = tone_classes(category.tone).badge;

    view! {
        <div
            class=reveal.class(RevealStyle::FadeIn)
            style=reveal.delay_ms(group_delay, DelayProperty::Animation)
        >
            <h3 class="text-2xl font-semibold text-foreground mb-6 text-center">
                {category.title.clone()}
            </h3>
            <div class="flex flex-wrap justify-center gap-4">
                {category
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        let delay = group_delay.saturating_add(stagger_ms(i, SKILL_STEP_MS));
                        view! {
                            <div
                                class=reveal.classes("group relative", RevealStyle::ScaleIn)
                                style=reveal.delay_ms(delay, DelayProperty::Animation)
                            >
                                <span class=format!(
                                    "inline-flex items-center rounded-full {badge} px-6 py-3 text-base font-medium border-2 hover:shadow-teal-glow hover:scale-110 transition-all duration-300 cursor-default relative overflow-hidden",
                                )>
                                    <span class="relative z-10">{skill.clone()}</span>
                                    <span class="absolute inset-0 bg-gradient-accent opacity-0 group-hover:opacity-20 transition-opacity duration-300"></span>
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
