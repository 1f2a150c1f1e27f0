use leptos::prelude::*;

use super::reveal::{use_section_reveal, RevealSection};
use super::ui::{tone_classes, Glyph, SectionHeading};
use crate::activity::{contribution_levels, level_class, GRID_CELLS, MAX_LEVEL};
use crate::content::{portfolio, Stat};
use crate::reveal::{DelayProperty, RevealStyle};
use crate::sections::SectionId;

#[component]
pub fn GithubStats() -> impl IntoView {
    view! {
        <RevealSection section=SectionId::GithubStats class="py-20 bg-muted/30">
            <div class="container mx-auto px-6">
                <SectionHeading
                    lead="GitHub"
                    accent="Activity"
                    subtitle="Open source contributions and community engagement"
                />
                <div class="grid grid-cols-2 lg:grid-cols-4 gap-6 max-w-4xl mx-auto mb-12">
                    {portfolio()
                        .github
                        .stats
                        .iter()
                        .enumerate()
                        .map(|(index, stat)| view! { <StatTile index=index stat=stat /> })
                        .collect_view()}
                </div>
                <ContributionGraph />
            </div>
        </RevealSection>
    }
}

#[component]
fn StatTile(index: usize, stat: &'static Stat) -> impl IntoView {
    let reveal = use_section_reveal();
    let tone = tone_classes(stat.tone);
    view! {
        <div
            class=reveal
                .classes(
                    "card text-center border-0 bg-gradient-card hover:shadow-medium transition-all duration-500 transform hover:scale-105",
                    RevealStyle::ScaleIn,
                )
            style=reveal.delay(index, DelayProperty::Animation)
        >
            <div class="p-6">
                <div class=format!("inline-flex p-4 rounded-xl {} mb-4", tone.soft)>
                    <Glyph icon=stat.icon class=tone.text />
                </div>
                <div class="text-3xl font-bold text-foreground mb-2">{stat.value.clone()}</div>
                <div class="text-sm text-muted-foreground">{stat.label.clone()}</div>
            </div>
        </div>
    }
}

#[component]
fn ContributionGraph() -> impl IntoView {
    let reveal = use_section_reveal();
    let activity = &portfolio().github;
    let cells = contribution_levels(activity.contribution_seed, GRID_CELLS)
        .into_iter()
        .map(|level| {
            view! {
                <div
                    class=format!(
                        "w-3 h-3 rounded-sm {} hover:scale-125 transition-transform duration-200",
                        level_class(level),
                    )
                    title=format!("{level} contributions")
                ></div>
            }
        })
        .collect_view();

    view! {
        <div
            class=reveal.classes("max-w-4xl mx-auto", RevealStyle::FadeIn)
            style=reveal.delay_ms(800, DelayProperty::Animation)
        >
            <div class="card border-0 bg-gradient-card shadow-large p-8">
                <h3 class="text-2xl font-semibold text-foreground mb-6 text-center">
                    "Contribution Streak"
                </h3>
                <div class="grid grid-cols-12 gap-1 mb-6">{cells}</div>
                <div class="flex justify-between text-sm text-muted-foreground">
                    {activity.months.iter().map(|m| view! { <span>{m.clone()}</span> }).collect_view()}
                </div>
                <div class="flex items-center justify-center gap-4 mt-6 text-sm text-muted-foreground">
                    <span>"Less"</span>
                    <div class="flex gap-1">
                        {(0..=MAX_LEVEL)
                            .map(|level| {
                                view! {
                                    <div class=format!("w-3 h-3 rounded-sm {}", level_class(level))></div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <span>"More"</span>
                </div>
            </div>
        </div>
    }
}
