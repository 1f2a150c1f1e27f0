use leptos::prelude::*;

use super::reveal::use_section_reveal;
use crate::content::{Icon, Tone};
use crate::reveal::RevealStyle;

pub const EXTERNAL_REL: &str = "noopener noreferrer";

pub struct ToneClasses {
    /// Solid icon chip.
    pub solid: &'static str,
    /// Soft tile behind an icon.
    pub soft: &'static str,
    pub text: &'static str,
    /// Outlined badge.
    pub badge: &'static str,
}

pub fn tone_classes(tone: Tone) -> ToneClasses {
    match tone {
        Tone::Primary => ToneClasses {
            solid: "bg-primary",
            soft: "bg-primary/10",
            text: "text-primary",
            badge: "bg-primary/10 text-primary border-primary/20",
        },
        Tone::Secondary => ToneClasses {
            solid: "bg-secondary",
            soft: "bg-secondary/10",
            text: "text-secondary",
            badge: "bg-secondary/10 text-secondary border-secondary/20",
        },
        Tone::Accent => ToneClasses {
            solid: "bg-accent",
            soft: "bg-accent/10",
            text: "text-accent",
            badge: "bg-accent/10 text-accent border-accent/20",
        },
        Tone::Success => ToneClasses {
            solid: "bg-success",
            soft: "bg-success/10",
            text: "text-success",
            badge: "bg-success/10 text-success border-success/20",
        },
    }
}

fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Award => "🏆",
        Icon::Building => "🏢",
        Icon::Calendar => "📅",
        Icon::ChevronDown => "⌄",
        Icon::Clock => "⏱",
        Icon::ExternalLink => "↗",
        Icon::GitBranch => "⑂",
        Icon::Mail => "✉",
        Icon::MapPin => "📍",
        Icon::Quote => "❝",
        Icon::Send => "➤",
        Icon::Star => "★",
        Icon::Users => "👥",
        Icon::Github | Icon::Linkedin => "",
    }
}

#[component]
pub fn Glyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    match icon {
        Icon::Github => view! { <i class=format!("devicon-github-plain {class}") aria-hidden="true"></i> }
            .into_any(),
        Icon::Linkedin => view! { <i class=format!("devicon-linkedin-plain {class}") aria-hidden="true"></i> }
            .into_any(),
        other => view! { <span class=class aria-hidden="true">{glyph(other)}</span> }.into_any(),
    }
}

#[component]
pub fn Badge(#[prop(into)] class: String, children: Children) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold transition-colors {class}",
        )>{children()}</span>
    }
}

/// Two-tone section title with its subtitle, both revealed with the section.
#[component]
pub fn SectionHeading(
    lead: &'static str,
    accent: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    let reveal = use_section_reveal();
    view! {
        <div class="text-center mb-16">
            <h2 class=reveal
                .classes("text-4xl md:text-5xl font-bold text-foreground mb-4", RevealStyle::FadeIn)>
                {lead}
                " "
                <span class="text-secondary">{accent}</span>
            </h2>
            {subtitle
                .map(|text| {
                    view! {
                        <p class=reveal
                            .classes(
                                "text-xl text-muted-foreground max-w-2xl mx-auto",
                                RevealStyle::FadeIn,
                            )>{text}</p>
                    }
                })}
        </div>
    }
}
