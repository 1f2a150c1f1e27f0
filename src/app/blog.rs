use leptos::prelude::*;

use super::reveal::{use_section_reveal, RevealSection};
use super::ui::{Badge, Glyph, SectionHeading};
use crate::content::{portfolio, BlogPost, Icon};
use crate::reveal::{DelayProperty, RevealStyle};
use crate::sections::SectionId;

#[component]
pub fn MiniBlog() -> impl IntoView {
    view! {
        <RevealSection section=SectionId::Blog class="py-20 bg-background">
            <MiniBlogBody />
        </RevealSection>
    }
}

#[component]
fn MiniBlogBody() -> impl IntoView {
    let reveal = use_section_reveal();
    view! {
        <div class="container mx-auto px-6">
            <SectionHeading
                lead="Mini"
                accent="Blog"
                subtitle="Sharing insights from my coding journey and project experiences"
            />
            <div class="grid md:grid-cols-2 gap-8 max-w-6xl mx-auto">
                {portfolio()
                    .posts
                    .iter()
                    .enumerate()
                    .map(|(index, post)| view! { <PostCard index=index post=post /> })
                    .collect_view()}
            </div>
            <div
                class=reveal.classes("text-center mt-12", RevealStyle::FadeIn)
                style=reveal.delay_ms(600, DelayProperty::Animation)
            >
                <p class="text-muted-foreground">
                    "More posts coming soon! Follow my journey as I continue to learn and build."
                </p>
            </div>
        </div>
    }
}

#[component]
fn PostCard(index: usize, post: &'static BlogPost) -> impl IntoView {
    let reveal = use_section_reveal();
    view! {
        <article
            class=reveal
                .classes(
                    "card group hover:shadow-large transition-all duration-500 transform hover:scale-[1.02] border-0 bg-gradient-card cursor-pointer",
                    RevealStyle::FadeIn,
                )
            style=reveal.delay(index, DelayProperty::Animation)
        >
            <div class="p-8">
                <div class="flex items-center gap-4 mb-4">
                    <Badge class="bg-secondary/10 text-secondary border-secondary/20">
                        {post.category.clone()}
                    </Badge>
                    <div class="flex items-center gap-2 text-muted-foreground text-sm">
                        <Glyph icon=Icon::Calendar />
                        <time datetime=post.date.to_string()>{post.date_label()}</time>
                    </div>
                    <div class="flex items-center gap-2 text-muted-foreground text-sm">
                        <Glyph icon=Icon::Clock />
                        {post.read_time_label()}
                    </div>
                </div>

                <h3 class="text-2xl font-semibold text-foreground mb-4 group-hover:text-secondary transition-colors duration-300">
                    {post.title.clone()}
                </h3>
                <p class="text-muted-foreground leading-relaxed mb-6">{post.excerpt.clone()}</p>

                <div class="flex flex-wrap gap-2 mb-6">
                    {post
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <Badge class="border-border text-foreground hover:bg-muted transition-colors duration-300">
                                    {tag.clone()}
                                </Badge>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex items-center justify-between">
                    <span class="text-secondary font-medium group-hover:text-primary transition-colors duration-300">
                        "Read More"
                    </span>
                    <span
                        class="text-secondary group-hover:text-primary group-hover:translate-x-1 transition-all duration-300"
                        aria-hidden="true"
                    >
                        "→"
                    </span>
                </div>
            </div>
        </article>
    }
}
