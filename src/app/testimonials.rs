use leptos::prelude::*;

use super::reveal::{use_section_reveal, RevealSection};
use super::ui::{Glyph, SectionHeading};
use crate::content::{portfolio, Icon, Testimonial};
use crate::reveal::{DelayProperty, RevealStyle};
use crate::sections::SectionId;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <RevealSection section=SectionId::Testimonials class="py-20 bg-background">
            <div class="container mx-auto px-6">
                <SectionHeading
                    lead="What People"
                    accent="Say"
                    subtitle="Feedback from collaborators, mentors, and peers"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-7xl mx-auto">
                    {portfolio()
                        .testimonials
                        .iter()
                        .enumerate()
                        .map(|(index, testimonial)| {
                            view! { <TestimonialCard index=index testimonial=testimonial /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn TestimonialCard(index: usize, testimonial: &'static Testimonial) -> impl IntoView {
    let reveal = use_section_reveal();
    view! {
        <figure
            class=reveal
                .classes(
                    "card relative border-0 bg-gradient-card hover:shadow-large transition-all duration-500 transform hover:scale-[1.02]",
                    RevealStyle::FadeIn,
                )
            style=reveal.delay(index, DelayProperty::Animation)
        >
            <div class="p-8">
                <div class="absolute top-6 right-6 text-secondary/20">
                    <Glyph icon=Icon::Quote class="text-4xl" />
                </div>
                <div class="flex gap-1 mb-4" aria-label=format!("{} out of 5", testimonial.rating)>
                    {(0..testimonial.rating)
                        .map(|_| view! { <Glyph icon=Icon::Star class="text-secondary" /> })
                        .collect_view()}
                </div>
                <blockquote class="text-muted-foreground leading-relaxed mb-6 italic">
                    {format!("\"{}\"", testimonial.content)}
                </blockquote>
                <figcaption class="flex items-center gap-4">
                    <div class="w-12 h-12 rounded-full bg-gradient-accent flex items-center justify-center text-2xl">
                        {testimonial.avatar.clone()}
                    </div>
                    <div>
                        <h4 class="font-semibold text-foreground">{testimonial.name.clone()}</h4>
                        <p class="text-sm text-muted-foreground">{testimonial.role.clone()}</p>
                    </div>
                </figcaption>
            </div>
        </figure>
    }
}
