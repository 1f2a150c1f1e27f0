use leptos::prelude::*;

use super::reveal::{use_section_reveal, RevealSection};
use super::ui::{Badge, Glyph, SectionHeading, EXTERNAL_REL};
use crate::content::{filter_projects, portfolio, Icon, Project, ProjectFilter};
use crate::reveal::{DelayProperty, RevealStyle};
use crate::sections::SectionId;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <RevealSection section=SectionId::Projects class="py-20 bg-background">
            <ProjectsBody />
        </RevealSection>
    }
}

#[component]
fn ProjectsBody() -> impl IntoView {
    let reveal = use_section_reveal();
    let (filter, set_filter) = signal(ProjectFilter::All);

    view! {
        <div class="container mx-auto px-6">
            <SectionHeading
                lead="Featured"
                accent="Projects"
                subtitle="Showcasing innovative solutions built with modern technologies"
            />
            <div class=reveal
                .classes("flex justify-center gap-4 flex-wrap -mt-8 mb-16", RevealStyle::ScaleIn)>
                {ProjectFilter::options()
                    .map(|option| {
                        view! {
                            <button
                                on:click=move |_| set_filter.set(option)
                                aria-pressed=move || (filter.get() == option).to_string()
                                class=move || {
                                    if filter.get() == option {
                                        "btn btn-secondary transition-all duration-300"
                                    } else {
                                        "btn btn-outline transition-all duration-300"
                                    }
                                }
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="grid lg:grid-cols-2 gap-8 max-w-6xl mx-auto">
                {move || {
                    filter_projects(&portfolio().projects, filter.get())
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard index=index project=project /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(index: usize, project: &'static Project) -> impl IntoView {
    let reveal = use_section_reveal();
    view! {
        <div
            class=reveal
                .classes(
                    "card group overflow-hidden hover:shadow-large transition-all duration-500 transform hover:scale-[1.02]",
                    RevealStyle::FadeIn,
                )
            style=reveal.delay(index, DelayProperty::Animation)
        >
            {project
                .image
                .clone()
                .map(|src| {
                    view! {
                        <div class="relative overflow-hidden">
                            <img
                                src=src
                                alt=project.title.clone()
                                class="w-full h-48 object-cover transition-transform duration-500 group-hover:scale-110"
                            />
                            <div class="absolute inset-0 bg-gradient-to-t from-primary/20 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                        </div>
                    }
                })}
            <div class="p-6">
                <div class="flex justify-between items-start mb-4">
                    <h3 class="text-2xl font-semibold text-foreground group-hover:text-secondary transition-colors duration-300">
                        {project.title.clone()}
                    </h3>
                    <div class="flex gap-2">
                        {project
                            .stats
                            .iter()
                            .map(|stat| {
                                view! {
                                    <span title=stat.label.clone()>
                                        <Badge class="text-foreground">{stat.value.clone()}</Badge>
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <p class="text-muted-foreground leading-relaxed mb-6">
                    {project.description.clone()}
                </p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <Badge class="border-transparent bg-muted text-muted-foreground hover:bg-secondary hover:text-secondary-foreground transition-colors duration-300">
                                    {tech.clone()}
                                </Badge>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4">
                    <a
                        href=project.github.clone()
                        target="_blank"
                        rel=EXTERNAL_REL
                        class="btn btn-cta btn-sm flex-1"
                    >
                        <Glyph icon=Icon::Github />
                        "View Code"
                    </a>
                    <a
                        href=project.demo.clone()
                        target="_blank"
                        rel=EXTERNAL_REL
                        class="btn btn-outline btn-sm flex-1"
                    >
                        <Glyph icon=Icon::ExternalLink />
                        "Live Demo"
                    </a>
                </div>
            </div>
        </div>
    }
}
