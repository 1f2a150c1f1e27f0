use chrono::Utc;
use leptos::prelude::*;

use super::reveal::{use_section_reveal, RevealSection};
use super::ui::{Badge, Glyph, EXTERNAL_REL};
use crate::content::{group_by_category, portfolio, Certification, CredentialStatus, Icon};
use crate::reveal::{DelayProperty, RevealStyle};
use crate::sections::SectionId;

#[component]
pub fn Certifications() -> impl IntoView {
    view! {
        <RevealSection
            section=SectionId::Certifications
            class="py-20 px-4 sm:px-6 lg:px-8 bg-gradient-to-br from-background via-background/95 to-primary/5"
        >
            <CertificationsBody />
        </RevealSection>
    }
}

#[component]
fn CertificationsBody() -> impl IntoView {
    let reveal = use_section_reveal();
    let groups = group_by_category(&portfolio().certifications);
    // stagger runs across groups so later categories keep arriving after earlier ones
    let mut offset = 0;
    let groups = groups
        .into_iter()
        .map(|(category, certs)| {
            let first = offset;
            offset += certs.len();
            view! {
                <div class="mb-12">
                    <h3 class=reveal
                        .classes(
                            "text-2xl font-semibold text-foreground mb-6 transition-all duration-1000",
                            RevealStyle::Rise,
                        )>{category.to_string()}</h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        {certs
                            .into_iter()
                            .enumerate()
                            .map(|(i, cert)| {
                                view! { <CertificationCard index=first + i cert=cert /> }
                            })
                            .collect_view()}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="max-w-6xl mx-auto">
            <div class=reveal
                .classes("text-center mb-16 transition-all duration-1000", RevealStyle::Rise)>
                <div class="flex items-center justify-center mb-4">
                    <Glyph icon=Icon::Award class="text-3xl mr-3" />
                    <h2 class="text-4xl md:text-5xl font-bold bg-gradient-to-r from-primary via-secondary to-accent bg-clip-text text-transparent">
                        "Certifications"
                    </h2>
                </div>
                <p class="text-lg text-muted-foreground max-w-2xl mx-auto leading-relaxed">
                    "Professional certifications and credentials that validate my expertise and commitment to continuous learning"
                </p>
            </div>

            {groups}

            <div
                class=reveal.classes("text-center mt-12 transition-all duration-1000", RevealStyle::Rise)
                style=reveal.delay_ms(700, DelayProperty::Transition)
            >
                <p class="text-muted-foreground text-sm">
                    "Committed to continuous professional development and staying current with industry standards"
                </p>
            </div>
        </div>
    }
}

#[component]
fn CertificationCard(index: usize, cert: &'static Certification) -> impl IntoView {
    let reveal = use_section_reveal();
    let status = cert.status_on(Utc::now().date_naive());
    let status_class = match status {
        CredentialStatus::Active => "bg-success/10 text-success border-success/20 ml-2",
        CredentialStatus::Expired => "bg-muted text-muted-foreground border-border ml-2",
    };

    view! {
        <div
            class=reveal
                .classes(
                    "card group hover:shadow-elegant transition-all duration-500 border border-border/50 hover:border-primary/30 bg-card/80 backdrop-blur-sm",
                    RevealStyle::Rise,
                )
            style=reveal.delay(index, DelayProperty::Transition)
        >
            <div class="p-6 pb-4">
                <div class="flex items-start justify-between">
                    <div class="flex-1">
                        <h4 class="text-xl font-semibold text-foreground group-hover:text-primary transition-colors duration-300 flex items-start gap-2">
                            <Glyph icon=Icon::Award class="mt-0.5 flex-shrink-0" />
                            {cert.name.clone()}
                        </h4>
                        <p class="flex items-center gap-2 mt-2 text-muted-foreground">
                            <Glyph icon=Icon::Building />
                            {cert.organization.clone()}
                        </p>
                    </div>
                    <Badge class=status_class>{status.to_string()}</Badge>
                </div>
            </div>

            <div class="px-6 pb-6 space-y-4">
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-3 text-sm">
                    <div class="flex items-center gap-2">
                        <Glyph icon=Icon::Calendar />
                        <div>
                            <p class="font-medium text-foreground">"Issued"</p>
                            <p class="text-muted-foreground">{cert.issued.to_string()}</p>
                        </div>
                    </div>
                    <div class="flex items-center gap-2">
                        <Glyph icon=Icon::Calendar />
                        <div>
                            <p class="font-medium text-foreground">"Expires"</p>
                            <p class="text-muted-foreground">{cert.expires_label()}</p>
                        </div>
                    </div>
                </div>

                <div class="pt-2 border-t border-border/50">
                    <p class="text-xs text-muted-foreground mb-2">
                        "Credential ID: " <span class="font-mono">{cert.credential_id.clone()}</span>
                    </p>
                    <a
                        href=cert.link.clone()
                        target="_blank"
                        rel=EXTERNAL_REL
                        class="inline-flex items-center gap-2 text-sm text-primary hover:text-primary/80 transition-colors duration-200 font-medium"
                    >
                        <Glyph icon=Icon::ExternalLink />
                        "View Credential"
                    </a>
                </div>
            </div>
        </div>
    }
}
