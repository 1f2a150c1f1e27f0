use leptos::{ev::SubmitEvent, html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::nav::{scroll_to_anchor, ScrollAlign};
use super::reveal::{use_section_reveal, RevealSection};
use super::ui::{Glyph, SectionHeading, EXTERNAL_REL};
use crate::contact::{ContactField, ContactForm, MailDraft, Notice, NOTICE_DURATION_MS};
use crate::content::{portfolio, ContactChannel, Icon};
use crate::reveal::RevealStyle;
use crate::sections::SectionId;

const FORM_ID: &str = "contact-form";
const INPUT_CLASS: &str = "w-full rounded-md border px-3 py-2 text-sm bg-background/50 border-border/50 focus:border-secondary focus:ring-secondary focus:outline-none";

/// Hands the draft to the visitor's mail client.
fn open_mail_client(draft: &MailDraft) {
    #[cfg(feature = "hydrate")]
    if let Err(err) = window().location().set_href(&draft.uri()) {
        log::warn!("could not open mail client: {err:?}");
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = draft;
}

fn focus_input(input: NodeRef<html::Input>) {
    #[cfg(feature = "hydrate")]
    if let Some(el) = input.get_untracked() {
        if let Err(err) = el.focus() {
            log::warn!("could not focus contact form: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = input;
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <RevealSection section=SectionId::Contact class="py-20 bg-muted/30">
            <div class="container mx-auto px-6">
                <SectionHeading
                    lead="Let's"
                    accent="Collaborate"
                    subtitle="Ready to work on something amazing together? I'd love to hear from you!"
                />
                <ContactBody />
            </div>
        </RevealSection>
    }
}

#[component]
fn ContactBody() -> impl IntoView {
    let reveal = use_section_reveal();
    let form = RwSignal::new(ContactForm::default());
    let name_input = NodeRef::<html::Input>::new();
    let (notice, set_notice) = signal(None::<Notice>);

    let UseTimeoutFnReturn {
        start: dismiss_later,
        ..
    } = use_timeout_fn(move |_: ()| set_notice.set(None), NOTICE_DURATION_MS);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let settings = portfolio().mail_settings();
        let Some(outcome) = form.try_update(|f| f.submit(&settings)) else {
            return;
        };
        match &outcome {
            Ok(draft) => open_mail_client(draft),
            Err(err) => log::debug!("contact form rejected: {err}"),
        }
        set_notice.set(Some(Notice::from_outcome(&outcome)));
        dismiss_later(());
    };

    let start_project = move |_| {
        scroll_to_anchor(FORM_ID, ScrollAlign::Center);
        focus_input(name_input);
    };

    view! {
        <div class="grid lg:grid-cols-2 gap-12 max-w-6xl mx-auto">
            <div class=reveal
                .classes("card border-0 bg-gradient-card shadow-large", RevealStyle::FadeInLeft)>
                <div class="p-8">
                    <h3 class="text-2xl font-semibold text-foreground mb-6">"Send me a message"</h3>
                    <form id=FORM_ID on:submit=on_submit class="space-y-6" novalidate>
                        <div class="grid md:grid-cols-2 gap-4">
                            <div>
                                <label for="name" class="block text-sm font-medium text-foreground mb-2">
                                    "Your Name"
                                </label>
                                <input
                                    id="name"
                                    name="name"
                                    type="text"
                                    required
                                    node_ref=name_input
                                    placeholder="John Doe"
                                    class=INPUT_CLASS
                                    prop:value=move || form.with(|f| f.get(ContactField::Name).to_string())
                                    on:input=move |ev| {
                                        form.update(|f| f.set(ContactField::Name, event_target_value(&ev)))
                                    }
                                />
                            </div>
                            <div>
                                <label for="email" class="block text-sm font-medium text-foreground mb-2">
                                    "Your Email"
                                </label>
                                <input
                                    id="email"
                                    name="email"
                                    type="email"
                                    required
                                    placeholder="john@example.com"
                                    class=INPUT_CLASS
                                    prop:value=move || form.with(|f| f.get(ContactField::Email).to_string())
                                    on:input=move |ev| {
                                        form.update(|f| f.set(ContactField::Email, event_target_value(&ev)))
                                    }
                                />
                            </div>
                        </div>
                        <div>
                            <label for="subject" class="block text-sm font-medium text-foreground mb-2">
                                "Subject"
                            </label>
                            <input
                                id="subject"
                                name="subject"
                                type="text"
                                placeholder="Project Collaboration"
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.get(ContactField::Subject).to_string())
                                on:input=move |ev| {
                                    form.update(|f| f.set(ContactField::Subject, event_target_value(&ev)))
                                }
                            />
                        </div>
                        <div>
                            <label for="message" class="block text-sm font-medium text-foreground mb-2">
                                "Message"
                            </label>
                            <textarea
                                id="message"
                                name="message"
                                required
                                rows="6"
                                placeholder="Tell me about your project or how we can collaborate..."
                                class=format!("{INPUT_CLASS} resize-none")
                                prop:value=move || form.with(|f| f.get(ContactField::Message).to_string())
                                on:input=move |ev| {
                                    form.update(|f| f.set(ContactField::Message, event_target_value(&ev)))
                                }
                            ></textarea>
                        </div>
                        <button type="submit" class="btn btn-hero btn-lg w-full">
                            <Glyph icon=Icon::Send />
                            "Send Message"
                        </button>
                    </form>
                </div>
            </div>

            <div class=reveal.classes("space-y-8", RevealStyle::FadeInRight)>
                <div>
                    <h3 class="text-2xl font-semibold text-foreground mb-6">"Get in touch"</h3>
                    <p class="text-muted-foreground leading-relaxed mb-8">
                        {portfolio().profile.contact_blurb.clone()}
                    </p>
                </div>
                <div class="space-y-6">
                    {portfolio()
                        .contact
                        .iter()
                        .map(|channel| view! { <ChannelRow channel=channel /> })
                        .collect_view()}
                </div>
                <div class="card border-0 bg-gradient-accent text-secondary-foreground shadow-teal-glow">
                    <div class="p-6 text-center">
                        <h4 class="text-xl font-semibold mb-2">"Ready to collaborate?"</h4>
                        <p class="mb-4 opacity-90">"Let's build something amazing together!"</p>
                        <button type="button" class="btn btn-glass btn-lg" on:click=start_project>
                            "Start a Project"
                        </button>
                    </div>
                </div>
            </div>
        </div>

        <div class="fixed bottom-6 right-6 z-50 max-w-sm" role="status" aria-live="polite">
            {move || {
                notice
                    .get()
                    .map(|notice| {
                        let class = if notice.is_error() {
                            "card animate-fade-in p-4 shadow-large border border-accent/40"
                        } else {
                            "card animate-fade-in p-4 shadow-large border border-secondary/40"
                        };
                        view! {
                            <div class=class>
                                <p class="font-semibold text-foreground">{notice.title()}</p>
                                <p class="text-sm text-muted-foreground">{notice.description()}</p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn ChannelRow(channel: &'static ContactChannel) -> impl IntoView {
    const ROW: &str = "flex items-center gap-4 p-4 rounded-xl bg-gradient-card hover:shadow-medium transition-all duration-300";
    let body = view! {
        <div class="p-3 rounded-lg bg-secondary/10 text-secondary">
            <Glyph icon=channel.icon class="text-xl" />
        </div>
        <div>
            <h4 class="font-medium text-foreground">{channel.label.clone()}</h4>
            <p class="text-muted-foreground">{channel.value.clone()}</p>
        </div>
    };

    match channel.href.clone() {
        Some(href) => view! {
            <a
                href=href
                target="_blank"
                rel=EXTERNAL_REL
                class=format!("{ROW} cursor-pointer hover:scale-[1.02]")
            >
                {body}
            </a>
        }
        .into_any(),
        None => view! { <div class=ROW>{body}</div> }.into_any(),
    }
}
