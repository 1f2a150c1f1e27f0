use leptos::{ev::MouseEvent, prelude::*};

use crate::content::portfolio;
use crate::sections::{nav_sections, SectionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    Start,
    Center,
}

/// Smooth-scrolls to the element with id `anchor`.
pub fn scroll_to_anchor(anchor: &str, align: ScrollAlign) {
    #[cfg(feature = "hydrate")]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

        let Some(el) = document().get_element_by_id(anchor) else {
            log::warn!("no element with id '{anchor}' to scroll to");
            return;
        };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(match align {
            ScrollAlign::Start => ScrollLogicalPosition::Start,
            ScrollAlign::Center => ScrollLogicalPosition::Center,
        });
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (anchor, align);
}

pub fn scroll_to_section(section: SectionId) {
    scroll_to_anchor(section.anchor(), ScrollAlign::Start);
}

/// Click handler for `#anchor` links: smooth scroll instead of jumping.
pub fn on_anchor_click(section: SectionId) -> impl Fn(MouseEvent) + Clone + 'static {
    move |ev: MouseEvent| {
        ev.prevent_default();
        scroll_to_section(section);
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let profile = &portfolio().profile;
    view! {
        <header class="sticky top-0 z-50 bg-background/80 backdrop-blur-sm border-b border-border/50">
            <nav class="container mx-auto px-6 py-3 flex items-center justify-between gap-4">
                <a
                    href="#hero"
                    on:click=on_anchor_click(SectionId::Hero)
                    class="font-bold text-lg text-foreground hover:text-secondary transition-colors duration-200"
                >
                    {profile.first_name.clone()}
                    <span class="text-secondary">"."</span>
                </a>
                <ul class="hidden md:flex flex-wrap gap-4 text-sm">
                    {nav_sections()
                        .map(|section| {
                            view! {
                                <li>
                                    <a
                                        href=format!("#{}", section.anchor())
                                        on:click=on_anchor_click(section)
                                        class="text-muted-foreground hover:text-secondary transition-colors duration-200"
                                    >
                                        {section.label()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}
