use leptos::{html, prelude::*};

use crate::reveal::{stagger_ms, stagger_style, DelayProperty, RevealStyle, Threshold};
use crate::sections::SectionId;

/// Flips to `true` the first time `target` is on screen at or above `threshold`.
///
/// Falls back to visible right away when the browser has no
/// `IntersectionObserver`. Stays `false` during server rendering.
pub fn use_reveal(target: NodeRef<html::Section>, threshold: Threshold) -> Signal<bool> {
    let (visible, set_visible) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use leptos_use::{
            use_intersection_observer_with_options, UseIntersectionObserverOptions,
            UseIntersectionObserverReturn,
        };

        use crate::reveal::{RevealController, RevealPlan, WatchHandle};

        let controller = StoredValue::new_local(RevealController::new(threshold));

        let plan = controller
            .try_update_value(|c| c.plan(intersection_observer_supported()))
            .unwrap_or(RevealPlan::RevealAfterHydration);
        if plan == RevealPlan::RevealAfterHydration {
            log::warn!("IntersectionObserver unavailable, revealing content after hydration");
            // setting it during setup is swallowed: hydration keeps the server's hidden classes
            Effect::new(move |_| set_visible.set(true));
            return visible.into();
        }

        let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
            target,
            move |entries, _| {
                let revealed = entries.iter().map(sample_entry).any(|sample| {
                    controller
                        .try_update_value(|c| c.observe(sample))
                        .unwrap_or(false)
                });
                if revealed {
                    log::debug!("revealed section at threshold {threshold}");
                    set_visible.set(true);
                }
            },
            UseIntersectionObserverOptions::default().thresholds(threshold.observer_thresholds()),
        );
        controller.update_value(|c| c.attach(WatchHandle::new(stop)));

        on_cleanup(move || {
            controller.try_update_value(|c| c.release());
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (target, threshold);

    visible.into()
}

#[cfg(feature = "hydrate")]
fn intersection_observer_supported() -> bool {
    use wasm_bindgen::JsValue;

    // Reflect::has throws on exotic globals, treat that as unsupported
    js_sys::Reflect::has(&window(), &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

#[cfg(feature = "hydrate")]
fn sample_entry(entry: &web_sys::IntersectionObserverEntry) -> crate::reveal::IntersectionSample {
    let target = entry.bounding_client_rect();
    let max_ratio = entry
        .root_bounds()
        .map(|root| {
            let fit = |root_len: f64, target_len: f64| {
                if target_len <= 0.0 {
                    1.0
                } else {
                    (root_len / target_len).min(1.0)
                }
            };
            fit(root.height(), target.height()) * fit(root.width(), target.width())
        })
        .unwrap_or(1.0);
    crate::reveal::IntersectionSample {
        is_intersecting: entry.is_intersecting(),
        ratio: entry.intersection_ratio(),
        max_ratio,
    }
}

/// Visibility of the enclosing [`RevealSection`].
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    visible: Signal<bool>,
    step_ms: u32,
}

impl Reveal {
    /// Reactive class for an element entering with `style`.
    pub fn class(self, style: RevealStyle) -> impl Fn() -> &'static str + Copy + Send + Sync {
        move || style.class(self.visible.get())
    }

    /// Reactive class with the element's static classes in front.
    pub fn classes(
        self,
        base: &'static str,
        style: RevealStyle,
    ) -> impl Fn() -> String + Copy + Send + Sync {
        move || format!("{base} {}", style.class(self.visible.get()))
    }

    /// Stagger style for the `index`-th card of the section.
    pub fn delay(self, index: usize, property: DelayProperty) -> impl Fn() -> String + Copy + Send + Sync {
        self.delay_ms(stagger_ms(index, self.step_ms), property)
    }

    pub fn delay_ms(
        self,
        delay_ms: u32,
        property: DelayProperty,
    ) -> impl Fn() -> String + Copy + Send + Sync {
        move || stagger_style(property, delay_ms, self.visible.get())
    }

    pub fn step_ms(&self) -> u32 {
        self.step_ms
    }
}

/// The [`Reveal`] of the section being rendered.
///
/// Outside a section there is nothing to wait for, so content shows at once.
pub fn use_section_reveal() -> Reveal {
    use_context::<Reveal>().unwrap_or_else(|| Reveal {
        visible: Signal::stored(true),
        step_ms: 0,
    })
}

/// A page section whose children reveal the first time it scrolls into view.
#[component]
pub fn RevealSection(
    section: SectionId,
    #[prop(into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Section>::new();
    let visible = match section.reveal_threshold() {
        Some(threshold) => use_reveal(node_ref, threshold),
        None => Signal::stored(true),
    };
    provide_context(Reveal {
        visible,
        step_ms: section.stagger_step_ms(),
    });

    view! {
        <section id=section.anchor() node_ref=node_ref class=class>
            {children()}
        </section>
    }
}
