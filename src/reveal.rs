//! One-shot "reveal when scrolled into view" state.
//!
//! The browser side (see `app::reveal`) feeds intersection samples into a
//! [`RevealController`]; everything in here is plain data so it can be
//! exercised without a DOM.

use std::fmt;

/// Fraction of an element's area that has to be on screen before it reveals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(ratio: f64) -> Self {
        if ratio.is_nan() {
            return Self(0.0);
        }
        Self(ratio.clamp(0.0, 1.0))
    }

    pub fn ratio(self) -> f64 {
        self.0
    }

    /// Ratios the observer should report crossings for.
    ///
    /// Zero is always included so elements that can never reach the threshold
    /// (taller than the viewport) still produce a callback when they enter.
    pub fn observer_thresholds(self) -> Vec<f64> {
        if self.0 > 0.0 {
            vec![0.0, self.0]
        } else {
            vec![0.0]
        }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(0.2)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// A single intersection observation for the watched element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    /// Visible fraction of the element.
    pub ratio: f64,
    /// Largest ratio the element can reach in the current viewport, 1.0 when it fits.
    pub max_ratio: f64,
}

impl IntersectionSample {
    pub fn entering(ratio: f64) -> Self {
        Self {
            is_intersecting: true,
            ratio,
            max_ratio: 1.0,
        }
    }

    pub fn leaving() -> Self {
        Self {
            is_intersecting: false,
            ratio: 0.0,
            max_ratio: 1.0,
        }
    }

    fn meets(&self, threshold: Threshold) -> bool {
        if !self.is_intersecting {
            return false;
        }
        if self.max_ratio < threshold.ratio() {
            // threshold is unreachable for this element, any overlap counts
            return true;
        }
        self.ratio >= threshold.ratio()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Revealed,
    Unchanged,
}

/// Visibility flag that latches to `true` and never goes back.
#[derive(Debug, Clone, Copy)]
pub struct RevealLatch {
    threshold: Threshold,
    visible: bool,
}

impl RevealLatch {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn observe(&mut self, sample: IntersectionSample) -> Transition {
        if self.visible || !sample.meets(self.threshold) {
            return Transition::Unchanged;
        }
        self.visible = true;
        Transition::Revealed
    }

    /// Forces the flag on, used when the viewport API is missing.
    pub fn force(&mut self) -> Transition {
        if self.visible {
            return Transition::Unchanged;
        }
        self.visible = true;
        Transition::Revealed
    }
}

/// Releases an intersection watcher exactly once, at the latest when dropped.
pub struct WatchHandle {
    release: Option<Box<dyn FnOnce()>>,
}

impl WatchHandle {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn is_live(&self) -> bool {
        self.release.is_some()
    }

    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for WatchHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchHandle")
            .field("live", &self.is_live())
            .finish()
    }
}

/// How a freshly mounted section starts out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPlan {
    /// Register a watcher and wait for intersections.
    Watch,
    /// No viewport API. The markup was rendered hidden on the server, so the
    /// flip to visible has to land after hydration or the DOM never sees it.
    RevealAfterHydration,
}

/// Ties a latch to the watcher feeding it.
///
/// The watcher is released as soon as the latch flips (nothing left to
/// observe) or when the owning section unmounts, whichever comes first.
#[derive(Debug)]
pub struct RevealController {
    latch: RevealLatch,
    watcher: Option<WatchHandle>,
}

impl RevealController {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            latch: RevealLatch::new(threshold),
            watcher: None,
        }
    }

    pub fn attach(&mut self, handle: WatchHandle) {
        if self.latch.is_visible() {
            // revealed before the watcher was handed over
            drop(handle);
            return;
        }
        self.watcher = Some(handle);
    }

    pub fn is_visible(&self) -> bool {
        self.latch.is_visible()
    }

    pub fn is_watching(&self) -> bool {
        self.watcher.as_ref().is_some_and(WatchHandle::is_live)
    }

    /// Returns `true` only on the observation that revealed the element.
    pub fn observe(&mut self, sample: IntersectionSample) -> bool {
        match self.latch.observe(sample) {
            Transition::Revealed => {
                self.release();
                true
            }
            Transition::Unchanged => false,
        }
    }

    /// Decides whether to watch or fail open. Failing open latches the flag.
    pub fn plan(&mut self, observer_available: bool) -> RevealPlan {
        if observer_available {
            RevealPlan::Watch
        } else {
            self.fail_open();
            RevealPlan::RevealAfterHydration
        }
    }

    pub fn fail_open(&mut self) -> bool {
        let revealed = self.latch.force() == Transition::Revealed;
        self.release();
        revealed
    }

    pub fn release(&mut self) {
        if let Some(mut watcher) = self.watcher.take() {
            watcher.release();
        }
    }
}

/// Hidden/revealed class pair for one entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealClasses {
    pub hidden: &'static str,
    pub revealed: &'static str,
}

/// Marker on everything still waiting to reveal; the `<noscript>` stylesheet keys on it.
pub const PENDING_CLASS: &str = "reveal-pending";

/// Stylesheet that shows every pending element when scripts never run.
///
/// Tailwind v4 moves elements with the standalone `translate` property, so
/// clearing `transform` alone would leave them offset.
pub fn noscript_css() -> String {
    format!(".{PENDING_CLASS}{{opacity:1 !important;transform:none !important;translate:none !important}}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStyle {
    FadeIn,
    FadeInLeft,
    FadeInRight,
    ScaleIn,
    /// Transition based slide up, paired with [`DelayProperty::Transition`].
    Rise,
}

impl RevealStyle {
    pub fn classes(self) -> RevealClasses {
        match self {
            Self::FadeIn => RevealClasses {
                hidden: "reveal-pending opacity-0",
                revealed: "animate-fade-in",
            },
            Self::FadeInLeft => RevealClasses {
                hidden: "reveal-pending opacity-0",
                revealed: "animate-fade-in-left",
            },
            Self::FadeInRight => RevealClasses {
                hidden: "reveal-pending opacity-0",
                revealed: "animate-fade-in-right",
            },
            Self::ScaleIn => RevealClasses {
                hidden: "reveal-pending opacity-0",
                revealed: "animate-scale-in",
            },
            Self::Rise => RevealClasses {
                hidden: "reveal-pending opacity-0 translate-y-10",
                revealed: "opacity-100 translate-y-0",
            },
        }
    }

    pub fn class(self, visible: bool) -> &'static str {
        let classes = self.classes();
        if visible {
            classes.revealed
        } else {
            classes.hidden
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayProperty {
    Animation,
    Transition,
}

/// Per-card stagger offset.
pub fn stagger_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}

/// Inline style for a staggered card.
///
/// Transition delays only apply once the card is visible, otherwise the
/// hidden state would also lag behind.
pub fn stagger_style(property: DelayProperty, delay_ms: u32, visible: bool) -> String {
    match property {
        DelayProperty::Animation => format!("animation-delay: {delay_ms}ms"),
        DelayProperty::Transition if visible => format!("transition-delay: {delay_ms}ms"),
        DelayProperty::Transition => "transition-delay: 0ms".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_handle(live: &Rc<Cell<i32>>, released: &Rc<Cell<u32>>) -> WatchHandle {
        live.set(live.get() + 1);
        let live = live.clone();
        let released = released.clone();
        WatchHandle::new(move || {
            live.set(live.get() - 1);
            released.set(released.get() + 1);
        })
    }

    #[test]
    fn test_threshold_clamps() {
        assert_eq!(Threshold::new(1.7).ratio(), 1.0);
        assert_eq!(Threshold::new(-0.5).ratio(), 0.0);
        assert_eq!(Threshold::new(f64::NAN).ratio(), 0.0);
        assert_eq!(Threshold::new(0.3).observer_thresholds(), vec![0.0, 0.3]);
        assert_eq!(Threshold::new(0.0).observer_thresholds(), vec![0.0]);
    }

    #[test]
    fn test_latch_starts_hidden() {
        let latch = RevealLatch::new(Threshold::new(0.3));
        assert!(!latch.is_visible());
    }

    #[test]
    fn test_latch_ignores_samples_below_threshold() {
        let mut latch = RevealLatch::new(Threshold::new(0.3));
        assert_eq!(
            latch.observe(IntersectionSample::entering(0.1)),
            Transition::Unchanged
        );
        assert_eq!(latch.observe(IntersectionSample::leaving()), Transition::Unchanged);
        assert!(!latch.is_visible());
    }

    #[test]
    fn test_latch_reveals_at_threshold_exactly_once() {
        let mut latch = RevealLatch::new(Threshold::new(0.3));
        assert_eq!(
            latch.observe(IntersectionSample::entering(0.3)),
            Transition::Revealed
        );
        assert!(latch.is_visible());

        // further entries and exits never flip it again
        assert_eq!(
            latch.observe(IntersectionSample::entering(0.9)),
            Transition::Unchanged
        );
        assert_eq!(latch.observe(IntersectionSample::leaving()), Transition::Unchanged);
        assert!(latch.is_visible());
    }

    #[test]
    fn test_latch_requires_intersection() {
        let mut latch = RevealLatch::new(Threshold::new(0.1));
        let stale = IntersectionSample {
            is_intersecting: false,
            ratio: 0.5,
            max_ratio: 1.0,
        };
        assert_eq!(latch.observe(stale), Transition::Unchanged);
    }

    #[test]
    fn test_tall_element_reveals_on_any_overlap() {
        let mut latch = RevealLatch::new(Threshold::new(0.3));
        let tall = IntersectionSample {
            is_intersecting: true,
            ratio: 0.02,
            max_ratio: 0.25,
        };
        assert_eq!(latch.observe(tall), Transition::Revealed);
    }

    #[test]
    fn test_controller_releases_watcher_on_reveal() {
        let live = Rc::new(Cell::new(0));
        let released = Rc::new(Cell::new(0));
        let mut controller = RevealController::new(Threshold::new(0.2));
        controller.attach(counting_handle(&live, &released));
        assert!(controller.is_watching());

        assert!(!controller.observe(IntersectionSample::entering(0.05)));
        assert!(controller.is_watching());

        assert!(controller.observe(IntersectionSample::entering(0.25)));
        assert!(controller.is_visible());
        assert!(!controller.is_watching());
        assert_eq!(live.get(), 0);

        // late callbacks after the reveal are harmless
        assert!(!controller.observe(IntersectionSample::leaving()));
        assert!(controller.is_visible());
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_unmount_before_intersection_releases_watcher() {
        let live = Rc::new(Cell::new(0));
        let released = Rc::new(Cell::new(0));
        let mut controller = RevealController::new(Threshold::new(0.2));
        controller.attach(counting_handle(&live, &released));

        controller.release();
        controller.release();
        assert!(!controller.is_visible());
        assert_eq!(live.get(), 0);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_repeated_mount_cycles_leave_no_live_watchers() {
        let live = Rc::new(Cell::new(0));
        let released = Rc::new(Cell::new(0));
        for cycle in 0..50 {
            let mut controller = RevealController::new(Threshold::new(0.1));
            controller.attach(counting_handle(&live, &released));
            if cycle % 2 == 0 {
                controller.observe(IntersectionSample::entering(0.5));
            }
            // dropping the controller is the unmount
        }
        assert_eq!(live.get(), 0);
        assert_eq!(released.get(), 50);
    }

    #[test]
    fn test_fail_open_reveals_and_releases() {
        let live = Rc::new(Cell::new(0));
        let released = Rc::new(Cell::new(0));
        let mut controller = RevealController::new(Threshold::new(0.3));
        controller.attach(counting_handle(&live, &released));

        assert!(controller.fail_open());
        assert!(controller.is_visible());
        assert_eq!(live.get(), 0);
        assert!(!controller.fail_open());
    }

    #[test]
    fn test_attach_after_reveal_releases_immediately() {
        let live = Rc::new(Cell::new(0));
        let released = Rc::new(Cell::new(0));
        let mut controller = RevealController::new(Threshold::new(0.3));
        controller.fail_open();
        controller.attach(counting_handle(&live, &released));
        assert!(!controller.is_watching());
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn test_reveal_classes() {
        assert!(RevealStyle::FadeIn.class(false).contains(PENDING_CLASS));
        assert_eq!(RevealStyle::FadeIn.class(true), "animate-fade-in");
        assert_eq!(RevealStyle::Rise.class(true), "opacity-100 translate-y-0");
        assert!(!RevealStyle::ScaleIn.class(true).contains(PENDING_CLASS));
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger_ms(0, 300), 0);
        assert_eq!(stagger_ms(3, 150), 450);
        assert_eq!(stagger_ms(usize::MAX, 2), u32::MAX);
        assert_eq!(
            stagger_style(DelayProperty::Animation, 200, false),
            "animation-delay: 200ms"
        );
        assert_eq!(
            stagger_style(DelayProperty::Transition, 300, true),
            "transition-delay: 300ms"
        );
        assert_eq!(
            stagger_style(DelayProperty::Transition, 300, false),
            "transition-delay: 0ms"
        );
    }

    #[test]
    fn test_plan_watches_when_observer_exists() {
        let mut controller = RevealController::new(Threshold::default());
        assert_eq!(controller.plan(true), RevealPlan::Watch);
        assert!(!controller.is_visible());
    }

    #[test]
    fn test_plan_without_observer_reveals_after_hydration() {
        let live = Rc::new(Cell::new(0));
        let released = Rc::new(Cell::new(0));
        let mut controller = RevealController::new(Threshold::default());

        assert_eq!(controller.plan(false), RevealPlan::RevealAfterHydration);
        assert!(controller.is_visible());

        // nothing may keep watching a section that already failed open
        controller.attach(counting_handle(&live, &released));
        assert!(!controller.is_watching());
        assert_eq!(live.get(), 0);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_noscript_css_undoes_every_hidden_state() {
        let css = noscript_css();
        assert!(css.starts_with(".reveal-pending{"));
        for rule in ["opacity:1", "transform:none", "translate:none"] {
            assert!(css.contains(rule), "missing {rule}: {css}");
        }
        // every hidden state carries the marker the stylesheet keys on
        for style in [RevealStyle::FadeIn, RevealStyle::Rise, RevealStyle::ScaleIn] {
            assert!(style.class(false).contains(PENDING_CLASS));
        }
    }
}
