//! Entrance and hover animation.
//!
//! Each animated element owns two independent state machines:
//!
//! - entrance: `Pending` → `Animating` → `Settled`, interpolating from an
//!   initial visual state to rest over a fixed duration, offset by a fixed
//!   delay, driven by `requestAnimationFrame`;
//! - hover: `Idle` ↔ `Hovered`, flipped instantaneously by pointer
//!   enter/leave and resolved to a CSS class.
//!
//! Hover displacement is applied by class to an element *inside* the
//! entrance wrapper, so a hover that starts mid-entrance composes with the
//! rest state instead of fighting the entrance transform.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// The interpolated channels of an animated element.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct VisualState {
    pub opacity: f64,
    pub dx: f64,
    pub dy: f64,
    pub scale: f64,
}

impl VisualState {
    /// Rest state every entrance converges to.
    pub const REST: Self = Self { opacity: 1.0, dx: 0.0, dy: 0.0, scale: 1.0 };

    fn toward_rest(self, t: f64) -> Self {
        let lerp = |from: f64, to: f64| from + (to - from) * t;
        Self {
            opacity: lerp(self.opacity, Self::REST.opacity),
            dx: lerp(self.dx, Self::REST.dx),
            dy: lerp(self.dy, Self::REST.dy),
            scale: lerp(self.scale, Self::REST.scale),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "opacity: {:.4}; transform: translate({:.2}px, {:.2}px) scale({:.4});",
            self.opacity, self.dx, self.dy, self.scale
        )
    }
}

/// Entrance lifecycle of a single element.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Pending,
    Animating,
    Settled,
}

/// Declarative entrance: initial state, delay, duration. Rest state is
/// always [`VisualState::REST`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct EntranceSpec {
    pub from: VisualState,
    pub delay_ms: f64,
    pub duration_ms: f64,
}

impl EntranceSpec {
    /// Hero text column: slides in from the left, starts at time zero.
    pub const fn hero_text() -> Self {
        Self {
            from: VisualState { opacity: 0.0, dx: -50.0, dy: 0.0, scale: 1.0 },
            delay_ms: 0.0,
            duration_ms: 800.0,
        }
    }

    /// Hero image column: scales up, starts a fixed delay after the text.
    pub const fn hero_visual() -> Self {
        Self {
            from: VisualState { opacity: 0.0, dx: 0.0, dy: 0.0, scale: 0.8 },
            delay_ms: 200.0,
            duration_ms: 1000.0,
        }
    }

    /// Methodology cards: fade and rise, siblings run concurrently.
    pub const fn card_rise() -> Self {
        Self {
            from: VisualState { opacity: 0.0, dx: 0.0, dy: 24.0, scale: 1.0 },
            delay_ms: 0.0,
            duration_ms: 600.0,
        }
    }

    /// Phase at a given elapsed time. `elapsed == delay` is the
    /// `Pending` → `Animating` transition point; `Settled` is never
    /// observable before `delay + duration`.
    pub fn phase_at(&self, elapsed_ms: f64) -> Phase {
        if elapsed_ms < self.delay_ms {
            Phase::Pending
        } else if elapsed_ms < self.delay_ms + self.duration_ms {
            Phase::Animating
        } else {
            Phase::Settled
        }
    }

    /// Eased interpolation at a given elapsed time, clamped to `from`
    /// before the delay and to rest after completion.
    pub fn sample(&self, elapsed_ms: f64) -> VisualState {
        match self.phase_at(elapsed_ms) {
            Phase::Pending => self.from,
            Phase::Settled => VisualState::REST,
            Phase::Animating => {
                let t = (elapsed_ms - self.delay_ms) / self.duration_ms;
                self.from.toward_rest(ease_out_cubic(t))
            }
        }
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Binds a spec to the timestamp of its first frame.
pub struct Timeline {
    spec: EntranceSpec,
    start: Option<f64>,
}

impl Timeline {
    pub fn new(spec: EntranceSpec) -> Self {
        Self { spec, start: None }
    }

    pub fn tick(&mut self, now_ms: f64) -> (Phase, VisualState) {
        let start = *self.start.get_or_insert(now_ms);
        let elapsed = now_ms - start;
        (self.spec.phase_at(elapsed), self.spec.sample(elapsed))
    }
}

/// Pointer-hover state machine, one per hoverable element.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Hover {
    #[default]
    Idle,
    Hovered,
}

impl Hover {
    pub fn enter(self) -> Self {
        Hover::Hovered
    }

    pub fn leave(self) -> Self {
        Hover::Idle
    }

    pub fn is_hovered(self) -> bool {
        matches!(self, Hover::Hovered)
    }

    /// Resolves the state to a class string on top of `base`.
    pub fn class(self, base: &str) -> String {
        if self.is_hovered() { format!("{base} is-hovered") } else { base.to_string() }
    }
}

const NO_FRAME: i32 = i32::MIN;

struct FrameFlags {
    frame_id: AtomicI32,
    cancelled: AtomicBool,
}

/// Shared handle to one element's scheduled animation frame. Send, so the
/// component's cleanup closure can own it.
#[derive(Clone)]
pub struct FrameHandle(Arc<FrameFlags>);

impl Default for FrameHandle {
    fn default() -> Self {
        Self(Arc::new(FrameFlags {
            frame_id: AtomicI32::new(NO_FRAME),
            cancelled: AtomicBool::new(false),
        }))
    }
}

impl FrameHandle {
    fn set(&self, id: i32) {
        self.0.frame_id.store(id, Ordering::Relaxed);
    }

    fn clear(&self) {
        self.0.frame_id.store(NO_FRAME, Ordering::Relaxed);
    }

    pub fn pending(&self) -> bool {
        self.0.frame_id.load(Ordering::Relaxed) != NO_FRAME
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.cancelled.load(Ordering::Relaxed)
    }

    /// Abandons the transition: the scheduled frame (if any) is cancelled
    /// and the loop stops rescheduling. No-op when nothing is scheduled.
    pub fn cancel(&self) -> bool {
        self.0.cancelled.store(true, Ordering::Relaxed);
        let id = self.0.frame_id.swap(NO_FRAME, Ordering::Relaxed);
        if id == NO_FRAME {
            return false;
        }
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(id);
        }
        true
    }
}

/// Starts an entrance on the frame clock, writing each sampled state into
/// the signal until the element settles. The returned handle cancels it.
pub fn start_entrance(spec: EntranceSpec, set_state: WriteSignal<VisualState>) -> FrameHandle {
    let handle = FrameHandle::default();
    if let Some(window) = web_sys::window() {
        let timeline = Rc::new(RefCell::new(Timeline::new(spec)));
        schedule_frame(&window, timeline, set_state, handle.clone());
    }
    handle
}

// One closure per frame; each drops itself after running and the next frame
// gets a fresh one, so a settled entrance leaves nothing behind.
fn schedule_frame(
    window: &web_sys::Window,
    timeline: Rc<RefCell<Timeline>>,
    set_state: WriteSignal<VisualState>,
    handle: FrameHandle,
) {
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let win = window.clone();
    let handle_for_cb = handle.clone();
    let cb = Closure::wrap(Box::new(move |now: f64| {
        let handle = handle_for_cb.clone();
        handle.clear();
        if !handle.is_cancelled() {
            let (phase, state) = timeline.borrow_mut().tick(now);
            set_state.set(state);
            if phase != Phase::Settled {
                schedule_frame(&win, Rc::clone(&timeline), set_state, handle.clone());
            }
        }
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        handle.set(id);
        *holder.borrow_mut() = Some(cb);
    }
}

/// Wraps children in a div whose opacity/transform play the given entrance
/// on mount. Unmounting mid-animation abandons the transition.
#[component]
pub fn Entrance(
    spec: EntranceSpec,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let (state, set_state) = signal(spec.from);
    let handle = start_entrance(spec, set_state);
    on_cleanup(move || {
        handle.cancel();
    });

    view! {
        <div class=class style=move || state.get().style()>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn phase_boundaries_respect_delay_and_duration() {
        let spec = EntranceSpec::hero_visual();
        assert_eq!(spec.phase_at(0.0), Phase::Pending);
        assert_eq!(spec.phase_at(199.9), Phase::Pending);
        // At exactly the delay the element leaves Pending.
        assert_eq!(spec.phase_at(200.0), Phase::Animating);
        assert_eq!(spec.phase_at(1199.9), Phase::Animating);
        assert_eq!(spec.phase_at(1200.0), Phase::Settled);
    }

    #[test]
    fn settled_is_never_observed_early() {
        let spec = EntranceSpec::hero_text();
        let end = spec.delay_ms + spec.duration_ms;
        let mut elapsed = 0.0;
        while elapsed < end {
            assert_ne!(spec.phase_at(elapsed), Phase::Settled, "at {elapsed}ms");
            elapsed += 16.7;
        }
        assert_eq!(spec.phase_at(end), Phase::Settled);
    }

    #[test]
    fn sample_clamps_and_progresses_monotonically() {
        let spec = EntranceSpec::hero_visual();
        assert_eq!(spec.sample(-5.0), spec.from);
        assert_eq!(spec.sample(100.0), spec.from);
        assert_eq!(spec.sample(1200.0), VisualState::REST);
        assert_eq!(spec.sample(5000.0), VisualState::REST);

        let early = spec.sample(400.0);
        let late = spec.sample(1000.0);
        assert!(early.opacity > 0.0 && early.opacity < 1.0);
        assert!(late.opacity > early.opacity);
        assert!(late.scale > early.scale);
    }

    #[test]
    fn timeline_latches_its_first_frame_as_time_zero() {
        let mut timeline = Timeline::new(EntranceSpec::hero_visual());
        let (phase, state) = timeline.tick(5000.0);
        assert_eq!(phase, Phase::Pending);
        assert_eq!(state, EntranceSpec::hero_visual().from);

        let (phase, _) = timeline.tick(5000.0 + 600.0);
        assert_eq!(phase, Phase::Animating);

        let (phase, state) = timeline.tick(5000.0 + 1200.0);
        assert_eq!(phase, Phase::Settled);
        assert_eq!(state, VisualState::REST);
    }

    #[test]
    fn zero_delay_entrance_starts_animating_on_first_frame() {
        let mut timeline = Timeline::new(EntranceSpec::card_rise());
        let (phase, _) = timeline.tick(42.0);
        assert_eq!(phase, Phase::Animating);
    }

    #[test]
    fn hover_machines_flip_independently() {
        let a = Hover::default();
        let b = Hover::default();
        let a = a.enter();
        assert!(a.is_hovered());
        assert!(!b.is_hovered());
        assert_eq!(a.class("tool-badge"), "tool-badge is-hovered");
        assert_eq!(b.class("tool-badge"), "tool-badge");
        let a = a.leave();
        assert!(!a.is_hovered());
        // enter/leave are idempotent
        assert_eq!(a.leave(), Hover::Idle);
        assert_eq!(b.enter().enter(), Hover::Hovered);
    }

    #[test]
    fn cancelling_an_unscheduled_frame_is_a_no_op() {
        let handle = FrameHandle::default();
        assert!(!handle.pending());
        assert!(!handle.cancel());
        assert!(handle.is_cancelled());
    }

    #[test]
    fn cleared_frame_is_no_longer_pending() {
        let handle = FrameHandle::default();
        handle.set(7);
        assert!(handle.pending());
        handle.clear();
        assert!(!handle.pending());
        assert!(!handle.cancel());
    }
}
