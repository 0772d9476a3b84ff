use crate::gesture::{self, DragRelease, GestureController};
use crate::scroll::ScrollModel;
use crate::spring::{STIFFNESS_FLING, STIFFNESS_LOW, STIFFNESS_MEDIUM};
use crate::transition::{TransitionController, TransitionEvent};
use crate::types::{CardVisual, FrameVisuals, OverlayVisual, SettleKind, TransitionState};
use crate::{geometry, Layout, SwitcherOptions};

/// Background scrim opacity while the stack is visible.
const SCRIM_ALPHA: f32 = 0.92;

/// The headless app-switcher carousel engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or images.
/// - The host drives it by feeding pointer events and calling
///   [`Switcher::tick`] once per frame with a monotonic `now_ms`.
/// - Rendering state comes out of [`Switcher::frame`]: where each card sits,
///   at what scale, and with what opacity.
///
/// All state mutation happens on the caller's thread; animations are plain
/// state advanced in `tick`. At most one scroll settle and one transition
/// are outstanding at a time, and starting a gesture cancels the settle.
#[derive(Clone, Debug)]
pub struct Switcher {
    options: SwitcherOptions,
    scroll: ScrollModel,
    gesture: GestureController,
    transition: TransitionController,
    /// Index the switcher opened on; the shrink-in overlay tracks it.
    shown_index: usize,
    last_tick_ms: Option<u64>,
}

impl Switcher {
    pub fn new(options: SwitcherOptions) -> Self {
        sdebug!(count = options.count, "Switcher::new");
        Self {
            options,
            scroll: ScrollModel::new(),
            gesture: GestureController::new(),
            transition: TransitionController::new(),
            shown_index: 0,
            last_tick_ms: None,
        }
    }

    pub fn options(&self) -> &SwitcherOptions {
        &self.options
    }

    pub fn layout(&self) -> &Layout {
        &self.options.layout
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    /// Re-syncs the back-stack length. The back stack is externally owned
    /// and may change between shows; scroll state is clamped into the new
    /// range and an empty stack drops the overlay entirely.
    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        strace!(count, "set_count");
        self.options.count = count;
        self.scroll.clamp_into(count);
        self.shown_index = self.shown_index.min(count.saturating_sub(1));
        if count == 0 {
            self.transition.hide();
        } else {
            self.transition.clamp_targets(count - 1);
        }
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.options.layout = layout;
    }

    pub fn transition_state(&self) -> TransitionState {
        self.transition.state()
    }

    /// The authoritative continuous scroll position, in card-index space.
    pub fn scroll_pos(&self) -> f32 {
        self.scroll.current()
    }

    pub fn is_dragging(&self) -> bool {
        self.scroll.is_dragging()
    }

    pub fn is_settling(&self) -> bool {
        self.scroll.is_settling()
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Opens the switcher centered on `selected_index`: scroll snaps there
    /// and the fullscreen page shrinks into its card slot. No-op while
    /// visible or when the back stack is empty.
    pub fn show(&mut self, selected_index: usize, now_ms: u64) {
        if !self.transition.is_hidden() {
            return;
        }
        if self.options.count == 0 {
            swarn!("show ignored: empty back stack");
            return;
        }
        let index = selected_index.min(self.options.count - 1);
        sdebug!(index, now_ms, "show");
        self.shown_index = index;
        self.scroll.snap_to(index as f32);
        self.transition.begin_show(now_ms);
    }

    /// Animated dismiss: re-centers on the last entry if needed, then
    /// expands it to fullscreen. Silent no-op while a transition is in
    /// flight or the switcher is hidden.
    ///
    /// Takes over the scroll outright: an active drag is abandoned (its
    /// release no longer produces an outcome) and a live settle is
    /// cancelled, so nothing can interleave with the re-center or fire a
    /// selection callback under the expand.
    pub fn dismiss(&mut self, now_ms: u64) {
        if !self.transition.is_stack() || self.transition.has_armed() {
            return;
        }
        let Some(target) = self.options.count.checked_sub(1) else {
            return;
        };
        sdebug!(target, now_ms, "dismiss");

        self.gesture.abort();
        let current = self.scroll.current();
        self.scroll.cancel_settle();
        if current.round() as usize != target {
            self.scroll
                .settle_to(target, 0.0, STIFFNESS_MEDIUM, SettleKind::Recenter);
            self.transition.arm_expand(target, false);
        } else {
            self.scroll.end_drag();
            self.transition.begin_expand(target, false, now_ms);
        }
    }

    /// The host's back control maps straight onto dismiss.
    pub fn on_back_signal(&mut self, now_ms: u64) {
        self.dismiss(now_ms);
    }

    // ------------------------------------------------------------------
    // Gestures
    // ------------------------------------------------------------------

    /// Ignored unless the stack is interactive (no transition in flight).
    pub fn drag_start(&mut self, now_ms: u64) {
        if !self.transition.is_stack() || self.transition.has_armed() {
            return;
        }
        strace!(now_ms, "drag_start");
        self.gesture.begin(now_ms);
        self.scroll.begin_drag();
    }

    pub fn drag_move(&mut self, dx: f32, dy: f32, now_ms: u64) {
        if !self.gesture.is_active() {
            return;
        }
        let pos = self.scroll.current();
        if let Some(delta) = self.gesture.on_move(
            dx,
            dy,
            now_ms,
            pos,
            self.options.count,
            &self.options.layout,
        ) {
            self.scroll.drag_by(delta);
        }
    }

    pub fn drag_end(&mut self, now_ms: u64) {
        if !self.gesture.is_active() {
            return;
        }
        let pos = self.scroll.current();
        match self
            .gesture
            .end(pos, self.options.count, &self.options.layout)
        {
            DragRelease::Fling { target, velocity } => {
                strace!(target, velocity, now_ms, "fling");
                self.scroll
                    .settle_to(target, velocity, STIFFNESS_FLING, SettleKind::Fling);
            }
            DragRelease::None => self.scroll.end_drag(),
        }
    }

    pub fn drag_cancel(&mut self, _now_ms: u64) {
        if !self.gesture.is_active() {
            return;
        }
        let pos = self.scroll.current();
        let target = self.gesture.cancel(pos, self.options.count);
        self.scroll
            .settle_to(target, 0.0, STIFFNESS_LOW, SettleKind::Cancel);
    }

    /// Tap: a hit expands that card and reports the selection; a miss
    /// dismisses. Hit-testing reads the animated scroll position.
    pub fn tap(&mut self, x: f32, y: f32, now_ms: u64) {
        if !self.transition.is_stack() || self.transition.has_armed() {
            return;
        }

        let sp = self.scroll.current();
        match gesture::hit_test(&self.options.layout, self.options.count, sp, x, y) {
            Some(index) => {
                sdebug!(index, "tap hit");
                self.scroll.cancel_settle();
                self.transition.begin_expand(index, true, now_ms);
            }
            None => self.dismiss(now_ms),
        }
    }

    // ------------------------------------------------------------------
    // Frame loop
    // ------------------------------------------------------------------

    /// Advances animations and fires host callbacks. Call once per frame
    /// with a monotonic timestamp.
    pub fn tick(&mut self, now_ms: u64) {
        let dt = match self.last_tick_ms {
            Some(last) => now_ms.saturating_sub(last) as f32 / 1000.0,
            None => 0.0,
        };
        self.last_tick_ms = Some(now_ms);

        if let Some((target, kind)) = self.scroll.tick(dt) {
            match kind {
                SettleKind::Fling => self.notify_selection_changed(target),
                SettleKind::Recenter => {
                    if let Some(armed) = self.transition.take_armed() {
                        self.transition
                            .begin_expand(armed.target, armed.selected, now_ms);
                    }
                }
                SettleKind::Cancel => {}
            }
        }

        match self.transition.tick(now_ms) {
            Some(TransitionEvent::ShrinkDone) => {}
            Some(TransitionEvent::ExpandDone { target, selected }) => {
                if selected {
                    // Host navigates now; dismissal follows after the
                    // linger while the overlay still covers the swap.
                    self.notify_card_selected(target);
                } else {
                    self.notify_dismissed();
                }
            }
            Some(TransitionEvent::LingerDone) => self.notify_dismissed(),
            None => {}
        }
    }

    /// Computes the per-frame visual model, `None` while hidden.
    ///
    /// Cards are sorted by ascending z (stack order); the overlay, when
    /// present, supersedes the card it targets.
    pub fn frame(&self) -> Option<FrameVisuals> {
        let state = self.transition.state();
        if state == TransitionState::Hidden {
            return None;
        }

        let layout = &self.options.layout;
        let count = self.options.count;
        let sp = self.scroll.current();
        let overlay_progress = state.overlay_progress();
        let expand_fade = if state.in_flight() {
            1.0 - overlay_progress
        } else {
            1.0
        };

        let scrim_alpha = match state {
            TransitionState::ExpandOut { progress, .. } => SCRIM_ALPHA * (1.0 - progress),
            _ => SCRIM_ALPHA,
        };

        let mut cards = Vec::with_capacity(count.min(8));
        for index in 0..count {
            if geometry::is_culled(layout, count, index, sp) {
                continue;
            }
            let rel = geometry::rel_pos(index, sp, count);
            let scale = geometry::depth_scale(rel)
                * geometry::overscroll_sink_scale(count, index, sp);
            cards.push(CardVisual {
                index,
                center_x: geometry::card_center_x(layout, count, index, sp),
                center_y: layout.card_center_y(),
                scale,
                alpha: geometry::left_fade_alpha(rel) * expand_fade,
                title_alpha: geometry::title_alpha(rel),
                title_blur_radius: geometry::title_blur_radius(rel),
                dark_overlay_alpha: geometry::dark_overlay_alpha(rel),
                z_index: index,
            });
        }

        let overlay_index = match state {
            TransitionState::ShrinkIn { .. } => Some(self.shown_index),
            TransitionState::ExpandOut { target, .. } => Some(target),
            _ => None,
        };
        let overlay = overlay_index
            .filter(|&i| i < count)
            .map(|index| self.overlay_visual(index, sp, overlay_progress));

        Some(FrameVisuals {
            cards,
            overlay,
            scrim_alpha,
        })
    }

    /// Interpolated overlay geometry: the card's current bounds at
    /// progress 0, the full viewport at progress 1.
    fn overlay_visual(&self, index: usize, sp: f32, progress: f32) -> OverlayVisual {
        let layout = &self.options.layout;
        let count = self.options.count;

        let rel = geometry::rel_pos(index, sp, count);
        let scale = geometry::depth_scale(rel);
        let start_cx = geometry::card_center_x(layout, count, index, sp);
        let start_cy = layout.card_center_y();
        let start_w = layout.card_width() * scale;
        let start_h = layout.card_height() * scale;

        // Lerp form chosen to be exact at both endpoints.
        let lerp = |a: f32, b: f32| a * (1.0 - progress) + b * progress;
        OverlayVisual {
            index,
            center_x: lerp(start_cx, layout.center_x()),
            center_y: lerp(start_cy, layout.center_y()),
            width: lerp(start_w, layout.screen_width),
            height: lerp(start_h, layout.screen_height),
            corner_radius: layout.corner_radius * (1.0 - progress),
        }
    }

    fn notify_card_selected(&self, index: usize) {
        if let Some(cb) = &self.options.on_card_selected {
            cb(index);
        }
    }

    fn notify_dismissed(&self) {
        if let Some(cb) = &self.options.on_switcher_dismissed {
            cb();
        }
    }

    fn notify_selection_changed(&self, index: usize) {
        if let Some(cb) = &self.options.on_selection_changed {
            cb(index);
        }
    }
}
