//! Drag interpretation: axis locking, friction, rubber-banding, fling
//! projection, and tap hit-testing.
//!
//! The controller owns only gesture-local state (accumulated displacement,
//! locked axis, velocity samples). It never touches the scroll model
//! directly; the engine applies the deltas and outcomes it produces.

use crate::geometry;
use crate::types::DragAxis;
use crate::velocity::VelocityTracker;
use crate::Layout;

/// Accumulated displacement on either axis that locks the drag direction.
const AXIS_LOCK_THRESHOLD: f32 = 15.0;

/// Base damping on drag input, for a heavier iOS-like feel.
const BASE_FRICTION: f32 = 0.70;

/// How far ahead (seconds) a release velocity is projected when picking the
/// fling target.
const FLING_PROJECTION_SECS: f32 = 0.25;

/// What a finished horizontal drag turned into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragRelease {
    /// Vertical or never-locked drag; no scroll change.
    None,
    /// Horizontal release: spring toward `target` with `velocity` (index
    /// units per second; zeroed when released while overscrolled).
    Fling { target: usize, velocity: f32 },
}

#[derive(Clone, Debug, Default)]
pub struct GestureController {
    total_dx: f32,
    total_dy: f32,
    axis: DragAxis,
    tracker: VelocityTracker,
    active: bool,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn axis(&self) -> DragAxis {
        self.axis
    }

    pub fn begin(&mut self, now_ms: u64) {
        self.active = true;
        self.total_dx = 0.0;
        self.total_dy = 0.0;
        self.axis = DragAxis::Undetermined;
        self.tracker.reset();
        self.tracker.add_sample(now_ms, 0.0);
    }

    /// Feeds one pointer-move delta. Returns the frictioned index-space
    /// scroll delta to apply, or `None` while the axis is undetermined or
    /// locked vertical.
    pub fn on_move(
        &mut self,
        dx: f32,
        dy: f32,
        now_ms: u64,
        current_pos: f32,
        count: usize,
        layout: &Layout,
    ) -> Option<f32> {
        if !self.active {
            return None;
        }

        self.total_dx += dx;
        self.total_dy += dy;
        self.tracker.add_sample(now_ms, self.total_dx);

        if self.axis == DragAxis::Undetermined
            && (self.total_dx.abs() > AXIS_LOCK_THRESHOLD
                || self.total_dy.abs() > AXIS_LOCK_THRESHOLD)
        {
            self.axis = if self.total_dx.abs() > self.total_dy.abs() {
                DragAxis::Horizontal
            } else {
                DragAxis::Vertical
            };
            strace!(axis = ?self.axis, "axis locked");
        }

        if self.axis != DragAxis::Horizontal {
            return None;
        }

        let max_index = geometry::max_scroll_index(count);
        let delta = -dx / layout.drag_spacing();

        // Rubber-band: responsive at first, progressively stiffer the
        // further past the edge. Applies only while pushing outward.
        let overscroll_amount = if current_pos < 0.0 {
            -current_pos
        } else if current_pos > max_index {
            current_pos - max_index
        } else {
            0.0
        };
        let is_overscrolling = (current_pos <= 0.0 && delta < 0.0)
            || (current_pos >= max_index && delta > 0.0);
        let edge_friction = if is_overscrolling {
            0.6 / (1.0 + overscroll_amount * 0.5)
        } else {
            1.0
        };

        Some(delta * BASE_FRICTION * edge_friction)
    }

    /// Finishes the gesture and computes the release outcome.
    pub fn end(&mut self, current_pos: f32, count: usize, layout: &Layout) -> DragRelease {
        let axis = self.axis;
        let velocity_x = self.tracker.velocity();
        self.active = false;

        if axis != DragAxis::Horizontal {
            return DragRelease::None;
        }

        let max_index = geometry::max_scroll_index(count);
        let velocity = -velocity_x / layout.drag_spacing();
        let projected = current_pos + velocity * FLING_PROJECTION_SECS;
        let target = (projected.round().clamp(0.0, max_index)) as usize;

        // A fling out of overscroll would fight the rubber-band snap-back;
        // settle from rest instead.
        let overscrolled = current_pos < 0.0 || current_pos > max_index;
        DragRelease::Fling {
            target,
            velocity: if overscrolled { 0.0 } else { velocity },
        }
    }

    /// Abandons the gesture with no release outcome; subsequent moves and
    /// releases of the same pointer are ignored. Used when the engine takes
    /// the scroll over mid-drag (animated dismiss).
    pub fn abort(&mut self) {
        self.active = false;
    }

    /// Cancels the gesture; the nearest valid index becomes the settle
    /// target (zero velocity).
    pub fn cancel(&mut self, current_pos: f32, count: usize) -> usize {
        self.active = false;
        let max_index = geometry::max_scroll_index(count);
        current_pos.round().clamp(0.0, max_index) as usize
    }
}

/// Hit-tests a tap against the card stack at `scroll_pos`, front-to-back
/// (highest index first; later entries render on top). First match wins.
pub fn hit_test(layout: &Layout, count: usize, scroll_pos: f32, x: f32, y: f32) -> Option<usize> {
    let total_height = layout.total_height();
    let top = layout.center_y() - total_height / 2.0;
    let bottom = top + total_height;
    if y < top || y > bottom {
        return None;
    }

    for index in (0..count).rev() {
        let cx = geometry::card_center_x(layout, count, index, scroll_pos);
        let half = layout.card_width() / 2.0;
        if x >= cx - half && x <= cx + half {
            return Some(index);
        }
    }
    None
}
