use crate::spring::Spring;
use crate::types::SettleKind;

/// The authoritative continuous scroll position, in card-index space.
///
/// Two values back it: the gesture-driven drag value and the animated
/// (spring) value. Exactly one is authoritative at a time (the drag value
/// while a drag is active, the animated value otherwise), and every source
/// switch snapshots the newly authoritative value from the old one, so the
/// position never jumps.
#[derive(Clone, Debug, Default)]
pub struct ScrollModel {
    drag_pos: f32,
    anim_pos: f32,
    dragging: bool,
    settle: Option<Settle>,
}

#[derive(Clone, Debug)]
struct Settle {
    spring: Spring,
    target: usize,
    kind: SettleKind,
}

impl ScrollModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> f32 {
        if self.dragging {
            self.drag_pos
        } else {
            self.anim_pos
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    /// Sets the animated value with no animation and cancels any settle.
    pub fn snap_to(&mut self, value: f32) {
        self.settle = None;
        self.dragging = false;
        self.anim_pos = value;
        self.drag_pos = value;
    }

    /// Enters drag mode, snapshotting the animated value into the drag
    /// value. Cancels any outstanding settle.
    pub fn begin_drag(&mut self) {
        self.settle = None;
        self.drag_pos = self.anim_pos;
        self.dragging = true;
    }

    /// Moves the drag value. The caller supplies the delta already converted
    /// to index space and frictioned.
    pub fn drag_by(&mut self, delta: f32) {
        if self.dragging {
            self.drag_pos += delta;
        }
    }

    /// Leaves drag mode without launching a settle (vertical or
    /// never-locked drags). The animated value picks up where the drag was.
    pub fn end_drag(&mut self) {
        if self.dragging {
            self.anim_pos = self.drag_pos;
            self.dragging = false;
        }
    }

    /// Starts a cancellable spring toward an integer target. Replaces any
    /// outstanding settle; continues from the currently authoritative value.
    pub fn settle_to(
        &mut self,
        target: usize,
        initial_velocity: f32,
        stiffness: f32,
        kind: SettleKind,
    ) {
        let from = self.current();
        self.dragging = false;
        self.anim_pos = from;
        strace!(from, target, initial_velocity, stiffness, "settle_to");
        self.settle = Some(Settle {
            spring: Spring::new(from, target as f32)
                .with_stiffness(stiffness)
                .with_initial_velocity(initial_velocity),
            target,
            kind,
        });
    }

    pub fn cancel_settle(&mut self) {
        self.settle = None;
    }

    pub fn settle_target(&self) -> Option<usize> {
        self.settle.as_ref().map(|s| s.target)
    }

    /// Clamps both values into `[0, count-1]` (applied when the back stack
    /// shrinks under the engine). A settle aimed past the new range is
    /// retargeted at the new last index rather than dropped, so whatever
    /// rides on its completion still fires.
    pub fn clamp_into(&mut self, count: usize) {
        let max = count.saturating_sub(1);
        let max_pos = max as f32;
        self.anim_pos = self.anim_pos.clamp(0.0, max_pos);
        self.drag_pos = self.drag_pos.clamp(0.0, max_pos);
        if let Some(s) = &mut self.settle {
            if s.target > max {
                s.target = max;
                s.spring.retarget(max_pos);
            }
        }
    }

    /// Advances an active settle by `dt` seconds. On completion the
    /// animated value lands exactly on the integer target.
    pub fn tick(&mut self, dt: f32) -> Option<(usize, SettleKind)> {
        let settle = self.settle.as_mut()?;
        settle.spring.advance(dt);
        self.anim_pos = settle.spring.position();

        if settle.spring.is_at_rest() {
            let target = settle.target;
            let kind = settle.kind;
            self.anim_pos = target as f32;
            self.drag_pos = self.anim_pos;
            self.settle = None;
            sdebug!(target, "settle complete");
            return Some((target, kind));
        }
        None
    }
}
