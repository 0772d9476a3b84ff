//! The card↔fullscreen transition state machine.
//!
//! Cycles `Hidden → ShrinkIn → Stack → ExpandOut → Hidden`. Progress is a
//! 400 ms eased tween; while any transition is in flight the engine ignores
//! gesture input. A select-and-expand keeps the fullscreen overlay up for an
//! extra linger after completing, covering the host's own content swap.

use crate::tween::{Easing, Tween};
use crate::types::TransitionState;

/// Duration of the shrink-in and expand-out progress animations.
pub const TRANSITION_MS: u64 = 400;

/// How long the fullscreen overlay lingers after a select-and-expand before
/// the dismissal callback fires.
pub const LINGER_MS: u64 = 400;

/// Emitted by [`TransitionController::tick`], at most one per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionEvent {
    /// Shrink-in finished; the stack is now interactive.
    ShrinkDone,
    /// Expand-out finished. `selected` distinguishes a card tap (host gets
    /// the card-click first, dismissal after the linger) from a plain
    /// dismiss (dismissal fires immediately).
    ExpandDone { target: usize, selected: bool },
    /// The post-select linger elapsed; time to notify dismissal.
    LingerDone,
}

/// An expand-out waiting on a re-centering scroll settle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArmedExpand {
    pub target: usize,
    pub selected: bool,
}

#[derive(Clone, Debug, Default)]
pub struct TransitionController {
    state: TransitionState,
    tween: Option<Tween>,
    armed: Option<ArmedExpand>,
    selecting: bool,
    linger_until: Option<u64>,
}

impl TransitionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// True during ShrinkIn and ExpandOut (including the post-select
    /// linger). Gestures and further show/dismiss commands are ignored
    /// while this holds.
    pub fn in_flight(&self) -> bool {
        self.state.in_flight()
    }

    pub fn is_stack(&self) -> bool {
        self.state == TransitionState::Stack
    }

    pub fn is_hidden(&self) -> bool {
        self.state == TransitionState::Hidden
    }

    /// Starts the opening transition: fullscreen shrinking into the card
    /// slot, progress 1 → 0.
    pub fn begin_show(&mut self, now_ms: u64) {
        sdebug!(now_ms, "begin_show");
        self.state = TransitionState::ShrinkIn { progress: 1.0 };
        self.tween = Some(Tween::new(1.0, 0.0, now_ms, TRANSITION_MS, Easing::overlay()));
        self.armed = None;
        self.selecting = false;
        self.linger_until = None;
    }

    /// Starts the closing transition: card expanding to fullscreen,
    /// progress 0 → 1.
    pub fn begin_expand(&mut self, target: usize, selected: bool, now_ms: u64) {
        sdebug!(target, selected, now_ms, "begin_expand");
        self.state = TransitionState::ExpandOut {
            progress: 0.0,
            target,
        };
        self.tween = Some(Tween::new(0.0, 1.0, now_ms, TRANSITION_MS, Easing::overlay()));
        self.selecting = selected;
        self.linger_until = None;
    }

    /// Records an expand-out to start once a re-centering settle lands.
    pub fn arm_expand(&mut self, target: usize, selected: bool) {
        self.armed = Some(ArmedExpand { target, selected });
    }

    pub fn take_armed(&mut self) -> Option<ArmedExpand> {
        self.armed.take()
    }

    pub fn has_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Clamps in-flight and armed expand targets to `max_index` after the
    /// back stack shrank, so completion never reports a gone index.
    pub fn clamp_targets(&mut self, max_index: usize) {
        if let TransitionState::ExpandOut { target, .. } = &mut self.state {
            *target = (*target).min(max_index);
        }
        if let Some(armed) = &mut self.armed {
            armed.target = armed.target.min(max_index);
        }
    }

    /// Drops all transition state back to `Hidden` (external reset).
    pub fn hide(&mut self) {
        self.state = TransitionState::Hidden;
        self.tween = None;
        self.armed = None;
        self.selecting = false;
        self.linger_until = None;
    }

    pub fn tick(&mut self, now_ms: u64) -> Option<TransitionEvent> {
        if let Some(tween) = self.tween {
            let progress = tween.sample(now_ms);
            match &mut self.state {
                TransitionState::ShrinkIn { progress: p }
                | TransitionState::ExpandOut { progress: p, .. } => *p = progress,
                _ => {}
            }

            if tween.is_done(now_ms) {
                self.tween = None;
                match self.state {
                    TransitionState::ShrinkIn { .. } => {
                        self.state = TransitionState::Stack;
                        return Some(TransitionEvent::ShrinkDone);
                    }
                    TransitionState::ExpandOut { target, .. } => {
                        if self.selecting {
                            // Overlay stays at fullscreen while the host
                            // swaps content underneath.
                            self.linger_until = Some(now_ms + LINGER_MS);
                            return Some(TransitionEvent::ExpandDone {
                                target,
                                selected: true,
                            });
                        }
                        self.state = TransitionState::Hidden;
                        return Some(TransitionEvent::ExpandDone {
                            target,
                            selected: false,
                        });
                    }
                    _ => {}
                }
            }
            return None;
        }

        if let Some(deadline) = self.linger_until {
            if now_ms >= deadline {
                self.linger_until = None;
                self.selecting = false;
                self.state = TransitionState::Hidden;
                return Some(TransitionEvent::LingerDone);
            }
        }
        None
    }
}
