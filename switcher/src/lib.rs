//! A headless iOS-style app-switcher carousel engine.
//!
//! For collaborator-side utilities (screenshot cache, back-stack wiring),
//! see the `switcher-adapter` crate.
//!
//! This crate focuses on the hard part of an app switcher: the continuous
//! scroll-position model, the per-card geometry curves (depth scaling,
//! asymmetric spacing, elastic overscroll, fade/blur), drag/fling/spring
//! physics, and the finite-state card↔fullscreen transition controller.
//!
//! It is UI-agnostic. A rendering layer is expected to provide:
//! - viewport dimensions (via [`Layout`])
//! - raw pointer events and a per-frame `tick(now_ms)`
//! - drawing of the [`CardVisual`]/[`OverlayVisual`] model it gets back
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod engine;
pub mod geometry;
mod gesture;
mod layout;
mod options;
mod scroll;
mod spring;
mod transition;
mod tween;
mod types;
mod velocity;

#[cfg(test)]
mod tests;

pub use engine::Switcher;
pub use gesture::{hit_test, DragRelease, GestureController};
pub use layout::Layout;
pub use options::{DismissCallback, IndexCallback, SwitcherOptions};
pub use scroll::ScrollModel;
pub use spring::{Spring, STIFFNESS_FLING, STIFFNESS_LOW, STIFFNESS_MEDIUM};
pub use transition::{TransitionController, TransitionEvent, LINGER_MS, TRANSITION_MS};
pub use tween::{CubicBezier, Easing, Tween};
pub use types::{
    CardVisual, DragAxis, Entry, FrameVisuals, OverlayVisual, SettleKind, TransitionState,
};
pub use velocity::VelocityTracker;
