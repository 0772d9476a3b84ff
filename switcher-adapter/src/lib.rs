//! Adapter utilities for the `switcher` crate.
//!
//! The `switcher` crate is UI-agnostic and focuses on gesture physics and
//! transition state. This crate provides the collaborator-side pieces a real
//! host needs around it:
//!
//! - A concurrent screenshot cache (background capture workers write,
//!   the render thread reads; a miss is a normal state, not an error)
//! - Screenshot-key derivation that keeps duplicate routes distinct
//! - A `Controller` that owns the back stack, keeps the engine's count in
//!   sync, and resolves the per-frame visual model into renderable cards
//!
//! This crate is intentionally framework-agnostic (no winit/egui bindings);
//! the image type is a generic parameter, typically some `Arc`-backed
//! bitmap handle.
#![forbid(unsafe_code)]

mod cache;
mod controller;
mod key;


pub use cache::ScreenshotCache;
pub use controller::{Controller, RenderCard, RenderFrame, RenderOverlay};
pub use key::screenshot_key;
