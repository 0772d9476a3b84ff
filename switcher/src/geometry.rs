//! Pure per-card geometry.
//!
//! Everything here is a stateless function of `(layout, count, index,
//! scroll_pos)`. Scroll position lives in card-index space: `3.0` means card
//! 3 is centered. The curve shapes are contracts:
//!
//! - left-stacked cards peek by a converging geometric series
//! - rightward neighbors spread by a super-linear power law (parallax)
//! - overscroll displacement is damped by `x/(1 + 0.8x)` and so never
//!   diverges, with per-card weights producing the elastic fan-out/compress

use crate::Layout;

/// Largest valid resting scroll position. 0 for an empty or single-entry
/// stack.
pub fn max_scroll_index(count: usize) -> f32 {
    count.saturating_sub(1) as f32
}

/// Scroll position clamped into the resting range `[0, count-1]`.
pub fn clamp_scroll(scroll_pos: f32, count: usize) -> f32 {
    scroll_pos.clamp(0.0, max_scroll_index(count))
}

/// Signed overscroll: negative past the left edge, positive past the right.
pub fn overscroll(scroll_pos: f32, count: usize) -> f32 {
    scroll_pos - clamp_scroll(scroll_pos, count)
}

/// A card's position relative to the (clamped) scroll center.
/// 0 = focused, negative = stacked left, positive = queued right.
pub fn rel_pos(index: usize, scroll_pos: f32, count: usize) -> f32 {
    index as f32 - clamp_scroll(scroll_pos, count)
}

/// Depth scale for a card at `rel` (see [`rel_pos`]).
///
/// Right cards are subtly larger than the focused card: 0.98 at focus,
/// ramping to 1.0. Left cards shrink with exponential decay toward a 0.96
/// floor. Both branches meet at 0.98, so the curve is continuous at focus.
pub fn depth_scale(rel: f32) -> f32 {
    const FOCUSED: f32 = 0.98;
    if rel >= 0.0 {
        (FOCUSED + (1.0 - FOCUSED) * rel).min(1.0)
    } else {
        const MIN_SCALE: f32 = 0.96;
        const DECAY: f32 = 0.50;
        MIN_SCALE + (FOCUSED - MIN_SCALE) * DECAY.powf(-rel)
    }
}

/// Horizontal center of card `index` at `scroll_pos`.
///
/// Left side (`rel <= 0`) offsets by the geometric series
/// `base_peek * (1 - decay^d) / (1 - decay)`, converging to
/// `base_peek / (1 - decay)`; stack depth never pushes peeks past that
/// bound. Right side spreads as `rel^1.2 * right_spacing` so neighbors
/// separate faster than 1:1. An elastic overscroll correction is applied on
/// top; cards farther from the dragged edge move less.
pub fn card_center_x(layout: &Layout, count: usize, index: usize, scroll_pos: f32) -> f32 {
    let over = overscroll(scroll_pos, count);
    let rel = rel_pos(index, scroll_pos, count);

    let base_x = if rel <= 0.0 {
        let d = -rel;
        let decay = layout.left_decay;
        let total_offset = layout.left_base_peek() * (1.0 - decay.powf(d)) / (1.0 - decay);
        layout.center_x() - total_offset
    } else {
        layout.center_x() + rel.powf(1.2) * layout.right_spacing()
    };

    // Hand-tuned per-card weights; the left and right edges intentionally
    // use different functional forms.
    let weight = if over < 0.0 {
        // Past the left edge: rightward cards move more, the edge card less.
        let d = rel.max(0.0);
        0.72 + 0.55 * (d / (d + 0.6))
    } else if over > 0.0 {
        // Past the right edge: the rightmost card moves most.
        let d = (-rel).max(0.0);
        0.65 / (d + 1.0)
    } else {
        0.0
    };

    let damped = over.abs() / (1.0 + over.abs() * 0.8);
    base_x - over.signum() * damped * layout.right_spacing() * weight
}

/// Z-axis "sink" applied while overscrolling past the right edge: cards
/// scale down by up to 15%, the rightmost (nearest-edge) card least.
/// Returns 1 otherwise.
pub fn overscroll_sink_scale(count: usize, index: usize, scroll_pos: f32) -> f32 {
    let over = overscroll(scroll_pos, count);
    if over <= 0.0 {
        return 1.0;
    }

    let rel = rel_pos(index, scroll_pos, count);
    let d = (-rel).max(0.0);
    let sink_weight = 0.3 + 0.7 * (d / (d + 0.8));
    let damped = over / (1.0 + over * 0.8);
    1.0 - damped * 0.15 * sink_weight
}

/// Whether the card is dropped from rendering entirely: center outside the
/// screen (with one card width of margin) or buried at `rel <= -3`.
pub fn is_culled(layout: &Layout, count: usize, index: usize, scroll_pos: f32) -> bool {
    let center = card_center_x(layout, count, index, scroll_pos);
    if center < -layout.card_width() || center > layout.screen_width + layout.card_width() {
        return true;
    }
    rel_pos(index, scroll_pos, count) <= -3.0
}

/// Fade-out ramp for deep left-stacked cards: fully visible down to
/// `rel = -2`, linear to 0 at `rel = -3`.
pub fn left_fade_alpha(rel: f32) -> f32 {
    if rel < -2.0 { (3.0 + rel).max(0.0) } else { 1.0 }
}

/// Title opacity: the triangular window `min(1 + rel, 2 - rel)` clamped to
/// `[0, 1]`. Fully visible only near focus; hidden both on far-left stacked
/// cards and right-queued cards beyond distance 2.
pub fn title_alpha(rel: f32) -> f32 {
    (1.0 + rel).min(2.0 - rel).clamp(0.0, 1.0)
}

/// Title blur radius: 0 at full title opacity, ramping linearly to 10 units
/// as the title fades through 0.5.
pub fn title_blur_radius(rel: f32) -> f32 {
    (1.0 - title_alpha(rel)).min(0.5) * 2.0 * 10.0
}

/// Depth shadow on left-stacked cards: `0.25` per card of depth, capped at
/// `0.50`. Zero for the focused card and everything to its right.
pub fn dark_overlay_alpha(rel: f32) -> f32 {
    if rel < 0.0 {
        ((-rel) * 0.25).min(0.50)
    } else {
        0.0
    }
}
