/// One back-stack slot.
///
/// `id` is unique per slot, so two entries sharing a `route_key` (the same
/// page pushed twice) still get distinct screenshot keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub id: u64,
    pub route_key: String,
}

impl Entry {
    pub fn new(id: u64, route_key: impl Into<String>) -> Self {
        Self {
            id,
            route_key: route_key.into(),
        }
    }
}

/// Which axis a drag gesture has locked onto.
///
/// The axis locks to the dominant direction once accumulated displacement
/// exceeds the lock threshold, and stays locked for the rest of the gesture.
/// Vertical-locked drags never affect the carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragAxis {
    #[default]
    Undetermined,
    Horizontal,
    Vertical,
}

/// Why a settle animation was started. Determines what happens when it lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SettleKind {
    /// Release fling; completion reports a selection change.
    Fling,
    /// Re-centering on the last entry ahead of an armed expand-out.
    Recenter,
    /// Gesture cancellation; nothing to report on completion.
    Cancel,
}

/// The card↔fullscreen transition state machine.
///
/// `Hidden` and `Stack` are the only states in which normal card rendering is
/// the source of truth; during `ShrinkIn`/`ExpandOut` the overlay geometry
/// supersedes one card. Gestures and taps are accepted only in `Stack`.
///
/// `progress` is the unified overlay progress: 0 = card bounds, 1 = fullscreen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionState {
    #[default]
    Hidden,
    /// Opening: the focused page shrinks from fullscreen into its card slot.
    ShrinkIn { progress: f32 },
    Stack,
    /// Closing: one card expands out to fullscreen.
    ExpandOut { progress: f32, target: usize },
}

impl TransitionState {
    /// Overlay progress (0 = card, 1 = fullscreen); 0 outside a transition.
    pub fn overlay_progress(&self) -> f32 {
        match *self {
            Self::ShrinkIn { progress } | Self::ExpandOut { progress, .. } => progress,
            Self::Hidden | Self::Stack => 0.0,
        }
    }

    pub fn in_flight(&self) -> bool {
        matches!(self, Self::ShrinkIn { .. } | Self::ExpandOut { .. })
    }
}

/// Per-card render instruction, recomputed every frame. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardVisual {
    pub index: usize,
    pub center_x: f32,
    pub center_y: f32,
    pub scale: f32,
    pub alpha: f32,
    pub title_alpha: f32,
    pub title_blur_radius: f32,
    pub dark_overlay_alpha: f32,
    pub z_index: usize,
}

/// The single transitioning card, interpolated between card bounds and the
/// full viewport. Present only during `ShrinkIn`/`ExpandOut`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayVisual {
    pub index: usize,
    pub center_x: f32,
    pub center_y: f32,
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
}

/// Everything the renderer needs for one frame.
///
/// `cards` contains only non-culled entries, sorted by ascending `z_index`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameVisuals {
    pub cards: Vec<CardVisual>,
    pub overlay: Option<OverlayVisual>,
    pub scrim_alpha: f32,
}
