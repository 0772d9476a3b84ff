/// Viewport-derived layout constants for the carousel.
///
/// Everything the geometry engine needs is carried explicitly here; nothing
/// is read from ambient context (density, window metrics). Units are
/// whatever the host renders in (pixels, points) as long as they are
/// consistent with the pointer coordinates fed to the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Card width as a fraction of screen width.
    pub card_width_factor: f32,
    /// Height of the title strip rendered above each card.
    pub title_height: f32,
    /// Card corner radius at rest (interpolates to 0 at fullscreen).
    pub corner_radius: f32,
    /// Visible strip of the first left-stacked card, fraction of card width.
    pub left_base_peek_factor: f32,
    /// Geometric decay of successive left peeks. Fast convergence: only
    /// about two left cards remain visibly distinct.
    pub left_decay: f32,
    /// Spacing of rightward neighbors, fraction of card width.
    pub right_spacing_factor: f32,
    /// Drag sensitivity: this many pixels of drag scrolls one card.
    pub drag_spacing_factor: f32,
}

impl Layout {
    /// Creates a layout for the given viewport with the stock tuning.
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
            card_width_factor: 0.66,
            title_height: 32.0,
            corner_radius: 30.0,
            left_base_peek_factor: 0.22,
            left_decay: 0.28,
            right_spacing_factor: 0.85,
            drag_spacing_factor: 0.60,
        }
    }

    pub fn with_card_width_factor(mut self, factor: f32) -> Self {
        self.card_width_factor = factor;
        self
    }

    pub fn with_title_height(mut self, title_height: f32) -> Self {
        self.title_height = title_height;
        self
    }

    pub fn with_corner_radius(mut self, corner_radius: f32) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn with_left_peek(mut self, base_peek_factor: f32, decay: f32) -> Self {
        self.left_base_peek_factor = base_peek_factor;
        self.left_decay = decay;
        self
    }

    pub fn with_right_spacing_factor(mut self, factor: f32) -> Self {
        self.right_spacing_factor = factor;
        self
    }

    pub fn with_drag_spacing_factor(mut self, factor: f32) -> Self {
        self.drag_spacing_factor = factor;
        self
    }

    pub fn card_width(&self) -> f32 {
        self.screen_width * self.card_width_factor
    }

    /// Cards keep the screen's aspect ratio.
    pub fn card_height(&self) -> f32 {
        self.card_width() * (self.screen_height / self.screen_width)
    }

    /// Card plus the title strip above it.
    pub fn total_height(&self) -> f32 {
        self.card_height() + self.title_height
    }

    pub fn center_x(&self) -> f32 {
        self.screen_width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.screen_height / 2.0
    }

    pub fn left_base_peek(&self) -> f32 {
        self.card_width() * self.left_base_peek_factor
    }

    pub fn right_spacing(&self) -> f32 {
        self.card_width() * self.right_spacing_factor
    }

    pub fn drag_spacing(&self) -> f32 {
        self.card_width() * self.drag_spacing_factor
    }

    /// Center of the card body (the title strip sits above, so the card
    /// itself is pushed down by half the strip).
    pub fn card_center_y(&self) -> f32 {
        self.center_y() + self.title_height / 2.0
    }
}
