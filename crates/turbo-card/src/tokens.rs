//! Design tokens shared by card markup.

/// Color palette.
pub mod colors {
    pub const WHITE: &str = "hsl(0deg 0% 100%)";
    pub const GRAY_700: &str = "hsl(220deg 5% 40%)";
    pub const GRAY_900: &str = "hsl(220deg 3% 20%)";
    /// Accent for sale prices and the sale flag.
    pub const PRIMARY: &str = "hsl(340deg 65% 47%)";
    /// Accent for the new-release flag.
    pub const SECONDARY: &str = "hsl(240deg 60% 63%)";
}

/// Font weights.
pub mod weights {
    pub const NORMAL: u16 = 500;
    pub const MEDIUM: u16 = 600;
    pub const BOLDISH: u16 = 700;
}

/// Gap between the card image and its text rows, in pixels.
pub const IMAGE_SPACING_PX: u32 = 12;
