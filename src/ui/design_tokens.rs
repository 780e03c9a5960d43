// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every view: colors, spacing, sizes, type scale,
//! borders, radii and shadows.
//!
//! ```
//! use bant_media::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let scrim = Color {
//!     a: opacity::OVERLAY_STRONG,
//!     ..palette::BLACK
//! };
//! let padding = spacing::MD;
//! # let _ = (scrim, padding);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.07, 0.09, 0.15);
    pub const GRAY_800: Color = Color::from_rgb(0.12, 0.16, 0.22);
    pub const GRAY_700: Color = Color::from_rgb(0.22, 0.25, 0.32);
    pub const GRAY_600: Color = Color::from_rgb(0.29, 0.33, 0.39);
    pub const GRAY_400: Color = Color::from_rgb(0.61, 0.64, 0.69);
    pub const GRAY_300: Color = Color::from_rgb(0.82, 0.84, 0.86);

    // Brand colors
    pub const PRIMARY_400: Color = Color::from_rgb(0.38, 0.65, 0.98);
    pub const PRIMARY_500: Color = Color::from_rgb(0.23, 0.51, 0.96);
    pub const PRIMARY_600: Color = Color::from_rgb(0.15, 0.39, 0.92);
    pub const PRIMARY_700: Color = Color::from_rgb(0.11, 0.31, 0.85);
    pub const ACCENT_500: Color = Color::from_rgb(0.66, 0.33, 0.97);

    // Semantic colors
    pub const ERROR_300: Color = Color::from_rgb(0.99, 0.65, 0.65);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const ERROR_800: Color = Color::from_rgb(0.6, 0.11, 0.11);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const SUCCESS_600: Color = Color::from_rgb(0.09, 0.64, 0.29);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const TINT: f32 = 0.1;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.6;
    pub const OPAQUE: f32 = 1.0;

    /// Frosted panels (upload section, empty state).
    pub const SURFACE: f32 = 0.5;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;
    pub const ICON_XXL: f32 = 64.0;

    /// Width of a gallery card.
    pub const CARD_WIDTH: f32 = 280.0;
    /// Height of the card image area, keeping the 720x480 aspect ratio.
    pub const CARD_IMAGE_HEIGHT: f32 = CARD_WIDTH * 480.0 / 720.0;

    /// Maximum width of the drop zone.
    pub const DROP_ZONE_WIDTH: f32 = 672.0;
    /// Maximum width of the page content.
    pub const CONTENT_MAX_WIDTH: f32 = 1280.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Window heading
    pub const DISPLAY: f32 = 36.0;

    /// Section headings (upload, empty state)
    pub const TITLE_LG: f32 = 24.0;

    /// Gallery header
    pub const TITLE_MD: f32 = 20.0;

    /// Prominent body text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body
    pub const BODY: f32 = 14.0;

    /// Hints, card captions, count badge
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::CARD_IMAGE_HEIGHT < sizing::CARD_WIDTH);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
