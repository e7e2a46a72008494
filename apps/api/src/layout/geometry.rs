//! Physical page geometry shared by the measurer and the presenter.
//!
//! Both sides read width and budget from the same `PageGeometry` value so that
//! off-screen heights match the sheets the presenter emits.

use serde::{Deserialize, Serialize};

/// CSS reference resolution used for all pixel values.
pub const CSS_DPI: f32 = 96.0;
const MM_PER_INCH: f32 = 25.4;

pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

/// Content height budget for an A4 sheet: the full page (1123px) minus
/// bottom slack for the blocks' own trailing margins.
pub const DEFAULT_CONTENT_HEIGHT_PX: f32 = 1050.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    /// Maximum cumulative block height per page.
    pub content_height_px: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4(DEFAULT_CONTENT_HEIGHT_PX)
    }
}

impl PageGeometry {
    pub fn a4(content_height_px: f32) -> Self {
        Self {
            width_mm: A4_WIDTH_MM,
            height_mm: A4_HEIGHT_MM,
            content_height_px,
        }
    }

    /// Page width in CSS pixels; blocks are laid out edge to edge across it.
    pub fn width_px(&self) -> f32 {
        mm_to_px(self.width_mm)
    }

    pub fn height_px(&self) -> f32 {
        mm_to_px(self.height_mm)
    }
}

pub fn mm_to_px(mm: f32) -> f32 {
    (mm / MM_PER_INCH * CSS_DPI).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_pixel_dimensions() {
        let geometry = PageGeometry::default();
        assert_eq!(geometry.width_px(), 794.0);
        assert_eq!(geometry.height_px(), 1123.0);
        assert_eq!(geometry.content_height_px, 1050.0);
    }

    #[test]
    fn test_budget_fits_inside_page() {
        let geometry = PageGeometry::default();
        assert!(geometry.content_height_px < geometry.height_px());
    }
}
