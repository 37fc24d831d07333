//! Page layout calculations
//!
//! The test sheet uses a fixed geometry on an A4 portrait page. All drawing
//! coordinates are in PDF points (1/72 inch) with the origin at the bottom
//! left of the page.

/// Simple length type in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length(pub f64);

impl Length {
    /// Create a length from millimeters
    pub fn from_mm(mm: f64) -> Self {
        Length(mm)
    }

    /// Get the value in millimeters
    pub fn mm(&self) -> f64 {
        self.0
    }

    /// Get the value in points (1/72 inch)
    pub fn pt(&self) -> f64 {
        self.0 * 72.0 / 25.4
    }
}

/// Page dimensions
#[derive(Debug, Clone, Copy)]
pub struct PageSize {
    pub width: Length,
    pub height: Length,
}

impl PageSize {
    /// A4 size (210mm × 297mm), portrait
    pub fn a4() -> Self {
        Self {
            width: Length::from_mm(210.0),
            height: Length::from_mm(297.0),
        }
    }
}

/// Swatch rectangle width in points
pub const SWATCH_WIDTH: f64 = 150.0;

/// Swatch rectangle height in points
pub const SWATCH_HEIGHT: f64 = 100.0;

/// Left margin of the swatch column in points
pub const SWATCH_MARGIN: f64 = 70.0;

/// Vertical gap between consecutive swatches in points
pub const SWATCH_SPACING: f64 = 40.0;

/// Gap between a swatch and its label in points
pub const LABEL_GAP: f64 = 20.0;

/// Distance from the page top to the top edge of the first swatch
pub const SWATCH_TOP_OFFSET: f64 = 150.0;

/// Distance from the page top to the title baseline
pub const TITLE_OFFSET: f64 = 50.0;

/// Distance from the page top to the timestamp baseline
pub const TIMESTAMP_OFFSET: f64 = 80.0;

/// Top edge of the `index`-th swatch (0-indexed, top to bottom)
pub fn swatch_top(page_height: f64, index: usize) -> f64 {
    page_height - SWATCH_TOP_OFFSET - index as f64 * (SWATCH_HEIGHT + SWATCH_SPACING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversions() {
        let len = Length::from_mm(25.4);
        assert!((len.mm() - 25.4).abs() < 0.01);
        assert!((len.pt() - 72.0).abs() < 0.01);
    }

    #[test]
    fn test_a4_size_in_points() {
        let a4 = PageSize::a4();
        // 210 mm = 595.2756 pt
        assert!((a4.width.pt() - 595.2756).abs() < 0.001);
        // 297 mm = 841.8898 pt
        assert!((a4.height.pt() - 841.8898).abs() < 0.001);
    }

    #[test]
    fn test_swatch_tops_stack_downward() {
        let height = PageSize::a4().height.pt();

        assert!((swatch_top(height, 0) - (height - 150.0)).abs() < 1e-9);
        assert!((swatch_top(height, 1) - (height - 290.0)).abs() < 1e-9);
        assert!((swatch_top(height, 2) - (height - 430.0)).abs() < 1e-9);
        assert!((swatch_top(height, 3) - (height - 570.0)).abs() < 1e-9);
    }

    #[test]
    fn test_last_swatch_stays_on_page() {
        let height = PageSize::a4().height.pt();
        let bottom = swatch_top(height, 3) - SWATCH_HEIGHT;
        assert!(bottom > 0.0, "fourth swatch must not run off the page");
    }
}
