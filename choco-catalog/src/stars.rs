//! Five-glyph star rows used by the rating displays.

pub const FULL_GLYPH: char = '★';
/// The storefront draws half stars with the hollow glyph; markup tells them
/// apart by class.
pub const HALF_GLYPH: char = '☆';
pub const EMPTY_GLYPH: char = '☆';

/// Split of a five-star row into full, half and empty glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRow {
    pub full: u8,
    pub half: u8,
    pub empty: u8,
}

impl StarRow {
    pub const TOTAL: u8 = 5;

    /// Star row for a fractional rating.
    ///
    /// `full = floor(rating)`, one half glyph when the fractional part is at
    /// least 0.5, the rest empty. Ratings outside `0..=5` are clamped.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_finite() {
            rating.clamp(0.0, f64::from(Self::TOTAL))
        } else {
            0.0
        };
        let whole = rating.floor();
        let full = whole as u8;
        let half = u8::from(rating - whole >= 0.5 && full < Self::TOTAL);
        Self {
            full,
            half,
            empty: Self::TOTAL - full - half,
        }
    }

    /// Row shown in the detail overlay.
    #[must_use]
    pub const fn perfect() -> Self {
        Self {
            full: Self::TOTAL,
            half: 0,
            empty: 0,
        }
    }

    /// Plain glyph rendering of the row.
    #[must_use]
    pub fn glyphs(&self) -> String {
        let mut out = String::with_capacity(usize::from(Self::TOTAL) * 3);
        out.extend(std::iter::repeat_n(FULL_GLYPH, usize::from(self.full)));
        out.extend(std::iter::repeat_n(HALF_GLYPH, usize::from(self.half)));
        out.extend(std::iter::repeat_n(EMPTY_GLYPH, usize::from(self.empty)));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(rating: f64) -> (u8, u8, u8) {
        let row = StarRow::from_rating(rating);
        (row.full, row.half, row.empty)
    }

    #[test]
    fn fractional_part_decides_half_glyph() {
        assert_eq!(split(4.7), (4, 1, 0));
        assert_eq!(split(4.2), (4, 0, 1));
        assert_eq!(split(4.0), (4, 0, 1));
        assert_eq!(split(4.5), (4, 1, 0));
        assert_eq!(split(4.49), (4, 0, 1));
        assert_eq!(split(5.0), (5, 0, 0));
    }

    #[test]
    fn rows_always_have_five_glyphs() {
        for tenth in -20..=70 {
            let row = StarRow::from_rating(f64::from(tenth) / 10.0);
            assert_eq!(row.full + row.half + row.empty, StarRow::TOTAL, "rating {tenth}/10");
            assert_eq!(row.glyphs().chars().count(), 5);
        }
        let nan = StarRow::from_rating(f64::NAN);
        assert_eq!((nan.full, nan.half, nan.empty), (0, 0, 5));
    }

    #[test]
    fn out_of_range_ratings_clamp() {
        assert_eq!(StarRow::from_rating(9.0), StarRow::perfect());
        assert_eq!(StarRow::from_rating(4.0).glyphs(), "★★★★☆");
        assert_eq!(StarRow::perfect().glyphs(), "★★★★★");
    }
}
