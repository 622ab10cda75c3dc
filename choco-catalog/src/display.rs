use rand::Rng;

use crate::stars::StarRow;

/// Longest description excerpt shown on a trending card, in characters.
pub const EXCERPT_CHARS: usize = 100;
pub const DEFAULT_REVIEW: &str = "Great comic!";
pub const DEFAULT_DESCRIPTION: &str = "Description coming soon...";

/// Display-only popularity figures rolled for each trending card
///
/// Never stored on the entry; every render rolls a fresh pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendingStats {
    /// In `4.0..=5.0`, one decimal place.
    pub rating: f64,
    /// In `5_000..55_000`.
    pub likes: u32,
}

impl TrendingStats {
    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        let raw: f64 = rng.gen_range(4.0..5.0);
        Self {
            rating: (raw * 10.0).round() / 10.0,
            likes: rng.gen_range(5_000..55_000),
        }
    }

    #[must_use]
    pub fn stars(&self) -> StarRow {
        StarRow::from_rating(self.rating)
    }

    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }

    #[must_use]
    pub fn likes_label(&self) -> String {
        format!("{} likes", format_thousands(u64::from(self.likes)))
    }
}

/// Quote-ready review excerpt for a trending card.
#[must_use]
pub fn review_excerpt(description: Option<&str>) -> String {
    let Some(text) = description.filter(|text| !text.is_empty()) else {
        return DEFAULT_REVIEW.to_string();
    };
    match text.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// `12345` -> `"12,345"`
#[must_use]
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
