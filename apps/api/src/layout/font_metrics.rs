//! Static font-metric tables for the three template typefaces.
//!
//! Widths are in em units (relative to font size). The tables stand in for the
//! browser's text shaper when measuring blocks off-screen: greedy word wrap over
//! these widths gives line counts that match the rendered page to within a word
//! on borderline lines, which the page budget's bottom slack absorbs.
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

/// Width multiplier applied to bold runs.
const BOLD_WIDTH_FACTOR: f32 = 1.06;

// ────────────────────────────────────────────────────────────────────────────
// Font family enum
// ────────────────────────────────────────────────────────────────────────────

/// Typefaces used by the résumé templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    /// Minimal template — old-style serif.
    EbGaramond,
    /// Modern template — humanist sans-serif.
    Lato,
    /// Professional template — neutral UI sans-serif.
    Inter,
}

impl FontFamily {
    /// CSS `font-family` stack emitted by the presenter for this face.
    pub fn css_stack(&self) -> &'static str {
        match self {
            FontFamily::EbGaramond => "'EB Garamond', Georgia, 'Times New Roman', serif",
            FontFamily::Lato => "Lato, 'Helvetica Neue', Arial, sans-serif",
            FontFamily::Inter => "Inter, 'Segoe UI', Roboto, sans-serif",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a font family.
///
/// `widths[i]` = width of ASCII character `(i + 32)` at 1em.
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    ///
    /// Non-ASCII characters fall back to `average_char_width`.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Number of lines `text` occupies when greedily word-wrapped at `max_width_em`.
    ///
    /// A word wider than the line is never broken; it takes a line of its own and
    /// overflows horizontally, as the browser does. Empty text occupies zero lines.
    pub fn wrapped_lines(&self, text: &str, max_width_em: f32, bold: bool) -> u16 {
        let factor = if bold { BOLD_WIDTH_FACTOR } else { 1.0 };
        let mut line_count = 0u16;
        let mut current_width = 0.0_f32;

        for word in text.split_whitespace() {
            let word_w = self.measure_str(word) * factor;
            if line_count == 0 {
                line_count = 1;
                current_width = word_w;
                continue;
            }
            let space_w = self.space_width * factor;
            if current_width + space_w + word_w > max_width_em {
                line_count = line_count.saturating_add(1);
                current_width = word_w;
            } else {
                current_width += space_w + word_w;
            }
        }
        line_count
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

static EB_GARAMOND_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.21, 0.26, 0.32, 0.48, 0.48, 0.76, 0.57, 0.19, 0.28, 0.28, 0.33, 0.50, 0.24, 0.28, 0.24, 0.26,
        // 0     1     2     3     4     5     6     7     8     9
        0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48,
        // :     ;     <     =     >     ?     @
        0.24, 0.24, 0.50, 0.50, 0.50, 0.43, 0.87,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.57, 0.52, 0.52, 0.57, 0.48, 0.43, 0.57, 0.57, 0.21, 0.33, 0.52, 0.45, 0.66,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.57, 0.61, 0.48, 0.61, 0.52, 0.43, 0.48, 0.57, 0.57, 0.76, 0.52, 0.52, 0.48,
        // [     \     ]     ^     _     `
        0.24, 0.26, 0.24, 0.40, 0.48, 0.29,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.48, 0.48, 0.43, 0.48, 0.48, 0.26, 0.48, 0.48, 0.19, 0.19, 0.45, 0.19, 0.71,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.48, 0.48, 0.48, 0.48, 0.28, 0.37, 0.33, 0.48, 0.43, 0.61, 0.43, 0.43, 0.37,
        // {     |     }     ~
        0.28, 0.22, 0.28, 0.50,
    ],
    average_char_width: 0.44,
    space_width: 0.21,
};

static LATO_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.26, 0.32, 0.40, 0.59, 0.59, 0.94, 0.70, 0.23, 0.35, 0.35, 0.41, 0.62, 0.29, 0.35, 0.29, 0.33,
        // 0     1     2     3     4     5     6     7     8     9
        0.59, 0.59, 0.59, 0.59, 0.59, 0.59, 0.59, 0.59, 0.59, 0.59,
        // :     ;     <     =     >     ?     @
        0.29, 0.29, 0.62, 0.62, 0.62, 0.53, 1.07,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.70, 0.64, 0.64, 0.70, 0.59, 0.53, 0.70, 0.70, 0.26, 0.41, 0.64, 0.56, 0.82,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.70, 0.76, 0.59, 0.76, 0.64, 0.53, 0.59, 0.70, 0.70, 0.94, 0.64, 0.64, 0.59,
        // [     \     ]     ^     _     `
        0.29, 0.33, 0.29, 0.49, 0.59, 0.36,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.59, 0.59, 0.53, 0.59, 0.59, 0.33, 0.59, 0.59, 0.23, 0.23, 0.56, 0.23, 0.87,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.59, 0.59, 0.59, 0.59, 0.35, 0.46, 0.41, 0.59, 0.53, 0.76, 0.53, 0.53, 0.46,
        // {     |     }     ~
        0.35, 0.27, 0.35, 0.62,
    ],
    average_char_width: 0.55,
    space_width: 0.26,
};

static INTER_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
        // 0     1     2     3     4     5     6     7     8     9
        0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
        // [     \     ]     ^     _     `
        0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
        // {     |     }     ~
        0.33, 0.26, 0.33, 0.59,
    ],
    average_char_width: 0.52,
    space_width: 0.25,
};

/// Returns the static metric table for a given font family.
pub fn get_metrics(font: FontFamily) -> &'static FontMetricTable {
    match font {
        FontFamily::EbGaramond => &EB_GARAMOND_TABLE,
        FontFamily::Lato => &LATO_TABLE,
        FontFamily::Inter => &INTER_TABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(get_metrics(FontFamily::Inter).measure_str(""), 0.0);
    }

    #[test]
    fn test_non_ascii_uses_average_width() {
        let metrics = get_metrics(FontFamily::Lato);
        assert!((metrics.measure_str("é") - metrics.average_char_width).abs() < 1e-6);
    }

    #[test]
    fn test_wrapped_lines_empty_is_zero() {
        let metrics = get_metrics(FontFamily::Inter);
        assert_eq!(metrics.wrapped_lines("", 40.0, false), 0);
        assert_eq!(metrics.wrapped_lines("   \n ", 40.0, false), 0);
    }

    #[test]
    fn test_wrapped_lines_short_text_is_one_line() {
        let metrics = get_metrics(FontFamily::Inter);
        assert_eq!(metrics.wrapped_lines("Senior Product Designer", 40.0, false), 1);
    }

    #[test]
    fn test_wrapped_lines_grows_as_width_shrinks() {
        let metrics = get_metrics(FontFamily::EbGaramond);
        let text = "Lead the design of the core SaaS platform, resulting in a 25% increase \
                    in user engagement across every product line";
        let wide = metrics.wrapped_lines(text, 60.0, false);
        let narrow = metrics.wrapped_lines(text, 15.0, false);
        assert_eq!(wide, 1);
        assert!(narrow > wide, "narrow={narrow} wide={wide}");
    }

    #[test]
    fn test_overlong_word_takes_its_own_line() {
        let metrics = get_metrics(FontFamily::Inter);
        let word = "x".repeat(200);
        assert_eq!(metrics.wrapped_lines(&word, 10.0, false), 1);
        assert_eq!(metrics.wrapped_lines(&format!("a {word} b"), 10.0, false), 3);
    }

    #[test]
    fn test_bold_never_uses_fewer_lines() {
        let metrics = get_metrics(FontFamily::Lato);
        let text = "word ".repeat(40);
        assert!(
            metrics.wrapped_lines(&text, 20.0, true) >= metrics.wrapped_lines(&text, 20.0, false)
        );
    }

    #[test]
    fn test_serif_narrower_than_sans() {
        let text = "Architected distributed caching layer";
        let garamond = get_metrics(FontFamily::EbGaramond).measure_str(text);
        let lato = get_metrics(FontFamily::Lato).measure_str(text);
        assert!(garamond < lato);
    }
}
