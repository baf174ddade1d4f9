//! Display width and trimming
//!
//! Byte length and visual width diverge for multi-byte text, so every width
//! decision in the renderer goes through [`TextMetrics`].
//!
//! Known limitation: in [`EncodingMode::Bytes`] widths are byte counts and
//! trimming cuts at the last character boundary inside the byte budget.
//! Multi-byte text is then measured too wide and trimmed short. The result
//! never exceeds the requested width, it just wastes cells.

use std::sync::OnceLock;
use unicode_width::UnicodeWidthChar;

/// How the console decodes the bytes it is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingMode {
    /// Multi-byte aware: widths are Unicode cell widths
    Utf8,
    /// Single-byte: widths are byte counts
    Bytes,
}

impl EncodingMode {
    /// Probe the process locale once and cache the answer
    pub fn detect() -> Self {
        static DETECTED: OnceLock<EncodingMode> = OnceLock::new();
        *DETECTED.get_or_init(|| {
            let mode = Self::from_locale(|key| std::env::var(key).ok());
            tracing::debug!(?mode, "probed console encoding");
            mode
        })
    }

    /// Decide from locale variables, in POSIX precedence order
    ///
    /// An unset locale is treated as UTF-8, which is what modern terminals
    /// and the Windows console API deliver.
    pub fn from_locale<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
            .into_iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.trim().is_empty());

        match locale {
            None => EncodingMode::Utf8,
            Some(value) => {
                let value = value.to_ascii_lowercase();
                if value.contains("utf-8") || value.contains("utf8") {
                    EncodingMode::Utf8
                } else {
                    EncodingMode::Bytes
                }
            }
        }
    }
}

impl std::str::FromStr for EncodingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(EncodingMode::Utf8),
            "bytes" | "ascii" => Ok(EncodingMode::Bytes),
            other => Err(format!("Unknown encoding: {other}")),
        }
    }
}

/// Width calculations for one encoding mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    mode: EncodingMode,
}

impl TextMetrics {
    pub const fn new(mode: EncodingMode) -> Self {
        Self { mode }
    }

    /// Metrics for the probed process encoding
    pub fn detect() -> Self {
        Self::new(EncodingMode::detect())
    }

    pub const fn mode(&self) -> EncodingMode {
        self.mode
    }

    pub const fn is_utf8(&self) -> bool {
        matches!(self.mode, EncodingMode::Utf8)
    }

    /// Number of cells `text` occupies
    pub fn display_width(&self, text: &str) -> usize {
        match self.mode {
            EncodingMode::Utf8 => text.chars().map(char_width).sum(),
            EncodingMode::Bytes => text.len(),
        }
    }

    /// Longest prefix of `text` whose display width fits in `max_cells`
    pub fn trim_to_width<'a>(&self, text: &'a str, max_cells: usize) -> &'a str {
        match self.mode {
            EncodingMode::Utf8 => {
                let mut used = 0;
                for (idx, c) in text.char_indices() {
                    let w = char_width(c);
                    if used + w > max_cells {
                        return &text[..idx];
                    }
                    used += w;
                }
                text
            }
            EncodingMode::Bytes => {
                if text.len() <= max_cells {
                    return text;
                }
                let mut end = max_cells;
                while !text.is_char_boundary(end) {
                    end -= 1;
                }
                &text[..end]
            }
        }
    }
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self::detect()
    }
}

/// Cell width of one character
///
/// Control characters count as one cell: an embedded newline is written as
/// a space by the line writer, and measuring it narrower would let a line
/// overrun the device.
pub(crate) fn char_width(c: char) -> usize {
    if c.is_control() {
        return 1;
    }
    UnicodeWidthChar::width(c).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const UTF8: TextMetrics = TextMetrics::new(EncodingMode::Utf8);
    const BYTES: TextMetrics = TextMetrics::new(EncodingMode::Bytes);

    #[test]
    fn test_width_counts_cells_not_bytes() {
        assert_eq!(UTF8.display_width("hello"), 5);
        assert_eq!(UTF8.display_width("héllo"), 5);
        assert_eq!(UTF8.display_width("日本"), 4);
        assert_eq!(UTF8.display_width("e\u{301}"), 1);
        assert_eq!(UTF8.display_width(""), 0);
    }

    #[test]
    fn test_control_chars_take_a_cell() {
        assert_eq!(UTF8.display_width("\n"), 1);
        assert_eq!(UTF8.display_width("\r"), 1);
        assert_eq!(UTF8.display_width("\t"), 1);
        assert_eq!(UTF8.display_width("ab\ncd"), 5);
        assert_eq!(UTF8.trim_to_width("ab\ncd", 3), "ab\n");
    }

    #[test]
    fn test_bytes_mode_counts_bytes() {
        assert_eq!(BYTES.display_width("héllo"), 6);
        assert_eq!(BYTES.display_width("日本"), 6);
    }

    #[test]
    fn test_trim_zero_is_empty() {
        assert_eq!(UTF8.trim_to_width("hello", 0), "");
        assert_eq!(BYTES.trim_to_width("hello", 0), "");
        assert_eq!(UTF8.trim_to_width("", 3), "");
    }

    #[test]
    fn test_trim_never_splits_wide_char() {
        assert_eq!(UTF8.trim_to_width("日本語", 3), "日");
        assert_eq!(UTF8.trim_to_width("日本語", 4), "日本");
        assert_eq!(UTF8.trim_to_width("a日", 2), "a");
    }

    #[test]
    fn test_trim_keeps_combining_marks() {
        assert_eq!(UTF8.trim_to_width("e\u{301}x", 1), "e\u{301}");
    }

    #[test]
    fn test_bytes_trim_lands_on_char_boundary() {
        assert_eq!(BYTES.trim_to_width("héllo", 2), "h");
        assert_eq!(BYTES.trim_to_width("héllo", 3), "hé");
    }

    #[test]
    fn test_trim_bounds_and_identity() {
        let samples = ["", "plain ascii", "mixed 日本 text", "a\u{301}b\u{302}", "tab\there", "──│──"];
        for metrics in [UTF8, BYTES] {
            for s in samples {
                let full = metrics.display_width(s);
                assert_eq!(metrics.trim_to_width(s, full), s);
                for n in 0..=full + 2 {
                    let trimmed = metrics.trim_to_width(s, n);
                    assert!(metrics.display_width(trimmed) <= n, "{s:?} at {n}");
                    assert!(s.starts_with(trimmed));
                }
            }
        }
    }

    #[test]
    fn test_locale_detection() {
        let env = |pairs: &'static [(&'static str, &'static str)]| {
            move |key: &str| {
                pairs
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| v.to_string())
            }
        };
        assert_eq!(EncodingMode::from_locale(env(&[])), EncodingMode::Utf8);
        assert_eq!(
            EncodingMode::from_locale(env(&[("LANG", "en_US.UTF-8")])),
            EncodingMode::Utf8
        );
        assert_eq!(
            EncodingMode::from_locale(env(&[("LANG", "C")])),
            EncodingMode::Bytes
        );
        assert_eq!(
            EncodingMode::from_locale(env(&[("LC_ALL", "POSIX"), ("LANG", "en_US.utf8")])),
            EncodingMode::Bytes
        );
        assert_eq!(
            EncodingMode::from_locale(env(&[("LC_ALL", ""), ("LC_CTYPE", "de_DE.utf8")])),
            EncodingMode::Utf8
        );
    }

    #[test]
    fn test_detect_is_stable() {
        assert_eq!(EncodingMode::detect(), EncodingMode::detect());
    }

    #[test]
    fn test_parse_encoding() {
        assert_eq!("UTF-8".parse::<EncodingMode>().unwrap(), EncodingMode::Utf8);
        assert_eq!("bytes".parse::<EncodingMode>().unwrap(), EncodingMode::Bytes);
        assert!("latin1".parse::<EncodingMode>().is_err());
    }
}
