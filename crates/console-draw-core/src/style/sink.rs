//! Color sinks turn a text payload plus optional colors into device text

use super::Color;
use crossterm::style::ContentStyle;
use std::borrow::Cow;
use std::fmt::Debug;

/// Produces the colorized representation of a text payload
///
/// Implementations must return the text unchanged when both colors are
/// `None`, and must leave the device's color state as they found it after
/// colored text.
pub trait ColorSink: Debug + Send + Sync {
    fn colorize<'a>(&self, text: &'a str, fg: Option<Color>, bg: Option<Color>) -> Cow<'a, str>;
}

/// Sink for devices without color support: always the identity
#[derive(Debug, Clone, Copy, Default)]
pub struct NoColor;

impl ColorSink for NoColor {
    fn colorize<'a>(&self, text: &'a str, _fg: Option<Color>, _bg: Option<Color>) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}

/// ANSI/SGR sink backed by crossterm's styled content
///
/// Colored text is followed by a reset sequence so later uncolored writes
/// are unaffected.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiColor;

impl ColorSink for AnsiColor {
    fn colorize<'a>(&self, text: &'a str, fg: Option<Color>, bg: Option<Color>) -> Cow<'a, str> {
        if fg.is_none() && bg.is_none() {
            return Cow::Borrowed(text);
        }

        let mut style = ContentStyle::new();
        style.foreground_color = fg.map(Into::into);
        style.background_color = bg.map(Into::into);
        Cow::Owned(style.apply(text).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_is_identity() {
        let out = NoColor.colorize("hello", Some(Color::Red), Some(Color::Blue));
        assert!(matches!(out, Cow::Borrowed("hello")));
    }

    #[test]
    fn test_ansi_without_colors_is_identity() {
        for text in ["", "plain", "ünïcödé ─│", "\x1b(0"] {
            let out = AnsiColor.colorize(text, None, None);
            assert!(matches!(out, Cow::Borrowed(_)));
            assert_eq!(out, text);
        }
    }

    #[test]
    fn test_ansi_wraps_and_resets() {
        let out = AnsiColor.colorize("warn", Some(Color::Yellow), None);
        assert!(out.starts_with("\x1b["));
        assert!(out.contains("warn"));
        assert!(!out.ends_with("warn"));
    }

    #[test]
    fn test_ansi_background_only() {
        let out = AnsiColor.colorize("x", None, Some(Color::DarkBlue));
        assert_ne!(out, "x");
        assert!(out.contains('x'));
        assert!(!out.ends_with('x'));
    }
}
