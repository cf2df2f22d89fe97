//! Codepoint escape styles
//!
//! The builder flattens codepoint tokens into a single escaped string literal
//! for the target language. The fixture distinguishes a short form (4 hex
//! digits, zero-padded) from a long form (8 hex digits, zero-padded); the
//! concrete escape syntax wrapped around those digits is a presentation
//! detail that varies per target language, so it lives behind a trait.

/// A target-language syntax for codepoint escape literals.
///
/// `short` receives exactly 4 zero-padded hex digits, `long` exactly 8;
/// padding and form selection are handled by [`format_codepoint`], so
/// implementations only wrap the digits in their escape syntax.
pub trait EscapeStyle {
    /// Name used to select the style from the command line.
    fn name(&self) -> &'static str;

    /// Render a 4-hex-digit escape.
    fn short(&self, hex: &str) -> String;

    /// Render an 8-hex-digit escape.
    fn long(&self, hex: &str) -> String;
}

/// Go / Python style escapes: `\u0041` and `\U0001F600`.
///
/// This is the style the original fixture tooling emitted.
pub struct GoEscapes;

impl EscapeStyle for GoEscapes {
    fn name(&self) -> &'static str {
        "go"
    }

    fn short(&self, hex: &str) -> String {
        format!("\\u{hex}")
    }

    fn long(&self, hex: &str) -> String {
        format!("\\U{hex}")
    }
}

/// Rust style escapes: `\u{0041}` and `\u{0001F600}`.
pub struct RustEscapes;

impl EscapeStyle for RustEscapes {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn short(&self, hex: &str) -> String {
        format!("\\u{{{hex}}}")
    }

    fn long(&self, hex: &str) -> String {
        format!("\\u{{{hex}}}")
    }
}

/// Format one codepoint token as an escape literal.
///
/// Tokens of at most 4 hex digits use the short form padded to 4 digits;
/// longer tokens use the long form padded to 8 digits.
pub fn format_codepoint(style: &dyn EscapeStyle, hex: &str) -> String {
    if hex.len() <= 4 {
        style.short(&format!("{hex:0>4}"))
    } else {
        style.long(&format!("{hex:0>8}"))
    }
}
