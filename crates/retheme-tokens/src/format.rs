//! Text helpers for key sanitization, value validation, and CSS formatting.

use cssparser::{Parser, ParserInput, Token};
use deunicode::deunicode;
use serde_json::Value;

use crate::theme::KeyframeSteps;

/// Folds a token key into a valid CSS custom property name segment.
///
/// Unicode is transliterated to ASCII, letters are lowercased, and every
/// other character becomes a hyphen. Hyphen runs collapse and edge hyphens
/// are trimmed, so the result is stable under repeated application.
///
/// # Example
///
/// ```rust
/// use retheme_tokens::format::sanitize_key;
///
/// assert_eq!(sanitize_key("my.color"), "my-color");
/// assert_eq!(sanitize_key("My Color"), "my-color");
/// assert_eq!(sanitize_key("--edge--"), "edge");
/// assert_eq!(sanitize_key("Grün"), "grun");
/// ```
pub fn sanitize_key(key: &str) -> String {
    let ascii = deunicode(key).to_ascii_lowercase();
    let mut out = String::with_capacity(ascii.len());
    for c in ascii.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    if out.ends_with('-') {
        out.pop();
    }
    out
}

/// Checks whether a string can be embedded as a CSS declaration value.
///
/// The value is scanned with a CSS tokenizer, so quoting is handled
/// correctly: a semicolon inside a quoted string is fine, while a bare
/// semicolon, any curly bracket block, a stray closing delimiter, or an
/// unterminated string or url is not. Empty and whitespace-only values
/// and values containing control characters are rejected outright.
///
/// # Example
///
/// ```rust
/// use retheme_tokens::format::is_valid_css_value;
///
/// assert!(is_valid_css_value("#3b82f6"));
/// assert!(is_valid_css_value("calc(100% - 2px)"));
/// assert!(is_valid_css_value("\"semi; inside\""));
/// assert!(!is_valid_css_value("red;}"));
/// assert!(!is_valid_css_value("   "));
/// ```
pub fn is_valid_css_value(value: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    if value.chars().any(char::is_control) {
        return false;
    }
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    matches!(scan_value(&mut parser), Ok(true))
}

/// Walks a token stream, recursing into parenthesized and bracketed
/// blocks, and reports whether every token is acceptable in a value.
fn scan_value<'i, 't>(
    parser: &mut Parser<'i, 't>,
) -> Result<bool, cssparser::ParseError<'i, ()>> {
    loop {
        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => return Ok(true),
        };
        match token {
            Token::Semicolon
            | Token::CurlyBracketBlock
            | Token::CloseParenthesis
            | Token::CloseSquareBracket
            | Token::CloseCurlyBracket
            | Token::BadString(_)
            | Token::BadUrl(_) => return Ok(false),
            Token::Function(_) | Token::ParenthesisBlock | Token::SquareBracketBlock => {
                if !parser.parse_nested_block(scan_value)? {
                    return Ok(false);
                }
            }
            _ => {}
        }
    }
}

/// Formats a custom property declaration, indented for a block body.
///
/// # Example
///
/// ```rust
/// use retheme_tokens::format::format_css_variable;
///
/// assert_eq!(
///     format_css_variable("color-primary", "#3b82f6"),
///     "  --color-primary: #3b82f6;"
/// );
/// ```
pub fn format_css_variable(name: &str, value: &str) -> String {
    format!("  --{}: {};", name, value)
}

/// Formats a `@keyframes` rule from ordered stops.
///
/// Stops that are not mappings are dropped, as are declarations whose
/// values are not scalars.
pub fn format_keyframes(name: &str, steps: &KeyframeSteps) -> String {
    let mut css = format!("@keyframes {} {{\n", name);
    for (stop, declarations) in steps {
        let declarations = match declarations.as_object() {
            Some(map) => map,
            None => continue,
        };
        css.push_str(&format!("  {} {{\n", stop));
        for (property, value) in declarations {
            if let Some(text) = scalar_text(value) {
                css.push_str(&format!("    {}: {};\n", property, text));
            }
        }
        css.push_str("  }\n");
    }
    css.push('}');
    css
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Formats an animation utility class.
pub fn format_animation_class(name: &str, animation: &str) -> String {
    format!(".animate-{} {{\n  animation: {};\n}}", name, animation)
}

/// Removes comments and collapses whitespace. Runs of whitespace become a
/// single space, and no space is kept next to `{`, `}`, or `;`.
///
/// # Example
///
/// ```rust
/// use retheme_tokens::format::minify_css;
///
/// assert_eq!(
///     minify_css(":root {\n  --space-4: 1rem;\n}\n"),
///     ":root{--space-4: 1rem;}"
/// );
/// ```
pub fn minify_css(css: &str) -> String {
    let stripped = strip_comments(css);
    let mut out = String::with_capacity(stripped.len());
    let mut pending_space = false;
    for c in stripped.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            let after_break = matches!(
                out.as_bytes().last(),
                None | Some(b'{') | Some(b'}') | Some(b';')
            );
            let before_break = matches!(c, '{' | '}' | ';');
            if !after_break && !before_break {
                out.push(' ');
            }
            pending_space = false;
        }
        out.push(c);
    }
    out
}

fn strip_comments(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut rest = css;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// Builds the comment header placed at the top of each generated file.
pub fn header(title: &str) -> String {
    format!(
        "/*\n * {}\n * Generated by retheme. Do not edit directly.\n */\n\n",
        title
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key_basic() {
        assert_eq!(sanitize_key("primary"), "primary");
        assert_eq!(sanitize_key("gray.500"), "gray-500");
        assert_eq!(sanitize_key("Brand Blue"), "brand-blue");
    }

    #[test]
    fn test_sanitize_key_collapses_runs() {
        assert_eq!(sanitize_key("a..b"), "a-b");
        assert_eq!(sanitize_key("a - b"), "a-b");
        assert_eq!(sanitize_key("-lead-trail-"), "lead-trail");
    }

    #[test]
    fn test_sanitize_key_idempotent() {
        for key in ["My.Color", "a  b", "Grün-500", "--x--"] {
            let once = sanitize_key(key);
            assert_eq!(sanitize_key(&once), once);
        }
    }

    #[test]
    fn test_sanitize_key_degenerate() {
        assert_eq!(sanitize_key(""), "");
        assert_eq!(sanitize_key("..."), "");
        assert_eq!(sanitize_key("!!!"), "");
    }

    #[test]
    fn test_is_valid_css_value_accepts() {
        assert!(is_valid_css_value("#3b82f6"));
        assert!(is_valid_css_value("1.25rem"));
        assert!(is_valid_css_value("calc(100% - 2px)"));
        assert!(is_valid_css_value("rgba(0, 0, 0, 0.5)"));
        assert!(is_valid_css_value("url(\"bg.png\")"));
        assert!(is_valid_css_value("\"semi; quoted\""));
        // The tokenizer closes an open paren at end of input
        assert!(is_valid_css_value("calc(1px + 1px"));
    }

    #[test]
    fn test_is_valid_css_value_rejects() {
        assert!(!is_valid_css_value(""));
        assert!(!is_valid_css_value("   "));
        assert!(!is_valid_css_value("red; background: blue"));
        assert!(!is_valid_css_value("red;}"));
        assert!(!is_valid_css_value("} red"));
        assert!(!is_valid_css_value("red { }"));
        assert!(!is_valid_css_value("calc(1px; 2px)"));
        assert!(!is_valid_css_value("\"unterminated"));
        assert!(!is_valid_css_value("line\nbreak"));
    }

    #[test]
    fn test_format_css_variable() {
        assert_eq!(
            format_css_variable("space-18", "4.5rem"),
            "  --space-18: 4.5rem;"
        );
    }

    #[test]
    fn test_format_keyframes() {
        let mut steps = KeyframeSteps::new();
        steps.insert("0%".to_string(), serde_json::json!({"opacity": "0"}));
        steps.insert("100%".to_string(), serde_json::json!({"opacity": "1"}));

        let css = format_keyframes("fadeIn", &steps);
        assert!(css.starts_with("@keyframes fadeIn {\n"));
        assert!(css.contains("  0% {\n    opacity: 0;\n  }\n"));
        assert!(css.contains("  100% {\n    opacity: 1;\n  }\n"));
        assert!(css.ends_with('}'));
    }

    #[test]
    fn test_format_keyframes_drops_non_scalar_values() {
        let mut steps = KeyframeSteps::new();
        steps.insert(
            "0%".to_string(),
            serde_json::json!({"opacity": "0", "transform": {"x": 1}}),
        );
        steps.insert("50%".to_string(), serde_json::json!("not a mapping"));

        let css = format_keyframes("wiggle", &steps);
        assert!(css.contains("opacity: 0;"));
        assert!(!css.contains("transform"));
        assert!(!css.contains("50%"));
    }

    #[test]
    fn test_format_keyframes_numeric_values() {
        let mut steps = KeyframeSteps::new();
        steps.insert("100%".to_string(), serde_json::json!({"opacity": 1}));

        let css = format_keyframes("appear", &steps);
        assert!(css.contains("    opacity: 1;\n"));
    }

    #[test]
    fn test_format_animation_class() {
        assert_eq!(
            format_animation_class("fade-in", "fadeIn 0.5s ease-in-out"),
            ".animate-fade-in {\n  animation: fadeIn 0.5s ease-in-out;\n}"
        );
    }

    #[test]
    fn test_minify_css_strips_comments() {
        let css = "/* header */\n:root {\n  --a: 1px;\n}\n";
        assert_eq!(minify_css(css), ":root{--a: 1px;}");
    }

    #[test]
    fn test_minify_css_keeps_inner_spaces() {
        let css = ".animate-spin {\n  animation: spin 1s linear infinite;\n}\n";
        assert_eq!(
            minify_css(css),
            ".animate-spin{animation: spin 1s linear infinite;}"
        );
    }

    #[test]
    fn test_minify_css_unterminated_comment() {
        assert_eq!(minify_css("a{} /* never closed"), "a{}");
    }

    #[test]
    fn test_header_shape() {
        let text = header("Design Tokens");
        assert!(text.starts_with("/*\n * Design Tokens\n"));
        assert!(text.ends_with("*/\n\n"));
    }
}
