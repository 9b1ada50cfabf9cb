//! Attribute and fragment formatting shared by every canvas primitive

use std::fmt;

/// An integer coordinate pair, rendered as `x,y`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// True when the token is raw attribute syntax (`name="value"`) rather than CSS.
///
/// A leading `=` does not count: there is no attribute name in front of it.
pub fn is_attribute_token(token: &str) -> bool {
    matches!(token.find('='), Some(pos) if pos > 0)
}

/// Wrap a CSS declaration list as a `style` attribute; empty input stays empty
pub fn style_attr(css: &str) -> String {
    if css.is_empty() {
        String::new()
    } else {
        format!(r#"style="{}""#, css)
    }
}

/// Render the style tokens followed by the self-closing suffix
///
/// Raw attribute tokens are copied verbatim with a trailing space, anything
/// else becomes a `style="..."` attribute. Repeated CSS tokens produce
/// repeated `style` attributes.
pub fn end_style(tokens: &[&str]) -> String {
    let mut out = String::new();
    for token in tokens {
        if is_attribute_token(token) {
            out.push_str(token);
            out.push(' ');
        } else {
            out.push_str(&style_attr(token));
        }
    }
    out.push_str("/>\n");
    out
}

/// Space-terminated `x,y ` pairs; empty when the sequences differ in length
pub fn point_list(xs: &[i32], ys: &[i32]) -> String {
    if xs.len() != ys.len() {
        log::warn!(
            "point sequences differ in length ({} x vs {} y), emitting no points",
            xs.len(),
            ys.len()
        );
        return String::new();
    }
    xs.iter()
        .zip(ys)
        .map(|(&x, &y)| format!("{} ", Point::new(x, y)))
        .collect()
}

/// `x="..." y="..."`
pub fn loc(x: i32, y: i32) -> String {
    format!(r#"x="{}" y="{}""#, x, y)
}

/// `x="..." y="..." width="..." height="..."`
pub fn dim(x: i32, y: i32, w: i32, h: i32) -> String {
    format!(r#"x="{}" y="{}" width="{}" height="{}""#, x, y, w, h)
}

/// `xlink:href="..."`
pub fn href(link: &str) -> String {
    format!(r#"xlink:href="{}""#, link)
}

/// Opening group tag carrying a single attribute
pub fn group(attr: &str, value: &str) -> String {
    format!(r#"<g {}="{}">"#, attr, value)
}

/// SVG flag digit
pub fn one_zero(flag: bool) -> &'static str {
    if flag {
        "1"
    } else {
        "0"
    }
}

/// Make text safe inside `<!-- ... -->`
///
/// XML forbids `--` anywhere in a comment and a `-` right before the
/// closing `-->`, so runs of dashes are split with spaces.
pub fn comment_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '-' && out.ends_with('-') {
            out.push(' ');
        }
        out.push(c);
    }
    if out.ends_with('-') {
        out.push(' ');
    }
    out
}

/// Escape special XML characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_end_style_without_tokens() {
        assert_eq!(end_style(&[]), "/>\n");
    }

    #[test]
    fn test_end_style_css_token() {
        assert_eq!(end_style(&["stroke:red"]), "style=\"stroke:red\"/>\n");
    }

    #[test]
    fn test_end_style_attribute_token() {
        assert_eq!(end_style(&["id=foo"]), "id=foo />\n");
        assert_eq!(
            end_style(&[r#"id="a""#, r#"class="b""#]),
            "id=\"a\" class=\"b\" />\n"
        );
    }

    #[test]
    fn test_end_style_mixed_and_repeated() {
        assert_eq!(
            end_style(&["id=x", "fill:red", "stroke:blue"]),
            "id=x style=\"fill:red\"style=\"stroke:blue\"/>\n"
        );
    }

    #[test]
    fn test_leading_equals_is_css() {
        assert!(!is_attribute_token("=oops"));
        assert_eq!(end_style(&["=oops"]), "style=\"=oops\"/>\n");
    }

    #[test]
    fn test_empty_css_token_is_dropped() {
        assert_eq!(end_style(&[""]), "/>\n");
    }

    #[test]
    fn test_point_list() {
        assert_eq!(point_list(&[0, 10, 5], &[0, 0, 10]), "0,0 10,0 5,10 ");
        assert_eq!(point_list(&[-1], &[-2]), "-1,-2 ");
        assert_eq!(point_list(&[], &[]), "");
    }

    #[test]
    fn test_point_list_length_mismatch() {
        assert_eq!(point_list(&[0, 10], &[0, 0, 10]), "");
    }

    #[test]
    fn test_loc_and_dim() {
        assert_eq!(loc(3, -4), r#"x="3" y="-4""#);
        assert_eq!(dim(1, 2, 3, 4), r#"x="1" y="2" width="3" height="4""#);
    }

    #[test]
    fn test_group() {
        assert_eq!(group("id", "layer1"), r#"<g id="layer1">"#);
    }

    #[test]
    fn test_one_zero() {
        assert_eq!(one_zero(true), "1");
        assert_eq!(one_zero(false), "0");
    }

    #[test]
    fn test_comment_text_splits_dashes() {
        assert_eq!(comment_text("plain"), "plain");
        assert_eq!(comment_text("a -- b"), "a - - b");
        assert_eq!(comment_text("---"), "- - - ");
        assert_eq!(comment_text("ends-"), "ends- ");
        assert_eq!(comment_text("well-formed"), "well-formed");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_xml(r#"say "hi" it's"#), "say &quot;hi&quot; it&apos;s");
        assert_eq!(escape_xml("&lt;"), "&amp;lt;");
    }
}
