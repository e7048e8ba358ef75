//! Text helpers shared by the resolver and the generators.

/// Trim whitespace, colons and hyphens from both ends.
pub fn trim_separators(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == ':' || c == '-')
}

/// Title-case every word: first letter upper, the rest lower.
///
/// A word is a run of letters, so `"season 2"` becomes `"Season 2"` and
/// `"PART 3"` becomes `"Part 3"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// Escape text for HTML element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_separators() {
        assert_eq!(trim_separators(": Season 2: Finale "), "Season 2: Finale");
        assert_eq!(trim_separators(" - Part 1 -"), "Part 1");
        assert_eq!(trim_separators(":::"), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("season 2"), "Season 2");
        assert_eq!(title_case("PART 10"), "Part 10");
        assert_eq!(title_case("volume\t3"), "Volume\t3");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"Tom & Jerry <"Best">'s"#),
            "Tom &amp; Jerry &lt;&quot;Best&quot;&gt;&#x27;s"
        );
        assert_eq!(escape_html("Plain"), "Plain");
    }
}
