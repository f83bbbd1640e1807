/// Escapes text for an HTML context: `& < > " '`.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"
        );
    }

    #[test]
    fn escapes_ampersand_first_and_quotes() {
        assert_eq!(escape_html(r#"a & "b""#), "a &amp; &quot;b&quot;");
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(escape_html("João da Silva"), "João da Silva");
    }
}
