//! CSV line tokenization.

/// Splits one CSV line into trimmed fields, honoring double-quote quoting.
///
/// A `""` pair inside quotes is a literal quote. Unbalanced quotes are
/// tolerated: quote mode simply stays on until end of line and any
/// resulting shape problem surfaces downstream as a column-count mismatch.
/// The final field is always pushed, so an empty line yields one empty
/// field; callers skip blank lines before tokenizing.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                // A doubled quote inside quotes is a literal quote character.
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_owned());
                current.clear();
            }
            _ => {
                current.push(c);
            }
        }
    }

    // The last field has no terminating comma; push it even when empty.
    fields.push(current.trim().to_owned());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple() {
        assert_eq!(tokenize_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tokenize_trims_fields() {
        assert_eq!(tokenize_line("  a  ,  b  "), vec!["a", "b"]);
    }

    #[test]
    fn test_tokenize_quoted_comma() {
        assert_eq!(
            tokenize_line("\"hello, world\",b"),
            vec!["hello, world", "b"]
        );
    }

    #[test]
    fn test_tokenize_escaped_quotes() {
        assert_eq!(
            tokenize_line("\"he said \"\"hi\"\"\",b"),
            vec!["he said \"hi\"", "b"]
        );
    }

    #[test]
    fn test_tokenize_empty_line_yields_one_field() {
        assert_eq!(tokenize_line(""), vec![""]);
    }

    #[test]
    fn test_tokenize_trailing_comma_yields_empty_field() {
        assert_eq!(tokenize_line("a,b,"), vec!["a", "b", ""]);
    }

    #[test]
    fn test_tokenize_unbalanced_quote_tolerated() {
        // Quote mode stays on to end of line; the comma is swallowed into
        // the field rather than splitting it.
        assert_eq!(tokenize_line("\"abc,def"), vec!["abc,def"]);
    }
}
