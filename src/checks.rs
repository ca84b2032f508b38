//! Process-code validation and string-joining helpers exercised by the
//! built-in demo suite.

/// Validates a process code against the `AG-` naming convention: the literal
/// prefix `AG-` followed by exactly six ASCII digits.
pub fn validate_process_code(code: &str) -> bool {
    let Some(digits) = code.strip_prefix("AG-") else {
        return false;
    };
    digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Trims each item and joins the results with `;`.
///
/// An empty input yields the empty string. The input must be an iterator of
/// string-like items; there is no runtime type check to fail.
pub fn join_with_semicolon<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| item.as_ref().trim().to_string())
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_code() {
        assert!(validate_process_code("AG-123456"));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!validate_process_code("AG-12345"));
        assert!(!validate_process_code("AG-1234567"));
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!(!validate_process_code("123456"));
        assert!(!validate_process_code("ag-123456"));
    }

    #[test]
    fn rejects_non_digit_suffix() {
        assert!(!validate_process_code("AG-12345a"));
        // Multibyte digits must not slip through the byte-length check.
        assert!(!validate_process_code("AG-１２３"));
    }

    #[test]
    fn joins_and_trims() {
        assert_eq!(
            join_with_semicolon(["  a", "b  ", " c "]),
            "a;b;c".to_string()
        );
    }

    #[test]
    fn empty_input_joins_to_empty_string() {
        assert_eq!(join_with_semicolon::<_, &str>([]), "");
    }

    #[test]
    fn single_item_has_no_separator() {
        assert_eq!(join_with_semicolon(["only"]), "only");
    }
}
