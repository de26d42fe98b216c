//! String-body scanning.
//!
//! Inside a string literal the lexer hands the scan position to a
//! [`StringContentScanner`], which reports how much plain content follows.
//! The lexer itself matches escape sequences and the closing quote, so a
//! scanner only ever has to find where the content run stops.

/// Finds the extent of a run of string content.
pub trait StringContentScanner {
    /// Returns the byte length of the content run at the start of
    /// `remainder`, or `None` if the input ends before a `\` or `"` is seen.
    ///
    /// The lexer only asks when the next character is plain content, so the
    /// run must be non-empty. It must stop in front of the first `\` or `"`
    /// and never include either.
    fn scan_content(&self, remainder: &str) -> Option<usize>;
}

/// Stops at the first backslash or double quote.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultStringScanner;

impl StringContentScanner for DefaultStringScanner {
    fn scan_content(&self, remainder: &str) -> Option<usize> {
        remainder.find(|c: char| c == '"' || c == '\\')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_stops_before_backslash_and_quote() {
        let scanner = DefaultStringScanner;
        assert_eq!(scanner.scan_content(r#"a\nb""#), Some(1));
        assert_eq!(scanner.scan_content(r#"hello world""#), Some(11));
        assert_eq!(scanner.scan_content(r#"""#), Some(0));
        assert_eq!(scanner.scan_content(r"\t"), Some(0));
    }

    #[test]
    fn test_scan_without_terminator() {
        assert_eq!(DefaultStringScanner.scan_content("no end in sight"), None);
        assert_eq!(DefaultStringScanner.scan_content(""), None);
    }
}
