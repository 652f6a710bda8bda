//! Compiled-once regular expressions for the line matchers.

/// Compile `$pattern` on first use and return a `&'static Regex`.
///
/// Patterns are literals in this crate, so a compile failure is a bug and
/// panics with the regex error.
macro_rules! compile {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}

pub(crate) use compile;

#[cfg(test)]
mod tests {
    use super::compile;

    #[test]
    fn same_instance_each_call() {
        fn digits() -> &'static regex::Regex {
            compile!(r"^\d+$")
        }
        assert!(std::ptr::eq(digits(), digits()));
        assert!(digits().is_match("42"));
    }
}
