//! Class-list joining.

/// Join the present, non-empty class tokens with single spaces.
///
/// ```
/// use formkit_dom::classes;
///
/// let full_width = true;
/// assert_eq!(classes([Some("menu"), full_width.then_some("w-full"), None]), "menu w-full");
/// ```
pub fn classes<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    tokens
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_blank_tokens() {
        assert_eq!(classes([Some("a"), Some("  "), Some(" b ")]), "a b");
        assert_eq!(classes([None, None]), "");
    }
}
