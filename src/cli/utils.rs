//! Shared CLI utilities.

/// Parse a token limit, rejecting zero.
pub fn parse_max_tokens(value: &str) -> Result<usize, String> {
    let parsed: usize =
        value.trim().parse().map_err(|_| format!("'{}' is not a valid token count", value))?;
    if parsed == 0 {
        return Err("max tokens must be at least 1".to_string());
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::parse_max_tokens;

    #[test]
    fn test_parse_max_tokens() {
        assert_eq!(parse_max_tokens("1000"), Ok(1000));
        assert_eq!(parse_max_tokens(" 5 "), Ok(5));
        assert!(parse_max_tokens("0").is_err());
        assert!(parse_max_tokens("-3").is_err());
        assert!(parse_max_tokens("many").is_err());
    }
}
