// Utility functions and validation

pub mod validation {
    /// Validate a currency pair symbol before it reaches an upstream query
    pub fn is_valid_symbol(symbol: &str) -> bool {
        !symbol.is_empty()
            && symbol.len() <= 10
            && symbol.chars().all(|c| c.is_ascii_alphanumeric())
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;

    #[test]
    fn test_symbol_validation() {
        assert!(is_valid_symbol("EURUSD"));
        assert!(is_valid_symbol("XAUUSD"));
        assert!(!is_valid_symbol(""));
        assert!(!is_valid_symbol("EUR/USD"));
        assert!(!is_valid_symbol("averylongsymbolname"));
    }
}
