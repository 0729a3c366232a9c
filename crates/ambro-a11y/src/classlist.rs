//! Class list
//!
//! Space-separated token list for the document root's `class` attribute.

/// Ordered, de-duplicated set of class tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<String>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a space-separated string
    pub fn from_string(s: &str) -> Self {
        let mut list = Self::new();
        for token in s.split_whitespace() {
            list.add(&[token]);
        }
        list
    }

    pub fn length(&self) -> usize {
        self.tokens.len()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Add token(s), skipping empty and duplicate tokens
    pub fn add(&mut self, tokens: &[&str]) {
        for token in tokens {
            if !token.is_empty() && !self.contains(token) {
                self.tokens.push(token.to_string());
            }
        }
    }

    pub fn remove(&mut self, tokens: &[&str]) {
        self.tokens.retain(|t| !tokens.contains(&t.as_str()));
    }

    /// Space-joined value, as written to the `class` attribute
    pub fn value(&self) -> String {
        self.tokens.join(" ")
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|s| s.as_str())
    }
}

impl std::fmt::Display for TokenList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let list = TokenList::from_string("font-primary  font-secondary font-primary");
        assert_eq!(list.length(), 2);
        assert_eq!(list.value(), "font-primary font-secondary");
    }

    #[test]
    fn test_add_remove() {
        let mut list = TokenList::new();
        list.add(&["text-large", "dark", ""]);
        assert_eq!(list.length(), 2);

        list.remove(&["dark", "not-there"]);
        assert_eq!(list.length(), 1);
        assert!(!list.contains("dark"));
    }
}
