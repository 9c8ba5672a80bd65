//! Conditional CSS class composition.
//!
//! Components describe their classes as a base token followed by ordered
//! `(token, condition)` pairs. Only tokens whose condition holds are kept,
//! in declaration order, with duplicates and empty tokens dropped.

/// Compose a class string from a base token and conditional tokens.
///
/// # Example
///
/// ```rust
/// use axtlive_ui::ui::class_names::compose;
///
/// let classes = compose("axtlive-btn", &[("btn-primary", true), ("btn-lg", false)]);
/// assert_eq!(classes, "axtlive-btn btn-primary");
/// ```
#[must_use]
pub fn compose(base: &str, conditionals: &[(&str, bool)]) -> String {
    conditionals
        .iter()
        .fold(ClassNames::new(base), |names, (token, on)| {
            names.add_if(token, *on)
        })
        .build()
}

/// Builder form of [`compose`], used when tokens are computed at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassNames {
    tokens: Vec<String>,
}

impl ClassNames {
    /// Start from a base token. An empty base contributes nothing.
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self::default().add(base)
    }

    /// Add a token unconditionally.
    #[must_use]
    pub fn add(self, token: &str) -> Self {
        self.add_if(token, true)
    }

    /// Add a token when `condition` holds.
    ///
    /// A token string containing whitespace is split, so an extra `class`
    /// prop like `"a b"` contributes two tokens.
    #[must_use]
    pub fn add_if(mut self, token: &str, condition: bool) -> Self {
        if condition {
            for part in token.split_whitespace() {
                if !self.tokens.iter().any(|t| t == part) {
                    self.tokens.push(part.to_string());
                }
            }
        }
        self
    }

    /// Add an optional token, skipping `None`.
    #[must_use]
    pub fn add_opt(self, token: Option<&str>) -> Self {
        match token {
            Some(token) => self.add(token),
            None => self,
        }
    }

    /// Whether `token` is already part of the set.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Join the tokens with single spaces.
    #[must_use]
    pub fn build(&self) -> String {
        self.tokens.join(" ")
    }
}
