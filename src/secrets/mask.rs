//! Output masking for secret values.

/// Masks secret values in text before it is logged or displayed.
///
/// # Example
///
/// ```
/// use azproof::secrets::OutputMasker;
///
/// let mut masker = OutputMasker::new();
/// masker.add_secret("super-secret-value");
///
/// let output = masker.mask("The key is super-secret-value here");
/// assert_eq!(output, "The key is [REDACTED] here");
/// ```
#[derive(Debug, Clone, Default)]
pub struct OutputMasker {
    /// Registered secrets, longest first so overlapping values mask fully.
    secrets: Vec<String>,
}

/// Replacement text for masked values.
const MASK: &str = "[REDACTED]";

impl OutputMasker {
    /// Create a masker with no secrets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a secret value to be masked.
    ///
    /// Empty strings and duplicates are ignored.
    pub fn add_secret(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() || self.secrets.contains(&value) {
            return;
        }
        self.secrets.push(value);
        self.secrets.sort_by_key(|s| std::cmp::Reverse(s.len()));
    }

    /// Mask any secret values in the given string.
    pub fn mask(&self, input: &str) -> String {
        let mut result = input.to_string();
        for secret in &self.secrets {
            result = result.replace(secret.as_str(), MASK);
        }
        result
    }
}
