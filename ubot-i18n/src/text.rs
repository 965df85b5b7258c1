//! Text stored now and rendered later, in whatever locale is selected then.

use crate::resolver::TextResolver;

/// Either a fixed string or a key of a module's catalog, resolved on every read.
#[derive(Debug, Clone)]
pub enum LocalizedText {
    Fixed(String),
    Key { texts: TextResolver, key: String },
}

impl LocalizedText {
    /// Renders the text in the current locale.
    pub fn resolve(&self) -> String {
        match self {
            Self::Fixed(text) => text.clone(),
            // Keys are checked when the value is built, so only the key itself can come back.
            Self::Key { texts, key } => texts.resolve(key).unwrap_or_else(|_| key.clone()),
        }
    }
}

impl From<String> for LocalizedText {
    fn from(text: String) -> Self {
        Self::Fixed(text)
    }
}

impl From<&str> for LocalizedText {
    fn from(text: &str) -> Self {
        Self::Fixed(text.to_string())
    }
}
