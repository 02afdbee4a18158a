//! Name value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact's name.
///
/// The raw text is kept exactly as entered and is what the address book keys
/// on and compares against. Title casing is a rendering concern only, see
/// [`Name::title_case`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Create a new Name, rejecting empty or whitespace-only text.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Get the raw name as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render the name for display.
    ///
    /// Every alphabetic run starts with an upper-case letter and continues in
    /// lower case, so `"mary-jane o'neil"` becomes `"Mary-Jane O'Neil"`.
    pub fn title_case(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut in_word = false;

        for c in self.0.chars() {
            if c.is_alphabetic() {
                if in_word {
                    out.extend(c.to_lowercase());
                } else {
                    out.extend(c.to_uppercase());
                }
                in_word = true;
            } else {
                out.push(c);
                in_word = false;
            }
        }

        out
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

/// Displays the title-cased form.
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title_case())
    }
}
