use serde::{Deserialize, Serialize};
use std::fmt;

use crate::text::normalize;

/// One normalized ingredient name: lowercase, trimmed, single-spaced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientToken(String);

impl IngredientToken {
    /// Normalize `raw`, returning `None` when nothing is left.
    pub fn new(raw: &str) -> Option<Self> {
        let value = normalize(raw);
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Normalize a list, dropping empty entries and later duplicates.
    pub fn parse_list<I, S>(values: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens: Vec<Self> = Vec::new();
        for value in values {
            if let Some(token) = Self::new(value.as_ref())
                && !tokens.contains(&token)
            {
                tokens.push(token);
            }
        }
        tokens
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for IngredientToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IngredientToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
