use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeSource {
    External,
    Fallback,
}

/// A recipe suggestion produced by [`crate::RecipeFinder`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: Option<u32>,
    pub url: Option<String>,
    pub source: RecipeSource,
}
