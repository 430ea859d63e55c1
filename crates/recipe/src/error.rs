use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Recipe search request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Recipe search returned status {0}")]
    Status(u16),

    #[error("Recipe search returned an invalid payload: {0}")]
    Payload(#[source] reqwest::Error),

    #[error("Recipe search is disabled")]
    Disabled,
}
