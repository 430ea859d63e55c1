use thiserror::Error;

#[derive(Error, Debug)]
pub enum NutritionError {
    #[error("Failed to read nutrition data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid nutrition data: {0}")]
    Csv(#[from] csv::Error),
}
