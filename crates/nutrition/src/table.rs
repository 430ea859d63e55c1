use std::{io::Read, path::Path};

use foodcoach_shared::{IngredientToken, best_match, normalize};

use crate::{NutritionError, NutritionRecord};

/// Minimum similarity (0..=100) for a fuzzy match to count.
pub const DEFAULT_SIMILARITY_THRESHOLD: u8 = 70;

const BUNDLED_DATASET: &str = include_str!("../data/nutrition_storage_dataset.csv");

/// Outcome of looking up one ingredient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    Exact(&'a NutritionRecord),
    Approximate {
        record: &'a NutritionRecord,
        score: u8,
    },
    Miss,
}

impl<'a> Lookup<'a> {
    pub fn record(&self) -> Option<&'a NutritionRecord> {
        match *self {
            Lookup::Exact(record) | Lookup::Approximate { record, .. } => Some(record),
            Lookup::Miss => None,
        }
    }
}

/// Read-only nutrition dataset.
#[derive(Debug, Clone, Default)]
pub struct NutritionTable {
    records: Vec<NutritionRecord>,
    keys: Vec<String>,
}

impl NutritionTable {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, NutritionError> {
        let file = std::fs::File::open(path.as_ref())?;
        let table = Self::from_reader(file)?;
        tracing::info!(
            path = %path.as_ref().display(),
            records = table.len(),
            "Loaded nutrition records"
        );
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, NutritionError> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let records = csv_reader
            .deserialize::<NutritionRecord>()
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(records))
    }

    /// Dataset compiled into the binary.
    pub fn bundled() -> Result<Self, NutritionError> {
        Self::from_reader(BUNDLED_DATASET.as_bytes())
    }

    /// Load `path`, falling back to the bundled dataset when the file does not exist.
    pub fn load_or_bundled(path: impl AsRef<Path>) -> Result<Self, NutritionError> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_path(path);
        }

        tracing::warn!(
            path = %path.display(),
            "Nutrition data file not found, using bundled dataset"
        );
        Self::bundled()
    }

    pub fn new(records: Vec<NutritionRecord>) -> Self {
        let keys = records.iter().map(|record| normalize(&record.name)).collect();
        Self { records, keys }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact key match, then the best fuzzy match at or above `threshold`.
    pub fn lookup(&self, token: &IngredientToken, threshold: u8) -> Lookup<'_> {
        let query = token.as_str();

        if let Some(index) = self.keys.iter().position(|key| key == query) {
            return Lookup::Exact(&self.records[index]);
        }

        let Some((key, score)) = best_match(query, self.keys.iter().map(String::as_str), threshold)
        else {
            return Lookup::Miss;
        };

        match self.keys.iter().position(|candidate| candidate == key) {
            Some(index) => Lookup::Approximate {
                record: &self.records[index],
                score,
            },
            None => Lookup::Miss,
        }
    }
}
