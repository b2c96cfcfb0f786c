pub mod errors;
pub mod generator;
pub mod logger;
pub mod template;

use crate::errors::FixtureError;
use crate::generator::{GenerateOptions, GenerateReport, generate_file};

/// Writes the standard fixture file `large_test.csv` into the current
/// working directory, overwriting any previous copy.
///
/// # Errors
/// Returns an error if the file cannot be created or a write fails.
pub fn generate() -> Result<GenerateReport, FixtureError> {
    generate_file(template::OUTPUT_FILE, &GenerateOptions::default())
}
