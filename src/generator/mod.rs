mod options;
mod pipeline;

pub use options::{GenerateOptions, GenerateReport};
pub use pipeline::{generate_file, generate_to_writer};
