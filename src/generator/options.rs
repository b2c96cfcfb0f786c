use crate::template::SET_REPEATS;

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub repeats: usize,
    pub progress_every: Option<usize>, // log after every N set repetitions
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self { repeats: SET_REPEATS, progress_every: Some(100) }
    }
}

#[derive(Debug, Default)]
pub struct GenerateReport {
    pub bytes_written: u64,
    pub records_written: u64,
}
