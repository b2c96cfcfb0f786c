/// Name of the file written into the current working directory.
pub const OUTPUT_FILE: &str = "large_test.csv";

/// Confirmation line printed to stdout once [`OUTPUT_FILE`] has been written.
pub const CONFIRMATION: &str = "Created large_test.csv";

/// How many times the template set is written to the output file.
pub const SET_REPEATS: usize = 500;

/// How many copies of [`BULK_RECORD`] make up the fifth template element.
pub const BULK_REPEATS: usize = 1000;

// Records mirror go.sum entries: module path, version, h1: hash, raw hash.
pub const MODULE_RECORDS: [&str; 4] = [
    "github.com/BurntSushi/locker,v0.0.0-20171006230638-a6e239ea1c69,h1:+tu3HOoMXB7RXEINRVIpxJCT+KdYiI7LAEAUrOw3dIU=,836038343df9e9126b59d54201951191898bd875ec32d93c2018d759f358fcfb\n",
    "github.com/BurntSushi/toml,v0.3.1,h1:WXkYYl6Yr3qBf1K79EBnL4mak0OimBfB0XUf9Vl28OQ=,815c6e594745f2d8842ff9a4b0569c6695e6cdfd5e07e5b3d98d06b72ca41e3c\n",
    "github.com/BurntSushi/xgb,v0.0.0-20160522181843-27f122750802,h1:1BDTz0u9nC3//pOCMdNH+CiXJVYJh5UQNCOBG7jbELc=,f52962c7fbeca81ea8a777d1f8b1f1d25803dc437fbb490f253344232884328e\n",
    "github.com/BurntSushi/xgbutil,v0.0.0-20190907113008-ad855c713046,h1:O/r2Sj+8QcMF7V5IcmiE2sMFV2q3J47BEirxbXJAdzA=,492ce6b11d7faaec4e15d1279d81e28d2e0e9844ad117f9de9411286a5b0e305\n",
];

/// Record repeated [`BULK_REPEATS`] times to pad the file out.
pub const BULK_RECORD: &str = "github.com/other/package,v1.0.0,h1:SomeHashHere,somehashhere\n";

/// The ordered collection of line elements written per repetition.
///
/// The fifth element is a single string holding [`BULK_REPEATS`] concatenated
/// copies of [`BULK_RECORD`]; the embedded newlines are its only separators.
/// Downstream consumers depend on the exact bytes, so elements are written
/// verbatim and never re-encoded.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    elements: Vec<String>,
}

impl TemplateSet {
    /// The fixed five-element set the generator always writes.
    #[must_use]
    pub fn standard() -> Self {
        let mut elements: Vec<String> =
            MODULE_RECORDS.iter().map(std::string::ToString::to_string).collect();
        elements.push(BULK_RECORD.repeat(BULK_REPEATS));
        Self { elements }
    }

    #[must_use]
    pub fn new(elements: Vec<String>) -> Self {
        Self { elements }
    }

    #[must_use]
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// Total bytes contributed by one repetition of the set.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.elements.iter().map(String::len).sum()
    }

    /// Newline-terminated records contributed by one repetition of the set.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.elements.iter().map(|e| e.bytes().filter(|&b| b == b'\n').count()).sum()
    }
}
