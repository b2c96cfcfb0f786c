use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::errors::FixtureError;
use crate::template::TemplateSet;

use super::options::{GenerateOptions, GenerateReport};

/// Write the expanded standard template set to `path`, creating the file if
/// absent and truncating it if present.
///
/// The destination is written in place, in one pass. If a write fails the
/// partially written file is left on disk; there is no retry or rollback.
///
/// # Errors
/// Returns an error if the file cannot be created or a write fails.
pub fn generate_file(
    path: impl AsRef<Path>,
    opts: &GenerateOptions,
) -> Result<GenerateReport, FixtureError> {
    log::info!("generate: path={}, repeats={}", path.as_ref().display(), opts.repeats);
    let set = TemplateSet::standard();
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    let report = generate_to_writer(&set, &mut writer, opts)?;
    writer.flush()?;
    log::info!(
        "generate done: path={}, bytes={}, records={}",
        path.as_ref().display(),
        report.bytes_written,
        report.records_written
    );
    Ok(report)
}

/// Write `opts.repeats` copies of `set` into `writer`, element by element,
/// in order, each element verbatim.
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn generate_to_writer<W: Write>(
    set: &TemplateSet,
    writer: &mut W,
    opts: &GenerateOptions,
) -> io::Result<GenerateReport> {
    let set_records = set.line_count() as u64;
    let mut report = GenerateReport::default();
    for n in 1..=opts.repeats {
        for element in set.elements() {
            writer.write_all(element.as_bytes())?;
            report.bytes_written += element.len() as u64;
        }
        report.records_written += set_records;
        if let Some(every) = opts.progress_every
            && every != 0
            && n % every == 0
        {
            log::info!("wrote {}/{} template sets ({} bytes)", n, opts.repeats, report.bytes_written);
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_set() -> TemplateSet {
        TemplateSet::new(vec!["a,1\n".to_string(), "bb,2\nbb,2\n".to_string()])
    }

    #[test]
    fn writer_expands_set_in_order() {
        let set = tiny_set();
        let opts = GenerateOptions { repeats: 3, progress_every: None };
        let mut buf = Vec::new();
        let report = generate_to_writer(&set, &mut buf, &opts).unwrap();
        assert_eq!(buf, b"a,1\nbb,2\nbb,2\n".repeat(3));
        assert_eq!(report.bytes_written, (set.byte_len() * 3) as u64);
        assert_eq!(report.records_written, (set.line_count() * 3) as u64);
    }

    #[test]
    fn zero_repeats_writes_nothing() {
        let set = tiny_set();
        let opts = GenerateOptions { repeats: 0, progress_every: None };
        let mut buf = Vec::new();
        let report = generate_to_writer(&set, &mut buf, &opts).unwrap();
        assert!(buf.is_empty());
        assert_eq!(report.bytes_written, 0);
        assert_eq!(report.records_written, 0);
    }

    #[test]
    fn progress_every_zero_is_ignored() {
        let set = tiny_set();
        let opts = GenerateOptions { repeats: 2, progress_every: Some(0) };
        let mut buf = Vec::new();
        let report = generate_to_writer(&set, &mut buf, &opts).unwrap();
        assert_eq!(report.bytes_written, (set.byte_len() * 2) as u64);
    }

    #[test]
    fn writer_errors_propagate() {
        struct FailingWriter;
        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("no space"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let set = tiny_set();
        let opts = GenerateOptions { repeats: 1, progress_every: None };
        let err = generate_to_writer(&set, &mut FailingWriter, &opts).err();
        assert!(err.is_some());
    }
}
