use crate::error::{IoError, Result};
use ecosim_data::{DayReport, PopulationRecord};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Column names of the population series.
pub const CSV_COLUMNS: [&str; 2] = ["Day", "Population"];

/// Destination for per-day reports.
pub trait ReportSink {
    fn record(&mut self, report: &DayReport) -> Result<()>;

    /// Flushes anything still buffered.
    fn finish(&mut self) -> Result<()>;
}

/// Writes the `Day,Population` series, one row per day.
pub struct PopulationRecorder<W: Write = File> {
    out: csv::Writer<W>,
    rows: usize,
}

impl PopulationRecorder {
    /// Creates (or truncates) `path` and writes the header.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let file = File::create(path)
            .map_err(|e| IoError::from(e).with_context(format!("creating {}", path.display())))?;
        Self::new(file)
    }

    /// Parses a series written by `PopulationRecorder`.
    pub fn read_series(path: impl AsRef<Path>) -> Result<Vec<PopulationRecord>> {
        let file = File::open(path.as_ref())?;
        parse_series(file)
    }
}

impl<W: Write> PopulationRecorder<W> {
    /// Wraps `out` and writes the header immediately, so an empty run still
    /// leaves a well-formed file.
    pub fn new(out: W) -> Result<Self> {
        let mut out = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(out);
        out.write_record(CSV_COLUMNS)?;
        Ok(Self { out, rows: 0 })
    }

    pub fn write_record(&mut self, record: PopulationRecord) -> Result<()> {
        self.out.serialize(record)?;
        self.rows += 1;
        Ok(())
    }

    /// Rows written so far, excluding the header.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn into_inner(self) -> Result<W> {
        self.out
            .into_inner()
            .map_err(|e| IoError::from(e.into_error()))
    }
}

impl<W: Write> ReportSink for PopulationRecorder<W> {
    fn record(&mut self, report: &DayReport) -> Result<()> {
        self.write_record(report.record())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Reads a `Day,Population` series from any reader.
pub fn parse_series<R: Read>(reader: R) -> Result<Vec<PopulationRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?;
    if headers.is_empty() {
        return Err(IoError::validation("empty population series"));
    }
    if headers.iter().ne(CSV_COLUMNS) {
        return Err(IoError::validation(format!(
            "unexpected header {:?}, expected {:?}",
            headers.iter().collect::<Vec<_>>().join(","),
            CSV_COLUMNS.join(",")
        )));
    }

    reader
        .deserialize::<PopulationRecord>()
        .enumerate()
        .map(|(idx, row)| row.map_err(|e| IoError::from(e).with_context(format!("row {}", idx + 2))))
        .collect()
}

/// Appends every `DayReport` as one JSON line.
pub struct ReportLogger<W: Write = BufWriter<File>> {
    out: W,
}

impl ReportLogger {
    /// Opens `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| IoError::from(e).with_context(format!("opening {}", path.display())))?;
        Ok(Self::new(BufWriter::new(file)))
    }

    /// Loads every report from a JSON-lines file, skipping lines that do not parse.
    pub fn read_reports(path: impl AsRef<Path>) -> Result<Vec<DayReport>> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let mut reports = Vec::new();
        for l in reader.lines().map_while(std::result::Result::ok) {
            if let Ok(report) = serde_json::from_str::<DayReport>(&l) {
                reports.push(report);
            }
        }
        Ok(reports)
    }
}

impl<W: Write> ReportLogger<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> ReportSink for ReportLogger<W> {
    fn record(&mut self, report: &DayReport) -> Result<()> {
        let json = serde_json::to_string(report)?;
        writeln!(self.out, "{json}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
