use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use chrono::{Local, NaiveDate};
use log::{debug, info};
use rand::rngs::{StdRng, ThreadRng};
use rand::{thread_rng, Rng, SeedableRng};

use crate::error::GenError;
use crate::record::{RecordSampler, HEADER};

pub const BYTES_PER_MEGABYTE: f64 = 1_048_576.0;
/// Assumed mean size of a serialized row. Never corrected during a run, so
/// the produced file only approximates the requested size.
pub const BYTES_PER_ROW: f64 = 110.0;
pub const PROGRESS_INTERVAL: u64 = 25_000;
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Receives the running row count every [`PROGRESS_INTERVAL`] rows.
pub trait Progress {
    fn rows_written(&mut self, rows: u64);
}

impl<F: FnMut(u64)> Progress for F {
    fn rows_written(&mut self, rows: u64) {
        self(rows);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl Progress for LogProgress {
    fn rows_written(&mut self, rows: u64) {
        info!("{} rows generated...", rows);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    pub rows_written: u64,
    pub file_size_bytes: u64,
}

impl GenerationReport {
    /// Size of the written file in megabytes, rounded to one decimal place.
    #[must_use]
    pub fn actual_size_mb(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let megabytes = self.file_size_bytes as f64 / BYTES_PER_MEGABYTE;
        (megabytes * 10.0).round() / 10.0
    }
}

/// # Errors
/// Errors when `target_size_mb` is not a finite number greater than zero
pub fn estimated_rows(target_size_mb: f64) -> Result<u64, GenError> {
    if !target_size_mb.is_finite() || target_size_mb <= 0.0 {
        return Err(GenError::InvalidTargetSize(target_size_mb));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rows = (target_size_mb * BYTES_PER_MEGABYTE / BYTES_PER_ROW).floor() as u64;
    Ok(rows)
}

/// Writes CSV files of random [`Record`](crate::record::Record)s sized from a
/// target in megabytes.
pub struct SizedGenerator<R> {
    rng: R,
    sampler: RecordSampler,
    progress: Box<dyn Progress>,
}

impl SizedGenerator<ThreadRng> {
    /// A generator backed by the thread-local RNG, with dates relative to today.
    #[must_use]
    pub fn new() -> Self {
        SizedGenerator::with_rng(thread_rng(), Local::now().date_naive())
    }
}

impl SizedGenerator<StdRng> {
    /// A reproducible generator: the same seed on the same day yields the
    /// same bytes.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        SizedGenerator::with_rng(StdRng::seed_from_u64(seed), Local::now().date_naive())
    }
}

impl Default for SizedGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SizedGenerator<R> {
    #[must_use]
    pub fn with_rng(rng: R, today: NaiveDate) -> Self {
        SizedGenerator {
            rng,
            sampler: RecordSampler::new(today),
            progress: Box::new(LogProgress),
        }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: impl Progress + 'static) -> Self {
        self.progress = Box::new(progress);
        self
    }

    /// Creates (or truncates) `path` and fills it with a header plus
    /// [`estimated_rows`] records.
    ///
    /// # Errors
    /// Errors on an invalid `target_size_mb`, or when the file cannot be
    /// created, written or measured. A partially written file is left behind.
    pub fn generate<P: AsRef<Path>>(
        &mut self,
        path: P,
        target_size_mb: f64,
    ) -> Result<GenerationReport, GenError> {
        let path = path.as_ref();
        let rows = estimated_rows(target_size_mb)?;
        info!(
            "Generating {} (target: {}MB)",
            path.display(),
            target_size_mb
        );
        debug!("Estimated {} rows at {} bytes per row", rows, BYTES_PER_ROW);

        {
            let file = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, File::create(path)?);
            // The header is written explicitly so an empty file still carries it.
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(file);
            writer.write_record(HEADER)?;

            for id in 1..=rows {
                let record = self.sampler.sample(id, &mut self.rng);
                writer.serialize(record)?;
                if id % PROGRESS_INTERVAL == 0 {
                    self.progress.rows_written(id);
                }
            }
            writer.flush()?;
        }

        let report = GenerationReport {
            rows_written: rows,
            file_size_bytes: fs::metadata(path)?.len(),
        };
        info!(
            "{} created: {}MB ({} rows)",
            path.display(),
            report.actual_size_mb(),
            report.rows_written
        );
        Ok(report)
    }
}

/// Generates `path` with the thread RNG and returns its size in megabytes,
/// rounded to one decimal place.
///
/// # Errors
/// See [`SizedGenerator::generate`]
pub fn generate<P: AsRef<Path>>(path: P, target_size_mb: f64) -> Result<f64, GenError> {
    SizedGenerator::new()
        .generate(path, target_size_mb)
        .map(|report| report.actual_size_mb())
}
