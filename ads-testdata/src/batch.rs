//! The fixed set of files used to exercise each upload path of the service
//! under test.

use std::fmt;
use std::fs;
use std::path::Path;

use log::info;
use rand::Rng;

use crate::error::GenError;
use crate::generator::SizedGenerator;

/// Transfer path a file is sized to exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadTier {
    /// Small enough to travel inline with the request.
    InlineDirect,
    /// Uploaded straight to the hosting platform's function.
    HostingDirect,
    /// Routed through intermediate cloud storage.
    IntermediateStorage,
}

impl fmt::Display for UploadTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UploadTier::InlineDirect => "JSONP direct",
            UploadTier::HostingDirect => "Netlify direct",
            UploadTier::IntermediateStorage => "Google Drive auto",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestFile {
    pub name: &'static str,
    pub target_mb: f64,
    pub tier: UploadTier,
}

pub const DEFAULT_BATCH: [TestFile; 5] = [
    TestFile {
        name: "Test_GoogleAds_100KB.csv",
        target_mb: 0.1,
        tier: UploadTier::InlineDirect,
    },
    TestFile {
        name: "GoogleAds_90jours_50MB.csv",
        target_mb: 50.0,
        tier: UploadTier::HostingDirect,
    },
    TestFile {
        name: "FacebookAds_90jours_120MB.csv",
        target_mb: 120.0,
        tier: UploadTier::IntermediateStorage,
    },
    TestFile {
        name: "Shopify_Commandes_300MB.csv",
        target_mb: 300.0,
        tier: UploadTier::IntermediateStorage,
    },
    TestFile {
        name: "Combined_AllPlatforms_600MB.csv",
        target_mb: 600.0,
        tier: UploadTier::IntermediateStorage,
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub name: &'static str,
    pub actual_mb: f64,
    pub rows: u64,
    pub tier: UploadTier,
}

/// Returns `true` when the directory had to be created.
///
/// # Errors
/// Errors when the directory cannot be created
pub fn prepare_output_dir<P: AsRef<Path>>(dir: P) -> Result<bool, GenError> {
    let dir = dir.as_ref();
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir)?;
    info!("Directory '{}' created", dir.display());
    Ok(true)
}

/// Generates every file of `files` into `dir`, in order.
///
/// # Errors
/// Stops at the first file that fails and returns its error; later files are
/// not attempted.
pub fn run_batch<P: AsRef<Path>, R: Rng>(
    dir: P,
    files: &[TestFile],
    generator: &mut SizedGenerator<R>,
) -> Result<Vec<GeneratedFile>, GenError> {
    let dir = dir.as_ref();
    let mut generated = Vec::with_capacity(files.len());
    for file in files {
        let report = generator.generate(dir.join(file.name), file.target_mb)?;
        generated.push(GeneratedFile {
            name: file.name,
            actual_mb: report.actual_size_mb(),
            rows: report.rows_written,
            tier: file.tier,
        });
    }
    Ok(generated)
}
