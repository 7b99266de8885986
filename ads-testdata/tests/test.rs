use std::fs;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;

use ads_testdata::batch::{run_batch, GeneratedFile, TestFile, UploadTier};
use ads_testdata::error::GenError;
use ads_testdata::generate;
use ads_testdata::generator::SizedGenerator;
use ads_testdata::record::{Record, HEADER};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn seeded(seed: u64) -> SizedGenerator<StdRng> {
    SizedGenerator::with_rng(StdRng::seed_from_u64(seed), today())
}

fn read_records(path: &std::path::Path) -> Vec<Record> {
    let mut reader = ReaderBuilder::new().from_path(path).unwrap();
    reader.deserialize().map(Result::unwrap).collect()
}

#[test]
fn test_generate_small_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("x.csv");
    let actual_mb = generate(&path, 0.1).unwrap();

    let metadata = fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0);
    assert!(actual_mb > 0.0);

    let records = read_records(&path);
    assert_eq!(records.len(), 953);
}

#[test]
fn test_round_trip_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("columns.csv");
    seeded(1).generate(&path, 0.1).unwrap();

    let mut reader = ReaderBuilder::new().from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers, StringRecord::from(HEADER.to_vec()));

    let mut rows = 0;
    for row in reader.records() {
        let row = row.unwrap();
        assert_eq!(row.len(), 15);
        rows += 1;
    }
    assert_eq!(rows, 953);
}

#[test]
fn test_record_invariants() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invariants.csv");
    let report = seeded(2).generate(&path, 0.5).unwrap();
    let records = read_records(&path);
    assert_eq!(records.len() as u64, report.rows_written);

    for (index, record) in records.iter().enumerate() {
        assert_eq!(record.id, index as u64 + 1);
        assert!(record.clicks <= record.impressions);
        assert!(record.conversions <= record.clicks);
        // floor(clicks * 0.1) is zero below ten clicks
        if record.clicks < 10 {
            assert_eq!(record.conversions, 0);
        }
        assert!(record.cost_eur > Decimal::ZERO);
        assert!(record.date < today());
    }
}

#[test]
fn test_decimals_written_with_two_places() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("decimals.csv");
    seeded(3).generate(&path, 0.05).unwrap();

    let mut reader = ReaderBuilder::new().from_path(&path).unwrap();
    for row in reader.records() {
        let row = row.unwrap();
        for column in [5, 7, 12, 13, 14] {
            let value = &row[column];
            let (_, fraction) = value.split_once('.').unwrap();
            assert_eq!(fraction.len(), 2, "{} in column {}", value, HEADER[column]);
        }
    }
}

#[test]
fn test_same_row_count_different_content() {
    let dir = tempfile::tempdir().unwrap();
    let path_1 = dir.path().join("a.csv");
    let path_2 = dir.path().join("b.csv");
    seeded(10).generate(&path_1, 0.2).unwrap();
    seeded(11).generate(&path_2, 0.2).unwrap();

    let records_1 = read_records(&path_1);
    let records_2 = read_records(&path_2);
    assert_eq!(records_1.len(), records_2.len());
    assert_ne!(records_1, records_2);
}

#[test]
fn test_same_seed_same_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path_1 = dir.path().join("a.csv");
    let path_2 = dir.path().join("b.csv");
    seeded(99).generate(&path_1, 0.1).unwrap();
    seeded(99).generate(&path_2, 0.1).unwrap();
    assert_eq!(fs::read(path_1).unwrap(), fs::read(path_2).unwrap());
}

#[test]
fn test_existing_file_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reused.csv");
    seeded(4).generate(&path, 0.3).unwrap();
    seeded(4).generate(&path, 0.1).unwrap();
    assert_eq!(read_records(&path).len(), 953);
}

#[test]
fn test_batch() {
    let dir = tempfile::tempdir().unwrap();
    let files = [
        TestFile {
            name: "small.csv",
            target_mb: 0.05,
            tier: UploadTier::InlineDirect,
        },
        TestFile {
            name: "medium.csv",
            target_mb: 0.1,
            tier: UploadTier::HostingDirect,
        },
    ];
    let generated = run_batch(dir.path(), &files, &mut seeded(5)).unwrap();
    let names: Vec<_> = generated.iter().map(|file: &GeneratedFile| file.name).collect();
    assert_eq!(names, vec!["small.csv", "medium.csv"]);
    assert_eq!(generated[0].rows, 476);
    assert_eq!(generated[1].rows, 953);
    assert_eq!(generated[1].tier, UploadTier::HostingDirect);
    assert!(dir.path().join("small.csv").exists());
    assert!(dir.path().join("medium.csv").exists());
}

#[test]
fn test_batch_aborts_on_first_failure() {
    let dir = tempfile::tempdir().unwrap();
    let files = [
        TestFile {
            name: "first.csv",
            target_mb: 0.05,
            tier: UploadTier::InlineDirect,
        },
        TestFile {
            name: "broken.csv",
            target_mb: 0.0,
            tier: UploadTier::HostingDirect,
        },
        TestFile {
            name: "never.csv",
            target_mb: 0.05,
            tier: UploadTier::IntermediateStorage,
        },
    ];
    let res = run_batch(dir.path(), &files, &mut seeded(6));
    assert!(matches!(res, Err(GenError::InvalidTargetSize(_))));
    assert!(dir.path().join("first.csv").exists());
    assert!(!dir.path().join("broken.csv").exists());
    assert!(!dir.path().join("never.csv").exists());
}
