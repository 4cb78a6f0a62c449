//! End-to-end runs of the ingestor against temporary directories.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use data_ingest::{ArtifactPaths, IngestionConfig, Ingestor, SplitSpec, Stage};
use tempfile::TempDir;

const HEADER: &str = "gender,race_ethnicity,lunch,math_score,reading_score";

fn student_rows(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let gender = if i % 2 == 0 { "female" } else { "male" };
            let group = ["group A", "group B", "group C"][i % 3];
            format!("{gender},{group},standard,{},{}", 40 + i, 60 + (i * 7) % 40)
        })
        .collect()
}

fn write_source(dir: &Path, n: usize) -> PathBuf {
    let path = dir.join("stud.csv");
    let mut body = String::from(HEADER);
    body.push('\n');
    for row in student_rows(n) {
        body.push_str(&row);
        body.push('\n');
    }
    fs::write(&path, body).unwrap();
    path
}

fn config(source: PathBuf, artifacts_dir: PathBuf) -> IngestionConfig {
    IngestionConfig {
        source,
        artifacts: ArtifactPaths::under(artifacts_dir),
        split: SplitSpec::default(),
    }
}

/// Data lines of a CSV artifact (header checked and stripped).
fn data_lines(path: &Path) -> Vec<String> {
    let text = fs::read_to_string(path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(HEADER), "missing header in {}", path.display());
    lines.map(str::to_string).collect()
}

#[test]
fn ten_row_source_yields_eight_two_split() {
    let tmp = TempDir::new().unwrap();
    let source = write_source(tmp.path(), 10);
    let cfg = config(source, tmp.path().join("artifacts"));

    let out = Ingestor::new(cfg.clone()).run().unwrap();
    let (train_path, test_path) = out.clone().into_paths();

    assert_eq!(train_path, cfg.artifacts.train);
    assert_eq!(test_path, cfg.artifacts.test);
    assert_eq!(data_lines(&cfg.artifacts.raw).len(), 10);
    assert_eq!(data_lines(&train_path).len(), 8);
    assert_eq!(data_lines(&test_path).len(), 2);
    assert_eq!((out.raw_rows, out.train_rows, out.test_rows), (10, 8, 2));
}

#[test]
fn raw_copy_matches_source() {
    let tmp = TempDir::new().unwrap();
    let source = write_source(tmp.path(), 25);
    let cfg = config(source.clone(), tmp.path().join("artifacts"));

    Ingestor::new(cfg.clone()).run().unwrap();

    assert_eq!(
        fs::read_to_string(&cfg.artifacts.raw).unwrap(),
        fs::read_to_string(&source).unwrap()
    );
}

#[test]
fn partitions_are_disjoint_and_cover_the_source() {
    let tmp = TempDir::new().unwrap();
    let source = write_source(tmp.path(), 57);
    let cfg = config(source, tmp.path().join("artifacts"));

    Ingestor::new(cfg.clone()).run().unwrap();

    let train = data_lines(&cfg.artifacts.train);
    let test = data_lines(&cfg.artifacts.test);
    // ceil(0.2 * 57) = 12
    assert_eq!(test.len(), 12);
    assert_eq!(train.len(), 45);

    // Each generated row is unique, so set semantics are exact here.
    let train_set: HashSet<_> = train.iter().collect();
    let test_set: HashSet<_> = test.iter().collect();
    assert!(train_set.is_disjoint(&test_set));

    let mut union: Vec<String> = train.into_iter().chain(test).collect();
    let mut expected = student_rows(57);
    union.sort();
    expected.sort();
    assert_eq!(union, expected);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let tmp = TempDir::new().unwrap();
    let source = write_source(tmp.path(), 40);

    let first = config(source.clone(), tmp.path().join("first"));
    let second = config(source, tmp.path().join("second"));
    Ingestor::new(first.clone()).run().unwrap();
    Ingestor::new(second.clone()).run().unwrap();

    assert_eq!(fs::read(&first.artifacts.train).unwrap(), fs::read(&second.artifacts.train).unwrap());
    assert_eq!(fs::read(&first.artifacts.test).unwrap(), fs::read(&second.artifacts.test).unwrap());

    // Rerunning into the same directory overwrites with the same bytes.
    let before = fs::read(&first.artifacts.test).unwrap();
    Ingestor::new(first.clone()).run().unwrap();
    assert_eq!(fs::read(&first.artifacts.test).unwrap(), before);
}

#[test]
fn seed_controls_the_partition() {
    let tmp = TempDir::new().unwrap();
    let source = write_source(tmp.path(), 40);

    let a = config(source.clone(), tmp.path().join("a"));
    let mut b = config(source, tmp.path().join("b"));
    b.split.seed = 1234;

    Ingestor::new(a.clone()).run().unwrap();
    Ingestor::new(b.clone()).run().unwrap();

    assert_ne!(data_lines(&a.artifacts.test), data_lines(&b.artifacts.test));
}

#[test]
fn missing_source_fails_without_outputs() {
    let tmp = TempDir::new().unwrap();
    let artifacts = tmp.path().join("artifacts");
    let cfg = config(tmp.path().join("absent.csv"), artifacts.clone());

    let err = Ingestor::new(cfg).run().unwrap_err();

    assert_eq!(err.stage(), Stage::ReadSource);
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("absent.csv"));
    assert!(!artifacts.exists());
}

#[test]
fn nested_output_directory_is_created() {
    let tmp = TempDir::new().unwrap();
    let source = write_source(tmp.path(), 10);
    let artifacts = tmp.path().join("deep").join("nested").join("artifacts");
    assert!(!artifacts.exists());

    let cfg = config(source, artifacts.clone());
    Ingestor::new(cfg.clone()).run().unwrap();

    assert!(cfg.artifacts.raw.is_file());
    assert!(cfg.artifacts.train.is_file());
    assert!(cfg.artifacts.test.is_file());
}

#[test]
fn header_only_source_fails_at_split_after_raw_write() {
    let tmp = TempDir::new().unwrap();
    let source = write_source(tmp.path(), 0);
    let cfg = config(source, tmp.path().join("artifacts"));

    let err = Ingestor::new(cfg.clone()).run().unwrap_err();

    assert_eq!(err.stage(), Stage::Split);
    assert_eq!(err.exit_code(), 3);
    assert!(cfg.artifacts.raw.is_file());
    assert!(!cfg.artifacts.train.exists());
    assert!(!cfg.artifacts.test.exists());
}

#[test]
fn ragged_source_is_malformed() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("bad.csv");
    fs::write(&source, format!("{HEADER}\nfemale,group A,standard,72\n")).unwrap();
    let cfg = config(source, tmp.path().join("artifacts"));

    let err = Ingestor::new(cfg).run().unwrap_err();
    assert_eq!(err.stage(), Stage::ReadSource);
}

#[test]
fn custom_test_size_is_honoured() {
    let tmp = TempDir::new().unwrap();
    let source = write_source(tmp.path(), 20);
    let mut cfg = config(source, tmp.path().join("artifacts"));
    cfg.split.test_size = 0.25;

    let out = Ingestor::new(cfg).run().unwrap();
    assert_eq!((out.train_rows, out.test_rows), (15, 5));
}
