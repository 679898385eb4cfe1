use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use read_compressibility::{CompressibilityError, Config, RunOptions, measure_files};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const R1: &str = "\
@p1 1:N:0
ACGTACGTACGTACGTACGTACGTACGT
+
IIIIIIIIIIIIIIIIIIIIIIIIIIII
@p2 1:N:0
GGGGGGGGGGGGGGGGGGGGGGGGGGGG
+
IIIIIIIIIIIIIIIIIIIIIIIIIIII
@p3 1:N:0
GATTACAGATTACA
+
IIIIIIIIIIIIII
";

const R2: &str = "\
@p1 2:N:0
TTTTTTTTTTTTTTTTTTTTTTTTTTTT
+
IIIIIIIIIIIIIIIIIIIIIIIIIIII
@p2 2:N:0
CCCCCCCCCCCCCCCCCCCCCCCCCCCC
+
IIIIIIIIIIIIIIIIIIIIIIIIIIII
@p3 2:N:0
TGTAATCTGTAATC
+
IIIIIIIIIIIIII
";

fn write_plain(path: &Path, data: &str) {
    fs::write(path, data).unwrap();
}

fn write_gz(path: &Path, data: &str) {
    let f = File::create(path).unwrap();
    let mut enc = GzEncoder::new(f, Compression::fast());
    enc.write_all(data.as_bytes()).unwrap();
    enc.finish().unwrap();
}

fn read_gz(path: &Path) -> String {
    let mut out = String::new();
    MultiGzDecoder::new(File::open(path).unwrap())
        .read_to_string(&mut out)
        .unwrap();
    out
}

fn config(inputs: Vec<PathBuf>, output: PathBuf) -> Config {
    Config {
        inputs,
        output: Some(output),
        options: RunOptions::new(0, true),
    }
}

#[test]
fn gz_and_plain_produce_identical_rows() {
    let dir = tempdir().unwrap();
    let plain_in = dir.path().join("r1.fastq");
    let gz_in = dir.path().join("r1.fastq.gz");
    write_plain(&plain_in, R1);
    write_gz(&gz_in, R1);

    let plain_out = dir.path().join("plain.tsv");
    let gz_out = dir.path().join("gz.tsv.gz");

    let a = measure_files(&config(vec![plain_in], plain_out.clone())).unwrap();
    let b = measure_files(&config(vec![gz_in], gz_out.clone())).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.reads, 3);
    assert_eq!(a.lines, 12);

    let plain_rows = fs::read_to_string(&plain_out).unwrap();
    assert_eq!(plain_rows.lines().count(), 3);
    assert_eq!(read_gz(&gz_out), plain_rows);
}

#[test]
fn paired_inputs_may_mix_gz_and_plain() {
    let dir = tempdir().unwrap();
    let r1 = dir.path().join("r1.fq.gz");
    let r2 = dir.path().join("r2.fq");
    write_gz(&r1, R1);
    write_plain(&r2, R2);

    let out = dir.path().join("rows.tsv");
    let counters = measure_files(&config(vec![r1, r2], out.clone())).unwrap();
    assert_eq!(counters.reads, 3);

    let rows = fs::read_to_string(&out).unwrap();
    let names: Vec<&str> = rows
        .lines()
        .map(|l| l.split('\t').next().unwrap())
        .collect();
    assert_eq!(names, ["p1", "p2", "p3"]);
}

#[test]
fn rows_before_a_failure_are_kept_in_gz_output() {
    let dir = tempdir().unwrap();
    let r1 = dir.path().join("r1.fq");
    let r2 = dir.path().join("r2.fq");
    write_plain(&r1, R1);
    write_plain(&r2, &R2.replace("@p2 2:N:0", "@other 2:N:0"));

    let out = dir.path().join("rows.tsv.gz");
    let err = measure_files(&config(vec![r1, r2], out.clone())).unwrap_err();
    assert!(matches!(
        err,
        CompressibilityError::NameMismatch { line: 5, stream: 1, .. }
    ));

    let rows = read_gz(&out);
    assert_eq!(rows.lines().count(), 1);
    assert!(rows.starts_with("p1\t28\t"));
}

#[test]
fn missing_input_is_an_open_failure() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.fq.gz");
    let out = dir.path().join("rows.tsv");
    let err = measure_files(&config(vec![missing.clone()], out)).unwrap_err();
    match err {
        CompressibilityError::Open { path, .. } => assert_eq!(path, missing),
        other => panic!("expected open failure, got {other:?}"),
    }
}

#[test]
fn undecodable_gz_mate_is_an_io_error() {
    let dir = tempdir().unwrap();
    let r1 = dir.path().join("r1.fq");
    let r2 = dir.path().join("r2.fq.gz");
    write_plain(&r1, R1);
    // plain text behind a .gz suffix has no gzip header
    write_plain(&r2, R2);

    let out = dir.path().join("rows.tsv");
    let err = measure_files(&config(vec![r1, r2], out.clone())).unwrap_err();
    assert!(err.to_string().starts_with("I/O error in input 1, line 1: "));
    match err {
        CompressibilityError::Io { ctx, .. } => {
            assert_eq!(ctx.stream, 1);
            assert_eq!(ctx.line_num, 1);
        }
        other => panic!("expected I/O error, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(&out).unwrap(), "");
}
