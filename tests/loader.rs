use fastload::utils::app_dirs::app_data_dir;
use fastload::{load_archive, load_archive_with, load_file, load_file_with, ReadKind};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

fn write_gz(path: &Path, content: &[u8]) {
    let mut encoder =
        GzEncoder::new(fs::File::create(path).expect("create gz"), Compression::default());
    encoder.write_all(content).expect("write gz");
    encoder.finish().expect("finish gz");
}

// Archive loading decompresses under the real platform data directory, so
// every test gets its own namespace; tests run in parallel.
fn temp_gz_dir(namespace: &str) -> PathBuf {
    app_data_dir(namespace).expect("app data dir").join("tmp_gz")
}

fn assert_no_leftover_temp(namespace: &str) {
    let leftover: Vec<_> = fs::read_dir(temp_gz_dir(namespace))
        .map(|entries| entries.flatten().collect())
        .unwrap_or_default();
    assert!(leftover.is_empty(), "temporary files left behind: {leftover:?}");
}

fn cleanup_namespace(namespace: &str) {
    if let Ok(dir) = app_data_dir(namespace) {
        let _ = fs::remove_dir_all(dir);
    }
}

#[test]
fn loads_a_two_record_fasta_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("reads.fasta");
    fs::write(&path, ">r1\nACGT\n>r2\nTTTT\n").expect("write fasta");

    let collection = load_file(&path).expect("load fasta");
    assert_eq!(collection.kind, ReadKind::Fasta);
    assert_eq!(collection.names, vec!["r1", "r2"]);
    assert_eq!(collection.sequences, vec!["ACGT", "TTTT"]);
    assert_eq!(collection.qualities, vec![vec![0; 4], vec![0; 4]]);
    assert!(!collection.was_archived);
}

#[test]
fn loads_plain_fa_and_fastq_files() {
    let dir = tempfile::tempdir().expect("tempdir");

    let fa = dir.path().join("genome.fa");
    fs::write(&fa, ">chr1\nACGTACGT\n").expect("write fa");
    let collection = load_file(&fa).expect("load fa");
    assert_eq!(collection.kind, ReadKind::Fasta);
    assert_eq!(collection.sequences, vec!["ACGTACGT"]);

    let fastq = dir.path().join("reads.fastq");
    fs::write(&fastq, "@r1\nACGT\n+\n!!!!\n").expect("write fastq");
    let collection = load_file(&fastq).expect("load fastq");
    assert_eq!(collection.kind, ReadKind::Fastq);
    assert_eq!(collection.sequences, vec!["ACGT"]);
    assert_eq!(collection.qualities, vec![vec![0, 0, 0, 0]]);
}

#[test]
fn unsupported_extension_reports_the_fixed_message() {
    let messages = RefCell::new(Vec::new());
    let on_error = |msg: &str| messages.borrow_mut().push(msg.to_string());

    let loaded = load_file_with("reads.sam", Some(&on_error));
    assert!(loaded.is_none());
    assert_eq!(*messages.borrow(), vec!["Unsupported file type"]);
}

#[test]
fn archived_fastq_routes_to_the_fastq_parser() {
    let namespace = "fastload-tests-fastq-gz";
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("reads.fastq.gz");
    write_gz(&path, b"@r1\nACGT\n+\n!!!!\n@r2\nTT\nsep\nI~\n");

    let collection = load_archive(&path, namespace).expect("load archive");
    assert_eq!(collection.kind, ReadKind::Fastq);
    assert!(collection.was_archived);
    assert_eq!(collection.names, vec!["r1", "r2"]);
    assert_eq!(collection.qualities, vec![vec![0, 0, 0, 0], vec![40, 93]]);

    // The decompressed temporary is gone once the call returns.
    assert_no_leftover_temp(namespace);
    cleanup_namespace(namespace);
}

#[test]
fn archived_fasta_keeps_zero_qualities() {
    let namespace = "fastload-tests-fa-gz";
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("genome.fa.gz");
    write_gz(&path, b">chr1\nACGT\nACGT\n");

    let collection = load_archive(&path, namespace).expect("load archive");
    assert_eq!(collection.kind, ReadKind::Fasta);
    assert!(collection.was_archived);
    assert_eq!(collection.sequences, vec!["ACGTACGT"]);
    assert_eq!(collection.qualities, vec![vec![0; 8]]);

    assert_no_leftover_temp(namespace);
    cleanup_namespace(namespace);
}

#[test]
fn unsupported_inner_extension_is_rejected_before_any_temp_file() {
    let namespace = "fastload-tests-txt-gz";
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("reads.txt.gz");
    write_gz(&path, b"not a read file\n");

    let messages = RefCell::new(Vec::new());
    let on_error = |msg: &str| messages.borrow_mut().push(msg.to_string());

    let loaded = load_archive_with(&path, namespace, Some(&on_error));
    assert!(loaded.is_none());
    assert_eq!(*messages.borrow(), vec!["Unsupported file type"]);

    // Rejection happens before the temp directory is ever touched.
    assert_no_leftover_temp(namespace);
    cleanup_namespace(namespace);
}

#[test]
fn malformed_archived_fastq_still_cleans_up_its_temp_file() {
    let namespace = "fastload-tests-truncated-gz";
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("truncated.fastq.gz");
    write_gz(&path, b"@r1\nACGT\n");

    let loaded = load_archive_with(&path, namespace, None);
    assert!(loaded.is_none());

    assert_no_leftover_temp(namespace);
    cleanup_namespace(namespace);
}
