//! On-disk emission verified through an independent WAV decoder.

use tonewave_core::{emit, ToneConfig};

#[test]
fn emitted_file_decodes_with_standard_parser() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("tone.wav");

    let config = ToneConfig {
        duration_seconds: 0.5,
        ..ToneConfig::default()
    };
    let report = emit(&path, &config).expect("emission should succeed");

    let reader = hound::WavReader::open(&path).expect("hound should open the file");
    let spec = reader.spec();
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);

    // Per-channel sample count recovered exactly.
    assert_eq!(u64::from(reader.duration()), report.num_frames);
    assert_eq!(u64::from(reader.duration()), config.num_frames());
}

#[test]
fn decoded_samples_match_synthesis() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("tone.wav");

    let config = ToneConfig {
        sample_rate: 8000,
        duration_seconds: 0.1,
        frequency: 100.0,
        ..ToneConfig::default()
    };
    emit(&path, &config).expect("emission should succeed");

    let mut reader = hound::WavReader::open(&path).expect("hound should open the file");
    let samples: Vec<i16> = reader
        .samples::<i16>()
        .map(|s| s.expect("sample should decode"))
        .collect();

    let expected: Vec<i16> = tonewave_core::tone::CrossfadeTone::new(&config)
        .flat_map(|(left, right)| [left, right])
        .collect();
    assert_eq!(samples, expected);
}

#[test]
fn emitting_twice_produces_byte_identical_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let first = dir.path().join("first.wav");
    let second = dir.path().join("second.wav");

    let config = ToneConfig {
        duration_seconds: 0.25,
        ..ToneConfig::default()
    };
    let report_a = emit(&first, &config).expect("emission should succeed");
    let report_b = emit(&second, &config).expect("emission should succeed");

    let bytes_a = std::fs::read(&first).expect("read back");
    let bytes_b = std::fs::read(&second).expect("read back");
    assert_eq!(bytes_a, bytes_b);
    assert_eq!(report_a.pcm_hash, report_b.pcm_hash);
}

#[test]
fn emit_reports_io_error_for_unwritable_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing").join("tone.wav");

    let err = emit(&path, &ToneConfig::default()).expect_err("parent dir does not exist");
    assert!(matches!(err, tonewave_core::ToneError::Io(_)));
}
