//! End-to-end runs of the file level operations against a scratch directory.

use std::fs;
use std::path::PathBuf;

use huffcode::compression::compress::{decode_file, encode_file, run, self_test};
use huffcode::tools::cli::{huffopts_from, HuffOpts};
use huffcode::HuffError;

const BOOK: &str = "It is a truth universally acknowledged, that a single man in \
possession of a good fortune, must be in want of a wife.\n\
However little known the feelings or views of such a man may be on his first \
entering a neighbourhood, this truth is so well fixed in the minds of the \
surrounding families, that he is considered the rightful property of some one \
or other of their daughters.\n";

/// Fresh scratch directory per test.
fn scratch(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("huffcode-it-{}-{}", std::process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn path(dir: &PathBuf, file: &str) -> String {
    dir.join(file).to_string_lossy().into_owned()
}

fn opts(args: &[&str]) -> HuffOpts {
    let mut full = vec!["huffcode", "-q"];
    full.extend_from_slice(args);
    huffopts_from(full).unwrap()
}

#[test]
fn encode_then_decode_files() {
    let dir = scratch("files");
    let book = path(&dir, "book.txt");
    let encoded = path(&dir, "encrypted.txt");
    let decoded = path(&dir, "decrypted.txt");
    fs::write(&book, BOOK).unwrap();

    let stats = encode_file(&opts(&["-s", &book, "-o", &encoded])).unwrap();
    let bits = fs::read_to_string(&encoded).unwrap();
    assert!(bits.chars().all(|c| c == '0' || c == '1'));
    assert_eq!(stats.bits, bits.len());
    assert_eq!(stats.chars, BOOK.chars().count());
    assert!(stats.bits < stats.chars * 8);

    let chars = decode_file(&opts(&["-d", "-s", &book, "-i", &encoded, "-o", &decoded])).unwrap();
    assert_eq!(chars, BOOK.chars().count());
    assert_eq!(fs::read_to_string(&decoded).unwrap(), BOOK);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn encode_separate_input_with_book_codes() {
    let dir = scratch("separate");
    let book = path(&dir, "book.txt");
    let begin = path(&dir, "begin.txt");
    let encoded = path(&dir, "encrypted.txt");
    let decoded = path(&dir, "decrypted.txt");
    fs::write(&book, BOOK).unwrap();
    fs::write(&begin, "a single truth\n").unwrap();

    run(&opts(&["-s", &book, "-i", &begin, "-o", &encoded])).unwrap();
    run(&opts(&["-d", "-s", &book, "-i", &encoded, "-o", &decoded])).unwrap();
    assert_eq!(fs::read_to_string(&decoded).unwrap(), "a single truth\n");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn unknown_character_aborts_encoding() {
    let dir = scratch("unknown");
    let book = path(&dir, "book.txt");
    let begin = path(&dir, "begin.txt");
    let encoded = path(&dir, "encrypted.txt");
    fs::write(&book, BOOK).unwrap();
    fs::write(&begin, "zebra").unwrap();

    match encode_file(&opts(&["-s", &book, "-i", &begin, "-o", &encoded])) {
        Err(HuffError::UnknownSymbol { symbol, position }) => {
            assert_eq!(symbol, 'z');
            assert_eq!(position, 0);
        }
        other => panic!("expected an unknown symbol, got {:?}", other),
    }
    // Nothing partial is written.
    assert!(fs::metadata(&encoded).is_err());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn truncated_file_aborts_decoding() {
    let dir = scratch("truncated");
    let book = path(&dir, "book.txt");
    let encoded = path(&dir, "encrypted.txt");
    let decoded = path(&dir, "decrypted.txt");
    fs::write(&book, "aaabbc").unwrap();
    // "aaabbc" encodes to 000111110; the last bit is missing.
    fs::write(&encoded, "00011111").unwrap();

    let result = decode_file(&opts(&["-d", "-s", &book, "-i", &encoded, "-o", &decoded]));
    assert!(matches!(result, Err(HuffError::TruncatedStream { .. })));
    assert!(fs::metadata(&decoded).is_err());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn empty_source_is_rejected() {
    let dir = scratch("empty");
    let book = path(&dir, "book.txt");
    fs::write(&book, "").unwrap();

    assert!(matches!(
        run(&opts(&["-t", "-s", &book])),
        Err(HuffError::Construction)
    ));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_source_is_io_error() {
    let dir = scratch("missing");
    let book = path(&dir, "nope.txt");
    assert!(matches!(
        run(&opts(&["-t", "-s", &book])),
        Err(HuffError::Io(_))
    ));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn self_test_both_strategies() {
    let dir = scratch("selftest");
    let book = path(&dir, "book.txt");
    fs::write(&book, BOOK).unwrap();

    let resort = self_test(&opts(&["-t", "-s", &book])).unwrap();
    let heap = self_test(&opts(&["-t", "-s", &book, "--strategy", "heap"])).unwrap();
    assert_eq!(resort, heap);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn single_character_source_round_trips() {
    let dir = scratch("single");
    let book = path(&dir, "book.txt");
    let encoded = path(&dir, "encrypted.txt");
    let decoded = path(&dir, "decrypted.txt");
    fs::write(&book, "aaaa").unwrap();

    run(&opts(&["-s", &book, "-o", &encoded])).unwrap();
    assert_eq!(fs::read_to_string(&encoded).unwrap(), "0000");
    run(&opts(&["-d", "-s", &book, "-i", &encoded, "-o", &decoded])).unwrap();
    assert_eq!(fs::read_to_string(&decoded).unwrap(), "aaaa");

    fs::remove_dir_all(&dir).unwrap();
}
