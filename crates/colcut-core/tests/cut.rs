//! Integration tests for cutting whole sources.

use std::fs;
use std::path::PathBuf;

use colcut_core::{CutError, CutOptions, Cutter, HeaderMode, Source, cut_source};

fn cut_str(options: &CutOptions, input: &str) -> String {
    let cutter = Cutter::new(options).expect("valid options");
    let mut out = Vec::new();
    cutter.cut(input.as_bytes(), &mut out).expect("cut");
    String::from_utf8(out).expect("utf-8 output")
}

const PEOPLE: &str = "name,age\nAlice,30\nBob,25\n";

#[test]
fn named_columns_in_requested_order() {
    let out = cut_str(&CutOptions::one_based("age,name"), PEOPLE);
    insta::assert_snapshot!(out, @r"
    age,name
    30,Alice
    25,Bob
    ");
}

#[test]
fn zero_based_without_header() {
    let options = CutOptions::zero_based("0").with_header(HeaderMode::Skip);
    let out = cut_str(&options, PEOPLE);
    insta::assert_snapshot!(out, @r"
    Alice
    Bob
    ");
}

#[test]
fn repeated_column() {
    let out = cut_str(&CutOptions::one_based("1,1,1"), "a,b,c\nx,y,z\n");
    assert_eq!(out, "a,a,a\nx,x,x\n");
}

#[test]
fn reversed_range_reverses_every_line() {
    let out = cut_str(&CutOptions::one_based("3-1"), "a,b,c\n1,2,3\n4,5,6\n");
    insta::assert_snapshot!(out, @r"
    c,b,a
    3,2,1
    6,5,4
    ");
}

#[test]
fn ragged_rows_are_padded_with_empty_cells() {
    let out = cut_str(&CutOptions::one_based("-"), "a,b,c\n1,2\n\n1,2,3,4\n");
    assert_eq!(out, "a,b,c\n1,2,\n,,\n1,2,3\n");
}

#[test]
fn mixed_tokens() {
    let out = cut_str(
        &CutOptions::one_based("id,3-,1"),
        "id,name,city,zip\n7,Ann,Oslo,0150\n",
    );
    assert_eq!(out, "id,city,zip,id\n7,Oslo,0150,7\n");
}

#[test]
fn quoted_commas_stay_in_one_field() {
    let out = cut_str(
        &CutOptions::one_based("note,id"),
        "id,note\n1,\"a, b\"\n2,plain\n",
    );
    assert_eq!(out, "note,id\n\"a, b\",1\nplain,2\n");
}

#[test]
fn case_sensitive_lookup_fails() {
    let cutter = Cutter::new(&CutOptions::one_based("b")).unwrap();
    let err = cutter
        .cut("a,B,c\n1,2,3\n".as_bytes(), &mut Vec::new())
        .unwrap_err();
    assert_eq!(err.to_string(), "cannot find 'b' in header");
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn cut_source_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.csv");
    fs::write(&path, PEOPLE).unwrap();

    let mut out = Vec::new();
    let summary = cut_source(
        &Source::File(path),
        &CutOptions::one_based("2"),
        &mut out,
    )
    .unwrap();

    assert_eq!(out, b"age\n30\n25\n");
    assert_eq!(summary.rows, 2);
    assert!(summary.header_written);
}

#[test]
fn cut_source_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    let err = cut_source(
        &Source::File(path.clone()),
        &CutOptions::one_based("1"),
        &mut Vec::new(),
    )
    .unwrap_err();

    assert!(matches!(err, CutError::Open { path: ref p, .. } if *p == path));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn cut_source_opens_before_checking_spec() {
    let err = cut_source(
        &Source::File(PathBuf::from("/nonexistent/colcut/input.csv")),
        &CutOptions::default(),
        &mut Vec::new(),
    )
    .unwrap_err();
    assert!(matches!(err, CutError::Open { .. }));
}

#[test]
fn cut_source_empty_file_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "").unwrap();

    let mut out = Vec::new();
    let summary = cut_source(
        &Source::File(path),
        &CutOptions::one_based("missing"),
        &mut out,
    )
    .unwrap();

    assert!(out.is_empty());
    assert_eq!(summary.columns, 0);
}
