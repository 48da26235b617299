//! Driver tests writing rendered signatures to disk

use clap::Parser;
use hidl_method::cli::Cli;
use hidl_method::{driver, HidlError};
use std::fs;
use tempfile::TempDir;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("hidl-sig").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_run_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("foo.h");
    let path_str = path.to_str().unwrap();

    driver::run(&cli(&[
        "--name", "foo", "--result", "int32:x", "--backend", "native", "--namespaces",
        "--class", "BpHwFoo", "-o", path_str,
    ]))
    .unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "::android::hardware::Return<int32_t> BpHwFoo::foo();\n");
}

#[test]
fn test_run_reserved_catalogue() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reserved.txt");
    let path_str = path.to_str().unwrap();

    driver::run(&cli(&["--reserved", "android.hardware.foo@1.0::IFoo", "-o", path_str])).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written.matches("// reserved 0x0f").count(), 6);
    assert!(written.contains("Return<void> interfaceChain(interfaceChain_cb _hidl_cb);"));
    assert!(written.contains("// managed results: java.util.ArrayList<String> descriptors"));
    assert!(written.contains("Return<void> setHALInstrumentation();"));
}

#[test]
fn test_failed_run_leaves_no_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.h");
    let path_str = path.to_str().unwrap();

    let err = driver::run(&cli(&["--name", "fire", "--oneway", "--result", "int32:x", "-o", path_str]))
        .unwrap_err();
    assert!(matches!(err, HidlError::Semantic(_)));
    assert!(err.to_string().contains("oneway methods cannot have results"));
    assert!(!path.exists());
}

#[test]
fn test_run_into_missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.h");
    let path_str = path.to_str().unwrap();

    let err = driver::run(&cli(&["--name", "ping", "-o", path_str])).unwrap_err();
    assert!(matches!(err, HidlError::Io(_)));
}
