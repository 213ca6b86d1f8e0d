#![cfg(test)]

use std::env;
use std::fs as std_fs;
use std::path::PathBuf;
use std::process;

use super::*;
use crate::expected::Expected;
use crate::str::Str;

/// Writes `contents` to a file in the temporary directory which is removed when dropped.
struct TempFile(PathBuf);

impl TempFile {
    fn new(name: &str, contents: &[u8]) -> TempFile {
        let path = env::temp_dir().join(format!("sf-lib-{}-{name}", process::id()));
        std_fs::write(&path, contents).unwrap();
        TempFile(path)
    }

    fn path(&self) -> &str {
        self.0.to_str().unwrap()
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std_fs::remove_file(&self.0);
    }
}

#[test]
fn test_file_size() {
    let file = TempFile::new("size", b"twelve bytes");
    assert_eq!(file_size(file.path()), Expected::Ok(12));
    assert!(file_exists(file.path()));
    assert!(file_exists(Str::from_ref(file.path())), "Paths should be accepted as Str.");

    let missing = env::temp_dir().join("sf-lib-definitely-missing");
    assert_eq!(
        file_size(missing.to_str().unwrap()),
        Expected::Err(FileNotFound.into()),
        "A missing file should be reported as not found."
    );
    assert!(!file_exists(missing.to_str().unwrap()));

    assert_eq!(file_size(b"bad\0path"), Expected::Err(InvalidPath.into()));
}

#[test]
fn test_load_file() {
    let file = TempFile::new("load", b"contents");

    let mut out = [b'-'; 10];
    assert_eq!(load_file(&mut out, file.path()), Expected::Ok(8));
    assert_eq!(&out, b"contents--", "Bytes past the file should be untouched.");

    let mut small = [0_u8; 4];
    assert_eq!(
        load_file(&mut small, file.path()),
        Expected::Err(BufferTooSmall { required: 8, available: 4 }.into())
    );
}

#[test]
fn test_file_buffer() {
    let file = TempFile::new("buffer", b"\x00\x01\x02binary");

    let mut buffer = file_buffer(file.path()).throw();
    assert_eq!(buffer.size(), 9);
    assert_eq!(buffer.position(), 0);

    let mut header = [0_u8; 3];
    buffer.read(&mut header).throw();
    assert_eq!(header, [0, 1, 2]);

    let empty = TempFile::new("empty", b"");
    assert_eq!(file_buffer(empty.path()).throw().size(), 0);

    assert!(file_buffer("/sf-lib/no/such/dir/file").into_err().is_some_and(|e| e.is_file_not_found()));
}
