#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::expected::Expected;

#[test]
fn test_fixed() {
    let mut buffer = Buffer::fixed(8);
    assert_eq!(buffer.as_bytes(), &[0; 8], "Fixed buffers should be zeroed.");

    assert!(buffer.insert(&[1, 2, 3, 4]).is_ok());
    assert_eq!(buffer.position(), 4);
    assert!(buffer.insert(&[5, 6, 7, 8]).is_ok(), "A write that exactly fits should succeed.");
    assert_eq!(buffer.remaining(), 0);

    assert_eq!(
        buffer.insert(&[9]),
        Expected::Err(NoSpace { requested: 1, remaining: 0 }.into()),
        "Writing past the end of a fixed buffer should fail."
    );
    assert_eq!(buffer.size(), 8);
    assert_eq!(buffer.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8]);

    buffer.seek(SeekFrom::End(2));
    assert!(buffer.insert(&[0, 0, 0]).is_err(), "A partial fit should still fail.");
    assert_eq!(buffer.position(), 6, "A failed write shouldn't move the head.");
    assert_eq!(buffer.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_growable() {
    let mut buffer = Buffer::growable();
    assert!(buffer.is_empty());

    buffer.insert(b"abc").throw();
    assert_eq!(buffer.size(), 3, "The first write should allocate exactly what it needs.");
    assert!(!buffer.is_empty());

    buffer.seek(SeekFrom::Start(1));
    buffer.insert(b"XYZW").throw();
    assert_eq!(buffer.size(), 5, "Growing should only extend by the shortfall.");
    assert_eq!(buffer.as_bytes(), b"aXYZW");
    assert_eq!(buffer.position(), 5);
}

#[test]
fn test_read() {
    let mut buffer = Buffer::own(Vector::from(&b"0123456789"[..]));
    let mut out = [0_u8; 4];

    buffer.read(&mut out).throw();
    assert_eq!(&out, b"0123");
    buffer.read(&mut out).throw();
    assert_eq!(&out, b"4567");

    assert_eq!(
        buffer.read(&mut out),
        Expected::Err(OutOfBounds { requested: 4, remaining: 2 }.into()),
        "Reading past the end should fail."
    );
    assert_eq!(buffer.position(), 8, "A failed read shouldn't move the head.");

    let mut rest = [0_u8; 2];
    buffer.read(&mut rest).throw();
    assert_eq!(&rest, b"89");
}

#[test]
fn test_seek_clamps() {
    let mut buffer = Buffer::fixed(10);
    assert_eq!(buffer.seek(SeekFrom::Start(4)), 4);
    assert_eq!(buffer.seek(SeekFrom::Start(40)), 10, "Seeking past the end should clamp.");
    assert_eq!(buffer.seek(SeekFrom::End(3)), 7);
    assert_eq!(buffer.seek(SeekFrom::End(30)), 0, "Seeking before the start should clamp.");
}

#[test]
fn test_mode_flags() {
    let growable = Buffer::growable();
    assert!(growable.is_growable() && !growable.is_read_only());

    let fixed = Buffer::fixed(2);
    assert!(!fixed.is_growable() && !fixed.is_read_only());

    let read_only = Buffer::read_only(Vector::from(&b"ro"[..]));
    assert!(!read_only.is_growable() && read_only.is_read_only());
}

#[test]
fn test_read_only() {
    let mut buffer = Buffer::read_only(Vector::from(&b"data"[..]));
    assert_eq!(buffer.insert(b"x"), Expected::Err(ReadOnly.into()));

    let mut out = [0_u8; 4];
    buffer.read(&mut out).throw();
    assert_eq!(&out, b"data");
}

#[test]
fn test_clear() {
    let mut buffer = Buffer::fixed(4);
    buffer.seek(SeekFrom::End(0));
    buffer.clear();
    assert_eq!(buffer.size(), 0);
    assert_eq!(buffer.position(), 0);
    assert!(buffer.is_empty());

    buffer.insert(b"fresh").throw();
    assert_eq!(buffer.size(), 5, "A cleared buffer should allocate exactly what it needs.");
    assert!(buffer.insert(b"!").is_err(), "Clearing shouldn't make a fixed buffer growable.");
    assert_eq!(&*buffer.into_bytes(), b"fresh");
}
