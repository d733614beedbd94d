use bzip2::read::BzDecoder;
use std::fs;
use std::io::Read;
use wartsy_format::{HopFlags, Record, Value};
use wartsy_writer::{Builder, Compression};

/// Walk the frames of a capture, asserting header invariants and returning
/// the object type codes in stream order.
fn frame_types(capture: &[u8]) -> Vec<u16> {
    let mut offset = 0;
    let mut types = Vec::new();
    while offset < capture.len() {
        let magic = u16::from_be_bytes(capture[offset..offset + 2].try_into().unwrap());
        assert_eq!(0x1205, magic);
        let typ = u16::from_be_bytes(capture[offset + 2..offset + 4].try_into().unwrap());
        let len =
            u32::from_be_bytes(capture[offset + 4..offset + 8].try_into().unwrap()) as usize;
        types.push(typ);
        offset += 8 + len;
    }
    assert_eq!(capture.len(), offset);
    types
}

fn sample_ping() -> Record {
    let mut ping = Record::ping();
    ping.merge([
        ("listid", Value::from(1_u32)),
        ("srcaddr", Value::from("192.0.2.1")),
        ("dstaddr", Value::from("198.51.100.7")),
        ("timeval", Value::from(1_500_000_000.5)),
    ])
    .unwrap();
    ping.add_reply([
        ("rtt", Value::from(1234_u32)),
        ("addr", Value::from("198.51.100.7")),
    ])
    .unwrap();
    ping
}

fn sample_trace() -> Record {
    let mut trace = Record::trace();
    trace
        .merge([
            ("listid", Value::from(1_u32)),
            ("srcaddr", Value::from("192.0.2.1")),
            ("dstaddr", Value::from("198.51.100.1")),
            ("tracetyp", Value::from(5_u8)),
        ])
        .unwrap();
    for ttl in 1_u8..=3 {
        trace
            .add_reply([
                ("probettl", Value::from(ttl)),
                ("rtt", Value::from(u32::from(ttl) * 900)),
                ("hopflags", Value::from(HopFlags::REPLY_TTL.bits())),
                ("addr", Value::from("10.0.0.1")),
            ])
            .unwrap();
    }
    trace
}

#[test]
fn test_fresh_capture() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("capture.warts");
    let mut writer = Builder::new(&path).build()?;
    writer.write_list(1, 1, "yarrp")?;
    writer.write_cycle(1, 1, 1, 1_500_000_000)?;
    writer.write_record(&mut sample_trace())?;
    writer.write_record(&mut sample_ping())?;
    writer.write_cycle_stop(1, 1_500_000_600)?;
    writer.finish()?;

    let capture = fs::read(&path)?;
    assert_eq!(vec![0x01, 0x03, 0x06, 0x07, 0x04], frame_types(&capture));
    Ok(())
}

#[test]
fn test_no_overwrite_falls_back_to_append() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("capture.warts");

    let mut writer = Builder::new(&path).build()?;
    writer.write_list(1, 1, "yarrp")?;
    writer.write_record(&mut sample_ping())?;
    writer.finish()?;

    // second run: destination exists, no-overwrite policy appends and the
    // list record is not duplicated
    let mut writer = Builder::new(&path).overwrite(false).build()?;
    assert!(writer.is_append());
    writer.write_list(1, 1, "yarrp")?;
    writer.write_record(&mut sample_ping())?;
    writer.finish()?;

    let capture = fs::read(&path)?;
    assert_eq!(vec![0x01, 0x07, 0x07], frame_types(&capture));
    Ok(())
}

#[test]
fn test_explicit_append_to_missing_file_creates_it() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("capture.warts");
    let mut writer = Builder::new(&path).append(true).build()?;
    writer.write_list(1, 1, "yarrp")?;
    writer.write_record(&mut sample_ping())?;
    writer.finish()?;

    // appending suppressed the list record
    let capture = fs::read(&path)?;
    assert_eq!(vec![0x07], frame_types(&capture));
    Ok(())
}

#[test]
fn test_bz2_suffix_selects_compression() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("capture.warts.bz2");
    let mut writer = Builder::new(&path).build()?;
    writer.write_list(1, 1, "yarrp")?;
    writer.write_record(&mut sample_ping())?;
    writer.finish()?;

    let raw = fs::read(&path)?;
    assert_eq!(b"BZh", &raw[..3]);

    let mut capture = Vec::new();
    BzDecoder::new(raw.as_slice()).read_to_end(&mut capture)?;
    assert_eq!(vec![0x01, 0x07], frame_types(&capture));
    Ok(())
}

#[test]
fn test_explicit_compression_without_suffix() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("capture.warts");
    let mut writer = Builder::new(&path)
        .compression(Compression::Bzip2)
        .build()?;
    writer.write_list(1, 1, "yarrp")?;
    writer.finish()?;

    let raw = fs::read(&path)?;
    assert_eq!(b"BZh", &raw[..3]);
    Ok(())
}
