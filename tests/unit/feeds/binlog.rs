use std::io::Cursor;

use super::*;

fn sample(id: i32) -> EventData {
    EventData {
        id,
        event_type: 3,
        start: 1_400_000_000 + id,
        run: 42,
        status: 0,
        region: 2,
        progress: 100,
    }
}

#[test]
fn record_layout_is_little_endian_without_padding() {
    let e = EventData {
        id: 0x0102_0304,
        event_type: 0xAA,
        start: -2,
        run: 0x0A0B_0C0D,
        status: -1,
        region: 0x11,
        progress: 0x64,
    };
    let mut buf = Vec::new();
    e.write_to(&mut buf).unwrap();
    assert_eq!(buf.len(), BIN_RECORD_LEN);
    assert_eq!(
        buf,
        [
            0x04, 0x03, 0x02, 0x01, 0xAA, 0xFE, 0xFF, 0xFF, 0xFF, 0x0D, 0x0C, 0x0B, 0x0A, 0xFF,
            0x11, 0x64,
        ]
    );
}

#[test]
fn field_extremes_survive_a_round_trip() {
    let lo = EventData {
        id: i32::MIN,
        event_type: u8::MIN,
        start: i32::MIN,
        run: i32::MIN,
        status: i8::MIN,
        region: u8::MIN,
        progress: u8::MIN,
    };
    let hi = EventData {
        id: i32::MAX,
        event_type: u8::MAX,
        start: i32::MAX,
        run: i32::MAX,
        status: i8::MAX,
        region: u8::MAX,
        progress: u8::MAX,
    };
    let mut w = BinLogWriter::new(Vec::new());
    w.write(&lo).unwrap();
    w.write(&hi).unwrap();
    let (bytes, count) = w.finish().unwrap();
    assert_eq!(count, 2);
    assert_eq!(bytes.len(), 2 * BIN_RECORD_LEN);

    let back: Vec<EventData> = BinLogReader::new(Cursor::new(bytes))
        .collect::<PerspectiveResult<_>>()
        .unwrap();
    assert_eq!(back, vec![lo, hi]);
}

#[test]
fn empty_input_yields_no_records() {
    let mut r = BinLogReader::new(Cursor::new(Vec::<u8>::new()));
    assert!(r.next().is_none());
    assert!(r.next().is_none());
}

#[test]
fn truncated_record_reports_offset_and_stops() {
    let mut bytes = Vec::new();
    sample(1).write_to(&mut bytes).unwrap();
    sample(2).write_to(&mut bytes).unwrap();
    bytes.truncate(BIN_RECORD_LEN + 4);

    let mut r = BinLogReader::new(Cursor::new(bytes));
    assert_eq!(r.next().unwrap().unwrap(), sample(1));
    assert_eq!(r.offset(), BIN_RECORD_LEN as u64);
    let err = r.next().unwrap().unwrap_err();
    let msg = err.to_string();
    assert!(matches!(err, PerspectiveError::Decode(_)));
    assert!(msg.contains("4 of 16"), "{msg}");
    assert!(msg.contains("offset 16"), "{msg}");
    assert!(r.next().is_none());
}

#[test]
fn point_widens_status() {
    let e = EventData {
        status: -3,
        ..sample(9)
    };
    let p = e.point();
    assert_eq!(p.start, e.start);
    assert_eq!(p.run, 42);
    assert_eq!(p.status, -3);
    assert!(!e.is_finished());
    assert!(sample(9).is_finished());
}
