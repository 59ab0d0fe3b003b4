#[macro_use]
extern crate assert_matches;
extern crate chrono;
extern crate nmea_gps;
extern crate tempfile;

use chrono::NaiveDate;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use nmea_gps::parser::FixType;
use nmea_gps::{
    Decoder, DeviceTransport, GgaSentence, Gps, Outcome, SentenceKind, SourceError, TransportConfig,
    TransportError,
};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn decoder() -> Decoder {
    Decoder::seeded(NaiveDate::from_ymd_opt(2020, 1, 2).unwrap().and_hms_opt(3, 4, 5).unwrap())
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn replay_keeps_last_accepted_fix() {
    let mut dec = decoder();
    let count = dec.read_all_from(data("capture.nmea")).unwrap();

    // every non-empty line is a record, valid or not
    assert_eq!(count, 12);
    assert!(close(dec.latitude(), 48.12));
    assert!(close(dec.longitude(), 11.521667));
    assert_eq!(dec.altitude(), 550.0);
    assert!(close(dec.speed(), 18.52));
    assert_eq!(dec.timestamp(), "1994-03-23 12:35:24 UTC");

    // the last GGA in the capture is malformed and leaves its record reset
    assert_eq!(dec.gga(), &GgaSentence::default());
    assert_eq!(dec.rmc().speed, None);
    assert_eq!(dec.gsa().fix_type, Some(FixType::Fix3d));
}

#[test]
fn replay_with_carriage_returns() {
    let mut dec = decoder();
    assert_eq!(dec.read_all_from(data("crlf.nmea")).unwrap(), 2);
    assert!(close(dec.latitude(), 48.1173));
    assert_eq!(dec.altitude(), 545.4);
    assert_eq!(dec.timestamp(), "1994-03-23 12:35:20 UTC");
}

#[test]
fn missing_source_changes_nothing() {
    let mut dec = decoder();
    let before = dec.fix().clone();
    assert_matches!(
        dec.read_all_from(data("does-not-exist.nmea")),
        Err(SourceError::Open(_, _))
    );
    assert_eq!(dec.fix(), &before);
    assert_eq!(dec.timestamp(), "2020-01-02 03:04:05 UTC");
}

#[test]
fn overlong_lines_are_truncated() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    // the valid GGA is cut off before the fix quality
    writeln!(
        file,
        "noise noise noise noise noise noise noise $GPGGA,123519,4807.038,N,01131.000,E,1,08"
    ).unwrap();
    writeln!(file, "$GPGSV,1,1,00*79").unwrap();

    let mut dec = decoder();
    let before = dec.fix().clone();
    assert_eq!(dec.read_all_from(file.path()).unwrap(), 2);
    assert_eq!(dec.fix(), &before);
    assert_eq!(dec.gsv().field_count, 3);
}

#[test]
fn stream_capture_through_transport() {
    // the transport opens its device read-write, use a scratch copy
    let device = tempfile::NamedTempFile::new().unwrap();
    fs::copy(data("capture.nmea"), device.path()).unwrap();

    let transport = DeviceTransport::new(TransportConfig {
        device: device.path().to_path_buf(),
        ..TransportConfig::default()
    });
    let mut gps = Gps::with_decoder(transport, decoder()).unwrap();

    let mut outcomes = Vec::new();
    loop {
        match gps.read_one() {
            Ok(outcome) => outcomes.push(outcome),
            Err(TransportError::Closed) => break,
            Err(e) => panic!("transport failed: {}", e),
        }
    }

    // the blank line is delivered by the transport as an empty record
    assert_eq!(outcomes.len(), 13);
    assert_matches!(outcomes[0], Outcome::NotModeled(SentenceKind::Gsv));
    assert_matches!(outcomes[1], Outcome::Merged(SentenceKind::Rmc));
    assert_matches!(outcomes[3], Outcome::Recorded(SentenceKind::Gsa));
    assert_matches!(outcomes[4], Outcome::Unrecognized);
    assert_matches!(outcomes[5], Outcome::Unrecognized);
    assert_matches!(outcomes[6], Outcome::Discarded(SentenceKind::Rmc, ref e) if e.is_no_fix());
    assert_matches!(outcomes[7], Outcome::Discarded(SentenceKind::Gga, ref e) if e.is_no_fix());
    assert_matches!(outcomes[10], Outcome::Discarded(SentenceKind::Rmc, _));
    assert_matches!(outcomes[11], Outcome::Discarded(SentenceKind::Gga, _));
    assert_matches!(outcomes[12], Outcome::Unrecognized);

    assert!(close(gps.latitude(), 48.12));
    assert_eq!(gps.altitude(), 550.0);
    assert_eq!(gps.timestamp(), "1994-03-23 12:35:24 UTC");
}
