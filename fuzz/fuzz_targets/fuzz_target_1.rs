#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate nmea_gps;

use std::io::Cursor;
use nmea_gps::{Decoder, ReplaySource};

fuzz_target!(|data: &[u8]| {
    let mut decoder = Decoder::new();
    let before = decoder.fix().clone();
    let source = ReplaySource::new(Cursor::new(data));

    for record in source {
        if let Ok(record) = record {
            decoder.decode(&record);
        }
    }

    let fix = decoder.fix();
    if fix != &before {
        assert!(fix.latitude.abs() <= 90.0);
        assert!(fix.longitude.abs() <= 180.0);
    }
});
