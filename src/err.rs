use chrono;
use std::path::PathBuf;
use std::{io, num};

use sentence::SentenceKind;

quick_error! {
    #[derive(Debug)]
    pub enum DecodeError {
        MissingField(field: &'static str) {
            description("Missing field")
            display("Field \"{}\" is missing or empty", field)
        }
        TooManyFields(capacity: usize) {
            description("Too many fields")
            display("Sentence has more than {} fields", capacity)
        }
        Float(err: num::ParseFloatError) {
            from()
            description("Float parsing error")
            display("Could not parse field as float: {}", err)
            cause(err)
        }
        Int(err: num::ParseIntError) {
            from()
            description("Integer parsing error")
            display("Could not parse field as integer: {}", err)
            cause(err)
        }
        Time(err: chrono::format::ParseError) {
            from()
            description("Time parsing error")
            display("Failed to parse field as time or date: {}", err)
            cause(err)
        }
        InvalidChar(field: &'static str, value: String) {
            description("Invalid character field")
            display("Field \"{}\" has unexpected value \"{}\"", field, value)
        }
        InvalidValue(field: &'static str) {
            description("Invalid value")
            display("Field \"{}\" is out of range", field)
        }
        Coordinate(err: CoordinateError) {
            from()
            description("Coordinate parsing error")
            display("Could not convert field to coordinate: {}", err)
            cause(err)
        }
        NoFix(kind: SentenceKind) {
            description("No fix")
            display("{} sentence reports that no fix is available", kind)
        }
    }
}

impl DecodeError {
    /// Returns `true` if the sentence was well-formed but reported an
    /// unusable fix.
    pub fn is_no_fix(&self) -> bool {
        match *self {
            DecodeError::NoFix(_) => true,
            _ => false,
        }
    }
}

quick_error! {
    #[derive(Debug)]
    pub enum CoordinateError {
        NotFinite(val: f64) {
            description("Coordinate is not finite")
            display("Coordinate {} is not a finite number", val)
        }
        Negative(val: f64) {
            description("Negative coordinate")
            display("Coordinate {} is negative, the sign belongs in the hemisphere field", val)
        }
        OutOfRange(val: f64, max: f64) {
            description("Invalid coordinate")
            display("Invalid coordinate: {} should be between {} and {}", val, max*-1.0, max)
        }
    }
}

quick_error! {
    #[derive(Debug)]
    pub enum TransportError {
        NotConnected {
            description("Not connected")
            display("Transport is not connected")
        }
        Closed {
            description("Transport closed")
            display("Transport reached end of stream")
        }
        RecordTooLong(limit: usize) {
            description("Record too long")
            display("Record exceeds {} bytes without a delimiter, skipping to the next one", limit)
        }
        Open(device: PathBuf, err: io::Error) {
            description("Could not open device")
            display("Could not open device {}: {}", device.display(), err)
            cause(err)
        }
        Io(err: io::Error) {
            from()
            description("I/O error")
            display("Encountered I/O error on transport: {}", err)
            cause(err)
        }
    }
}

quick_error! {
    #[derive(Debug)]
    pub enum SourceError {
        Open(path: PathBuf, err: io::Error) {
            description("Could not open source")
            display("Could not open replay source {}: {}", path.display(), err)
            cause(err)
        }
        Read(err: io::Error) {
            from()
            description("Could not read source")
            display("Encountered I/O error while replaying: {}", err)
            cause(err)
        }
    }
}
