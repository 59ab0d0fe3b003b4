//! Replay of recorded NMEA captures.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use err::SourceError;
use transport::record_from_bytes;

/// Longest record a replay yields, longer lines are truncated.
pub const MAX_RECORD_LENGTH: usize = 79;

/// Yields the non-empty lines of a capture as records.
#[derive(Debug)]
pub struct ReplaySource<R> {
    reader: R,
    buf: Vec<u8>,
}

impl ReplaySource<BufReader<File>> {
    /// Open a capture file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SourceError::Open(path.to_path_buf(), e))?;
        Ok(ReplaySource::new(BufReader::new(file)))
    }
}

impl<R: BufRead> ReplaySource<R> {
    pub fn new(reader: R) -> Self {
        ReplaySource {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for ReplaySource<R> {
    type Item = Result<String, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => (),
                Err(e) => return Some(Err(e.into())),
            }

            let mut record = record_from_bytes(&self.buf, b'\n');
            if record.trim().is_empty() {
                continue;
            }
            if record.len() > MAX_RECORD_LENGTH {
                debug!("truncating {} byte record", record.len());
                let mut end = MAX_RECORD_LENGTH;
                while !record.is_char_boundary(end) {
                    end -= 1;
                }
                record.truncate(end);
            }
            return Some(Ok(record));
        }
    }
}
