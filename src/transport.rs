//! The line oriented transport a receiver is read from.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Read, Write};
use std::path::PathBuf;

use err::TransportError;

/// Connection settings of a `DeviceTransport`.
///
/// Serial line settings such as the baud rate are not applied by this
/// crate, configure the device before connecting (e.g. with `stty`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Path of the character device or file to read from.
    pub device: PathBuf,
    /// Byte terminating a record.
    pub eol: u8,
    /// Longest record accepted, the delimiter excluded.
    pub max_record_length: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        TransportConfig {
            device: PathBuf::from("/dev/ttyUSB0"),
            eol: b'\n',
            max_record_length: 256,
        }
    }
}

/// A source of textual records, one per call to `read_line`.
pub trait Transport {
    fn connect(&mut self) -> Result<(), TransportError>;

    fn disconnect(&mut self);

    fn is_connected(&self) -> bool;

    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError>;

    /// Block until a complete record is available.
    /// The line delimiter and a trailing `\r` are not part of the record.
    fn read_line(&mut self) -> Result<String, TransportError>;
}

/// A transport reading from a device node.
#[derive(Debug)]
pub struct DeviceTransport {
    config: TransportConfig,
    port: Option<BufReader<File>>,
    buf: Vec<u8>,
    // set after an overlong record until its delimiter has been read
    skipping: bool,
}

impl DeviceTransport {
    pub fn new(config: TransportConfig) -> Self {
        DeviceTransport {
            config,
            port: None,
            buf: Vec::new(),
            skipping: false,
        }
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }
}

impl Transport for DeviceTransport {
    fn connect(&mut self) -> Result<(), TransportError> {
        if self.port.is_some() {
            return Ok(());
        }
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&self.config.device)
            .map_err(|e| TransportError::Open(self.config.device.clone(), e))?;
        info!("connected to {}", self.config.device.display());
        self.port = Some(BufReader::new(file));
        Ok(())
    }

    fn disconnect(&mut self) {
        self.skipping = false;
        if self.port.take().is_some() {
            info!("disconnected from {}", self.config.device.display());
        }
    }

    fn is_connected(&self) -> bool {
        self.port.is_some()
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        let port = self.port.as_mut().ok_or(TransportError::NotConnected)?;
        let file = port.get_mut();
        file.write_all(bytes)?;
        file.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, TransportError> {
        let (eol, limit) = (self.config.eol, self.config.max_record_length);
        let port = self.port.as_mut().ok_or(TransportError::NotConnected)?;
        loop {
            self.buf.clear();
            // one byte more than a record may hold, so a full record still
            // fits together with its delimiter
            if port.by_ref().take(limit as u64 + 1).read_until(eol, &mut self.buf)? == 0 {
                return Err(TransportError::Closed);
            }
            let complete = self.buf.last() == Some(&eol);

            if self.skipping {
                self.skipping = !complete;
                continue;
            }
            if !complete && self.buf.len() > limit {
                self.skipping = true;
                return Err(TransportError::RecordTooLong(limit));
            }
            return Ok(record_from_bytes(&self.buf, eol));
        }
    }
}

/// Strip the delimiter and a trailing carriage return from a raw record.
pub(crate) fn record_from_bytes(raw: &[u8], eol: u8) -> String {
    let mut raw = raw;
    if raw.last() == Some(&eol) {
        raw = &raw[..raw.len() - 1];
    }
    if raw.last() == Some(&b'\r') {
        raw = &raw[..raw.len() - 1];
    }
    String::from_utf8_lossy(raw).into_owned()
}
