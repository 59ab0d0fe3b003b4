//! Keeps the last known GPS fix of a receiver that streams *NMEA 0183*
//! sentences.
//!
//! RMC and GGA sentences are merged into a `FixState`, GSA and GSV are
//! kept as the last sentence of their kind. Records that cannot be used
//! are skipped without touching the fix.

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
#[cfg(test)]
extern crate tempfile;
extern crate arrayvec;
extern crate chrono;
#[macro_use]
extern crate log;
#[macro_use]
extern crate quick_error;

pub mod err;
#[macro_use]
mod macros;
pub mod coord;
pub mod engine;
pub mod fix;
mod lexer;
pub mod parser;
pub mod sentence;
pub mod source;
pub mod transport;

pub use engine::{Decoder, Gps, Outcome};
pub use err::{CoordinateError, DecodeError, SourceError, TransportError};
pub use fix::FixState;
pub use parser::{GgaSentence, GsaSentence, GsvSentence, RmcSentence};
pub use sentence::SentenceKind;
pub use source::ReplaySource;
pub use transport::{DeviceTransport, Transport, TransportConfig};
