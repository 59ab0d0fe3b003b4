//! Routing of records to the sentence decoders and merging into the fix.

use chrono::NaiveDateTime;
use std::path::Path;

use err::{DecodeError, SourceError, TransportError};
use fix::FixState;
use lexer::Record;
use parser::{GgaSentence, GsaSentence, GsvSentence, RmcSentence};
use sentence::SentenceKind;
use source::ReplaySource;
use transport::Transport;

/// What happened to a single record.
#[derive(Debug)]
pub enum Outcome {
    /// The sentence carried a fix that was merged.
    Merged(SentenceKind),
    /// The sentence was decoded into its record, the fix is not affected.
    Recorded(SentenceKind),
    /// The sentence was recognized but its contents are not modeled.
    NotModeled(SentenceKind),
    /// The sentence was dropped, the fix is unchanged.
    Discarded(SentenceKind, DecodeError),
    /// None of the known identifiers was found.
    Unrecognized,
}

impl Outcome {
    /// The kind of the processed sentence, `None` for unrecognized records.
    pub fn kind(&self) -> Option<SentenceKind> {
        match *self {
            Outcome::Merged(kind)
            | Outcome::Recorded(kind)
            | Outcome::NotModeled(kind)
            | Outcome::Discarded(kind, _) => Some(kind),
            Outcome::Unrecognized => None,
        }
    }
}

/// Decodes records and keeps the merged fix together with the last
/// sentence of every kind.
#[derive(Debug, Clone)]
pub struct Decoder {
    fix: FixState,
    rmc: RmcSentence,
    gga: GgaSentence,
    gsa: GsaSentence,
    gsv: GsvSentence,
}

impl Decoder {
    /// Create a decoder whose fix is seeded with the current UTC time.
    pub fn new() -> Self {
        Decoder::with_fix(FixState::new())
    }

    pub fn seeded(time: NaiveDateTime) -> Self {
        Decoder::with_fix(FixState::seeded(time))
    }

    fn with_fix(fix: FixState) -> Self {
        Decoder {
            fix,
            rmc: RmcSentence::default(),
            gga: GgaSentence::default(),
            gsa: GsaSentence::default(),
            gsv: GsvSentence::default(),
        }
    }

    /// Route and decode one record.
    ///
    /// Invalid, malformed and unknown records never change the fix, the
    /// reason is reported in the returned `Outcome`.
    pub fn decode(&mut self, line: &str) -> Outcome {
        trace!("record {:?}", line);
        let record = match Record::locate(line) {
            Some(record) => record,
            None => {
                debug!("skipping unrecognized record {:?}", line);
                return Outcome::Unrecognized;
            }
        };

        let kind = record.kind();
        match self.apply(&record) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!("discarding {} sentence: {}", kind, err);
                Outcome::Discarded(kind, err)
            }
        }
    }

    fn apply(&mut self, record: &Record) -> Result<Outcome, DecodeError> {
        let kind = record.kind();
        match kind {
            SentenceKind::Rmc => {
                self.rmc = RmcSentence::default();
                self.rmc = RmcSentence::parse(&record.fields()?)?;
                let fix = self.rmc.fix()?;
                self.fix.apply_rmc(&fix);
                Ok(Outcome::Merged(kind))
            }
            SentenceKind::Gga => {
                self.gga = GgaSentence::default();
                self.gga = GgaSentence::parse(&record.fields()?)?;
                let fix = self.gga.fix()?;
                self.fix.apply_gga(&fix);
                Ok(Outcome::Merged(kind))
            }
            SentenceKind::Gsa => {
                self.gsa = GsaSentence::default();
                self.gsa = GsaSentence::parse(&record.fields()?)?;
                Ok(Outcome::Recorded(kind))
            }
            SentenceKind::Gsv => {
                self.gsv = GsvSentence::default();
                self.gsv = GsvSentence::parse(&record.fields()?)?;
                Ok(Outcome::NotModeled(kind))
            }
        }
    }

    /// Decode every record of `source`.
    /// Returns the number of records processed.
    pub fn read_all<I>(&mut self, source: I) -> Result<usize, SourceError>
    where
        I: IntoIterator<Item = Result<String, SourceError>>,
    {
        let (mut count, mut merged) = (0, 0);
        for record in source {
            if let Outcome::Merged(_) = self.decode(&record?) {
                merged += 1;
            }
            count += 1;
        }
        info!("replayed {} records, {} merged into the fix", count, merged);
        Ok(count)
    }

    /// Replay a capture file.
    /// Nothing is decoded if the file cannot be opened.
    pub fn read_all_from<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, SourceError> {
        let source = ReplaySource::open(path)?;
        self.read_all(source)
    }

    pub fn fix(&self) -> &FixState {
        &self.fix
    }

    pub fn latitude(&self) -> f32 {
        self.fix.latitude
    }

    pub fn longitude(&self) -> f32 {
        self.fix.longitude
    }

    /// Speed over ground in km/h.
    pub fn speed(&self) -> f32 {
        self.fix.speed
    }

    /// Altitude in meters.
    pub fn altitude(&self) -> f32 {
        self.fix.altitude
    }

    /// The time of the fix as `YYYY-MM-DD HH:MM:SS UTC`.
    pub fn timestamp(&self) -> String {
        self.fix.timestamp()
    }

    pub fn rmc(&self) -> &RmcSentence {
        &self.rmc
    }

    pub fn gga(&self) -> &GgaSentence {
        &self.gga
    }

    pub fn gsa(&self) -> &GsaSentence {
        &self.gsa
    }

    pub fn gsv(&self) -> &GsvSentence {
        &self.gsv
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder::new()
    }
}

/// A GPS receiver attached through a `Transport`.
///
/// Reading is blocking and the decoder is not synchronized, callers that
/// query from another thread have to wrap the receiver in a lock.
/// The transport is disconnected when the receiver is dropped.
#[derive(Debug)]
pub struct Gps<T: Transport> {
    transport: T,
    decoder: Decoder,
}

impl<T: Transport> Gps<T> {
    /// Connect `transport` and start with an empty fix.
    pub fn new(transport: T) -> Result<Self, TransportError> {
        Gps::with_decoder(transport, Decoder::new())
    }

    pub fn with_decoder(mut transport: T, decoder: Decoder) -> Result<Self, TransportError> {
        transport.connect()?;
        Ok(Gps { transport, decoder })
    }

    /// Read and decode one record from the transport.
    pub fn read_one(&mut self) -> Result<Outcome, TransportError> {
        let line = self.transport.read_line()?;
        Ok(self.decoder.decode(&line))
    }

    /// Replay a capture file into the fix of this receiver.
    pub fn read_all_from<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, SourceError> {
        self.decoder.read_all_from(path)
    }

    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn latitude(&self) -> f32 {
        self.decoder.latitude()
    }

    pub fn longitude(&self) -> f32 {
        self.decoder.longitude()
    }

    pub fn speed(&self) -> f32 {
        self.decoder.speed()
    }

    pub fn altitude(&self) -> f32 {
        self.decoder.altitude()
    }

    pub fn timestamp(&self) -> String {
        self.decoder.timestamp()
    }
}

impl<T: Transport> Drop for Gps<T> {
    fn drop(&mut self) {
        self.transport.disconnect();
    }
}
