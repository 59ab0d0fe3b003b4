//! Identification of the sentence kinds this crate understands.

use std::fmt;

/// Length of a talker id plus sentence type, e.g. `GPRMC`.
pub const IDENTIFIER_LENGTH: usize = 5;

/// The sentence kinds that are routed to a decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceKind {
    /// Recommended minimum specific GPS data.
    Rmc,
    /// Global positioning system fix data.
    Gga,
    /// DOP and active satellites.
    Gsa,
    /// Satellites in view.
    Gsv,
}

impl SentenceKind {
    pub const ALL: [SentenceKind; 4] = [
        SentenceKind::Rmc,
        SentenceKind::Gga,
        SentenceKind::Gsa,
        SentenceKind::Gsv,
    ];

    /// The identifier that marks this kind inside a record.
    pub fn identifier(self) -> &'static str {
        match self {
            SentenceKind::Rmc => "GPRMC",
            SentenceKind::Gga => "GPGGA",
            SentenceKind::Gsa => "GPGSA",
            SentenceKind::Gsv => "GPGSV",
        }
    }

    /// Finds the first known identifier in `line`.
    ///
    /// The identifier does not have to start the line, a leading `$` or
    /// line noise is skipped. Returns the kind together with the byte
    /// offset of the identifier.
    pub fn locate(line: &str) -> Option<(SentenceKind, usize)> {
        SentenceKind::ALL
            .iter()
            .filter_map(|&kind| line.find(kind.identifier()).map(|pos| (kind, pos)))
            .min_by_key(|&(_, pos)| pos)
    }
}

impl fmt::Display for SentenceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
