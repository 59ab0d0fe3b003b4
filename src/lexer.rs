use arrayvec::ArrayVec;

use err::DecodeError;
use sentence::SentenceKind;

/// Upper bound of comma separated fields in a supported sentence,
/// the identifier included.
pub const MAX_FIELDS: usize = 32;

pub type Fields<'a> = ArrayVec<[&'a str; MAX_FIELDS]>;

/// A raw record whose sentence kind has been identified.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    kind: SentenceKind,
    body: &'a str,
}

impl<'a> Record<'a> {
    /// Locate a known sentence identifier in `line`.
    /// Returns `None` if the line contains none of them.
    pub fn locate(line: &'a str) -> Option<Self> {
        let (kind, start) = SentenceKind::locate(line)?;
        let body = &line[start..];
        // the checksum is not verified, only cut off
        let body = match body.find('*') {
            Some(end) => &body[..end],
            None => body,
        };
        Some(Record {
            kind,
            body: body.trim_end_matches(&['\r', '\n'][..]),
        })
    }

    #[inline]
    pub fn kind(&self) -> SentenceKind {
        self.kind
    }

    /// Split the record into positional fields.
    /// Index 0 is the sentence identifier, empty fields are kept so
    /// positions never shift.
    pub fn fields(&self) -> Result<Fields<'a>, DecodeError> {
        let mut fields = Fields::new();
        for field in self.body.split(',') {
            if fields.try_push(field).is_err() {
                return Err(DecodeError::TooManyFields(MAX_FIELDS));
            }
        }
        Ok(fields)
    }
}
