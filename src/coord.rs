//! Conversion of NMEA `ddmm.mmmm` coordinates to decimal degrees.

use std::fmt;

use err::CoordinateError;

const ABS_MAX_LAT: f64 = 90.0;
const ABS_MAX_LONG: f64 = 180.0;

/// The axis a coordinate belongs to. Selects the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    #[inline]
    fn abs_max(self) -> f64 {
        match self {
            Axis::Latitude => ABS_MAX_LAT,
            Axis::Longitude => ABS_MAX_LONG,
        }
    }
}

/// The cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardDir {
    North,
    South,
    East,
    West,
}

impl CardDir {
    /// Parses a hemisphere letter valid for `axis`.
    pub fn from_letter(letter: char, axis: Axis) -> Option<Self> {
        match (axis, letter) {
            (Axis::Latitude, 'N') => Some(CardDir::North),
            (Axis::Latitude, 'S') => Some(CardDir::South),
            (Axis::Longitude, 'E') => Some(CardDir::East),
            (Axis::Longitude, 'W') => Some(CardDir::West),
            _ => None,
        }
    }

    #[inline]
    pub fn get_sign(self) -> f64 {
        match self {
            CardDir::North | CardDir::East => 1.0,
            CardDir::South | CardDir::West => -1.0,
        }
    }
}

/// Converts an unsigned NMEA coordinate (`ddmm.mmmm` for latitude,
/// `dddmm.mmmm` for longitude) to decimal degrees.
///
/// The hemisphere sign is not applied here, see [`signed`](fn.signed.html).
pub fn nmea_to_decimal(value: f64, axis: Axis) -> Result<f64, CoordinateError> {
    if !value.is_finite() {
        return Err(CoordinateError::NotFinite(value));
    }
    if value < 0.0 {
        return Err(CoordinateError::Negative(value));
    }

    let degrees = (value / 100.0).floor();
    let minutes = value - degrees * 100.0;
    let dec_deg = degrees + minutes / 60.0;
    if dec_deg > axis.abs_max() {
        return Err(CoordinateError::OutOfRange(dec_deg, axis.abs_max()));
    }
    Ok(dec_deg)
}

/// Converts `value` and applies the sign of the hemisphere `dir`.
#[inline]
pub fn signed(value: f64, axis: Axis, dir: CardDir) -> Result<f64, CoordinateError> {
    Ok(nmea_to_decimal(value, axis)? * dir.get_sign())
}

/// A coordinate split into degrees, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees, carrying the sign of the coordinate.
    pub degrees: i16,
    pub minutes: u8,
    pub seconds: f32,
    /// Set for coordinates south of the equator or west of Greenwich.
    pub negative: bool,
}

impl Dms {
    pub fn from_decimal(decimal: f64) -> Self {
        let abs = decimal.abs();
        let degrees = abs.trunc();
        let total_min = (abs - degrees) * 60.0;
        let minutes = total_min.trunc();
        let seconds = (total_min - minutes) * 60.0;
        let negative = decimal < 0.0;

        Dms {
            degrees: if negative { -(degrees as i16) } else { degrees as i16 },
            minutes: minutes as u8,
            seconds: seconds as f32,
            negative,
        }
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.negative && self.degrees == 0 {
            f.write_str("-")?;
        }
        write!(f, "{}°{}'{:.1}\"", self.degrees, self.minutes, self.seconds)
    }
}
