//! This module provides decoders for the *RMC*, *GGA*, *GSA* and *GSV*
//! sentences of the *NMEA 0183* protocol.
//!
//! Every decoder turns the positional fields of one record into a sentence
//! record. Sentences that feed the merged fix (RMC and GGA) are validated
//! separately, see `RmcSentence::fix` and `GgaSentence::fix`, so a record
//! is always decoded completely before anything is merged.

use chrono::{NaiveDate, NaiveTime};
use std::str::FromStr;

use coord::{self, Axis, CardDir};
use err::DecodeError;
use sentence::SentenceKind;

/// Factor from knots to kilometers per hour.
pub const KNOTS_TO_KMH: f32 = 1.852;

/// Position and meaning of a field inside a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub index: usize,
    pub name: &'static str,
}

/// Field layout of the RMC sentence.
pub mod rmc {
    use super::Field;

    pub const UTC: Field = Field { index: 1, name: "utc" };
    pub const STATUS: Field = Field { index: 2, name: "status" };
    pub const LAT: Field = Field { index: 3, name: "latitude" };
    pub const LAT_DIR: Field = Field { index: 4, name: "latitude hemisphere" };
    pub const LONG: Field = Field { index: 5, name: "longitude" };
    pub const LONG_DIR: Field = Field { index: 6, name: "longitude hemisphere" };
    pub const SPEED: Field = Field { index: 7, name: "speed" };
    pub const COURSE: Field = Field { index: 8, name: "course" };
    pub const DATE: Field = Field { index: 9, name: "date" };
    pub const MAG_VAR: Field = Field { index: 10, name: "magnetic variation" };
    pub const MAG_VAR_DIR: Field = Field { index: 11, name: "magnetic variation direction" };
}

/// Field layout of the GGA sentence.
pub mod gga {
    use super::Field;

    pub const UTC: Field = Field { index: 1, name: "utc" };
    pub const LAT: Field = Field { index: 2, name: "latitude" };
    pub const LAT_DIR: Field = Field { index: 3, name: "latitude hemisphere" };
    pub const LONG: Field = Field { index: 4, name: "longitude" };
    pub const LONG_DIR: Field = Field { index: 5, name: "longitude hemisphere" };
    pub const QUALITY: Field = Field { index: 6, name: "fix quality" };
    pub const SAT_VIEW: Field = Field { index: 7, name: "satellites" };
    pub const HDOP: Field = Field { index: 8, name: "hdop" };
    pub const ALTITUDE: Field = Field { index: 9, name: "altitude" };
    pub const ALTITUDE_UNIT: Field = Field { index: 10, name: "altitude unit" };
    pub const GEO_SEP: Field = Field { index: 11, name: "geoidal separation" };
    pub const GEO_SEP_UNIT: Field = Field { index: 12, name: "geoidal separation unit" };
    pub const AGE: Field = Field { index: 13, name: "dgps age" };
    pub const STATION_ID: Field = Field { index: 14, name: "dgps station id" };
}

/// Field layout of the GSA sentence. The satellite ids in fields 3 to 14
/// are not decoded.
pub mod gsa {
    use super::Field;

    pub const MODE: Field = Field { index: 1, name: "mode" };
    pub const FIX_TYPE: Field = Field { index: 2, name: "fix type" };
    pub const PDOP: Field = Field { index: 15, name: "pdop" };
    pub const HDOP: Field = Field { index: 16, name: "hdop" };
    pub const VDOP: Field = Field { index: 17, name: "vdop" };
}

/// Status field of the RMC sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Valid,
    Invalid,
}

/// Indicator of the quality of gps data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpsQualityInd {
    FixNotAvailable,
    GpsFix,
    DifferentialGpsFix,
    PpsFix,
    RealTimeKinematic,
    FloatRtk,
    Estimated,
    ManualInputMode,
    SimulationMode,
}

impl GpsQualityInd {
    /// Takes an integer in the range `0..=8` and returns the corresponding
    /// `GpsQualityInd`.
    /// Else `DecodeError::InvalidValue` is returned.
    #[inline]
    fn try_from_u8(int: u8) -> Result<Self, DecodeError> {
        match int {
            0 => Ok(GpsQualityInd::FixNotAvailable),
            1 => Ok(GpsQualityInd::GpsFix),
            2 => Ok(GpsQualityInd::DifferentialGpsFix),
            3 => Ok(GpsQualityInd::PpsFix),
            4 => Ok(GpsQualityInd::RealTimeKinematic),
            5 => Ok(GpsQualityInd::FloatRtk),
            6 => Ok(GpsQualityInd::Estimated),
            7 => Ok(GpsQualityInd::ManualInputMode),
            8 => Ok(GpsQualityInd::SimulationMode),
            _ => Err(DecodeError::InvalidValue(gga::QUALITY.name)),
        }
    }
}

/// Fix type reported by the GSA sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixType {
    NoFix,
    Fix2d,
    Fix3d,
}

/// The last RMC sentence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RmcSentence {
    /// Universal Time Coordinated (UTC)
    pub utc: Option<NaiveTime>,
    pub status: Option<Status>,
    /// Latitude in decimal degrees, negative in the southern hemisphere.
    pub lat: Option<f32>,
    /// Longitude in decimal degrees, negative in the western hemisphere.
    pub long: Option<f32>,
    /// Speed over ground in km/h.
    pub speed: Option<f32>,
    /// Course over ground in degrees true.
    pub course: Option<f32>,
    pub date: Option<NaiveDate>,
    /// Magnetic variation in degrees, negative when west.
    pub magnetic_variation: Option<f32>,
}

/// The values an accepted RMC sentence contributes to the fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RmcFix {
    pub lat: f32,
    pub long: f32,
    pub speed: f32,
    pub utc: NaiveTime,
    /// Replaces the date of the fix when present.
    pub date: Option<NaiveDate>,
}

impl RmcSentence {
    pub fn parse(fields: &[&str]) -> Result<Self, DecodeError> {
        let utc = accept!(fields, rmc::UTC, parse_utc);
        let status = match expect!(fields, rmc::STATUS, parse_char)? {
            'A' => Status::Valid,
            'V' => Status::Invalid,
            c => return Err(DecodeError::InvalidChar(rmc::STATUS.name, c.to_string())),
        };
        let lat = coordinate(fields, rmc::LAT, rmc::LAT_DIR, Axis::Latitude)?;
        let long = coordinate(fields, rmc::LONG, rmc::LONG_DIR, Axis::Longitude)?;
        let speed = accept!(fields, rmc::SPEED, parse_f32).map(|knots| knots * KNOTS_TO_KMH);
        let course = accept!(fields, rmc::COURSE, parse_f32);
        let date = accept!(fields, rmc::DATE, parse_date);

        let magnetic_variation = match accept!(fields, rmc::MAG_VAR, parse_f32) {
            Some(var) => {
                let dir = expect!(fields, rmc::MAG_VAR_DIR, parse_char)?;
                match CardDir::from_letter(dir, Axis::Longitude) {
                    Some(dir) => Some(var * dir.get_sign() as f32),
                    None => {
                        return Err(DecodeError::InvalidChar(
                            rmc::MAG_VAR_DIR.name,
                            dir.to_string(),
                        ))
                    }
                }
            }
            None => None,
        };

        Ok(RmcSentence {
            utc,
            status: Some(status),
            lat,
            long,
            speed,
            course,
            date,
            magnetic_variation,
        })
    }

    /// Check that the sentence carries a usable fix and return the values
    /// that are merged.
    pub fn fix(&self) -> Result<RmcFix, DecodeError> {
        if self.status != Some(Status::Valid) {
            return Err(DecodeError::NoFix(SentenceKind::Rmc));
        }
        Ok(RmcFix {
            lat: self.lat.ok_or(DecodeError::MissingField(rmc::LAT.name))?,
            long: self.long.ok_or(DecodeError::MissingField(rmc::LONG.name))?,
            speed: self.speed.ok_or(DecodeError::MissingField(rmc::SPEED.name))?,
            utc: self.utc.ok_or(DecodeError::MissingField(rmc::UTC.name))?,
            date: self.date,
        })
    }
}

/// The last GGA sentence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GgaSentence {
    /// Universal Time Coordinated (UTC)
    pub utc: Option<NaiveTime>,
    /// Latitude in decimal degrees, negative in the southern hemisphere.
    pub lat: Option<f32>,
    /// Longitude in decimal degrees, negative in the western hemisphere.
    pub long: Option<f32>,
    /// Indicates the quality of the gps data.
    pub gps_qlty: Option<GpsQualityInd>,
    /// Number of satellites in use.
    pub sat_view: Option<u8>,
    /// Horizontal dilution of precision
    pub hdop: Option<f32>,
    /// Antenna altitude above/below mean-sea-level (geoid)
    pub altitude: Option<f32>,
    pub altitude_unit: Option<char>,
    /// Geoidal separation, the difference between the WGS-84 earth ellipsoid
    /// and mean-sea-level (geoid), "-" means mean-sea-level below ellipsoid
    pub geo_sep: Option<f32>,
    pub geo_sep_unit: Option<char>,
    /// Age of differential GPS data, time in seconds since last SC104 type
    /// 1 or 9 update, null field when DGPS is not used
    pub age: Option<f32>,
    /// Differential reference station ID, 0000-1023
    pub station_id: Option<u16>,
}

/// The values an accepted GGA sentence contributes to the fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GgaFix {
    pub lat: f32,
    pub long: f32,
    pub altitude: f32,
    pub utc: NaiveTime,
}

impl GgaSentence {
    pub fn parse(fields: &[&str]) -> Result<Self, DecodeError> {
        let utc = accept!(fields, gga::UTC, parse_utc);
        let lat = coordinate(fields, gga::LAT, gga::LAT_DIR, Axis::Latitude)?;
        let long = coordinate(fields, gga::LONG, gga::LONG_DIR, Axis::Longitude)?;
        let gps_qlty = GpsQualityInd::try_from_u8(expect!(fields, gga::QUALITY, parse_u8)?)?;

        let age = accept!(fields, gga::AGE, parse_f32);
        if age.map_or(false, |age| age < 0.0) {
            return Err(DecodeError::InvalidValue(gga::AGE.name));
        }
        let station_id = accept!(fields, gga::STATION_ID, parse_u16);
        if station_id.map_or(false, |id| id > 1023) {
            return Err(DecodeError::InvalidValue(gga::STATION_ID.name));
        }

        Ok(GgaSentence {
            utc,
            lat,
            long,
            gps_qlty: Some(gps_qlty),
            sat_view: accept!(fields, gga::SAT_VIEW, parse_u8),
            hdop: accept!(fields, gga::HDOP, parse_f32),
            altitude: accept!(fields, gga::ALTITUDE, parse_f32),
            altitude_unit: accept!(fields, gga::ALTITUDE_UNIT, parse_char),
            geo_sep: accept!(fields, gga::GEO_SEP, parse_f32),
            geo_sep_unit: accept!(fields, gga::GEO_SEP_UNIT, parse_char),
            age,
            station_id,
        })
    }

    /// Check that the sentence carries a usable fix and return the values
    /// that are merged.
    pub fn fix(&self) -> Result<GgaFix, DecodeError> {
        match self.gps_qlty {
            Some(GpsQualityInd::FixNotAvailable) => {
                return Err(DecodeError::NoFix(SentenceKind::Gga))
            }
            Some(_) => (),
            None => return Err(DecodeError::MissingField(gga::QUALITY.name)),
        }

        Ok(GgaFix {
            lat: self.lat.ok_or(DecodeError::MissingField(gga::LAT.name))?,
            long: self.long.ok_or(DecodeError::MissingField(gga::LONG.name))?,
            altitude: self
                .altitude
                .ok_or(DecodeError::MissingField(gga::ALTITUDE.name))?,
            utc: self.utc.ok_or(DecodeError::MissingField(gga::UTC.name))?,
        })
    }
}

/// The last GSA sentence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GsaSentence {
    /// `A` for automatic, `M` for manual 2D/3D selection.
    pub mode: Option<char>,
    pub fix_type: Option<FixType>,
    /// Position dilution of precision
    pub pdop: Option<f32>,
    /// Horizontal dilution of precision
    pub hdop: Option<f32>,
    /// Vertical dilution of precision
    pub vdop: Option<f32>,
}

impl GsaSentence {
    pub fn parse(fields: &[&str]) -> Result<Self, DecodeError> {
        let mode = expect!(fields, gsa::MODE, parse_char)?;
        let fix_type = match expect!(fields, gsa::FIX_TYPE, parse_u8)? {
            1 => FixType::NoFix,
            2 => FixType::Fix2d,
            3 => FixType::Fix3d,
            _ => return Err(DecodeError::InvalidValue(gsa::FIX_TYPE.name)),
        };

        Ok(GsaSentence {
            mode: Some(mode),
            fix_type: Some(fix_type),
            pdop: accept!(fields, gsa::PDOP, parse_f32),
            hdop: accept!(fields, gsa::HDOP, parse_f32),
            vdop: accept!(fields, gsa::VDOP, parse_f32),
        })
    }
}

/// The last GSV sentence.
///
/// Satellites in view are not modeled, only the shape of the sentence is
/// kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GsvSentence {
    /// Number of fields after the identifier.
    pub field_count: usize,
}

impl GsvSentence {
    pub fn parse(fields: &[&str]) -> Result<Self, DecodeError> {
        Ok(GsvSentence {
            field_count: fields.len().saturating_sub(1),
        })
    }
}

/// Parse a coordinate and its hemisphere.
/// Both fields empty means the receiver has no position, a coordinate
/// without hemisphere (or vice versa) is malformed.
fn coordinate(
    fields: &[&str],
    value: Field,
    dir: Field,
    axis: Axis,
) -> Result<Option<f32>, DecodeError> {
    match (accept!(fields, value), accept!(fields, dir)) {
        (None, None) => Ok(None),
        (Some(_), None) => Err(DecodeError::MissingField(dir.name)),
        (None, Some(_)) => Err(DecodeError::MissingField(value.name)),
        (Some(v), Some(d)) => {
            let letter = parse_char(d, dir.name)?;
            let card_dir = match CardDir::from_letter(letter, axis) {
                Some(card_dir) => card_dir,
                None => return Err(DecodeError::InvalidChar(dir.name, d.to_owned())),
            };
            let v = f64::from_str(v)?;
            Ok(Some(coord::signed(v, axis, card_dir)? as f32))
        }
    }
}

/// Parse a finite float.
#[inline]
fn parse_f32(s: &str, name: &'static str) -> Result<f32, DecodeError> {
    let f = f32::from_str(s)?;
    if !f.is_finite() {
        return Err(DecodeError::InvalidValue(name));
    }
    Ok(f)
}

#[inline]
fn parse_u8(s: &str, _name: &'static str) -> Result<u8, DecodeError> {
    Ok(u8::from_str(s)?)
}

#[inline]
fn parse_u16(s: &str, _name: &'static str) -> Result<u16, DecodeError> {
    Ok(u16::from_str(s)?)
}

/// Parse a field that consists of exactly one character.
#[inline]
fn parse_char(s: &str, name: &'static str) -> Result<char, DecodeError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(DecodeError::InvalidChar(name, s.to_owned())),
    }
}

/// Converts a field to a time.
/// The input has to be in the format `hhmmss.sss`.
#[inline]
fn parse_utc(s: &str, _name: &'static str) -> Result<NaiveTime, DecodeError> {
    Ok(NaiveTime::parse_from_str(s, "%H%M%S%.f")?)
}

/// Converts a field in the format `ddmmyy` to a date.
/// Two digit years below 69 are in the 21st century.
#[inline]
fn parse_date(s: &str, _name: &'static str) -> Result<NaiveDate, DecodeError> {
    Ok(NaiveDate::parse_from_str(s, "%d%m%y")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexer::Record;

    fn fields_of(line: &str) -> Vec<&str> {
        Record::locate(line).unwrap().fields().unwrap().to_vec()
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    const RMC: &str = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";
    const GGA: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";

    #[test]
    fn parses_rmc() {
        let rmc = RmcSentence::parse(&fields_of(RMC)).unwrap();
        assert_eq!(rmc.utc, Some(NaiveTime::from_hms_opt(12, 35, 19).unwrap()));
        assert_eq!(rmc.status, Some(Status::Valid));
        assert!(close(rmc.lat.unwrap(), 48.1173));
        assert!(close(rmc.long.unwrap(), 11.5167));
        assert!(close(rmc.speed.unwrap(), 41.485));
        assert_eq!(rmc.course, Some(84.4));
        assert_eq!(rmc.date, Some(NaiveDate::from_ymd_opt(1994, 3, 23).unwrap()));
        assert!(close(rmc.magnetic_variation.unwrap(), -3.1));

        let fix = rmc.fix().unwrap();
        assert_eq!(fix.utc, NaiveTime::from_hms_opt(12, 35, 19).unwrap());
        assert_eq!(fix.date, NaiveDate::from_ymd_opt(1994, 3, 23));
    }

    #[test]
    fn rmc_without_fix_is_rejected_on_commit() {
        let rmc = RmcSentence::parse(&fields_of("$GPRMC,123519,V,,,,,,,230394,,")).unwrap();
        assert_eq!(rmc.status, Some(Status::Invalid));
        assert_eq!(rmc.lat, None);
        assert_matches!(rmc.fix(), Err(DecodeError::NoFix(SentenceKind::Rmc)));
    }

    #[test]
    fn rmc_without_fix_and_time_keeps_status() {
        let rmc = RmcSentence::parse(&fields_of("$GPRMC,,V,,,,,,,,,,N*53")).unwrap();
        assert_eq!(rmc.utc, None);
        assert_eq!(rmc.status, Some(Status::Invalid));
        assert_matches!(rmc.fix(), Err(DecodeError::NoFix(SentenceKind::Rmc)));
    }

    #[test]
    fn rmc_valid_without_date_still_fixes() {
        let rmc = RmcSentence::parse(&fields_of(
            "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,,003.1,W",
        )).unwrap();
        let fix = rmc.fix().unwrap();
        assert!(close(fix.lat, 48.1173));
        assert_eq!(fix.utc, NaiveTime::from_hms_opt(12, 35, 19).unwrap());
        assert_eq!(fix.date, None);
    }

    #[test]
    fn rmc_valid_without_time_is_incomplete() {
        let rmc = RmcSentence::parse(&fields_of(
            "$GPRMC,,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W",
        )).unwrap();
        assert_matches!(rmc.fix(), Err(DecodeError::MissingField("utc")));
    }

    #[test]
    fn rmc_valid_without_position_is_incomplete() {
        let rmc = RmcSentence::parse(&fields_of("$GPRMC,123519,A,,,,,022.4,,230394,,")).unwrap();
        assert_matches!(rmc.fix(), Err(DecodeError::MissingField("latitude")));
    }

    #[test]
    fn rmc_rejects_unknown_status() {
        assert_matches!(
            RmcSentence::parse(&fields_of("$GPRMC,123519,X,4807.038,N")),
            Err(DecodeError::InvalidChar("status", _))
        );
    }

    #[test]
    fn rmc_two_digit_year_pivot() {
        let rmc = RmcSentence::parse(&fields_of(
            "$GPRMC,081836.75,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E",
        )).unwrap();
        assert_eq!(rmc.date, Some(NaiveDate::from_ymd_opt(1998, 9, 13).unwrap()));
        assert!(close(rmc.lat.unwrap(), -37.8608));
        assert!(close(rmc.magnetic_variation.unwrap(), 11.3));
        assert_eq!(
            rmc.utc,
            Some(NaiveTime::from_hms_milli_opt(8, 18, 36, 750).unwrap())
        );

        let rmc = RmcSentence::parse(&fields_of(
            "$GPRMC,220516,A,5133.82,N,00042.24,W,173.8,231.8,130624,004.2,W",
        )).unwrap();
        assert_eq!(rmc.date, Some(NaiveDate::from_ymd_opt(2024, 6, 13).unwrap()));
        assert!(close(rmc.long.unwrap(), -0.704));
    }

    #[test]
    fn parses_gga() {
        let gga = GgaSentence::parse(&fields_of(GGA)).unwrap();
        assert_eq!(gga.gps_qlty, Some(GpsQualityInd::GpsFix));
        assert_eq!(gga.sat_view, Some(8));
        assert_eq!(gga.hdop, Some(0.9));
        assert_eq!(gga.altitude, Some(545.4));
        assert_eq!(gga.altitude_unit, Some('M'));
        assert_eq!(gga.geo_sep, Some(46.9));
        assert_eq!(gga.geo_sep_unit, Some('M'));
        assert_eq!(gga.age, None);
        assert_eq!(gga.station_id, None);

        let fix = gga.fix().unwrap();
        assert!(close(fix.lat, 48.1173));
        assert!(close(fix.long, 11.5167));
        assert_eq!(fix.altitude, 545.4);
        assert_eq!(fix.utc, NaiveTime::from_hms_opt(12, 35, 19).unwrap());
    }

    #[test]
    fn gga_quality_zero_is_no_fix() {
        let gga = GgaSentence::parse(&fields_of("$GPGGA,123519,,,,,0,00,,,M,,M,,")).unwrap();
        assert_eq!(gga.gps_qlty, Some(GpsQualityInd::FixNotAvailable));
        assert_matches!(gga.fix(), Err(DecodeError::NoFix(SentenceKind::Gga)));
    }

    #[test]
    fn gga_without_fix_and_time_keeps_quality() {
        let gga = GgaSentence::parse(&fields_of("$GPGGA,,,,,,0,00,99.99,,,,,,*48")).unwrap();
        assert_eq!(gga.utc, None);
        assert_eq!(gga.gps_qlty, Some(GpsQualityInd::FixNotAvailable));
        assert_eq!(gga.hdop, Some(99.99));
        assert_matches!(gga.fix(), Err(DecodeError::NoFix(SentenceKind::Gga)));
    }

    #[test]
    fn gga_rejects_bad_quality_and_station() {
        assert_matches!(
            GgaSentence::parse(&fields_of("$GPGGA,123519,4807.038,N,01131.000,E,9,08")),
            Err(DecodeError::InvalidValue("fix quality"))
        );
        assert_matches!(
            GgaSentence::parse(&fields_of(
                "$GPGGA,123519,4807.038,N,01131.000,E,2,08,0.9,545.4,M,46.9,M,3.2,2048"
            )),
            Err(DecodeError::InvalidValue("dgps station id"))
        );
    }

    #[test]
    fn gga_with_dgps() {
        let gga = GgaSentence::parse(&fields_of(
            "$GPGGA,123519,4807.038,N,01131.000,E,2,08,0.9,545.4,M,46.9,M,3.2,0120",
        )).unwrap();
        assert_eq!(gga.gps_qlty, Some(GpsQualityInd::DifferentialGpsFix));
        assert_eq!(gga.age, Some(3.2));
        assert_eq!(gga.station_id, Some(120));
    }

    #[test]
    fn short_gga_is_missing_quality() {
        assert_matches!(
            GgaSentence::parse(&fields_of("$GPGGA,123519,4807.038,N,01131.000")),
            Err(DecodeError::MissingField("longitude hemisphere"))
        );
        assert_matches!(
            GgaSentence::parse(&fields_of("$GPGGA,123519,4807.038,N,01131.000,E")),
            Err(DecodeError::MissingField("fix quality"))
        );
    }

    #[test]
    fn non_numeric_coordinate_is_malformed() {
        assert_matches!(
            GgaSentence::parse(&fields_of("$GPGGA,123519,48x7.038,N,01131.000,E,1")),
            Err(DecodeError::Float(_))
        );
    }

    #[test]
    fn wrong_hemisphere_letter_is_malformed() {
        assert_matches!(
            GgaSentence::parse(&fields_of("$GPGGA,123519,4807.038,E,01131.000,E,1")),
            Err(DecodeError::InvalidChar("latitude hemisphere", _))
        );
    }

    #[test]
    fn out_of_range_coordinate_is_malformed() {
        assert_matches!(
            RmcSentence::parse(&fields_of("$GPRMC,123519,A,9107.038,N,01131.000,E,1.0,,230394,,")),
            Err(DecodeError::Coordinate(_))
        );
    }

    #[test]
    fn bad_time_is_malformed() {
        assert_matches!(
            RmcSentence::parse(&fields_of("$GPRMC,1260,A")),
            Err(DecodeError::Time(_))
        );
    }

    #[test]
    fn parses_gsa() {
        let gsa = GsaSentence::parse(&fields_of(
            "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39",
        )).unwrap();
        assert_eq!(gsa.mode, Some('A'));
        assert_eq!(gsa.fix_type, Some(FixType::Fix3d));
        assert_eq!(gsa.pdop, Some(2.5));
        assert_eq!(gsa.hdop, Some(1.3));
        assert_eq!(gsa.vdop, Some(2.1));
    }

    #[test]
    fn gsa_rejects_unknown_fix_type() {
        assert_matches!(
            GsaSentence::parse(&fields_of("$GPGSA,A,7")),
            Err(DecodeError::InvalidValue("fix type"))
        );
    }

    #[test]
    fn gsv_only_counts_fields() {
        let gsv = GsvSentence::parse(&fields_of(
            "$GPGSV,2,1,08,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45*75",
        )).unwrap();
        assert_eq!(gsv.field_count, 19);
    }
}
