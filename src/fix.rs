//! The merged, last known fix of the receiver.

use chrono::{NaiveDateTime, Utc};

use parser::{GgaFix, RmcFix};

/// Format of `FixState::timestamp`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Last known position, speed, altitude and time.
///
/// Latitude and longitude are `0.0` until the first accepted fix. The time
/// starts out as the wall clock time at construction, receives the time of
/// day from every accepted RMC and GGA sentence and the date only from RMC.
#[derive(Debug, Clone, PartialEq)]
pub struct FixState {
    /// Latitude in decimal degrees, negative in the southern hemisphere.
    pub latitude: f32,
    /// Longitude in decimal degrees, negative in the western hemisphere.
    pub longitude: f32,
    /// Speed over ground in km/h.
    pub speed: f32,
    /// Altitude above mean sea level in meters.
    pub altitude: f32,
    pub time: NaiveDateTime,
}

impl FixState {
    /// Create an empty fix seeded with the current UTC time.
    pub fn new() -> Self {
        FixState::seeded(Utc::now().naive_utc())
    }

    pub fn seeded(time: NaiveDateTime) -> Self {
        FixState {
            latitude: 0.0,
            longitude: 0.0,
            speed: 0.0,
            altitude: 0.0,
            time,
        }
    }

    /// Merge an accepted RMC sentence. The time of day is replaced, the
    /// date only if the sentence carried one.
    pub fn apply_rmc(&mut self, fix: &RmcFix) {
        self.latitude = fix.lat;
        self.longitude = fix.long;
        self.speed = fix.speed;
        let date = fix.date.unwrap_or_else(|| self.time.date());
        self.time = date.and_time(fix.utc);
    }

    /// Merge an accepted GGA sentence. The date is left untouched.
    pub fn apply_gga(&mut self, fix: &GgaFix) {
        self.latitude = fix.lat;
        self.longitude = fix.long;
        self.altitude = fix.altitude;
        self.time = self.time.date().and_time(fix.utc);
    }

    /// The time formatted as `YYYY-MM-DD HH:MM:SS UTC`.
    pub fn timestamp(&self) -> String {
        self.time.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl Default for FixState {
    fn default() -> Self {
        FixState::new()
    }
}
