//! Civil time and Julian-day calendar arithmetic.
//!
//! Gregorian calendar conversion only; leap seconds and TDB offsets are
//! the ephemeris provider's concern.

use crate::error::ChartError;

const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// A civil instant in UTC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcInstant {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

impl UtcInstant {
    /// Validated constructor.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: f64,
    ) -> Result<Self, ChartError> {
        let instant = Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        };
        instant.validate()?;
        Ok(instant)
    }

    pub(crate) fn validate(&self) -> Result<(), ChartError> {
        if !(1..=12).contains(&self.month) {
            return Err(ChartError::InvalidInput("month must be 1..=12"));
        }
        if self.day < 1 || self.day > days_in_month(self.year, self.month) {
            return Err(ChartError::InvalidInput("day out of range for month"));
        }
        if self.hour > 23 {
            return Err(ChartError::InvalidInput("hour must be 0..=23"));
        }
        if self.minute > 59 {
            return Err(ChartError::InvalidInput("minute must be 0..=59"));
        }
        if !(0.0..60.0).contains(&self.second) {
            return Err(ChartError::InvalidInput("second must be in [0, 60)"));
        }
        Ok(())
    }

    /// JD UTC for this instant (calendar arithmetic only).
    pub fn to_jd(&self) -> f64 {
        let y = f64::from(self.year);
        let m = f64::from(self.month);
        let d = f64::from(self.day)
            + f64::from(self.hour) / 24.0
            + f64::from(self.minute) / 1440.0
            + self.second / 86400.0;

        let (y2, m2) = if m <= 2.0 { (y - 1.0, m + 12.0) } else { (y, m) };
        let a = (y2 / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();

        (365.25 * (y2 + 4716.0)).floor() + (30.6001 * (m2 + 1.0)).floor() + d + b - 1524.5
    }

    /// Instant from a JD UTC.
    pub fn from_jd(jd: f64) -> Self {
        let z = (jd + 0.5).floor();
        let f = jd + 0.5 - z;

        let a = if z < 2_299_161.0 {
            z
        } else {
            let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
            z + 1.0 + alpha - (alpha / 4.0).floor()
        };
        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day_frac = b - d - (30.6001 * e).floor() + f;
        let day = day_frac.floor();
        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

        let mut seconds = (day_frac - day) * 86400.0;
        // Guard the upper edge after float rounding
        if seconds >= 86400.0 {
            seconds = 86400.0 - 1e-6;
        }
        let hour = (seconds / 3600.0).floor();
        seconds -= hour * 3600.0;
        let minute = (seconds / 60.0).floor();
        seconds -= minute * 60.0;

        Self {
            year: year as i32,
            month: month as u8,
            day: day as u8,
            hour: hour as u8,
            minute: minute as u8,
            second: seconds,
        }
    }

    /// Canonical ISO-8601 form used for the chart content key.
    pub fn canonical(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// A civil instant with a fixed UTC offset in hours (east positive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalInstant {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
    pub utc_offset_hours: f64,
}

impl LocalInstant {
    /// Resolve to UTC through Julian-day arithmetic.
    pub fn to_utc(&self) -> Result<UtcInstant, ChartError> {
        if !(-14.0..=14.0).contains(&self.utc_offset_hours) {
            return Err(ChartError::InvalidInput("utc offset must be within ±14 hours"));
        }
        let local = UtcInstant::new(
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        )?;
        Ok(UtcInstant::from_jd(local.to_jd() - self.utc_offset_hours / 24.0))
    }
}
