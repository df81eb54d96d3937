// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub mod builder;

use chrono::{DateTime, Datelike, LocalResult, TimeZone, Timelike, Utc};

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#446
// https://learn.microsoft.com/en-us/windows/win32/api/oleauto/nf-oleauto-dosdatetimetovarianttime

// 1980-01-01T00:00:00Z and 2108-01-01T00:00:00Z as Unix timestamps.
const DOS_EPOCH: i64 = 315532800;
const DOS_END: i64 = 4354819200;

/// A date and time stored as per the MS-DOS representation used by ZIP files.
///
/// The representable range is 1980-01-01 00:00:00 to 2107-12-31 23:59:58 at a two second granularity.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct ZipDateTime {
    pub(crate) date: u16,
    pub(crate) time: u16,
}

impl ZipDateTime {
    /// The earliest representable date & time, 1980-01-01 00:00:00.
    pub const MIN: ZipDateTime = ZipDateTime { date: 0x0021, time: 0x0000 };

    /// The latest representable date & time, 2107-12-31 23:59:58.
    pub const MAX: ZipDateTime = ZipDateTime { date: 0xFF9F, time: 0xBF7D };

    /// Returns the raw MS-DOS date field.
    pub fn date(&self) -> u16 {
        self.date
    }

    /// Returns the raw MS-DOS time field.
    pub fn time(&self) -> u16 {
        self.time
    }

    /// Returns the year of this date & time.
    pub fn year(&self) -> i32 {
        (((self.date & 0xFE00) >> 9) + 1980).into()
    }

    /// Returns the month of this date & time.
    pub fn month(&self) -> u32 {
        ((self.date & 0x1E0) >> 5).into()
    }

    /// Returns the day of this date & time.
    pub fn day(&self) -> u32 {
        (self.date & 0x1F).into()
    }

    /// Returns the hour of this date & time.
    pub fn hour(&self) -> u32 {
        ((self.time & 0xF800) >> 11).into()
    }

    /// Returns the minute of this date & time.
    pub fn minute(&self) -> u32 {
        ((self.time & 0x7E0) >> 5).into()
    }

    /// Returns the second of this date & time.
    ///
    /// Note that MS-DOS has a maximum granularity of two seconds.
    pub fn second(&self) -> u32 {
        ((self.time & 0x1F) << 1).into()
    }

    /// Constructs chrono's [`DateTime`] representation of this date & time.
    pub fn as_chrono(&self) -> LocalResult<DateTime<Utc>> {
        self.into()
    }

    /// Constructs this date & time from chrono's [`DateTime`] representation.
    ///
    /// Values before 1980 clamp to [`ZipDateTime::MIN`]. Otherwise the time is rounded up to the next
    /// even second, and anything that lands on or after 2108 clamps to [`ZipDateTime::MAX`].
    pub fn from_chrono(dt: &DateTime<Utc>) -> Self {
        dt.into()
    }
}

impl Default for ZipDateTime {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<&DateTime<Utc>> for ZipDateTime {
    fn from(value: &DateTime<Utc>) -> Self {
        if value.timestamp() < DOS_EPOCH {
            return ZipDateTime::MIN;
        }

        let mut seconds = value.timestamp();
        if value.timestamp_subsec_nanos() > 0 {
            seconds += 1;
        }
        seconds += seconds.rem_euclid(2);

        if seconds >= DOS_END {
            return ZipDateTime::MAX;
        }

        let rounded = match Utc.timestamp_opt(seconds, 0) {
            LocalResult::Single(rounded) => rounded,
            _ => return ZipDateTime::MAX,
        };

        // The year is within 1980..=2107 here, so every component fits its bit range.
        let date = (((rounded.year() - 1980) as u16) << 9) | ((rounded.month() as u16) << 5) | rounded.day() as u16;
        let time = ((rounded.hour() as u16) << 11) | ((rounded.minute() as u16) << 5) | (rounded.second() as u16 >> 1);

        ZipDateTime { date, time }
    }
}

impl From<&ZipDateTime> for LocalResult<DateTime<Utc>> {
    fn from(value: &ZipDateTime) -> Self {
        Utc.with_ymd_and_hms(value.year(), value.month(), value.day(), value.hour(), value.minute(), value.second())
    }
}

impl From<DateTime<Utc>> for ZipDateTime {
    fn from(value: DateTime<Utc>) -> Self {
        (&value).into()
    }
}

impl From<ZipDateTime> for LocalResult<DateTime<Utc>> {
    fn from(value: ZipDateTime) -> Self {
        (&value).into()
    }
}
