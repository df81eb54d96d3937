// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use chrono::{LocalResult, TimeZone, Utc};

use crate::error::{Result, ZipError};
use crate::ZipDateTime;

/// A builder for [`ZipDateTime`].
///
/// Components are collected as given and converted on [`ZipDateTimeBuilder::build()`], which applies the same
/// clamping and rounding as [`ZipDateTime::from_chrono()`]. Unset components default to 1980-01-01 00:00:00.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZipDateTimeBuilder {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl Default for ZipDateTimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ZipDateTimeBuilder {
    /// Constructs a new builder at 1980-01-01 00:00:00.
    pub fn new() -> Self {
        Self { year: 1980, month: 1, day: 1, hour: 0, minute: 0, second: 0 }
    }

    /// Sets the date and time's year.
    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Sets the date and time's month.
    pub fn month(mut self, month: u32) -> Self {
        self.month = month;
        self
    }

    /// Sets the date and time's day.
    pub fn day(mut self, day: u32) -> Self {
        self.day = day;
        self
    }

    /// Sets the date and time's hour.
    pub fn hour(mut self, hour: u32) -> Self {
        self.hour = hour;
        self
    }

    /// Sets the date and time's minute.
    pub fn minute(mut self, minute: u32) -> Self {
        self.minute = minute;
        self
    }

    /// Sets the date and time's second.
    ///
    /// Note that MS-DOS has a maximum granularity of two seconds, so odd seconds round up to the next even one.
    pub fn second(mut self, second: u32) -> Self {
        self.second = second;
        self
    }

    /// Consumes this builder and returns a final [`ZipDateTime`].
    ///
    /// Years before 1980 clamp to [`ZipDateTime::MIN`] and years after 2107 clamp to [`ZipDateTime::MAX`]. Fails
    /// with [`ZipError::InvalidDateTime`] if the components don't form a real calendar date and time.
    ///
    /// ```
    /// # use async_zipper::{ZipDateTime, ZipDateTimeBuilder};
    /// #
    /// let date = ZipDateTimeBuilder::new().year(1975).month(3).day(2).build().unwrap();
    /// assert_eq!(date, ZipDateTime::MIN);
    /// ```
    pub fn build(self) -> Result<ZipDateTime> {
        let Self { year, month, day, hour, minute, second } = self;

        // Only the calendar is checked for out-of-range years; the clock can't lift them back into range.
        let (checked_year, clamped) = match year {
            year if year < 1980 => (1980, Some(ZipDateTime::MIN)),
            year if year > 2107 => (2107, Some(ZipDateTime::MAX)),
            _ => (year, None),
        };

        match Utc.with_ymd_and_hms(checked_year, month, day, hour, minute, second) {
            LocalResult::Single(dt) => Ok(clamped.unwrap_or_else(|| ZipDateTime::from_chrono(&dt))),
            _ => Err(ZipError::InvalidDateTime { year, month, day, hour, minute, second }),
        }
    }
}
