// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use chrono::{TimeZone, Utc};

use crate::error::ZipError;
use crate::{ZipDateTime, ZipDateTimeBuilder, ZipEntryBuilder};

#[test]
fn date_conversion_test_chrono() {
    let original_dt = Utc.timestamp_opt(1666544102, 0).unwrap();
    let zip_dt = crate::ZipDateTime::from_chrono(&original_dt);
    let result_dt = zip_dt.as_chrono().single().expect("expected single unique result");
    assert_eq!(result_dt, original_dt);
}

#[test]
fn date_conversion_test() {
    let year = 2000;
    let month = 9;
    let day = 8;
    let hour = 7;
    let minute = 5;
    let second = 4;

    let mut builder = ZipDateTimeBuilder::new();

    builder = builder.year(year);
    builder = builder.month(month);
    builder = builder.day(day);
    builder = builder.hour(hour);
    builder = builder.minute(minute);
    builder = builder.second(second);

    let built = builder.build().unwrap();

    assert_eq!(year, built.year());
    assert_eq!(month, built.month());
    assert_eq!(day, built.day());
    assert_eq!(hour, built.hour());
    assert_eq!(minute, built.minute());
    assert_eq!(second, built.second());
}

#[test]
fn date_encoding_matches_known_value() {
    let zip_dt = ZipDateTime::from_chrono(&Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());

    assert_eq!(zip_dt.date(), 0x5821);
    assert_eq!(zip_dt.time(), 0x6000);
}

#[test]
fn date_before_1980_clamps_to_minimum() {
    let zip_dt = ZipDateTime::from_chrono(&Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap());

    assert_eq!(zip_dt, ZipDateTime::MIN);
    assert_eq!(zip_dt.date(), 0x0021);
    assert_eq!(zip_dt.time(), 0x0000);

    let last_second = Utc.with_ymd_and_hms(1979, 12, 31, 23, 59, 59).unwrap();
    assert_eq!(ZipDateTime::from_chrono(&last_second), ZipDateTime::MIN);
}

#[test]
fn date_after_2107_clamps_to_maximum() {
    let zip_dt = ZipDateTime::from_chrono(&Utc.with_ymd_and_hms(2200, 6, 1, 0, 0, 0).unwrap());

    assert_eq!(zip_dt, ZipDateTime::MAX);
    assert_eq!(zip_dt.date(), 0xFF9F);
    assert_eq!(zip_dt.time(), 0xBF7D);
    assert_eq!(
        zip_dt.as_chrono().single().expect("expected single unique result"),
        Utc.with_ymd_and_hms(2107, 12, 31, 23, 59, 58).unwrap()
    );
}

#[test]
fn date_rounding_into_2108_clamps_to_maximum() {
    let zip_dt = ZipDateTime::from_chrono(&Utc.with_ymd_and_hms(2107, 12, 31, 23, 59, 59).unwrap());
    assert_eq!(zip_dt, ZipDateTime::MAX);
}

#[test]
fn date_odd_seconds_round_up() {
    let zip_dt = ZipDateTime::from_chrono(&Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 1).unwrap());
    assert_eq!(zip_dt.second(), 2);

    let zip_dt = ZipDateTime::from_chrono(&Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 59).unwrap());
    assert_eq!((zip_dt.hour(), zip_dt.minute(), zip_dt.second()), (12, 1, 0));

    let zip_dt = ZipDateTime::from_chrono(&Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap());
    assert_eq!(
        zip_dt.as_chrono().single().expect("expected single unique result"),
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    );
}

#[test]
fn date_subsecond_precision_rounds_up() {
    let dt = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap() + chrono::Duration::milliseconds(500);
    let zip_dt = ZipDateTime::from_chrono(&dt);

    assert_eq!(zip_dt.second(), 2);
    assert_eq!(zip_dt.minute(), 0);
}

#[test]
fn date_builder_before_1980_clamps_to_minimum() {
    let built = ZipDateTimeBuilder::new().year(1975).month(6).day(15).hour(12).minute(30).second(59).build().unwrap();
    assert_eq!(built, ZipDateTime::MIN);

    let built = ZipDateTimeBuilder::new().year(i32::MIN).build().unwrap();
    assert_eq!(built, ZipDateTime::MIN);
}

#[test]
fn date_builder_after_2107_clamps_to_maximum() {
    let built = ZipDateTimeBuilder::new().year(2108).build().unwrap();
    assert_eq!(built, ZipDateTime::MAX);

    let built = ZipDateTimeBuilder::new().year(i32::MAX).month(12).day(31).build().unwrap();
    assert_eq!(built, ZipDateTime::MAX);

    let built = ZipDateTimeBuilder::new().year(2107).month(12).day(31).hour(23).minute(59).second(59).build().unwrap();
    assert_eq!(built, ZipDateTime::MAX);
}

#[test]
fn date_builder_odd_seconds_round_up() {
    let built = ZipDateTimeBuilder::new().year(2024).month(1).day(1).hour(12).minute(0).second(59).build().unwrap();
    assert_eq!((built.hour(), built.minute(), built.second()), (12, 1, 0));

    let built = ZipDateTimeBuilder::new().year(2000).month(9).day(8).second(5).build().unwrap();
    assert_eq!(built.second(), 6);
}

#[test]
fn date_builder_rejects_invalid_components() {
    let result = ZipDateTimeBuilder::new().year(2024).month(13).build();
    assert!(matches!(result, Err(ZipError::InvalidDateTime { month: 13, .. })));

    let result = ZipDateTimeBuilder::new().year(2023).month(2).day(29).build();
    assert!(matches!(result, Err(ZipError::InvalidDateTime { day: 29, .. })));

    let result = ZipDateTimeBuilder::new().year(2024).hour(24).build();
    assert!(matches!(result, Err(ZipError::InvalidDateTime { hour: 24, .. })));
}

#[test]
fn date_builder_output_reaches_local_header() {
    let built = ZipDateTimeBuilder::new().year(1975).month(6).day(15).hour(12).minute(30).second(59).build().unwrap();
    let (entry, _) = ZipEntryBuilder::new("dated.txt").data(b"dated".to_vec()).zip_date_time(built).build().unwrap();

    let header = crate::write::record::local_file_header(&entry, 0).unwrap();
    assert_eq!(header.last_mod_file_date, ZipDateTime::MIN.date());
    assert_eq!(header.last_mod_file_time, ZipDateTime::MIN.time());

    let record = crate::write::record::central_directory_record(&entry, 0, 0).unwrap();
    assert_eq!(record.last_mod_file_date, 0x0021);
    assert_eq!(record.last_mod_file_time, 0x0000);
}
