use chrono::{FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use utilkit::{
    format_date, format_date_value, format_date_with_options, DateFormatOptions, Layout,
    Separator, Value,
};

fn march_5th(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

#[test]
fn test_eu_date_only_with_dash() {
    let options = DateFormatOptions::date_only().with_separator(Separator::Dash);
    let text = format_date_with_options(march_5th(0, 0), Layout::Eu, &options).unwrap();
    assert_eq!(text, " 05-03-2024");
}

#[test]
fn test_us_with_time_and_slash() {
    let text = format_date(march_5th(13, 7), Layout::Us).unwrap();
    // "HH:MM" + three spaces + the leading space before the date
    assert_eq!(text, "13:07    03/05/2024");
}

#[test]
fn test_database_day_join_ignores_separator() {
    let options = DateFormatOptions::date_only().with_separator(Separator::Dash);
    let text = format_date_with_options(march_5th(0, 0), Layout::Database, &options).unwrap();
    assert_eq!(text, " 2024-03/05");

    let text = format_date_with_options(
        march_5th(0, 0),
        Layout::Database,
        &DateFormatOptions::date_only(),
    )
    .unwrap();
    assert_eq!(text, " 2024/03/05");
}

#[test]
fn test_layout_codes_from_values() {
    let date = Value::from("2024-03-05");
    let no_time = Value::from(false);
    let dash = Value::from("-");

    let cases = [
        (Value::from(1), " 05-03-2024"),
        (Value::from(2), " 03-05-2024"),
        (Value::from(3), " 2024-03/05"),
        (Value::from(0), " 2024-03/05"),
        (Value::from(99), " 2024-03/05"),
        (Value::from(2.0), " 03-05-2024"),
        (Value::from("1"), " 2024-03/05"),
        (Value::from("2abc"), " 2024-03/05"),
        (Value::from(1.5), " 2024-03/05"),
    ];

    for (layout, expected) in cases {
        let text = format_date_value(&date, &layout, Some(&no_time), Some(&dash)).unwrap();
        assert_eq!(text, expected, "layout {:?}", layout);
    }
}

#[test]
fn test_offset_dates_render_in_their_own_offset() {
    let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
    let dt = tokyo.with_ymd_and_hms(2024, 12, 31, 23, 59, 0).unwrap();
    assert_eq!(format_date(dt, Layout::Eu).unwrap(), "23:59    31/12/2024");

    // Same instant seen from UTC.
    let utc = dt.with_timezone(&Utc);
    assert_eq!(format_date(utc, Layout::Eu).unwrap(), "14:59    31/12/2024");
}

#[test]
fn test_time_prefix_presence_follows_flag() {
    let with_time = format_date(march_5th(8, 0), Layout::Database).unwrap();
    let without = format_date_with_options(
        march_5th(8, 0),
        Layout::Database,
        &DateFormatOptions::date_only(),
    )
    .unwrap();

    assert_eq!(with_time, "08:00    2024/03/05");
    assert_eq!(without, " 2024/03/05");
    assert!(with_time.ends_with(&without));
}

#[test]
fn test_years_are_not_padded() {
    let dt = NaiveDate::from_ymd_opt(987, 1, 2)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let text =
        format_date_with_options(dt, Layout::Us, &DateFormatOptions::date_only()).unwrap();
    assert_eq!(text, " 01/02/987");
}
