//! Tests for raw-row normalization and derived time fields.

use bikeshare_core::normalize;
use bikeshare_model::{BikeshareError, RawTrip, Schema};

fn raw(record: u64, start_time: &str) -> RawTrip {
    RawTrip {
        record,
        start_time: start_time.to_string(),
        end_time: None,
        duration: "600".to_string(),
        start_station: "Clark St".to_string(),
        end_station: "Wells St".to_string(),
        user_type: "Subscriber".to_string(),
        gender: None,
        birth_year: None,
    }
}

#[test]
fn derives_month_weekday_and_hour() {
    // 2017-01-02 was a Monday.
    let dataset = normalize(vec![raw(1, "2017-01-02 08:05:00")], Schema::default())
        .expect("normalize");
    let record = &dataset.records()[0];
    assert_eq!(record.month, 1);
    assert_eq!(record.weekday, 0);
    assert_eq!(record.hour, 8);
    assert_eq!(record.duration_seconds, 600.0);

    // 2017-04-01 was a Saturday.
    let dataset = normalize(vec![raw(1, "2017-04-01 23:59:59")], Schema::default())
        .expect("normalize");
    let record = &dataset.records()[0];
    assert_eq!(record.month, 4);
    assert_eq!(record.weekday, 5);
    assert_eq!(record.hour, 23);
}

#[test]
fn date_only_timestamps_assume_midnight() {
    let dataset = normalize(vec![raw(1, "2017-06-30")], Schema::default()).expect("normalize");
    let record = &dataset.records()[0];
    assert_eq!(record.month, 6);
    assert_eq!(record.hour, 0);
}

#[test]
fn malformed_timestamp_fails_the_whole_load() {
    let rows = vec![raw(1, "2017-01-02 08:05:00"), raw(2, "02/01/2017 08:05")];
    let error = normalize(rows, Schema::default()).expect_err("second row is malformed");
    match error {
        BikeshareError::MalformedTimestamp { record, value } => {
            assert_eq!(record, 2);
            assert_eq!(value, "02/01/2017 08:05");
        }
        other => panic!("expected MalformedTimestamp, got {other:?}"),
    }
}

#[test]
fn malformed_end_time_is_also_rejected() {
    let mut row = raw(7, "2017-01-02 08:05:00");
    row.end_time = Some("soon".to_string());
    let error = normalize(vec![row], Schema::default()).expect_err("end time is malformed");
    match error {
        BikeshareError::MalformedTimestamp { record, value } => {
            assert_eq!(record, 7);
            assert_eq!(value, "soon");
        }
        other => panic!("expected MalformedTimestamp, got {other:?}"),
    }
}

#[test]
fn non_numeric_duration_is_rejected() {
    let mut row = raw(3, "2017-01-02 08:05:00");
    row.duration = "ten minutes".to_string();
    let error = normalize(vec![row], Schema::default()).expect_err("duration is not numeric");
    match error {
        BikeshareError::InvalidDuration { record, value } => {
            assert_eq!(record, 3);
            assert_eq!(value, "ten minutes");
        }
        other => panic!("expected InvalidDuration, got {other:?}"),
    }
}

#[test]
fn float_birth_years_truncate_to_integers() {
    let mut row = raw(1, "2017-01-02 08:05:00");
    row.birth_year = Some("1992.0".to_string());
    let dataset = normalize(vec![row], Schema::default()).expect("normalize");
    assert_eq!(dataset.records()[0].birth_year, Some(1992));

    let mut row = raw(1, "2017-01-02 08:05:00");
    row.birth_year = Some("1985".to_string());
    let dataset = normalize(vec![row], Schema::default()).expect("normalize");
    assert_eq!(dataset.records()[0].birth_year, Some(1985));
}

#[test]
fn fractional_birth_year_is_rejected() {
    let mut row = raw(9, "2017-01-02 08:05:00");
    row.birth_year = Some("1992.5".to_string());
    let error = normalize(vec![row], Schema::default()).expect_err("fractional year");
    match error {
        BikeshareError::InvalidBirthYear { record, value } => {
            assert_eq!(record, 9);
            assert_eq!(value, "1992.5");
        }
        other => panic!("expected InvalidBirthYear, got {other:?}"),
    }
}

#[test]
fn schema_is_carried_through() {
    let schema = Schema {
        has_end_time: true,
        has_gender: true,
        has_birth_year: false,
    };
    let dataset = normalize(vec![raw(1, "2017-01-02 08:05:00")], schema).expect("normalize");
    assert_eq!(dataset.schema(), schema);
}
