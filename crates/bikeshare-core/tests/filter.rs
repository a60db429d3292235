//! Tests for the filter engine.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::{Strategy, proptest};

use bikeshare_core::apply_filters;
use bikeshare_model::{Dataset, DayFilter, FilterSpec, MonthFilter, Schema, TripRecord};

fn trip(record: u64, year: i32, month: u32, day: u32, hour: u32) -> TripRecord {
    let start_time = NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(hour, 0, 0)
        .expect("valid time");
    TripRecord {
        record,
        month: start_time.month(),
        weekday: start_time.weekday().num_days_from_monday(),
        hour,
        start_time,
        end_time: None,
        duration_seconds: 300.0,
        start_station: "A St".to_string(),
        end_station: "B St".to_string(),
        user_type: "Subscriber".to_string(),
        gender: None,
        birth_year: None,
    }
}

fn dataset(records: Vec<TripRecord>) -> Dataset {
    Dataset::new(records, Schema::default())
}

#[test]
fn all_all_is_identity() {
    let input = dataset(vec![
        trip(1, 2017, 1, 2, 8),
        trip(2, 2017, 2, 14, 17),
        trip(3, 2017, 3, 5, 12),
    ]);
    let filtered = apply_filters(&input, &FilterSpec::default());
    assert_eq!(filtered, input);
}

#[test]
fn month_filter_keeps_only_matching_records() {
    let input = dataset(vec![trip(1, 2017, 1, 2, 8), trip(2, 2017, 2, 14, 17)]);
    let spec = FilterSpec {
        month: MonthFilter::February,
        day: DayFilter::All,
    };
    let filtered = apply_filters(&input, &spec);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.records()[0].record, 2);
    assert_eq!(filtered.records()[0].month, 2);
}

#[test]
fn unmatched_month_yields_empty_dataset_not_error() {
    let input = dataset(vec![trip(1, 2017, 1, 2, 8), trip(2, 2017, 2, 14, 17)]);
    let spec = FilterSpec {
        month: MonthFilter::March,
        day: DayFilter::All,
    };
    let filtered = apply_filters(&input, &spec);
    assert!(filtered.is_empty());
    assert_eq!(filtered.schema(), input.schema());
}

#[test]
fn month_and_day_filters_are_conjunctive() {
    // 2017-01-02 Monday, 2017-01-03 Tuesday, 2017-02-06 Monday.
    let input = dataset(vec![
        trip(1, 2017, 1, 2, 8),
        trip(2, 2017, 1, 3, 8),
        trip(3, 2017, 2, 6, 8),
    ]);
    let spec = FilterSpec {
        month: MonthFilter::January,
        day: DayFilter::Monday,
    };
    let filtered = apply_filters(&input, &spec);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.records()[0].record, 1);
}

#[test]
fn filtering_preserves_record_order() {
    let input = dataset(vec![
        trip(1, 2017, 1, 2, 8),
        trip(2, 2017, 2, 14, 17),
        trip(3, 2017, 1, 9, 12),
        trip(4, 2017, 1, 16, 7),
    ]);
    let spec = FilterSpec {
        month: MonthFilter::January,
        day: DayFilter::All,
    };
    let filtered = apply_filters(&input, &spec);
    let order: Vec<u64> = filtered.records().iter().map(|r| r.record).collect();
    assert_eq!(order, vec![1, 3, 4]);
}

fn arbitrary_trips() -> impl Strategy<Value = Vec<(u32, u32, u32)>> {
    proptest::collection::vec((1u32..=6, 1u32..=28, 0u32..=23), 0..40)
}

proptest! {
    #[test]
    fn unfiltered_view_equals_input(dates in arbitrary_trips()) {
        let records: Vec<TripRecord> = dates
            .iter()
            .enumerate()
            .map(|(index, &(month, day, hour))| trip(index as u64 + 1, 2017, month, day, hour))
            .collect();
        let input = dataset(records);
        let filtered = apply_filters(&input, &FilterSpec::default());
        proptest::prop_assert_eq!(filtered, input);
    }

    #[test]
    fn every_filtered_record_matches_the_predicates(
        dates in arbitrary_trips(),
        month_index in 1u32..=6,
        day_index in 1u32..=7,
    ) {
        let records: Vec<TripRecord> = dates
            .iter()
            .enumerate()
            .map(|(index, &(month, day, hour))| trip(index as u64 + 1, 2017, month, day, hour))
            .collect();
        let input = dataset(records);
        let spec = FilterSpec {
            month: MonthFilter::from_index(month_index).expect("valid month index"),
            day: DayFilter::from_index(day_index).expect("valid day index"),
        };
        let filtered = apply_filters(&input, &spec);
        for record in filtered.records() {
            proptest::prop_assert_eq!(Some(record.month), spec.month.month_number());
            proptest::prop_assert_eq!(Some(record.weekday), spec.day.day_index());
        }
    }
}
