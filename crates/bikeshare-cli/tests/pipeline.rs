//! End-to-end session tests over CSV fixtures on disk.

use std::fs;
use std::path::PathBuf;

use bikeshare_cli::pipeline::run_session;
use bikeshare_cli::types::SessionConfig;
use bikeshare_model::{BikeshareError, City, DayFilter, FilterSpec, MonthFilter};

const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-02 08:05:00,2017-01-02 08:15:00,600,Clark St,Wells St,Subscriber,Male,1989.0
1,2017-02-14 17:30:00,2017-02-14 17:45:00,900,Clark St,Wells St,Customer,Female,1994.0
2,2017-02-21 17:00:00,2017-02-21 17:10:00,600,Wells St,Clark St,Subscriber,,1989.0
3,2017-02-21 09:00:00,2017-02-21 09:30:00,1800,Clark St,Wells St,Subscriber,Female,
";

fn fixture_dir() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("chicago.csv"), CHICAGO_CSV).expect("write fixture");
    let path = dir.path().to_path_buf();
    (dir, path)
}

fn config(data_dir: PathBuf, month: MonthFilter, day: DayFilter) -> SessionConfig {
    SessionConfig {
        data_dir,
        city: City::Chicago,
        filter: FilterSpec { month, day },
        timings: false,
    }
}

#[test]
fn unfiltered_session_reports_all_sections() {
    let (_guard, dir) = fixture_dir();
    let report =
        run_session(&config(dir, MonthFilter::All, DayFilter::All)).expect("session runs");
    assert_eq!(report.loaded, 4);
    assert_eq!(report.matched, 4);
    assert!(report.timings.is_none());

    let travel = report.travel.expect("travel section");
    assert_eq!(travel.month, 2);
    assert_eq!(travel.month_count, 3);
    // Three of the four trips start on a Tuesday.
    assert_eq!(travel.weekday, 1);
    assert_eq!(travel.weekday_count, 3);
    assert_eq!(travel.hour, 17);
    assert_eq!(travel.hour_count, 2);

    let stations = report.stations.expect("stations section");
    assert_eq!(stations.start_station, "Clark St");
    assert_eq!(stations.start_count, 3);
    assert_eq!(stations.end_station, "Wells St");
    assert_eq!(stations.end_count, 3);
    assert_eq!(stations.trip_start, "Clark St");
    assert_eq!(stations.trip_end, "Wells St");
    assert_eq!(stations.trip_count, 3);

    let durations = report.durations.expect("durations section");
    assert_eq!(durations.total_seconds, 3900.0);
    assert_eq!(durations.mean_seconds, 975.0);
    assert_eq!(durations.min_seconds, 600.0);
    assert_eq!(durations.max_seconds, 1800.0);

    let demographics = report.demographics.expect("demographics section");
    assert_eq!(demographics.user_types[0], ("Subscriber".to_string(), 3));
    let genders = demographics.genders.expect("gender section");
    assert_eq!(genders.counts[0], ("Female".to_string(), 2));
    assert_eq!(genders.unspecified, 1);
    let years = demographics.birth_years.expect("birth-year section");
    assert_eq!(years.earliest, 1989);
    assert_eq!(years.most_recent, 1994);
    assert_eq!(years.most_common, 1989);
}

#[test]
fn filters_narrow_the_session() {
    let (_guard, dir) = fixture_dir();
    let report = run_session(&config(dir, MonthFilter::February, DayFilter::Tuesday))
        .expect("session runs");
    assert_eq!(report.loaded, 4);
    assert_eq!(report.matched, 3);
    let durations = report.durations.expect("durations section");
    assert_eq!(durations.total_seconds, 3300.0);
    assert_eq!(durations.max_seconds, 1800.0);
}

#[test]
fn empty_view_fails_each_section_without_aborting_the_session() {
    let (_guard, dir) = fixture_dir();
    let report =
        run_session(&config(dir, MonthFilter::June, DayFilter::All)).expect("session runs");
    assert_eq!(report.matched, 0);
    for result in [
        report.travel.map(|_| ()),
        report.stations.map(|_| ()),
        report.durations.map(|_| ()),
        report.demographics.map(|_| ()),
    ] {
        match result.expect_err("section is empty") {
            BikeshareError::EmptyDataset { .. } => {}
            other => panic!("expected EmptyDataset, got {other:?}"),
        }
    }
}

#[test]
fn missing_dataset_aborts_the_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let error = run_session(&config(
        dir.path().to_path_buf(),
        MonthFilter::All,
        DayFilter::All,
    ))
    .expect_err("no data present");
    match error {
        BikeshareError::DataUnavailable { city, .. } => assert_eq!(city, "Chicago"),
        other => panic!("expected DataUnavailable, got {other:?}"),
    }
}

#[test]
fn timings_are_reported_when_requested() {
    let (_guard, dir) = fixture_dir();
    let mut session = config(dir, MonthFilter::All, DayFilter::All);
    session.timings = true;
    let report = run_session(&session).expect("session runs");
    assert!(report.timings.is_some());
}
