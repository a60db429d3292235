//! Report rendering: one table section per aggregator.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use serde_json::{Value, json};

use bikeshare_core::format_duration;
use bikeshare_model::{
    DemographicStats, DurationStats, Result, StationStats, TravelTimeStats, day_name, month_name,
};

use crate::types::SessionReport;

pub fn print_report(report: &SessionReport) {
    println!("City: {}", report.city);
    println!("Filter: {}", report.filter);
    println!("Records: {} of {} match", report.matched, report.loaded);
    print_section("Most Frequent Times of Travel", &report.travel, travel_rows);
    print_section(
        "Most Popular Stations and Trip",
        &report.stations,
        station_rows,
    );
    print_section("Trip Duration", &report.durations, duration_rows);
    print_section("User Stats", &report.demographics, demographic_rows);
    if let Some(timings) = &report.timings {
        println!(
            "Timings: load {:?}, normalize {:?}, filter {:?}, aggregate {:?}",
            timings.load, timings.normalize, timings.filter, timings.aggregate
        );
    }
}

fn print_section<T>(title: &str, result: &Result<T>, rows: fn(&T) -> Vec<(String, String)>) {
    println!();
    match result {
        Ok(stats) => {
            let mut table = Table::new();
            table.set_header(vec![
                Cell::new(title).add_attribute(Attribute::Bold),
                Cell::new(""),
            ]);
            apply_table_style(&mut table);
            for (metric, value) in rows(stats) {
                table.add_row(vec![metric, value]);
            }
            println!("{table}");
        }
        Err(error) => println!("{title}: {error}"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn travel_rows(stats: &TravelTimeStats) -> Vec<(String, String)> {
    vec![
        (
            "Most frequent month".to_string(),
            with_count(month_name(stats.month), stats.month_count),
        ),
        (
            "Most frequent day of week".to_string(),
            with_count(day_name(stats.weekday), stats.weekday_count),
        ),
        (
            "Most frequent start hour".to_string(),
            with_count(&format!("{:02}:00", stats.hour), stats.hour_count),
        ),
    ]
}

pub fn station_rows(stats: &StationStats) -> Vec<(String, String)> {
    vec![
        (
            "Most popular start station".to_string(),
            with_count(&stats.start_station, stats.start_count),
        ),
        (
            "Most popular end station".to_string(),
            with_count(&stats.end_station, stats.end_count),
        ),
        (
            "Most popular trip".to_string(),
            with_count(
                &format!("{} to {}", stats.trip_start, stats.trip_end),
                stats.trip_count,
            ),
        ),
    ]
}

pub fn duration_rows(stats: &DurationStats) -> Vec<(String, String)> {
    vec![
        (
            "Total travel time".to_string(),
            format_duration(stats.total_seconds),
        ),
        (
            "Mean travel time".to_string(),
            format_duration(stats.mean_seconds),
        ),
        (
            "Shortest trip".to_string(),
            format_duration(stats.min_seconds),
        ),
        (
            "Longest trip".to_string(),
            format_duration(stats.max_seconds),
        ),
    ]
}

pub fn demographic_rows(stats: &DemographicStats) -> Vec<(String, String)> {
    let mut rows: Vec<(String, String)> = stats
        .user_types
        .iter()
        .map(|(user_type, count)| (format!("User type: {user_type}"), count.to_string()))
        .collect();
    if let Some(genders) = &stats.genders {
        for (gender, count) in &genders.counts {
            rows.push((format!("Gender: {gender}"), count.to_string()));
        }
        if genders.unspecified > 0 {
            rows.push((
                "Gender: not specified".to_string(),
                genders.unspecified.to_string(),
            ));
        }
    }
    if let Some(years) = &stats.birth_years {
        rows.push(("Earliest birth year".to_string(), years.earliest.to_string()));
        rows.push((
            "Most recent birth year".to_string(),
            years.most_recent.to_string(),
        ));
        rows.push((
            "Most common birth year".to_string(),
            with_count(&years.most_common.to_string(), years.most_common_count),
        ));
    }
    rows
}

fn with_count(value: &str, count: usize) -> String {
    format!("{value} ({count} time(s))")
}

/// Machine-readable form of the report; failed sections carry their error
/// message instead of statistics.
pub fn report_json(report: &SessionReport) -> Value {
    json!({
        "city": report.city,
        "filter": report.filter,
        "loaded": report.loaded,
        "matched": report.matched,
        "travel_times": section_json(&report.travel),
        "stations": section_json(&report.stations),
        "durations": section_json(&report.durations),
        "demographics": section_json(&report.demographics),
    })
}

fn section_json<T: serde::Serialize>(result: &Result<T>) -> Value {
    match result {
        Ok(stats) => json!({ "stats": stats }),
        Err(error) => json!({ "error": error.to_string() }),
    }
}
