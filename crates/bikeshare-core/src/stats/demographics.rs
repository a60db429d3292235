use bikeshare_model::{
    BikeshareError, BirthYearStats, Dataset, DemographicStats, GenderBreakdown, Result, TripRecord,
};

use super::mode::{mode_with_count, value_counts};

/// Counts per user type, plus gender and birth-year sections when the source
/// schema carries those columns. Absent columns omit the section entirely.
pub fn demographic_stats(dataset: &Dataset) -> Result<DemographicStats> {
    let records = dataset.records();
    if records.is_empty() {
        return Err(BikeshareError::EmptyDataset {
            statistic: "user demographics",
        });
    }
    let user_types = value_counts(records.iter().map(|r| r.user_type.as_str()))
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    let genders = if dataset.schema().has_gender {
        Some(gender_breakdown(records))
    } else {
        None
    };
    let birth_years = if dataset.schema().has_birth_year {
        birth_year_stats(records)
    } else {
        None
    };
    Ok(DemographicStats {
        user_types,
        genders,
        birth_years,
    })
}

/// Blank gender cells are reported as an unspecified count instead of being
/// silently dropped.
fn gender_breakdown(records: &[TripRecord]) -> GenderBreakdown {
    let counts = value_counts(records.iter().filter_map(|r| r.gender.as_deref()))
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    let unspecified = records.iter().filter(|r| r.gender.is_none()).count();
    GenderBreakdown {
        counts,
        unspecified,
    }
}

/// `None` when the column exists but no filtered row carries a year.
fn birth_year_stats(records: &[TripRecord]) -> Option<BirthYearStats> {
    let years: Vec<i32> = records.iter().filter_map(|r| r.birth_year).collect();
    let earliest = years.iter().copied().min()?;
    let most_recent = years.iter().copied().max()?;
    let (most_common, most_common_count) = mode_with_count(years.iter().copied())?;
    Some(BirthYearStats {
        earliest,
        most_recent,
        most_common,
        most_common_count,
    })
}
