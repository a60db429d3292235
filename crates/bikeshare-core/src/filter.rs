//! Filter engine: month and day predicates over a normalized dataset.

use tracing::debug;

use bikeshare_model::{Dataset, FilterSpec};

/// Applies the month and day predicates, producing a new dataset.
///
/// Predicates are conjunctive and `All` disables one entirely; record order
/// is preserved and a zero-match result is a valid (empty) dataset, not an
/// error. With `{All, All}` the result equals the input.
pub fn apply_filters(dataset: &Dataset, spec: &FilterSpec) -> Dataset {
    let month = spec.month.month_number();
    let day = spec.day.day_index();
    let records: Vec<_> = dataset
        .records()
        .iter()
        .filter(|record| month.is_none_or(|m| record.month == m))
        .filter(|record| day.is_none_or(|d| record.weekday == d))
        .cloned()
        .collect();
    debug!(
        input = dataset.len(),
        matched = records.len(),
        %spec,
        "applied filters"
    );
    Dataset::new(records, dataset.schema())
}
