use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BikeshareError;

/// Month names for the full calendar year, indexable by month number - 1.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Day names indexable by weekday number (Monday = 0).
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Display name for a calendar month number (January = 1).
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("unknown")
}

/// Display name for a weekday number (Monday = 0).
pub fn day_name(weekday: u32) -> &'static str {
    DAY_NAMES.get(weekday as usize).copied().unwrap_or("unknown")
}

/// Month restriction. The published datasets cover January through June only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthFilter {
    #[default]
    All,
    January,
    February,
    March,
    April,
    May,
    June,
}

impl MonthFilter {
    /// Calendar month number to match, or `None` when unrestricted.
    pub fn month_number(self) -> Option<u32> {
        match self {
            MonthFilter::All => None,
            MonthFilter::January => Some(1),
            MonthFilter::February => Some(2),
            MonthFilter::March => Some(3),
            MonthFilter::April => Some(4),
            MonthFilter::May => Some(5),
            MonthFilter::June => Some(6),
        }
    }

    /// Menu index used by the interactive prompt (0 = all, 1-6 = month).
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(MonthFilter::All),
            1 => Some(MonthFilter::January),
            2 => Some(MonthFilter::February),
            3 => Some(MonthFilter::March),
            4 => Some(MonthFilter::April),
            5 => Some(MonthFilter::May),
            6 => Some(MonthFilter::June),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self.month_number() {
            None => "All",
            Some(month) => month_name(month),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MonthFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(MonthFilter::All),
            "january" => Ok(MonthFilter::January),
            "february" => Ok(MonthFilter::February),
            "march" => Ok(MonthFilter::March),
            "april" => Ok(MonthFilter::April),
            "may" => Ok(MonthFilter::May),
            "june" => Ok(MonthFilter::June),
            _ => Err(BikeshareError::InvalidInput {
                value: s.trim().to_string(),
                expected: "all or a month name january through june",
            }),
        }
    }
}

/// Day-of-week restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayFilter {
    #[default]
    All,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayFilter {
    /// Weekday number to match (Monday = 0), or `None` when unrestricted.
    pub fn day_index(self) -> Option<u32> {
        match self {
            DayFilter::All => None,
            DayFilter::Monday => Some(0),
            DayFilter::Tuesday => Some(1),
            DayFilter::Wednesday => Some(2),
            DayFilter::Thursday => Some(3),
            DayFilter::Friday => Some(4),
            DayFilter::Saturday => Some(5),
            DayFilter::Sunday => Some(6),
        }
    }

    /// Menu index used by the interactive prompt (0 = all, 1-7 = Monday-Sunday).
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(DayFilter::All),
            1 => Some(DayFilter::Monday),
            2 => Some(DayFilter::Tuesday),
            3 => Some(DayFilter::Wednesday),
            4 => Some(DayFilter::Thursday),
            5 => Some(DayFilter::Friday),
            6 => Some(DayFilter::Saturday),
            7 => Some(DayFilter::Sunday),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self.day_index() {
            None => "All",
            Some(day) => day_name(day),
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DayFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(DayFilter::All),
            "monday" => Ok(DayFilter::Monday),
            "tuesday" => Ok(DayFilter::Tuesday),
            "wednesday" => Ok(DayFilter::Wednesday),
            "thursday" => Ok(DayFilter::Thursday),
            "friday" => Ok(DayFilter::Friday),
            "saturday" => Ok(DayFilter::Saturday),
            "sunday" => Ok(DayFilter::Sunday),
            _ => Err(BikeshareError::InvalidInput {
                value: s.trim().to_string(),
                expected: "all or a day name monday through sunday",
            }),
        }
    }
}

/// User-chosen month/day restriction applied before aggregation.
///
/// Both predicates are independent and conjunctive; `All` disables one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSpec {
    pub fn is_unfiltered(&self) -> bool {
        self.month == MonthFilter::All && self.day == DayFilter::All
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "month={}, day={}", self.month, self.day)
    }
}
