//! Interactive prompts with typed validation.
//!
//! Each answer parses into its enum via a specific `InvalidInput` error; the
//! prompt loop reports the error and asks again. Unvalidated text never
//! reaches the pipeline.

use std::io::{self, BufRead as _, Write as _};
use std::path::Path;

use anyhow::bail;

use bikeshare_model::{BikeshareError, City, DayFilter, FilterSpec, MonthFilter, Result};

use crate::types::SessionConfig;

const CITY_MENU: &str = "\nChoose city:\n\n1 - Chicago\n2 - New York City\n3 - Washington\n";
const MONTH_MENU: &str = "\nChoose month:\n\n0 - All (January-June)\n1 - January\n2 - February\n\
                          3 - March\n4 - April\n5 - May\n6 - June\n";
const DAY_MENU: &str = "\nChoose day of week:\n\n0 - All (Monday-Sunday)\n1 - Monday\n\
                        2 - Tuesday\n3 - Wednesday\n4 - Thursday\n5 - Friday\n6 - Saturday\n\
                        7 - Sunday\n";
const TIMINGS_MENU: &str = "\nReport timings:\n\n0 - Off\n1 - On\n";

/// Collects one fully validated session configuration from the terminal.
pub fn prompt_session_config(data_dir: &Path) -> anyhow::Result<SessionConfig> {
    println!("Hello! Let's explore some US bikeshare data!");
    let city = prompt_until(CITY_MENU, "Choose [1-3] and press <enter>: ", parse_city_choice)?;
    let month = prompt_until(
        MONTH_MENU,
        "Choose [0-6] and press <enter>: ",
        parse_month_choice,
    )?;
    let day = prompt_until(DAY_MENU, "Choose [0-7] and press <enter>: ", parse_day_choice)?;
    let timings = prompt_until(
        TIMINGS_MENU,
        "Choose [0-1] and press <enter>: ",
        parse_timings_choice,
    )?;
    println!("\nYour choice: {city}, month={month}, day={day}\n");
    Ok(SessionConfig {
        data_dir: data_dir.to_path_buf(),
        city,
        filter: FilterSpec { month, day },
        timings,
    })
}

/// Asks whether to run another session; anything but yes declines.
pub fn prompt_restart() -> anyhow::Result<bool> {
    let line = read_line("\nWould you like to restart? Enter yes to continue: ")?;
    Ok(parse_restart_choice(&line))
}

/// A menu number (1-3) or a city name.
pub fn parse_city_choice(input: &str) -> Result<City> {
    let trimmed = input.trim();
    match trimmed {
        "1" => Ok(City::Chicago),
        "2" => Ok(City::NewYorkCity),
        "3" => Ok(City::Washington),
        _ => trimmed.parse::<City>().map_err(|_| BikeshareError::InvalidInput {
            value: trimmed.to_string(),
            expected: "a number 1-3 or a city name",
        }),
    }
}

/// A menu number (0 = all, 1-6) or a month name.
pub fn parse_month_choice(input: &str) -> Result<MonthFilter> {
    let trimmed = input.trim();
    if let Ok(index) = trimmed.parse::<u32>() {
        return MonthFilter::from_index(index).ok_or(BikeshareError::InvalidInput {
            value: trimmed.to_string(),
            expected: "a number 0-6 or a month name",
        });
    }
    trimmed.parse::<MonthFilter>().map_err(|_| BikeshareError::InvalidInput {
        value: trimmed.to_string(),
        expected: "a number 0-6 or a month name",
    })
}

/// A menu number (0 = all, 1-7 = Monday-Sunday) or a day name.
pub fn parse_day_choice(input: &str) -> Result<DayFilter> {
    let trimmed = input.trim();
    if let Ok(index) = trimmed.parse::<u32>() {
        return DayFilter::from_index(index).ok_or(BikeshareError::InvalidInput {
            value: trimmed.to_string(),
            expected: "a number 0-7 or a day name",
        });
    }
    trimmed.parse::<DayFilter>().map_err(|_| BikeshareError::InvalidInput {
        value: trimmed.to_string(),
        expected: "a number 0-7 or a day name",
    })
}

/// 0/off/no disables timings, 1/on/yes enables them.
pub fn parse_timings_choice(input: &str) -> Result<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "0" | "off" | "no" => Ok(false),
        "1" | "on" | "yes" => Ok(true),
        other => Err(BikeshareError::InvalidInput {
            value: other.to_string(),
            expected: "0 or 1",
        }),
    }
}

pub fn parse_restart_choice(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "yes" | "y")
}

fn prompt_until<T>(menu: &str, ask: &str, parse: fn(&str) -> Result<T>) -> anyhow::Result<T> {
    println!("{menu}");
    loop {
        let line = read_line(ask)?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(error) => println!("{error}"),
        }
    }
}

fn read_line(ask: &str) -> anyhow::Result<String> {
    print!("{ask}");
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        bail!("input closed before a choice was made");
    }
    Ok(line)
}
