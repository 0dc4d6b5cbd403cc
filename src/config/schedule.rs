// src/config/schedule.rs

//! Cron syntax checking for job schedules.
//!
//! Accepted grammar:
//! - 5 fields: `minute hour day-of-month month day-of-week`
//! - 6 fields: `second minute hour day-of-month month day-of-week`
//!
//! Day-of-week numbers follow the usual cron convention: `0`-`6` from
//! Sunday, with `7` also Sunday. The `cron` crate counts `1`-`7` from
//! Sunday, so numeric day-of-week items are rewritten before parsing.
//! Other field syntax (ranges, steps, lists, names) is whatever the `cron`
//! crate accepts. Year fields and `@daily`-style macros are rejected.

use std::str::FromStr;

use cron::Schedule;

use crate::errors::ScheduleError;

/// Rewrite a 5- or 6-field expression into the seconds-first form the
/// `cron` crate parses.
pub fn normalize(expression: &str) -> Result<String, ScheduleError> {
    let trimmed = expression.trim();
    if trimmed.starts_with('@') {
        return Err(ScheduleError::Macro(trimmed.to_string()));
    }

    let mut fields: Vec<String> = trimmed.split_whitespace().map(str::to_string).collect();
    match fields.len() {
        5 => fields.insert(0, "0".to_string()),
        6 => {}
        n => return Err(ScheduleError::FieldCount(n)),
    }
    if let Some(day_of_week) = fields.last_mut() {
        *day_of_week = translate_day_of_week(day_of_week);
    }
    Ok(fields.join(" "))
}

/// Rewrite numeric day-of-week items into the `cron` crate's numbering.
///
/// Numeric items (`3`, `1-5`, `0-6/2`, `2/3`) expand to an explicit list.
/// `*` and named items are already equivalent and stay as they are. Items
/// that do not parse are left untouched so the crate reports them.
fn translate_day_of_week(field: &str) -> String {
    field
        .split(',')
        .map(translate_day_of_week_item)
        .collect::<Vec<_>>()
        .join(",")
}

fn translate_day_of_week_item(item: &str) -> String {
    let (base, step) = match item.split_once('/') {
        Some((base, step)) => (base, Some(step)),
        None => (item, None),
    };
    let (start, end) = match base.split_once('-') {
        Some((start, end)) => (start, end),
        // `a/n` runs from `a` through Saturday.
        None if step.is_some() => (base, "6"),
        None => (base, base),
    };

    let (Ok(start), Ok(end)) = (start.parse::<u8>(), end.parse::<u8>()) else {
        return item.to_string();
    };
    let step = match step.map(str::parse::<usize>) {
        None => 1,
        Some(Ok(n)) if n > 0 => n,
        Some(_) => return item.to_string(),
    };
    if start > end || end > 7 {
        return item.to_string();
    }

    let mut days: Vec<u8> = (start..=end).step_by(step).map(|day| day % 7 + 1).collect();
    days.sort_unstable();
    days.dedup();
    days.iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse a schedule string into a `cron::Schedule`.
pub fn parse_schedule(expression: &str) -> Result<Schedule, ScheduleError> {
    let normalized = normalize(expression)?;
    Schedule::from_str(&normalized).map_err(|e| ScheduleError::Syntax(e.to_string()))
}
