//! 月度付款计划日期展开
//!
//! 给定到期日（每月几号）和一个参考月份区间，生成每个月的到期日期。
//! 当月份没有该日（如 4 月 31 日）时，取该月最后一个日历日。

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::errors::{Result, SchoolAdminError};

/// 返回某年某月的天数
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("first day of month is always valid");
    first_of_next.pred_opt().expect("date has a predecessor").day()
}

/// 到期日落在月内的具体日期，超出月末时取月末
pub fn clamped_due_date(year: i32, month: u32, due_day: u32) -> NaiveDate {
    let day = due_day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).expect("clamped day is always valid")
}

/// 解析 "YYYY-MM" 形式的参考月份
pub fn parse_month(value: &str) -> Result<(i32, u32)> {
    let (year_str, month_str) = value
        .split_once('-')
        .ok_or_else(|| SchoolAdminError::date_parse(format!("无效的月份格式: {value}")))?;

    let year: i32 = year_str
        .parse()
        .map_err(|_| SchoolAdminError::date_parse(format!("无效的年份: {value}")))?;
    let month: u32 = month_str
        .parse()
        .map_err(|_| SchoolAdminError::date_parse(format!("无效的月份: {value}")))?;

    if !(1..=12).contains(&month) {
        return Err(SchoolAdminError::date_parse(format!(
            "月份必须在 1 到 12 之间: {value}"
        )));
    }

    Ok((year, month))
}

/// 展开区间内每个月的到期日期（含两端）
///
/// `due_day` 取值 1..=31；`start`/`end` 为 (year, month)。
pub fn monthly_due_dates(
    start: (i32, u32),
    end: (i32, u32),
    due_day: u32,
) -> Result<Vec<NaiveDate>> {
    if !(1..=31).contains(&due_day) {
        return Err(SchoolAdminError::schedule_generation(format!(
            "到期日必须在 1 到 31 之间: {due_day}"
        )));
    }

    let (start_year, start_month) = start;
    let (end_year, end_month) = end;

    let start_index = start_year * 12 + start_month as i32 - 1;
    let end_index = end_year * 12 + end_month as i32 - 1;
    if start_index > end_index {
        return Err(SchoolAdminError::schedule_generation(
            "起始月份不能晚于结束月份",
        ));
    }

    let mut dates = Vec::with_capacity((end_index - start_index + 1) as usize);
    for index in start_index..=end_index {
        let year = index.div_euclid(12);
        let month = index.rem_euclid(12) as u32 + 1;
        dates.push(clamped_due_date(year, month, due_day));
    }

    Ok(dates)
}

/// 过滤掉已有付款记录的月份
pub fn filter_existing(dates: Vec<NaiveDate>, existing: &HashSet<NaiveDate>) -> Vec<NaiveDate> {
    dates
        .into_iter()
        .filter(|d| !existing.contains(d))
        .collect()
}

/// 日期对应的星期名（小写英文，与前端约定一致）
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2026, 1), 31);
        assert_eq!(days_in_month(2026, 4), 30);
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29); // 闰年
        assert_eq!(days_in_month(2026, 12), 31);
    }

    #[test]
    fn test_due_date_clamped_to_month_end() {
        assert_eq!(clamped_due_date(2026, 4, 31), date(2026, 4, 30));
        assert_eq!(clamped_due_date(2026, 2, 30), date(2026, 2, 28));
        assert_eq!(clamped_due_date(2024, 2, 30), date(2024, 2, 29));
        assert_eq!(clamped_due_date(2026, 1, 15), date(2026, 1, 15));
    }

    #[test]
    fn test_one_date_per_month_in_range() {
        let dates = monthly_due_dates((2026, 1), (2026, 12), 5).unwrap();
        assert_eq!(dates.len(), 12);
        for (i, d) in dates.iter().enumerate() {
            assert_eq!(d.month() as usize, i + 1);
            assert_eq!(d.day(), 5);
        }
    }

    #[test]
    fn test_range_crosses_year_boundary() {
        let dates = monthly_due_dates((2026, 11), (2027, 2), 10).unwrap();
        assert_eq!(
            dates,
            vec![
                date(2026, 11, 10),
                date(2026, 12, 10),
                date(2027, 1, 10),
                date(2027, 2, 10),
            ]
        );
    }

    #[test]
    fn test_day_31_clamps_on_short_months() {
        let dates = monthly_due_dates((2026, 1), (2026, 6), 31).unwrap();
        assert_eq!(
            dates,
            vec![
                date(2026, 1, 31),
                date(2026, 2, 28),
                date(2026, 3, 31),
                date(2026, 4, 30),
                date(2026, 5, 31),
                date(2026, 6, 30),
            ]
        );
    }

    #[test]
    fn test_single_month_range() {
        let dates = monthly_due_dates((2026, 7), (2026, 7), 1).unwrap();
        assert_eq!(dates, vec![date(2026, 7, 1)]);
    }

    #[test]
    fn test_invalid_ranges_rejected() {
        assert!(monthly_due_dates((2026, 5), (2026, 4), 1).is_err());
        assert!(monthly_due_dates((2026, 1), (2026, 12), 0).is_err());
        assert!(monthly_due_dates((2026, 1), (2026, 12), 32).is_err());
    }

    #[test]
    fn test_filter_existing_skips_duplicates() {
        let dates = monthly_due_dates((2026, 1), (2026, 4), 10).unwrap();
        let existing: HashSet<NaiveDate> =
            [date(2026, 2, 10), date(2026, 3, 10)].into_iter().collect();
        let remaining = filter_existing(dates, &existing);
        assert_eq!(remaining, vec![date(2026, 1, 10), date(2026, 4, 10)]);
    }

    #[test]
    fn test_filter_existing_all_present_yields_empty() {
        let dates = monthly_due_dates((2026, 1), (2026, 2), 1).unwrap();
        let existing: HashSet<NaiveDate> = dates.iter().copied().collect();
        assert!(filter_existing(dates, &existing).is_empty());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2026-03").unwrap(), (2026, 3));
        assert_eq!(parse_month("2026-12").unwrap(), (2026, 12));
        assert!(parse_month("2026").is_err());
        assert!(parse_month("2026-13").is_err());
        assert!(parse_month("abcd-01").is_err());
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(date(2026, 8, 28)), "friday");
        assert_eq!(weekday_name(date(2026, 8, 30)), "sunday");
    }
}
