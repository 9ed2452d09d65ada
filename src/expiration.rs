use crate::model::IngredientRecord;
use chrono::{Days, NaiveDate};

/// Records whose expiration date falls in `[now, now + window_days]`.
///
/// Input order is kept. Records without a date, or already past their date,
/// are left out.
pub fn records_expiring_within(
    records: &[IngredientRecord],
    now: NaiveDate,
    window_days: u32,
) -> Vec<&IngredientRecord> {
    let last_day = now
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);

    records
        .iter()
        .filter(|record| {
            record
                .expiration_date
                .is_some_and(|date| date >= now && date <= last_day)
        })
        .collect()
}

/// Whole days from `now` until the record expires; negative once expired.
pub fn days_until(record: &IngredientRecord, now: NaiveDate) -> Option<i64> {
    record
        .expiration_date
        .map(|date| date.signed_duration_since(now).num_days())
}

/// Dated records ordered by expiration date, soonest first.
pub fn expiration_timeline(records: &[IngredientRecord]) -> Vec<&IngredientRecord> {
    let mut dated: Vec<&IngredientRecord> = records
        .iter()
        .filter(|record| record.expiration_date.is_some())
        .collect();
    dated.sort_by_key(|record| record.expiration_date);
    dated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(offset: i64) -> NaiveDate {
        let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        today + chrono::Duration::days(offset)
    }

    fn record(name: &str, offset: i64) -> IngredientRecord {
        IngredientRecord::new(name, day(offset))
    }

    fn names<'a>(records: &[&'a IngredientRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(records_expiring_within(&[], day(0), 3).is_empty());
    }

    #[test]
    fn test_window_boundaries() {
        let records = vec![
            record("yesterday", -1),
            record("today", 0),
            record("edge", 3),
            record("beyond", 4),
        ];

        let expiring = records_expiring_within(&records, day(0), 3);
        assert_eq!(names(&expiring), vec!["today", "edge"]);
    }

    #[test]
    fn test_zero_window_is_today_only() {
        let records = vec![record("milk", 0), record("eggs", 1)];
        let expiring = records_expiring_within(&records, day(0), 0);
        assert_eq!(names(&expiring), vec!["milk"]);
    }

    #[test]
    fn test_undated_records_are_excluded_and_order_is_kept() {
        let records = vec![
            record("cream", 2),
            IngredientRecord {
                name: "mystery".to_string(),
                expiration_date: None,
            },
            record("butter", 1),
            record("cream", 0),
        ];

        let expiring = records_expiring_within(&records, day(0), 3);
        assert_eq!(names(&expiring), vec!["cream", "butter", "cream"]);
    }

    #[test]
    fn test_huge_window_saturates() {
        let records = vec![record("honey", 365 * 100)];
        let expiring = records_expiring_within(&records, day(0), u32::MAX);
        assert_eq!(expiring.len(), 1);
    }

    #[test]
    fn test_days_until() {
        assert_eq!(days_until(&record("milk", 5), day(0)), Some(5));
        assert_eq!(days_until(&record("milk", -2), day(0)), Some(-2));
        let undated = IngredientRecord {
            name: "salt".to_string(),
            expiration_date: None,
        };
        assert_eq!(days_until(&undated, day(0)), None);
    }

    #[test]
    fn test_timeline_sorts_dated_records() {
        let records = vec![
            record("eggs", 5),
            IngredientRecord {
                name: "salt".to_string(),
                expiration_date: None,
            },
            record("milk", 1),
            record("cheese", 5),
        ];

        let timeline = expiration_timeline(&records);
        assert_eq!(names(&timeline), vec!["milk", "eggs", "cheese"]);
    }
}
