use chrono::{DateTime, Datelike, Local, TimeZone};

/// Returns the current calendar year in the host's local time zone.
pub fn current_year() -> i64 {
    year_at(&Local::now())
}

/// Returns the calendar year of `instant` as seen in its own time zone.
pub fn year_at<Tz: TimeZone>(instant: &DateTime<Tz>) -> i64 {
    i64::from(instant.year())
}

/// `current_year - age`, widened so any `i64` age yields the exact year.
pub fn birth_year(current_year: i64, age: i64) -> i128 {
    i128::from(current_year) - i128::from(age)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn at(timestamp: i64, offset_hours: i32) -> DateTime<FixedOffset> {
        let offset = FixedOffset::east_opt(offset_hours * 3_600).unwrap();
        DateTime::from_timestamp(timestamp, 0)
            .unwrap()
            .with_timezone(&offset)
    }

    #[test]
    fn year_follows_the_local_offset() {
        // 2024-12-31T20:00:00Z
        let instant = 1_735_675_200;
        assert_eq!(year_at(&at(instant, 0)), 2024);
        assert_eq!(year_at(&at(instant, 14)), 2025);
        assert_eq!(year_at(&at(instant, -10)), 2024);
    }

    #[test]
    fn west_of_utc_lags_behind_new_year() {
        // 2025-01-01T05:00:00Z
        let instant = 1_735_707_600;
        assert_eq!(year_at(&at(instant, 0)), 2025);
        assert_eq!(year_at(&at(instant, -8)), 2024);
    }

    #[test]
    fn epoch_is_1970_in_utc() {
        let epoch = DateTime::from_timestamp(0, 0).unwrap();
        assert_eq!(year_at(&epoch), 1970);
        assert_eq!(year_at(&epoch.with_timezone(&at(0, -1).timezone())), 1969);
    }

    #[test]
    fn current_year_matches_local_clock() {
        let local = Local::now().year();
        let year = current_year();
        // Tolerate a New Year rollover between the two reads.
        assert!(year == i64::from(local) || year == i64::from(local) + 1);
        assert!(year >= i64::from(Utc::now().year()) - 1);
    }

    #[test]
    fn birth_year_subtracts_age() {
        assert_eq!(birth_year(2024, 30), 1994);
        assert_eq!(birth_year(2024, -5), 2029);
    }

    #[test]
    fn birth_year_is_exact_at_i64_bounds() {
        assert_eq!(
            birth_year(2024, i64::MIN),
            2024 + 9_223_372_036_854_775_808
        );
        assert_eq!(
            birth_year(2024, -9_223_372_036_854_775_807),
            9_223_372_036_854_777_831
        );
        assert_eq!(
            birth_year(2024, i64::MAX),
            2024 - 9_223_372_036_854_775_807
        );
    }
}
