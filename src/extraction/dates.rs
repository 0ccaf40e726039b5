use chrono::{Datelike, Local, NaiveDate};

/// Earliest birth year accepted as plausible.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// Normalize a raw date candidate (slashes to dashes, spaces stripped) and
/// parse it under the supported formats. Returns the normalized string
/// together with the parsed date, or `None` when the candidate is not a valid
/// calendar date in any supported format.
///
/// Supported: `DD-MM-YYYY`, `DD-MM-YY`, `YYYY-MM-DD`. The format is picked by
/// component shape: a 4-digit first component is ISO, otherwise the year
/// length decides between the day-first forms.
pub fn parse_candidate(raw: &str) -> Option<(String, NaiveDate)> {
    let normalized: String = raw.replace('/', "-").replace(' ', "");
    let parts: Vec<&str> = normalized.split('-').collect();
    if parts.len() != 3 {
        return None;
    }
    let date = if parts[0].len() == 4 {
        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").ok()?
    } else if parts[2].len() == 2 {
        NaiveDate::parse_from_str(&normalized, "%d-%m-%y").ok()?
    } else if parts[2].len() == 4 {
        NaiveDate::parse_from_str(&normalized, "%d-%m-%Y").ok()?
    } else {
        return None;
    };
    Some((normalized, date))
}

/// A birth date is plausible when its year lies in [1900, current year].
pub fn within_birth_range(date: NaiveDate) -> bool {
    let year = date.year();
    (MIN_BIRTH_YEAR..=Local::now().year()).contains(&year)
}

/// Completed years between `dob` and `today`.
pub fn age_at(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// Current age for a given date of birth.
pub fn age_from_dob(dob: NaiveDate) -> i32 {
    age_at(dob, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_formats() {
        let (normalized, date) = parse_candidate("12-03-1994").unwrap();
        assert_eq!(normalized, "12-03-1994");
        assert_eq!(date, NaiveDate::from_ymd_opt(1994, 3, 12).unwrap());

        let (normalized, date) = parse_candidate("12/03/1994").unwrap();
        assert_eq!(normalized, "12-03-1994");
        assert_eq!(date, NaiveDate::from_ymd_opt(1994, 3, 12).unwrap());

        let (_, date) = parse_candidate("1994-03-12").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1994, 3, 12).unwrap());

        let (_, date) = parse_candidate("12-03-94").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1994, 3, 12).unwrap());
    }

    #[test]
    fn test_parse_iso_format_with_slashes() {
        let (normalized, date) = parse_candidate("1994/03/12").unwrap();
        assert_eq!(normalized, "1994-03-12");
        assert_eq!(date, NaiveDate::from_ymd_opt(1994, 3, 12).unwrap());
    }

    #[test]
    fn test_parse_accepts_single_digit_day_and_month() {
        let (normalized, date) = parse_candidate("2-3-1994").unwrap();
        assert_eq!(normalized, "2-3-1994");
        assert_eq!(date, NaiveDate::from_ymd_opt(1994, 3, 2).unwrap());
    }

    #[test]
    fn test_parse_rejects_invalid_calendar_dates() {
        assert!(parse_candidate("31-02-2030").is_none());
        assert!(parse_candidate("00-13-1990").is_none());
        assert!(parse_candidate("12-03").is_none());
        assert!(parse_candidate("not a date").is_none());
    }

    #[test]
    fn test_birth_range() {
        assert!(within_birth_range(NaiveDate::from_ymd_opt(1994, 3, 12).unwrap()));
        assert!(within_birth_range(NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()));
        assert!(!within_birth_range(NaiveDate::from_ymd_opt(1899, 12, 31).unwrap()));
        assert!(!within_birth_range(NaiveDate::from_ymd_opt(3030, 1, 1).unwrap()));
    }

    #[test]
    fn test_age_at_counts_completed_years() {
        let dob = NaiveDate::from_ymd_opt(1994, 3, 12).unwrap();
        let before_birthday = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let on_birthday = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        let after_birthday = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
        assert_eq!(age_at(dob, before_birthday), 29);
        assert_eq!(age_at(dob, on_birthday), 30);
        assert_eq!(age_at(dob, after_birthday), 30);
    }
}
