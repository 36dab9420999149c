use chrono::{DateTime, SecondsFormat, Utc};

/// ISO-8601 in UTC with millisecond precision, e.g. `2024-05-01T10:00:00.000Z`.
pub fn datetime_to_string(datetime: DateTime<Utc>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn datetime_to_string_opt(datetime: Option<DateTime<Utc>>) -> Option<String> {
    datetime.map(datetime_to_string)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_datetime_to_string() {
        let datetime = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        assert_eq!(datetime_to_string(datetime), "2024-05-01T10:00:00.000Z");
        assert_eq!(datetime_to_string_opt(None), None);
    }
}
