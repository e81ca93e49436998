use chrono::NaiveDateTime;

pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";
// Table cell formats: single books show the time of day, series cells
// only the date, as rendered by the catalog table.
pub const TABLE_DATE_FMT: &str = "%Y-%m-%d";
pub const TABLE_DATETIME_FMT: &str = "%Y-%m-%d %H:%M";

pub fn fmt_table_date(time: NaiveDateTime) -> String {
    time.format(TABLE_DATE_FMT).to_string()
}

pub fn fmt_table_datetime(time: NaiveDateTime) -> String {
    time.format(TABLE_DATETIME_FMT).to_string()
}

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time.format(DATE_FMT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)?;
        Ok(time)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::utils::date::{fmt_table_date, fmt_table_datetime};

    #[test]
    fn test_should_format_table_cells() {
        let time = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(13, 5, 0))
            .expect("valid timestamp");
        assert_eq!("2024-03-09", fmt_table_date(time));
        assert_eq!("2024-03-09 13:05", fmt_table_datetime(time));
    }
}
