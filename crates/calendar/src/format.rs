//! HEC and Excel string renderings of [`DateParts`].

use std::fmt;

use crate::date::DateParts;
use crate::month_table::MONTH_NAMES;

impl DateParts {
    /// Three-letter month abbreviation, e.g. `"Mar"`.
    pub fn month_abbrev(self) -> &'static str {
        &MONTH_NAMES[usize::from(self.month() - 1)][..3]
    }

    /// HEC date, `DDMmmYYYY`, e.g. `"05Mar2014"`.
    pub fn hec_date_string(self) -> String {
        format!("{:02}{}{:04}", self.day(), self.month_abbrev(), self.year())
    }

    /// HEC time, `HHMM`.
    pub fn hec_time_string(self) -> String {
        format!("{:02}{:02}", self.hour(), self.minute())
    }

    /// HEC date and time separated by one space, e.g. `"05Mar2014 1330"`.
    pub fn hec_date_time_string(self) -> String {
        format!("{} {}", self.hec_date_string(), self.hec_time_string())
    }

    /// Excel-friendly `MM/DD/YYYY HH:MM`.
    pub fn excel_date_time_string(self) -> String {
        format!(
            "{:02}/{:02}/{:04} {:02}:{:02}",
            self.month(),
            self.day(),
            self.year(),
            self.hour(),
            self.minute()
        )
    }
}

impl fmt::Display for DateParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hec_date_time_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> DateParts {
        DateParts::new(year, month, day, hour, minute).unwrap()
    }

    #[test]
    fn hec_date_string_pads_day() {
        assert_eq!(date(2014, 3, 5, 0, 0).hec_date_string(), "05Mar2014");
    }

    #[test]
    fn hec_time_string_pads_fields() {
        assert_eq!(date(2014, 3, 5, 7, 3).hec_time_string(), "0703");
    }

    #[test]
    fn hec_date_time_string_joins_with_space() {
        assert_eq!(date(2018, 1, 2, 13, 30).hec_date_time_string(), "02Jan2018 1330");
    }

    #[test]
    fn excel_date_time_string_pads_fields() {
        assert_eq!(date(2014, 3, 5, 7, 3).excel_date_time_string(), "03/05/2014 07:03");
    }

    #[test]
    fn year_is_padded_to_four_digits() {
        assert_eq!(date(987, 12, 31, 23, 59).hec_date_string(), "31Dec0987");
        assert_eq!(date(987, 12, 31, 23, 59).excel_date_time_string(), "12/31/0987 23:59");
    }

    #[test]
    fn month_abbreviations() {
        let expected = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        for (i, abbrev) in expected.iter().enumerate() {
            assert_eq!(date(2014, i as u8 + 1, 1, 0, 0).month_abbrev(), *abbrev);
        }
    }

    #[test]
    fn display_matches_hec_date_time() {
        let d = date(2016, 2, 29, 0, 0);
        assert_eq!(d.to_string(), d.hec_date_time_string());
    }
}
