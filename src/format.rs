//! Display formatting for money and dates.

use std::str::FromStr;

use time::{Date, Month, macros::format_description};

use crate::Error;

/// Format an amount stored in cents as a dollar string, e.g. 12345 -> "$123.45".
///
/// The conversion is exact: the cents are never routed through a float.
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let dollars = group_thousands(cents / 100);

    format!("{sign}${dollars}.{:02}", cents % 100)
}

fn group_thousands(number: u64) -> String {
    let digits = number.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

/// The locales that dates can be displayed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    /// American English, e.g. "Oct 5, 2023".
    #[default]
    EnUs,
    /// British English, e.g. "5 Oct 2023".
    EnGb,
    /// German, e.g. "5. Okt. 2023".
    DeDe,
    /// French, e.g. "5 oct. 2023".
    FrFr,
}

impl Locale {
    fn short_month(self, month: Month) -> &'static str {
        let index = month as usize - 1;

        match self {
            Locale::EnUs | Locale::EnGb => [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ][index],
            Locale::DeDe => [
                "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.",
                "Nov.", "Dez.",
            ][index],
            Locale::FrFr => [
                "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
                "nov.", "déc.",
            ][index],
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "en-US" => Ok(Locale::EnUs),
            "en-GB" => Ok(Locale::EnGb),
            "de-DE" => Ok(Locale::DeDe),
            "fr-FR" => Ok(Locale::FrFr),
            other => Err(Error::UnsupportedLocale(other.to_owned())),
        }
    }
}

/// Render `date` with a short month name in the style of `locale`.
pub fn format_date(date: Date, locale: Locale) -> String {
    let day = date.day();
    let month = locale.short_month(date.month());
    let year = date.year();

    match locale {
        Locale::EnUs => format!("{month} {day}, {year}"),
        Locale::EnGb | Locale::FrFr => format!("{day} {month} {year}"),
        Locale::DeDe => format!("{day}. {month} {year}"),
    }
}

/// Parse an ISO 8601 calendar date, e.g. "2023-10-05".
///
/// # Errors
/// Returns [Error::InvalidDate] if `iso_date` is not a valid calendar date.
pub fn parse_iso_date(iso_date: &str) -> Result<Date, Error> {
    Date::parse(iso_date, format_description!("[year]-[month]-[day]"))
        .map_err(|_| Error::InvalidDate(iso_date.to_owned()))
}

/// Parse an ISO 8601 calendar date and render it for `locale`.
///
/// # Errors
/// Returns [Error::InvalidDate] if `iso_date` is not a valid calendar date.
pub fn format_date_to_local(iso_date: &str, locale: Locale) -> Result<String, Error> {
    parse_iso_date(iso_date).map(|date| format_date(date, locale))
}


#[cfg(test)]
mod format_date_tests {
    use std::str::FromStr;

    use time::macros::date;

    use crate::Error;

    use super::{Locale, format_date, format_date_to_local};

    #[test]
    fn formats_with_default_locale() {
        let got = format_date_to_local("2023-10-05", Locale::default());

        assert_eq!(got, Ok("Oct 5, 2023".to_owned()));
    }

    #[test]
    fn formats_with_german_locale() {
        let locale = Locale::from_str("de-DE").unwrap();

        let got = format_date_to_local("2023-10-05", locale);

        assert_eq!(got, Ok("5. Okt. 2023".to_owned()));
    }

    #[test]
    fn formats_other_locales() {
        let date = date!(2023 - 03 - 21);

        assert_eq!(format_date(date, Locale::EnGb), "21 Mar 2023");
        assert_eq!(format_date(date, Locale::FrFr), "21 mars 2023");
        assert_eq!(format_date(date, Locale::DeDe), "21. März 2023");
    }

    #[test]
    fn fails_on_invalid_date() {
        assert_eq!(
            format_date_to_local("2023-02-30", Locale::default()),
            Err(Error::InvalidDate("2023-02-30".to_owned()))
        );
        assert_eq!(
            format_date_to_local("not a date", Locale::default()),
            Err(Error::InvalidDate("not a date".to_owned()))
        );
    }

    #[test]
    fn fails_on_unknown_locale() {
        assert_eq!(
            Locale::from_str("xx-YY"),
            Err(Error::UnsupportedLocale("xx-YY".to_owned()))
        );
    }
}
