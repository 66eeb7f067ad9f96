//! Display formatting helpers.
//!
//! Currency rendering lives on [`crate::money::Money`]'s `Display`; this
//! module covers dates. Output is Indonesian-locale, matching the
//! storefront's audience.

use chrono::{DateTime, Datelike, Utc};

/// Indonesian month names, indexed by `month0`.
const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Formats an instant as a long Indonesian date: `17 Agustus 2025`.
pub fn format_date(at: DateTime<Utc>) -> String {
    format!(
        "{} {} {}",
        at.day(),
        MONTHS_ID[at.month0() as usize],
        at.year()
    )
}

/// Formats an instant as a short numeric date: `17/08/2025`.
pub fn format_short_date(at: DateTime<Utc>) -> String {
    format!("{:02}/{:02}/{}", at.day(), at.month(), at.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let at = Utc.with_ymd_and_hms(2025, 8, 17, 10, 0, 0).unwrap();
        assert_eq!(format_date(at), "17 Agustus 2025");

        let at = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();
        assert_eq!(format_date(at), "3 Januari 2024");
    }

    #[test]
    fn test_format_short_date() {
        let at = Utc.with_ymd_and_hms(2025, 8, 17, 10, 0, 0).unwrap();
        assert_eq!(format_short_date(at), "17/08/2025");

        let at = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();
        assert_eq!(format_short_date(at), "03/01/2024");
    }
}
