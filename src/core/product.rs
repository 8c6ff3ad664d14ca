//! Product record and the value conversions shared by import, prompts and display
//!
//! Prices are always held as integer cents. There are two ways text becomes
//! cents: the CSV form (`$12.50`, digits only once `$` and `.` are removed)
//! and the typed decimal form entered at the add prompt (`12.5`).

use chrono::NaiveDate;
use serde::Serialize;

/// Date format used by the import CSV and by the record viewer
pub const DISPLAY_DATE_FORMAT: &str = "%m/%d/%Y";

/// A single inventory record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Price in cents
    pub price: i64,
    pub quantity: i64,
    pub last_updated: NaiveDate,
}

impl Product {
    /// Price as shown to the user, e.g. `$12.5`
    pub fn display_price(&self) -> String {
        format!("${}", format_price(self.price))
    }

    /// Last-updated date as `MM/DD/YYYY`
    pub fn display_date(&self) -> String {
        format_date(self.last_updated)
    }
}

/// Parse a CSV price cell into cents.
///
/// Every `$` and `.` is removed and the rest is read as an integer. This only
/// gives the right answer for values with exactly two decimal digits:
/// `$5` reads as 5 cents and `$1,234.50` is rejected.
pub fn parse_csv_price(raw: &str) -> Option<i64> {
    raw.trim().replace(['$', '.'], "").parse().ok()
}

/// Parse a decimal amount typed by the user (`9.99`, `12`, `0.5`) into cents.
///
/// Rounds to the nearest cent. Non-finite values are rejected.
pub fn parse_decimal_price(raw: &str) -> Option<i64> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let cents = (value * 100.0).round();
    if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
        return None;
    }
    Some(cents as i64)
}

/// Parse an integer quantity
pub fn parse_quantity(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Parse an `MM/DD/YYYY` date
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DISPLAY_DATE_FORMAT).ok()
}

/// Format a date as `MM/DD/YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Format cents as a decimal amount with the shortest fractional part,
/// keeping at least one digit: 1250 -> `12.5`, 999 -> `9.99`, 1000 -> `10.0`
pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let whole = abs / 100;
    let frac = abs % 100;

    if frac % 10 == 0 {
        format!("{}{}.{}", sign, whole, frac / 10)
    } else {
        format!("{}{}.{:02}", sign, whole, frac)
    }
}
