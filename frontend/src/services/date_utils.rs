use chrono::NaiveDate;
use js_sys::Date;

/// Today's date according to the browser's local clock
pub fn today() -> NaiveDate {
    date_from_js(&Date::new_0())
}

/// Convert a JS `Date` to its local calendar day
pub fn date_from_js(date: &Date) -> NaiveDate {
    let year = date.get_full_year() as i32;
    let month = date.get_month() + 1; // JavaScript months are 0-indexed
    let day = date.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
