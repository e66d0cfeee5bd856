use chrono::{Local, NaiveDate};

/// Today's calendar date in the server's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
