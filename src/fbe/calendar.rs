use chrono::{Datelike, FixedOffset, NaiveDate, Utc, Weekday};

/// The app runs on Japan Standard Time: UTC+9, no daylight saving.
fn jst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("UTC+9 is a valid offset")
}

/// Current calendar date in Asia/Tokyo.
///
/// Used whenever a form is submitted without a custom date.
pub fn today_jst() -> NaiveDate {
    Utc::now().with_timezone(&jst()).date_naive()
}

/// Renders the label stamped on recorded transactions: `2024/01/15(月)`.
pub fn entry_date_label(date: NaiveDate) -> String {
    format!(
        "{:04}/{:02}/{:02}({})",
        date.year(),
        date.month(),
        date.day(),
        weekday_ja(date.weekday())
    )
}

fn weekday_ja(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "月",
        Weekday::Tue => "火",
        Weekday::Wed => "水",
        Weekday::Thu => "木",
        Weekday::Fri => "金",
        Weekday::Sat => "土",
        Weekday::Sun => "日",
    }
}
