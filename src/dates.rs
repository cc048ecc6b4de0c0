use chrono::{DateTime, Utc};

const SECS_PER_DAY: i64 = 86_400;

/// Relative-date label for a task's creation time.
///
/// Elapsed days are the ceiling of the absolute difference: anything up to
/// 24h reads "Today", up to 48h "Yesterday", then "N days ago" up to a week,
/// and older tasks fall back to a locale-formatted calendar date.
pub fn format_relative(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_relative_with_locale(created_at, now, &process_locale())
}

/// Same as [`format_relative`] but with an explicit BCP 47 locale tag for the
/// calendar fallback. Pure.
pub fn format_relative_with_locale(
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
    locale: &str,
) -> String {
    let elapsed_secs = (now - created_at).num_seconds().abs();
    let elapsed_days = (elapsed_secs + SECS_PER_DAY - 1) / SECS_PER_DAY;

    match elapsed_days {
        0 | 1 => "Today".to_string(),
        2 => "Yesterday".to_string(),
        3..=7 => format!("{} days ago", elapsed_days - 1),
        _ => calendar_date(created_at, locale),
    }
}

/// Calendar rendering for dates older than a week. A handful of layout
/// families stand in for full locale data: year-first for CJK locales,
/// month-first for US English, day-first elsewhere.
pub fn calendar_date(date: DateTime<Utc>, locale: &str) -> String {
    let date = date.date_naive();
    let tag = locale.replace('_', "-").to_lowercase();
    let pattern = if tag.starts_with("zh") || tag.starts_with("ja") || tag.starts_with("ko") {
        "%Y/%m/%d"
    } else if tag.starts_with("en-us") || tag == "en" {
        "%-m/%-d/%Y"
    } else {
        "%-d/%-m/%Y"
    };
    date.format(pattern).to_string()
}

fn process_locale() -> String {
    sys_locale::get_locale().unwrap_or_else(|| "en-US".to_string())
}
