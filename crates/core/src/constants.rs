/// Alert fires when the remaining share of a budget drops to this
/// percentage or below.
pub const ALERT_REMAINING_PERCENT: &str = "20";

/// Decimal places used when reporting percentages.
pub const PERCENT_DECIMAL_PLACES: u32 = 2;

/// Chrono format string for a budget period (calendar month).
pub const PERIOD_FORMAT: &str = "%Y-%m";

/// Marker scope key for the aggregate budget alert.
pub const TOTAL_ALERT_SCOPE: &str = "total";

/// Number of recent expenses carried in a report.
pub const REPORT_RECENT_EXPENSES: usize = 50;
