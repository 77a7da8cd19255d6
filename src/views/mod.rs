//! Derived views over the store: filter predicates and aggregate statistics.
//!
//! Pages hold their filter state in signals and recompute these on every
//! render. Nothing here touches the DOM, so the arithmetic the stat cards
//! show is tested directly.

pub mod analytics;
pub mod dispatch;
pub mod drivers;
pub mod fleet;
pub mod inventory;
pub mod packages;
pub mod payroll;
pub mod safety;
pub mod scheduling;

/// Case-insensitive substring match against any of `fields`.
/// An empty (or all-whitespace) term matches everything.
pub fn matches_search(term: &str, fields: &[&str]) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&term))
}

/// `None` is the "All" option of a filter dropdown
pub fn matches_option<T: PartialEq>(filter: Option<T>, value: T) -> bool {
    filter.map_or(true, |wanted| wanted == value)
}

pub fn sum(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().sum()
}

/// Mean of `values`, or 0 for an empty input
pub fn average(values: impl IntoIterator<Item = f64>) -> f64 {
    let (total, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(total, count), v| (total + v, count + 1));
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

/// `part / whole` in percent, or 0 when `whole` is 0
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = group_thousands(cents / 100);
    format!("{}${}.{:02}", if negative { "-" } else { "" }, dollars, cents % 100)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn format_count(value: u64) -> String {
    group_thousands(value)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_matches_search() {
        assert!(matches_search("", &["anything"]));
        assert!(matches_search("  ", &["anything"]));
        assert!(matches_search("TRANSIT", &["DSP-4101", "Ford Transit 250"]));
        assert!(!matches_search("sprinter", &["DSP-4101", "Ford Transit 250"]));
    }

    #[test]
    fn test_matches_option() {
        assert!(matches_option(None, 3));
        assert!(matches_option(Some(3), 3));
        assert!(!matches_option(Some(4), 3));
    }

    #[test]
    fn test_average_and_percentage_of_empty_inputs() {
        assert_eq!(average(Vec::new()), 0.0);
        assert_eq!(percentage(3, 0), 0.0);
        assert_eq!(average(vec![90.0, 80.0]), 85.0);
        assert_eq!(percentage(1, 4), 25.0);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(89.99), "$89.99");
        assert_eq!(format_currency(2_407.49), "$2,407.49");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567.00");
        assert_eq!(format_currency(-12.5), "-$12.50");
    }

    #[test]
    fn test_format_percent_and_count() {
        assert_eq!(format_percent(66.666), "66.7%");
        assert_eq!(format_count(48_210), "48,210");
        assert_eq!(format_count(999), "999");
    }
}
