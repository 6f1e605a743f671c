//! Lookback window arithmetic and the clamping applied to raw form input.

pub const MINUTE_MS: u64 = 60_000;
const MINUTES_PER_HOUR: u64 = 60;
const MINUTES_PER_DAY: u64 = 24 * MINUTES_PER_HOUR;

pub const MAX_HOURS: u64 = 23;
pub const MAX_MINUTES: u64 = 59;

/// Lookback duration in milliseconds, never shorter than one minute.
pub fn compute_lookback_ms(days: u64, hours: u64, minutes: u64) -> u64 {
    let total_minutes = days
        .saturating_mul(MINUTES_PER_DAY)
        .saturating_add(hours.saturating_mul(MINUTES_PER_HOUR))
        .saturating_add(minutes);
    total_minutes.max(1).saturating_mul(MINUTE_MS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Days,
    Hours,
    Minutes,
}

impl TimeField {
    pub fn clamp(&self, value: u64) -> u64 {
        match self {
            TimeField::Days => value,
            TimeField::Hours => value.min(MAX_HOURS),
            TimeField::Minutes => value.min(MAX_MINUTES),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeField::Days => "Days",
            TimeField::Hours => "Hours",
            TimeField::Minutes => "Minutes",
        }
    }
}

/// Integer-prefix parse of a form value: `" 12abc"` is 12, `"abc"` and
/// anything negative are 0.
pub fn parse_field(raw: &str) -> u64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if negative || digits.is_empty() {
        return 0;
    }
    // overflowing input saturates
    digits.parse().unwrap_or(u64::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            days: 1,
            hours: 0,
            minutes: 0,
        }
    }
}

impl TimeWindow {
    pub fn lookback_ms(&self) -> u64 {
        compute_lookback_ms(self.days, self.hours, self.minutes)
    }

    pub fn get(&self, field: TimeField) -> u64 {
        match field {
            TimeField::Days => self.days,
            TimeField::Hours => self.hours,
            TimeField::Minutes => self.minutes,
        }
    }

    /// Store a raw form value after parsing and clamping it.
    pub fn set_raw(&mut self, field: TimeField, raw: &str) {
        let value = field.clamp(parse_field(raw));
        match field {
            TimeField::Days => self.days = value,
            TimeField::Hours => self.hours = value,
            TimeField::Minutes => self.minutes = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookback_formula() {
        for (d, h, m) in [(0, 0, 1), (1, 0, 0), (0, 23, 59), (3, 4, 5), (30, 0, 0)] {
            let expected = (d * 1440 + h * 60 + m).max(1) * 60_000;
            assert_eq!(compute_lookback_ms(d, h, m), expected);
        }
    }

    #[test]
    fn test_lookback_floor() {
        assert_eq!(compute_lookback_ms(0, 0, 0), 60_000);
    }

    #[test]
    fn test_lookback_saturates() {
        assert_eq!(compute_lookback_ms(u64::MAX, 0, 0), u64::MAX);
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field("12"), 12);
        assert_eq!(parse_field(" 7h"), 7);
        assert_eq!(parse_field("abc"), 0);
        assert_eq!(parse_field(""), 0);
        assert_eq!(parse_field("-4"), 0);
        assert_eq!(parse_field("+3"), 3);
        assert_eq!(parse_field("99999999999999999999999"), u64::MAX);
    }

    #[test]
    fn test_field_clamping() {
        let mut window = TimeWindow::default();
        window.set_raw(TimeField::Hours, "48");
        window.set_raw(TimeField::Minutes, "75");
        window.set_raw(TimeField::Days, "400");
        assert_eq!(
            window,
            TimeWindow {
                days: 400,
                hours: 23,
                minutes: 59
            }
        );

        window.set_raw(TimeField::Hours, "-1");
        assert_eq!(window.hours, 0);
    }

    #[test]
    fn test_default_window_is_one_day() {
        assert_eq!(TimeWindow::default().lookback_ms(), 24 * 60 * 60 * 1000);
    }
}
