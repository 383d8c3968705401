use chrono::{DateTime, Local, NaiveDate, Utc};

/// `50000` -> `₦50,000`
pub fn naira(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    out.push('₦');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn short_date(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

pub fn long_date(d: NaiveDate) -> String {
    d.format("%B %-d, %Y").to_string()
}

pub fn clock_time(t: DateTime<Utc>) -> String {
    t.with_timezone(&Local).format("%H:%M").to_string()
}

/// Two-letter avatar fallback.
pub fn initials(name: &str) -> String {
    name.chars().take(2).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naira_groups_thousands() {
        assert_eq!(naira(0), "₦0");
        assert_eq!(naira(999), "₦999");
        assert_eq!(naira(8000), "₦8,000");
        assert_eq!(naira(100000), "₦100,000");
        assert_eq!(naira(1234567), "₦1,234,567");
    }

    #[test]
    fn dates() {
        let d = NaiveDate::from_ymd_opt(2023, 12, 5).unwrap();
        assert_eq!(short_date(d), "05/12/2023");
        assert_eq!(long_date(d), "December 5, 2023");
    }

    #[test]
    fn initials_take_two_chars() {
        assert_eq!(initials("Sarah Okafor"), "Sa");
        assert_eq!(initials("J"), "J");
    }
}
