//! Currency formatting for product prices
//!
//! Renders amounts the way the storefront shows them: Argentine peso,
//! dot-grouped thousands, comma decimals, no trailing zero fraction.

/// Fixed currency rendering rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: &'static str,
    pub separator: char,
    pub thousands: char,
    pub decimal: char,
    pub max_fraction_digits: u32,
}

impl CurrencyFormat {
    /// es-AR / ARS, minimum fraction digits 0.
    pub const ARS: Self = Self {
        symbol: "$",
        separator: '\u{a0}',
        thousands: '.',
        decimal: ',',
        max_fraction_digits: 2,
    };

    pub fn format(&self, amount: f64) -> String {
        if amount.is_nan() {
            return format!("{}{}NaN", self.symbol, self.separator);
        }
        if amount.is_infinite() {
            let sign = if amount < 0.0 { "-" } else { "" };
            return format!("{sign}{}{}∞", self.symbol, self.separator);
        }

        let scale = 10_f64.powi(self.max_fraction_digits as i32);
        let scaled = (amount.abs() * scale).round();
        let integer = (scaled / scale).trunc();
        let fraction = (scaled - integer * scale).round() as u64;

        let mut out = String::new();
        if amount < 0.0 && scaled > 0.0 {
            out.push('-');
        }
        out.push_str(self.symbol);
        out.push(self.separator);
        out.push_str(&group_thousands(integer as u64, self.thousands));

        if fraction > 0 {
            let digits = format!(
                "{:0width$}",
                fraction,
                width = self.max_fraction_digits as usize
            );
            out.push(self.decimal);
            out.push_str(digits.trim_end_matches('0'));
        }

        out
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::ARS
    }
}

fn group_thousands(value: u64, sep: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(sep);
        }
        grouped.push(ch);
    }
    grouped
}
