use rust_decimal::{Decimal, RoundingStrategy};

/// How a native-currency amount is rendered in a section header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat<'a> {
    pub decimals: u32,
    pub grouping: bool,
    pub symbol: &'a str,
}

/// Symbol for a native currency code. Unknown codes render with `$`.
pub fn currency_symbol(code: &str) -> &'static str {
    match code.to_ascii_uppercase().as_str() {
        "EUR" => "€",
        "GBP" => "£",
        "JPY" | "CNY" => "¥",
        "KRW" => "₩",
        "RUB" => "₽",
        "INR" => "₹",
        "ETH" => "Ξ",
        _ => "$",
    }
}

fn group_int_digits(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        out.push(ch);
        let remaining = len - i - 1;
        if remaining > 0 && remaining % 3 == 0 {
            out.push(',');
        }
    }
    out
}

fn fixed_fraction(s: &str, dp: u32) -> (String, String) {
    let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));
    let mut frac: String = frac_part.chars().take(dp as usize).collect();
    while frac.len() < dp as usize {
        frac.push('0');
    }
    (int_part.to_string(), frac)
}

/// Format an amount like `$1234.50`: rounded half away from zero to exactly
/// `decimals` places, symbol prefixed, sign before the symbol.
pub fn format_currency(value: Decimal, format: &CurrencyFormat<'_>) -> String {
    let rounded = value.round_dp_with_strategy(format.decimals, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let (int_part, frac) = fixed_fraction(&rounded.abs().normalize().to_string(), format.decimals);
    let int_part = if format.grouping {
        group_int_digits(&int_part)
    } else {
        int_part
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(format.symbol);
    out.push_str(&int_part);
    if !frac.is_empty() {
        out.push('.');
        out.push_str(&frac);
    }
    out
}
