use thiserror::Error;

/// Largest integer an f64 can hold without precision loss (2^53 - 1).
///
/// Amounts beyond this bound cannot be trusted, so the formatter, the parser,
/// and the form validator all refuse them. The bound is deliberately defined
/// in one place; see [`is_safe_amount`].
pub const MAX_SAFE_AMOUNT: f64 = 9_007_199_254_740_991.0;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("money value {0} is outside the safe integer range (limit: {})", MAX_SAFE_AMOUNT)]
    ExceedsSafeBound(f64),
}

/// Display behavior for [`format_money`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoneyFormatOptions {
    /// Prefix the amount with `¥`
    pub show_symbol: bool,

    /// Render zero as the empty string
    pub empty_on_zero: bool,

    /// Render negative amounts as the empty string
    pub empty_on_negative: bool,

    /// Exact number of fraction digits, zero-padded
    pub decimal_places: usize,
}

impl Default for MoneyFormatOptions {
    fn default() -> Self {
        Self {
            show_symbol: true,
            empty_on_zero: false,
            empty_on_negative: false,
            decimal_places: 0,
        }
    }
}

pub fn is_safe_amount(value: f64) -> bool {
    value.abs() <= MAX_SAFE_AMOUNT
}

fn ensure_safe_amount(value: f64) -> Result<(), MoneyError> {
    if !is_safe_amount(value) {
        return Err(MoneyError::ExceedsSafeBound(value));
    }

    Ok(())
}

/// Formats an amount as a yen string, e.g. `¥15,000`.
///
/// `None` and NaN format as the empty string. The sign renders as part of the
/// number (`¥-1,500`). Amounts beyond [`MAX_SAFE_AMOUNT`] are refused rather
/// than rendered with silently lost precision.
pub fn format_money(
    value: Option<f64>,
    options: &MoneyFormatOptions,
) -> Result<String, MoneyError> {
    let value = match value {
        Some(value) if !value.is_nan() => value,
        _ => return Ok(String::new()),
    };

    ensure_safe_amount(value)?;

    if value == 0.0 && options.empty_on_zero {
        return Ok(String::new());
    }

    if value < 0.0 && options.empty_on_negative {
        return Ok(String::new());
    }

    let rendered = render_grouped(value, options.decimal_places);

    if options.show_symbol {
        Ok(format!("¥{rendered}"))
    } else {
        Ok(rendered)
    }
}

/// Formatting preset for editable amount fields: zero, negative, and invalid
/// values all collapse to the empty string so the field shows its placeholder.
pub fn format_money_for_input(value: Option<f64>) -> Result<String, MoneyError> {
    format_money(
        value,
        &MoneyFormatOptions {
            show_symbol: true,
            empty_on_zero: true,
            empty_on_negative: true,
            decimal_places: 0,
        },
    )
}

/// Formatting preset for read-only views: zero and negative amounts are always
/// rendered, `show_symbol` and `decimal_places` remain configurable.
pub fn format_money_for_display(
    value: Option<f64>,
    options: &MoneyFormatOptions,
) -> Result<String, MoneyError> {
    let options = MoneyFormatOptions {
        empty_on_zero: false,
        empty_on_negative: false,
        ..*options
    };

    format_money(value, &options)
}

/// Extracts a numeric amount from a formatted or partially-formatted string.
///
/// Every non-digit character (`¥`, commas, surrounding text) is discarded and
/// the remaining digit run is read as a base-10 integer. Strings with no
/// digits parse as 0.
pub fn parse_money_string(input: &str) -> Result<f64, MoneyError> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() {
        return Ok(0.0);
    }

    // A digit-only string always parses; overflow saturates to infinity and
    // is caught by the bound check below.
    let value: f64 = digits.parse().unwrap_or(f64::INFINITY);

    ensure_safe_amount(value)?;

    Ok(value)
}

/// Renders with exactly `decimal_places` fraction digits and ja-JP grouping
/// (comma every 3 digits of the integer part).
fn render_grouped(value: f64, decimal_places: usize) -> String {
    let rendered = format!("{value:.decimal_places$}");

    let (number, fraction) = match rendered.split_once('.') {
        Some((number, fraction)) => (number, Some(fraction)),
        None => (rendered.as_str(), None),
    };

    let (sign, digits) = match number.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", number),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}
