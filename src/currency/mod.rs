/// Decimal places used for every amount and percentage in the report.
pub const DISPLAY_PRECISION: usize = 2;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn symbol(&self) -> String {
        symbol_for(self.as_str())
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Separator preferences for rendered numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => code.into(),
    }
}

/// Renders `value` with the locale's separators and a thousands grouping.
pub fn format_number(locale: &LocaleConfig, value: f64, precision: usize) -> String {
    let mut body = format!("{:.*}", precision, value);
    let split_at = body.find('.');
    let (int_part, fraction) = match split_at {
        Some(pos) => {
            let fraction = body.split_off(pos + 1);
            body.pop();
            (body, Some(fraction))
        }
        None => (body, None),
    };

    let grouped = insert_grouping(&int_part, locale.grouping_separator);
    match fraction {
        Some(fraction) => format!("{}{}{}", grouped, locale.decimal_separator, fraction),
        None => grouped,
    }
}

fn insert_grouping(int_part: &str, separator: char) -> String {
    match int_part.strip_prefix('-') {
        Some(digits) => format!("-{}", group_digits(digits, separator)),
        None => group_digits(int_part, separator),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

/// Formats an amount as symbol + grouped number, e.g. `$1,234.50` or `$-50.00`.
pub fn format_currency_value(amount: f64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    format!(
        "{}{}",
        code.symbol(),
        format_number(locale, amount, DISPLAY_PRECISION)
    )
}

/// Like [`format_currency_value`] but right-aligns the number in `width`
/// characters after the symbol, for table cells.
pub fn format_currency_cell(
    amount: f64,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    width: usize,
) -> String {
    format!(
        "{}{:>width$}",
        code.symbol(),
        format_number(locale, amount, DISPLAY_PRECISION),
        width = width
    )
}

/// Formats a percentage with two decimals, right-aligned in `width`, then `%`.
pub fn format_percent(value: f64, locale: &LocaleConfig, width: usize) -> String {
    let mut body = format!("{:.*}", DISPLAY_PRECISION, value);
    if locale.decimal_separator != '.' {
        body = body.replace('.', &locale.decimal_separator.to_string());
    }
    format!("{:>width$}%", body, width = width)
}
