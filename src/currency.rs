use num_format::{Locale, ToFormattedString};

// Sign follows the rounded centavos, so -0.004 prints as R$ 0,00.
pub fn format_brl(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let reais = (cents.unsigned_abs() / 100).to_formatted_string(&Locale::pt);
    let centavos = cents.unsigned_abs() % 100;

    if cents < 0 {
        format!("-R$ {reais},{centavos:02}")
    } else {
        format!("R$ {reais},{centavos:02}")
    }
}
