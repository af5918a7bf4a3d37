//! Shared formatting for the model detail panel.

/// USD per million tokens, e.g. `$3.00/M tokens`. Free models render as such.
pub fn format_price(price: f64) -> String {
    if price == 0.0 {
        "Free".to_string()
    } else {
        format!("${:.2}/M tokens", price)
    }
}

/// Token counts with thousands grouping, e.g. `200,000`.
pub fn format_tokens(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
