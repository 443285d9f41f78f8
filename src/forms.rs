use serde::Deserialize;
use crate::models::NewProductRequest;

/// Field names match the input ids of the page.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct KeywordForm {
    #[serde(default)]
    pub kw:         String
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct NameForm {
    #[serde(default)]
    pub name:       String
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct AddForm {
    #[serde(default)]
    pub add_name:   String,
    #[serde(default)]
    pub add_desc:   String,
    #[serde(default)]
    pub add_cat:    String,
    #[serde(default)]
    pub add_price:  String
}

impl KeywordForm {
    pub fn keyword(&self) -> &str {
        self.kw.trim()
    }
}

impl NameForm {
    pub fn name(&self) -> &str {
        self.name.trim()
    }
}

impl AddForm {
    /// The price is not trimmed or validated beyond what `parse_float` does.
    pub fn to_request(&self) -> NewProductRequest {
        NewProductRequest {
            name:           self.add_name.trim().to_string(),
            description:    self.add_desc.trim().to_string(),
            category:       self.add_cat.trim().to_string(),
            price:          parse_float(&self.add_price)
        }
    }
}

/**
Parses the longest leading decimal literal of `input`, like JavaScript's `parseFloat`.

Leading whitespace is skipped. `Infinity` with an optional sign is accepted,
everything else that does not start with a number yields NaN.
*/
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}
