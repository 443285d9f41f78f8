use serde::{Serialize, Deserialize, Deserializer};
use serde_json::Value;

/**
A catalog item as returned by either search endpoint.

Every field is kept as the raw JSON value the server sent. `None` means the
key was absent, `Some(Value::Null)` means it was `null`.
*/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "present")]
    pub name:           Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub description:    Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub category:       Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub price:          Option<Value>
}

/// Keeps an explicit `null` as `Some(Value::Null)` instead of folding it into `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error> where D: Deserializer<'de> {
    Value::deserialize(deserializer).map(Some)
}

/// Body of `POST /add`.
///
/// `price` is never validated. NaN and the infinities serialize as JSON `null`.
#[derive(Serialize, Clone, Debug)]
pub struct NewProductRequest {
    pub name:           String,
    pub description:    String,
    pub category:       String,
    pub price:          f64
}

#[derive(Serialize, Clone, Debug)]
pub struct KeywordQuery {
    pub keyword:        String
}

#[derive(Serialize, Clone, Debug)]
pub struct NameQuery {
    pub name:           String
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub results:        Option<Vec<SearchResult>>,
    #[serde(default)]
    pub error:          Option<Value>
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct AddResponse {
    #[serde(default)]
    pub id:             Option<Value>,
    #[serde(default)]
    pub error:          Option<Value>
}

/// The error message, if the server sent one that counts as set (not `""`, `0`, `false` or `null`).
pub fn truthy_error(error: &Option<Value>) -> Option<String> {
    error.as_ref().filter(|e| truthy(e)).map(|e| display_value(Some(e)))
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true
    }
}

/**
Renders a JSON value the way template-string interpolation shows it.

Strings appear without quotes, numbers use the shortest round-trip form with
an exponent outside `1e-7..1e21`, an absent value shows as `undefined`.
*/
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.as_f64().map(number_to_string).unwrap_or_else(|| n.to_string()),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items.iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(Some(other))
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string()
    }
}

/// Number-to-string conversion with the digit and exponent rules of JavaScript.
fn number_to_string(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };

    // `{:e}` yields the shortest round-trip digits, e.g. `1.999e1`
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return format!("{}{}", sign, scientific)
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = match exponent.parse::<i32>() {
        Ok(exponent) => exponent + 1,
        Err(_) => return format!("{}{}", sign, value.abs())
    };

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        format!("{}.{}", &digits[..n as usize], &digits[n as usize..])
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let exp_sign = if n - 1 < 0 { "-" } else { "+" };
        let exp = (n - 1).abs();
        if k == 1 {
            format!("{}e{}{}", digits, exp_sign, exp)
        } else {
            format!("{}.{}e{}{}", &digits[..1], &digits[1..], exp_sign, exp)
        }
    };

    format!("{}{}", sign, body)
}
