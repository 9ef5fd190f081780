use serde::{Deserialize, Serialize};

/// Largest precision accepted by `Fixed`; larger requests are clamped.
pub const MAX_FIXED_DECIMALS: usize = 20;

/// Tick label format, parsed from a short token.
///
/// Parsing never fails: unrecognised tokens are kept as `Unknown` and format
/// like `Default`.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FormatSpec {
    #[default]
    Default,
    Compact,
    Integer,
    Fixed(usize),
    Percent,
    Thousands,
    Unknown(String),
}

impl FormatSpec {
    pub fn parse(token: &str) -> Self {
        let t = token.trim();
        match t {
            "" | "default" => return Self::Default,
            "compact" | "s" => return Self::Compact,
            "integer" | "d" => return Self::Integer,
            "percent" | "%" => return Self::Percent,
            "thousands" | "," => return Self::Thousands,
            _ => {}
        }
        let decimals = t
            .strip_prefix("fixed:")
            .or_else(|| t.strip_prefix('.').and_then(|s| s.strip_suffix('f')));
        match decimals.and_then(|d| d.parse::<usize>().ok()) {
            Some(n) => Self::Fixed(n),
            None => Self::Unknown(token.to_string()),
        }
    }

    pub fn token(&self) -> String {
        match self {
            Self::Default => "default".to_string(),
            Self::Compact => "compact".to_string(),
            Self::Integer => "integer".to_string(),
            Self::Fixed(n) => format!(".{n}f"),
            Self::Percent => "percent".to_string(),
            Self::Thousands => "thousands".to_string(),
            Self::Unknown(t) => t.clone(),
        }
    }
}

impl From<String> for FormatSpec {
    fn from(token: String) -> Self {
        Self::parse(&token)
    }
}

impl From<&str> for FormatSpec {
    fn from(token: &str) -> Self {
        Self::parse(token)
    }
}

impl From<FormatSpec> for String {
    fn from(spec: FormatSpec) -> Self {
        spec.token()
    }
}

/// Format `value` according to `spec`.
pub fn format(spec: &FormatSpec, value: f32) -> String {
    if !value.is_finite() {
        return format_fixed(value, 0);
    }
    match spec {
        FormatSpec::Default | FormatSpec::Unknown(_) => value.to_string(),
        FormatSpec::Compact => format_compact(value),
        FormatSpec::Integer => format_fixed(value, 0),
        FormatSpec::Fixed(n) => format_fixed(value, (*n).min(MAX_FIXED_DECIMALS)),
        FormatSpec::Percent => format!("{}%", format_fixed(value * 100.0, 0)),
        FormatSpec::Thousands => format_thousands(value),
    }
}

pub fn format_fixed(value: f32, decimals: usize) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "NaN".to_string()
        } else if value.is_sign_positive() {
            "Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }
    format!("{value:.decimals$}")
}

pub fn format_compact(value: f32) -> String {
    if !value.is_finite() {
        return format_fixed(value, 0);
    }
    let abs = value.abs();
    if abs >= 1_000_000_000.0 {
        return format_with_suffix(value / 1_000_000_000.0, "B");
    }
    if abs >= 1_000_000.0 {
        return format_with_suffix(value / 1_000_000.0, "M");
    }
    if abs >= 1_000.0 {
        return format_with_suffix(value / 1_000.0, "K");
    }

    trim_trailing_zeroes(format!("{value:.3}"))
}

fn format_thousands(value: f32) -> String {
    let digits = format_fixed(value.abs(), 0);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 && grouped != "0" {
        grouped.insert(0, '-');
    }
    grouped
}

fn format_with_suffix(value: f32, suffix: &str) -> String {
    format!("{}{}", trim_trailing_zeroes(format!("{value:.2}")), suffix)
}

fn trim_trailing_zeroes(mut s: String) -> String {
    if let Some(dot) = s.find('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.len() == dot + 1 {
            s.pop();
        }
    }
    s
}
