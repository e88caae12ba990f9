//! Locale-aware number formatting
//!
//! [`format_number`] groups digits according to a [`NumberFormat`] policy
//! backed by `num_format`'s locale data. The default policy is the zh-CN
//! convention (`158,000`); other locales plug in by swapping the policy.

use crate::coerce::{ToRaw, to_number};
use num_format::ToFormattedString;
use std::fmt;
use std::str::FromStr;

/// Supported formatting locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    ZhCn,
    EnUs,
    DeDe,
    FrFr,
    EnIn,
}

impl Locale {
    /// BCP-47 tag for this locale
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::ZhCn => "zh-CN",
            Locale::EnUs => "en-US",
            Locale::DeDe => "de-DE",
            Locale::FrFr => "fr-FR",
            Locale::EnIn => "en-IN",
        }
    }

    /// Matching `num_format` locale
    pub fn num_format_locale(&self) -> num_format::Locale {
        match self {
            Locale::ZhCn => num_format::Locale::zh,
            Locale::EnUs => num_format::Locale::en,
            Locale::DeDe => num_format::Locale::de,
            Locale::FrFr => num_format::Locale::fr,
            Locale::EnIn => num_format::Locale::en_IN,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "zh-cn" | "zh" => Ok(Locale::ZhCn),
            "en-us" | "en" => Ok(Locale::EnUs),
            "de-de" | "de" => Ok(Locale::DeDe),
            "fr-fr" | "fr" => Ok(Locale::FrFr),
            "en-in" => Ok(Locale::EnIn),
            _ => Err(format!("Unsupported locale: {}", s)),
        }
    }
}

/// Digit grouping and decimal policy for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Separator, decimal mark and grouping rules
    pub locale: num_format::Locale,
    pub max_fraction_digits: usize,
}

impl NumberFormat {
    /// Policy used by the given locale
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            locale: locale.num_format_locale(),
            max_fraction_digits: 3,
        }
    }

    /// Group separator of the underlying locale
    pub fn group_separator(&self) -> &'static str {
        self.locale.separator()
    }

    /// Decimal mark of the underlying locale
    pub fn decimal_separator(&self) -> &'static str {
        self.locale.decimal()
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

/// Format any value with the default (zh-CN) grouping; zero renders as `"0"`
pub fn format_number<V: ToRaw + ?Sized>(value: &V) -> String {
    format_number_with(value, &NumberFormat::default())
}

/// Format any value under an explicit locale policy
pub fn format_number_with<V: ToRaw + ?Sized>(value: &V, policy: &NumberFormat) -> String {
    let n = to_number(value);
    if n == 0.0 {
        return "0".to_string();
    }

    let sign = if n < 0.0 { policy.locale.minus_sign() } else { "" };
    if n.is_infinite() {
        return format!("{}{}", sign, policy.locale.infinity());
    }

    let rounded = format!("{:.*}", policy.max_fraction_digits, n.abs());
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((int_part, frac)) => (int_part, frac.trim_end_matches('0')),
        None => (rounded.as_str(), ""),
    };

    // Anything that rounds away to nothing is plain zero, never "-0"
    if frac_part.is_empty() && int_part.bytes().all(|b| b == b'0') {
        return "0".to_string();
    }

    // Beyond u128 the digits are emitted ungrouped
    let grouped = int_part
        .parse::<u128>()
        .map_or_else(|_| int_part.to_string(), |v| v.to_formatted_string(&policy.locale));

    let mut out = format!("{}{}", sign, grouped);
    if !frac_part.is_empty() {
        out.push_str(policy.decimal_separator());
        out.push_str(frac_part);
    }
    out
}

/// Currency symbol followed by the grouped number (`¥158,000`)
pub fn format_currency<V: ToRaw + ?Sized>(value: &V, symbol: &str, policy: &NumberFormat) -> String {
    format!("{}{}", symbol, format_number_with(value, policy))
}

/// Fixed-point percentage (`105.3%`)
pub fn format_percent(percent: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, percent)
}
