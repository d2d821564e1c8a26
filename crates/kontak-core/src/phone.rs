//! Per-country phone-format rules.
//!
//! The registration form checks the national number (without the calling
//! code) against a fixed rule per supported calling code. This is a static
//! lookup table, not parsing; unknown codes always fail.

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

/// Format rule for one calling code.
pub struct PhoneRule {
  /// Exact number of digits the national number must have.
  pub digits:  usize,
  /// Accepted digit pattern for the stripped number.
  pub pattern: Regex,
  /// Placeholder shown next to the input.
  pub example: &'static str,
}

static RULES: LazyLock<HashMap<&'static str, PhoneRule>> = LazyLock::new(|| {
  let rule = |digits, example| PhoneRule {
    digits,
    pattern: Regex::new(&format!("^[0-9]{{{digits}}}$")).expect("phone regex"),
    example,
  };
  HashMap::from([
    ("+509", rule(8, "12345678")),
    ("+1", rule(10, "1234567890")),
    ("+33", rule(10, "1234567890")),
    ("+34", rule(9, "123456789")),
  ])
});

fn strip_non_digits(number: &str) -> String {
  number.chars().filter(char::is_ascii_digit).collect()
}

/// True when `number`, stripped of non-digits, satisfies the rule for
/// `calling_code` exactly. Unknown codes fail.
pub fn validate_phone(calling_code: &str, number: &str) -> bool {
  let Some(rule) = RULES.get(calling_code) else {
    return false;
  };
  let clean = strip_non_digits(number);
  clean.len() == rule.digits && rule.pattern.is_match(&clean)
}

/// Example national number for `calling_code`, falling back to the
/// Haitian format.
pub fn phone_example(calling_code: &str) -> &'static str {
  RULES.get(calling_code).map_or("12345678", |r| r.example)
}
