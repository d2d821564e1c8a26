//! CSV serializer for the contact export.
//!
//! Header row plus one fully-quoted row per contact; embedded quotes are
//! doubled. The date column is ISO 8601 with milliseconds so spreadsheet
//! imports recognise it as a timestamp.

use kontak_core::Contact;

const HEADER: &str = "Name,Phone,Email,Country,Suffix,Date\n";

fn quote(field: &str) -> String {
  format!("\"{}\"", field.replace('"', "\"\""))
}

fn row(contact: &Contact) -> String {
  let date = contact
    .created_at
    .format("%Y-%m-%dT%H:%M:%S%.3fZ")
    .to_string();
  format!(
    "{},{},{},{},{},{}\n",
    quote(&contact.full_name),
    quote(&contact.phone),
    quote(contact.email.as_deref().unwrap_or("")),
    quote(&contact.country),
    quote(&contact.suffix),
    quote(&date),
  )
}

/// Serialize the whole list: header plus one row per contact.
pub fn serialize(contacts: &[Contact]) -> String {
  let mut out = String::from(HEADER);
  for contact in contacts {
    out.push_str(&row(contact));
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::contact;

  #[test]
  fn header_row_is_always_first() {
    let out = serialize(&[]);
    assert_eq!(out, "Name,Phone,Email,Country,Suffix,Date\n");
  }

  #[test]
  fn row_fields_are_quoted_in_order() {
    let out = serialize(&[contact("Marie Joseph", "+50912345678", Some("marie@example.com"))]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
      lines[1],
      "\"Marie Joseph\",\"+50912345678\",\"marie@example.com\",\"HT\",\"BOOST.1🚀\",\"2025-03-14T09:26:53.000Z\""
    );
  }

  #[test]
  fn missing_email_becomes_empty_field() {
    let out = serialize(&[contact("Marie", "+50912345678", None)]);
    assert!(out.contains(",\"\",\"HT\""), "got:\n{out}");
  }

  #[test]
  fn embedded_quotes_are_doubled() {
    let out = serialize(&[contact("Marie \"Ti Cheri\" Joseph", "+50912345678", None)]);
    assert!(out.contains("\"Marie \"\"Ti Cheri\"\" Joseph\""), "got:\n{out}");
  }

  #[test]
  fn one_row_per_contact() {
    let out = serialize(&[
      contact("A B", "+50911111111", None),
      contact("C D", "+50922222222", None),
    ]);
    assert_eq!(out.lines().count(), 3);
  }
}
