//! vCard 3.0 serializer for the contact export.
//!
//! Emits a minimal FN/TEL(/EMAIL) block per contact with `\n` line
//! endings. Contacts never carry the structured properties a full
//! RFC 2426 card would.

use kontak_core::Contact;

/// Serialize one contact as a vCard block.
fn card(contact: &Contact) -> String {
  let mut out = String::new();
  out.push_str("BEGIN:VCARD\n");
  out.push_str("VERSION:3.0\n");
  out.push_str(&format!("FN:{}\n", contact.full_name));
  out.push_str(&format!("TEL:{}\n", contact.phone));
  if let Some(email) = contact.email.as_deref() {
    out.push_str(&format!("EMAIL:{email}\n"));
  }
  out.push_str("END:VCARD\n");
  out
}

/// Serialize the whole list, one block per contact, concatenated.
pub fn serialize(contacts: &[Contact]) -> String {
  contacts.iter().map(card).collect()
}
