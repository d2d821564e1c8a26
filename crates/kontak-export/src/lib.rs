//! File-format exports of the contact list.
//!
//! The admin dashboard downloads the full list either as a vCard file
//! (one VERSION:3.0 block per contact) or as quoted-field CSV. Both are
//! plain string concatenation; there is no streaming.

pub mod csv;
pub mod vcf;

/// Attachment filename for the VCF download.
pub const VCF_FILENAME: &str = "kerventz_contacts.vcf";
/// Attachment filename for the CSV download.
pub const CSV_FILENAME: &str = "kerventz_contacts.csv";
