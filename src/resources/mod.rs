//! Resource views over the Zoho CRM API.
//!
//! Each resource borrows the client's [`HttpClient`](crate::clients::HttpClient)
//! and maps one CRM verb onto exactly one HTTP call. Module names, record ids
//! and option payloads are forwarded untouched; the API validates them.
//!
//! - [`Records`]: generic records of any module (`Leads`, `Contacts`, ...)
//! - [`Notes`]: notes, globally or nested under a record

mod notes;
mod records;

pub use notes::Notes;
pub use records::Records;
