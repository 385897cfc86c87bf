//! Lead entities shared by the site and the lead API.
//!
//! The same schema runs in the browser before submit and on the server
//! before a lead is stored.

pub mod contact;
pub mod meeting;
pub mod response;
pub mod utm;
pub mod validate;

pub use contact::{ContactDraft, ContactLead, Employees, Industry};
pub use meeting::{ClientContext, DemoType, Interest, MeetingDraft, MeetingRequest};
pub use response::LeadResponse;
pub use utm::Utm;
pub use validate::{Field, FieldError, FieldErrorKind, ValidationErrors};
