//! Domain value objects and types.
//!
//! Type-safe wrappers for contact names, phone numbers and birthdays. Each
//! value object validates and normalizes its input at construction time, so
//! an invalid phone or date can never reach the address book.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
