//! Typed option sets for the Mad Mimi mail API.
//!
//! # Overview
//! Every API call is modelled as a `MailOptions<S>`, where the schema `S`
//! names the endpoint, the request method and the fields the call accepts.
//! Fields are populated in bulk or through chained setters, checked against
//! that list, and only the populated ones are sent. `ApiClient` turns an
//! option set into an `HttpRequest`; executing it is left to the caller.
//!
//! # Design
//! - Field names are validated against `OptionsSchema::FIELDS`, so a typo is
//!   an `OptionsError::InvalidOption` instead of a silently ignored key.
//! - `None` is the only unset state; an empty string is sent as-is.
//! - Addresses, flags and lists go through the `set_email_address`,
//!   `set_translated_boolean_value` and `set_csv_value_from_array` helpers
//!   that produce the text forms the API expects.
//!
//! ```
//! use mimi_core::{ApiClient, HttpMethod, MailOptions, OptionsSchema, Result};
//!
//! struct SendToList;
//!
//! impl OptionsSchema for SendToList {
//!     const END_POINT: &'static str = "/mailer/to_list";
//!     const REQUEST_TYPE: HttpMethod = HttpMethod::Post;
//!     const FIELDS: &'static [&'static str] =
//!         &["promotion_name", "list_name", "from", "hidden"];
//! }
//!
//! trait SendToListExt {
//!     fn sender(&mut self, email: &str, name: Option<&str>) -> Result<&mut Self>;
//!     fn lists(&mut self, lists: &[&str]) -> Result<&mut Self>;
//! }
//!
//! impl SendToListExt for MailOptions<SendToList> {
//!     fn sender(&mut self, email: &str, name: Option<&str>) -> Result<&mut Self> {
//!         self.set_email_address("from", email, name)
//!     }
//!
//!     fn lists(&mut self, lists: &[&str]) -> Result<&mut Self> {
//!         self.set_csv_value_from_array("list_name", lists)
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let mut options = MailOptions::<SendToList>::with_options([("promotion_name", "Weekly")])?;
//! options.sender("news@example.com", Some("News"))?.lists(&["customers", "vip, gold"])?;
//!
//! let request = ApiClient::new("https://api.madmimi.com").build_request(&options)?;
//! assert_eq!(request.path, "https://api.madmimi.com/mailer/to_list");
//! assert_eq!(options.get("list_name"), Some(r#"customers,"vip, gold""#));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod encode;
pub mod error;
pub mod http;
pub mod options;

pub use client::ApiClient;
pub use error::{OptionsError, Result};
pub use http::{HttpMethod, HttpRequest, FORM_CONTENT_TYPE};
pub use options::{MailOptions, OptionsSchema};
