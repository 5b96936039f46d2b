//! Typed parameter sets for single mail API calls.
//!
//! # Design
//! Each API call is described by a marker type implementing `OptionsSchema`:
//! the endpoint it targets, the request method, and the exact list of field
//! names it accepts. `MailOptions<S>` stores one optional value per declared
//! field in declaration order, so any name outside `S::FIELDS` is rejected
//! before it can be stored.
//!
//! `None` is the only unset state. An empty string is a value like any
//! other and is sent to the API.
//!
//! Call-specific setters live on an extension trait implemented for
//! `MailOptions<YourSchema>` and delegate to the helpers here, which return
//! `&mut Self` so setters chain with `?`.

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::encode;
use crate::error::{OptionsError, Result};
use crate::http::HttpMethod;

/// Static description of one API call.
pub trait OptionsSchema {
    /// Endpoint the populated fields are submitted to, e.g. `/mailer`.
    const END_POINT: &'static str;

    /// Method used when submitting the fields.
    const REQUEST_TYPE: HttpMethod;

    /// Every field name the call accepts, in the order they are sent.
    /// Names must be unique.
    const FIELDS: &'static [&'static str];
}

/// The parameters of one API call, validated against `S::FIELDS`.
pub struct MailOptions<S: OptionsSchema> {
    values: Vec<Option<String>>,
    schema: PhantomData<S>,
}

impl<S: OptionsSchema> MailOptions<S> {
    /// An option set with every field unset.
    pub fn new() -> Self {
        debug_assert!(
            fields_are_unique(S::FIELDS),
            "{} declares a field twice",
            S::END_POINT
        );
        Self {
            values: vec![None; S::FIELDS.len()],
            schema: PhantomData,
        }
    }

    /// Build from `(name, value)` pairs.
    ///
    /// Stops at the first name `S` does not declare and returns
    /// `OptionsError::InvalidOption` for it; nothing built so far is kept.
    pub fn with_options<I, K, V>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut built = Self::new();
        for (key, value) in options {
            built.set(key.as_ref(), value)?;
        }
        Ok(built)
    }

    /// Build from a loosely typed JSON object, e.g. deserialized config.
    ///
    /// `null` leaves a field unset, strings are kept verbatim and numbers
    /// are stored in their text form. Booleans, arrays and objects have
    /// dedicated helpers and are refused here with
    /// `OptionsError::InvalidValue`.
    pub fn from_json(options: Map<String, Value>) -> Result<Self> {
        let mut built = Self::new();
        for (key, value) in options {
            let slot = built.slot_mut(&key)?;
            *slot = match value {
                Value::Null => None,
                Value::String(text) => Some(text),
                Value::Number(number) => Some(number.to_string()),
                other => {
                    let kind = encode::json_kind(&other);
                    debug!(field = %key, kind, "refusing non-scalar option value");
                    return Err(OptionsError::InvalidValue { field: key, kind });
                }
            };
        }
        Ok(built)
    }

    pub fn end_point(&self) -> &'static str {
        S::END_POINT
    }

    pub fn request_type(&self) -> HttpMethod {
        S::REQUEST_TYPE
    }

    /// Current value of a declared field. Unset and undeclared both read
    /// as `None`.
    pub fn get(&self, field: &str) -> Option<&str> {
        position::<S>(field).and_then(|i| self.values[i].as_deref())
    }

    /// The declared fields that hold a value, in declaration order.
    pub fn populated(&self) -> IndexMap<&'static str, &str> {
        S::FIELDS
            .iter()
            .zip(&self.values)
            .filter_map(|(name, value)| value.as_deref().map(|v| (*name, v)))
            .collect()
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<&mut Self> {
        *self.slot_mut(field)? = Some(value.into());
        Ok(self)
    }

    /// Return a field to the unset state.
    pub fn unset(&mut self, field: &str) -> Result<&mut Self> {
        *self.slot_mut(field)? = None;
        Ok(self)
    }

    /// Set `field` to `email`, or to `Name <email>` when a non-empty name
    /// is given.
    pub fn set_email_address(
        &mut self,
        field: &str,
        email: &str,
        name: Option<&str>,
    ) -> Result<&mut Self> {
        self.assign(field, encode::email_address(email, name))
    }

    /// Set `field` to `yes` or `no`.
    pub fn set_translated_boolean_value(&mut self, field: &str, value: bool) -> Result<&mut Self> {
        self.assign(field, encode::boolean_token(value).to_string())
    }

    /// Like `set_translated_boolean_value` for loosely typed input. Only a
    /// JSON boolean is accepted; `1`, `"yes"` and friends are an
    /// `OptionsError::InvalidBoolean`.
    pub fn set_translated_boolean_from_value(
        &mut self,
        field: &str,
        value: &Value,
    ) -> Result<&mut Self> {
        let value = encode::strict_boolean(field, value)?;
        self.set_translated_boolean_value(field, value)
    }

    /// Set `field` to `values` written as a single CSV line.
    pub fn set_csv_value_from_array<I, T>(&mut self, field: &str, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        // Reject the name before doing any encoding work.
        self.slot_mut(field)?;
        let line = encode::csv_line(values)?;
        self.assign(field, line)
    }

    fn assign(&mut self, field: &str, value: String) -> Result<&mut Self> {
        trace!(field, value = %value, "assigning option");
        *self.slot_mut(field)? = Some(value);
        Ok(self)
    }

    fn slot_mut(&mut self, field: &str) -> Result<&mut Option<String>> {
        match position::<S>(field) {
            Some(i) => Ok(&mut self.values[i]),
            None => {
                debug!(field, end_point = S::END_POINT, "rejecting undeclared option");
                Err(OptionsError::InvalidOption(field.to_string()))
            }
        }
    }
}

fn fields_are_unique(fields: &[&str]) -> bool {
    fields
        .iter()
        .enumerate()
        .all(|(i, name)| !fields[i + 1..].contains(name))
}

fn position<S: OptionsSchema>(field: &str) -> Option<usize> {
    S::FIELDS.iter().position(|name| *name == field)
}

impl<S: OptionsSchema> Default for MailOptions<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: OptionsSchema> Clone for MailOptions<S> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            schema: PhantomData,
        }
    }
}

impl<S: OptionsSchema> PartialEq for MailOptions<S> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<S: OptionsSchema> Eq for MailOptions<S> {}

impl<S: OptionsSchema> fmt::Debug for MailOptions<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailOptions")
            .field("end_point", &S::END_POINT)
            .field("request_type", &S::REQUEST_TYPE)
            .field("populated", &self.populated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Promotion;

    impl OptionsSchema for Promotion {
        const END_POINT: &'static str = "/mailer";
        const REQUEST_TYPE: HttpMethod = HttpMethod::Post;
        const FIELDS: &'static [&'static str] =
            &["promotion_name", "recipients", "from", "subject", "hidden", "list_names"];
    }

    type Options = MailOptions<Promotion>;

    #[test]
    fn new_has_nothing_populated() {
        let options = Options::new();
        assert!(options.populated().is_empty());
        assert_eq!(options, Options::default());
    }

    #[test]
    fn with_options_sets_declared_fields() {
        let options = Options::with_options([("subject", "Hello"), ("promotion_name", "Weekly")]).unwrap();
        assert_eq!(options.get("subject"), Some("Hello"));
        assert_eq!(options.get("promotion_name"), Some("Weekly"));
        assert_eq!(options.get("from"), None);
    }

    #[test]
    fn with_options_rejects_undeclared_field() {
        let err = Options::with_options([("subject", "Hello"), ("sender", "x")]).unwrap_err();
        assert!(matches!(err, OptionsError::InvalidOption(ref key) if key == "sender"));
    }

    #[test]
    fn populated_follows_declaration_order() {
        let options = Options::with_options([
            ("hidden", "no"),
            ("subject", "Hi"),
            ("promotion_name", "Launch"),
        ])
        .unwrap();
        let keys: Vec<_> = options.populated().keys().copied().collect();
        assert_eq!(keys, ["promotion_name", "subject", "hidden"]);
    }

    #[test]
    fn empty_string_is_populated() {
        let options = Options::with_options([("subject", "")]).unwrap();
        assert_eq!(options.populated().get("subject"), Some(&""));
    }

    #[test]
    fn unset_removes_field_from_populated() {
        let mut options = Options::with_options([("subject", "Hi")]).unwrap();
        options.unset("subject").unwrap();
        assert!(options.populated().is_empty());
        assert!(options.unset("sender").is_err());
    }

    #[test]
    fn from_json_maps_null_to_unset() {
        let input = json!({ "subject": null, "promotion_name": "Launch", "recipients": 42 });
        let options = Options::from_json(input.as_object().cloned().unwrap()).unwrap();
        assert_eq!(options.get("subject"), None);
        assert_eq!(options.get("promotion_name"), Some("Launch"));
        assert_eq!(options.get("recipients"), Some("42"));
    }

    #[test]
    fn from_json_rejects_undeclared_and_non_scalar() {
        let input = json!({ "sender": "x" });
        let err = Options::from_json(input.as_object().cloned().unwrap()).unwrap_err();
        assert!(matches!(err, OptionsError::InvalidOption(ref key) if key == "sender"));

        let input = json!({ "hidden": true });
        let err = Options::from_json(input.as_object().cloned().unwrap()).unwrap_err();
        assert!(matches!(err, OptionsError::InvalidValue { kind: "boolean", .. }));
    }

    #[test]
    fn helpers_chain() {
        let mut options = Options::new();
        options
            .set_email_address("from", "a@example.com", Some(" Bob "))
            .unwrap()
            .set_translated_boolean_value("hidden", false)
            .unwrap()
            .set_csv_value_from_array("list_names", ["a", "b,c", "d\"e"])
            .unwrap();

        assert_eq!(options.get("from"), Some("Bob <a@example.com>"));
        assert_eq!(options.get("hidden"), Some("no"));
        assert_eq!(options.get("list_names"), Some(r#"a,"b,c","d""e""#));
    }

    #[test]
    fn boolean_from_value_is_strict() {
        let mut options = Options::new();
        options.set_translated_boolean_from_value("hidden", &json!(true)).unwrap();
        assert_eq!(options.get("hidden"), Some("yes"));

        let err = options
            .set_translated_boolean_from_value("hidden", &json!(1))
            .unwrap_err();
        assert!(matches!(err, OptionsError::InvalidBoolean { .. }));
        assert_eq!(options.get("hidden"), Some("yes"));
    }

    #[test]
    fn helpers_reject_undeclared_field() {
        let mut options = Options::new();
        assert!(options.set_email_address("reply_to", "a@example.com", None).is_err());
        assert!(options.set_csv_value_from_array("lists", ["a"]).is_err());
        assert!(options.populated().is_empty());
    }

    struct Duplicated;

    impl OptionsSchema for Duplicated {
        const END_POINT: &'static str = "/mailer";
        const REQUEST_TYPE: HttpMethod = HttpMethod::Post;
        const FIELDS: &'static [&'static str] = &["subject", "from", "subject"];
    }

    #[test]
    fn field_uniqueness() {
        assert!(fields_are_unique(Promotion::FIELDS));
        assert!(fields_are_unique(&[]));
        assert!(!fields_are_unique(Duplicated::FIELDS));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "declares a field twice")]
    fn duplicate_field_names_are_caught() {
        let _ = MailOptions::<Duplicated>::new();
    }

    #[test]
    fn helpers_trim_display_name() {
        let mut options = Options::new();
        options.set_email_address("from", "a@example.com", Some(" Bob ")).unwrap();
        assert_eq!(options.get("from"), Some("Bob <a@example.com>"));
        options.set_csv_value_from_array("list_names", [""]).unwrap();
        assert_eq!(options.populated().get("list_names"), Some(&""));
    }

    #[test]
    fn identity_comes_from_schema() {
        let options = Options::new();
        assert_eq!(options.end_point(), "/mailer");
        assert_eq!(options.request_type(), HttpMethod::Post);
    }
}
