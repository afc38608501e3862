//! Field constraints and the input they are evaluated against.

use serde_json::{Map, Value};

use sf_shared::validation::validators;

/// Where in the request a field is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Body,
    Query,
    Path,
}

impl Location {
    /// Query and path values only ever arrive as text
    fn is_textual(&self) -> bool {
        matches!(self, Location::Query | Location::Path)
    }
}

/// Typed check applied to a present field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Check {
    /// String, non-empty after trimming, at most `max` characters
    NonEmptyString { max: usize },
    /// String of at most `max` characters
    MaxLength(usize),
    Number { min: Option<f64>, max: Option<f64> },
    Integer { min: Option<i64>, max: Option<i64> },
    Boolean,
    /// Storage-layer document identifier
    ObjectId,
    Url,
    Array,
}

impl Check {
    /// Evaluate against a present value read from `location`.
    ///
    /// Body fields must carry their JSON type; numeric and boolean checks
    /// only accept textual forms for query and path parameters.
    pub fn passes(&self, value: &Value, location: Location) -> bool {
        if !location.is_textual() {
            if value.is_string() && self.needs_typed_json() {
                return false;
            }
            // `4.0` would not deserialize into an integer field
            if matches!(self, Check::Integer { .. }) && value.is_f64() {
                return false;
            }
        }

        match *self {
            Check::NonEmptyString { max } => validators::non_empty_string(value, max),
            Check::MaxLength(max) => validators::string_max(value, max),
            Check::Number { min, max } => validators::number_in_range(value, min, max),
            Check::Integer { min, max } => validators::integer_in_range(value, min, max),
            Check::Boolean => validators::as_boolean(value).is_some(),
            Check::ObjectId => validators::is_object_id(value),
            Check::Url => validators::is_url(value),
            Check::Array => validators::is_array(value),
        }
    }

    fn needs_typed_json(&self) -> bool {
        matches!(self, Check::Number { .. } | Check::Integer { .. } | Check::Boolean)
    }
}

/// Whether a field must be present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Absent or blank fields produce this message
    Required(&'static str),
    /// Absent fields skip the check; present blank ones produce this message
    NotBlank(&'static str),
    /// Absent or blank fields skip the check
    Optional,
}

/// A single declarative rule checked against one request field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConstraint {
    pub location: Location,
    /// Field name; dots address nested body values (`images.0.url`)
    pub field: &'static str,
    pub presence: Presence,
    pub check: Check,
    /// Reported when a present value fails `check`
    pub message: &'static str,
}

impl FieldConstraint {
    pub const fn required(
        location: Location,
        field: &'static str,
        missing: &'static str,
        check: Check,
        message: &'static str,
    ) -> Self {
        Self {
            location,
            field,
            presence: Presence::Required(missing),
            check,
            message,
        }
    }

    pub const fn optional(
        location: Location,
        field: &'static str,
        check: Check,
        message: &'static str,
    ) -> Self {
        Self {
            location,
            field,
            presence: Presence::Optional,
            check,
            message,
        }
    }

    /// Same constraint as used by partial updates: a required field may be
    /// left out, but not sent blank
    pub fn relaxed(self) -> Self {
        let presence = match self.presence {
            Presence::Required(missing) => Presence::NotBlank(missing),
            other => other,
        };
        Self { presence, ..self }
    }

    pub fn is_optional(&self) -> bool {
        self.presence == Presence::Optional
    }
}

/// The parts of a request a rule set can inspect
#[derive(Debug, Clone, Default)]
pub struct RequestInput {
    pub body: Value,
    pub query: Map<String, Value>,
    pub path: Map<String, Value>,
}

impl RequestInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    pub fn with_query<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect();
        self
    }

    pub fn with_path<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.path = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect();
        self
    }

    /// Look up `field` at `location`
    pub fn lookup(&self, location: Location, field: &str) -> Option<&Value> {
        match location {
            Location::Body => {
                if field.contains('.') {
                    let pointer = format!("/{}", field.replace('.', "/"));
                    self.body.pointer(&pointer)
                } else {
                    self.body.get(field)
                }
            }
            Location::Query => self.query.get(field),
            Location::Path => self.path.get(field),
        }
    }
}
