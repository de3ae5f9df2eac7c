//! Reactive form validation.
//!
//! A [`Form`] is a flat collection of tracked fields, each carrying its
//! ordered validator list and a dirty flag. Every edit through
//! [`Form::set_value`] marks the field dirty, recomputes the full error map
//! and notifies any registered observers synchronously. Error text comes
//! from a hand-authored [`MessageTable`]; a failure kind with no table entry
//! contributes nothing and never errors.
//!
//! ## Error map convention
//!
//! A field's entry is the concatenation of the messages for each failing
//! validator, in validator-declaration order, separated by a single space
//! and without a trailing space. Pristine fields always map to the empty
//! string.

use std::collections::BTreeMap;

/// Field name to aggregated error text, one entry per tracked field.
pub type ErrorMap = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Numeric,
    Email,
    Range(u64, u64),
}

impl Validator {
    /// Failure kind used to key the message table.
    pub fn kind(&self) -> &'static str {
        match self {
            Validator::Required => "required",
            Validator::MinLength(_) => "minlength",
            Validator::MaxLength(_) => "maxlength",
            Validator::Numeric => "numeric",
            Validator::Email => "email",
            Validator::Range(_, _) => "range",
        }
    }

    /// Whether `value` satisfies this validator.
    ///
    /// Everything except `Required` accepts the empty string, so optional
    /// fields only fail once something was typed. `Range` also accepts
    /// non-numeric input and leaves that to `Numeric`.
    fn accepts(&self, value: &str) -> bool {
        match self {
            Validator::Required => !value.trim().is_empty(),
            Validator::MinLength(min) => value.is_empty() || value.chars().count() >= *min,
            Validator::MaxLength(max) => value.chars().count() <= *max,
            Validator::Numeric => value.chars().all(|c| c.is_ascii_digit()),
            Validator::Email => value.is_empty() || is_email(value),
            Validator::Range(min, max) => match value.parse::<u64>() {
                Ok(number) => (*min..=*max).contains(&number),
                Err(_) => true,
            },
        }
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    value: String,
    default: String,
    dirty: bool,
    validators: Vec<Validator>,
}

impl Field {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Failure kinds for the current value, in validator-declaration order.
    pub fn failures(&self) -> Vec<&'static str> {
        self.validators
            .iter()
            .filter(|validator| !validator.accepts(&self.value))
            .map(Validator::kind)
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.validators
            .iter()
            .all(|validator| validator.accepts(&self.value))
    }
}

/// Static mapping from (field name, failure kind) to human-readable text.
#[derive(Debug, Clone, Default)]
pub struct MessageTable {
    messages: BTreeMap<(String, String), String>,
}

impl MessageTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, kind: &str, text: &str) -> Self {
        self.messages
            .insert((field.to_string(), kind.to_string()), text.to_string());
        self
    }

    pub fn lookup(&self, field: &str, kind: &str) -> Option<&str> {
        self.messages
            .get(&(field.to_string(), kind.to_string()))
            .map(String::as_str)
    }
}

/// Compute the error map for `fields` against `messages`.
///
/// Pure over its inputs; the same fields and table always produce the same
/// map.
pub fn aggregate(fields: &[Field], messages: &MessageTable) -> ErrorMap {
    let mut errors = ErrorMap::new();

    for field in fields {
        let text = if field.dirty {
            let parts: Vec<&str> = field
                .failures()
                .into_iter()
                .filter_map(|kind| messages.lookup(&field.name, kind))
                .collect();

            parts.join(" ")
        } else {
            String::new()
        };

        errors.insert(field.name.clone(), text);
    }

    errors
}

type Observer = Box<dyn FnMut(&ErrorMap)>;

/// A mutable field store with continuous re-validation.
pub struct Form {
    fields: Vec<Field>,
    messages: MessageTable,
    errors: ErrorMap,
    observers: Vec<Observer>,
}

impl Form {
    pub fn new(messages: MessageTable) -> Self {
        Self {
            fields: Vec::new(),
            messages,
            errors: ErrorMap::new(),
            observers: Vec::new(),
        }
    }

    /// Register a tracked field, pristine and holding its default value.
    pub fn field(mut self, name: &str, default: &str, validators: &[Validator]) -> Self {
        self.fields.push(Field {
            name: name.to_string(),
            value: default.to_string(),
            default: default.to_string(),
            dirty: false,
            validators: validators.to_vec(),
        });
        self.errors.insert(name.to_string(), String::new());
        self
    }

    /// Apply an edit: mark the field dirty, recompute, notify observers.
    ///
    /// Edits to unknown field names are ignored.
    pub fn set_value(&mut self, name: &str, value: &str) {
        let Some(field) = self.fields.iter_mut().find(|field| field.name == name) else {
            return;
        };

        field.value = value.to_string();
        field.dirty = true;

        self.recompute();
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(Field::value)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, name: &str) -> &str {
        self.errors.get(name).map(String::as_str).unwrap_or("")
    }

    /// Whether every field satisfies every one of its validators, dirty or
    /// not.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(Field::is_valid)
    }

    /// Invoked synchronously with the fresh error map after each edit and
    /// after a reset.
    pub fn subscribe(&mut self, observer: impl FnMut(&ErrorMap) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Return every field to pristine with its default value. Observers
    /// see the cleared error map, as they do for edits.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value = field.default.clone();
            field.dirty = false;
        }

        self.recompute();
    }

    fn recompute(&mut self) {
        self.errors = aggregate(&self.fields, &self.messages);

        for observer in &mut self.observers {
            observer(&self.errors);
        }
    }
}
