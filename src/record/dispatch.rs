use super::Record;
use crate::value::Value;
use heck::{ToSnakeCase, ToUpperCamelCase};
use smol_str::SmolStr;
use std::panic::Location;

// ─── FieldVerb ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldVerb {
    Get,
    Set,
    Has,
    Unset,
}

impl FieldVerb {
    const ALL: [FieldVerb; 4] = [
        FieldVerb::Get,
        FieldVerb::Set,
        FieldVerb::Has,
        FieldVerb::Unset,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            FieldVerb::Get => "get",
            FieldVerb::Set => "set",
            FieldVerb::Has => "has",
            FieldVerb::Unset => "unset",
        }
    }
}

// ─── FieldCall ──────────────────────────────────────────────────────────────

/// A parsed `verbField` method name, e.g. `setCreationDate`.
///
/// The grammar is a verb prefix followed by an uppercase letter and at least
/// one more ASCII letter or digit. The suffix maps to a snake_case field key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCall {
    pub verb: FieldVerb,
    pub field: SmolStr,
}

impl FieldCall {
    /// Parse `method`, or `None` when it does not follow the grammar.
    pub fn parse(method: &str) -> Option<Self> {
        FieldVerb::ALL.into_iter().find_map(|verb| {
            let suffix = method.strip_prefix(verb.prefix())?;
            is_field_suffix(suffix).then(|| FieldCall {
                verb,
                field: SmolStr::from(suffix.to_snake_case()),
            })
        })
    }

    /// Method name that dispatches to this call: `Set` + `foo_bar` gives
    /// `setFooBar`.
    pub fn method_name(&self) -> String {
        format!("{}{}", self.verb.prefix(), self.field.to_upper_camel_case())
    }
}

fn is_field_suffix(suffix: &str) -> bool {
    let mut chars = suffix.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            let rest = chars.as_str();
            !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

// ─── Dispatched ─────────────────────────────────────────────────────────────

/// Outcome of a dispatched field call.
#[derive(Debug)]
pub enum Dispatched<'a> {
    /// `get*`: the field value, the default argument, or `None`.
    Field(Option<Value>),
    /// `has*`: whether the field is present.
    Present(bool),
    /// `set*` / `unset*`: the record, for chaining.
    Record(&'a mut Record),
}

impl<'a> Dispatched<'a> {
    pub fn value(&self) -> Option<&Value> {
        match self {
            Dispatched::Field(value) => value.as_ref(),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Dispatched::Field(value) => value,
            _ => None,
        }
    }

    pub fn is_present(&self) -> Option<bool> {
        match self {
            Dispatched::Present(present) => Some(*present),
            _ => None,
        }
    }

    pub fn into_record(self) -> Option<&'a mut Record> {
        match self {
            Dispatched::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl Record {
    // ════════════════════════════════════════════════════════════════════════
    // Method-name dispatch
    // ════════════════════════════════════════════════════════════════════════

    /// Run the field operation named by `method`.
    ///
    /// `getFooBar(default?)` reads `foo_bar`, `setFooBar(value?)` writes it
    /// (no argument means `Null`, which removes the field), `hasFooBar()` and
    /// `unsetFooBar()` check and remove it. Extra arguments are ignored.
    ///
    /// # Panics
    ///
    /// When `method` does not follow the `verbField` grammar. This marks a
    /// programming error; the panic is reported at the caller's location.
    #[track_caller]
    pub fn call(&mut self, method: &str, args: &[Value]) -> Dispatched<'_> {
        let Some(call) = FieldCall::parse(method) else {
            let caller = Location::caller();
            tracing::error!(target: "keyed_collections::record", method, %caller, "Call to undefined method");
            panic!(
                "Call to undefined method Record::{method}() in {} on line {}",
                caller.file(),
                caller.line()
            );
        };
        self.apply(&call, args)
    }

    /// Run an already parsed field call.
    pub fn apply(&mut self, call: &FieldCall, args: &[Value]) -> Dispatched<'_> {
        let field = call.field.as_str();
        match call.verb {
            FieldVerb::Get => Dispatched::Field(
                self.get_field(field)
                    .or_else(|| args.first().filter(|v| !v.is_null()))
                    .cloned(),
            ),
            FieldVerb::Set => {
                let value = args.first().cloned().unwrap_or_default();
                Dispatched::Record(self.set_field(field, value))
            }
            FieldVerb::Has => Dispatched::Present(self.has_field(field)),
            FieldVerb::Unset => Dispatched::Record(self.unset_field(field)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Container;
    use crate::items;
    use crate::types::Items;

    fn some_data() -> Items {
        items! { "foo" => "bar", "fii" => "baz", "under_scored" => "camelCase" }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Parsing
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_parse_verbs() {
        let call = FieldCall::parse("getCreationDate").unwrap();
        assert_eq!(call.verb, FieldVerb::Get);
        assert_eq!(call.field, "creation_date");

        assert_eq!(FieldCall::parse("setFooBar").unwrap().field, "foo_bar");
        assert_eq!(FieldCall::parse("hasUnderScored").unwrap().verb, FieldVerb::Has);
        assert_eq!(FieldCall::parse("unsetFii").unwrap().verb, FieldVerb::Unset);
    }

    #[test]
    fn test_parse_rejects_off_grammar_names() {
        assert_eq!(FieldCall::parse("undefinedMethod"), None);
        assert_eq!(FieldCall::parse("get_something"), None);
        assert_eq!(FieldCall::parse("getfoo"), None);
        assert_eq!(FieldCall::parse("get"), None);
        // The suffix needs at least two characters.
        assert_eq!(FieldCall::parse("getX"), None);
        assert_eq!(FieldCall::parse("getFoo-Bar"), None);
    }

    #[test]
    fn test_method_name_round_trip() {
        let call = FieldCall::parse("setFooBar").unwrap();
        assert_eq!(call.method_name(), "setFooBar");

        let built = FieldCall {
            verb: FieldVerb::Unset,
            field: SmolStr::from("creation_date"),
        };
        assert_eq!(FieldCall::parse(&built.method_name()), Some(built));
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Dispatch
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn test_call_get() {
        let mut record = Record::from_data(some_data());
        assert_eq!(
            record.call("getFoo", &[]).into_value(),
            Some(Value::from("bar"))
        );
        assert_eq!(
            record
                .call("getNonExistingField", &[Value::from("foo")])
                .into_value(),
            Some(Value::from("foo"))
        );
        assert_eq!(record.call("getNonExistingField", &[]).into_value(), None);
    }

    #[test]
    fn test_call_set() {
        let mut record = Record::from_data(some_data());

        record.call("setMyField", &[Value::from("new value")]);
        assert_eq!(record.get_field("my_field"), Some(&Value::from("new value")));

        record.call("setFoo", &[Value::from("value")]);
        assert!(record.has_field("foo"));
        assert_eq!(record.get_field("foo"), Some(&Value::from("value")));

        record.call("setFooBar", &[Value::from("x")]);
        assert!(record.has_field("foo_bar"));
        assert_eq!(record.get_field("foo_bar"), Some(&Value::from("x")));
    }

    #[test]
    fn test_call_set_chains() {
        let mut record = Record::new();
        record
            .call("setFoo", &[Value::from(1i64)])
            .into_record()
            .unwrap()
            .set_field("bar", 2i64);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_call_set_without_args_unsets() {
        let mut record = Record::from_data(some_data());
        record.call("setFoo", &[]);
        assert!(!record.has_field("foo"));
    }

    #[test]
    fn test_call_has() {
        let mut record = Record::from_data(some_data());
        assert_eq!(record.call("hasUnderScored", &[]).is_present(), Some(true));
        assert_eq!(record.call("hasNonExistingField", &[]).is_present(), Some(false));
    }

    #[test]
    fn test_call_unset() {
        let mut record = Record::from_data(some_data());
        assert!(record.call("unsetFii", &[]).into_record().is_some());
        assert!(!record.has_field("fii"));
    }

    #[test]
    #[should_panic(expected = "Call to undefined method Record::undefinedMethod()")]
    fn test_call_undefined_method() {
        let mut record = Record::new();
        record.call("undefinedMethod", &[]);
    }

    #[test]
    #[should_panic(expected = "Call to undefined method Record::get_something()")]
    fn test_call_undefined_method_underscored() {
        let mut record = Record::new();
        record.call("get_something", &[]);
    }
}
