use std::collections::BTreeMap;
use std::fmt;

/// A resolved option or style value.
///
/// Markup-provided values always arrive as text; numeric parsing is left to the consumer
/// (see [`OptionValue::as_f64`]).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Numeric value.
    Number(f64),
    /// Text value.
    Text(String),
}

impl OptionValue {
    /// Truthiness as markup authors understand it: empty text, `0` and `NaN` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
        }
    }

    /// Numeric view of the value. Text is parsed as a float after trimming.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// Borrow the text payload, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for OptionValue {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

fn placeholder_name(s: &str) -> Option<&str> {
    if s.len() >= 2 && s.starts_with('{') && s.ends_with('}') {
        Some(&s[1..s.len() - 1])
    } else {
        None
    }
}

/// Property name in a style template: either a literal CSS-like property or a
/// `{optionName}` placeholder resolved against the effective options.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StyleKey {
    /// A concrete property name.
    Literal(String),
    /// An option name whose value becomes the property name.
    Placeholder(String),
}

impl StyleKey {
    /// Parse `"{direction}"` into a placeholder and anything else into a literal.
    pub fn parse(s: &str) -> Self {
        match placeholder_name(s) {
            Some(name) => Self::Placeholder(name.to_string()),
            None => Self::Literal(s.to_string()),
        }
    }
}

impl From<String> for StyleKey {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for StyleKey {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<StyleKey> for String {
    fn from(k: StyleKey) -> Self {
        match k {
            StyleKey::Literal(s) => s,
            StyleKey::Placeholder(name) => format!("{{{name}}}"),
        }
    }
}

/// Property value in a style template.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "OptionValue", into = "OptionValue")]
pub enum StyleValue {
    /// A concrete value.
    Literal(OptionValue),
    /// An option name whose value is substituted in.
    Placeholder(String),
}

impl From<OptionValue> for StyleValue {
    fn from(v: OptionValue) -> Self {
        match &v {
            OptionValue::Text(s) => match placeholder_name(s) {
                Some(name) => Self::Placeholder(name.to_string()),
                None => Self::Literal(v),
            },
            OptionValue::Number(_) => Self::Literal(v),
        }
    }
}

impl From<StyleValue> for OptionValue {
    fn from(v: StyleValue) -> Self {
        match v {
            StyleValue::Literal(v) => v,
            StyleValue::Placeholder(name) => OptionValue::Text(format!("{{{name}}}")),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        Self::Literal(OptionValue::Number(v))
    }
}

impl From<i32> for StyleValue {
    fn from(v: i32) -> Self {
        Self::Literal(OptionValue::from(v))
    }
}

impl From<&str> for StyleValue {
    fn from(v: &str) -> Self {
        OptionValue::from(v).into()
    }
}

impl From<String> for StyleValue {
    fn from(v: String) -> Self {
        OptionValue::Text(v).into()
    }
}

/// Declarative phase state, possibly containing placeholders.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct StyleTemplate(pub BTreeMap<StyleKey, StyleValue>);

impl StyleTemplate {
    /// Empty template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. Both key and value strings may be `{placeholders}`.
    pub fn with(mut self, key: &str, value: impl Into<StyleValue>) -> Self {
        self.0.insert(StyleKey::parse(key), value.into());
        self
    }
}

/// Persistent ("always") state. `None` entries mean "no override" and are skipped.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct StyleOverlay(pub BTreeMap<StyleKey, Option<StyleValue>>);

impl StyleOverlay {
    /// Empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a concrete override.
    pub fn with(mut self, key: &str, value: impl Into<StyleValue>) -> Self {
        self.0.insert(StyleKey::parse(key), Some(value.into()));
        self
    }

    /// Builder-style insert of an explicit "no override" entry.
    pub fn without(mut self, key: &str) -> Self {
        self.0.insert(StyleKey::parse(key), None);
        self
    }
}

/// Fully resolved style state: concrete property names mapped to concrete values.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct StyleState(pub BTreeMap<String, OptionValue>);

impl StyleState {
    /// Empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a property.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.get(key)
    }

    /// Insert or replace a property.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no property is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate properties in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &OptionValue)> {
        self.0.iter()
    }
}

/// Effective options for one element and one phase invocation.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AnimationOptions(pub BTreeMap<String, OptionValue>);

impl AnimationOptions {
    /// Empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an option.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.get(key)
    }

    /// Text view of an option (numbers are not converted).
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(OptionValue::as_str)
    }

    /// Numeric view of an option, parsing text values.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(OptionValue::as_f64)
    }

    /// Insert or replace an option. Used by `on_parse_options` hooks.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Insert only when the key is not present yet (first write wins).
    pub fn set_if_absent(&mut self, key: &str, value: &OptionValue) {
        if !self.0.contains_key(key) {
            self.0.insert(key.to_string(), value.clone());
        }
    }

    /// `true` when the option is present.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/value.rs"]
mod tests;
