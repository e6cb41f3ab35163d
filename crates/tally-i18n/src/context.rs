//! Parameters passed into translation templates

use std::collections::HashMap;
use std::fmt;

/// A single template parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Parameters for a translation template
///
/// `count` drives plural-category selection; `params` carries the named
/// values a template interpolates. Parameter arity and types are the
/// caller's contract with the catalog author: the resolver does not check
/// them, and a plural template invoked without a count degrades to the
/// "other" form.
#[derive(Debug, Clone, Default)]
pub struct TranslationContext {
    /// Count for pluralization
    pub count: Option<i64>,
    /// Named template parameters
    pub params: HashMap<String, ParamValue>,
}

impl TranslationContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a count for pluralization
    pub fn with_count(count: i64) -> Self {
        Self {
            count: Some(count),
            ..Default::default()
        }
    }

    /// Set the count
    pub fn set_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    /// Add a named parameter
    pub fn add_param<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Look up a named parameter
    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    /// Render a named parameter, or the empty string when absent
    pub fn param_text(&self, key: &str) -> String {
        self.params
            .get(key)
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

/// Macro to create a [`TranslationContext`] more easily
#[macro_export]
macro_rules! translation_context {
    () => {
        $crate::TranslationContext::new()
    };
    (count: $count:expr) => {
        $crate::TranslationContext::with_count($count)
    };
    (count: $count:expr, $($key:expr => $value:expr),+ $(,)?) => {{
        let mut context = $crate::TranslationContext::with_count($count);
        $(
            context = context.add_param($key, $value);
        )+
        context
    }};
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut context = $crate::TranslationContext::new();
        $(
            context = context.add_param($key, $value);
        )+
        context
    }};
}
