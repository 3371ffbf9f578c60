use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

/// A single parameter value.
///
/// Every value travels as text on the wire, see the [`fmt::Display`] implementation for the
/// canonical representation. `Float` must be finite to be sent: `inf` and `NaN` have no decimal
/// form and are rejected when the request is built.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::UInt(v) => write!(f, "{v}"),
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Bool(v) => write!(f, "{v}"),
            ParamValue::Str(v) => f.write_str(v),
        }
    }
}

macro_rules! impl_from {
    ($variant:ident: $($ty:ty),+) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::$variant(value.into())
                }
            }
        )+
    };
}

impl_from!(Int: i8, i16, i32, i64);
impl_from!(UInt: u8, u16, u32, u64);
impl_from!(Float: f32, f64);
impl_from!(Bool: bool);
impl_from!(Str: String, &str);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamsError {
    #[error("Parameters must be a JSON object, got '{0}'")]
    NotAnObject(serde_json::Value),
    #[error("Parameter '{0}' must be a number, boolean or string")]
    UnsupportedValue(String),
    #[error("Parameter '{0}' must be a finite number")]
    NonFinite(String),
}

/// The parameters of one call, keyed by name.
///
/// A `None` value stands for an absent parameter. It is accepted here so optional values can be
/// forwarded as-is and is dropped when the request is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(BTreeMap<String, Option<ParamValue>>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(name.into(), Some(value.into()));
    }

    /// Inserts an optional value, `None` marks the parameter as absent.
    pub fn insert_opt<V: Into<ParamValue>>(&mut self, name: impl Into<String>, value: Option<V>) {
        self.0.insert(name.into(), value.map(Into::into));
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn with_opt<V: Into<ParamValue>>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.insert_opt(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name).and_then(Option::as_ref)
    }

    /// Iterates over the parameters that carry a value.
    pub fn present(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0
            .iter()
            .filter_map(|(name, value)| value.as_ref().map(|v| (name.as_str(), v)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds a parameter set from a flat JSON object.
    ///
    /// `null` members are treated as absent. Nested arrays and objects are rejected.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ParamsError> {
        let object = value
            .as_object()
            .ok_or_else(|| ParamsError::NotAnObject(value.clone()))?;

        let mut params = Params::new();
        for (name, value) in object {
            let value = match value {
                serde_json::Value::Null => None,
                serde_json::Value::Bool(b) => Some(ParamValue::Bool(*b)),
                serde_json::Value::String(s) => Some(ParamValue::Str(s.clone())),
                serde_json::Value::Number(n) => {
                    if let Some(u) = n.as_u64() {
                        Some(ParamValue::UInt(u))
                    } else if let Some(i) = n.as_i64() {
                        Some(ParamValue::Int(i))
                    } else if let Some(f) = n.as_f64() {
                        Some(ParamValue::Float(f))
                    } else {
                        return Err(ParamsError::UnsupportedValue(name.clone()));
                    }
                }
                serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                    return Err(ParamsError::UnsupportedValue(name.clone()));
                }
            };
            params.0.insert(name.clone(), value);
        }

        Ok(params)
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        )
    }
}

impl IntoIterator for Params {
    type Item = (String, Option<ParamValue>);
    type IntoIter = btree_map::IntoIter<String, Option<ParamValue>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
