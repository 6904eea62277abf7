use crate::{Result, VectorError};
use anyhow::Context;
use ndarray::Array1;
use serde_json::Value;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// Tolerance used by [`Vector::approx_eq`] callers that have no better bound.
pub const DEFAULT_EPSILON: f64 = 1e-9;

const DISPLAY_PREFIX: &str = "Vector([";
const DISPLAY_SUFFIX: &str = "])";

/// An ordered sequence of finite `f64` components.
///
/// The dimension is fixed at construction. Operations never mutate a vector;
/// they return a new one (or a scalar).
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    data: Array1<f64>,
}

impl Vector {
    pub fn new(elements: Vec<f64>) -> Result<Self> {
        if let Some(index) = elements.iter().position(|el| !el.is_finite()) {
            tracing::debug!(index, "rejected non-finite vector element");
            return Err(VectorError::NonFiniteElement { index });
        }
        Ok(Self::from_array(Array1::from_vec(elements)))
    }

    pub fn from_ints(elements: &[i64]) -> Self {
        Self::from_array(elements.iter().map(|&el| el as f64).collect())
    }

    /// Every value must be a JSON number (integer or float).
    pub fn from_values(values: &[Value]) -> Result<Self> {
        let mut elements = Vec::with_capacity(values.len());
        for (index, value) in values.iter().enumerate() {
            let el = value.as_f64().ok_or_else(|| {
                tracing::debug!(index, found = json_type_name(value), "rejected vector element");
                VectorError::InvalidElementType {
                    index,
                    found: json_type_name(value).to_string(),
                }
            })?;
            elements.push(el);
        }
        Self::new(elements)
    }

    pub fn zeros(dim: usize) -> Self {
        Self::from_array(Array1::zeros(dim))
    }

    /// Wraps an array whose components are already known to be valid.
    /// Storage is kept in standard (contiguous) layout.
    pub(crate) fn from_array(data: Array1<f64>) -> Self {
        if data.is_standard_layout() {
            Self { data }
        } else {
            Self {
                data: data.as_standard_layout().into_owned(),
            }
        }
    }

    pub fn dim(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_array(&self) -> &Array1<f64> {
        &self.data
    }

    pub fn as_slice(&self) -> &[f64] {
        // from_array only ever stores standard-layout arrays
        self.data
            .as_slice()
            .expect("vector storage is contiguous")
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> + '_ {
        self.data.iter()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }

    /// The empty vector has norm 0.0.
    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }

    pub(crate) fn norm_sq(&self) -> f64 {
        self.data.dot(&self.data)
    }

    pub fn approx_eq(&self, other: &Vector, epsilon: f64) -> bool {
        self.dim() == other.dim()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = VectorError;

    fn try_from(elements: Vec<f64>) -> Result<Self> {
        Self::new(elements)
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(elements: &[f64]) -> Result<Self> {
        Self::new(elements.to_vec())
    }
}

impl<const N: usize> TryFrom<[f64; N]> for Vector {
    type Error = VectorError;

    fn try_from(elements: [f64; N]) -> Result<Self> {
        Self::new(elements.to_vec())
    }
}

impl TryFrom<Array1<f64>> for Vector {
    type Error = VectorError;

    fn try_from(data: Array1<f64>) -> Result<Self> {
        Self::new(data.to_vec())
    }
}

impl TryFrom<&Value> for Vector {
    type Error = VectorError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Array(values) => Self::from_values(values),
            other => Err(VectorError::InvalidElementType {
                index: 0,
                found: json_type_name(other).to_string(),
            }),
        }
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(DISPLAY_PREFIX)?;
        for (i, el) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            // Debug formatting keeps the fractional part and round-trips exactly
            write!(f, "{:?}", el)?;
        }
        f.write_str(DISPLAY_SUFFIX)
    }
}

impl FromStr for Vector {
    type Err = VectorError;

    /// Parses the [`Display`](fmt::Display) form, e.g. `Vector([1.0, 2.0])`.
    fn from_str(s: &str) -> Result<Self> {
        let inner = s
            .trim()
            .strip_prefix(DISPLAY_PREFIX)
            .and_then(|rest| rest.strip_suffix(DISPLAY_SUFFIX))
            .ok_or_else(|| {
                tracing::debug!(input = s, "malformed vector literal");
                VectorError::Parse(format!("expected `Vector([...])`, got {:?}", s))
            })?;

        // Elements use JSON number syntax, so `inf`, `NaN` and `+1.0` are rejected
        let values: Vec<Value> = serde_json::from_str(&format!("[{}]", inner))
            .with_context(|| format!("Failed to parse vector elements {:?}", inner))?;

        Self::from_values(&values)
    }
}
