use crate::vector::json_type_name;
use crate::{Result, Vector, VectorError};
use serde_json::Value;

/// Right-hand side of [`Vector::multiply`]: a scalar or another vector.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Vector(Vector),
}

/// Result of [`Vector::multiply`]: scaling yields a vector, a dot product a scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum Product {
    Scalar(f64),
    Vector(Vector),
}

impl Product {
    pub fn into_scalar(self) -> Option<f64> {
        match self {
            Product::Scalar(s) => Some(s),
            Product::Vector(_) => None,
        }
    }

    pub fn into_vector(self) -> Option<Vector> {
        match self {
            Product::Vector(v) => Some(v),
            Product::Scalar(_) => None,
        }
    }
}

impl From<f64> for Operand {
    fn from(scalar: f64) -> Self {
        Operand::Scalar(scalar)
    }
}

impl From<i64> for Operand {
    fn from(scalar: i64) -> Self {
        Operand::Scalar(scalar as f64)
    }
}

impl From<Vector> for Operand {
    fn from(vector: Vector) -> Self {
        Operand::Vector(vector)
    }
}

impl From<&Vector> for Operand {
    fn from(vector: &Vector) -> Self {
        Operand::Vector(vector.clone())
    }
}

impl TryFrom<&Value> for Operand {
    type Error = VectorError;

    /// Numbers become scalars and arrays become vectors. Arrays are still
    /// validated element by element.
    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Number(_) => scalar_from_value(value).map(Operand::Scalar),
            Value::Array(values) => Vector::from_values(values).map(Operand::Vector),
            other => {
                tracing::debug!(found = json_type_name(other), "rejected multiplication operand");
                Err(VectorError::InvalidOperandType(format!(
                    "multiplication is only defined for vectors, integers and floats, found {}",
                    json_type_name(other)
                )))
            }
        }
    }
}

/// Extracts a numeric scalar, failing with `InvalidOperandType` for anything else.
pub(crate) fn scalar_from_value(value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| {
        VectorError::InvalidOperandType(format!(
            "expected an integer or float, found {}",
            json_type_name(value)
        ))
    })
}
