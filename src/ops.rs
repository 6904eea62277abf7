use crate::operand::{scalar_from_value, Operand, Product};
use crate::{Result, Vector, VectorError};
use serde_json::Value;
use std::ops;

/// How far a computed cosine may stray outside [-1, 1] from rounding before
/// [`Vector::ang`] reports a domain error instead of clamping it.
pub const ANGLE_TOLERANCE: f64 = 1e-9;

const CROSS_DIM: usize = 3;

fn check_same_dim(a: &Vector, b: &Vector) -> Result<()> {
    if a.dim() != b.dim() {
        tracing::debug!(expected = a.dim(), found = b.dim(), "vector dimension mismatch");
        return Err(VectorError::DimensionMismatch {
            expected: a.dim(),
            found: b.dim(),
        });
    }
    Ok(())
}

fn check_finite_scalar(scalar: f64) -> Result<()> {
    if !scalar.is_finite() {
        tracing::debug!(scalar, "rejected non-finite scalar operand");
        return Err(VectorError::InvalidOperandType(format!(
            "non-finite scalar {}",
            scalar
        )));
    }
    Ok(())
}

fn check_cross_dim(v: &Vector) -> Result<()> {
    if v.dim() != CROSS_DIM {
        tracing::debug!(found = v.dim(), "cross product requires 3D vectors");
        return Err(VectorError::DimensionMismatch {
            expected: CROSS_DIM,
            found: v.dim(),
        });
    }
    Ok(())
}

impl Vector {
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        check_same_dim(self, other)?;
        Ok(self.as_array().dot(other.as_array()))
    }

    pub fn scale(&self, factor: f64) -> Result<Vector> {
        check_finite_scalar(factor)?;
        Ok(Vector::from_array(self.as_array() * factor))
    }

    /// Standard 3D cross product. Both operands must have dimension 3.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        check_cross_dim(self)?;
        check_cross_dim(other)?;

        let (a, b) = (self, other);
        Ok(Vector::from_array(ndarray::arr1(&[
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ])))
    }

    /// Angle in radians.
    pub fn ang(&self, other: &Vector) -> Result<f64> {
        let dot = self.dot(other)?;
        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            tracing::debug!("angle with a zero-norm vector");
            return Err(VectorError::DivisionByZero);
        }

        let cos = dot / denom;
        if !cos.is_finite() || cos.abs() > 1.0 + ANGLE_TOLERANCE {
            tracing::debug!(cos, "arccosine argument out of domain");
            return Err(VectorError::DomainError(cos));
        }
        Ok(cos.clamp(-1.0, 1.0).acos())
    }

    /// Projection of `other` onto `self`: `self * (self·other / |self|²)`.
    pub fn proj(&self, other: &Vector) -> Result<Vector> {
        let dot = self.dot(other)?;
        let norm_sq = self.norm_sq();
        if norm_sq == 0.0 {
            tracing::debug!("projection onto a zero-norm vector");
            return Err(VectorError::DivisionByZero);
        }
        let factor = dot / norm_sq;
        if !factor.is_finite() {
            tracing::debug!(factor, "projection factor overflowed");
            return Err(VectorError::DomainError(factor));
        }
        self.scale(factor)
    }

    pub fn add(&self, other: &Vector) -> Result<Vector> {
        check_same_dim(self, other)?;
        Ok(Vector::from_array(self.as_array() + other.as_array()))
    }

    pub fn subtract(&self, other: &Vector) -> Result<Vector> {
        check_same_dim(self, other)?;
        Ok(Vector::from_array(self.as_array() - other.as_array()))
    }

    /// Scalar multiplication for a scalar operand, dot product for a vector one.
    pub fn multiply(&self, other: impl Into<Operand>) -> Result<Product> {
        match other.into() {
            Operand::Scalar(factor) => self.scale(factor).map(Product::Vector),
            Operand::Vector(vector) => self.dot(&vector).map(Product::Scalar),
        }
    }

    pub fn multiply_value(&self, other: &Value) -> Result<Product> {
        self.multiply(Operand::try_from(other)?)
    }

    /// Zero divisors are rejected rather than producing infinities.
    pub fn divide(&self, divisor: f64) -> Result<Vector> {
        if divisor == 0.0 {
            tracing::debug!("vector division by zero");
            return Err(VectorError::DivisionByZero);
        }
        check_finite_scalar(divisor)?;
        Ok(Vector::from_array(self.as_array() / divisor))
    }

    pub fn divide_value(&self, divisor: &Value) -> Result<Vector> {
        self.divide(scalar_from_value(divisor)?)
    }

    pub fn normalize(&self) -> Result<Vector> {
        self.divide(self.norm())
    }

    pub fn distance(&self, other: &Vector) -> Result<f64> {
        Ok(self.subtract(other)?.norm())
    }
}

impl ops::Add<&Vector> for &Vector {
    type Output = Result<Vector>;

    fn add(self, rhs: &Vector) -> Result<Vector> {
        Vector::add(self, rhs)
    }
}

impl ops::Add for Vector {
    type Output = Result<Vector>;

    fn add(self, rhs: Vector) -> Result<Vector> {
        Vector::add(&self, &rhs)
    }
}

impl ops::Sub<&Vector> for &Vector {
    type Output = Result<Vector>;

    fn sub(self, rhs: &Vector) -> Result<Vector> {
        self.subtract(rhs)
    }
}

impl ops::Sub for Vector {
    type Output = Result<Vector>;

    fn sub(self, rhs: Vector) -> Result<Vector> {
        self.subtract(&rhs)
    }
}

// Vector * scalar = Vector
impl ops::Mul<f64> for &Vector {
    type Output = Result<Vector>;

    fn mul(self, rhs: f64) -> Result<Vector> {
        self.scale(rhs)
    }
}

impl ops::Mul<f64> for Vector {
    type Output = Result<Vector>;

    fn mul(self, rhs: f64) -> Result<Vector> {
        self.scale(rhs)
    }
}

// Vector * Vector = dot product
impl ops::Mul<&Vector> for &Vector {
    type Output = Result<f64>;

    fn mul(self, rhs: &Vector) -> Result<f64> {
        self.dot(rhs)
    }
}

impl ops::Div<f64> for &Vector {
    type Output = Result<Vector>;

    fn div(self, rhs: f64) -> Result<Vector> {
        self.divide(rhs)
    }
}

impl ops::Div<f64> for Vector {
    type Output = Result<Vector>;

    fn div(self, rhs: f64) -> Result<Vector> {
        self.divide(rhs)
    }
}

impl ops::Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::from_array(-self.as_array())
    }
}

impl ops::Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        -&self
    }
}
