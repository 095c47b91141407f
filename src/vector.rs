use crate::{Result, VectorError};
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Immutable, fixed-dimension vector of `f64` components.
///
/// The component buffer is owned by the vector and never handed out mutably,
/// so every operation that looks like a modification returns a new `Vector`.
/// Equality is exact component-wise comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    data: Array1<f64>,
}

impl Vector {
    /// Zero vector of dimension `n`. `n == 0` gives the empty vector.
    pub fn zeros(n: usize) -> Self {
        Self {
            data: Array1::zeros(n),
        }
    }

    /// Copies `data` into a new vector. Later writes to the caller's buffer
    /// are not observed by the returned value.
    pub fn from_slice(data: &[f64]) -> Self {
        Self {
            data: Array1::from_vec(data.to_vec()),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The `i`-th component.
    pub fn cartesian(&self, i: usize) -> Result<f64> {
        self.get(i).ok_or(VectorError::IndexOutOfBounds {
            index: i,
            len: self.len(),
        })
    }

    pub fn get(&self, i: usize) -> Option<f64> {
        self.data.get(i).copied()
    }

    /// Read-only view of the components.
    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.data.view()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }

    /// Inner product `sum(this[i] * that[i])`.
    pub fn dot(&self, that: &Vector) -> Result<f64> {
        self.check_dimension(that)?;
        Ok(self.data.dot(&that.data))
    }

    /// Euclidean norm. `0.0` for the zero vector and the empty vector.
    pub fn magnitude(&self) -> f64 {
        self.data.dot(&self.data).sqrt()
    }

    pub fn distance_to(&self, that: &Vector) -> Result<f64> {
        Ok(self.minus(that)?.magnitude())
    }

    pub fn plus(&self, that: &Vector) -> Result<Vector> {
        self.check_dimension(that)?;
        Ok(Self {
            data: &self.data + &that.data,
        })
    }

    pub fn minus(&self, that: &Vector) -> Result<Vector> {
        self.check_dimension(that)?;
        Ok(Self {
            data: &self.data - &that.data,
        })
    }

    pub fn scale(&self, factor: f64) -> Vector {
        trace!(factor, dimension = self.len(), "scaling vector");
        Self {
            data: self.data.mapv(|x| factor * x),
        }
    }

    /// Unit vector pointing the same way as `self`.
    ///
    /// Fails with [`VectorError::UndefinedDirection`] when the magnitude is
    /// exactly zero.
    pub fn direction(&self) -> Result<Vector> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            debug!(dimension = self.len(), "zero vector has no direction");
            return Err(VectorError::UndefinedDirection);
        }
        Ok(self.scale(1.0 / magnitude))
    }

    fn check_dimension(&self, that: &Vector) -> Result<()> {
        if self.len() != that.len() {
            debug!(
                expected = self.len(),
                found = that.len(),
                "dimensions disagree"
            );
            return Err(VectorError::DimensionMismatch {
                expected: self.len(),
                found: that.len(),
            });
        }
        Ok(())
    }
}

impl From<Vec<f64>> for Vector {
    /// Takes ownership of `data`; the caller keeps no handle to the buffer.
    fn from(data: Vec<f64>) -> Self {
        Self {
            data: Array1::from_vec(data),
        }
    }
}

impl From<&[f64]> for Vector {
    fn from(data: &[f64]) -> Self {
        Self::from_slice(data)
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write_component(f, *x)?;
        }
        write!(f, ")")
    }
}

/// Debug keeps the trailing ".0" on integral values; infinities are spelled
/// out in full.
fn write_component(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x == f64::INFINITY {
        write!(f, "Infinity")
    } else if x == f64::NEG_INFINITY {
        write!(f, "-Infinity")
    } else {
        write!(f, "{:?}", x)
    }
}
