//! Numeric type definitions.
//!
//! Feature matrices are stored as `f32` or `f64`; the [`Scalar`] trait
//! collects the bounds the sparse kernels and nalgebra need.

use nalgebra::{Dyn, OMatrix, OVector, Scalar as NalgebraScalar};
use num_traits::{Float, Zero};
use std::fmt::{Debug, Display};

/// Trait for scalar types stored in feature matrices (f32 or f64).
///
/// `Send + Sync` lets batch densification fan out over rayon workers.
pub trait Scalar:
    NalgebraScalar + Float + Zero + Display + Debug + Default + Copy + Send + Sync + 'static
{
}

impl Scalar for f32 {}

impl Scalar for f64 {}

/// Type alias for a dynamically-sized matrix.
pub type DMatrix<T> = OMatrix<T, Dyn, Dyn>;

/// Type alias for a dynamically-sized vector.
pub type DVector<T> = OVector<T, Dyn>;
