//! FIELD combinator - projects a field out of a record
//!
//! [`field`] is the borrowing form of `identity().map(accessor)`: it reads
//! the field straight from `&T` instead of cloning the whole record first.

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Outcome, Rule};

/// Extracts a value from the input with an accessor; never fails.
///
/// # Type Parameters
///
/// * `T` - The record type
/// * `U` - The extracted field type
/// * `F` - The accessor function type
pub struct Field<T: ?Sized, U, F> {
    accessor: F,
    _phantom: PhantomData<fn(&T) -> U>,
}

impl<T: ?Sized, U, F> Field<T, U, F> {
    /// Creates a new field projection.
    pub fn new(accessor: F) -> Self {
        Self {
            accessor,
            _phantom: PhantomData,
        }
    }

    /// Returns a reference to the accessor function.
    pub fn accessor(&self) -> &F {
        &self.accessor
    }
}

// Clone impl - manual because T and U need not be Clone
impl<T: ?Sized, U, F: Clone> Clone for Field<T, U, F> {
    fn clone(&self) -> Self {
        Self::new(self.accessor.clone())
    }
}

impl<T: ?Sized, U, F> fmt::Debug for Field<T, U, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("accessor", &"<function>")
            .finish()
    }
}

impl<T, U, F> Rule for Field<T, U, F>
where
    T: ?Sized,
    F: Fn(&T) -> U,
{
    type Input = T;
    type Output = U;

    fn apply(&self, input: &T) -> Outcome<U> {
        Outcome::success((self.accessor)(input))
    }
}

/// Creates a field projection rule.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict_validator::prelude::*;
///
/// let street = field(|a: &Address| a.street.clone()).flat_map(not_empty());
/// ```
pub fn field<T, U, F>(accessor: F) -> Field<T, U, F>
where
    T: ?Sized,
    F: Fn(&T) -> U,
{
    Field::new(accessor)
}
