//! Generators parameterised by a size hint.

use std::fmt;
use std::rc::Rc;

use crate::generator::Gen;

/// A family of generators indexed by a non-negative size hint, used to
/// build variable-length collections.
pub struct SizedGen<T> {
    forge: Rc<dyn Fn(usize) -> Gen<T>>,
}

impl<T> Clone for SizedGen<T> {
    fn clone(&self) -> Self {
        Self {
            forge: Rc::clone(&self.forge),
        }
    }
}

impl<T> fmt::Debug for SizedGen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizedGen").finish_non_exhaustive()
    }
}

impl<T: 'static> SizedGen<T> {
    /// Builds a sized generator from a size-indexed constructor.
    pub fn from_fn(forge: impl Fn(usize) -> Gen<T> + 'static) -> Self {
        Self {
            forge: Rc::new(forge),
        }
    }

    /// Fixes the size hint, yielding an ordinary generator.
    pub fn apply(&self, size: usize) -> Gen<T> {
        (self.forge)(size)
    }

    /// Maps every generator in the family.
    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + 'static) -> SizedGen<U> {
        let f = Rc::new(f);
        SizedGen::from_fn(move |size| {
            let f = Rc::clone(&f);
            self.apply(size).map(move |a| f(a))
        })
    }

    /// Chains into another sized generator, handing it the same size hint.
    pub fn flat_map<U: 'static>(self, f: impl Fn(T) -> SizedGen<U> + 'static) -> SizedGen<U> {
        let f = Rc::new(f);
        SizedGen::from_fn(move |size| {
            let f = Rc::clone(&f);
            self.apply(size).flat_map(move |a| f(a).apply(size))
        })
    }
}

impl<T: 'static> From<Gen<T>> for SizedGen<T> {
    fn from(generator: Gen<T>) -> Self {
        generator.to_sized()
    }
}
