// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::value::Value;

/// A set of snapshot holders that can be sampled together.
///
/// Implemented for a single [`Value<U>`] and for tuples of one to four values.
/// Sampling queries the holders in declaration order and stops at the first
/// absent one; the element is paired with the values only when all of them
/// are present.
pub trait Sample<T> {
    /// The tuple emitted for a fully sampled element.
    type Output;

    /// Pairs `element` with the current value of every holder, or returns
    /// `None` if any holder is absent.
    fn sample(&self, element: T) -> Option<Self::Output>;
}

impl<T, U> Sample<T> for Value<U>
where
    U: Clone + Send + Sync + 'static,
{
    type Output = (T, U);

    fn sample(&self, element: T) -> Option<Self::Output> {
        let value = self.current_value()?;
        Some((element, value))
    }
}

macro_rules! define_sample_impl {
    ($($value:ident: $index:tt),+) => {
        impl<T, $($value),+> Sample<T> for ($(Value<$value>,)+)
        where
            $($value: Clone + Send + Sync + 'static),+
        {
            type Output = (T, $($value),+);

            fn sample(&self, element: T) -> Option<Self::Output> {
                Some((element, $(self.$index.current_value()?),+))
            }
        }
    };
}

define_sample_impl!(U1: 0);
define_sample_impl!(U1: 0, U2: 1);
define_sample_impl!(U1: 0, U2: 1, U3: 2);
define_sample_impl!(U1: 0, U2: 1, U3: 2, U4: 3);
