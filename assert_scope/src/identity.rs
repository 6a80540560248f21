//! Identity comparison used by [`AssertionScope::assert_is`](crate::AssertionScope::assert_is).
//!
//! Identity is not equality: two distinct values that compare equal are *not* identical.
//! Plain value types (`bool`, integers, `char`, `()`) have no identity apart from their
//! value, so they are identical when they hold exactly the same value (floats compare
//! their bit pattern). References and owning pointers are identical only when they point
//! to the same object.
use std::{rc::Rc, sync::Arc};

/// Types that can tell if two values are the very same object.
pub trait Identity {
    fn is_identical(&self, other: &Self) -> bool;
}

macro_rules! identity_by_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl Identity for $t {
                fn is_identical(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

identity_by_value!(
    bool, char, (), u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
);

impl Identity for f32 {
    fn is_identical(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Identity for f64 {
    fn is_identical(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl<T: ?Sized> Identity for &T {
    fn is_identical(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> Identity for Box<T> {
    fn is_identical(&self, other: &Self) -> bool {
        std::ptr::eq(self.as_ref(), other.as_ref())
    }
}

impl<T: ?Sized> Identity for Rc<T> {
    fn is_identical(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identity for Arc<T> {
    fn is_identical(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: Identity> Identity for Option<T> {
    fn is_identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.is_identical(b),
            (None, None) => true,
            _ => false,
        }
    }
}
