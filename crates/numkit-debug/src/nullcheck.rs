//! Null-like sentinel detection behind `expect_non_null!`.

use std::ptr::NonNull;

/// Types that can hold a null-like sentinel.
///
/// Implemented only for pointer-shaped types. Passing anything else to
/// `expect_non_null!` is a compile error rather than a guess about what
/// "null" would mean for that type.
pub trait Nullable {
    /// Returns true when the value is the null sentinel.
    fn is_null_like(&self) -> bool;
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null_like(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null_like(&self) -> bool {
        self.is_null()
    }
}

impl<T> Nullable for Option<T> {
    fn is_null_like(&self) -> bool {
        self.is_none()
    }
}

// NonNull guarantees the sentinel is unrepresentable.
impl<T: ?Sized> Nullable for NonNull<T> {
    fn is_null_like(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_pointers_report_null() {
        let present = 5_u32;
        let here: *const u32 = &present;
        let gone: *const u32 = std::ptr::null();
        assert!(!here.is_null_like());
        assert!(gone.is_null_like());
    }

    #[test]
    fn options_report_none() {
        assert!(Option::<u8>::None.is_null_like());
        assert!(!Some(3_u8).is_null_like());
    }

    #[test]
    fn non_null_is_never_the_sentinel() {
        let value = 9_i32;
        let ptr = NonNull::from(&value);
        assert!(!ptr.is_null_like());
    }
}
