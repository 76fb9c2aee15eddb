//! The exported check / expectation macro family.
//!
//! Every macro expands to a `#[cfg(debug_assertions)]` block: in release
//! builds the expansion is empty and the arguments are never evaluated,
//! so side effects inside a condition must not be relied upon.

/// Captures the path of the enclosing function.
///
/// Stable-Rust stand-in for C's `__func__`: the type name of a local
/// marker function is the function path plus a known suffix.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn __marker() {}
        fn __name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let __full = __name_of(__marker);
        __full.strip_suffix("::__marker").unwrap_or(__full)
    }};
}

/// Debug-build assertion.
///
/// `check!(cond)` reports the literal source text of `cond` on failure;
/// `check!(cond, msg)` reports `msg` instead. A failed check writes a
/// diagnostic record to stdout, mirrors it to the `log` facade, and
/// traps. Compiles to nothing in release builds.
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {{
        #[cfg(debug_assertions)]
        {
            if !($cond) {
                $crate::report::emit(
                    file!(),
                    line!(),
                    $crate::__function_name!(),
                    "assertion failed",
                    stringify!($cond),
                );
                $crate::report::trap();
            }
        }
    }};
    ($cond:expr, $msg:expr $(,)?) => {{
        #[cfg(debug_assertions)]
        {
            if !($cond) {
                $crate::report::emit(
                    file!(),
                    line!(),
                    $crate::__function_name!(),
                    "assertion failed",
                    ::std::convert::AsRef::<str>::as_ref(&$msg),
                );
                $crate::report::trap();
            }
        }
    }};
}

/// Shared expansion body of the `expect_*!` macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __expect_with_op {
    ($left:expr, $right:expr, $op:ident, $family:ident) => {{
        #[cfg(debug_assertions)]
        {
            #[allow(unused_imports)]
            use $crate::cmp::{FloatOperands as _, $family as _};
            let __left = &$left;
            let __right = &$right;
            let __pair = $crate::cmp::Pair(__left, __right);
            if !(&__pair).compare($crate::cmp::CmpOp::$op) {
                let __msg = (&__pair).describe(
                    stringify!($left),
                    stringify!($right),
                    $crate::cmp::CmpOp::$op,
                );
                $crate::report::emit(
                    file!(),
                    line!(),
                    $crate::__function_name!(),
                    "assertion failed",
                    &__msg,
                );
                $crate::report::trap();
            }
        }
    }};
}

/// Expects `left == right`, ULP-tolerant when either operand is a float.
///
/// The failure payload shows both operand expressions and values, plus
/// the ULP distance for floating-point operands. Traps on failure;
/// compiles to nothing in release builds.
#[macro_export]
macro_rules! expect_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__expect_with_op!($left, $right, Eq, EqOperands)
    };
}

/// Expects `left != right`, ULP-tolerant when either operand is a float.
#[macro_export]
macro_rules! expect_ne {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__expect_with_op!($left, $right, Ne, EqOperands)
    };
}

/// Expects `left < right` (exact, also for floats).
#[macro_export]
macro_rules! expect_lt {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__expect_with_op!($left, $right, Lt, OrdOperands)
    };
}

/// Expects `left <= right` (exact, also for floats).
#[macro_export]
macro_rules! expect_le {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__expect_with_op!($left, $right, Le, OrdOperands)
    };
}

/// Expects `left > right` (exact, also for floats).
#[macro_export]
macro_rules! expect_gt {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__expect_with_op!($left, $right, Gt, OrdOperands)
    };
}

/// Expects `left >= right` (exact, also for floats).
#[macro_export]
macro_rules! expect_ge {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__expect_with_op!($left, $right, Ge, OrdOperands)
    };
}

/// Expects a pointer-shaped value to be non-null.
///
/// Accepts raw pointers, `Option<T>` and `NonNull<T>` (see
/// [`crate::nullcheck::Nullable`]); any other type fails to compile.
/// Traps on failure; compiles to nothing in release builds.
#[macro_export]
macro_rules! expect_non_null {
    ($ptr:expr $(,)?) => {{
        #[cfg(debug_assertions)]
        {
            if $crate::nullcheck::Nullable::is_null_like(&$ptr) {
                let __msg = ::std::format!("expected {} to be non-null", stringify!($ptr));
                $crate::report::emit(
                    file!(),
                    line!(),
                    $crate::__function_name!(),
                    "assertion failed",
                    &__msg,
                );
                $crate::report::trap();
            }
        }
    }};
}
