//! Comparison operators with ULP-tolerant floating-point equality.
//!
//! Equality and inequality on floating-point operands are approximate:
//! two values compare equal when they are at most [`MAX_ULPS`] units in
//! the last place apart. Relational operators stay exact. Mixed-precision
//! pairs widen the `f32` side to `f64` before comparing, so `(f32, f64)`
//! and `(f64, f32)` agree with the fully widened comparison.
//!
//! Operand dispatch happens at the macro expansion site through the
//! [`Pair`] probe: the four concrete float-pair impls of
//! [`FloatOperands`] are preferred by method resolution, and every other
//! operand pair falls back to the generic [`EqOperands`] /
//! [`OrdOperands`] impls on `&Pair`.

use std::fmt;

/// Fixed equality tolerance, in units in the last place.
///
/// Embedded in the operators; not configurable per call.
pub const MAX_ULPS: u64 = 4;

/// The six comparison operators recognised by the expectation macros.
///
/// Operator identity is fixed at definition time; the only state is the
/// display symbol used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    /// Approximate equality (`==`, ULP-tolerant on floats).
    Eq,
    /// Approximate inequality (`!=`, ULP-tolerant on floats).
    Ne,
    /// Exact less-than (`<`).
    Lt,
    /// Exact less-or-equal (`<=`).
    Le,
    /// Exact greater-than (`>`).
    Gt,
    /// Exact greater-or-equal (`>=`).
    Ge,
}

impl CmpOp {
    /// Display label used in diagnostic messages.
    pub const fn symbol(self) -> &'static str {
        match self {
            CmpOp::Eq => "==",
            CmpOp::Ne => "!=",
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
        }
    }
}

/// ULP distance between two `f32` values.
///
/// Returns `0` for numerically equal values (including `+0.0`/`-0.0`),
/// and `u64::MAX` for incomparable pairs: any NaN or infinity, or
/// operands of opposite sign.
pub fn ulps_between_f32(a: f32, b: f32) -> u64 {
    if a == b {
        return 0;
    }
    if !a.is_finite() || !b.is_finite() {
        return u64::MAX;
    }
    if a.is_sign_negative() != b.is_sign_negative() {
        return u64::MAX;
    }
    let ia = a.to_bits() as i64;
    let ib = b.to_bits() as i64;
    ia.abs_diff(ib)
}

/// ULP distance between two `f64` values.
///
/// Same conventions as [`ulps_between_f32`].
pub fn ulps_between_f64(a: f64, b: f64) -> u64 {
    if a == b {
        return 0;
    }
    if !a.is_finite() || !b.is_finite() {
        return u64::MAX;
    }
    if a.is_sign_negative() != b.is_sign_negative() {
        return u64::MAX;
    }
    let ia = a.to_bits() as i64;
    let ib = b.to_bits() as i64;
    ia.abs_diff(ib)
}

/// Approximate `f32` equality within [`MAX_ULPS`].
pub fn almost_eq_f32(a: f32, b: f32) -> bool {
    ulps_between_f32(a, b) <= MAX_ULPS
}

/// Approximate `f64` equality within [`MAX_ULPS`].
pub fn almost_eq_f64(a: f64, b: f64) -> bool {
    ulps_between_f64(a, b) <= MAX_ULPS
}

/// Operand probe used by the expectation macros.
///
/// Holds borrows of both operands so method resolution can pick the
/// float-pair impls before the generic fallback on `&Pair`.
pub struct Pair<'a, L: ?Sized, R: ?Sized>(
    /// Left operand.
    pub &'a L,
    /// Right operand.
    pub &'a R,
);

/// Tolerant comparison over concrete floating-point operand pairs.
pub trait FloatOperands {
    /// Evaluates the operator; `Eq`/`Ne` are ULP-tolerant, the rest exact.
    fn compare(&self, op: CmpOp) -> bool;

    /// Renders the failure payload, including the ULP distance.
    fn describe(&self, left_expr: &str, right_expr: &str, op: CmpOp) -> String;
}

/// Exact equality comparison for every non-float operand pair.
pub trait EqOperands {
    /// Evaluates `Eq` or `Ne` through `PartialEq`.
    fn compare(&self, op: CmpOp) -> bool;

    /// Renders the failure payload with `Debug`-formatted operands.
    fn describe(&self, left_expr: &str, right_expr: &str, op: CmpOp) -> String;
}

/// Exact relational comparison for every non-float operand pair.
pub trait OrdOperands {
    /// Evaluates `Lt`/`Le`/`Gt`/`Ge` through `PartialOrd`.
    fn compare(&self, op: CmpOp) -> bool;

    /// Renders the failure payload with `Debug`-formatted operands.
    fn describe(&self, left_expr: &str, right_expr: &str, op: CmpOp) -> String;
}

fn resolve_float(a: f64, b: f64, equal: bool, op: CmpOp) -> bool {
    match op {
        CmpOp::Eq => equal,
        CmpOp::Ne => !equal,
        CmpOp::Lt => a < b,
        CmpOp::Le => a <= b,
        CmpOp::Gt => a > b,
        CmpOp::Ge => a >= b,
    }
}

fn exact_message(
    left_expr: &str,
    right_expr: &str,
    op: CmpOp,
    left_val: &str,
    right_val: &str,
) -> String {
    format!(
        "expected {left_expr} {op} {right_expr}, but got:\n\
         {left_expr}:\n{left_val}\n{right_expr}:\n{right_val}\n",
        op = op.symbol(),
    )
}

fn float_message(
    left_expr: &str,
    right_expr: &str,
    op: CmpOp,
    left_val: &str,
    right_val: &str,
    ulps: u64,
) -> String {
    let mut msg = exact_message(left_expr, right_expr, op, left_val, right_val);
    msg.push_str(&format!("(The difference is {ulps} ULPs)\n"));
    msg
}

impl FloatOperands for Pair<'_, f32, f32> {
    fn compare(&self, op: CmpOp) -> bool {
        let (a, b) = (*self.0, *self.1);
        resolve_float(f64::from(a), f64::from(b), almost_eq_f32(a, b), op)
    }

    fn describe(&self, left_expr: &str, right_expr: &str, op: CmpOp) -> String {
        float_message(
            left_expr,
            right_expr,
            op,
            &format!("{:.10}", self.0),
            &format!("{:.10}", self.1),
            ulps_between_f32(*self.0, *self.1),
        )
    }
}

impl FloatOperands for Pair<'_, f64, f64> {
    fn compare(&self, op: CmpOp) -> bool {
        let (a, b) = (*self.0, *self.1);
        resolve_float(a, b, almost_eq_f64(a, b), op)
    }

    fn describe(&self, left_expr: &str, right_expr: &str, op: CmpOp) -> String {
        float_message(
            left_expr,
            right_expr,
            op,
            &format!("{:.20}", self.0),
            &format!("{:.20}", self.1),
            ulps_between_f64(*self.0, *self.1),
        )
    }
}

impl FloatOperands for Pair<'_, f32, f64> {
    fn compare(&self, op: CmpOp) -> bool {
        let (a, b) = (f64::from(*self.0), *self.1);
        resolve_float(a, b, almost_eq_f64(a, b), op)
    }

    fn describe(&self, left_expr: &str, right_expr: &str, op: CmpOp) -> String {
        let (a, b) = (f64::from(*self.0), *self.1);
        float_message(
            left_expr,
            right_expr,
            op,
            &format!("{a:.20}"),
            &format!("{b:.20}"),
            ulps_between_f64(a, b),
        )
    }
}

impl FloatOperands for Pair<'_, f64, f32> {
    fn compare(&self, op: CmpOp) -> bool {
        let (a, b) = (*self.0, f64::from(*self.1));
        resolve_float(a, b, almost_eq_f64(a, b), op)
    }

    fn describe(&self, left_expr: &str, right_expr: &str, op: CmpOp) -> String {
        let (a, b) = (*self.0, f64::from(*self.1));
        float_message(
            left_expr,
            right_expr,
            op,
            &format!("{a:.20}"),
            &format!("{b:.20}"),
            ulps_between_f64(a, b),
        )
    }
}

impl<'a, 'p, L, R> EqOperands for &'p Pair<'a, L, R>
where
    L: PartialEq<R> + fmt::Debug + ?Sized,
    R: fmt::Debug + ?Sized,
{
    fn compare(&self, op: CmpOp) -> bool {
        match op {
            CmpOp::Eq => *self.0 == *self.1,
            CmpOp::Ne => *self.0 != *self.1,
            _ => unreachable!("equality dispatch invoked with a relational operator"),
        }
    }

    fn describe(&self, left_expr: &str, right_expr: &str, op: CmpOp) -> String {
        exact_message(
            left_expr,
            right_expr,
            op,
            &format!("{:?}", self.0),
            &format!("{:?}", self.1),
        )
    }
}

impl<'a, 'p, L, R> OrdOperands for &'p Pair<'a, L, R>
where
    L: PartialOrd<R> + fmt::Debug + ?Sized,
    R: fmt::Debug + ?Sized,
{
    fn compare(&self, op: CmpOp) -> bool {
        match op {
            CmpOp::Lt => *self.0 < *self.1,
            CmpOp::Le => *self.0 <= *self.1,
            CmpOp::Gt => *self.0 > *self.1,
            CmpOp::Ge => *self.0 >= *self.1,
            _ => unreachable!("relational dispatch invoked with an equality operator"),
        }
    }

    fn describe(&self, left_expr: &str, right_expr: &str, op: CmpOp) -> String {
        exact_message(
            left_expr,
            right_expr,
            op,
            &format!("{:?}", self.0),
            &format!("{:?}", self.1),
        )
    }
}
