//! Scalar functions accepted by the `assign_*` family.
//!
//! Any closure with the right shape works. The named functions exist so
//! that storage-aware implementations can recognise pure accumulation
//! (`f(0, x) == x`) and skip the slots the other operand leaves at zero.

/// `f(x)` applied slot by slot.
pub trait UnaryFunction {
    fn apply(&self, x: f64) -> f64;
}

/// `f(a, b)` where `a` is the receiver's slot.
pub trait BinaryFunction {
    fn apply(&self, a: f64, b: f64) -> f64;

    /// True when `apply(a, 0.0) == a` for every `a`, i.e. zeros in the
    /// second operand leave the receiver untouched.
    fn is_accumulating(&self) -> bool {
        false
    }
}

impl<F> UnaryFunction for F
where
    F: Fn(f64) -> f64,
{
    fn apply(&self, x: f64) -> f64 {
        self(x)
    }
}

impl<F> BinaryFunction for F
where
    F: Fn(f64, f64) -> f64,
{
    fn apply(&self, a: f64, b: f64) -> f64 {
        self(a, b)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Plus;

impl BinaryFunction for Plus {
    fn apply(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    fn is_accumulating(&self) -> bool {
        true
    }
}

/// `a + b * scale`
#[derive(Debug, Clone, Copy)]
pub struct PlusWithScale(pub f64);

impl BinaryFunction for PlusWithScale {
    fn apply(&self, a: f64, b: f64) -> f64 {
        a + b * self.0
    }

    fn is_accumulating(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Minus;

impl BinaryFunction for Minus {
    fn apply(&self, a: f64, b: f64) -> f64 {
        a - b
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Mult;

impl BinaryFunction for Mult {
    fn apply(&self, a: f64, b: f64) -> f64 {
        a * b
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Div;

impl BinaryFunction for Div {
    fn apply(&self, a: f64, b: f64) -> f64 {
        a / b
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

impl BinaryFunction for Max {
    fn apply(&self, a: f64, b: f64) -> f64 {
        a.max(b)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Min;

impl BinaryFunction for Min {
    fn apply(&self, a: f64, b: f64) -> f64 {
        a.min(b)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Abs;

impl UnaryFunction for Abs {
    fn apply(&self, x: f64) -> f64 {
        x.abs()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Negate;

impl UnaryFunction for Negate {
    fn apply(&self, x: f64) -> f64 {
        -x
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sqrt;

impl UnaryFunction for Sqrt {
    fn apply(&self, x: f64) -> f64 {
        x.sqrt()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Square;

impl UnaryFunction for Square {
    fn apply(&self, x: f64) -> f64 {
        x * x
    }
}
