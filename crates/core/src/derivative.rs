/// The right-hand side of a scalar ODE `dy/dt = f(y, t)`.
///
/// Steppers are generic over this trait and call it once per stage. It should
/// be pure: the error control of adaptive steppers assumes repeated calls with
/// the same arguments return the same value.
///
/// Closures and function items with the signature `Fn(f64, f64) -> f64`
/// implement this trait automatically.
pub trait Derivative {
    /// Returns `dy/dt` at the given `y` and `t`.
    fn eval(&self, y: f64, t: f64) -> f64;
}

impl<F> Derivative for F
where
    F: Fn(f64, f64) -> f64,
{
    fn eval(&self, y: f64, t: f64) -> f64 {
        self(y, t)
    }
}
