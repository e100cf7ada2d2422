use crate::stages;

/// Coefficients of an explicit Runge-Kutta method with `S` stages.
///
/// `a` is the strictly lower-triangular stage coupling matrix, `c` holds the
/// time fraction of each stage, and `b` holds the combination weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tableau<const S: usize> {
    pub a: [[f64; S]; S],
    pub b: [f64; S],
    pub c: [f64; S],
}

impl Tableau<1> {
    /// Forward Euler: one stage, first order.
    #[must_use]
    pub const fn euler() -> Self {
        Self {
            a: [[0.0]],
            b: [1.0],
            c: [0.0],
        }
    }
}

impl Tableau<4> {
    /// The classical fourth-order Runge-Kutta method.
    #[must_use]
    pub const fn rk4() -> Self {
        Self {
            a: [
                [0.0, 0.0, 0.0, 0.0],
                [0.5, 0.0, 0.0, 0.0],
                [0.0, 0.5, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
            ],
            b: [1.0 / 6.0, 1.0 / 3.0, 1.0 / 3.0, 1.0 / 6.0],
            c: [0.0, 0.5, 0.5, 1.0],
        }
    }
}

impl<const S: usize> Tableau<S> {
    /// Returns `true` if the tableau satisfies the explicit consistency
    /// conditions to within `tol`.
    ///
    /// `a` must be strictly lower triangular, each row of `a` must sum to the
    /// matching `c`, and `b` must sum to one.
    #[must_use]
    pub fn is_consistent(&self, tol: f64) -> bool {
        stages::is_consistent(&self.a, &self.c, &[&self.b], tol)
    }
}
