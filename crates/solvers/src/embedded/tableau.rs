use crate::stages;

/// Coefficients of an embedded Runge-Kutta pair with `S` stages.
///
/// Both formulas share the stage coupling `a` and nodes `c`. The
/// higher-order weights `b_high` advance the solution, and the difference
/// from the lower-order weights `b_low` estimates the local error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tableau<const S: usize> {
    pub a: [[f64; S]; S],
    pub c: [f64; S],
    pub b_high: [f64; S],
    pub b_low: [f64; S],

    /// Order of the formula that advances the solution.
    pub order: u8,

    /// Order of the formula used only for the error estimate.
    pub embedded_order: u8,
}

impl Tableau<6> {
    /// The Runge-Kutta-Fehlberg 4(5) pair.
    #[must_use]
    pub const fn fehlberg45() -> Self {
        Self {
            a: [
                [0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                [1.0 / 4.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                [3.0 / 32.0, 9.0 / 32.0, 0.0, 0.0, 0.0, 0.0],
                [
                    1932.0 / 2197.0,
                    -7200.0 / 2197.0,
                    7296.0 / 2197.0,
                    0.0,
                    0.0,
                    0.0,
                ],
                [
                    439.0 / 216.0,
                    -8.0,
                    3680.0 / 513.0,
                    -845.0 / 4104.0,
                    0.0,
                    0.0,
                ],
                [
                    -8.0 / 27.0,
                    2.0,
                    -3544.0 / 2565.0,
                    1859.0 / 4104.0,
                    -11.0 / 40.0,
                    0.0,
                ],
            ],
            c: [0.0, 1.0 / 4.0, 3.0 / 8.0, 12.0 / 13.0, 1.0, 1.0 / 2.0],
            b_high: [
                16.0 / 135.0,
                0.0,
                6656.0 / 12825.0,
                28561.0 / 56430.0,
                -9.0 / 50.0,
                2.0 / 55.0,
            ],
            b_low: [
                25.0 / 216.0,
                0.0,
                1408.0 / 2565.0,
                2197.0 / 4104.0,
                -1.0 / 5.0,
                0.0,
            ],
            order: 5,
            embedded_order: 4,
        }
    }
}

impl Tableau<7> {
    /// The Dormand-Prince 5(4) pair.
    #[must_use]
    pub const fn dormand_prince54() -> Self {
        Self {
            a: [
                [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                [1.0 / 5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                [3.0 / 40.0, 9.0 / 40.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                [44.0 / 45.0, -56.0 / 15.0, 32.0 / 9.0, 0.0, 0.0, 0.0, 0.0],
                [
                    19372.0 / 6561.0,
                    -25360.0 / 2187.0,
                    64448.0 / 6561.0,
                    -212.0 / 729.0,
                    0.0,
                    0.0,
                    0.0,
                ],
                [
                    9017.0 / 3168.0,
                    -355.0 / 33.0,
                    46732.0 / 5247.0,
                    49.0 / 176.0,
                    -5103.0 / 18656.0,
                    0.0,
                    0.0,
                ],
                [
                    35.0 / 384.0,
                    0.0,
                    500.0 / 1113.0,
                    125.0 / 192.0,
                    -2187.0 / 6784.0,
                    11.0 / 84.0,
                    0.0,
                ],
            ],
            c: [0.0, 1.0 / 5.0, 3.0 / 10.0, 4.0 / 5.0, 8.0 / 9.0, 1.0, 1.0],
            b_high: [
                35.0 / 384.0,
                0.0,
                500.0 / 1113.0,
                125.0 / 192.0,
                -2187.0 / 6784.0,
                11.0 / 84.0,
                0.0,
            ],
            b_low: [
                5179.0 / 57600.0,
                0.0,
                7571.0 / 16695.0,
                393.0 / 640.0,
                -92097.0 / 339200.0,
                187.0 / 2100.0,
                1.0 / 40.0,
            ],
            order: 5,
            embedded_order: 4,
        }
    }
}

impl<const S: usize> Tableau<S> {
    /// Returns `true` if the pair satisfies the explicit consistency
    /// conditions to within `tol`.
    ///
    /// `a` must be strictly lower triangular, each row of `a` must sum to the
    /// matching `c`, and both weight vectors must sum to one. A pair that
    /// fails these checks will not reach its stated order.
    #[must_use]
    pub fn is_consistent(&self, tol: f64) -> bool {
        stages::is_consistent(&self.a, &self.c, &[&self.b_high, &self.b_low], tol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fehlberg_is_consistent() {
        assert!(Tableau::fehlberg45().is_consistent(1e-12));
    }

    #[test]
    fn dormand_prince_is_consistent() {
        assert!(Tableau::dormand_prince54().is_consistent(1e-12));
    }

    #[test]
    fn dormand_prince_last_row_is_high_weights() {
        let tableau = Tableau::dormand_prince54();
        assert_eq!(tableau.a[6][..6], tableau.b_high[..6]);
    }

    #[test]
    fn detects_misplaced_node() {
        let mut tableau = Tableau::fehlberg45();
        tableau.c[4] = 5.0;
        assert!(!tableau.is_consistent(1e-12));
    }
}
