//! Stage evaluation shared by every explicit Runge-Kutta tableau.

use odestep_core::Derivative;

use crate::Divergence;

/// Evaluates the stage derivatives of an explicit Runge-Kutta method.
///
/// For a strictly lower-triangular `a`, each stage depends only on the ones
/// before it:
///
/// ```text
/// k_i = f(y + h * Σ_{j<i} a_ij * k_j, t + c_i * h)
/// ```
///
/// Entries of `a` on or above the diagonal are ignored.
pub(crate) fn evaluate<F: Derivative, const S: usize>(
    a: &[[f64; S]; S],
    c: &[f64; S],
    f: &F,
    y: f64,
    t: f64,
    h: f64,
) -> Result<[f64; S], Divergence> {
    let mut k = [0.0; S];

    for (i, (row, c_i)) in a.iter().zip(c).enumerate() {
        let y_i = y + h * weighted_sum(&row[..i], &k[..i]);
        let t_i = t + c_i * h;
        let value = f.eval(y_i, t_i);

        if !value.is_finite() {
            return Err(Divergence::Stage {
                stage: i + 1,
                y: y_i,
                t: t_i,
                value,
            });
        }

        k[i] = value;
    }

    Ok(k)
}

/// Returns `Σ w_i * k_i`.
pub(crate) fn weighted_sum(weights: &[f64], k: &[f64]) -> f64 {
    weights.iter().zip(k).map(|(w, k)| w * k).sum()
}

/// Checks the consistency conditions of an explicit tableau.
///
/// `a` must be strictly lower triangular, each row of `a` must sum to the
/// matching `c`, and each weight vector must sum to one.
pub(crate) fn is_consistent<const S: usize>(
    a: &[[f64; S]; S],
    c: &[f64; S],
    weights: &[&[f64; S]],
    tol: f64,
) -> bool {
    let lower_triangular = a
        .iter()
        .enumerate()
        .all(|(i, row)| row[i..].iter().all(|&a_ij| a_ij == 0.0));

    let rows_match_nodes = a
        .iter()
        .zip(c)
        .all(|(row, c_i)| (row.iter().sum::<f64>() - c_i).abs() <= tol);

    let weights_sum_to_one = weights
        .iter()
        .all(|b| (b.iter().sum::<f64>() - 1.0).abs() <= tol);

    lower_triangular && rows_match_nodes && weights_sum_to_one
}
