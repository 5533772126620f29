use crate::CoreError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Check that every value is finite and each one is strictly greater than the last.
///
/// On failure the error carries the index of the first offending value.
pub fn ensure_strictly_increasing(values: &[Real], what: &'static str) -> Result<(), CoreError> {
    for (i, &v) in values.iter().enumerate() {
        ensure_finite(v, what)?;
        if i > 0 && v <= values[i - 1] {
            return Err(CoreError::NotIncreasing { what, index: i });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn strictly_increasing_accepts_monotone() {
        assert!(ensure_strictly_increasing(&[0.0, 0.5, 2.0], "t").is_ok());
        assert!(ensure_strictly_increasing(&[], "t").is_ok());
    }

    #[test]
    fn strictly_increasing_reports_first_bad_index() {
        let err = ensure_strictly_increasing(&[0.0, 1.0, 1.0, 0.5], "t").unwrap_err();
        match err {
            CoreError::NotIncreasing { index, .. } => assert_eq!(index, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn strictly_increasing_rejects_infinity() {
        let err = ensure_strictly_increasing(&[0.0, Real::INFINITY], "t").unwrap_err();
        assert!(matches!(err, CoreError::NonFinite { .. }));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn sorted_distinct_values_are_increasing(mut vals in prop::collection::vec(-1e6_f64..1e6_f64, 0..32)) {
            vals.sort_by(|a, b| a.total_cmp(b));
            vals.dedup();
            prop_assert!(ensure_strictly_increasing(&vals, "vals").is_ok());
        }

        #[test]
        fn nearly_equal_is_symmetric(a in -1e9_f64..1e9_f64, b in -1e9_f64..1e9_f64) {
            let tol = Tolerances::default();
            prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }
    }
}
