//! Integration tests for the functor formula table.
//!
//! Checks every functor for `f32` and `f64` against the closed-form
//! formulas, the IEEE 754 degeneracy policy, derivative consistency with
//! central differences, and concurrent use of shared instances.

use functor_core::ops::{
    AddOp, BinaryOpKind, DivOp, NegateOp, ProdOp, ScalarAddOp, ScalarDivIntoOp, ScalarDivOp,
    ScalarOpKind, ScalarProdOp, ScalarSubFromOp, ScalarSubOp, SubOp,
};
use functor_core::traits::{BinaryFunctor, Scalar, UnaryFunctor};
use functor_core::verify::{check_binary, check_unary, CheckConfig};
use num_traits::Float;
use rayon::prelude::*;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// Operand pairs with `b != 0`.
const PAIRS: [(f64, f64); 6] = [
    (2.0, 3.0),
    (-1.5, 0.25),
    (0.0, -4.0),
    (1e10, 1e-3),
    (-7.25, -7.25),
    (0.1, 0.2),
];

/// Formula table shared by the `f32` and `f64` runs.
fn assert_binary_formulas<S>(a: S, b: S)
where
    S: Scalar + Float + std::fmt::Debug,
{
    let one = S::one();

    assert_eq!(AddOp.eval(a, b), a + b);
    assert_eq!(AddOp.d_da(a, b), one);
    assert_eq!(AddOp.d_db(a, b), one);

    assert_eq!(SubOp.eval(a, b), a - b);
    assert_eq!(SubOp.d_da(a, b), one);
    assert_eq!(SubOp.d_db(a, b), -one);

    assert_eq!(ProdOp.eval(a, b), a * b);
    assert_eq!(ProdOp.d_da(a, b), b);
    assert_eq!(ProdOp.d_db(a, b), a);

    assert_eq!(DivOp.eval(a, b), a / b);
    assert_eq!(DivOp.d_da(a, b), one / b);
    assert_eq!(DivOp.d_db(a, b), -a / (b * b));

    assert_eq!(NegateOp.eval(a), -a);
    assert_eq!(NegateOp.d_da(a), -one);
}

#[test]
fn test_binary_formulas_f64() {
    for (a, b) in PAIRS {
        assert_binary_formulas(a, b);
    }
}

#[test]
fn test_binary_formulas_f32() {
    for (a, b) in PAIRS {
        assert_binary_formulas(a as f32, b as f32);
    }
}

#[test]
fn test_scalar_add_with_three() {
    let op = ScalarAddOp::<f64>::new(3.0);
    assert_eq!(op.eval(2.0), 5.0);
    assert_eq!(op.d_da(2.0), 1.0);

    let op = ScalarAddOp::<f32>::new(3.0_f32);
    assert_eq!(op.eval(2.0), 5.0);
    assert_eq!(op.d_da(2.0), 1.0);
}

#[test]
fn test_scalar_reverse_divide_with_six() {
    let op = ScalarDivIntoOp::<f64>::new(6.0);
    assert_eq!(op.eval(2.0), 3.0);
    assert_eq!(op.d_da(2.0), -6.0 / 4.0);
    assert_eq!(op.d_da(2.0), -1.5);

    let op = ScalarDivIntoOp::<f32>::try_new(6.0_f64).unwrap();
    assert_eq!(op.eval(2.0), 3.0);
    assert_eq!(op.d_da(2.0), -1.5);
}

#[test]
fn test_scalar_formula_table() {
    let k = 2.5_f64;
    for a in [-3.0_f64, 0.5, 4.0] {
        assert_eq!(ScalarAddOp::<f64>::new(k).eval(a), a + k);
        assert_eq!(ScalarAddOp::<f64>::new(k).d_da(a), 1.0);
        assert_eq!(ScalarProdOp::<f64>::new(k).eval(a), a * k);
        assert_eq!(ScalarProdOp::<f64>::new(k).d_da(a), k);
        assert_eq!(ScalarSubFromOp::<f64>::new(k).eval(a), k - a);
        assert_eq!(ScalarSubFromOp::<f64>::new(k).d_da(a), -1.0);
        assert_eq!(ScalarSubOp::<f64>::new(k).eval(a), a - k);
        assert_eq!(ScalarSubOp::<f64>::new(k).d_da(a), 1.0);
        assert_eq!(ScalarDivIntoOp::<f64>::new(k).eval(a), k / a);
        assert_eq!(ScalarDivIntoOp::<f64>::new(k).d_da(a), -k / (a * a));
        assert_eq!(ScalarDivOp::<f64>::new(k).eval(a), a / k);
        assert_eq!(ScalarDivOp::<f64>::new(k).d_da(a), 1.0 / k);
    }
}

#[test]
fn test_division_by_zero_propagates() {
    assert_eq!(DivOp.eval(1.0_f64, 0.0), f64::INFINITY);
    assert_eq!(DivOp.eval(-1.0_f64, 0.0), f64::NEG_INFINITY);
    assert!(DivOp.eval(0.0_f64, 0.0).is_nan());

    assert_eq!(DivOp.eval(1.0_f32, 0.0), f32::INFINITY);
    assert_eq!(DivOp.eval(-1.0_f32, 0.0), f32::NEG_INFINITY);
    assert!(DivOp.eval(0.0_f32, 0.0).is_nan());

    assert_eq!(BinaryOpKind::Div.eval(1.0_f64, 0.0), f64::INFINITY);
    assert!(ScalarOpKind::DivInto.eval(0.0_f64, 0.0).is_nan());
    assert!(ScalarDivIntoOp::<f64>::new(0.0).d_da(0.0).is_nan());
}

#[test]
fn test_derivative_consistency_f64() {
    let config = CheckConfig::<f64>::default();
    for (a, b) in [(2.0, 3.0), (-1.5, 0.75), (5.0, -2.0)] {
        for kind in BinaryOpKind::ALL {
            let report = check_binary(&kind, a, b, &config).unwrap();
            assert_eq!(report.operation, kind.name());
        }
        check_unary(&NegateOp, a, &config).unwrap();
        for k in [0.5, -3.0] {
            check_unary(&ScalarDivIntoOp::<f64>::new(k), b, &config).unwrap();
            check_unary(&ScalarDivOp::<f64>::new(k), b, &config).unwrap();
        }
    }
}

#[test]
fn test_derivative_consistency_f32() {
    let config = CheckConfig::<f32>::default();
    for (a, b) in [(2.0_f32, 3.0_f32), (-1.5, 0.75)] {
        for kind in BinaryOpKind::ALL {
            check_binary(&kind, a, b, &config).unwrap();
        }
        check_unary(&ScalarProdOp::<f32>::new(1.5_f32), a, &config).unwrap();
    }
}

#[test]
fn test_concurrent_use_of_shared_instances() {
    let scale = ScalarProdOp::<f64>::new(0.5);
    let reciprocal = ScalarDivIntoOp::<f64>::new(1.0);
    let inputs: Vec<f64> = (1..=10_000).map(|i| i as f64).collect();

    let results: Vec<(f64, f64, f64)> = inputs
        .par_iter()
        .map(|&a| {
            (
                scale.eval(a),
                reciprocal.d_da(a),
                DivOp.d_db(a, a),
            )
        })
        .collect();

    for (&a, &(scaled, d_recip, d_div)) in inputs.iter().zip(&results) {
        assert_eq!(scaled, a * 0.5);
        assert_eq!(d_recip, -1.0 / (a * a));
        assert_eq!(d_div, -a / (a * a));
    }
    assert_eq!(scale.constant(), 0.5);
}

#[test]
fn test_functors_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AddOp>();
    assert_send_sync::<NegateOp>();
    assert_send_sync::<BinaryOpKind>();
    assert_send_sync::<ScalarDivIntoOp<f64>>();
    assert_send_sync::<ScalarAddOp<f32>>();
}

/// In-memory log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_verification_logs_mismatch() {
    struct WrongProd;
    impl BinaryFunctor<f64> for WrongProd {
        fn eval(&self, a: f64, b: f64) -> f64 {
            a * b
        }
        fn d_da(&self, a: f64, _b: f64) -> f64 {
            a
        }
        fn d_db(&self, _a: f64, b: f64) -> f64 {
            b
        }
        fn name(&self) -> &'static str {
            "wrong_prod"
        }
    }

    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();

    let config = CheckConfig::<f64>::default();
    tracing::subscriber::with_default(subscriber, || {
        assert!(check_binary(&WrongProd, 2.0, 5.0, &config).is_err());
    });

    let output = logs.contents();
    assert!(output.contains("WARN"), "missing warning: {output}");
    assert!(output.contains("derivative mismatch"), "missing event: {output}");
    assert!(output.contains("wrong_prod"), "missing operation: {output}");
}

#[test]
fn test_verification_logs_passing_check() {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();

    let config = CheckConfig::<f64>::default();
    tracing::subscriber::with_default(subscriber, || {
        assert!(check_binary(&ProdOp, 2.0, 5.0, &config).is_ok());
    });

    let output = logs.contents();
    assert!(output.contains("derivative check passed"), "missing event: {output}");
    assert!(!output.contains("derivative mismatch"), "unexpected warning: {output}");
}
