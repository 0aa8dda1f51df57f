#[allow(unused_macros)]
macro_rules! assert_float_eq {
    (@check $a:expr, $b:expr, $delta:expr) => {{
        let (a, b, delta): (f64, f64, f64) = ($a, $b, $delta);
        assert!(
            (a - b).abs() <= delta * b.abs().max(1.0),
            "{} is not within {} of {}",
            a,
            delta,
            b
        )
    }};
    ($a:expr, $b:expr) => {
        assert_float_eq!(@check $a, $b, 1e-9f64)
    };
    ($a:expr, $b:expr, $delta:expr) => {
        assert_float_eq!(@check $a, $b, $delta)
    };
}

#[allow(unused_imports)]
pub(crate) use assert_float_eq;
