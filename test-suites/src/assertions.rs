pub fn assert_approx_eq_abs(a: f64, b: f64, delta: f64) {
    assert!(
        a > b - delta && a < b + delta,
        "assertion failed: `(left != right)` \
         (left: `{:?}`, right: `{:?}`, epsilon: `{:?}`)",
        a,
        b,
        delta
    );
}

/// Assert `a` is within `delta` percent of `b`
pub fn assert_approx_eq_rel(a: f64, b: f64, delta: f64) {
    let tolerance = (b * delta / 100.0).abs();
    assert!(
        a >= b - tolerance && a <= b + tolerance,
        "assertion failed: `(left != right)` \
         (left: `{:?}`, right: `{:?}`, epsilon: `{:?}`)",
        a,
        b,
        delta
    );
}
