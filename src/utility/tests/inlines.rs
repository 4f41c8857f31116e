use crate::utility::{clamp, float_eq, lerp, smooth_step, to_byte};

#[test]
fn inlines_float_eq_exact() {
    let a = 0.0;
    let b = 0.0;
    assert!(float_eq(a, b, 1E-5));
}

#[test]
fn inlines_float_eq_inexact() {
    let a = 0.3;
    let errored = a + 1E-4;
    assert_ne!(a, errored);
    assert!(float_eq(a, errored, 1E-3));
    assert!(!float_eq(a, errored, 1E-5));
}

#[test]
fn inlines_clamp_in_range() {
    let a = 0.75;
    let res = clamp(a, 0.5, 2.);
    assert_eq!(res, a);
}

#[test]
fn inlines_clamp_lower() {
    let a = -0.5;
    let res = clamp(a, 0.5, 2.0);
    assert_eq!(res, 0.5);
}

#[test]
fn inlines_clamp_higher() {
    let a = 3.50;
    let res = clamp(a, 0.50, 2.0);
    assert_eq!(res, 2.0);
}

#[test]
fn inlines_clamp_integers() {
    assert_eq!(clamp(300, 0, 255), 255);
    assert_eq!(clamp(-4, 0, 255), 0);
}

#[test]
fn inlines_lerp() {
    let a = 0.250;
    let res = lerp(0.0, 1.0, a);
    assert_eq!(res, a);
    let res = lerp(-1.0, 2.0, a);
    assert_eq!(res, -0.25);
}

#[test]
fn inlines_lerp_unclamped() {
    assert_eq!(lerp(0.0, 2.0, -1.0), -2.0);
    assert_eq!(lerp(0.0, 2.0, 2.0), 4.0);
}

#[test]
fn inlines_smooth_step() {
    assert_eq!(smooth_step(-1.0), 0.0);
    assert_eq!(smooth_step(0.0), 0.0);
    assert_eq!(smooth_step(0.5), 0.5);
    assert_eq!(smooth_step(1.0), 1.0);
    assert_eq!(smooth_step(0.25), 0.15625);
}

#[test]
fn inlines_to_byte_saturates() {
    assert_eq!(to_byte(0.0), 0);
    assert_eq!(to_byte(1.0), 255);
    assert_eq!(to_byte(1.5), 255);
    assert_eq!(to_byte(-0.5), 0);
    assert_eq!(to_byte(0.2), 51);
}
