use super::*;

#[test]
fn to_px_floors_and_saturates() {
    assert_eq!(to_px(2.9), 2);
    assert_eq!(to_px(-0.5), -1);
    assert_eq!(to_px(f64::INFINITY), i64::MAX);
    assert_eq!(to_px(f64::NEG_INFINITY), i64::MIN);
    assert_eq!(to_px(f64::NAN), i64::MIN);
}

#[test]
fn time_to_x_maps_range_onto_width() {
    let r = TimeRange::new(100, 200).unwrap();
    assert_eq!(time_to_x(r, 50, 100.0), 0);
    assert_eq!(time_to_x(r, 50, 150.0), 25);
    assert_eq!(time_to_x(r, 50, 199.0), 49);
    assert_eq!(time_to_x(r, 50, 200.0), 50);
    assert_eq!(time_to_x(r, 50, 99.0), -1);
}

#[test]
fn log2_px_per_doubling() {
    assert_eq!(log2_px(16.0, 1.0), 0);
    assert_eq!(log2_px(16.0, 2.0), 16);
    assert_eq!(log2_px(16.0, 8.0), 48);
    assert_eq!(log2_px(16.0, 0.0), i64::MIN);
    assert_eq!(log2_px(16.0, -4.0), i64::MIN);
}

#[test]
fn doubling_step_is_at_least_one_pixel() {
    assert_eq!(doubling_step(16.0), 16);
    assert_eq!(doubling_step(0.25), 1);
}

#[test]
fn fnv_hash_is_stable_across_chunking() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"perspective");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"persp");
    b.write_bytes(b"ective");
    assert_eq!(a.finish(), b.finish());
    assert_ne!(a.finish(), Fnv1a64::OFFSET_BASIS);
}
