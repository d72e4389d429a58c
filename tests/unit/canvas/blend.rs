use super::*;

#[test]
fn add_sat_clamps_without_wrapping() {
    assert_eq!(add_sat(250, 10.0), 255);
    assert_eq!(add_sat(255, 255.0), 255);
    assert_eq!(add_sat(0, -5.0), 0);
    assert_eq!(add_sat(33, 63.75), 96);
}

#[test]
fn repeated_blends_stay_in_range_and_are_monotonic() {
    let mut pass = Rgba8::gray(BG);
    let mut fail = Rgba8::gray(BG);
    let mut prev = (pass, fail);
    for _ in 0..1000 {
        blend_pass(&mut pass, 255.0 / 7.0);
        blend_fail(&mut fail, 255.0 / 7.0);
        assert!(pass.r >= prev.0.r && pass.g >= prev.0.g && pass.b >= prev.0.b);
        assert!(fail.r >= prev.1.r);
        prev = (pass, fail);
    }
    assert_eq!(pass.to_array(), [255, 255, 255, 255]);
    assert_eq!(fail.to_array(), [255, BG, BG, 255]);
}

#[test]
fn pass_blend_is_blue_dominant() {
    let mut px = Rgba8::gray(BG);
    blend_pass(&mut px, 32.0);
    assert_eq!(px.to_array(), [41, 41, 65, 255]);
}

#[test]
fn fail_blend_only_touches_red() {
    let mut px = Rgba8::gray(BG);
    blend_fail(&mut px, 32.0);
    assert_eq!(px.to_array(), [65, BG, BG, 255]);
}

#[test]
fn progress_shade_spans_background_to_full() {
    assert_eq!(progress_shade(0.0), BG);
    assert_eq!(progress_shade(-3.0), BG);
    assert_eq!(progress_shade(f64::NAN), BG);
    assert_eq!(progress_shade(1.0), 255);
    assert_eq!(progress_shade(f64::INFINITY), 255);
    assert!(progress_shade(0.5) > BG && progress_shade(0.5) < 255);
}

#[test]
fn wave_colors_lean_blue_and_red() {
    let p = wave_pass_color(0.8);
    assert!(p.b > p.r && p.r == p.g);
    let f = wave_fail_color(0.8);
    assert!(f.r > f.g && f.g == f.b);
    assert_eq!(wave_pass_color(0.0), Rgba8::gray(BG));
    assert_eq!(wave_fail_color(0.0), Rgba8::gray(BG));
}

#[test]
fn error_stack_palette_brightens_with_layer() {
    assert_eq!(error_stack_color(0, 4).to_array(), [127, 11, 11, 255]);
    let top = error_stack_color(3, 4);
    assert!(top.r > 127 && top.g > 11);
    assert_eq!(error_stack_color(0, 0).to_array(), [127, 11, 11, 255]);
}
