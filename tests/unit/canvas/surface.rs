use super::*;

#[test]
fn new_canvas_is_opaque_background() {
    let c = Canvas::new(4, 3);
    assert_eq!(c.width(), 4);
    assert_eq!(c.height(), 3);
    assert_eq!(c.pixels().len(), 12);
    assert!(c.pixels().iter().all(|&p| p == Rgba8::gray(BG)));
    assert!(c.pixels().iter().all(|p| p.a == 255));
}

#[test]
fn grid_lines_cover_full_column_and_row() {
    let mut c = Canvas::new(5, 4);
    c.draw_x_grid_line(2);
    c.draw_y_grid_line(1);
    for y in 0..4 {
        assert_eq!(c.pixel(2, y), Some(Rgba8::gray(GRID)));
    }
    for x in 0..5 {
        assert_eq!(c.pixel(x, 1), Some(Rgba8::gray(GRID)));
    }
    assert_eq!(c.pixel(0, 0), Some(Rgba8::gray(BG)));
    assert_eq!(c.pixel(4, 3), Some(Rgba8::gray(BG)));
}

#[test]
fn out_of_range_grid_lines_are_ignored() {
    let mut c = Canvas::new(3, 3);
    let before = c.fingerprint();
    c.draw_x_grid_line(-1);
    c.draw_x_grid_line(3);
    c.draw_y_grid_line(i64::MAX);
    assert_eq!(c.fingerprint(), before);
}

#[test]
fn out_of_bounds_writes_hit_the_sink() {
    let mut c = Canvas::new(2, 2);
    let before = c.to_rgba8_bytes();
    for (x, y) in [
        (-1, 0),
        (0, -1),
        (2, 0),
        (0, 2),
        (i64::MIN, i64::MIN),
        (i64::MAX, i64::MAX),
    ] {
        let p = c.pixel_mut(x, y);
        p.r = p.r.saturating_add(200);
        p.b = 7;
        assert_eq!(c.pixel(x, y), None);
    }
    assert_eq!(c.to_rgba8_bytes(), before);
}

#[test]
fn pixel_mut_in_bounds_writes_through() {
    let mut c = Canvas::new(3, 2);
    c.pixel_mut(2, 1).g = 99;
    assert_eq!(c.pixel(2, 1).unwrap().g, 99);
    assert_eq!(c.pixels()[5].g, 99);
}

#[test]
fn fill_spans_are_clipped() {
    let mut c = Canvas::new(4, 4);
    let red = Rgba8::opaque([255, 0, 0]);
    c.fill_column(1, -10, 2, red);
    c.fill_row(3, 2, 100, red);
    assert_eq!(c.pixel(1, 0), Some(red));
    assert_eq!(c.pixel(1, 1), Some(red));
    assert_eq!(c.pixel(1, 2), Some(Rgba8::gray(BG)));
    assert_eq!(c.pixel(2, 3), Some(red));
    assert_eq!(c.pixel(3, 3), Some(red));
    assert_eq!(c.pixel(1, 3), Some(Rgba8::gray(BG)));
}

#[test]
fn rgba_image_matches_byte_layout() {
    let mut c = Canvas::new(3, 2);
    c.set_pixel(1, 1, Rgba8::opaque([1, 2, 3]));
    let bytes = c.to_rgba8_bytes();
    let img = c.into_rgba_image();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.get_pixel(1, 1).0, [1, 2, 3, 255]);
    assert_eq!(img.into_raw(), bytes);
}

#[test]
fn fingerprint_tracks_content_and_shape() {
    let a = Canvas::new(4, 2);
    let b = Canvas::new(2, 4);
    assert_ne!(a.fingerprint(), b.fingerprint());

    let mut c = a.clone();
    assert_eq!(a.fingerprint(), c.fingerprint());
    c.pixel_mut(0, 0).b = 200;
    assert_ne!(a.fingerprint(), c.fingerprint());
}
