use super::*;
use crate::canvas::surface::Rgba8;
use crate::foundation::config::{BG, GRID};

fn grid_rows(c: &Canvas) -> Vec<i64> {
    (0..i64::from(c.height()))
        .filter(|&y| c.pixel(1, y) == Some(Rgba8::gray(GRID)))
        .collect()
}

#[test]
fn divisions_start_at_zero() {
    let mut c = Canvas::new(10, 2);
    draw_x_divisions(&mut c, 5);
    for x in 0..10 {
        let expected = if x % 2 == 0 { GRID } else { BG };
        assert_eq!(c.pixel(x, 1), Some(Rgba8::gray(expected)), "x={x}");
    }
}

#[test]
fn zero_divisions_draws_nothing() {
    let mut c = Canvas::new(10, 2);
    draw_x_divisions(&mut c, 0);
    assert!(c.pixels().iter().all(|&p| p == Rgba8::gray(BG)));
}

#[test]
fn more_divisions_than_columns_fills_every_column() {
    let mut c = Canvas::new(3, 1);
    draw_x_divisions(&mut c, 100);
    assert!(c.pixels().iter().all(|&p| p == Rgba8::gray(GRID)));
}

#[test]
fn bottom_up_rows_start_below_the_canvas() {
    let mut c = Canvas::new(4, 8);
    draw_rows_from_bottom(&mut c, 3);
    assert_eq!(grid_rows(&c), vec![0, 2, 5]);
}

#[test]
fn center_out_rows_are_mirrored() {
    let mut c = Canvas::new(4, 10);
    draw_rows_from_center(&mut c, 2);
    assert_eq!(grid_rows(&c), vec![0, 2, 4, 5, 7, 9]);
}
