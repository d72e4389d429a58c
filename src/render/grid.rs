use crate::canvas::surface::Canvas;

/// Vertical lines splitting the width into `divisions` equal parts, starting at column 0.
pub(crate) fn draw_x_divisions(canvas: &mut Canvas, divisions: u32) {
    if divisions == 0 {
        return;
    }
    let step = (canvas.width() / divisions).max(1) as usize;
    for x in (0..canvas.width()).step_by(step) {
        canvas.draw_x_grid_line(i64::from(x));
    }
}

/// Horizontal lines every `step` rows upward from `height`, the one-second line of a log2 run
/// axis, plus the top edge. The first line falls just below the canvas.
pub(crate) fn draw_rows_from_bottom(canvas: &mut Canvas, step: i64) {
    let mut y = i64::from(canvas.height());
    while y > 0 {
        canvas.draw_y_grid_line(y);
        y -= step;
    }
    canvas.draw_y_grid_line(0);
}

/// Horizontal lines every `step` rows outward from the center line in both directions, plus the
/// top edge. Rows `center + d` and `center - 1 - d` are drawn as a pair.
pub(crate) fn draw_rows_from_center(canvas: &mut Canvas, step: i64) {
    let h = i64::from(canvas.height());
    let center = h / 2;
    let mut d = 0;
    while center + d < h {
        canvas.draw_y_grid_line(center + d);
        canvas.draw_y_grid_line(center - 1 - d);
        d += step;
    }
    canvas.draw_y_grid_line(0);
}

#[cfg(test)]
#[path = "../../tests/unit/render/grid.rs"]
mod tests;
