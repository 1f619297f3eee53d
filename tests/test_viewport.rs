use plane_collector::entities::Rect;
use plane_collector::viewport::*;

fn vp() -> Viewport {
    // 10 field units per column, 20 per row
    Viewport::new(80, 30, 800.0, 600.0)
}

#[test]
fn to_cell_scales_and_clamps() {
    let v = vp();
    assert_eq!(v.to_cell(0.0, 0.0), (0, 0));
    assert_eq!(v.to_cell(365.0, 530.0), (36, 26));
    assert_eq!(v.to_cell(800.0, 600.0), (79, 29));
    assert_eq!(v.to_cell(-50.0, -50.0), (0, 0));
}

#[test]
fn to_field_lands_inside_the_cell() {
    let v = vp();
    let (x, y) = v.to_field(36, 26);
    assert!((x - 365.0).abs() < 0.01);
    assert!((y - 530.0).abs() < 0.01);
    assert_eq!(v.to_cell(x, y), (36, 26));
}

#[test]
fn to_cells_snaps_rects() {
    let v = vp();
    let cells = v.to_cells(&Rect::new(360.0, 520.0, 80.0, 60.0));
    assert_eq!(
        cells,
        CellRect {
            col: 36,
            row: 26,
            width: 8,
            height: 3
        }
    );
}

#[test]
fn tiny_rects_stay_visible_and_on_screen() {
    let v = vp();
    let cells = v.to_cells(&Rect::new(795.0, 595.0, 2.0, 2.0));
    assert_eq!(cells.width, 1);
    assert_eq!(cells.height, 1);
    assert_eq!((cells.col, cells.row), (79, 29));
}

#[test]
fn zero_sized_terminal_is_clamped() {
    let v = Viewport::new(0, 0, 800.0, 600.0);
    assert_eq!(v.to_cell(400.0, 300.0), (0, 0));
}
