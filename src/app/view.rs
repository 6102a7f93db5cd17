use crate::{GridCoord, Reactor};

/// Renders heat values one x column per line (x outer, y inner), each value
/// followed by a single space.
pub fn render_heat_grid(reactor: &Reactor) -> String {
    let grid = reactor.grid();
    let mut out = String::new();
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            if let Ok(cell) = grid.cell(GridCoord::new(x, y)) {
                out.push_str(&format!("{} ", cell.heat));
            }
        }
        out.push('\n');
    }
    out
}
