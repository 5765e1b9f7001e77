//! Text rendering of board snapshots.

use std::fmt::Write;

use crate::snapshot::{BoardSnapshot, CellView, LayerView};

const LEGEND: &str = "legend: . water/unknown  o miss  X hit  # destroyed  ss/dd/jt/GN intact vessel";

/// Render every layer of `snapshot` under its title, followed by a legend.
/// Rows and columns are labelled with the indices typed when firing.
pub fn render_snapshot(snapshot: &BoardSnapshot) -> String {
    let mut out = String::new();
    for layer in &snapshot.layers {
        render_layer(&mut out, layer, snapshot.dimensions.cols);
        out.push('\n');
    }
    out.push_str(LEGEND);
    out.push('\n');
    out
}

fn render_layer(out: &mut String, layer: &LayerView, cols: usize) {
    let _ = writeln!(out, "Layer {}: {}", layer.index, layer.name);
    out.push_str("   ");
    for c in 0..cols {
        let _ = write!(out, " {:>2}", c);
    }
    out.push('\n');
    for (r, row) in layer.cells.iter().enumerate() {
        let _ = write!(out, "{:>2} ", r);
        for cell in row {
            let _ = write!(out, " {:>2}", symbol(cell));
        }
        out.push('\n');
    }
}

fn symbol(cell: &CellView) -> &'static str {
    match *cell {
        CellView::Empty | CellView::Unknown => ".",
        CellView::Miss => "o",
        CellView::Vessel { destroyed: true, .. } => "#",
        CellView::Vessel { hit: true, .. } => "X",
        CellView::Vessel { kind, .. } => kind.abbrev(),
    }
}
