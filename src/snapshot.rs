//! Read-only board views for renderers.
//!
//! A snapshot owns a copy of everything it shows, so handing one to a display
//! layer can never change the game.

use crate::board::Board;
use crate::common::Dimensions;
use crate::config::layer_name;
use crate::grid::Cell;
use crate::vessel::{VesselId, VesselKind};

/// What a renderer may draw in one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CellView {
    Empty,
    Miss,
    /// Not yet fired at; contents withheld from the viewer.
    Unknown,
    Vessel {
        id: VesselId,
        kind: VesselKind,
        hit: bool,
        destroyed: bool,
    },
}

impl CellView {
    /// Numeric value for plotting: `None` for cells without a visible vessel,
    /// the vessel id for intact segments and id + 0.5 for hit segments.
    pub fn value(&self) -> Option<f64> {
        match *self {
            CellView::Vessel { id, hit, .. } => {
                let base = f64::from(id.0);
                Some(if hit { base + 0.5 } else { base })
            }
            CellView::Empty | CellView::Miss | CellView::Unknown => None,
        }
    }
}

/// One 2D slice of a snapshot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LayerView {
    pub index: usize,
    pub name: String,
    /// `cells[row][col]`.
    pub cells: Vec<Vec<CellView>>,
}

/// All layers of a board at one point in time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoardSnapshot {
    pub dimensions: Dimensions,
    pub layers: Vec<LayerView>,
}

impl BoardSnapshot {
    /// Every vessel visible.
    pub fn revealed(board: &Board) -> Self {
        Self::capture(board, false)
    }

    /// Intact vessel segments and untouched water both read as
    /// [`CellView::Unknown`].
    pub fn concealed(board: &Board) -> Self {
        Self::capture(board, true)
    }

    /// View of the cell at (`row`, `col`) on `layer`.
    pub fn cell(&self, row: usize, col: usize, layer: usize) -> Option<CellView> {
        self.layers
            .get(layer)
            .and_then(|l| l.cells.get(row))
            .and_then(|r| r.get(col))
            .copied()
    }

    /// Per-layer numeric arrays, `values()[layer][row][col]`, as consumed by a
    /// plotting front end.
    pub fn values(&self) -> Vec<Vec<Vec<Option<f64>>>> {
        self.layers
            .iter()
            .map(|layer| {
                layer
                    .cells
                    .iter()
                    .map(|row| row.iter().map(CellView::value).collect())
                    .collect()
            })
            .collect()
    }

    fn capture(board: &Board, conceal: bool) -> Self {
        let dimensions = board.dimensions();
        let layers = (0..dimensions.layers)
            .map(|index| {
                let mut cells = vec![Vec::with_capacity(dimensions.cols); dimensions.rows];
                for (coord, cell) in board.grid().cells_in_layer(index) {
                    cells[coord.row].push(view_of(board, cell, conceal));
                }
                LayerView {
                    index,
                    name: layer_name(index),
                    cells,
                }
            })
            .collect();
        Self { dimensions, layers }
    }
}

fn view_of(board: &Board, cell: Cell, conceal: bool) -> CellView {
    match cell {
        Cell::Empty if conceal => CellView::Unknown,
        Cell::Empty => CellView::Empty,
        Cell::Miss => CellView::Miss,
        Cell::Vessel { hit: false, .. } if conceal => CellView::Unknown,
        Cell::Vessel { id, hit } => match board.vessel(id) {
            Some(vessel) => CellView::Vessel {
                id,
                kind: vessel.kind(),
                hit,
                destroyed: vessel.is_destroyed(),
            },
            None => CellView::Empty,
        },
    }
}
