//! Dense 3D cell storage for a board.
//!
//! The grid is a denormalised view of the vessel catalog kept for constant
//! time lookups by coordinate and for rendering. The owning
//! [`Board`](crate::Board) keeps both in step.

use std::collections::BTreeMap;

use crate::common::{Coord, Dimensions};
use crate::vessel::{VesselId, VesselInstance};

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Cell {
    #[default]
    Empty,
    /// Fired at, nothing there.
    Miss,
    /// Occupied by a vessel segment.
    Vessel { id: VesselId, hit: bool },
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn vessel(&self) -> Option<VesselId> {
        match *self {
            Cell::Vessel { id, .. } => Some(id),
            _ => None,
        }
    }

    /// `true` once a shot has landed on this cell.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Cell::Miss | Cell::Vessel { hit: true, .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-empty grid.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![Cell::Empty; dims.total_cells()],
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Cell at `coord`, or `None` when out of bounds.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.index(coord).map(move |i| &mut self.cells[i])
    }

    /// `true` only for in-bounds cells holding nothing.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).map_or(false, |cell| cell.is_empty())
    }

    /// Cells of one layer in row-major order with their coordinates.
    pub fn cells_in_layer(&self, layer: usize) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let dims = self.dims;
        let per_layer = dims.cells_per_layer();
        let start = if layer < dims.layers { layer * per_layer } else { 0 };
        let len = if layer < dims.layers { per_layer } else { 0 };
        self.cells[start..start + len]
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Coord::new(i / dims.cols, i % dims.cols, layer), cell))
    }

    /// Reset every cell on `layer` that claims a vessel whose catalog entry
    /// does not list it, so blank mask cells can never read as occupied.
    /// Returns the number of cells cleared.
    pub fn normalize_layer(
        &mut self,
        vessels: &BTreeMap<VesselId, VesselInstance>,
        layer: usize,
    ) -> usize {
        let stray: Vec<Coord> = self
            .cells_in_layer(layer)
            .filter_map(|(coord, cell)| match cell {
                Cell::Vessel { id, .. } if !vessels.get(&id).map_or(false, |v| v.contains(coord)) => {
                    Some(coord)
                }
                _ => None,
            })
            .collect();
        for &coord in &stray {
            if let Some(cell) = self.get_mut(coord) {
                *cell = Cell::Empty;
            }
        }
        stray.len()
    }

    /// Layer-major linear index.
    fn index(&self, coord: Coord) -> Option<usize> {
        if !self.dims.contains(coord) {
            return None;
        }
        Some((coord.layer * self.dims.rows + coord.row) * self.dims.cols + coord.col)
    }
}
