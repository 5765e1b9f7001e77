//! Board construction.
//!
//! [`BoardBuilder`] places vessels at explicit anchors and checks every rule a
//! finished board must satisfy. [`BoardGenerator`] drives a builder with
//! random orientations and anchors, giving each piece a bounded number of
//! attempts before reporting [`BoardError::PlacementExhausted`].

use std::collections::BTreeMap;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, ConfigError, Coord};
use crate::config::GameConfig;
use crate::grid::{Cell, Grid};
use crate::vessel::{Mask, Orientation, VesselId, VesselInstance, VesselKind, VesselType};

/// Every top-left anchor on `layer` where `mask` fits inside the board and
/// each occupied mask cell lands on an empty grid cell. Cells the mask leaves
/// blank are not checked, so non-rectangular vessels can interlock.
pub fn candidate_anchors(mask: &Mask, grid: &Grid, layer: usize) -> Vec<(usize, usize)> {
    let dims = grid.dimensions();
    if layer >= dims.layers || mask.height() > dims.rows || mask.width() > dims.cols {
        return Vec::new();
    }
    let mut anchors = Vec::new();
    for row in 0..=dims.rows - mask.height() {
        for col in 0..=dims.cols - mask.width() {
            let fits = mask
                .offsets()
                .all(|(dr, dc)| grid.is_empty(Coord::new(row + dr, col + dc, layer)));
            if fits {
                anchors.push((row, col));
            }
        }
    }
    anchors
}

/// Pick one of the [`candidate_anchors`] uniformly, or `None` if there is no room.
pub fn try_place<R: Rng + ?Sized>(
    mask: &Mask,
    grid: &Grid,
    layer: usize,
    rng: &mut R,
) -> Option<(usize, usize)> {
    candidate_anchors(mask, grid, layer).choose(rng).copied()
}

/// Incremental, validated construction of a [`Board`].
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    config: GameConfig,
    grid: Grid,
    vessels: BTreeMap<VesselId, VesselInstance>,
    general: Option<VesselId>,
    next_id: u32,
}

impl BoardBuilder {
    /// Start an empty board. Fails if the configuration is invalid.
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        config.validate()?;
        let grid = Grid::new(config.dimensions());
        Ok(Self {
            config,
            grid,
            vessels: BTreeMap::new(),
            general: None,
            next_id: 1,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of pieces of `kind` placed so far.
    pub fn placed(&self, kind: VesselKind) -> usize {
        self.vessels.values().filter(|v| v.kind() == kind).count()
    }

    /// Place one piece of `kind` with its bounding box anchored at `anchor`.
    pub fn place(
        &mut self,
        kind: VesselKind,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<VesselId, BoardError> {
        let vessel_type = self.vessel_type(kind);
        if !vessel_type.permits_layer(anchor.layer) {
            return Err(BoardError::LayerNotPermitted {
                kind,
                layer: anchor.layer,
            });
        }
        let limit = self.config.count(kind);
        if self.placed(kind) >= limit {
            return Err(BoardError::PieceLimit { kind, count: limit });
        }
        let mask = vessel_type.mask().oriented(orientation);
        self.stamp(kind, &mask, anchor)
    }

    /// Check that every configured piece is on the board and hand it over.
    pub fn finish(mut self) -> Result<Board, BoardError> {
        for vessel_type in self.config.fleet() {
            let placed = self.placed(vessel_type.kind());
            if placed != vessel_type.count() {
                return Err(BoardError::IncompleteFleet {
                    kind: vessel_type.kind(),
                    placed,
                    expected: vessel_type.count(),
                });
            }
        }
        let general = self.general.ok_or(BoardError::MissingGeneral)?;
        for layer in 0..self.grid.dimensions().layers {
            let cleared = self.grid.normalize_layer(&self.vessels, layer);
            if cleared > 0 {
                log::warn!("cleared {} stray cells on layer {}", cleared, layer);
            }
        }
        Ok(Board::from_parts(self.config, self.grid, self.vessels, general))
    }

    fn vessel_type(&self, kind: VesselKind) -> VesselType {
        match kind {
            VesselKind::General => self.config.general_type(),
            _ => self
                .config
                .vessel_type(kind)
                .cloned()
                .unwrap_or_else(|| VesselType::new(kind, Vec::new(), 0)),
        }
    }

    fn stamp(&mut self, kind: VesselKind, mask: &Mask, anchor: Coord) -> Result<VesselId, BoardError> {
        let dims = self.grid.dimensions();
        if anchor.layer >= dims.layers
            || anchor.row + mask.height() > dims.rows
            || anchor.col + mask.width() > dims.cols
        {
            return Err(BoardError::OutOfBounds { kind, anchor });
        }
        let cells: Vec<(usize, usize)> = mask
            .offsets()
            .map(|(dr, dc)| (anchor.row + dr, anchor.col + dc))
            .collect();
        for &(row, col) in &cells {
            match self.grid.get(Coord::new(row, col, anchor.layer)) {
                Some(Cell::Vessel { id, .. }) => {
                    return Err(BoardError::Overlap {
                        kind,
                        anchor,
                        other: id,
                    })
                }
                Some(_) => {}
                None => return Err(BoardError::OutOfBounds { kind, anchor }),
            }
        }

        let id = VesselId(self.next_id);
        self.next_id += 1;
        for &(row, col) in &cells {
            if let Some(cell) = self.grid.get_mut(Coord::new(row, col, anchor.layer)) {
                *cell = Cell::Vessel { id, hit: false };
            }
        }
        if kind == VesselKind::General {
            self.general = Some(id);
        }
        log::debug!("placed {} {} at {} covering {} cells", kind, id, anchor, cells.len());
        self.vessels
            .insert(id, VesselInstance::new(id, kind, anchor.layer, cells));
        Ok(id)
    }
}

/// Random board generation for one [`GameConfig`].
#[derive(Debug, Clone, Copy)]
pub struct BoardGenerator<'a> {
    config: &'a GameConfig,
}

impl<'a> BoardGenerator<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    /// Generate a fully populated board.
    ///
    /// Counts are per board: a type permitted on several layers gets `count`
    /// pieces in total, each on a layer drawn per attempt, not `count` pieces
    /// on every permitted layer.
    ///
    /// Fleet types are placed in configuration order, then the General on a
    /// layer drawn from the configured flagship layers. Each piece gets
    /// [`GameConfig::placement_attempts`] tries; an attempt picks a permitted
    /// layer and an orientation at random and fails if no anchor is free.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, BoardError> {
        let mut builder = BoardBuilder::new(self.config.clone())?;
        let attempts = self.config.placement_attempts();

        for vessel_type in self.config.fleet() {
            for _ in 0..vessel_type.count() {
                place_randomly(&mut builder, vessel_type, vessel_type.layers(), attempts, rng)?;
            }
        }

        let general = self.config.general_type();
        let layer = *general
            .layers()
            .choose(rng)
            .ok_or(ConfigError::NoPermittedLayers(VesselKind::General))?;
        place_randomly(&mut builder, &general, &[layer], attempts, rng)?;

        let board = builder.finish()?;
        log::info!(
            "generated {} board with {} vessels, General on layer {}",
            board.dimensions(),
            board.vessels().count(),
            board.general().layer()
        );
        Ok(board)
    }
}

fn place_randomly<R: Rng + ?Sized>(
    builder: &mut BoardBuilder,
    vessel_type: &VesselType,
    layers: &[usize],
    attempts: usize,
    rng: &mut R,
) -> Result<VesselId, BoardError> {
    let kind = vessel_type.kind();
    for attempt in 1..=attempts {
        let Some(&layer) = layers.choose(rng) else {
            break;
        };
        let orientation = if rng.random() {
            Orientation::Rotated
        } else {
            Orientation::Unrotated
        };
        let mask = vessel_type.mask().oriented(orientation);
        if let Some((row, col)) = try_place(&mask, builder.grid(), layer, rng) {
            return builder.place(kind, Coord::new(row, col, layer), orientation);
        }
        log::debug!(
            "attempt {}/{}: no room for {} on layer {}",
            attempt,
            attempts,
            kind,
            layer
        );
    }
    Err(BoardError::PlacementExhausted { kind, attempts })
}
