//! One player's board: the cell grid plus the catalog of placed vessels.

use std::collections::BTreeMap;

use rand::Rng;

use crate::common::{BoardError, Coord, Dimensions, FireError, ShotResult};
use crate::config::GameConfig;
use crate::generator::BoardGenerator;
use crate::grid::{Cell, Grid};
use crate::snapshot::BoardSnapshot;
use crate::vessel::{VesselId, VesselInstance, VesselKind};

/// A populated board. Created once by [`BoardGenerator`] or
/// [`BoardBuilder`](crate::BoardBuilder); afterwards only shots change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: GameConfig,
    grid: Grid,
    vessels: BTreeMap<VesselId, VesselInstance>,
    general: VesselId,
}

impl Board {
    /// Generate a random board for `config`.
    pub fn generate<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, BoardError> {
        BoardGenerator::new(config).generate(rng)
    }

    pub(crate) fn from_parts(
        config: GameConfig,
        grid: Grid,
        vessels: BTreeMap<VesselId, VesselInstance>,
        general: VesselId,
    ) -> Self {
        Self {
            config,
            grid,
            vessels,
            general,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.grid.dimensions()
    }

    /// Configuration the board was generated from.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// All vessels in id order.
    pub fn vessels(&self) -> impl Iterator<Item = &VesselInstance> {
        self.vessels.values()
    }

    pub fn vessel(&self, id: VesselId) -> Option<&VesselInstance> {
        self.vessels.get(&id)
    }

    /// Vessel occupying `coord`, if any.
    pub fn vessel_at(&self, coord: Coord) -> Option<&VesselInstance> {
        self.grid
            .get(coord)
            .and_then(|cell| cell.vessel())
            .and_then(|id| self.vessels.get(&id))
    }

    pub fn general(&self) -> &VesselInstance {
        // `from_parts` is only reached through `BoardBuilder::finish`, which
        // guarantees the General is in the catalog.
        &self.vessels[&self.general]
    }

    pub fn count_of(&self, kind: VesselKind) -> usize {
        self.vessels().filter(|v| v.kind() == kind).count()
    }

    pub fn general_destroyed(&self) -> bool {
        self.general().is_destroyed()
    }

    /// `true` when every vessel other than the General is destroyed.
    pub fn fleet_destroyed(&self) -> bool {
        self.vessels()
            .filter(|v| v.kind() != VesselKind::General)
            .all(VesselInstance::is_destroyed)
    }

    /// Vessels still afloat.
    pub fn remaining(&self) -> impl Iterator<Item = &VesselInstance> {
        self.vessels().filter(|v| !v.is_destroyed())
    }

    /// Whether a shot has already landed on `coord`.
    pub fn already_fired(&self, coord: Coord) -> bool {
        self.grid.get(coord).map_or(false, |cell| cell.is_resolved())
    }

    /// Resolve a shot at `coord`.
    ///
    /// Shots at cells that were already resolved report
    /// [`ShotResult::AlreadyMissed`] or [`ShotResult::AlreadyHit`] and leave
    /// the board unchanged, so no vessel can take more hits than it has cells.
    pub fn fire_at(&mut self, coord: Coord) -> Result<ShotResult, FireError> {
        let cell = self.grid.get(coord).ok_or(FireError::OutOfBounds {
            target: coord,
            dimensions: self.dimensions(),
        })?;
        let result = match cell {
            Cell::Empty => {
                self.set_cell(coord, Cell::Miss);
                ShotResult::Miss
            }
            Cell::Miss => ShotResult::AlreadyMissed,
            Cell::Vessel { id, hit } => {
                let vessel = self
                    .vessels
                    .get_mut(&id)
                    .ok_or(FireError::UnknownVessel(id))?;
                let kind = vessel.kind();
                if hit || !vessel.register_hit(coord) {
                    ShotResult::AlreadyHit { id, kind }
                } else if vessel.is_destroyed() {
                    self.set_cell(coord, Cell::Vessel { id, hit: true });
                    ShotResult::Destroyed { id, kind }
                } else {
                    self.set_cell(coord, Cell::Vessel { id, hit: true });
                    ShotResult::Hit { id, kind }
                }
            }
        };
        log::debug!("shot at {}: {:?}", coord, result);
        Ok(result)
    }

    /// Everything on the board, as its owner sees it.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::revealed(self)
    }

    /// The board as the opponent sees it: intact vessel cells are hidden.
    pub fn concealed_snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::concealed(self)
    }

    fn set_cell(&mut self, coord: Coord, value: Cell) {
        if let Some(cell) = self.grid.get_mut(coord) {
            *cell = value;
        }
    }
}
