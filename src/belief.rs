//! Belief map: what the robot currently believes about every cell of the grid.
//!
//! Coordinates outside the grid never fail. Reads return `None` and writes
//! are dropped, so neighbor scans near the walls need no special-casing.

use ndarray::Array2;
use log::trace;

use crate::environment::{Direction, Pos};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Cell {
    Unknown,
    Empty,
    SuspectedHazard,
    ConfirmedHazard,
}

pub struct BeliefMap {
    // indexed [[y, x]]
    cells: Array2<Cell>,
    target_pos: Pos,
    starting_pos: Pos,
    current_pos: Pos,
}

impl BeliefMap {
    pub fn new(width: usize, height: usize, target_pos: Pos, starting_pos: Pos) -> Self
    {
        let mut map = Self {
            cells: Array2::from_elem((height, width), Cell::Unknown),
            target_pos,
            starting_pos,
            current_pos: starting_pos,
        };
        map.write(target_pos, Cell::Empty);
        map.write(starting_pos, Cell::Empty);
        map
    }

    pub fn width(&self) -> usize {
        self.cells.dim().1
    }

    pub fn height(&self) -> usize {
        self.cells.dim().0
    }

    pub fn target_pos(&self) -> Pos { self.target_pos }

    pub fn starting_pos(&self) -> Pos { self.starting_pos }

    pub fn current_pos(&self) -> Pos { self.current_pos }

    pub fn set_current_pos(&mut self, pos: Pos) {
        self.current_pos = pos;
    }

    fn index(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width() && y < self.height() {
            Some((y, x))
        } else {
            None
        }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.index(pos.x, pos.y).is_some()
    }

    fn write(&mut self, pos: Pos, cell: Cell) {
        if let Some(index) = self.index(pos.x, pos.y) {
            self.cells[index] = cell;
        }
    }

    /// Writes `cell` at (x, y). Off-grid writes and writes to the target or
    /// starting cell are ignored.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        let pos = Pos::new(x, y);
        if pos == self.target_pos || pos == self.starting_pos {
            trace!("Ignoring write of {:?} to protected cell {:?}", cell, pos);
            return;
        }
        self.write(pos, cell);
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|index| self.cells[index])
    }

    /// On-grid cardinal neighbors of `pos`, in `Direction::all()` order.
    pub fn neighbors(&self, pos: Pos) -> Vec<(Direction, Pos, Cell)> {
        Direction::all().iter()
            .filter_map(|d| {
                let p = pos.step(*d);
                self.get(p.x, p.y).map(|cell| (*d, p, cell))
            })
            .collect()
    }

    pub fn count_neighbors_matching(&self, pos: Pos, cells: &[Cell]) -> usize {
        self.neighbors(pos)
            .into_iter()
            .filter(|(_, _, cell)| cells.contains(cell))
            .count()
    }

    pub fn reclassify_neighbors(&mut self, pos: Pos, from: &[Cell], to: Cell) {
        let targets: Vec<Pos> = self.neighbors(pos)
            .into_iter()
            .filter(|(_, _, cell)| from.contains(cell))
            .map(|(_, p, _)| p)
            .collect();
        for p in targets {
            self.set(p.x, p.y, to);
        }
    }

    /// Number of cells on the whole grid classified as `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        self.cells.genrows().into_iter().map(|row| row.to_vec())
    }
}
