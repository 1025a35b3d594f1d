use std::fmt;

use crate::belief::{BeliefMap, Cell};
use crate::environment::Pos;

pub const ROBOT_SYMBOL: char = 'X';

pub fn symbol(cell: Cell) -> char {
    match cell {
        Cell::Unknown => '.',
        Cell::Empty => 'O',
        Cell::SuspectedHazard => '!',
        Cell::ConfirmedHazard => 'F',
    }
}

impl fmt::Display for BeliefMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let robot = self.current_pos();
        for (y, row) in self.rows().enumerate() {
            for (x, cell) in row.into_iter().enumerate() {
                let c = if Pos::new(x as i32, y as i32) == robot {
                    ROBOT_SYMBOL
                } else {
                    symbol(cell)
                };
                write!(f, "{} ", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_distinct() {
        let cells = [Cell::Unknown, Cell::Empty, Cell::SuspectedHazard, Cell::ConfirmedHazard];
        let mut symbols: Vec<char> = cells.iter().map(|c| symbol(*c)).collect();
        symbols.push(ROBOT_SYMBOL);
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), 5);
    }

    #[test]
    fn test_render_marks_robot_and_cells() {
        let mut map = BeliefMap::new(3, 2, Pos::new(2, 1), Pos::new(0, 0));
        map.set(1, 0, Cell::ConfirmedHazard);
        map.set(0, 1, Cell::SuspectedHazard);
        assert_eq!(map.to_string(), "X F . \n! . O \n");
    }
}
