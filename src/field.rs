use crate::cell::Cell;
use crate::cell_content::CellContent::*;
use crate::error::GameError;
use crate::point::Point;
use crate::win_state::WinState;
use crate::win_state::WinState::*;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::ops::{Index, IndexMut};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Number of cells that went from hidden to shown.
    Opened(usize),
    Exploded,
}

/// A square minefield and everything that happens on it.
#[derive(Debug)]
pub struct Field {
    size: usize,
    mine_count: usize,
    cells: Vec<Cell>,
    win_state: WinState,
    rng: StdRng,
    // reused by every flood fill so it's only allocated once
    point_queue: VecDeque<Point>,
}

impl Field {
    /// Places `mine_count` mines uniformly at random. At least one cell must stay safe.
    pub fn new(size: usize, mine_count: usize, seed: u64) -> Result<Self, GameError> {
        let mut field = Self::empty(size, mine_count, seed)?;
        field.place_mines();
        field.count_mines_around();
        info!("new {size}x{size} field with {mine_count} mines, seed {seed}");
        Ok(field)
    }

    /// A field with mines at exactly the given points. Duplicates count once.
    pub fn with_mines(size: usize, mines: &[Point], seed: u64) -> Result<Self, GameError> {
        let mut field = Self::empty(size, 0, seed)?;
        for &point in mines {
            let cell = field.get_mut(point).ok_or(GameError::OutOfBounds)?;
            *cell = Cell::MINE;
        }
        field.mine_count = field.cells.iter().filter(|c| c.is_mine()).count();
        Self::check_mine_count(size, field.mine_count)?;
        field.count_mines_around();
        Ok(field)
    }

    fn empty(size: usize, mine_count: usize, seed: u64) -> Result<Self, GameError> {
        Self::check_mine_count(size, mine_count)?;
        Ok(Self {
            size,
            mine_count,
            cells: vec![Cell::default(); size * size],
            win_state: Untouched,
            rng: StdRng::seed_from_u64(seed),
            point_queue: VecDeque::new(),
        })
    }

    fn check_mine_count(size: usize, mines: usize) -> Result<(), GameError> {
        let cells = size * size;
        if mines >= cells {
            return Err(GameError::TooManyMines { mines, cells });
        }
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn win_state(&self) -> WinState {
        self.win_state
    }

    pub fn get(&self, point: Point) -> Option<&Cell> {
        self.index_of(point).map(|i| &self.cells[i])
    }

    fn get_mut(&mut self, point: Point) -> Option<&mut Cell> {
        self.index_of(point).map(|i| &mut self.cells[i])
    }

    fn index_of(&self, Point { row, col }: Point) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// All positions, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let size = self.size;
        (0..size * size).map(move |i| Point::new(i / size, i % size))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.size.max(1))
    }

    fn random_point(&mut self) -> Point {
        Point::new(
            self.rng.random_range(0..self.size),
            self.rng.random_range(0..self.size),
        )
    }

    /// Rejection sampling: draw a random cell until one without a mine turns up.
    fn random_safe_point(&mut self) -> Point {
        loop {
            let point = self.random_point();
            if !self[point].is_mine() {
                return point;
            }
        }
    }

    fn place_mines(&mut self) {
        for _ in 0..self.mine_count {
            let point = self.random_safe_point();
            self[point].content = Mine;
        }
    }

    /// Recomputes every safe cell's neighbour count from scratch.
    fn count_mines_around(&mut self) {
        for point in self.points() {
            if self[point].is_mine() {
                continue;
            }
            let n = self.count_mines_for(point);
            self[point].content = Empty(n);
        }
    }

    fn count_mines_for(&self, point: Point) -> u8 {
        point
            .neighbors(self.size)
            .filter(|&p| self[p].is_mine())
            .count() as u8
    }

    /// Moves the mine at `point` to a random safe cell and leaves `point` safe.
    /// Returns where the mine went, or `None` if `point` held no mine.
    pub fn relocate_mine_away_from(&mut self, point: Point) -> Option<Point> {
        if !self.get(point)?.is_mine() {
            return None;
        }
        let target = self.random_safe_point();
        self[target].content = Mine;
        self[point].content = Empty(0);
        self.count_mines_around();
        debug!("first move on a mine, moved it from {point:?} to {target:?}");
        Some(target)
    }

    fn check_playable(&self, point: Point) -> Result<usize, GameError> {
        if self.win_state.is_over() {
            return Err(GameError::AlreadyEnded);
        }
        self.index_of(point).ok_or(GameError::OutOfBounds)
    }

    pub fn reveal(&mut self, point: Point) -> Result<RevealOutcome, GameError> {
        let i = self.check_playable(point)?;
        if self.cells[i].is_revealed() {
            return Err(GameError::AlreadyRevealed);
        }

        if let Untouched = self.win_state {
            self.relocate_mine_away_from(point);
            self.win_state = Ongoing;
        }

        let outcome = match self.cells[i].content {
            Mine => {
                self.uncover_mines();
                self.win_state = Lost;
                info!("stepped on a mine at {point:?}");
                return Ok(RevealOutcome::Exploded);
            }
            Empty(0) => RevealOutcome::Opened(self.flood_fill(point)),
            Empty(_) => {
                self.cells[i].reveal();
                RevealOutcome::Opened(1)
            }
        };
        self.update_win_state();
        Ok(outcome)
    }

    /// Breadth-first over zero-count cells. Numbered cells are opened but not
    /// expanded. Marked cells on the way are opened too, losing the mark.
    fn flood_fill(&mut self, start: Point) -> usize {
        let size = self.size;
        let mut opened = 0;
        self.point_queue.clear();
        self.point_queue.push_back(start);

        while let Some(point) = self.point_queue.pop_front() {
            let cell = &mut self.cells[point.row * size + point.col];
            if cell.is_revealed() || cell.is_mine() {
                continue;
            }
            cell.reveal();
            opened += 1;
            if cell.mines_around() == Some(0) {
                self.point_queue.extend(point.neighbors(size));
            }
        }

        debug!("flood fill from {start:?} opened {opened} cells");
        opened
    }

    pub fn toggle_mark(&mut self, point: Point) -> Result<(), GameError> {
        let i = self.check_playable(point)?;
        self.cells[i].toggle_mark()?;
        self.update_win_state();
        Ok(())
    }

    /// Shows every mine, dropping its mark. Safe cells are left alone.
    fn uncover_mines(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| c.is_mine()) {
            cell.reveal();
        }
    }

    fn update_win_state(&mut self) {
        if !self.win_state.is_over() && self.is_solved() {
            info!("field solved");
            self.win_state = Won;
        }
    }

    pub fn is_solved(&self) -> bool {
        self.all_mines_marked() || self.all_safe_cells_opened()
    }

    /// The marked cells are exactly the mines.
    pub fn all_mines_marked(&self) -> bool {
        self.cells.iter().all(|c| c.is_mine() == c.is_marked())
    }

    pub fn all_safe_cells_opened(&self) -> bool {
        self.cells.iter().all(|c| c.is_mine() || c.is_revealed())
    }
}

impl Index<Point> for Field {
    type Output = Cell;

    fn index(&self, Point { row, col }: Point) -> &Self::Output {
        &self.cells[row * self.size + col]
    }
}

impl IndexMut<Point> for Field {
    fn index_mut(&mut self, Point { row, col }: Point) -> &mut Self::Output {
        &mut self.cells[row * self.size + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, col: usize) -> Point {
        Point::new(row, col)
    }

    fn mines(field: &Field) -> Vec<Point> {
        field.points().filter(|&pt| field[pt].is_mine()).collect()
    }

    fn assert_counts(field: &Field) {
        for pt in field.points() {
            let cell = field[pt];
            if cell.is_mine() {
                continue;
            }
            let expected = pt.neighbors(field.size()).filter(|&n| field[n].is_mine()).count();
            assert_eq!(cell.mines_around(), Some(expected as u8), "count at {pt:?}");
        }
    }

    fn snapshot(field: &Field) -> Vec<Cell> {
        field.points().map(|pt| field[pt]).collect()
    }

    #[test]
    fn construction_places_exact_mine_count() {
        for size in 1..=6 {
            for mines_wanted in 0..size * size {
                let field = Field::new(size, mines_wanted, (size * 31 + mines_wanted) as u64).unwrap();
                assert_eq!(mines(&field).len(), mines_wanted);
                assert_eq!(field.mine_count(), mines_wanted);
                assert_counts(&field);
                assert_eq!(field.win_state(), Untouched);
            }
        }
    }

    #[test]
    fn refuses_to_fill_the_field() {
        assert_eq!(
            Field::new(3, 9, 0).unwrap_err(),
            GameError::TooManyMines { mines: 9, cells: 9 }
        );
        assert!(Field::new(0, 0, 0).is_err());
        assert!(Field::with_mines(1, &[p(0, 0)], 0).is_err());
        assert_eq!(Field::with_mines(3, &[p(3, 0)], 0).unwrap_err(), GameError::OutOfBounds);
    }

    #[test]
    fn same_seed_same_layout() {
        let a = Field::new(9, 10, 7).unwrap();
        let b = Field::new(9, 10, 7).unwrap();
        assert_eq!(mines(&a), mines(&b));
    }

    #[test]
    fn with_mines_counts_neighbors() {
        let field = Field::with_mines(3, &[p(0, 0), p(0, 2), p(0, 0)], 0).unwrap();
        assert_eq!(field.mine_count(), 2);
        assert_eq!(field[p(0, 1)].mines_around(), Some(2));
        assert_eq!(field[p(1, 1)].mines_around(), Some(2));
        assert_eq!(field[p(1, 0)].mines_around(), Some(1));
        assert_eq!(field[p(2, 2)].mines_around(), Some(0));
    }

    #[test]
    fn relocation_keeps_mine_count() {
        let mut field = Field::with_mines(3, &[p(1, 1)], 3).unwrap();
        let target = field.relocate_mine_away_from(p(1, 1)).unwrap();
        assert_ne!(target, p(1, 1));
        assert!(!field[p(1, 1)].is_mine());
        assert_eq!(mines(&field), vec![target]);
        assert_counts(&field);

        assert_eq!(field.relocate_mine_away_from(p(1, 1)), None);
    }

    #[test]
    fn first_reveal_on_a_mine_is_safe() {
        let mut field = Field::with_mines(9, &[p(4, 4)], 11).unwrap();
        let outcome = field.reveal(p(4, 4)).unwrap();
        assert_ne!(outcome, RevealOutcome::Exploded);
        assert!(!field[p(4, 4)].is_mine());
        assert!(field[p(4, 4)].is_revealed());
        assert_eq!(mines(&field).len(), 1);
        assert_ne!(field.win_state(), Lost);
    }

    #[test]
    fn first_reveal_safe_on_dense_boards() {
        for seed in 0..20 {
            let mut field = Field::new(5, 24, seed).unwrap();
            field.reveal(p(2, 2)).unwrap();
            assert!(!field[p(2, 2)].is_mine());
            assert_eq!(mines(&field).len(), 24);
            assert_counts(&field);
            // the only safe cell is open
            assert_eq!(field.win_state(), Won);
        }
    }

    #[test]
    fn flood_fill_stops_at_numbers() {
        let mut field = Field::with_mines(3, &[p(0, 0), p(0, 2)], 0).unwrap();
        assert_eq!(field.reveal(p(2, 1)).unwrap(), RevealOutcome::Opened(6));
        for pt in field.points() {
            assert_eq!(field[pt].is_revealed(), pt.row > 0, "{pt:?}");
        }
        assert_eq!(field.win_state(), Ongoing);
    }

    #[test]
    fn flood_fill_never_crosses_mines() {
        let wall: Vec<_> = (0..5).map(|row| p(row, 2)).collect();
        let mut field = Field::with_mines(5, &wall, 0).unwrap();
        field.reveal(p(2, 0)).unwrap();
        for pt in field.points() {
            assert_eq!(field[pt].is_revealed(), pt.col < 2, "{pt:?}");
        }
    }

    #[test]
    fn flood_fill_opens_marked_cells() {
        let mut field = Field::with_mines(5, &[p(4, 4)], 0).unwrap();
        field.toggle_mark(p(0, 0)).unwrap();
        field.reveal(p(0, 4)).unwrap();
        assert!(field[p(0, 0)].is_revealed());
        assert!(!field[p(0, 0)].is_marked());
        assert!(!field[p(4, 4)].is_revealed());
        assert_eq!(field.win_state(), Won);
    }

    #[test]
    fn single_numbered_reveal() {
        let mut field = Field::with_mines(3, &[p(0, 0)], 0).unwrap();
        assert_eq!(field.reveal(p(1, 1)).unwrap(), RevealOutcome::Opened(1));
        assert_eq!(field[p(1, 1)].glyph(), '1');
        assert_eq!(field.points().filter(|&pt| field[pt].is_revealed()).count(), 1);
    }

    #[test]
    fn revealing_twice_is_rejected() {
        let mut field = Field::with_mines(3, &[p(0, 0)], 0).unwrap();
        field.reveal(p(1, 1)).unwrap();
        let before = snapshot(&field);
        assert_eq!(field.reveal(p(1, 1)), Err(GameError::AlreadyRevealed));
        assert_eq!(snapshot(&field), before);
    }

    #[test]
    fn stepping_on_a_mine_loses() {
        let mut field = Field::with_mines(3, &[p(0, 0), p(0, 2)], 0).unwrap();
        field.reveal(p(2, 1)).unwrap();
        field.toggle_mark(p(0, 0)).unwrap();
        field.toggle_mark(p(0, 1)).unwrap();

        assert_eq!(field.reveal(p(0, 2)).unwrap(), RevealOutcome::Exploded);
        assert_eq!(field.win_state(), Lost);
        assert!(field[p(0, 0)].is_revealed());
        assert!(!field[p(0, 0)].is_marked());
        assert!(field[p(0, 2)].is_revealed());
        // the wrong mark on a safe cell stays
        assert!(field[p(0, 1)].is_marked());
        assert!(!field[p(0, 1)].is_revealed());

        assert_eq!(field.reveal(p(0, 1)), Err(GameError::AlreadyEnded));
        assert_eq!(field.toggle_mark(p(0, 1)), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn empty_board_wins_on_first_reveal() {
        let mut field = Field::new(3, 0, 0).unwrap();
        field.reveal(p(0, 2)).unwrap();
        assert_eq!(field.win_state(), Won);
        assert!(field.all_safe_cells_opened());
    }

    #[test]
    fn exact_marks_win() {
        let mut field = Field::with_mines(9, &[p(0, 0), p(8, 8)], 0).unwrap();
        field.toggle_mark(p(0, 0)).unwrap();
        field.toggle_mark(p(4, 4)).unwrap();
        field.toggle_mark(p(8, 8)).unwrap();
        assert!(!field.is_solved());
        assert_eq!(field.win_state(), Untouched);

        field.toggle_mark(p(4, 4)).unwrap();
        assert!(field.all_mines_marked());
        assert!(!field.all_safe_cells_opened());
        assert_eq!(field.win_state(), Won);
    }

    #[test]
    fn marking_revealed_cells_is_rejected() {
        let mut field = Field::with_mines(3, &[p(0, 0), p(0, 2)], 0).unwrap();
        field.reveal(p(2, 1)).unwrap();
        assert_eq!(field.toggle_mark(p(2, 1)), Err(GameError::AlreadyRevealed));
        assert_eq!(field.toggle_mark(p(1, 1)), Err(GameError::CannotMarkNumber));
        assert!(!field[p(1, 1)].is_marked());
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut field = Field::new(4, 2, 0).unwrap();
        assert_eq!(field.reveal(p(4, 0)), Err(GameError::OutOfBounds));
        assert_eq!(field.toggle_mark(p(0, 4)), Err(GameError::OutOfBounds));
        assert!(field.get(p(4, 4)).is_none());
    }
}
