//! Fixed-size 2D board of occupants.

use reef_core::{Census, Error, Occupant, OccupantKind, Position, Result};

/// A bounded (non-wrapping) grid stored row-major, one slot per cell.
///
/// Slots are only empty between [`Grid::new`] and [`Grid::init`]. Cloning
/// copies every occupant, so a clone shares nothing with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<Occupant>>,
}

impl Grid {
    /// Create a board with every cell empty. Call [`Grid::init`] before ticking.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            cells: vec![None; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Fill every cell with fresh substrate, discarding whatever was there
    pub fn init(&mut self) {
        self.cells.fill(Some(Occupant::substrate()));
    }

    /// Occupant at `(x, y)`, or `None` for a cell not yet initialized
    pub fn get(&self, x: usize, y: usize) -> Result<Option<Occupant>> {
        let index = self.checked_index(x, y)?;
        Ok(self.cells[index])
    }

    /// Replace the occupant at `(x, y)`
    pub fn set(&mut self, x: usize, y: usize, occupant: Occupant) -> Result<()> {
        let index = self.checked_index(x, y)?;
        self.cells[index] = Some(occupant);
        Ok(())
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Kind of the occupant at `pos`; `None` when off the board or empty
    pub fn kind_at(&self, pos: Position) -> Option<OccupantKind> {
        if !self.contains(pos) {
            return None;
        }
        self.cells[self.pos_to_index(pos)].map(|occupant| occupant.kind())
    }

    pub(crate) fn put(&mut self, pos: Position, occupant: Occupant) {
        debug_assert!(self.contains(pos), "put outside the board at {}", pos);
        let index = self.pos_to_index(pos);
        self.cells[index] = Some(occupant);
    }

    /// Remove and return the occupant at `pos`, leaving the slot empty
    /// until the caller refills it.
    pub(crate) fn take(&mut self, pos: Position) -> Option<Occupant> {
        debug_assert!(self.contains(pos), "take outside the board at {}", pos);
        let index = self.pos_to_index(pos);
        self.cells[index].take()
    }

    /// All positions holding `kind`, in row-major order
    pub fn positions_of(&self, kind: OccupantKind) -> Vec<Position> {
        self.iter()
            .filter(|(_, cell)| cell.is_some_and(|occupant| occupant.is(kind)))
            .map(|(pos, _)| pos)
            .collect()
    }

    pub fn census(&self) -> Census {
        self.cells.iter().map(Option::as_ref).collect()
    }

    /// Cells of row `y`, left to right. `y` must be below `height`.
    pub(crate) fn row(&self, y: usize) -> &[Option<Occupant>] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Iterator over all cells with positions, in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<&Occupant>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (self.index_to_pos(i), cell.as_ref()))
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    fn pos_to_index(&self, pos: Position) -> usize {
        pos.y * self.width + pos.x
    }

    fn index_to_pos(&self, index: usize) -> Position {
        Position::new(index % self.width, index / self.width)
    }
}
