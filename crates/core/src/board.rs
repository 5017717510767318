//! Board module - the square tile grid
//!
//! The board is an N x N grid stored as one flat, row-major buffer.
//! Coordinates: (row, col), row 0 is the top, gravity pulls toward row N-1.
//!
//! Every cell keeps the position of its slot forever. What moves around is the
//! payload: the tile kind and the tile id. Engine transitions take `&Board` and
//! hand back a new `Board`, so the only `&mut` access lives inside this crate.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Position, TileId, TileKind};

/// One grid slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    position: Position,
    kind: Option<TileKind>,
    id: TileId,
}

impl Cell {
    /// The slot this cell occupies (never changes)
    pub fn position(&self) -> Position {
        self.position
    }

    /// Tile kind, `None` when the slot is empty
    pub fn kind(&self) -> Option<TileKind> {
        self.kind
    }

    /// Id of the tile currently in this slot
    ///
    /// Meaningless while the slot is empty.
    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
    }
}

/// Errors from [`Board::parse`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    /// No rows at all
    Empty,
    /// A row whose length differs from the number of rows
    NotSquare { row: usize, len: usize, size: usize },
    /// A character that is neither a digit nor `.`
    InvalidChar { row: usize, ch: char },
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::Empty => write!(f, "board text has no rows"),
            BoardParseError::NotSquare { row, len, size } => {
                write!(f, "row {} has {} cells, expected {}", row, len, size)
            }
            BoardParseError::InvalidChar { row, ch } => {
                write!(f, "row {}: invalid cell character {:?}", row, ch)
            }
        }
    }
}

impl std::error::Error for BoardParseError {}

/// The game board - size x size cells using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
    /// Next id handed to a spawned tile
    next_id: TileId,
}

impl Board {
    /// Create a board with every slot empty
    pub fn empty(size: usize) -> Self {
        let cells = (0..size * size)
            .map(|idx| Cell {
                position: Position::new(idx / size, idx % size),
                kind: None,
                id: 0,
            })
            .collect();
        Self {
            size,
            cells,
            next_id: 0,
        }
    }

    /// Build a board from text, one row per non-blank line
    ///
    /// Digits are tile kinds, `.` is an empty slot, other whitespace is ignored.
    /// Tiles get ids in row-major order.
    ///
    /// ```
    /// use match3_core::Board;
    ///
    /// let board = Board::parse(
    ///     "012
    ///      1.0
    ///      220",
    /// )
    /// .unwrap();
    /// assert_eq!(board.size(), 3);
    /// assert!(board.get((1, 1).into()).is_empty());
    /// ```
    pub fn parse(text: &str) -> Result<Self, BoardParseError> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let size = rows.len();
        if size == 0 {
            return Err(BoardParseError::Empty);
        }

        let mut board = Board::empty(size);
        for (row, chars) in rows.iter().enumerate() {
            if chars.len() != size {
                return Err(BoardParseError::NotSquare {
                    row,
                    len: chars.len(),
                    size,
                });
            }
            for (col, &ch) in chars.iter().enumerate() {
                let kind = match ch {
                    '.' => None,
                    d => match d.to_digit(10) {
                        Some(tag) => Some(TileKind::new(tag as u8)),
                        None => return Err(BoardParseError::InvalidChar { row, ch }),
                    },
                };
                if let Some(kind) = kind {
                    board.spawn(Position::new(row, col), kind);
                }
            }
        }
        Ok(board)
    }

    /// Calculate flat index, panicking on out-of-range positions
    #[inline(always)]
    fn index(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position ({}, {}) outside {}x{} board",
            pos.row,
            pos.col,
            self.size,
            self.size
        );
        pos.row * self.size + pos.col
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `pos` lies on the board
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Cell at `pos`
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    pub fn get(&self, pos: Position) -> &Cell {
        &self.cells[self.index(pos)]
    }

    /// Kind at `pos` (`None` if empty)
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    pub fn kind(&self, pos: Position) -> Option<TileKind> {
        self.get(pos).kind
    }

    /// Raw kind at (row, col) without the bounds assertion, for the scanners
    #[inline(always)]
    pub(crate) fn kind_at(&self, row: usize, col: usize) -> Option<TileKind> {
        self.cells[row * self.size + col].kind
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Every position on the board, row-major
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size * size).map(move |idx| Position::new(idx / size, idx % size))
    }

    /// Orthogonal neighbours of `pos` that lie on the board
    pub fn neighbors(&self, pos: Position) -> ArrayVec<Position, 4> {
        let mut out = ArrayVec::new();
        if pos.row > 0 {
            out.push(Position::new(pos.row - 1, pos.col));
        }
        if pos.col + 1 < self.size {
            out.push(Position::new(pos.row, pos.col + 1));
        }
        if pos.row + 1 < self.size {
            out.push(Position::new(pos.row + 1, pos.col));
        }
        if pos.col > 0 {
            out.push(Position::new(pos.row, pos.col - 1));
        }
        out
    }

    /// True when no slot is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.kind.is_some())
    }

    /// Number of empty slots
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.kind.is_none()).count()
    }

    /// Kinds as plain tags, one `Vec` per row
    pub fn to_tags(&self) -> Vec<Vec<Option<u8>>> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.kind.map(TileKind::index)).collect())
            .collect()
    }

    /// Put a fresh tile (new id) into `pos`
    pub(crate) fn spawn(&mut self, pos: Position, kind: TileKind) -> TileId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        let idx = self.index(pos);
        self.cells[idx].kind = Some(kind);
        self.cells[idx].id = id;
        id
    }

    /// Change the kind in place, keeping the tile id
    pub(crate) fn recolor(&mut self, pos: Position, kind: TileKind) {
        let idx = self.index(pos);
        self.cells[idx].kind = Some(kind);
    }

    /// Empty the slot at `pos`
    pub(crate) fn clear(&mut self, pos: Position) {
        let idx = self.index(pos);
        self.cells[idx].kind = None;
    }

    /// Exchange the payloads of two slots, leaving positions in place
    pub(crate) fn exchange(&mut self, a: Position, b: Position) {
        let ia = self.index(a);
        let ib = self.index(b);
        if ia == ib {
            return;
        }
        let (ka, ida) = (self.cells[ia].kind, self.cells[ia].id);
        self.cells[ia].kind = self.cells[ib].kind;
        self.cells[ia].id = self.cells[ib].id;
        self.cells[ib].kind = ka;
        self.cells[ib].id = ida;
    }

    /// Move the payload of `from` into `to` and empty `from`
    pub(crate) fn relocate(&mut self, from: Position, to: Position) {
        let ifrom = self.index(from);
        let ito = self.index(to);
        if ifrom == ito {
            return;
        }
        self.cells[ito].kind = self.cells[ifrom].kind;
        self.cells[ito].id = self.cells[ifrom].id;
        self.cells[ifrom].kind = None;
    }
}

impl fmt::Display for Board {
    /// Same text format [`Board::parse`] accepts
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell.kind {
                    Some(kind) => write!(f, "{}", kind.index())?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}
