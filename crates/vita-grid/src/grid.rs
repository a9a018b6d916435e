//! Double-buffered cell grid and its generation step.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use vita_core::{Cell, Direction, Generation, GridError};
use vita_rules::Rule;
use vita_space::{CellView, Halo};

/// A `height x width` grid of cells advanced by a bound [`Rule`].
///
/// Cells are stored row-major, one byte each. Every tick reads only the
/// current buffer and writes only the next buffer; the two are swapped once
/// the pass is complete, so no cell's new state can depend on a value
/// already rewritten in the same pass.
///
/// # Examples
///
/// ```
/// use vita_core::Cell;
/// use vita_grid::Grid;
///
/// let mut grid = Grid::new(5, 5).unwrap();
/// grid.set_rectangle(2, 1, &[[Cell::Alive; 3]]);
/// grid.tick();
/// assert_eq!(grid.cell(1, 2), Some(Cell::Alive));
/// assert_eq!(grid.cell(2, 1), Some(Cell::Dead));
/// assert_eq!(grid.generation().0, 1);
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    height: u32,
    width: u32,
    cells: Vec<Cell>,
    next: Vec<Cell>,
    generation: Generation,
    stable: bool,
    rule: Rule,
}

impl Grid {
    /// Maximum size of either dimension: coordinates use `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an all-dead grid bound to [`Rule::conway`].
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is zero, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM) or the cell count does not fit in memory.
    pub fn new(height: u32, width: u32) -> Result<Self, GridError> {
        Self::with_rule(height, width, Rule::conway())
    }

    /// Create an all-dead grid bound to `rule`.
    pub fn with_rule(height: u32, width: u32, rule: Rule) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::EmptyGrid);
        }
        for (name, value) in [("height", height), ("width", width)] {
            if value > Self::MAX_DIM {
                return Err(GridError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        let len = (height as usize)
            .checked_mul(width as usize)
            .ok_or(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: (usize::MAX / height as usize).min(Self::MAX_DIM as usize) as u32,
            })?;

        Ok(Self {
            height,
            width,
            cells: vec![Cell::Dead; len],
            next: vec![Cell::Dead; len],
            generation: Generation(0),
            stable: false,
            rule,
        })
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of cells (`height * width`), which is also the byte size used
    /// by [`read`](Self::read) and [`write`](Self::write).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of ticks run since creation or the last [`reset`](Self::reset).
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether the most recent tick changed no cell.
    ///
    /// `false` until the first tick. Not cleared by mutations between ticks.
    pub fn is_stable(&self) -> bool {
        self.stable
    }

    /// The bound rule.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Replace the bound rule. Takes effect from the next tick.
    pub fn set_rule(&mut self, rule: Rule) {
        self.rule = rule;
    }

    /// Row-major index of `(row, col)`.
    pub fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    /// The cell at `(row, col)`, or `None` outside the grid.
    pub fn cell(&self, row: u32, col: u32) -> Option<Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[self.index(row, col)])
    }

    /// The cell at row-major `index`, or `None` past the end.
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Borrow the current cells as a [`CellView`].
    pub fn view(&self) -> CellView<'_> {
        CellView::new(&self.cells, self.height, self.width)
    }

    /// Number of live cells.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Whether no cell is alive.
    pub fn is_dead(&self) -> bool {
        !self.cells.iter().any(|c| c.is_alive())
    }

    /// The cells along one side: the first/last row for `Top`/`Bottom`,
    /// the first/last column for `Left`/`Right`.
    pub fn edge(&self, direction: Direction) -> Vec<Cell> {
        self.view().edge(direction)
    }

    // ── Generation step ─────────────────────────────────────────

    /// Advance one generation with nothing beyond the grid's edges other
    /// than what the rule's own edge behaviour provides.
    pub fn tick(&mut self) {
        self.step(None);
    }

    /// Advance one generation reading off-grid neighbours from `halo`.
    pub fn tick_with_halo(&mut self, halo: &Halo<'_>) {
        self.step(Some(halo));
    }

    fn step(&mut self, halo: Option<&Halo<'_>>) {
        let view = CellView::new(&self.cells, self.height, self.width);
        let width = self.width as usize;
        let mut changed = false;
        for row in 0..self.height as i32 {
            for col in 0..self.width as i32 {
                let idx = row as usize * width + col as usize;
                let next = self.rule.apply(&view, halo, row, col);
                changed |= next != self.cells[idx];
                self.next[idx] = next;
            }
        }
        std::mem::swap(&mut self.cells, &mut self.next);
        self.stable = !changed;
        self.generation = self.generation.next();
    }

    // ── Mutation ────────────────────────────────────────────────

    /// Make each cell alive with independent probability `density / 100`
    /// using the thread-local generator. Densities above 100 are clamped.
    pub fn randomize(&mut self, density: u8) {
        self.randomize_with(&mut rand::rng(), density);
    }

    /// [`randomize`](Self::randomize) from a deterministic ChaCha8 stream.
    pub fn randomize_seeded(&mut self, seed: u64, density: u8) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.randomize_with(&mut rng, density);
    }

    /// [`randomize`](Self::randomize) drawing from `rng`.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R, density: u8) {
        let density = density.min(100);
        for cell in &mut self.cells {
            *cell = Cell::from(rng.random_range(0..100u8) < density);
        }
    }

    /// Kill every cell and rewind the generation counter to 0.
    ///
    /// The stable flag is left as it was.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Dead);
        self.generation = Generation(0);
    }

    /// Flip the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    pub fn toggle_cell_at(&mut self, row: u32, col: u32) {
        assert!(
            row < self.height && col < self.width,
            "({row}, {col}) is outside {}x{} grid",
            self.height,
            self.width
        );
        let idx = self.index(row, col);
        self.cells[idx] = self.cells[idx].toggled();
    }

    /// Stamp `pattern` with its top-left corner at `(row, col)`.
    ///
    /// Pattern cells that fall outside the grid are dropped.
    pub fn set_rectangle<R: AsRef<[Cell]>>(&mut self, row: u32, col: u32, pattern: &[R]) {
        for (dr, line) in pattern.iter().enumerate() {
            let r = row as usize + dr;
            if r >= self.height as usize {
                break;
            }
            for (dc, &cell) in line.as_ref().iter().enumerate() {
                let c = col as usize + dc;
                if c >= self.width as usize {
                    break;
                }
                self.cells[r * self.width as usize + c] = cell;
            }
        }
    }

    // ── Bulk I/O ────────────────────────────────────────────────

    /// Copy the cell bytes into `buf`, which must be exactly
    /// [`len`](Self::len) bytes.
    pub fn read(&self, buf: &mut [u8]) -> Result<(), GridError> {
        self.check_len(buf.len())?;
        for (dst, cell) in buf.iter_mut().zip(&self.cells) {
            *dst = cell.as_byte();
        }
        Ok(())
    }

    /// Overwrite the cells from `buf`, which must be exactly
    /// [`len`](Self::len) bytes. Any non-zero byte becomes a live cell.
    ///
    /// On error the grid is left unmodified.
    pub fn write(&mut self, buf: &[u8]) -> Result<(), GridError> {
        self.check_len(buf.len())?;
        for (cell, &byte) in self.cells.iter_mut().zip(buf) {
            *cell = Cell::from_byte(byte);
        }
        Ok(())
    }

    /// The cell bytes as a new vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.as_byte()).collect()
    }

    fn check_len(&self, actual: usize) -> Result<(), GridError> {
        if actual != self.cells.len() {
            return Err(GridError::LengthMismatch {
                expected: self.cells.len(),
                actual,
            });
        }
        Ok(())
    }
}
