//! Scripted engine implementation.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{Cell, FlipSet, Side, SideMap, BOARD_SIDE};
use crate::rules::{MoveEngine, Outcome};

/// Move engine that plays back a configured script.
///
/// Each side starts with a fixed set of legal cells. Playing a cell removes
/// it from both sides' sets and hands the turn over, so a test controls
/// exactly when each side runs out of moves.
#[derive(Clone, Debug)]
pub struct ScriptedEngine {
    /// Legal cells at the start of every game.
    initial_legal: SideMap<FxHashSet<Cell>>,
    /// Legal cells remaining in this game.
    legal: SideMap<FxHashSet<Cell>>,
    /// Flip set reported for a cell; unlisted cells flip one neighbour.
    flips: FxHashMap<Cell, FlipSet>,
    /// Move returned by the generators regardless of legality.
    forced: SideMap<Option<Cell>>,
    /// Result reported by `winner`.
    outcome: Outcome,
    current: Side,
    seed: u64,
    rng: ChaCha8Rng,
    history: Vec<(Side, Cell)>,

    // === Call counters ===
    apply_calls: usize,
    pass_calls: usize,
    reset_calls: usize,
    generate_calls: usize,
    winner_calls: std::cell::Cell<usize>,
    last_search_budget: Option<u32>,
}

/// Builder for creating a ScriptedEngine.
#[derive(Clone, Debug)]
pub struct ScriptedEngineBuilder {
    legal: SideMap<Vec<Cell>>,
    flips: Vec<(Cell, FlipSet)>,
    forced: SideMap<Option<Cell>>,
    outcome: Outcome,
}

impl Default for ScriptedEngineBuilder {
    fn default() -> Self {
        Self {
            legal: SideMap::default(),
            flips: Vec::new(),
            forced: SideMap::default(),
            outcome: Outcome::Draw,
        }
    }
}

impl ScriptedEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add legal cells for `side`.
    pub fn legal(mut self, side: Side, cells: impl IntoIterator<Item = Cell>) -> Self {
        self.legal[side].extend(cells);
        self
    }

    /// Set the flip set reported when `cell` is played.
    pub fn flips(mut self, cell: Cell, flipped: impl IntoIterator<Item = Cell>) -> Self {
        self.flips.push((cell, flipped.into_iter().collect()));
        self
    }

    /// Make both generators return `cell` for `side`, legal or not.
    pub fn generated_move(mut self, side: Side, cell: Cell) -> Self {
        self.forced[side] = Some(cell);
        self
    }

    /// Set the result reported by `winner`.
    pub fn outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = outcome;
        self
    }

    /// Build the engine. `seed` drives the random generator.
    pub fn build(self, seed: u64) -> ScriptedEngine {
        let initial_legal: SideMap<FxHashSet<Cell>> =
            SideMap::from_fn(|side| self.legal[side].iter().copied().collect());

        ScriptedEngine {
            legal: initial_legal.clone(),
            initial_legal,
            flips: self.flips.into_iter().collect(),
            forced: self.forced,
            outcome: self.outcome,
            current: Side::Black,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            history: Vec::new(),
            apply_calls: 0,
            pass_calls: 0,
            reset_calls: 0,
            generate_calls: 0,
            winner_calls: std::cell::Cell::new(0),
            last_search_budget: None,
        }
    }
}

impl ScriptedEngine {
    /// Moves played since the last reset, in order.
    #[must_use]
    pub fn history(&self) -> &[(Side, Cell)] {
        &self.history
    }

    /// Legal cells still available to `side`, in index order.
    #[must_use]
    pub fn legal_cells(&self, side: Side) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.legal[side].iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    /// Number of `apply_move` calls since construction.
    #[must_use]
    pub fn apply_calls(&self) -> usize {
        self.apply_calls
    }

    /// Number of `pass_turn` calls since construction.
    #[must_use]
    pub fn pass_calls(&self) -> usize {
        self.pass_calls
    }

    /// Number of `reset` calls since construction.
    #[must_use]
    pub fn reset_calls(&self) -> usize {
        self.reset_calls
    }

    /// Number of generator calls (random and search) since construction.
    #[must_use]
    pub fn generate_calls(&self) -> usize {
        self.generate_calls
    }

    /// Number of `winner` calls since construction.
    #[must_use]
    pub fn winner_calls(&self) -> usize {
        self.winner_calls.get()
    }

    /// Budget passed to the most recent search request.
    #[must_use]
    pub fn last_search_budget(&self) -> Option<u32> {
        self.last_search_budget
    }

    /// Flip set used for cells without a scripted one: the neighbour to the
    /// right, or to the left on the last column.
    fn default_flips(cell: Cell) -> FlipSet {
        let x = if cell.x() + 1 < BOARD_SIDE {
            cell.x() + 1
        } else {
            cell.x() - 1
        };
        Cell::from_xy(x, cell.y()).into_iter().collect()
    }
}

impl MoveEngine for ScriptedEngine {
    fn reset(&mut self) {
        self.reset_calls += 1;
        self.legal = self.initial_legal.clone();
        self.current = Side::Black;
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.history.clear();
    }

    fn current_side(&self) -> Side {
        self.current
    }

    fn is_legal_move(&self, side: Side, cell: Cell) -> bool {
        self.legal[side].contains(&cell)
    }

    fn has_legal_moves(&self, side: Side) -> bool {
        !self.legal[side].is_empty()
    }

    fn apply_move(&mut self, side: Side, cell: Cell) -> FlipSet {
        self.apply_calls += 1;
        for s in Side::ALL {
            self.legal[s].remove(&cell);
        }
        self.history.push((side, cell));
        self.current = side.opponent();

        match self.flips.get(&cell) {
            Some(flipped) => flipped.clone(),
            None => Self::default_flips(cell),
        }
    }

    fn pass_turn(&mut self) {
        self.pass_calls += 1;
        self.current = self.current.opponent();
    }

    fn winner(&self) -> Outcome {
        self.winner_calls.set(self.winner_calls.get() + 1);
        self.outcome
    }

    fn generate_random_move(&mut self, side: Side) -> Option<Cell> {
        self.generate_calls += 1;
        if let Some(cell) = self.forced[side] {
            return Some(cell);
        }
        let cells = self.legal_cells(side);
        cells.choose(&mut self.rng).copied()
    }

    fn generate_search_move(&mut self, side: Side, budget: u32) -> Option<Cell> {
        self.generate_calls += 1;
        self.last_search_budget = Some(budget);
        if let Some(cell) = self.forced[side] {
            return Some(cell);
        }
        self.legal_cells(side).first().copied()
    }
}
