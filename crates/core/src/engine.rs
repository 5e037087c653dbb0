//! Engine module - the game state machine
//!
//! Ties the field, the active piece and both pickers together. A host drives it by
//! calling [`GameEngine::tick`] on a fixed cadence and the movement methods on input.
//!
//! Each tick first collapses empty field rows, then (on even ticks only) advances
//! the piece: spawn when there is none, lock when it cannot fall, otherwise drop it
//! one row.

use arrayvec::ArrayVec;
use rand::{Rng, RngCore, SeedableRng};
use tracing::{debug, info, trace};

use crate::field::Field;
use crate::rng::{ColorPicker, ShapePicker, SimpleRng};
use crate::scoring::{level_for_lines, line_clear_score, PLACEMENT_BONUS};
use crate::shape::Shape;
use crate::types::{color_name, GameAction, GameEvent, EMPTY, FIELD_HEIGHT, FIELD_WIDTH};

/// Events produced by one engine call
pub type Events = ArrayVec<GameEvent, 4>;

/// Where the engine is in its piece lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceState {
    /// The last piece settled; the next even tick spawns a new one
    NoActivePiece,
    /// A piece is in play
    Falling(Shape),
    /// A spawned piece did not fit. Terminal until `reset()`.
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine<R = SimpleRng> {
    field: Field,
    state: PieceState,
    shapes: ShapePicker,
    colors: ColorPicker,
    rng: R,
    score: u32,
    lines: u32,
    tick_counter: u32,
}

impl GameEngine<SimpleRng> {
    /// Create a game driven by the default generator
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SimpleRng::seed_from_u64(seed))
    }
}

impl Default for GameEngine<SimpleRng> {
    fn default() -> Self {
        Self::with_seed(1)
    }
}

impl<R: RngCore> GameEngine<R> {
    /// Create a game that owns `rng`, ready to play.
    ///
    /// The field is allocated and the first piece spawned here, so there is no
    /// "before reset" state. The spawn event of this first piece is not reported.
    pub fn new(rng: R) -> Self {
        let mut engine = Self {
            field: Field::new(),
            state: PieceState::NoActivePiece,
            shapes: ShapePicker::new(),
            colors: ColorPicker::new(),
            rng,
            score: 0,
            lines: 0,
            tick_counter: 0,
        };
        engine.reset();
        engine
    }

    /// Start over: empty field, zeroed counters, first piece spawned.
    ///
    /// The pickers keep their stacks, so bags continue across games.
    pub fn reset(&mut self) -> Events {
        self.field.clear();
        self.score = 0;
        self.lines = 0;
        self.tick_counter = 0;
        self.state = PieceState::NoActivePiece;

        let mut events = Events::new();
        self.spawn_piece(&mut events);
        info!("game reset");
        events
    }

    /// Advance the game by one tick. No-op once the game is over.
    pub fn tick(&mut self) -> Events {
        let mut events = Events::new();
        if self.is_game_over() {
            return events;
        }

        self.tick_counter = self.tick_counter.wrapping_add(1);
        self.field.shift_down();

        if self.tick_counter % 2 != 0 {
            return events;
        }

        match self.state {
            PieceState::NoActivePiece => {
                let piece = self.spawn_piece(&mut events);
                if !self.field.can_place(&piece, piece.y, piece.x) {
                    // Commit the overlapping piece so it stays visible.
                    self.field.place(&piece);
                    self.state = PieceState::GameOver;
                    events.push(GameEvent::GameOver);
                    info!(score = self.score, lines = self.lines, "game over");
                }
            }
            PieceState::Falling(piece) => {
                if self.field.can_place(&piece, piece.y + 1, piece.x) {
                    self.state = PieceState::Falling(Shape {
                        y: piece.y + 1,
                        ..piece
                    });
                } else {
                    self.lock_piece(piece, &mut events);
                }
            }
            PieceState::GameOver => {}
        }

        events
    }

    /// Move the active piece one column left. Returns true if it moved.
    pub fn move_left(&mut self) -> bool {
        let PieceState::Falling(piece) = &mut self.state else {
            return false;
        };

        if !self.field.can_place(piece, piece.y, piece.x - 1) {
            trace!(x = piece.x, "move left blocked");
            return false;
        }

        let before = piece.x;
        piece.x = (piece.x - 1).max(0);
        piece.x != before
    }

    /// Move the active piece one column right. Returns true if it moved.
    pub fn move_right(&mut self) -> bool {
        let PieceState::Falling(piece) = &mut self.state else {
            return false;
        };

        if !self.field.can_place(piece, piece.y, piece.x + 1) {
            trace!(x = piece.x, "move right blocked");
            return false;
        }

        let before = piece.x;
        piece.x = (piece.x + 1).min(FIELD_WIDTH as i8 - piece.width());
        piece.x != before
    }

    /// Rotate the active piece clockwise in place.
    ///
    /// A single attempt at the current position; when the rotated piece does not
    /// fit the piece is restored unchanged. Returns true if it rotated.
    pub fn rotate_right(&mut self) -> bool {
        let PieceState::Falling(piece) = &mut self.state else {
            return false;
        };

        let before = *piece;
        piece.rotate_right();
        if !self.field.can_place(piece, piece.y, piece.x) {
            trace!(kind = before.kind.as_str(), "rotation blocked");
            *piece = before;
            return false;
        }

        true
    }

    /// Apply a host action
    pub fn apply_action(&mut self, action: GameAction) -> Events {
        match action {
            GameAction::MoveLeft => {
                self.move_left();
                Events::new()
            }
            GameAction::MoveRight => {
                self.move_right();
                Events::new()
            }
            GameAction::RotateRight => {
                self.rotate_right();
                Events::new()
            }
            GameAction::Tick => self.tick(),
            GameAction::Reset => self.reset(),
        }
    }

    /// Draw the next shape and color, give it 0-2 extra turns and center it on row 0.
    fn spawn_piece(&mut self, events: &mut Events) -> Shape {
        let kind = self.shapes.next(&mut self.rng);
        let color = self.colors.next(&mut self.rng);

        let mut piece = Shape::new(kind);
        piece.color = color;
        for _ in 0..self.rng.gen_range(0..3) {
            piece.rotate_right();
        }
        piece.x = (FIELD_WIDTH as i8 - piece.width()) / 2;
        piece.y = 0;

        self.state = PieceState::Falling(piece);
        events.push(GameEvent::PieceSpawned { shape: kind, color });
        debug!(kind = kind.as_str(), color, x = piece.x, "piece spawned");

        piece
    }

    /// Commit the piece, clear full lines and score.
    fn lock_piece(&mut self, piece: Shape, events: &mut Events) {
        self.field.place(&piece);

        let cleared = self.field.remove_full_lines().len() as u32;
        if cleared > 0 {
            self.lines += cleared;
            self.score += line_clear_score(cleared);
            info!(cleared, lines = self.lines, score = self.score, "lines cleared");
        }
        self.score += PLACEMENT_BONUS;

        self.state = PieceState::NoActivePiece;
        events.push(GameEvent::PieceLocked {
            lines_cleared: cleared,
        });
        debug!(kind = piece.kind.as_str(), x = piece.x, y = piece.y, "piece locked");
    }
}

impl<R> GameEngine<R> {
    pub fn width(&self) -> u8 {
        FIELD_WIDTH
    }

    pub fn height(&self) -> u8 {
        FIELD_HEIGHT
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines
    }

    /// Advisory level, `lines / 10 + 1`. Does not affect gravity.
    pub fn level(&self) -> u32 {
        level_for_lines(self.lines)
    }

    pub fn tick_counter(&self) -> u32 {
        self.tick_counter
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.state, PieceState::GameOver)
    }

    pub fn state(&self) -> &PieceState {
        &self.state
    }

    /// The piece in play, if any
    pub fn active(&self) -> Option<&Shape> {
        match &self.state {
            PieceState::Falling(piece) => Some(piece),
            _ => None,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    #[cfg(test)]
    pub(crate) fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: PieceState) {
        self.state = state;
    }

    /// Color index shown at (row, col): the active piece wins over the field.
    ///
    /// Out-of-range coordinates read as empty.
    pub fn color_index(&self, row: i8, col: i8) -> u8 {
        if let Some(piece) = self.active() {
            let r = i16::from(row) - i16::from(piece.y);
            let c = i16::from(col) - i16::from(piece.x);
            if (0..i16::from(piece.height())).contains(&r)
                && (0..i16::from(piece.width())).contains(&c)
                && piece.is_filled(r as usize, c as usize)
            {
                return piece.color;
            }
        }

        self.field.get(row, col).unwrap_or(EMPTY)
    }

    /// Palette name shown at (row, col)
    pub fn color(&self, row: i8, col: i8) -> &'static str {
        color_name(self.color_index(row, col))
    }
}
