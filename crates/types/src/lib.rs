//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine and its hosts.
//! All types are pure data structures with no external dependencies, so they can be
//! used by the rules engine, a renderer, or any other host without pulling in the core.
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Shape grid**: every piece lives in a fixed 4x4 occupancy grid
//!
//! # Palette
//!
//! Settled cells and pieces store a color *index* into [`PALETTE`]. Index 0 is the
//! empty sentinel and is never assigned to a piece; indices 1..=9 are named colors
//! whose names are opaque to the engine.
//!
//! # Examples
//!
//! ```
//! use plaintris_types::{GameAction, ShapeKind, FIELD_HEIGHT, FIELD_WIDTH, PALETTE};
//!
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//!
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//!
//! assert_eq!(PALETTE[0], "");
//! ```

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: u8 = 10;

/// Field height in cells (20 rows)
pub const FIELD_HEIGHT: u8 = 20;

/// Side length of the square occupancy grid every shape lives in
pub const SHAPE_SIZE: usize = 4;

/// Number of distinct shape templates
pub const SHAPE_COUNT: usize = 7;

/// Fixed ordered palette. Index 0 is the empty/no-color sentinel.
pub const PALETTE: [&str; 10] = [
    "",
    "Tomato",
    "yellow",
    "limegreen",
    "royalblue",
    "aqua",
    "orange",
    "Lavender",
    "Violet",
    "HotPink",
];

/// Color index of an empty cell
pub const EMPTY: u8 = 0;

/// Number of usable (non-empty) palette colors
pub const COLOR_COUNT: u8 = (PALETTE.len() - 1) as u8;

/// Points per cleared line, before the multi-line bonus
pub const LINE_CLEAR_POINTS: u32 = 5;

/// Multi-line bonus indexed by lines cleared at once (0..=4).
///
/// Clears of more than four lines earn `10 * lines` instead.
pub const LINE_CLEAR_BONUS: [u32; 5] = [0, 0, 5, 15, 35];

/// Flat score awarded each time a piece settles
pub const PLACEMENT_BONUS: u32 = 1;

/// Lines needed to advance one (advisory) level
pub const LINES_PER_LEVEL: u32 = 10;

/// Default host tick interval in milliseconds.
///
/// Gravity is evaluated on every second tick, so a piece falls one row per
/// `2 * DEFAULT_TICK_MS`.
pub const DEFAULT_TICK_MS: u64 = 250;

/// Resolve a color index to its palette name.
///
/// Unknown indices resolve to the empty sentinel.
///
/// ```
/// use plaintris_types::color_name;
///
/// assert_eq!(color_name(1), "Tomato");
/// assert_eq!(color_name(0), "");
/// assert_eq!(color_name(200), "");
/// ```
pub fn color_name(index: u8) -> &'static str {
    PALETTE.get(index as usize).copied().unwrap_or(PALETTE[0])
}

/// The seven shape templates, in template order
///
/// - **I**: straight bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **L**: L-shaped, foot on the left when spawned unrotated
/// - **J**: J-shaped (mirror of L)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    L,
    J,
}

impl ShapeKind {
    /// All kinds, in template order
    pub const ALL: [ShapeKind; SHAPE_COUNT] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::L,
        ShapeKind::J,
    ];

    /// Parse shape kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
        }
    }
}

/// Actions a host can apply to the engine
///
/// Human input and timers both map onto these; the engine never reads input itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise (no wall kicks)
    RotateRight,
    /// Advance the game clock by one tick
    Tick,
    /// Start a fresh game
    Reset,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use plaintris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATERIGHT"), Some(GameAction::RotateRight));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotateright" => Some(GameAction::RotateRight),
            "tick" => Some(GameAction::Tick),
            "reset" => Some(GameAction::Reset),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::RotateRight => "rotateRight",
            GameAction::Tick => "tick",
            GameAction::Reset => "reset",
        }
    }
}

/// Something that happened inside a `reset()` or `tick()` call.
///
/// Events are returned to the caller instead of being pushed through callbacks, so a
/// host reacts to them after the engine call has completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new active piece was spawned
    PieceSpawned { shape: ShapeKind, color: u8 },
    /// The active piece settled into the field
    PieceLocked { lines_cleared: u32 },
    /// The freshly spawned piece did not fit; the game is over
    GameOver,
}
