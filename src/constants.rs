//! Constants for board geometry and evaluation weights.
//!
//! The evaluation weights are deliberately asymmetric: blocking the
//! opponent's four-in-a-row outweighs every constructive option the
//! engine has, because an unblocked four wins on the very next move.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN). The scanning logic is written for this fixed size.
pub const N: usize = 8;

/// Number of stones in a row needed to win.
pub const WIN_LEN: usize = 5;

// =============================================================================
// Evaluation Weights
// =============================================================================

/// Sentinel score for a five-in-a-row already on the board.
/// Dominates every weighted term below.
pub const MAX_SCORE: i32 = 100_000;

/// Weight per opponent run of length four, open or semi-open alike.
/// The two threat levels are folded into one term; the Python original
/// scores them identically and that behavior is kept.
pub const OPP_FOUR_WEIGHT: i32 = -10_000;

/// Weight per own open four.
pub const OWN_OPEN_FOUR_WEIGHT: i32 = 500;

/// Weight per own semi-open four.
pub const OWN_SEMI_FOUR_WEIGHT: i32 = 50;

/// Weight per opponent open three.
pub const OPP_OPEN_THREE_WEIGHT: i32 = -100;

/// Weight per opponent semi-open three.
pub const OPP_SEMI_THREE_WEIGHT: i32 = -30;

/// Weight per own open three.
pub const OWN_OPEN_THREE_WEIGHT: i32 = 50;

/// Weight per own semi-open three.
pub const OWN_SEMI_THREE_WEIGHT: i32 = 10;
