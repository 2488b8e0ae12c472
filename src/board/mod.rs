//! Ladder boards: the rung layout, how it is generated, and how tokens
//! travel through it.
//!
//! - [`Board`]: immutable rung matrix, created once per round
//! - [`BoardGenerator`]: constrained-random generation from a `BoardSpec`
//! - [`PathResolver`]: pure, deterministic descent from a start column
//!
//! ## Example
//!
//! ```
//! use ladder_game::board::{BoardGenerator, PathResolver};
//! use ladder_game::core::{BoardSpec, LadderRng};
//!
//! let mut rng = LadderRng::new(42);
//! let spec = BoardSpec::new(4, 10).with_target_rungs(6);
//! let (board, report) = BoardGenerator::generate(&spec, &mut rng).unwrap();
//!
//! assert!(board.is_fully_covered());
//! assert_eq!(board.rung_count(), report.total_rungs());
//!
//! let arrival = PathResolver::resolve(&board, 0).unwrap();
//! assert!(arrival < 4);
//! ```

mod generator;
mod grid;
pub(crate) mod path;

pub use generator::{BoardGenerator, Degradation, GenerationReport};
pub use grid::Board;
pub use path::{PathResolver, PathTrace, Waypoint};
