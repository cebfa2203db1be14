//! A stochastic cellular-automaton engine for grain growth simulation.
//!
//! Cells live on a sparse two-dimensional [`Grid`] and hold opaque
//! phase values; unset cells read as the grid's default. A step rule
//! walks the grid, grows occupied phases into empty cells, and stages
//! its decisions in a [`ChangeSet`], so every cell of a step is judged
//! against the pre-step grid and the post-step grid is materialized on
//! demand. Two rules are provided: the majority-vote [`BasicRule`]
//! with a configurable sampling [`Kernel`], and the thresholded
//! [`AdvancedRule`] with a probabilistic fallback. Around the stepping
//! core sit [seeding] helpers for nucleons and shaped inclusions,
//! [boundary] detection with dilation, a serializable grid form, and a
//! raster form for color grids.
//!
//! Everything random threads an explicit generator, so a run seeded
//! with a fixed generator reproduces cell for cell.
//!
//! # Example
//!
//! ```
//! use graingrow::{seed_points, BasicRule, Grid};
//! use rand::{rngs::StdRng, Rng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut grid = Grid::new(16, 16, 0_u8);
//! grid.set_ignore(vec![0]);
//! seed_points(&mut grid, 4, &mut rng, |rng| rng.gen_range(1..=9));
//!
//! let rule = BasicRule::new().set_empty(vec![0_u8]);
//! let changes = rule.step(&grid, &mut rng);
//! assert!(changes.can_change());
//! let grown = changes.result();
//! assert!(grown.cells().len() > grid.cells().len());
//! ```
//!
//! [seeding]: seed_points
//! [boundary]: boundary_cells

mod boundary;
mod change;
mod config;
mod edge;
mod error;
mod grid;
mod neighborhood;
mod raster;
pub mod rules;
mod save;
mod seed;

pub use boundary::{boundary_cells, boundary_grid};
pub use change::ChangeSet;
pub use config::RuleDescriptor;
pub use edge::Edge;
pub use error::Error;
pub use grid::{Coord, Grid, Rgb};
pub use neighborhood::Kernel;
pub use rules::{AdvancedRule, BasicRule, StepRule};
pub use seed::{seed_circles, seed_points, seed_squares};

#[cfg(feature = "serde")]
pub use save::GridSer;
