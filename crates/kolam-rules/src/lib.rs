//! # kolam-rules - Path synthesis
//!
//! Turns a dot lattice into a set of closed drawn loops.
//!
//! The lattice is treated as a planar 4-connected grid graph. A **dart** is a
//! directed edge `(dot, heading)`. Each named rule supplies a [`TurnTable`]: a
//! local transition from the incoming heading to the outgoing heading at every
//! dot. The walk automaton follows darts under that table, closing a path when
//! it returns to its starting dart and seeding new walks until every dart has
//! been traced exactly once.
//!
//! All shipped tables act as bijections on the headings available at a dot, so
//! the dart successor function is a permutation of the dart space: walks are
//! simple cycles, termination and full coverage hold for arbitrary grids, and
//! degenerate single-row or single-column lattices need no special casing
//! (reversals render as full loops around the end dots). A step budget guards
//! against any future table that breaks this property.
//!
//! The geometry is the drawn-kolam convention: every transition at a dot is a
//! circular arc around that dot at half the lattice spacing, joining the
//! midpoints of the incoming and outgoing edges.

mod error;
mod heading;
mod rulebook;
mod table;
mod walk;

pub use error::RuleError;
pub use heading::{Heading, Rotation};
pub use rulebook::{Rule, Rulebook};
pub use table::TurnTable;
