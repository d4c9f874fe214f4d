//! The walk automaton.
//!
//! Walks the lattice's dart space (directed grid edges) under a rule's turn
//! table, emitting one closed arc path per cycle until every dart has been
//! traced exactly once.

use kolam_core::{Path, PathSet, Point};
use kolam_lattice::Lattice;

use crate::error::RuleError;
use crate::heading::Heading;
use crate::table::{HeadingSet, TurnTable};

/// Walk state: the dart about to be traversed.
#[derive(Copy, Clone, PartialEq, Eq)]
struct Dart {
    row: u32,
    col: u32,
    heading: Heading,
}

impl Dart {
    /// Dense id over the dart space, used for the visited record.
    ///
    /// A plain vector index keeps the visited record free of any hash-map
    /// iteration order, so enumeration is fully deterministic.
    fn id(self, cols: u32) -> usize {
        (self.row as usize * cols as usize + self.col as usize) * 4 + self.heading.index()
    }

    /// The dot this dart leads to, if it stays on the grid.
    fn target(self, rows: u32, cols: u32) -> Option<(u32, u32)> {
        let (dr, dc) = self.heading.delta();
        let r = self.row as i64 + dr;
        let c = self.col as i64 + dc;
        if r < 0 || c < 0 || r >= rows as i64 || c >= cols as i64 {
            None
        } else {
            Some((r as u32, c as u32))
        }
    }
}

/// Headings with an in-grid neighbour at dot `(row, col)`.
fn available(rows: u32, cols: u32, row: u32, col: u32) -> HeadingSet {
    let mut set = HeadingSet::new();
    for h in Heading::ALL {
        let d = Dart { row, col, heading: h };
        if d.target(rows, cols).is_some() {
            set.push(h);
        }
    }
    set
}

/// Midpoint of the edge a dart traverses.
fn edge_midpoint(origin: Point, heading: Heading, half_spacing: f32) -> Point {
    let d = heading.dir();
    Point::new(origin.x + d.x * half_spacing, origin.y + d.y * half_spacing)
}

/// Trace every dart of the lattice under `table` into a set of closed paths.
///
/// Darts are enumerated in row-major dot order with headings in
/// [`Heading::ALL`] order; each unvisited dart seeds one closed walk. A
/// lattice with no edges yields an empty set without starting the automaton.
pub(crate) fn trace(lattice: &Lattice, table: &TurnTable) -> Result<PathSet, RuleError> {
    let rows = lattice.rows();
    let cols = lattice.cols();
    let half = lattice.spacing() * 0.5;

    let mut set = PathSet::new();
    let edges = lattice.edge_count();
    if edges == 0 {
        return Ok(set);
    }

    // One step per dart when the table is well formed; the budget only trips
    // for a table that revisits darts.
    let bound = 4 * 2 * edges;
    let mut steps = 0usize;
    let mut visited = vec![false; lattice.len() * 4];

    for row in 0..rows {
        for col in 0..cols {
            for heading in Heading::ALL {
                let start = Dart { row, col, heading };
                if start.target(rows, cols).is_none() || visited[start.id(cols)] {
                    continue;
                }

                let mut path = Path::new();
                path.move_to(edge_midpoint(lattice.point(row, col), heading, half));

                let mut dart = start;
                loop {
                    steps += 1;
                    if steps > bound {
                        return Err(RuleError::NonTerminatingRule { bound });
                    }
                    visited[dart.id(cols)] = true;

                    // Arrive at the target dot and curve around it from the
                    // incoming edge midpoint to the outgoing edge midpoint.
                    let (r, c) = dart
                        .target(rows, cols)
                        .expect("walk stepped off the grid");
                    let dot = lattice.point(r, c);
                    let out = table.outgoing(dart.heading, &available(rows, cols, r, c));
                    let start_angle = dart.heading.opposite().angle();
                    let sweep = table.rotation.sweep(start_angle, out.angle());
                    path.arc(dot, half, start_angle, sweep);

                    dart = Dart { row: r, col: c, heading: out };
                    if dart == start {
                        break;
                    }
                }

                path.close();
                set.push(path);
            }
        }
    }

    Ok(set)
}
