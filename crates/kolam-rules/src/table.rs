//! Per-dot transition tables.

use smallvec::SmallVec;

use crate::heading::{Heading, Rotation};

/// The headings that lead to an in-grid neighbour at one dot.
pub type HeadingSet = SmallVec<[Heading; 4]>;

/// A rule's local transition table: incoming heading → outgoing heading.
///
/// The table is cyclic: starting from the reversal of the incoming heading
/// (always an available heading, since the walk just arrived along that edge),
/// advance `skip` available headings in `rotation` order. On an interior dot
/// with `skip = 1` this is the plain fixed map
///
/// ```text
/// Cw:   N→W   E→N   S→E   W→S      (out = next-cw of reversed incoming)
/// Ccw:  N→E   E→S   S→W   W→N
/// ```
///
/// and on boundary dots the same scan restricted to the available headings.
/// Restricted to any availability set the map is the `skip`-th cyclic
/// successor — a bijection — which is what makes every walk a simple cycle.
/// The sweep side of emitted arcs follows `rotation` as well, so the thread
/// keeps dots on a consistent hand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TurnTable {
    pub rotation: Rotation,
    /// How many available headings to advance past the reversed incoming
    /// heading. Must be at least 1.
    pub skip: u8,
}

impl TurnTable {
    pub const fn new(rotation: Rotation, skip: u8) -> Self {
        Self { rotation, skip }
    }

    /// The outgoing heading for a walk arriving with `incoming` at a dot
    /// whose available headings are `available`.
    ///
    /// Total over every state the automaton can reach: `available` is
    /// non-empty (the reversed incoming heading is in it) and the cyclic scan
    /// visits all four headings, so this always yields.
    pub fn outgoing(&self, incoming: Heading, available: &HeadingSet) -> Heading {
        debug_assert!(available.contains(&incoming.opposite()));
        debug_assert!(self.skip >= 1);

        let mut h = incoming.opposite();
        let mut remaining = self.skip;
        loop {
            h = self.rotation.next(h);
            if available.contains(&h) {
                remaining -= 1;
                if remaining == 0 {
                    return h;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(headings: &[Heading]) -> HeadingSet {
        headings.iter().copied().collect()
    }

    /// Every incoming heading whose reversal is available must map to a
    /// distinct available heading, for every availability subset a grid dot
    /// can have.
    #[test]
    fn outgoing_is_bijective_on_every_availability_set() {
        let tables = [
            TurnTable::new(Rotation::Ccw, 1),
            TurnTable::new(Rotation::Cw, 1),
            TurnTable::new(Rotation::Ccw, 2),
            TurnTable::new(Rotation::Cw, 2),
        ];
        // All non-empty subsets of the four headings.
        for mask in 1u8..16 {
            let avail: HeadingSet = Heading::ALL
                .into_iter()
                .filter(|h| mask & (1 << h.index()) != 0)
                .collect();
            for table in tables {
                let mut outs: Vec<Heading> = Vec::new();
                for h in Heading::ALL {
                    if !avail.contains(&h.opposite()) {
                        continue; // unreachable incoming state at this dot
                    }
                    let out = table.outgoing(h, &avail);
                    assert!(avail.contains(&out));
                    assert!(
                        !outs.contains(&out),
                        "{table:?} repeats {out:?} on {avail:?}"
                    );
                    outs.push(out);
                }
                assert_eq!(outs.len(), avail.len());
            }
        }
    }

    #[test]
    fn interior_table_ccw() {
        let table = TurnTable::new(Rotation::Ccw, 1);
        let all = set(&Heading::ALL);
        assert_eq!(table.outgoing(Heading::North, &all), Heading::East);
        assert_eq!(table.outgoing(Heading::East, &all), Heading::South);
        assert_eq!(table.outgoing(Heading::South, &all), Heading::West);
        assert_eq!(table.outgoing(Heading::West, &all), Heading::North);
    }

    #[test]
    fn interior_table_cw() {
        let table = TurnTable::new(Rotation::Cw, 1);
        let all = set(&Heading::ALL);
        assert_eq!(table.outgoing(Heading::North, &all), Heading::West);
        assert_eq!(table.outgoing(Heading::East, &all), Heading::North);
        assert_eq!(table.outgoing(Heading::South, &all), Heading::East);
        assert_eq!(table.outgoing(Heading::West, &all), Heading::South);
    }

    #[test]
    fn degree_one_dot_reverses() {
        // End of a 1xN line: only East is available, so any walk arriving
        // (necessarily moving West) must turn around.
        let table = TurnTable::new(Rotation::Ccw, 1);
        let avail = set(&[Heading::East]);
        assert_eq!(table.outgoing(Heading::West, &avail), Heading::East);
    }

    #[test]
    fn skip_two_corner_reverses() {
        // Degree-2 corner: the second cyclic successor within a 2-element set
        // is the element itself, i.e. a reversal.
        let table = TurnTable::new(Rotation::Ccw, 2);
        let avail = set(&[Heading::East, Heading::South]); // top-left corner
        assert_eq!(table.outgoing(Heading::West, &avail), Heading::East);
        assert_eq!(table.outgoing(Heading::North, &avail), Heading::South);
    }
}
