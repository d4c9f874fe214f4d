//! The rulebook: named rules, registered once, read-only afterwards.

use kolam_core::PathSet;
use kolam_lattice::Lattice;

use crate::error::RuleError;
use crate::heading::Rotation;
use crate::table::TurnTable;
use crate::walk;

/// A named generation rule: an identifier plus its turn table.
#[derive(Copy, Clone, Debug)]
pub struct Rule {
    name: &'static str,
    table: TurnTable,
}

impl Rule {
    /// The rule's registered identifier.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Synthesize the path set for a lattice under this rule.
    pub fn generate(&self, lattice: &Lattice) -> Result<PathSet, RuleError> {
        walk::trace(lattice, &self.table)
    }
}

/// The fixed enumeration of registered rules.
///
/// Populated once by [`Rulebook::standard`] and never mutated, so it can be
/// shared freely across parallel generation requests. Listing order is the
/// registration order.
#[derive(Clone, Debug)]
pub struct Rulebook {
    rules: Vec<Rule>,
}

impl Default for Rulebook {
    fn default() -> Self {
        Self::standard()
    }
}

impl Rulebook {
    /// The built-in rules.
    ///
    /// Each entry is a distinct turn table; rotation and skip together decide
    /// the loop structure. Skip-1 tables always turn at interior dots and
    /// yield tight interlocked cell loops; skip-2 tables run straight through
    /// interior dots and yield long serpentine windings. The two rotations
    /// are mirror images.
    pub fn standard() -> Self {
        Self {
            rules: vec![
                Rule { name: "sikku_like", table: TurnTable::new(Rotation::Ccw, 1) },
                Rule { name: "kambi_mirror", table: TurnTable::new(Rotation::Cw, 1) },
                Rule { name: "suzhi_weave", table: TurnTable::new(Rotation::Ccw, 2) },
                Rule { name: "nelivu_cross", table: TurnTable::new(Rotation::Cw, 2) },
            ],
        }
    }

    /// Registered rule names, in listing order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name)
    }

    /// Look up a rule by name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Generate a path set for `lattice` under the named rule.
    pub fn generate(&self, name: &str, lattice: &Lattice) -> Result<PathSet, RuleError> {
        let rule = self
            .get(name)
            .ok_or_else(|| RuleError::UnknownRule { name: name.to_string() })?;
        rule.generate(lattice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rules_listed_in_order() {
        let book = Rulebook::standard();
        let names: Vec<_> = book.names().collect();
        assert_eq!(
            names,
            ["sikku_like", "kambi_mirror", "suzhi_weave", "nelivu_cross"]
        );
    }

    #[test]
    fn unknown_rule_fails() {
        let book = Rulebook::standard();
        let lat = Lattice::build(3, 3, 1.0).unwrap();
        let err = book.generate("nonexistent_rule", &lat).unwrap_err();
        assert_eq!(err, RuleError::UnknownRule { name: "nonexistent_rule".into() });
    }

    #[test]
    fn every_rule_covers_every_grid() {
        let book = Rulebook::standard();
        for (rows, cols) in [(2, 2), (3, 3), (2, 5), (1, 4)] {
            let lat = Lattice::build(rows, cols, 1.0).unwrap();
            for rule in book.names().collect::<Vec<_>>() {
                let set = book.generate(rule, &lat).unwrap();
                assert!(!set.is_empty(), "{rule} on {rows}x{cols}");
                let arc_count: usize = set
                    .paths()
                    .iter()
                    .flat_map(|p| p.commands())
                    .filter(|c| matches!(c, kolam_core::PathCmd::Arc { .. }))
                    .count();
                assert_eq!(arc_count, 2 * lat.edge_count(), "{rule} on {rows}x{cols}");
            }
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let book = Rulebook::standard();
        let lat = Lattice::build(4, 4, 1.5).unwrap();
        for rule in ["sikku_like", "suzhi_weave"] {
            assert_eq!(
                book.generate(rule, &lat).unwrap(),
                book.generate(rule, &lat).unwrap()
            );
        }
    }

    #[test]
    fn mirror_rules_differ() {
        let book = Rulebook::standard();
        let lat = Lattice::build(3, 3, 1.0).unwrap();
        let ccw = book.generate("sikku_like", &lat).unwrap();
        let cw = book.generate("kambi_mirror", &lat).unwrap();
        assert_ne!(ccw, cw);
    }
}
