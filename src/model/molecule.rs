use super::atom::Atom;
use super::types::BondOrder;

/// A bond between two atoms of the same [`Molecule`].
///
/// `begin` and `end` are 0-based indices into [`Molecule::atoms`]. Their
/// order is kept as given: the scene generator anchors full bonds at
/// `begin` and derives the rotation sense from `begin -> end`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bond {
    pub begin: usize,
    pub end: usize,
    pub order: BondOrder,
}

impl Bond {
    pub fn new(begin: usize, end: usize, order: BondOrder) -> Self {
        Self { begin, end, order }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
    pub title: Option<String>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    pub fn has_bonds(&self) -> bool {
        !self.bonds.is_empty()
    }

    /// Returns the begin and end atoms of `bond`, or `None` if either index
    /// is outside the atom table.
    pub fn bond_atoms(&self, bond: &Bond) -> Option<(&Atom, &Atom)> {
        Some((self.atoms.get(bond.begin)?, self.atoms.get(bond.end)?))
    }
}
