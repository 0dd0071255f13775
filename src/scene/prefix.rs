/// Prefix used when a molecule carries no title at all.
pub const UNTITLED_PREFIX: &str = "Unknown";

/// Prefix used when a title is present but nothing usable is left of it.
pub const INVALID_PREFIX: &str = "InValid";

/// Derives the declaration namespace for a molecule from its title.
///
/// Keeps the part after the last path separator, cuts it at the first
/// `.`, and turns spaces and tabs into underscores, so a title such as
/// `"/data/benzene ring.mol"` becomes `benzene_ring`.
pub fn make_prefix(title: Option<&str>) -> String {
    let Some(title) = title else {
        return UNTITLED_PREFIX.to_string();
    };

    let base = title
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(title);
    let stem = base.split('.').next().unwrap_or(base);

    let prefix: String = stem
        .chars()
        .map(|c| if c == ' ' || c == '\t' { '_' } else { c })
        .collect();

    if prefix.is_empty() {
        INVALID_PREFIX.to_string()
    } else {
        prefix
    }
}

/// Prefix of the molecule written at position `sequence` of a stream.
///
/// The first molecule (`sequence == 0`) keeps the bare prefix; every later
/// one gets the sequence number appended so identical titles do not
/// collide.
pub fn scoped_prefix(title: Option<&str>, sequence: usize) -> String {
    let mut prefix = make_prefix(title);
    if sequence > 0 {
        prefix.push_str(&sequence.to_string());
    }
    prefix
}

/// Builds the declaration names of one molecule.
///
/// Atom numbers are 1-based, bond numbers 0-based, matching the
/// `#declare` names the POV-Ray include files expect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    prefix: String,
}

impl Namespace {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Position vector of the atom at 0-based `index`.
    pub fn position(&self, index: usize) -> String {
        format!("{}_pos_{}", self.prefix, index + 1)
    }

    /// Primitive instance of the atom at 0-based `index`.
    pub fn atom(&self, index: usize) -> String {
        format!("{}_atom{}", self.prefix, index + 1)
    }

    pub fn bond(&self, index: usize) -> String {
        format!("{}_bond{}", self.prefix, index)
    }

    pub fn atoms(&self) -> String {
        format!("{}_atoms", self.prefix)
    }

    pub fn bonds(&self) -> String {
        format!("{}_bonds", self.prefix)
    }

    pub fn center(&self) -> String {
        format!("{}_center", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_title_is_kept() {
        assert_eq!(make_prefix(Some("ethanol")), "ethanol");
    }

    #[test]
    fn strips_directories_and_extension() {
        assert_eq!(make_prefix(Some("/data/set/benzene.mol")), "benzene");
        assert_eq!(make_prefix(Some("C:\\mols\\caffeine.sdf")), "caffeine");
        assert_eq!(make_prefix(Some("archive.tar.gz")), "archive");
    }

    #[test]
    fn replaces_blanks_with_underscores() {
        assert_eq!(make_prefix(Some("benzene ring\tv2.pdb")), "benzene_ring_v2");
    }

    #[test]
    fn falls_back_on_missing_or_empty_title() {
        assert_eq!(make_prefix(None), UNTITLED_PREFIX);
        assert_eq!(make_prefix(Some("")), INVALID_PREFIX);
        assert_eq!(make_prefix(Some("dir/")), INVALID_PREFIX);
        assert_eq!(make_prefix(Some(".hidden")), INVALID_PREFIX);
    }

    #[test]
    fn later_molecules_get_a_suffix() {
        let first = scoped_prefix(Some("water"), 0);
        let second = scoped_prefix(Some("water"), 1);
        let third = scoped_prefix(Some("water"), 2);
        assert_eq!(first, "water");
        assert_eq!(second, "water1");
        assert_eq!(third, "water2");
        assert_ne!(first, second);
    }

    #[test]
    fn namespace_names() {
        let ns = Namespace::new("mol");
        assert_eq!(ns.prefix(), "mol");
        assert_eq!(ns.position(0), "mol_pos_1");
        assert_eq!(ns.atom(4), "mol_atom5");
        assert_eq!(ns.bond(0), "mol_bond0");
        assert_eq!(ns.atoms(), "mol_atoms");
        assert_eq!(ns.bonds(), "mol_bonds");
        assert_eq!(ns.center(), "mol_center");
    }
}
