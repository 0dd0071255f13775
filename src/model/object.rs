use super::molecule::Molecule;

/// A chemical object handed over by a host conversion layer.
///
/// Only [`ChemObject::Molecule`] can be turned into a scene; the other
/// variants exist so that callers resolve the record kind once, at the
/// boundary, and get a typed error for anything else.
#[derive(Debug, Clone)]
pub enum ChemObject {
    Molecule(Molecule),
    Reaction {
        reactants: Vec<Molecule>,
        products: Vec<Molecule>,
    },
    Other {
        kind: String,
    },
}

impl ChemObject {
    pub fn kind(&self) -> &str {
        match self {
            ChemObject::Molecule(_) => "molecule",
            ChemObject::Reaction { .. } => "reaction",
            ChemObject::Other { kind } => kind,
        }
    }

    pub fn as_molecule(&self) -> Option<&Molecule> {
        match self {
            ChemObject::Molecule(mol) => Some(mol),
            _ => None,
        }
    }
}

impl From<Molecule> for ChemObject {
    fn from(mol: Molecule) -> Self {
        ChemObject::Molecule(mol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names() {
        assert_eq!(ChemObject::from(Molecule::new()).kind(), "molecule");
        let rxn = ChemObject::Reaction {
            reactants: Vec::new(),
            products: Vec::new(),
        };
        assert_eq!(rxn.kind(), "reaction");
        assert!(rxn.as_molecule().is_none());
        let other = ChemObject::Other {
            kind: "grid".into(),
        };
        assert_eq!(other.kind(), "grid");
    }
}
