use super::types::Element;

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub element: Element,
    pub position: [f64; 3],
    pub atom_type: Option<String>,
}

impl Atom {
    pub fn new(element: Element, position: [f64; 3]) -> Self {
        Self {
            element,
            position,
            atom_type: None,
        }
    }

    pub fn with_type(mut self, atom_type: impl Into<String>) -> Self {
        self.atom_type = Some(atom_type.into());
        self
    }

    /// Label used to pick the per-atom color: the atom type when one was
    /// assigned, the element symbol otherwise.
    pub fn color_label(&self) -> &str {
        match self.atom_type.as_deref() {
            Some(label) if !label.trim().is_empty() => label.trim(),
            _ => self.element.symbol(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_label_prefers_atom_type() {
        let atom = Atom::new(Element::C, [0.0, 0.0, 0.0]).with_type("C3");
        assert_eq!(atom.color_label(), "C3");
    }

    #[test]
    fn color_label_falls_back_to_symbol() {
        let atom = Atom::new(Element::O, [0.0, 0.0, 0.0]);
        assert_eq!(atom.color_label(), "O");

        let blank = Atom::new(Element::N, [0.0, 0.0, 0.0]).with_type("  ");
        assert_eq!(blank.color_label(), "N");
    }
}
