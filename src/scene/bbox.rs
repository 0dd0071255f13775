use crate::model::atom::Atom;

/// Axis-aligned extents of a molecule.
///
/// The box is seeded at the coordinate origin, so it always contains
/// `(0, 0, 0)` whether or not any atom is near it. Scenes written by
/// earlier tools rely on this when they center molecules, and it is kept
/// for output compatibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            min: [0.0; 3],
            max: [0.0; 3],
        }
    }
}

impl BoundingBox {
    pub fn from_atoms(atoms: &[Atom]) -> Self {
        atoms.iter().fold(Self::default(), |mut bbox, atom| {
            bbox.include(atom.position);
            bbox
        })
    }

    pub fn include(&mut self, point: [f64; 3]) {
        for axis in 0..3 {
            if point[axis] < self.min[axis] {
                self.min[axis] = point[axis];
            }
            if point[axis] > self.max[axis] {
                self.max[axis] = point[axis];
            }
        }
    }

    /// Translation that moves the box midpoint onto the origin:
    /// `-(min + max) / 2` per axis.
    pub fn center(&self) -> [f64; 3] {
        std::array::from_fn(|axis| -(self.min[axis] + self.max[axis]) / 2.0)
    }

    /// The box grown by `margin` on every side.
    pub fn padded(&self, margin: f64) -> Self {
        Self {
            min: self.min.map(|v| v - margin),
            max: self.max.map(|v| v + margin),
        }
    }
}
