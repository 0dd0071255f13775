//! Bond placement geometry.
//!
//! Bond primitives are authored as unit-length shapes lying along +X.
//! Placing one on a bond means scaling it along X to the bond length,
//! rotating it about Z so that it makes the bond's angle with +Y, rotating
//! it about Y into the bond's horizontal direction, and translating it to
//! an endpoint. [`BondGeometry`] derives the numbers for that sequence from
//! the two endpoint positions; [`BondGeometry::transforms`] turns them into
//! the ordered list of [`Transform`] steps, leaving out steps whose effect
//! is below the configured tolerance.
//!
//! Both inverse cosines clamp their argument to `[-1, 1]`, so rounding in
//! the component/norm ratio can never produce a NaN angle.

/// Which endpoint of a bond a primitive is translated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Begin,
    End,
}

/// The part of a bond a primitive covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// The whole bond, anchored at the begin atom.
    Full,
    /// The begin half, anchored at the begin atom and pointing to the
    /// midpoint.
    BeginHalf,
    /// The end half, anchored at the end atom and pointing back to the
    /// midpoint.
    EndHalf,
}

impl Segment {
    pub fn anchor(&self) -> Anchor {
        match self {
            Segment::Full | Segment::BeginHalf => Anchor::Begin,
            Segment::EndHalf => Anchor::End,
        }
    }
}

/// One step applied to a canonical primitive, in emission order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Stretch along X by this factor.
    Scale(f64),
    /// Rotate about Z by this many degrees.
    RotateZ(f64),
    /// Rotate about Y by this many degrees.
    RotateY(f64),
    /// Move to the position of the given endpoint.
    Translate(Anchor),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondGeometry {
    /// Euclidean bond length.
    pub length: f64,
    /// Length of the bond projected onto the X-Z plane.
    pub horizontal: f64,
    /// Angle between the bond vector and +Y, in radians.
    pub phi: f64,
    /// Angle between the horizontal projection and +X, in radians.
    pub theta: f64,
    /// `true` when the end atom's Z is not below the begin atom's Z.
    pub rising_z: bool,
    epsilon: f64,
}

impl BondGeometry {
    pub fn between(begin: [f64; 3], end: [f64; 3], epsilon: f64) -> Self {
        let dx = end[0] - begin[0];
        let dy = end[1] - begin[1];
        let dz = end[2] - begin[2];

        let length = (dx * dx + dy * dy + dz * dz).sqrt();
        let horizontal = (dx * dx + dz * dz).sqrt();

        let phi = if length >= epsilon {
            clamped_acos(dy / length)
        } else {
            0.0
        };
        let theta = if horizontal >= epsilon {
            clamped_acos(dx / horizontal)
        } else {
            0.0
        };

        Self {
            length,
            horizontal,
            phi,
            theta,
            rising_z: dz >= 0.0,
            epsilon,
        }
    }

    /// Coincident endpoints: nothing to scale or orient.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length < self.epsilon
    }

    pub fn scale(&self, segment: Segment) -> f64 {
        match segment {
            Segment::Full => self.length,
            Segment::BeginHalf | Segment::EndHalf => 0.5 * self.length,
        }
    }

    /// Rotation about Z, in degrees. The end half faces the opposite way.
    pub fn z_rotation(&self, segment: Segment) -> f64 {
        let toward_end = 90.0 - self.phi.to_degrees();
        match segment {
            Segment::Full | Segment::BeginHalf => toward_end,
            Segment::EndHalf => toward_end + 180.0,
        }
    }

    /// Rotation about Y, in degrees; the sign follows the bond's Z
    /// direction.
    pub fn y_rotation(&self) -> f64 {
        let theta = self.theta.to_degrees();
        if self.rising_z { -theta } else { theta }
    }

    pub fn transforms(&self, segment: Segment) -> Vec<Transform> {
        let mut steps = Vec::with_capacity(4);

        if !self.is_degenerate() {
            steps.push(Transform::Scale(self.scale(segment)));

            let z = self.z_rotation(segment);
            if z.abs() >= self.epsilon {
                steps.push(Transform::RotateZ(z));
            }

            if self.theta >= self.epsilon {
                steps.push(Transform::RotateY(self.y_rotation()));
            }
        }

        steps.push(Transform::Translate(segment.anchor()));
        steps
    }
}

fn clamped_acos(ratio: f64) -> f64 {
    ratio.clamp(-1.0, 1.0).acos()
}
