//! Barnes-Hut quadtree over particle positions.
//!
//! Quadrants live in a flat arena and refer to their children by index.
//! A quadrant holding a single body is a leaf; bodies closer together than
//! [`POSITION_EPSILON`] are merged into one leaf.

use crate::geometry::Point;

use super::Particle;

/// Gravitational constant used by the force step.
pub const GRAVITY: f64 = 6.6726e-11;
/// Distances below this are clamped to keep close encounters finite.
pub const MIN_DISTANCE: f64 = 4.0;
/// Positions closer than this on both axes count as the same position.
pub const POSITION_EPSILON: f64 = 1e-4;

fn same_position(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() <= POSITION_EPSILON && (a.y - b.y).abs() <= POSITION_EPSILON
}

/// Gravitational pull exerted on a body at `at` with mass `mass` by a point
/// mass `other_mass` at `other`.
pub fn gravity_force(at: Point, mass: f64, other: Point, other_mass: f64) -> Point {
    if same_position(at, other) {
        return Point::origin();
    }
    let dist = at.distance(&other).max(MIN_DISTANCE);
    (other - at) * (GRAVITY * mass * other_mass / (dist * dist * dist))
}

/// Square region of the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrant {
    /// Center of mass of every body below this quadrant.
    pub center: Point,
    pub mass: f64,
    /// Lower-left corner.
    pub corner: Point,
    pub len: f64,
    pub bodies: usize,
    /// Lower-left, lower-right, upper-left, upper-right.
    children: [Option<usize>; 4],
}

impl Quadrant {
    fn leaf(center: Point, mass: f64, corner: Point, len: f64) -> Self {
        Self {
            center,
            mass,
            corner,
            len,
            bodies: 1,
            children: [None; 4],
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.bodies == 1
    }

    /// Child slot containing `p`, with that child's corner and side length.
    fn child_slot(&self, p: Point) -> (usize, Point, f64) {
        let half = self.len / 2.0;
        let mut corner = self.corner;
        let mut slot = 0;
        if p.x > corner.x + half {
            slot += 1;
            corner.x += half;
        }
        if p.y > corner.y + half {
            slot += 2;
            corner.y += half;
        }
        (slot, corner, half)
    }
}

#[derive(Debug, Clone)]
pub struct Quadtree {
    nodes: Vec<Quadrant>,
}

impl Quadtree {
    /// Builds the tree over the square `[-radius, radius]²`. Returns `None`
    /// for an empty particle list.
    pub fn build(particles: &[Particle], radius: f64) -> Option<Self> {
        let (first, rest) = particles.split_first()?;
        let corner = Point::new(-radius, -radius);
        let mut tree = Self {
            nodes: vec![Quadrant::leaf(first.position, first.mass, corner, 2.0 * radius)],
        };
        for p in rest {
            tree.insert(p.position, p.mass);
        }
        tree.update_center(0);
        Some(tree)
    }

    pub fn root(&self) -> &Quadrant {
        &self.nodes[0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, quadrant: Quadrant) -> usize {
        self.nodes.push(quadrant);
        self.nodes.len() - 1
    }

    fn insert(&mut self, position: Point, mass: f64) {
        let mut node = 0;
        loop {
            let quad = self.nodes[node];
            if quad.is_leaf() {
                if same_position(quad.center, position) || quad.len / 2.0 <= POSITION_EPSILON {
                    self.nodes[node].mass += mass;
                    return;
                }
                // Push the resident body down into its own child.
                let (slot, corner, len) = quad.child_slot(quad.center);
                let child = self.push(Quadrant::leaf(quad.center, quad.mass, corner, len));
                self.nodes[node].children[slot] = Some(child);
            }

            let quad = &mut self.nodes[node];
            quad.mass += mass;
            quad.bodies += 1;
            let (slot, corner, len) = quad.child_slot(position);
            let next = quad.children[slot];
            match next {
                Some(child) => node = child,
                None => {
                    let child = self.push(Quadrant::leaf(position, mass, corner, len));
                    self.nodes[node].children[slot] = Some(child);
                    return;
                }
            }
        }
    }

    /// Recomputes centers of mass below `node`; returns the mass-weighted
    /// position sum of the subtree.
    fn update_center(&mut self, node: usize) -> Point {
        let quad = self.nodes[node];
        if quad.is_leaf() {
            return quad.center * quad.mass;
        }
        let mut sum = Point::origin();
        for child in quad.children.into_iter().flatten() {
            sum += self.update_center(child);
        }
        self.nodes[node].center = sum / quad.mass;
        sum
    }

    /// Approximate gravitational force on `particle`. A quadrant whose side
    /// length over its distance to the particle falls below `theta` is
    /// treated as a single point mass.
    pub fn force_on(&self, particle: &Particle, theta: f64) -> Point {
        let mut force = Point::origin();
        self.accumulate_force(0, particle, theta, &mut force);
        force
    }

    fn accumulate_force(&self, node: usize, particle: &Particle, theta: f64, force: &mut Point) {
        let quad = &self.nodes[node];
        let pull = || gravity_force(particle.position, particle.mass, quad.center, quad.mass);
        if quad.is_leaf() {
            *force += pull();
            return;
        }
        let dist = particle.position.distance(&quad.center);
        if quad.len / dist < theta {
            *force += pull();
        } else {
            for child in quad.children.iter().flatten() {
                self.accumulate_force(*child, particle, theta, force);
            }
        }
    }
}
