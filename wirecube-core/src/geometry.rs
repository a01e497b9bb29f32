/// Geometry primitives for wireframe rendering
use nalgebra::Point3;

/// An edge connecting two vertices by index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }
}

/// A wireframe model: a fixed vertex list plus the edges connecting them.
///
/// Both lists are set at construction and never change; edge indices are a
/// construction-time contract, not validated per frame.
#[derive(Debug, Clone)]
pub struct Wireframe {
    vertices: Vec<Point3<f64>>,
    edges: Vec<Edge>,
}

impl Wireframe {
    pub fn new(vertices: Vec<Point3<f64>>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Unit cube centered at the origin: 8 vertices with coordinates in
    /// {-1, +1}, 12 edges forming the back face, the front face, and the
    /// four lines connecting them.
    pub fn cube() -> Self {
        let vertices = vec![
            Point3::new(-1.0, -1.0, -1.0),
            Point3::new(1.0, -1.0, -1.0),
            Point3::new(1.0, 1.0, -1.0),
            Point3::new(-1.0, 1.0, -1.0),
            Point3::new(-1.0, -1.0, 1.0),
            Point3::new(1.0, -1.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(-1.0, 1.0, 1.0),
        ];

        let edges = vec![
            Edge::new(0, 1), // Back face
            Edge::new(1, 2),
            Edge::new(2, 3),
            Edge::new(3, 0),
            Edge::new(4, 5), // Front face
            Edge::new(5, 6),
            Edge::new(6, 7),
            Edge::new(7, 4),
            Edge::new(0, 4), // Connecting lines
            Edge::new(1, 5),
            Edge::new(2, 6),
            Edge::new(3, 7),
        ];

        Self::new(vertices, edges)
    }
}
