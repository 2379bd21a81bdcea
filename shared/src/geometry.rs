//! Wireframe geometry for the hero orb: an icosahedron, rotation matrices and
//! a perspective camera that projects edges onto a 2D canvas.

use crate::interaction::RotationState;

pub type Vec3 = [f64; 3];
pub type Mat3 = [[f64; 3]; 3];

/// Multiplies a 3x3 matrix by a 3-dimensional vector
pub fn multiply_matrix_vector(matrix: &Mat3, vector: &Vec3) -> Vec3 {
    let mut result = [0.0; 3];
    for i in 0..3 {
        for j in 0..3 {
            result[i] += matrix[i][j] * vector[j];
        }
    }
    result
}

/// Multiplies two 3x3 matrices
pub fn multiply_matrices(a: &Mat3, b: &Mat3) -> Mat3 {
    let mut result = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    result
}

pub fn rotation_x(angle: f64) -> Mat3 {
    let (sin, cos) = angle.sin_cos();
    [[1.0, 0.0, 0.0], [0.0, cos, -sin], [0.0, sin, cos]]
}

pub fn rotation_y(angle: f64) -> Mat3 {
    let (sin, cos) = angle.sin_cos();
    [[cos, 0.0, sin], [0.0, 1.0, 0.0], [-sin, 0.0, cos]]
}

/// Object orientation (X then Y, applied to the mesh in its own frame) followed
/// by the camera orbit around the vertical axis.
pub fn view_matrix(orientation: RotationState, orbit_angle: f64) -> Mat3 {
    let object = multiply_matrices(&rotation_x(orientation.angle_x), &rotation_y(orientation.angle_y));
    multiply_matrices(&rotation_y(-orbit_angle), &object)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Icosahedron {
    vertices: Vec<Vec3>,
    edges: Vec<(usize, usize)>,
}

impl Icosahedron {
    /// Radius of the hero orb in world units.
    pub const ORB_RADIUS: f64 = 1.45;

    pub fn new(radius: f64) -> Self {
        let t = (1.0 + 5.0_f64.sqrt()) / 2.0;
        let raw: [Vec3; 12] = [
            [-1.0, t, 0.0],
            [1.0, t, 0.0],
            [-1.0, -t, 0.0],
            [1.0, -t, 0.0],
            [0.0, -1.0, t],
            [0.0, 1.0, t],
            [0.0, -1.0, -t],
            [0.0, 1.0, -t],
            [t, 0.0, -1.0],
            [t, 0.0, 1.0],
            [-t, 0.0, -1.0],
            [-t, 0.0, 1.0],
        ];

        // Neighbours sit exactly 2 apart before normalization.
        let mut edges = Vec::with_capacity(30);
        for a in 0..raw.len() {
            for b in (a + 1)..raw.len() {
                let distance_squared: f64 = (0..3).map(|i| (raw[a][i] - raw[b][i]).powi(2)).sum();
                if (distance_squared - 4.0).abs() < 1e-9 {
                    edges.push((a, b));
                }
            }
        }

        let scale = radius / (1.0 + t * t).sqrt();
        let vertices = raw
            .iter()
            .map(|&[x, y, z]| [x * scale, y * scale, z * scale])
            .collect();

        Self { vertices, edges }
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Distance from the camera to the origin along +Z.
    pub distance: f64,
    pub fov_y_degrees: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            distance: 4.0,
            fov_y_degrees: 75.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    /// Distance in front of the camera.
    pub depth: f64,
}

impl Camera {
    /// Canvas coordinates of a view-space point, or `None` behind the camera.
    pub fn project(&self, point: Vec3, width: f64, height: f64) -> Option<ProjectedPoint> {
        let depth = self.distance - point[2];
        if depth <= f64::EPSILON {
            return None;
        }
        let focal = 1.0 / (self.fov_y_degrees.to_radians() / 2.0).tan();
        let scale = focal * height / 2.0 / depth;
        Some(ProjectedPoint {
            x: width / 2.0 + point[0] * scale,
            y: height / 2.0 - point[1] * scale,
            depth,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedEdge {
    pub from: (f64, f64),
    pub to: (f64, f64),
    /// Mean depth of both endpoints.
    pub depth: f64,
}

/// Projects every edge of `mesh`, ordered far to near so nearer edges paint on top.
pub fn project_wireframe(
    mesh: &Icosahedron,
    view: &Mat3,
    camera: &Camera,
    width: f64,
    height: f64,
) -> Vec<ProjectedEdge> {
    let projected: Vec<Option<ProjectedPoint>> = mesh
        .vertices()
        .iter()
        .map(|vertex| camera.project(multiply_matrix_vector(view, vertex), width, height))
        .collect();

    let mut edges: Vec<ProjectedEdge> = mesh
        .edges()
        .iter()
        .filter_map(|&(a, b)| {
            let (from, to) = (projected[a]?, projected[b]?);
            Some(ProjectedEdge {
                from: (from.x, from.y),
                to: (to.x, to.y),
                depth: (from.depth + to.depth) / 2.0,
            })
        })
        .collect();
    edges.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    edges
}

/// Opacity for an edge at `depth`: 1.0 at `near`, fading to 0.35 at `far`.
pub fn depth_alpha(depth: f64, near: f64, far: f64) -> f64 {
    if far <= near {
        return 1.0;
    }
    let t = ((depth - near) / (far - near)).clamp(0.0, 1.0);
    1.0 - 0.65 * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn close(a: Vec3, b: Vec3) -> bool {
        (0..3).all(|i| (a[i] - b[i]).abs() < 1e-9)
    }

    #[test]
    fn icosahedron_topology() {
        let mesh = Icosahedron::new(Icosahedron::ORB_RADIUS);
        assert_eq!(mesh.vertices().len(), 12);
        assert_eq!(mesh.edges().len(), 30);
        for vertex in 0..12 {
            let degree = mesh.edges().iter().filter(|(a, b)| *a == vertex || *b == vertex).count();
            assert_eq!(degree, 5);
        }
    }

    #[test]
    fn vertices_lie_on_radius() {
        let mesh = Icosahedron::new(1.45);
        for [x, y, z] in mesh.vertices() {
            assert!(((x * x + y * y + z * z).sqrt() - 1.45).abs() < 1e-9);
        }
    }

    #[test]
    fn quarter_turns() {
        assert!(close(multiply_matrix_vector(&rotation_y(FRAC_PI_2), &[1.0, 0.0, 0.0]), [0.0, 0.0, -1.0]));
        assert!(close(multiply_matrix_vector(&rotation_x(FRAC_PI_2), &[0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn orbit_cancels_matching_spin() {
        let view = view_matrix(RotationState { angle_x: 0.0, angle_y: 0.8 }, 0.8);
        assert!(close(multiply_matrix_vector(&view, &[0.3, -1.2, 0.7]), [0.3, -1.2, 0.7]));
    }

    #[test]
    fn origin_projects_to_canvas_center() {
        let point = Camera::default().project([0.0, 0.0, 0.0], 400.0, 300.0).unwrap();
        assert_eq!((point.x, point.y), (200.0, 150.0));
        assert_eq!(point.depth, 4.0);
    }

    #[test]
    fn points_behind_camera_are_dropped() {
        assert!(Camera::default().project([0.0, 0.0, 5.0], 400.0, 300.0).is_none());
    }

    #[test]
    fn edges_are_painted_far_to_near() {
        let mesh = Icosahedron::new(Icosahedron::ORB_RADIUS);
        let view = view_matrix(RotationState { angle_x: 0.4, angle_y: 1.1 }, 0.2);
        let edges = project_wireframe(&mesh, &view, &Camera::default(), 320.0, 320.0);
        assert_eq!(edges.len(), 30);
        assert!(edges.windows(2).all(|pair| pair[0].depth >= pair[1].depth));
    }

    #[test]
    fn nearer_edges_are_more_opaque() {
        let (near, far) = (2.55, 5.45);
        assert_eq!(depth_alpha(near, near, far), 1.0);
        assert!((depth_alpha(far, near, far) - 0.35).abs() < 1e-12);
        assert!(depth_alpha(3.0, near, far) > depth_alpha(4.0, near, far));
    }
}
