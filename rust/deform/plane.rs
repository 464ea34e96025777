//! Flat test plane for trying the deformer

/// Vertex positions of a flat XZ plane centered on the origin.
///
/// `(subdivisions + 1)²` vertices, rows along Z, columns along X.
pub fn plane_positions(width: f64, depth: f64, subdivisions: usize) -> Vec<[f64; 3]> {
    let steps = subdivisions.max(1);
    let mut positions = Vec::with_capacity((steps + 1) * (steps + 1));

    for row in 0..=steps {
        let z = (row as f64 / steps as f64 - 0.5) * depth;
        for col in 0..=steps {
            let x = (col as f64 / steps as f64 - 0.5) * width;
            positions.push([x, 0.0, z]);
        }
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_vertex_count() {
        // Default test plane: 50 x 50 with 40 subdivisions
        assert_eq!(plane_positions(50.0, 50.0, 40).len(), 41 * 41);
    }

    #[test]
    fn test_plane_extent() {
        let plane = plane_positions(50.0, 20.0, 4);
        assert_eq!(plane[0], [-25.0, 0.0, -10.0]);
        assert_eq!(plane[plane.len() - 1], [25.0, 0.0, 10.0]);
        assert!(plane.iter().all(|p| p[1] == 0.0));
    }

    #[test]
    fn test_zero_subdivisions_still_a_quad() {
        assert_eq!(plane_positions(1.0, 1.0, 0).len(), 4);
    }
}
