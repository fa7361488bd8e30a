//! Hard-coded mesh tables.
//!
//! All coordinates are NDC-sized (roughly a unit square centered on the
//! origin); placement and scaling happen in the per-object transform.

use figures_engine::mesh::{ColorVertex, Mesh, PositionVertex};

/// Rim of a regular decagon of radius 0.5, rounded to three decimals,
/// counter-clockwise from +X.
const DECAGON_RIM: [[f32; 2]; 10] = [
    [0.5, 0.0],
    [0.405, 0.294],
    [0.155, 0.476],
    [-0.155, 0.476],
    [-0.405, 0.294],
    [-0.5, 0.0],
    [-0.405, -0.294],
    [-0.155, -0.476],
    [0.155, -0.476],
    [0.405, -0.294],
];

/// Hue ramp around the decagon rim.
const DECAGON_RIM_COLORS: [[f32; 3]; 10] = [
    [1.0, 0.0, 0.0],
    [1.0, 0.5, 0.0],
    [1.0, 1.0, 0.0],
    [0.5, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 1.0, 0.5],
    [0.0, 0.5, 1.0],
    [0.0, 0.0, 1.0],
    [0.5, 0.0, 1.0],
    [1.0, 0.0, 1.0],
];

const HOUSE_POSITIONS: [[f32; 3]; 5] = [
    [0.5, 0.5, 0.0],   // top right
    [0.5, -0.5, 0.0],  // bottom right
    [-0.5, -0.5, 0.0], // bottom left
    [-0.5, 0.5, 0.0],  // top left
    [0.0, 0.75, 0.0],  // roof
];

const HOUSE_INDICES: [u32; 9] = [0, 1, 3, 1, 2, 3, 0, 3, 4];

const HOUSE_COLOR: [f32; 3] = [1.0, 0.5, 0.2];

const LETTER_N_POSITIONS: [[f32; 3]; 5] = [
    [-0.5, -0.5, 0.0],
    [-0.5, 0.5, 0.0],
    [0.5, 0.5, 0.0],
    [0.5, -0.5, 0.0],
    [0.0, 0.0, 0.0],
];

const LETTER_N_INDICES: [u32; 9] = [0, 1, 4, 1, 2, 4, 4, 3, 0];

/// Triangle fan around vertex 0: `0,1,2 / 0,2,3 / ... / 0,10,1`.
fn decagon_indices() -> Vec<u32> {
    let rim = DECAGON_RIM.len() as u32;
    (1..=rim)
        .flat_map(|i| [0, i, i % rim + 1])
        .collect()
}

fn decagon_positions() -> impl Iterator<Item = [f32; 3]> {
    std::iter::once([0.0, 0.0, 0.0]).chain(DECAGON_RIM.iter().map(|&[x, y]| [x, y, 0.0]))
}

/// Decagon with a white center fading to a hue ramp on the rim.
pub fn decagon_colored() -> Mesh {
    let colors = std::iter::once([1.0, 1.0, 1.0]).chain(DECAGON_RIM_COLORS);
    let vertices: Vec<ColorVertex> = decagon_positions()
        .zip(colors)
        .map(|(p, c)| ColorVertex::new(p, c))
        .collect();
    Mesh::new("decagon", &vertices, &decagon_indices())
}

/// Position-only decagon.
pub fn decagon() -> Mesh {
    let vertices: Vec<PositionVertex> = decagon_positions()
        .map(|[x, y, z]| PositionVertex::new(x, y, z))
        .collect();
    Mesh::new("decagon", &vertices, &decagon_indices())
}

/// Square with a triangular roof, uniformly orange.
pub fn house_colored() -> Mesh {
    let vertices: Vec<ColorVertex> = HOUSE_POSITIONS
        .iter()
        .map(|&p| ColorVertex::new(p, HOUSE_COLOR))
        .collect();
    Mesh::new("house", &vertices, &HOUSE_INDICES)
}

/// Position-only house.
pub fn house() -> Mesh {
    let vertices: Vec<PositionVertex> = HOUSE_POSITIONS
        .iter()
        .map(|&[x, y, z]| PositionVertex::new(x, y, z))
        .collect();
    Mesh::new("house", &vertices, &HOUSE_INDICES)
}

/// Letter "N": two side triangles meeting a diagonal at the center point.
pub fn letter_n() -> Mesh {
    let vertices: Vec<PositionVertex> = LETTER_N_POSITIONS
        .iter()
        .map(|&[x, y, z]| PositionVertex::new(x, y, z))
        .collect();
    Mesh::new("letter n", &vertices, &LETTER_N_INDICES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figures_engine::mesh::VertexLayout;

    #[test]
    fn decagon_is_a_closed_fan() {
        let mesh = decagon();
        assert_eq!(mesh.vertex_count(), 11);
        assert_eq!(mesh.triangle_count(), 10);

        let idx = mesh.indices();
        assert_eq!(&idx[..6], &[0, 1, 2, 0, 2, 3]);
        assert_eq!(&idx[27..], &[0, 10, 1]);
        assert!(idx.iter().all(|&i| (i as usize) < mesh.vertex_count()));
    }

    #[test]
    fn decagon_rim_lies_on_half_unit_circle() {
        for [x, y] in DECAGON_RIM {
            let r = (x * x + y * y).sqrt();
            assert!((r - 0.5).abs() < 2e-3, "radius {r}");
        }
    }

    #[test]
    fn colored_decagon_has_white_center() {
        let mesh = decagon_colored();
        assert_eq!(mesh.layout(), VertexLayout::PositionColor);
        let verts = mesh.vertices::<ColorVertex>().unwrap_or_default();
        assert_eq!(verts[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(verts[0].color, [1.0, 1.0, 1.0]);
        assert_eq!(verts[1].color, [1.0, 0.0, 0.0]);
        assert_eq!(verts[10].color, [1.0, 0.0, 1.0]);
    }

    #[test]
    fn house_has_three_triangles_and_a_roof() {
        let mesh = house();
        assert_eq!(mesh.layout(), VertexLayout::Position);
        assert_eq!(mesh.triangle_count(), 3);
        let verts = mesh.vertices::<PositionVertex>().unwrap_or_default();
        assert_eq!(verts[4].position, [0.0, 0.75, 0.0]);
    }

    #[test]
    fn colored_house_is_uniform() {
        let mesh = house_colored();
        let verts = mesh.vertices::<ColorVertex>().unwrap_or_default();
        assert_eq!(verts.len(), 5);
        assert!(verts.iter().all(|v| v.color == HOUSE_COLOR));
    }

    #[test]
    fn letter_n_indices() {
        let mesh = letter_n();
        assert_eq!(mesh.indices(), &LETTER_N_INDICES);
        assert_eq!(mesh.vertex_count(), 5);
    }
}
