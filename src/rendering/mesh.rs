//! Mesh assembly from grid-space segments.

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use crate::world::Segment;

/// Extrude each segment into a vertical quad from y = 0 to `height`.
pub fn extrude_segments(segments: &[Segment], height: f32) -> Mesh {
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(segments.len() * 4);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(segments.len() * 4);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(segments.len() * 4);
    let mut indices: Vec<u32> = Vec::with_capacity(segments.len() * 6);

    for seg in segments {
        let base = positions.len() as u32;
        positions.extend([
            [seg.x1, 0.0, seg.z1],
            [seg.x2, 0.0, seg.z2],
            [seg.x2, height, seg.z2],
            [seg.x1, height, seg.z1],
        ]);

        let normal = Vec3::new(seg.z2 - seg.z1, 0.0, seg.x1 - seg.x2)
            .try_normalize()
            .unwrap_or(Vec3::Z);
        normals.extend([normal.to_array(); 4]);

        let u = seg.texture_width();
        uvs.extend([[0.0, 1.0], [u, 1.0], [u, 0.0], [0.0, 0.0]]);

        indices.extend([base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    build(positions, normals, uvs, indices)
}

/// One floor quad per tile over a `width` x `height` grid.
pub fn floor_mesh(width: usize, height: usize) -> Mesh {
    let tiles = width * height;
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(tiles * 4);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(tiles * 4);
    let mut indices: Vec<u32> = Vec::with_capacity(tiles * 6);

    for z in 0..height {
        for x in 0..width {
            let (x1, z1) = (x as f32, z as f32);
            let (x2, z2) = (x1 + 1.0, z1 + 1.0);
            let base = positions.len() as u32;
            positions.extend([[x1, 0.0, z1], [x1, 0.0, z2], [x2, 0.0, z2], [x2, 0.0, z1]]);
            uvs.extend([[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]);
            indices.extend([base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }

    let normals = vec![[0.0, 1.0, 0.0]; positions.len()];
    build(positions, normals, uvs, indices)
}

fn build(
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u32>,
) -> Mesh {
    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U32(indices))
}
