use bevy::asset::RenderAssetUsages;
use bevy::math::primitives::Sphere;
use bevy::mesh::{Indices, Mesh, Meshable, PrimitiveTopology};
use globegen::config::SphereConfig;
use globegen::mesh_data::MeshData;

/// Convert engine-agnostic mesh data into a Bevy mesh
pub fn mesh_from_data(data: MeshData) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, data.positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, data.normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, data.colors);
    mesh.insert_indices(Indices::U32(data.indices));
    mesh
}

/// UV sphere the bundled texture is wrapped around
pub fn textured_sphere_mesh(config: &SphereConfig) -> Mesh {
    Sphere::new(config.radius)
        .mesh()
        .uv(config.sectors, config.stacks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec3;
    use bevy::mesh::VertexAttributeValues;

    #[test]
    fn sphere_has_requested_segments() {
        let mesh = textured_sphere_mesh(&SphereConfig::default());

        // (sectors + 1) * (stacks + 1) vertices with seam duplicates
        assert_eq!(mesh.count_vertices(), 33 * 33);
        assert!(mesh.attribute(Mesh::ATTRIBUTE_UV_0).is_some());
    }

    #[test]
    fn sphere_has_requested_radius() {
        let mesh = textured_sphere_mesh(&SphereConfig::default());

        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("sphere has no positions");
        };
        for p in positions {
            assert!((Vec3::from_array(*p).length() - 100.0).abs() < 1e-3);
        }
    }

    #[test]
    fn mesh_data_keeps_vertex_colors() {
        let data = MeshData {
            positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            normals: vec![[0.0, 0.0, 1.0]; 3],
            colors: vec![[1.0, 0.0, 0.0, 0.5]; 3],
            indices: vec![0, 1, 2],
        };

        let mesh = mesh_from_data(data);

        assert_eq!(mesh.count_vertices(), 3);
        assert!(mesh.attribute(Mesh::ATTRIBUTE_COLOR).is_some());
        assert_eq!(mesh.indices().map(|i| i.len()), Some(3));
    }
}
