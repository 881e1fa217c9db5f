use glam::Vec3;
use hero_core::geometry::{cone, cuboid, plane, uv_sphere};
use hero_core::*;

/// Every triangle of a convex mesh around the origin should face outward.
fn assert_outward(mesh: &MeshData) {
    for tri in mesh.indices.chunks_exact(3) {
        let a = Vec3::from(mesh.vertices[tri[0] as usize].position);
        let b = Vec3::from(mesh.vertices[tri[1] as usize].position);
        let c = Vec3::from(mesh.vertices[tri[2] as usize].position);
        let n = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(n.dot(centroid) > 0.0, "inward triangle {tri:?}");
    }
}

#[test]
fn cuboid_has_four_vertices_per_face() {
    let mesh = cuboid(0.5, 0.5, 0.5);
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.indices.len(), 36);
    let (lo, hi) = mesh.bounds().unwrap();
    assert_eq!(lo, Vec3::splat(-0.25));
    assert_eq!(hi, Vec3::splat(0.25));
    assert_outward(&mesh);
}

#[test]
fn sphere_vertices_sit_on_the_radius() {
    let mesh = uv_sphere(0.25, 16, 12);
    assert_eq!(mesh.vertices.len(), 17 * 13);
    for v in &mesh.vertices {
        assert!((Vec3::from(v.position).length() - 0.25).abs() < 1e-5);
        assert!((Vec3::from(v.normal).length() - 1.0).abs() < 1e-5);
    }
    assert_outward(&mesh);
}

#[test]
fn three_sided_cone() {
    let mesh = cone(0.25, 0.5, 3);
    assert_eq!(mesh.triangle_count(), 6);
    let (lo, hi) = mesh.bounds().unwrap();
    assert!((hi.y - 0.25).abs() < 1e-6);
    assert!((lo.y + 0.25).abs() < 1e-6);
    assert_outward(&mesh);
}

#[test]
fn plane_faces_forward() {
    let mesh = plane(1.8, 0.86);
    assert_eq!(mesh.triangle_count(), 2);
    for tri in mesh.indices.chunks_exact(3) {
        let a = Vec3::from(mesh.vertices[tri[0] as usize].position);
        let b = Vec3::from(mesh.vertices[tri[1] as usize].position);
        let c = Vec3::from(mesh.vertices[tri[2] as usize].position);
        assert!((b - a).cross(c - a).z > 0.0);
    }
}

#[test]
fn centering_moves_bounds_to_origin() {
    let mut mesh = cuboid(1.0, 2.0, 3.0);
    for v in &mut mesh.vertices {
        v.position[0] += 5.0;
        v.position[1] -= 1.0;
    }
    let centered = mesh.centered();
    assert!(centered.center().length() < 1e-6);
}

#[test]
fn append_rebases_indices() {
    let mut mesh = plane(1.0, 1.0);
    mesh.append(&plane(1.0, 1.0));
    assert_eq!(mesh.vertices.len(), 8);
    assert_eq!(&mesh.indices[6..], &[4, 6, 5, 6, 7, 5]);
}

#[test]
fn empty_mesh_has_no_bounds() {
    assert!(MeshData::default().bounds().is_none());
    assert_eq!(MeshData::default().center(), Vec3::ZERO);
}

#[test]
fn colors_convert_to_linear() {
    assert_eq!(hex_to_linear(0xffffff), Vec3::ONE);
    assert_eq!(hex_to_linear(0x000000), Vec3::ZERO);
    let blue = hex_to_linear(0x105eff);
    assert!(blue.z > blue.y && blue.y > blue.x);
    assert_eq!(Material::black().color, Vec3::splat(0.08));
    assert_eq!(Material::logo().metalness, 0.1);
}
