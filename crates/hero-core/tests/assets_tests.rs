use hero_core::*;

/// Minimal binary glTF: one triangle shared by three named nodes.
fn triangle_glb(node_names: &[&str]) -> Vec<u8> {
    let positions: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    let mut bin: Vec<u8> = positions
        .iter()
        .flatten()
        .flat_map(|f| f.to_le_bytes())
        .collect();
    let nodes: Vec<String> = node_names
        .iter()
        .map(|n| format!(r#"{{"name":"{n}","mesh":0}}"#))
        .collect();
    let json = format!(
        concat!(
            r#"{{"asset":{{"version":"2.0"}},"#,
            r#""buffers":[{{"byteLength":36}}],"#,
            r#""bufferViews":[{{"buffer":0,"byteOffset":0,"byteLength":36}}],"#,
            r#""accessors":[{{"bufferView":0,"componentType":5126,"count":3,"type":"VEC3","min":[0,0,0],"max":[1,1,0]}}],"#,
            r#""meshes":[{{"primitives":[{{"attributes":{{"POSITION":0}}}}]}}],"#,
            r#""nodes":[{}]}}"#
        ),
        nodes.join(",")
    );
    let mut json = json.into_bytes();
    while json.len() % 4 != 0 {
        json.push(b' ');
    }
    while bin.len() % 4 != 0 {
        bin.push(0);
    }

    let total = 12 + 8 + json.len() + 8 + bin.len();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(b"glTF");
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(json.len() as u32).to_le_bytes());
    out.extend_from_slice(b"JSON");
    out.extend_from_slice(&json);
    out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
    out.extend_from_slice(b"BIN\0");
    out.extend_from_slice(&bin);
    out
}

#[test]
fn finds_named_mesh() {
    let nodes = ModelNodes::from_glb(&triangle_glb(&["ETH"])).unwrap();
    let MeshLookup::Found(mesh) = nodes.mesh("ETH") else {
        panic!("ETH missing");
    };
    assert_eq!(mesh.vertices.len(), 3);
    assert_eq!(mesh.indices, vec![0, 1, 2]);
    // No normals in the file: generated from the winding.
    for v in &mesh.vertices {
        assert_eq!(v.normal, [0.0, 0.0, 1.0]);
    }
}

#[test]
fn missing_mesh_is_reported_not_panicked() {
    let nodes = ModelNodes::from_glb(&triangle_glb(&["ETH"])).unwrap();
    let lookup = nodes.mesh("Plane_Material003_0");
    assert!(lookup.is_missing());
    assert!(lookup.found().is_none());
}

#[test]
fn node_names_are_sanitized_and_deduplicated() {
    let nodes =
        ModelNodes::from_glb(&triangle_glb(&["Base Logo", "Plane_Material.003:0", "Base Logo"]))
            .unwrap();
    assert_eq!(nodes.len(), 3);
    assert!(!nodes.mesh("Base_Logo").is_missing());
    assert!(!nodes.mesh("Base_Logo_1").is_missing());
    assert!(!nodes.mesh("Plane_Material0030").is_missing());
}

#[test]
fn sanitize_matches_loader_rules() {
    assert_eq!(sanitize_node_name("Base Logo"), "Base_Logo");
    assert_eq!(sanitize_node_name("a[0].b:c/d"), "a0bcd");
    assert_eq!(sanitize_node_name("Headphones"), "Headphones");
}

#[test]
fn garbage_bytes_fail_to_parse() {
    let err = ModelNodes::from_glb(b"not a model").unwrap_err();
    assert!(matches!(err, AssetError::Parse(_)));
}

#[test]
fn catalog_names_each_model() {
    assert_eq!(ModelAsset::Logo.file(), "logo.glb");
    assert_eq!(ModelAsset::Logo.node(), "Base_Logo");
    assert_eq!(ModelAsset::Token.node(), "ETH");
    assert_eq!(ModelAsset::Coin.file(), "bitcoin.glb");
    assert_eq!(ModelAsset::Coin.node(), "Plane_Material003_0");
    assert_eq!(ModelAsset::for_prop(PropKind::Phone).node(), "Cylinder");
    assert_eq!(ModelAsset::for_prop(PropKind::Headphones).file(), "headphones.glb");
}

#[test]
fn asset_urls_join_the_base() {
    let config = SceneConfig::default();
    assert_eq!(config.asset_url("eth.glb"), "/three-hero/eth.glb");
    let trailing = SceneConfig {
        asset_base: "/static/".to_string(),
        ..SceneConfig::default()
    };
    assert_eq!(trailing.asset_url("logo.svg"), "/static/logo.svg");
}
