//! Model fetching. A model that fails to download or parse is treated like a
//! model without the requested node: the scene runs, that mesh draws nothing.

use crate::dom::js_err;
use hero_core::{prepare_model_mesh, MeshData, MeshLookup, ModelAsset, ModelNodes, SceneConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub async fn fetch_bytes(window: &web::Window, url: &str) -> anyhow::Result<Vec<u8>> {
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)?;
    let resp: web::Response = resp_value.dyn_into().map_err(js_err)?;
    if !resp.ok() {
        anyhow::bail!("HTTP {} for {}", resp.status(), url);
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch one model and pull out the node the scene draws.
pub async fn load_model(
    window: &web::Window,
    config: &SceneConfig,
    asset: ModelAsset,
) -> Option<MeshData> {
    let url = config.asset_url(asset.file());
    let bytes = match fetch_bytes(window, &url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("[assets] fetch {url} failed: {e:?}");
            return None;
        }
    };
    let nodes = match ModelNodes::from_glb(&bytes) {
        Ok(nodes) => nodes,
        Err(e) => {
            log::error!("[assets] {url}: {e}");
            return None;
        }
    };
    match nodes.mesh(asset.node()) {
        MeshLookup::Found(mesh) => {
            log::info!(
                "[assets] {} loaded ({} triangles)",
                asset.file(),
                mesh.triangle_count()
            );
            Some(prepare_model_mesh(asset, mesh))
        }
        MeshLookup::Missing => {
            let names: Vec<&str> = nodes.names().collect();
            log::warn!(
                "[assets] {} has no node {:?}; available: {:?}",
                asset.file(),
                asset.node(),
                names
            );
            None
        }
    }
}

/// Load every model in order. Missing entries are simply absent.
pub async fn load_all(window: &web::Window, config: &SceneConfig) -> Vec<(ModelAsset, MeshData)> {
    let mut loaded = Vec::with_capacity(ModelAsset::ALL.len());
    for asset in ModelAsset::ALL {
        if let Some(mesh) = load_model(window, config, asset).await {
            loaded.push((asset, mesh));
        }
    }
    loaded
}
