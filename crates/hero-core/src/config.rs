//! Page wiring configuration: element ids, asset locations and the narrow
//! viewport media query. Values default to the markup shipped in
//! `crates/hero-web/index.html`.

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub nav_id: String,
    pub container_id: String,
    pub canvas_id: String,
    pub asset_base: String,
    pub narrow_media_query: String,
    /// Intersection observer root margin; a negative bottom margin keeps the
    /// scene active only while some part of the hero sits above the fold.
    pub root_margin: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            nav_id: "top-navigation".to_string(),
            container_id: "hero".to_string(),
            canvas_id: "hero-canvas".to_string(),
            asset_base: "/three-hero".to_string(),
            narrow_media_query: "(max-width: 769px)".to_string(),
            root_margin: "0px 0px -100% 0px".to_string(),
        }
    }
}

impl SceneConfig {
    /// Join a file name onto the asset base, tolerating a trailing slash.
    pub fn asset_url(&self, file: &str) -> String {
        format!("{}/{}", self.asset_base.trim_end_matches('/'), file)
    }
}
