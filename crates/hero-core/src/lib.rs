pub mod activity;
pub mod assets;
pub mod camera;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod logo;
pub mod materials;
pub mod nav;
pub mod physics;
pub mod pointer;
pub mod scene;
pub mod scroll;
pub mod spawner;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

pub use activity::*;
pub use assets::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use geometry::{MeshData, Vertex};
pub use logo::*;
pub use materials::*;
pub use physics::*;
pub use pointer::*;
pub use scene::*;
pub use scroll::*;
pub use spawner::*;
