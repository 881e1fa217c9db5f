use glam::Vec3;

// Shared scene tuning constants used by the core simulation and the web frontend.

// Camera
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Breakpoint: css widths at or below this use the narrow (mobile) rig
pub const NARROW_MAX_WIDTH_PX: f64 = 769.0;

// Physics world
pub const GRAVITY: [f32; 3] = [0.0, 0.0, 0.0];
pub const MAX_STEP_DT: f32 = 0.5; // clamp for the variable timestep
pub const LINEAR_DAMPING: f32 = 4.0;
pub const ANGULAR_DAMPING: f32 = 1.0;
pub const BODY_FRICTION: f32 = 0.1;
pub const BODY_COLLIDER_RADIUS: f32 = 1.0; // multiplied by the body's visual scale

// Attraction toward the origin, per body category
pub const BOX_GRAVITY_EFFECT: f32 = 0.03;
pub const SPHERE_GRAVITY_EFFECT: f32 = 0.004;
pub const CONE_GRAVITY_EFFECT: f32 = 0.03;
pub const PROP_GRAVITY_EFFECT: f32 = 0.2;

// Visual scale per body category
pub const BOX_SCALE: f32 = 0.5;
pub const SPHERE_SCALE: f32 = 0.25;
pub const CONE_SCALE: f32 = 0.4;
pub const PROP_SCALE: f32 = 1.0;

// Spawner
pub const SPHERE_COUNT: usize = 15;
pub const BOX_COUNT: usize = 10;
pub const CONE_COUNT: usize = 5;
pub const SPAWN_MAX_MAGNITUDE: f32 = 14.0;
pub const SPAWN_MIN_EXTENT: f32 = 0.5; // fraction of viewport extent
pub const SPAWN_MAX_EXTENT: f32 = 2.0;

// Logo
pub const LOGO_START_Z: f32 = -10.0;
pub const LOGO_LERP: f32 = 0.05;
pub const LOGO_ARRIVED_Z: f32 = -0.01; // lerp never reaches 0
pub const LOGO_BOB_AMPLITUDE: f32 = 2.0;
pub const LOGO_MESH_SCALE: f32 = 3.2;
pub const LOGO_SCALE_NARROW: f32 = 0.075;
pub const LOGO_SCALE_WIDE: f32 = 0.13;
pub const LOGO_COLLIDER_HALF_HEIGHT: f32 = 10.0;
pub const LOGO_COLLIDER_RADIUS_NARROW: f32 = 1.1;
pub const LOGO_COLLIDER_RADIUS_WIDE: f32 = 2.0;

// Pointer
pub const POINTER_RADIUS_NARROW: f32 = 1.0;
pub const POINTER_RADIUS_WIDE: f32 = 2.0;
pub const POINTER_LIGHT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 10.0);
pub const POINTER_LIGHT_INTENSITY: f32 = 10.0;

// Palette (sRGB hex)
pub const BLUE_HEX: u32 = 0x105eff;
pub const BACKDROP_HEX: u32 = 0x666666;
pub const FOG_HEX: u32 = 0x111111;
pub const BLACK_LINEAR: f32 = 0.08;

// Fog and backdrop
pub const FOG_NEAR: f32 = 2.5;
pub const FOG_FAR: f32 = 7.0;
pub const BACKDROP_RADIUS: f32 = 7.0;
pub const BACKDROP_SEGMENTS: u32 = 64;

// Environment light panels, each facing the origin
pub const LIGHTFORMER_INTENSITY: f32 = 5.0;
pub const LIGHTFORMER_POSITIONS: [[f32; 3]; 4] = [
    [-50.0, 2.0, 0.0],
    [50.0, 2.0, 0.0],
    [0.0, 2.0, 50.0],
    [0.0, 2.0, -50.0],
];

// Primitive geometry (before the body scale)
pub const BOX_SIZE: f32 = 0.5;
pub const SPHERE_RADIUS: f32 = 0.25;
pub const SPHERE_SEGMENTS: u32 = 64;
pub const CONE_RADIUS: f32 = 0.25;
pub const CONE_HEIGHT: f32 = 0.5;
pub const CONE_SEGMENTS: u32 = 3;

// Prop model scales
pub const TOKEN_MESH_SCALE: f32 = 0.25;
pub const COIN_MESH_SCALE: f32 = 0.08;
pub const HEADPHONES_MESH_SCALE: f32 = 0.2;

// Phone screen plane
pub const PHONE_SCREEN_SIZE: [f32; 2] = [1.8, 0.86];
pub const PHONE_SCREEN_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 0.06);

// Post-processing defaults
pub const BLOOM_THRESHOLD: f32 = 0.5;
pub const BLOOM_INTENSITY: f32 = 1.0;

// Canvas fade (css transition applied by the web frontend)
pub const CANVAS_FADE_TRANSITION: &str = "opacity 150ms cubic-bezier(0.4, 0, 0.2, 1)";

// Smooth scroll
pub const SCROLL_DURATION_SEC: f64 = 2.0;
