/// Startup configuration for a sketch.
#[derive(Debug, Clone, PartialEq)]
pub struct SketchConfig {
    pub title: String,
    /// Canvas size in logical pixels.
    pub width: f64,
    pub height: f64,
    /// Device pixels per logical pixel. The base transform of every frame is
    /// `scale(pixel_density)`.
    pub pixel_density: f64,
    /// Target frames per second for [`FrameDriver::run`](super::FrameDriver::run).
    pub frame_rate: f64,
    /// Sleep between frames to hold `frame_rate`. Off for tests and offline renders.
    pub pacing: bool,
    /// Start with the 3D scene graph enabled.
    pub enable_3d: bool,
    /// Fixed random seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            title: "sketch".to_string(),
            width: 400.0,
            height: 400.0,
            pixel_density: 1.0,
            frame_rate: 60.0,
            pacing: true,
            enable_3d: false,
            seed: None,
        }
    }
}

impl SketchConfig {
    /// Headless configuration: no pacing, fixed seed.
    pub fn headless(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pacing: false,
            seed: Some(0),
            ..Self::default()
        }
    }
}
