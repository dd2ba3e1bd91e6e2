use log::Level;

/// Precompiled Spline scene shown behind the hero copy.
pub const SCENE_URL: &str = "https://prod.spline.design/zhZFnwyOYLgqlLWk/scene.splinecode";

/// Runtime that registers the `<spline-viewer>` custom element.
pub const SCENE_VIEWER_SCRIPT: &str =
    "https://unpkg.com/@splinetool/viewer/build/spline-viewer.js";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose when running locally with `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
