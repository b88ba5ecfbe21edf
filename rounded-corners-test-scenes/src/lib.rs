pub mod expectations;
pub mod scene;

pub use expectations::{check_coverage, CoverageExpectation};
pub use scene::{main_scenes, render_scene, Scene};
