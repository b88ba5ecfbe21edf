use rounded_corners::{
    Color, CornerRadius, CornerSet, Mesh, MeshCanvas, RenderError, RoundedCorners,
};

use crate::expectations::CoverageExpectation;

// ── Shared palette ───────────────────────────────────────────────────────────

const FILL: Color = Color::rgb(200, 50, 50);
const STROKE: Color = Color::rgb(30, 30, 200);

fn filled(x: f32, y: f32, label: &'static str) -> CoverageExpectation {
    let [r, g, b, _] = FILL.to_array();
    CoverageExpectation::opaque(x, y, r, g, b, label)
}

fn stroked(x: f32, y: f32, label: &'static str) -> CoverageExpectation {
    let [r, g, b, _] = STROKE.to_array();
    CoverageExpectation::opaque(x, y, r, g, b, label)
}

fn painted(radius: f32, corners: CornerSet) -> RoundedCorners {
    RoundedCorners::new(radius, corners)
        .fill_color(FILL)
        .stroke_color(STROKE)
        .line_width(2.0)
}

/// A shape, the size it is laid out in, and what the result should look like.
pub struct Scene {
    pub label: &'static str,
    pub shape: RoundedCorners,
    pub size: (f32, f32),
    pub expectations: Vec<CoverageExpectation>,
}

/// Renders `scene` into a fresh mesh.
pub fn render_scene(scene: &Scene) -> Result<Mesh, RenderError> {
    let mut canvas = MeshCanvas::default();
    scene.shape.render(scene.size, &mut canvas)?;
    Ok(canvas.into_mesh())
}

/// Builds every scene used by the coverage tests.
pub fn main_scenes() -> Vec<Scene> {
    vec![
        scene_01_sharp_rect(),
        scene_02_all_rounded(),
        scene_03_top_rounded(),
        scene_04_main_diagonal(),
        scene_05_oversized_radius_pill(),
        scene_06_inscribed_circle(),
        scene_07_default_outline_only(),
        scene_08_thick_stroke(),
        scene_09_mixed_radii(),
    ]
}

fn scene_01_sharp_rect() -> Scene {
    Scene {
        label: "sharp_rect",
        shape: painted(0.0, CornerSet::ALL),
        size: (80.0, 80.0),
        expectations: vec![
            filled(40.0, 40.0, "center"),
            filled(3.0, 3.0, "top_left_corner_is_square"),
            filled(77.0, 77.0, "bottom_right_corner_is_square"),
            stroked(40.0, 0.0, "top_edge"),
            stroked(0.5, 0.5, "top_left_vertex"),
            CoverageExpectation::uncovered(-5.0, -5.0, "outside"),
        ],
    }
}

fn scene_02_all_rounded() -> Scene {
    Scene {
        label: "all_rounded",
        shape: painted(20.0, CornerSet::ALL),
        size: (80.0, 80.0),
        expectations: vec![
            filled(40.0, 40.0, "center"),
            stroked(40.0, 0.0, "top_edge"),
            stroked(80.0, 40.0, "right_edge"),
            CoverageExpectation::uncovered(3.0, 3.0, "top_left_cut"),
            CoverageExpectation::uncovered(77.0, 3.0, "top_right_cut"),
            CoverageExpectation::uncovered(3.0, 77.0, "bottom_left_cut"),
            CoverageExpectation::uncovered(77.0, 77.0, "bottom_right_cut"),
        ],
    }
}

fn scene_03_top_rounded() -> Scene {
    Scene {
        label: "top_rounded",
        shape: painted(20.0, CornerSet::TOP),
        size: (80.0, 80.0),
        expectations: vec![
            CoverageExpectation::uncovered(3.0, 3.0, "top_left_cut"),
            CoverageExpectation::uncovered(77.0, 3.0, "top_right_cut"),
            filled(3.0, 77.0, "bottom_left_square"),
            filled(77.0, 77.0, "bottom_right_square"),
        ],
    }
}

fn scene_04_main_diagonal() -> Scene {
    Scene {
        label: "main_diagonal",
        shape: painted(20.0, CornerSet::MAIN_DIAGONAL),
        size: (80.0, 80.0),
        expectations: vec![
            CoverageExpectation::uncovered(3.0, 3.0, "top_left_cut"),
            CoverageExpectation::uncovered(77.0, 77.0, "bottom_right_cut"),
            filled(77.0, 3.0, "top_right_square"),
            filled(3.0, 77.0, "bottom_left_square"),
        ],
    }
}

fn scene_05_oversized_radius_pill() -> Scene {
    // Radius clamps to half the height: a pill
    Scene {
        label: "oversized_radius_pill",
        shape: painted(1000.0, CornerSet::ALL),
        size: (80.0, 40.0),
        expectations: vec![
            filled(40.0, 20.0, "center"),
            filled(3.0, 20.0, "left_cap_middle"),
            stroked(40.0, 0.0, "top_edge"),
            CoverageExpectation::uncovered(3.0, 3.0, "top_left_cut"),
            CoverageExpectation::uncovered(77.0, 37.0, "bottom_right_cut"),
        ],
    }
}

fn scene_06_inscribed_circle() -> Scene {
    Scene {
        label: "inscribed_circle",
        shape: painted(40.0, CornerSet::ALL),
        size: (80.0, 80.0),
        expectations: vec![
            filled(40.0, 40.0, "center"),
            filled(40.0, 5.0, "near_top"),
            stroked(40.0, 0.0, "top_tangent"),
            stroked(0.0, 40.0, "left_tangent"),
            CoverageExpectation::uncovered(10.0, 10.0, "outside_diagonal"),
            CoverageExpectation::uncovered(70.0, 70.0, "outside_opposite_diagonal"),
        ],
    }
}

fn scene_07_default_outline_only() -> Scene {
    let [r, g, b, _] = Color::BLACK.to_array();
    Scene {
        label: "default_outline_only",
        shape: RoundedCorners::new(10.0, CornerSet::ALL),
        size: (60.0, 60.0),
        expectations: vec![
            CoverageExpectation::uncovered(30.0, 30.0, "transparent_fill_not_drawn"),
            CoverageExpectation::opaque(30.0, 0.0, r, g, b, "black_outline"),
            CoverageExpectation::uncovered(1.0, 1.0, "corner_cut"),
        ],
    }
}

fn scene_08_thick_stroke() -> Scene {
    Scene {
        label: "thick_stroke",
        shape: painted(10.0, CornerSet::ALL).line_width(10.0),
        size: (80.0, 80.0),
        expectations: vec![
            stroked(40.0, 4.0, "inside_stroke_band"),
            stroked(40.0, -4.0, "outside_stroke_band"),
            filled(40.0, 6.0, "fill_past_band"),
        ],
    }
}

fn scene_09_mixed_radii() -> Scene {
    Scene {
        label: "mixed_radii",
        shape: painted(0.0, CornerSet::ALL).corner_radius(CornerRadius::new(0.0, 10.0, 20.0, 30.0)),
        size: (100.0, 80.0),
        expectations: vec![
            filled(3.0, 3.0, "top_left_square"),
            CoverageExpectation::uncovered(98.0, 1.5, "top_right_cut"),
            filled(96.0, 6.0, "top_right_inside_small_arc"),
            CoverageExpectation::uncovered(4.0, 76.0, "bottom_left_cut"),
            CoverageExpectation::uncovered(93.0, 73.0, "bottom_right_cut"),
            filled(50.0, 40.0, "center"),
        ],
    }
}
