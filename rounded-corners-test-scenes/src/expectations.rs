use rounded_corners::lyon::math::point;
use rounded_corners::Mesh;

/// The color a mesh is expected to show at one point.
pub struct CoverageExpectation {
    pub x: f32,
    pub y: f32,
    pub expected_r: u8,
    pub expected_g: u8,
    pub expected_b: u8,
    pub expected_a: u8,
    /// Per-channel tolerance for comparison (default 1).
    pub tolerance: u8,
    /// Human-readable label for failure messages.
    pub label: &'static str,
}

impl CoverageExpectation {
    pub fn new(x: f32, y: f32, rgba: [u8; 4], label: &'static str) -> Self {
        let [r, g, b, a] = rgba;
        Self {
            x,
            y,
            expected_r: r,
            expected_g: g,
            expected_b: b,
            expected_a: a,
            tolerance: 1,
            label,
        }
    }

    pub fn with_tolerance(mut self, tolerance: u8) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Convenience: expect a fully opaque color.
    pub fn opaque(x: f32, y: f32, r: u8, g: u8, b: u8, label: &'static str) -> Self {
        Self::new(x, y, [r, g, b, 255], label)
    }

    /// Convenience: expect no geometry at all.
    pub fn uncovered(x: f32, y: f32, label: &'static str) -> Self {
        Self::new(x, y, [0, 0, 0, 0], label)
    }
}

/// Validates coverage expectations against the top-most draw call at each point.
///
/// Returns a list of human-readable failure descriptions. An empty list means
/// all expectations passed.
pub fn check_coverage(mesh: &Mesh, expectations: &[CoverageExpectation]) -> Vec<String> {
    let mut failures = Vec::new();

    for expectation in expectations {
        let [actual_r, actual_g, actual_b, actual_a] = mesh
            .color_at(point(expectation.x, expectation.y))
            .map(denormalize)
            .unwrap_or([0, 0, 0, 0]);

        let tolerance = expectation.tolerance as i16;
        let matches = channel_matches(actual_r, expectation.expected_r, tolerance)
            && channel_matches(actual_g, expectation.expected_g, tolerance)
            && channel_matches(actual_b, expectation.expected_b, tolerance)
            && channel_matches(actual_a, expectation.expected_a, tolerance);

        if !matches {
            failures.push(format!(
                "[{}] point ({},{}) expected rgba({},{},{},{}) ±{} but got rgba({},{},{},{})",
                expectation.label,
                expectation.x,
                expectation.y,
                expectation.expected_r,
                expectation.expected_g,
                expectation.expected_b,
                expectation.expected_a,
                expectation.tolerance,
                actual_r,
                actual_g,
                actual_b,
                actual_a,
            ));
        }
    }

    failures
}

fn denormalize(color: [f32; 4]) -> [u8; 4] {
    color.map(|channel| (channel * 255.0).round().clamp(0.0, 255.0) as u8)
}

fn channel_matches(actual: u8, expected: u8, tolerance: i16) -> bool {
    let diff = (actual as i16) - (expected as i16);
    diff.abs() <= tolerance
}
