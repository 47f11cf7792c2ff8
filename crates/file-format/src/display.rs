use serde::{Deserialize, Serialize};

/// Wireframe display settings captured together with the scene. Colors are
/// RGBA components in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    pub line_color: [f64; 4],
    pub back_color: [f64; 4],
    pub line_width: f64,
    pub is_line_solid: bool,
    /// Bit pattern for stippled lines.
    pub stipple_pattern: u16,
    pub stipple_factor: i32,
    pub point_size: f64,
    pub show_points: bool,
    pub round_points: bool,
    pub point_color: [f64; 4],
}

/// Black lines on a white background, vertex points hidden.
impl Default for DisplayState {
    fn default() -> Self {
        Self {
            line_color: [0.0, 0.0, 0.0, 1.0],
            back_color: [1.0, 1.0, 1.0, 1.0],
            line_width: 1.0,
            is_line_solid: true,
            stipple_pattern: 0xAAAA,
            stipple_factor: 1,
            point_size: 4.0,
            show_points: false,
            round_points: true,
            point_color: [0.2, 0.3, 0.3, 1.0],
        }
    }
}
