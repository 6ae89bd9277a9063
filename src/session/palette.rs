use serde::Serialize;

use crate::constants::MASS_MENU_GRAMS;

const MENU_COLORS: [&str; 4] = ["red", "orange", "green", "blue"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// How a presentation layer should draw one trajectory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrajectoryStyle {
    pub color: String,
    pub line: LineStyle,
    pub label: String,
}

/// Style for a throw. Labels are unique per `(mass, drag)` pair for masses
/// that differ by at least a microgram. Menu masses keep their fixed colors
/// and any other mass gets a color hashed from its bits.
pub fn style_for(mass_grams: f64, drag_enabled: bool) -> TrajectoryStyle {
    TrajectoryStyle {
        color: color_for(mass_grams),
        line: if drag_enabled {
            LineStyle::Dashed
        } else {
            LineStyle::Solid
        },
        label: label_for(mass_grams, drag_enabled),
    }
}

pub fn label_for(mass_grams: f64, drag_enabled: bool) -> String {
    let resistance = if drag_enabled { "drag" } else { "no drag" };
    format!("{}g ({})", round_grams(mass_grams), resistance)
}

// Absorbs the error of a kilogram round trip so 5 g prints as "5g". Masses
// closer than 1 µg share a label.
fn round_grams(mass_grams: f64) -> f64 {
    (mass_grams * 1e6).round() / 1e6
}

fn color_for(mass_grams: f64) -> String {
    let mass_grams = round_grams(mass_grams);
    match MASS_MENU_GRAMS.iter().position(|&m| m == mass_grams) {
        Some(index) => MENU_COLORS[index].to_string(),
        None => {
            // FNV-1a over the bit pattern, folded to 24 bits.
            let hash = mass_grams
                .to_bits()
                .to_le_bytes()
                .iter()
                .fold(0xcbf2_9ce4_8422_2325_u64, |h, &b| {
                    (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
                });
            format!("#{:06x}", (hash ^ (hash >> 24) ^ (hash >> 48)) & 0x00ff_ffff)
        }
    }
}
