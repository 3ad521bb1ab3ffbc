//! Magnitude legend.

use quakemap_types::{ControlPosition, Legend, LegendEntry};

use crate::scale::color_range;

/// Lower magnitude bound of each legend row.
pub const LEGEND_GRADES: [u8; 6] = [0, 1, 2, 3, 4, 5];

/// Label for a legend row: `"g–next"` when a higher grade follows,
/// otherwise `"g+"`.
pub fn grade_label(grade: u8, next: Option<u8>) -> String {
    next.map_or_else(|| format!("{grade}+"), |next| format!("{grade}\u{2013}{next}"))
}

/// Build the six-row legend anchored bottom right.
///
/// Swatch colors come from [`color_range`] so they always match the
/// markers.
pub fn build_legend() -> Legend {
    let entries = LEGEND_GRADES
        .iter()
        .enumerate()
        .map(|(i, &grade)| {
            let next = LEGEND_GRADES.get(i.saturating_add(1)).copied();
            LegendEntry {
                grade,
                label: grade_label(grade, next),
                color: color_range(f64::from(grade)),
            }
        })
        .collect();

    Legend {
        position: ControlPosition::BottomRight,
        entries,
    }
}
