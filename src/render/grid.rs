//! Grid rendering using Bevy Gizmos.
//!
//! Each row and each column of the height field is drawn as one line
//! strip, so the wells show up as sagging lines.

use bevy::prelude::*;

use crate::field::HeightField;

/// Settings for grid rendering.
#[derive(Resource)]
pub struct GridStyle {
    /// Whether to draw the grid.
    pub visible: bool,
    pub color: Color,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            visible: true,
            color: Color::srgba(0.35, 0.55, 0.9, 0.6),
        }
    }
}

/// Draw every grid row and column at its current heights.
pub fn draw_grid(mut gizmos: Gizmos, field: Res<HeightField>, style: Res<GridStyle>) {
    if !style.visible {
        return;
    }

    for z in 0..field.count() {
        gizmos.linestrip(field.row(z).map(|v| v.as_vec3()), style.color);
    }
    for x in 0..field.count() {
        gizmos.linestrip(field.column(x).map(|v| v.as_vec3()), style.color);
    }
}
