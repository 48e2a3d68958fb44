//! Render adapter: read-only mapping from the body registry to screen space.
//!
//! Screen space is pixels with the origin at the top-left corner and the
//! display center at `(width/2, height/2)`. The viewer converts these into
//! its own world coordinates. Nothing in here touches body state.

use crate::configuration::config::DisplayConfig;
use crate::simulation::states::{Body, NVec2, System};

/// Trails are only drawn once they hold more than this many points
pub const MIN_TRAIL_POINTS: usize = 2;

/// Linear meters -> pixels mapping around the display center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMapping {
    pub width: f32,
    pub height: f32,
    pub px_per_meter: f64,
}

impl ScreenMapping {
    pub fn from_display(display: &DisplayConfig, au: f64) -> Self {
        Self {
            width: display.width,
            height: display.height,
            px_per_meter: display.px_per_au / au,
        }
    }

    pub fn to_screen(&self, p: &NVec2) -> [f32; 2] {
        [
            (p.x * self.px_per_meter) as f32 + self.width / 2.0,
            (p.y * self.px_per_meter) as f32 + self.height / 2.0,
        ]
    }
}

/// Everything needed to draw one body for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct BodyView {
    pub name: String,
    pub center: [f32; 2],
    pub radius: f32,
    pub color: [u8; 3],
    pub trail: Option<Vec<[f32; 2]>>, // open polyline, oldest point first
    pub label: Option<String>, // non-anchor bodies only
}

/// `"<km>KM . <NAME>"` with the anchor distance in kilometers, 2 decimals
pub fn distance_label(body: &Body) -> Option<String> {
    if body.anchor {
        return None;
    }
    Some(format!("{:.2}KM . {}", body.distance_to_anchor / 1000.0, body.name))
}

pub fn body_view(body: &Body, mapping: &ScreenMapping) -> BodyView {
    let trail = if body.orbit.len() > MIN_TRAIL_POINTS {
        Some(body.orbit.iter().map(|p| mapping.to_screen(p)).collect())
    } else {
        None
    };

    BodyView {
        name: body.name.clone(),
        center: mapping.to_screen(&body.x),
        radius: body.radius,
        color: body.color,
        trail,
        label: distance_label(body),
    }
}

/// Views for every body, in registry order
pub fn body_views(sys: &System, mapping: &ScreenMapping) -> Vec<BodyView> {
    sys.bodies.iter().map(|b| body_view(b, mapping)).collect()
}
