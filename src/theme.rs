//! Fixed palette for the yard scene.

use crate::random::RandomSource;

pub const RAIL_COLOR: &str = "black";
pub const LOCOMOTIVE_COLOR: &str = "red";
pub const TEXT_COLOR: &str = "black";

pub const TOWER_BODY_COLOR: &str = "lightgray";
pub const TOWER_TRIM_COLOR: &str = "gray";
pub const TOWER_GLASS_COLOR: &str = "#ADDEFF";

pub const LABEL_FONT: &str = "12px arial";
pub const STATUS_FONT: &str = "20px arial";

/// Random body color for a freshly spawned train's cars.
///
/// The red channel is capped below the locomotive red so the locomotive
/// always stands out from the rest of the consist.
#[must_use]
pub fn random_car_color(rng: &mut dyn RandomSource) -> String {
    let r = rng.pick_below(150);
    let g = rng.pick_below(255);
    let b = rng.pick_below(255);
    format!("rgb({r}, {g}, {b})")
}
