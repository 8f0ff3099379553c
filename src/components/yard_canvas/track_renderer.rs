use crate::models::{RailRole, TrackLayout};
use crate::theme::RAIL_COLOR;
use web_sys::CanvasRenderingContext2d;

/// Draws every rail of the layout as a stroked polyline.
pub fn draw_rails(ctx: &CanvasRenderingContext2d, layout: &TrackLayout) {
    ctx.save();
    ctx.set_stroke_style_str(RAIL_COLOR);
    for role in RailRole::ALL {
        for span in layout.rail(role).spans() {
            ctx.begin_path();
            ctx.move_to(span.x1, span.y1);
            ctx.line_to(span.x2, span.y2);
            ctx.stroke();
        }
    }
    ctx.restore();
}
