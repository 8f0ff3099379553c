use crate::simulation::Yard;
use crate::theme::{
    STATUS_FONT, TEXT_COLOR, TOWER_BODY_COLOR, TOWER_GLASS_COLOR, TOWER_TRIM_COLOR,
};
use web_sys::CanvasRenderingContext2d;

/// Draws the control tower building at the top center of the yard.
pub fn draw_tower(ctx: &CanvasRenderingContext2d, canvas_width: f64, canvas_height: f64) {
    let center_x = canvas_width / 2.0;
    let center_y = canvas_height / 4.0;
    let width = (canvas_width / 19.0).floor();
    let height = (canvas_height / 3.0).floor();

    ctx.save();
    let _ = ctx.translate(center_x - width / 2.0, center_y - height / 2.0);

    // Cab silhouette: roof line stepping down into the shaft.
    ctx.set_fill_style_str(TOWER_BODY_COLOR);
    ctx.begin_path();
    ctx.move_to(0.0, 0.0);
    ctx.line_to(0.0, height / 5.0);
    ctx.line_to(width / 4.0, height * 2.0 / 5.0);
    ctx.line_to(width / 2.0, height * 2.0 / 5.0);
    ctx.line_to(width * 3.0 / 4.0, height / 5.0);
    ctx.line_to(width * 3.0 / 4.0, 0.0);
    ctx.close_path();
    ctx.fill();
    let line_width = ctx.line_width();
    ctx.fill_rect(
        width / 4.0,
        height * 2.0 / 5.0 - line_width,
        width / 4.0,
        height * 3.0 / 5.0 + line_width,
    );
    ctx.fill_rect(width / 2.0, height * 3.0 / 5.0, width / 2.0, height * 2.0 / 5.0);

    ctx.set_fill_style_str(TOWER_TRIM_COLOR);
    ctx.fill_rect(0.0, 0.0, width * 3.0 / 4.0, 2.0);
    ctx.fill_rect(
        width - width / 3.0,
        height - height / 10.0,
        width / 11.0,
        height / 11.0,
    );

    ctx.set_fill_style_str(TOWER_GLASS_COLOR);
    ctx.fill_rect(
        width * 3.0 / 40.0,
        height / 25.0,
        width * 3.0 / 5.0,
        height * 4.0 / 25.0,
    );
    ctx.restore();
}

/// Status line under the yard: the trunk queue, holder first, or a note
/// that nobody is waiting.
pub fn draw_schedule(
    ctx: &CanvasRenderingContext2d,
    yard: &Yard,
    canvas_width: f64,
    canvas_height: f64,
) {
    let ids: Vec<String> = yard.trunk_schedule().map(|id| id.to_string()).collect();
    let text = if ids.is_empty() {
        "No trains waiting for the control tower".to_string()
    } else {
        format!("Control tower schedule: {}", ids.join(" "))
    };

    ctx.save();
    ctx.set_fill_style_str(TEXT_COLOR);
    ctx.set_font(STATUS_FONT);
    let text_width = ctx.measure_text(&text).map_or(0.0, |metrics| metrics.width());
    let _ = ctx.fill_text(
        &text,
        canvas_width / 2.0 - text_width / 2.0,
        canvas_height * 4.0 / 5.0,
    );
    ctx.restore();
}
