use crate::constants::{CAR_LENGTH, CAR_WIDTH};
use crate::models::{TrackLayout, Train};
use crate::theme::{LABEL_FONT, TEXT_COLOR};
use web_sys::CanvasRenderingContext2d;

/// Draws a consist car by car.
///
/// Each car resolves its own rail through the straddling rule, so a train
/// crossing a junction bends onto the new path one car at a time. The id
/// label rides above the locomotive when enabled.
pub fn draw_train(
    ctx: &CanvasRenderingContext2d,
    train: &Train,
    layout: &TrackLayout,
    show_ids: bool,
) {
    for (index, car) in train.cars.iter().enumerate() {
        let x = train.car_x(index);
        let rail = layout.rail(train.car_rail(x, layout));
        let y = rail.y_at(x);
        let angle = rail.angle_at(x);

        ctx.save();
        let _ = ctx.translate(x, y);
        let _ = ctx.rotate(angle);
        if index == 0 && show_ids {
            ctx.set_fill_style_str(TEXT_COLOR);
            ctx.set_font(LABEL_FONT);
            ctx.set_text_baseline("bottom");
            let _ = ctx.fill_text(&train.id.to_string(), 0.0, 0.0);
        }
        ctx.set_fill_style_str(&car.color);
        ctx.fill_rect(-CAR_LENGTH / 2.0, 0.0, CAR_LENGTH, CAR_WIDTH);
        ctx.restore();
    }
}
