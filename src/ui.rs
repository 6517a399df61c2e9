//! UI rendering: toolbar band, tool buttons, status text.

use crate::draw::{Color, RenderStyle, color::*, render_background, render_scene};
use crate::input::{InputState, Tool};

// ============================================================================
// UI Layout Constants (not configurable)
// ============================================================================

/// Width of one toolbar button
pub const BUTTON_WIDTH: i32 = 80;
/// Height of one toolbar button
pub const BUTTON_HEIGHT: i32 = 30;
/// Font size of button labels and status text
const LABEL_FONT_SIZE: f64 = 13.0;
/// Right padding of the status text
const STATUS_PADDING: f64 = 10.0;

/// Button highlight for the selected tool
const ACTIVE_BUTTON: Color = Color {
    r: 0.55,
    g: 0.7,
    b: 0.95,
    a: 1.0,
};

/// Maps a click in the toolbar band to the tool button under it.
///
/// Buttons are laid out left to right from x = 0 in [`Tool::ALL`] order.
pub fn toolbar_hit(x: i32, y: i32) -> Option<Tool> {
    if x < 0 || !(0..BUTTON_HEIGHT).contains(&y) {
        return None;
    }
    Tool::ALL.get((x / BUTTON_WIDTH) as usize).copied()
}

/// Paints one complete frame: background, projected scene, then the toolbar
/// band on top so geometry panned above the canvas stays hidden.
pub fn render_frame(
    ctx: &cairo::Context,
    input_state: &InputState,
    style: &RenderStyle,
    background: Color,
    screen_width: u32,
) {
    render_background(ctx, background);
    render_scene(ctx, &input_state.scene(), style);
    render_toolbar(ctx, input_state, screen_width);
}

/// Render the toolbar band with the active tool highlighted and the polygon
/// side count on the right.
pub fn render_toolbar(ctx: &cairo::Context, input_state: &InputState, screen_width: u32) {
    let band_height = input_state.top_margin() as f64;
    if band_height <= 0.0 {
        return;
    }

    let _ = ctx.save();

    LIGHT_GREY.apply(ctx);
    ctx.rectangle(0.0, 0.0, screen_width as f64, band_height);
    let _ = ctx.fill();

    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    ctx.set_font_size(LABEL_FONT_SIZE);

    for (index, tool) in Tool::ALL.into_iter().enumerate() {
        let x = (index as i32 * BUTTON_WIDTH) as f64;
        let height = (BUTTON_HEIGHT as f64).min(band_height);

        if tool == input_state.current_tool {
            ACTIVE_BUTTON.apply(ctx);
            ctx.rectangle(x, 0.0, BUTTON_WIDTH as f64, height);
            let _ = ctx.fill();
        }

        BLACK.apply(ctx);
        ctx.set_line_width(1.0);
        ctx.rectangle(x + 0.5, 0.5, BUTTON_WIDTH as f64 - 1.0, height - 1.0);
        let _ = ctx.stroke();

        draw_centered_label(ctx, tool.name(), x, BUTTON_WIDTH as f64, height);
    }

    let mut status = format!("Sides: {}", input_state.polygon_sides());
    if input_state.is_drawing() {
        status.push_str("  [DRAW]");
    }
    match ctx.text_extents(&status) {
        Ok(extents) => {
            BLACK.apply(ctx);
            ctx.move_to(
                screen_width as f64 - extents.width() - STATUS_PADDING,
                (band_height + extents.height()) / 2.0,
            );
            let _ = ctx.show_text(&status);
        }
        Err(e) => log::warn!("Failed to measure toolbar status text: {}", e),
    }

    let _ = ctx.restore();
}

fn draw_centered_label(ctx: &cairo::Context, label: &str, x: f64, width: f64, height: f64) {
    let extents = match ctx.text_extents(label) {
        Ok(ext) => ext,
        Err(e) => {
            log::warn!("Failed to measure toolbar label '{}': {}", label, e);
            return;
        }
    };

    BLACK.apply(ctx);
    ctx.move_to(
        x + (width - extents.width()) / 2.0 - extents.x_bearing(),
        (height - extents.height()) / 2.0 - extents.y_bearing(),
    );
    let _ = ctx.show_text(label);
}
