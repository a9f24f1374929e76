use std::f64::consts::PI;

use shared::shared_wheel_game::SegmentList;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use super::wheel_utils::{label_angle, segment_span};

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub segments: SegmentList,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
    pub is_spinning: bool,
}

fn is_dark_mode() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let segments = props.segments.clone();

        use_effect_with(
            (props.rotation, props.is_spinning),
            move |(rotation, is_spinning)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Some(context) = context_2d(&canvas) {
                        draw_wheel(&canvas, &context, &segments, *rotation, *is_spinning);
                    }
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="450"
                height="450"
                class="w-full max-w-[450px] h-auto rounded-full shadow-lg transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}

fn draw_wheel(
    canvas: &HtmlCanvasElement,
    context: &CanvasRenderingContext2d,
    segments: &SegmentList,
    rotation: f64,
    is_spinning: bool,
) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 40.0;
    let dark = is_dark_mode();

    context.clear_rect(0.0, 0.0, width, height);

    // Outer glow
    context.begin_path();
    let glow_intensity = if is_spinning { 0.25 } else { 0.15 };
    if dark {
        context.set_fill_style_str(&format!("rgba(130, 100, 255, {})", glow_intensity));
    } else {
        context.set_fill_style_str(&format!("rgba(100, 130, 255, {})", glow_intensity));
    }
    let _ = context.arc(center_x, center_y, radius + 15.0, 0.0, 2.0 * PI);
    context.fill();

    context.save();
    let _ = context.translate(center_x, center_y);
    let _ = context.rotate(rotation.to_radians());
    let _ = context.translate(-center_x, -center_y);

    for segment in segments {
        let (start, end) = segment_span(segments, segment.index);
        context.begin_path();
        context.set_fill_style_str(&segments.color(segment.index));
        context.move_to(center_x, center_y);
        let _ = context.arc(center_x, center_y, radius, start, end);
        context.close_path();
        context.fill();
    }

    // Dividers, only meaningful with more than one slice
    if segments.len() > 1 {
        context.set_stroke_style_str(if dark {
            "rgba(255, 255, 255, 0.7)"
        } else {
            "rgba(255, 255, 255, 0.9)"
        });
        context.set_line_width(2.5);
        for segment in segments {
            let (start, _) = segment_span(segments, segment.index);
            context.begin_path();
            context.move_to(center_x, center_y);
            context.line_to(center_x + radius * start.cos(), center_y + radius * start.sin());
            context.stroke();
        }
    }

    // Labels
    context.set_text_align("right");
    context.set_text_baseline("middle");
    context.set_fill_style_str("#ffffff");
    context.set_shadow_color(if dark { "rgba(0, 0, 0, 0.7)" } else { "rgba(0, 0, 0, 0.5)" });
    context.set_shadow_blur(3.0);
    context.set_shadow_offset_x(1.0);
    context.set_shadow_offset_y(1.0);
    context.set_font("bold 18px 'Segoe UI', Roboto, system-ui, sans-serif");
    for segment in segments {
        context.save();
        let _ = context.translate(center_x, center_y);
        let _ = context.rotate(label_angle(segments, segment.index));
        let _ = context.fill_text(&segment.label, radius - 16.0, 0.0);
        context.restore();
    }
    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
    context.set_shadow_offset_x(0.0);
    context.set_shadow_offset_y(0.0);

    // Hub
    let inner_radius = radius * 0.18;
    context.begin_path();
    context.set_fill_style_str(if dark { "#2d3142" } else { "#8b5cf6" });
    let _ = context.arc(center_x, center_y, inner_radius, 0.0, 2.0 * PI);
    context.fill();

    context.restore();

    // Outer ring
    context.begin_path();
    context.set_stroke_style_str(if dark {
        "rgba(180, 130, 255, 0.5)"
    } else {
        "rgba(130, 100, 255, 0.5)"
    });
    context.set_line_width(if is_spinning { 5.0 } else { 4.0 });
    let _ = context.arc(center_x, center_y, radius - 2.0, 0.0, 2.0 * PI);
    context.stroke();

    draw_pointer(context, center_x, center_y, radius, is_spinning);
}

// Fixed at the top; the segment under its tip is the winner
fn draw_pointer(
    context: &CanvasRenderingContext2d,
    center_x: f64,
    center_y: f64,
    radius: f64,
    is_spinning: bool,
) {
    let pointer_width = 16.0;
    let pointer_height = 28.0;
    let tip_y = center_y - radius + 12.0;
    let base_y = tip_y - pointer_height;

    context.set_shadow_color(if is_spinning {
        "rgba(255, 215, 130, 0.8)"
    } else {
        "rgba(255, 215, 0, 0.6)"
    });
    context.set_shadow_blur(if is_spinning { 10.0 } else { 4.0 });

    context.begin_path();
    context.move_to(center_x, tip_y);
    context.line_to(center_x - pointer_width, base_y);
    context.line_to(center_x + pointer_width, base_y);
    context.close_path();
    context.set_fill_style_str(if is_spinning { "#ffd700" } else { "#f59e0b" });
    context.fill();
    context.set_stroke_style_str("#e69500");
    context.set_line_width(1.5);
    context.stroke();

    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
}
