//! Area Chart Component
//!
//! Monthly price series drawn on an HTML5 canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::SeriesPoint;

const LINE_COLOR: &str = "#8b5cf6";

#[component]
pub fn AreaChart(
    #[prop(into)]
    series: Signal<Vec<SeriesPoint>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let points = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_area(&canvas, &points);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="640"
            height="260"
            class="w-full h-56 rounded-lg"
        />
    }
}

/// Value range with 10% headroom; flat series get a unit band
fn padded_range(points: &[SeriesPoint]) -> (f64, f64) {
    let min = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);

    let span = max - min;
    if span > 0.0 {
        (min - span * 0.1, max + span * 0.1)
    } else {
        (min - 1.0, max + 1.0)
    }
}

fn draw_area(canvas: &HtmlCanvasElement, points: &[SeriesPoint]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 10.0;
    let margin_right = 10.0;
    let margin_top = 16.0;
    let margin_bottom = 28.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.clear_rect(0.0, 0.0, width, height);

    if points.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("No price history", width / 2.0 - 50.0, height / 2.0);
        return;
    }

    let (low, high) = padded_range(points);
    let step = if points.len() > 1 {
        chart_width / (points.len() - 1) as f64
    } else {
        0.0
    };
    let x_at = |i: usize| margin_left + i as f64 * step;
    let y_at = |v: f64| margin_top + ((high - v) / (high - low)) * chart_height;

    // Filled area under the line
    let gradient = ctx.create_linear_gradient(0.0, margin_top, 0.0, margin_top + chart_height);
    let _ = gradient.add_color_stop(0.0, "rgba(139, 92, 246, 0.45)");
    let _ = gradient.add_color_stop(1.0, "rgba(139, 92, 246, 0.0)");

    ctx.begin_path();
    ctx.move_to(x_at(0), margin_top + chart_height);
    for (i, point) in points.iter().enumerate() {
        ctx.line_to(x_at(i), y_at(point.value));
    }
    ctx.line_to(x_at(points.len() - 1), margin_top + chart_height);
    ctx.close_path();
    ctx.set_fill_style(&gradient);
    ctx.fill();

    ctx.set_stroke_style(&LINE_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x_at(i), y_at(point.value));
        } else {
            ctx.line_to(x_at(i), y_at(point.value));
        }
    }
    ctx.stroke();

    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");
    for (i, point) in points.iter().enumerate() {
        let _ = ctx.fill_text(&point.label, x_at(i) - 10.0, height - 8.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(value: f64) -> SeriesPoint {
        SeriesPoint { label: "Jan".into(), value }
    }

    #[test]
    fn test_padded_range() {
        let (low, high) = padded_range(&[point(100.0), point(200.0)]);
        assert_eq!(low, 90.0);
        assert_eq!(high, 210.0);
    }

    #[test]
    fn test_flat_series_range() {
        assert_eq!(padded_range(&[point(5.0), point(5.0)]), (4.0, 6.0));
    }
}
