//! Asset-distribution ring chart painted on a Braille canvas.
//!
//! The active segment gets the expanded treatment: its name in the ring
//! center, a second highlight arc outside the wedge, a leader line to an
//! external label, and the raw value plus percent-of-total text.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, Borders,
    },
    Frame,
};

use super::geometry::{
    active_shape, arc_points, hit_test, percent_of_total, slice_geometries, HIGHLIGHT_INNER,
    HIGHLIGHT_OUTER, INNER_RADIUS, LABEL_GAP, OUTER_RADIUS,
};
use crate::models::DistributionSlice;

/// Canvas coordinate system; wide enough for the callout labels
pub const X_BOUNDS: [f64; 2] = [-210.0, 210.0];
pub const Y_BOUNDS: [f64; 2] = [-130.0, 130.0];

/// Sweep step between sampled arc points, in degrees
const ARC_STEP: f64 = 1.5;
/// Radius step between the concentric arcs that fill the band
const BAND_STEP: f64 = 3.0;
/// Slack around the ring band when resolving coarse cell coordinates
const HIT_TOLERANCE: f64 = 8.0;

/// Render the ring chart into `area`, expanding `active_index`
pub fn render_distribution_chart(
    f: &mut Frame,
    area: Rect,
    slices: &[DistributionSlice],
    active_index: usize,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("◔ Asset Distribution");
    let inner = block.inner(area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let values: Vec<u64> = slices.iter().map(|s| s.value).collect();
    let geometries = slice_geometries(&values);
    let active = &slices[active_index];
    let shape = active_shape(0.0, 0.0, OUTER_RADIUS, geometries[active_index].mid_sweep());
    let percent = percent_of_total(&values, active_index);

    // Character width in canvas units, for right-aligning labels
    let unit_w = (X_BOUNDS[1] - X_BOUNDS[0]) / inner.width as f64;

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(X_BOUNDS)
        .y_bounds(Y_BOUNDS)
        .paint(|ctx| {
            // Ring band, one concentric arc at a time
            for (slice, geometry) in slices.iter().zip(&geometries) {
                let mut radius = INNER_RADIUS;
                while radius <= OUTER_RADIUS {
                    let points =
                        arc_points(0.0, 0.0, radius, geometry.sweep_start, geometry.sweep_end, ARC_STEP);
                    ctx.draw(&Points {
                        coords: &points,
                        color: slice.color,
                    });
                    radius += BAND_STEP;
                }
            }

            // Highlight arc hugging the active wedge
            let active_geometry = &geometries[active_index];
            let mut radius = HIGHLIGHT_INNER;
            while radius <= HIGHLIGHT_OUTER {
                let points = arc_points(
                    0.0,
                    0.0,
                    radius,
                    active_geometry.sweep_start,
                    active_geometry.sweep_end,
                    ARC_STEP,
                );
                ctx.draw(&Points {
                    coords: &points,
                    color: active.color,
                });
                radius += 2.0;
            }

            // Leader line: wedge -> elbow -> horizontal tail
            ctx.draw(&CanvasLine {
                x1: shape.anchor.0,
                y1: shape.anchor.1,
                x2: shape.elbow.0,
                y2: shape.elbow.1,
                color: active.color,
            });
            ctx.draw(&CanvasLine {
                x1: shape.elbow.0,
                y1: shape.elbow.1,
                x2: shape.tail.0,
                y2: shape.tail.1,
                color: active.color,
            });
            ctx.draw(&Points {
                coords: &[shape.tail],
                color: active.color,
            });

            // Segment name centered in the ring
            let name = active.name.clone();
            let name_x = -(name.chars().count() as f64) / 2.0 * unit_w;
            ctx.print(
                name_x,
                0.0,
                Line::from(Span::styled(
                    name,
                    Style::default()
                        .fg(active.color)
                        .add_modifier(Modifier::BOLD),
                )),
            );

            // Value and percentage next to the leader tail
            let value_text = format!("Value {}", active.value);
            let percent_text = format!("({:.2}%)", percent);
            let (value_x, percent_x) = if shape.points_right {
                let x = shape.tail.0 + LABEL_GAP;
                (x, x)
            } else {
                (
                    shape.tail.0 - LABEL_GAP - value_text.chars().count() as f64 * unit_w,
                    shape.tail.0 - LABEL_GAP - percent_text.chars().count() as f64 * unit_w,
                )
            };
            ctx.print(
                value_x,
                shape.tail.1,
                Line::from(Span::styled(value_text, Style::default().fg(active.color))),
            );
            ctx.print(
                percent_x,
                shape.tail.1 - 18.0,
                Line::from(Span::styled(
                    percent_text,
                    Style::default().fg(ratatui::style::Color::Gray),
                )),
            );
        });

    f.render_widget(canvas, area);
}

/// Resolve the segment under a terminal cell, if any.
/// `area` is the rect the chart was rendered into (borders included).
pub fn segment_at(area: Rect, column: u16, row: u16, slices: &[DistributionSlice]) -> Option<usize> {
    if area.width <= 2 || area.height <= 2 {
        return None;
    }
    let inner = Rect::new(area.x + 1, area.y + 1, area.width - 2, area.height - 2);
    if column < inner.x
        || column >= inner.x + inner.width
        || row < inner.y
        || row >= inner.y + inner.height
    {
        return None;
    }

    let x = X_BOUNDS[0]
        + (column - inner.x) as f64 / inner.width as f64 * (X_BOUNDS[1] - X_BOUNDS[0])
        + (X_BOUNDS[1] - X_BOUNDS[0]) / inner.width as f64 / 2.0;
    let y = Y_BOUNDS[1]
        - (row - inner.y) as f64 / inner.height as f64 * (Y_BOUNDS[1] - Y_BOUNDS[0])
        - (Y_BOUNDS[1] - Y_BOUNDS[0]) / inner.height as f64 / 2.0;

    let values: Vec<u64> = slices.iter().map(|s| s.value).collect();
    let geometries = slice_geometries(&values);
    hit_test(
        x,
        y,
        0.0,
        0.0,
        INNER_RADIUS - HIT_TOLERANCE,
        HIGHLIGHT_OUTER + HIT_TOLERANCE,
        &geometries,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DashboardData;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_segment_at_hits_the_top_wedge() {
        let data = DashboardData::demo();
        let area = Rect::new(0, 0, 62, 22);

        // Just right of 12 o'clock, on the ring band: the first slice
        let hit = segment_at(area, 31, 5, &data.distribution);
        assert_eq!(hit, Some(0));
    }

    #[test]
    fn test_segment_at_misses_outside_the_band() {
        let data = DashboardData::demo();
        let area = Rect::new(0, 0, 62, 22);

        // Dead center is inside the hole
        assert_eq!(segment_at(area, 31, 11, &data.distribution), None);
        // Far corner is outside the circle
        assert_eq!(segment_at(area, 2, 1, &data.distribution), None);
        // Outside the widget entirely
        assert_eq!(segment_at(area, 80, 5, &data.distribution), None);
    }

    #[test]
    fn test_segment_at_left_side_resolves_late_slices() {
        let data = DashboardData::demo();
        let area = Rect::new(0, 0, 62, 22);

        // Left of center on the band: sweep in the 250..290 range,
        // which belongs to Maintenance or Retired depending on height
        let hit = segment_at(area, 20, 11, &data.distribution);
        assert!(matches!(hit, Some(2) | Some(3)), "got {hit:?}");
    }
}
