//! Small painter-drawn charts: radar, bar, line and pie.

use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui, Vec2};

use super::components::colors;

/// Slice palette for pie charts.
pub const PALETTE: [Color32; 5] = [
    Color32::from_rgb(46, 125, 50),
    Color32::from_rgb(100, 150, 230),
    Color32::from_rgb(250, 190, 40),
    Color32::from_rgb(255, 130, 90),
    Color32::from_rgb(255, 100, 100),
];

/// Vertex `index` of a regular polygon with `count` vertices, first vertex at the top.
fn polar_point(center: Pos2, radius: f32, index: usize, count: usize) -> Pos2 {
    let angle = TAU * index as f32 / count as f32 - FRAC_PI_2;
    center + Vec2::angled(angle) * radius
}

/// Start and end angle (radians, clockwise from the top) of each pie slice.
/// Zero total yields no slices.
fn pie_angles(values: &[usize]) -> Vec<(f32, f32)> {
    let total: usize = values.iter().sum();
    if total == 0 {
        return Vec::new();
    }
    let mut start = -FRAC_PI_2;
    values
        .iter()
        .map(|&v| {
            let sweep = TAU * v as f32 / total as f32;
            let slice = (start, start + sweep);
            start += sweep;
            slice
        })
        .collect()
}

/// Radar chart of `values` on a 0..=`max` scale, one axis per label.
pub fn radar_chart(ui: &mut Ui, labels: &[&str], values: &[f64], max: f64, size: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), Sense::hover());
    if !ui.is_rect_visible(rect) || labels.len() < 3 {
        return;
    }

    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = size * 0.32;
    let n = labels.len();
    let grid = Stroke::new(1.0, ui.visuals().weak_text_color());

    for ring in 1..=5 {
        let r = radius * ring as f32 / 5.0;
        let points: Vec<Pos2> = (0..n).map(|i| polar_point(center, r, i, n)).collect();
        painter.add(Shape::closed_line(points, grid));
    }

    for (i, label) in labels.iter().enumerate() {
        let outer = polar_point(center, radius, i, n);
        painter.line_segment([center, outer], grid);
        painter.text(
            polar_point(center, radius + 18.0, i, n),
            Align2::CENTER_CENTER,
            *label,
            FontId::proportional(12.0),
            ui.visuals().text_color(),
        );
    }

    let points: Vec<Pos2> = (0..n)
        .map(|i| {
            let v = values.get(i).copied().unwrap_or_default().clamp(0.0, max);
            polar_point(center, radius * (v / max) as f32, i, n)
        })
        .collect();
    painter.add(Shape::convex_polygon(
        points.clone(),
        colors::PRIMARY.gamma_multiply(0.35),
        Stroke::new(2.0, colors::PRIMARY),
    ));
    for point in points {
        painter.circle_filled(point, 3.0, colors::PRIMARY);
    }
}

/// Vertical bar chart with a label under each bar.
pub fn bar_chart(ui: &mut Ui, labels: &[&str], values: &[usize], size: Vec2) {
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    if !ui.is_rect_visible(rect) || values.is_empty() {
        return;
    }

    let painter = ui.painter_at(rect);
    let max = values.iter().copied().max().unwrap_or(0).max(1) as f32;
    let plot = rect.shrink2(egui::vec2(8.0, 20.0));
    let slot = plot.width() / values.len() as f32;

    for (i, &value) in values.iter().enumerate() {
        let height = plot.height() * value as f32 / max;
        let x = plot.left() + slot * i as f32;
        let bar = egui::Rect::from_min_max(
            egui::pos2(x + slot * 0.2, plot.bottom() - height),
            egui::pos2(x + slot * 0.8, plot.bottom()),
        );
        painter.rect_filled(bar, 3.0, colors::PRIMARY);
        painter.text(
            egui::pos2(bar.center().x, bar.top() - 2.0),
            Align2::CENTER_BOTTOM,
            value.to_string(),
            FontId::proportional(11.0),
            ui.visuals().text_color(),
        );
        if let Some(label) = labels.get(i) {
            painter.text(
                egui::pos2(bar.center().x, plot.bottom() + 4.0),
                Align2::CENTER_TOP,
                *label,
                FontId::proportional(11.0),
                ui.visuals().weak_text_color(),
            );
        }
    }
}

/// Line chart with point markers.
pub fn line_chart(ui: &mut Ui, labels: &[&str], values: &[usize], size: Vec2) {
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    if !ui.is_rect_visible(rect) || values.is_empty() {
        return;
    }

    let painter = ui.painter_at(rect);
    let max = values.iter().copied().max().unwrap_or(0).max(1) as f32;
    let plot = rect.shrink2(egui::vec2(16.0, 20.0));
    let step = if values.len() > 1 {
        plot.width() / (values.len() - 1) as f32
    } else {
        0.0
    };

    painter.line_segment(
        [plot.left_bottom(), plot.right_bottom()],
        Stroke::new(1.0, ui.visuals().weak_text_color()),
    );

    let points: Vec<Pos2> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| egui::pos2(plot.left() + step * i as f32, plot.bottom() - plot.height() * v as f32 / max))
        .collect();
    painter.add(Shape::line(points.clone(), Stroke::new(2.0, colors::INFO)));

    for (i, point) in points.into_iter().enumerate() {
        painter.circle_filled(point, 3.5, colors::INFO);
        if let Some(label) = labels.get(i) {
            painter.text(
                egui::pos2(point.x, plot.bottom() + 4.0),
                Align2::CENTER_TOP,
                *label,
                FontId::proportional(10.0),
                ui.visuals().weak_text_color(),
            );
        }
    }
}

/// Pie chart with a legend to the right.
pub fn pie_chart(ui: &mut Ui, labels: &[&str], values: &[usize], diameter: f32) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(diameter, diameter), Sense::hover());
        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect);
            let center = rect.center();
            let radius = diameter / 2.0 - 2.0;

            let angles = pie_angles(values);
            if angles.is_empty() {
                painter.circle_stroke(center, radius, Stroke::new(1.0, colors::NEUTRAL));
            }
            for (i, (start, end)) in angles.into_iter().enumerate() {
                let color = PALETTE[i % PALETTE.len()];
                // Fan of thin triangles so every piece stays convex
                let segments = (((end - start) / TAU) * 64.0).ceil().max(1.0) as usize;
                for s in 0..segments {
                    let a0 = start + (end - start) * s as f32 / segments as f32;
                    let a1 = start + (end - start) * (s + 1) as f32 / segments as f32;
                    painter.add(Shape::convex_polygon(
                        vec![
                            center,
                            center + Vec2::angled(a0) * radius,
                            center + Vec2::angled(a1) * radius,
                        ],
                        color,
                        Stroke::NONE,
                    ));
                }
            }
        }

        ui.vertical(|ui| {
            for (i, label) in labels.iter().enumerate() {
                ui.horizontal(|ui| {
                    let (swatch, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), Sense::hover());
                    ui.painter().rect_filled(swatch, 2.0, PALETTE[i % PALETTE.len()]);
                    ui.label(format!("{label}: {}", values.get(i).copied().unwrap_or(0)));
                });
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_point_starts_at_top() {
        let p = polar_point(Pos2::ZERO, 10.0, 0, 3);
        assert!(p.x.abs() < 1e-4);
        assert!((p.y + 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_pie_angles_cover_full_circle() {
        let angles = pie_angles(&[1, 1, 2]);
        assert_eq!(angles.len(), 3);
        assert!((angles[0].0 + FRAC_PI_2).abs() < 1e-5);
        assert!((angles[2].1 - angles[0].0 - TAU).abs() < 1e-4);
        assert!(((angles[2].1 - angles[2].0) - TAU / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_pie_angles_empty() {
        assert!(pie_angles(&[0, 0]).is_empty());
        assert!(pie_angles(&[]).is_empty());
    }
}
