//! Chart Plotter Module
//! Draws rendered series on an egui_plot line chart.

use crate::charts::formatter::format_tick;
use crate::charts::renderer::RenderedSeries;
use crate::charts::style::MarkerSize;
use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

/// Series colours, assigned by series index.
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(26, 188, 156),  // Teal
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(0, 188, 212),   // Cyan
    Color32::from_rgb(121, 85, 72),   // Brown
    Color32::from_rgb(96, 125, 139),  // Blue Grey
];

const LINE_WIDTH: f32 = 1.5;

/// Axis captions shown beside the chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisLabels<'a> {
    pub x: Option<&'a str>,
    pub y: Option<&'a str>,
}

/// Draws series with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Colour for the series at `index`.
    pub fn series_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Marker radius in points.
    pub fn marker_radius(size: MarkerSize) -> f32 {
        match size {
            MarkerSize::Regular => 3.0,
            MarkerSize::Minimal => 1.0,
        }
    }

    /// Draw every series on one chart, honouring each series' appearance.
    pub fn draw_line_chart(
        ui: &mut egui::Ui,
        id: &str,
        labels: AxisLabels<'_>,
        series: &[RenderedSeries],
    ) {
        let mut plot = Plot::new(id)
            .legend(Legend::default())
            .x_axis_formatter(|mark, _range| format_tick(mark.value))
            .y_axis_formatter(|mark, _range| format_tick(mark.value));
        if let Some(label) = labels.x {
            plot = plot.x_axis_label(label.to_string());
        }
        if let Some(label) = labels.y {
            plot = plot.y_axis_label(label.to_string());
        }

        plot.show(ui, |plot_ui| {
            for (i, s) in series.iter().enumerate() {
                let color = Self::series_color(i);

                if s.appearance.show_line {
                    plot_ui.line(
                        Line::new(PlotPoints::from_iter(s.points.iter().copied()))
                            .color(color)
                            .width(LINE_WIDTH)
                            .name(&s.legend),
                    );
                }

                if s.appearance.show_markers {
                    plot_ui.points(
                        Points::new(PlotPoints::from_iter(s.points.iter().copied()))
                            .radius(Self::marker_radius(s.appearance.marker_size))
                            .color(color)
                            .name(&s.legend),
                    );
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colours_wrap_around_palette() {
        assert_eq!(ChartPlotter::series_color(0), PALETTE[0]);
        assert_eq!(ChartPlotter::series_color(PALETTE.len() + 2), PALETTE[2]);
    }

    #[test]
    fn minimal_markers_are_smaller() {
        assert!(
            ChartPlotter::marker_radius(MarkerSize::Minimal)
                < ChartPlotter::marker_radius(MarkerSize::Regular)
        );
    }
}
