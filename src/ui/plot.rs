use eframe::egui::{FontId, RichText, TextStyle, Ui};
use egui_plot::{Bar, BarChart, Line, MarkerShape, Plot, PlotPoints, PlotUi, Points};

use crate::chart::figure::{AxisScale, BarSpec, Figure, Geometry};
use crate::color;

// ---------------------------------------------------------------------------
// Figure view
// ---------------------------------------------------------------------------

/// Draw a built figure: title above a fixed-size plot with small tick labels.
pub fn figure_view(ui: &mut Ui, figure: &Figure) {
    let style = figure.style;

    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(&figure.title).size(style.title_font));
    });

    ui.scope(|ui: &mut Ui| {
        // Tick labels are drawn with the body and small text styles.
        let text_styles = &mut ui.style_mut().text_styles;
        text_styles.insert(TextStyle::Body, FontId::proportional(style.tick_font));
        text_styles.insert(TextStyle::Small, FontId::proportional(style.tick_font));

        let mut plot = Plot::new(("figure", figure.kind.label()))
            .width(style.width)
            .height(style.height)
            .x_axis_label(RichText::new(&figure.x_label).size(style.label_font))
            .y_axis_label(RichText::new(&figure.y_label).size(style.label_font))
            .allow_boxed_zoom(true)
            .allow_drag(true)
            .allow_scroll(false)
            .allow_zoom(true);

        if let AxisScale::Categorical(labels) = &figure.x_axis {
            let labels = labels.clone();
            plot = plot.x_axis_formatter(move |mark, _range| category_label(&labels, mark.value));
        }
        if let AxisScale::Categorical(labels) = &figure.y_axis {
            let labels = labels.clone();
            plot = plot.y_axis_formatter(move |mark, _range| category_label(&labels, mark.value));
        }

        plot.show(ui, |plot_ui| draw_geometry(plot_ui, &figure.geometry));
    });
}

fn draw_geometry(plot_ui: &mut PlotUi, geometry: &Geometry) {
    match geometry {
        Geometry::Line(points) => {
            plot_ui.line(
                Line::new(PlotPoints::from(points.clone()))
                    .color(color::SERIES)
                    .width(1.5),
            );
            plot_ui.points(markers(points));
        }
        Geometry::Scatter(points) => plot_ui.points(markers(points)),
        Geometry::Bars(specs) => {
            let palette = color::generate_palette(specs.len());
            let bars = specs
                .iter()
                .zip(palette)
                .map(|(spec, fill)| bar(spec).fill(fill))
                .collect();
            plot_ui.bar_chart(BarChart::new(bars));
        }
        Geometry::Histogram { bars, kde } => {
            let bars = bars
                .iter()
                .map(|spec| bar(spec).fill(color::SERIES.gamma_multiply(0.6)))
                .collect();
            plot_ui.bar_chart(BarChart::new(bars));
            if !kde.is_empty() {
                plot_ui.line(
                    Line::new(PlotPoints::from(kde.clone()))
                        .color(color::DENSITY)
                        .width(2.0),
                );
            }
        }
    }
}

fn bar(spec: &BarSpec) -> Bar {
    Bar::new(spec.center, spec.height)
        .width(spec.width)
        .name(&spec.label)
}

fn markers(points: &[[f64; 2]]) -> Points<'static> {
    Points::new(PlotPoints::from(points.to_vec()))
        .shape(MarkerShape::Circle)
        .radius(3.0)
        .filled(true)
        .color(color::SERIES)
}

/// Tick text for a categorical axis: the category at integral positions,
/// nothing in between.
fn category_label(labels: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}
