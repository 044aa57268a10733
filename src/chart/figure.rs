use serde::Deserialize;

use crate::data::model::{CellValue, Column, Table};
use crate::error::RenderError;

use super::kind::PlotKind;
use super::stats;

/// Bar width on categorical axes.
const BAR_WIDTH: f64 = 0.8;

// ---------------------------------------------------------------------------
// Request & styling
// ---------------------------------------------------------------------------

/// What the user asked to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotRequest {
    pub kind: PlotKind,
    pub x: Option<String>,
    pub y: Option<String>,
}

/// Fixed figure dimensions and font sizes, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FigureStyle {
    pub width: f32,
    pub height: f32,
    pub tick_font: f32,
    pub label_font: f32,
    pub title_font: f32,
}

impl Default for FigureStyle {
    fn default() -> Self {
        // 6 × 4 figure with ticks at 6pt, labels at 7pt, title at 8pt, scaled.
        Self {
            width: 600.0,
            height: 400.0,
            tick_font: 9.0,
            label_font: 10.5,
            title_font: 12.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Figure
// ---------------------------------------------------------------------------

/// How values along an axis are placed.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisScale {
    Numeric,
    /// Category `i` sits at position `i`.
    Categorical(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    pub center: f64,
    pub height: f64,
    pub width: f64,
    pub label: String,
}

/// The drawable content of a figure, in plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Connected points with a marker at each.
    Line(Vec<[f64; 2]>),
    Scatter(Vec<[f64; 2]>),
    Bars(Vec<BarSpec>),
    /// Histogram bars with an optional density curve over them.
    Histogram { bars: Vec<BarSpec>, kde: Vec<[f64; 2]> },
}

/// A rendered chart description, ready for the UI to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub kind: PlotKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_axis: AxisScale,
    pub y_axis: AxisScale,
    pub geometry: Geometry,
    pub style: FigureStyle,
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Build the figure for `request` from `table`.
///
/// X must name a column of the table; so must Y for kinds that use it.
pub fn build_figure(
    table: &Table,
    request: &PlotRequest,
    style: FigureStyle,
) -> Result<Figure, RenderError> {
    let x = lookup(table, request.x.as_deref())?;
    let y = || lookup(table, request.y.as_deref());

    let (x_axis, y_axis, geometry, y_name) = match request.kind {
        PlotKind::Line => {
            let y = y()?;
            let (x_axis, geometry) = line(x, y)?;
            (x_axis, AxisScale::Numeric, geometry, y.name())
        }
        PlotKind::Bar => {
            let y = y()?;
            let (x_axis, geometry) = bar(x, y)?;
            (x_axis, AxisScale::Numeric, geometry, y.name())
        }
        PlotKind::Scatter => {
            let y = y()?;
            let (x_axis, y_axis, geometry) = scatter(x, y);
            (x_axis, y_axis, geometry, y.name())
        }
        PlotKind::Distribution => {
            let (x_axis, geometry) = distribution(x);
            (x_axis, AxisScale::Numeric, geometry, "")
        }
        PlotKind::Count => {
            let (x_axis, geometry) = count(x);
            (x_axis, AxisScale::Numeric, geometry, "")
        }
    };

    let y_label = request
        .kind
        .y_label_override()
        .unwrap_or(y_name)
        .to_string();

    Ok(Figure {
        kind: request.kind,
        title: format!("{} of {} vs {}", request.kind.title_name(), y_label, x.name()),
        x_label: x.name().to_string(),
        y_label,
        x_axis,
        y_axis,
        geometry,
        style,
    })
}

fn lookup<'a>(table: &'a Table, name: Option<&str>) -> Result<Column<'a>, RenderError> {
    name.and_then(|n| table.column(n))
        .ok_or_else(|| RenderError::InvalidAxis(name.map(str::to_owned)))
}

fn require_numeric(column: Column<'_>) -> Result<(), RenderError> {
    if column.is_numeric() {
        Ok(())
    } else {
        Err(RenderError::NotNumeric(column.name().to_string()))
    }
}

/// Rows where both cells are present, as (x cell, y number).
fn paired<'a>(x: Column<'a>, y: Column<'a>) -> impl Iterator<Item = (&'a CellValue, f64)> + 'a {
    x.values()
        .zip(y.values())
        .filter(|(xv, _)| !xv.is_null())
        .filter_map(|(xv, yv)| yv.as_f64().filter(|v| !v.is_nan()).map(|v| (xv, v)))
}

/// Distinct non-null values: sorted when numeric, else in order of appearance.
fn category_order(column: Column<'_>) -> Vec<CellValue> {
    let present = column.values().filter(|v| !v.is_null()).cloned();
    let mut categories: Vec<CellValue> = stats::count_by(present)
        .into_iter()
        .map(|(v, _)| v)
        .collect();
    if column.is_numeric() {
        categories.sort_by(|a, b| {
            let a = a.as_f64().unwrap_or(f64::NAN);
            let b = b.as_f64().unwrap_or(f64::NAN);
            a.total_cmp(&b)
        });
    }
    categories
}

fn position_of(categories: &[CellValue], value: &CellValue) -> f64 {
    categories.iter().position(|c| c == value).unwrap_or(0) as f64
}

fn labels(categories: &[CellValue]) -> Vec<String> {
    categories.iter().map(|c| c.to_string()).collect()
}

fn line(x: Column<'_>, y: Column<'_>) -> Result<(AxisScale, Geometry), RenderError> {
    require_numeric(y)?;
    let means = stats::group_mean(paired(x, y).map(|(xv, yv)| (xv.clone(), yv)));

    if x.is_numeric() {
        let mut points: Vec<[f64; 2]> = means
            .into_iter()
            .filter_map(|(xv, yv)| xv.as_f64().map(|xf| [xf, yv]))
            .collect();
        points.sort_by(|a, b| a[0].total_cmp(&b[0]));
        Ok((AxisScale::Numeric, Geometry::Line(points)))
    } else {
        let categories: Vec<CellValue> = means.iter().map(|(xv, _)| xv.clone()).collect();
        let points = means
            .iter()
            .enumerate()
            .map(|(i, (_, yv))| [i as f64, *yv])
            .collect();
        Ok((AxisScale::Categorical(labels(&categories)), Geometry::Line(points)))
    }
}

fn bar(x: Column<'_>, y: Column<'_>) -> Result<(AxisScale, Geometry), RenderError> {
    require_numeric(y)?;
    let categories = category_order(x);
    let means = stats::group_mean(paired(x, y).map(|(xv, yv)| (xv.clone(), yv)));

    let bars = categories
        .iter()
        .enumerate()
        .map(|(i, cat)| BarSpec {
            center: i as f64,
            height: means
                .iter()
                .find(|(k, _)| k == cat)
                .map(|(_, m)| *m)
                .unwrap_or(0.0),
            width: BAR_WIDTH,
            label: cat.to_string(),
        })
        .collect();

    Ok((AxisScale::Categorical(labels(&categories)), Geometry::Bars(bars)))
}

/// Plot position of every row: the value itself on a numeric column, the
/// category index otherwise. Nulls have no position.
fn positions(column: Column<'_>) -> (AxisScale, Vec<Option<f64>>) {
    if column.is_numeric() {
        let placed = column
            .values()
            .map(|v| v.as_f64().filter(|f| !f.is_nan()))
            .collect();
        return (AxisScale::Numeric, placed);
    }

    let categories = category_order(column);
    let placed = column
        .values()
        .map(|v| (!v.is_null()).then(|| position_of(&categories, v)))
        .collect();
    (AxisScale::Categorical(labels(&categories)), placed)
}

fn scatter(x: Column<'_>, y: Column<'_>) -> (AxisScale, AxisScale, Geometry) {
    let (x_axis, xs) = positions(x);
    let (y_axis, ys) = positions(y);
    let points = xs
        .into_iter()
        .zip(ys)
        .filter_map(|(xp, yp)| Some([xp?, yp?]))
        .collect();
    (x_axis, y_axis, Geometry::Scatter(points))
}

fn distribution(x: Column<'_>) -> (AxisScale, Geometry) {
    if !x.is_numeric() {
        let (axis, bars) = count_bars(x, 1.0);
        return (axis, Geometry::Histogram { bars, kde: Vec::new() });
    }

    let values: Vec<f64> = x
        .values()
        .filter_map(CellValue::as_f64)
        .filter(|v| v.is_finite())
        .collect();
    let hist = stats::histogram(&values);
    let width = hist.bin_width();

    let bars = hist
        .counts
        .iter()
        .zip(hist.edges.windows(2))
        .map(|(&count, edge)| BarSpec {
            center: (edge[0] + edge[1]) / 2.0,
            height: count as f64,
            width,
            label: format!("[{:.3}, {:.3})", edge[0], edge[1]),
        })
        .collect();
    let kde = stats::kde_curve(&values, values.len() as f64 * width);

    (AxisScale::Numeric, Geometry::Histogram { bars, kde })
}

fn count(x: Column<'_>) -> (AxisScale, Geometry) {
    let (axis, bars) = count_bars(x, BAR_WIDTH);
    (axis, Geometry::Bars(bars))
}

fn count_bars(x: Column<'_>, width: f64) -> (AxisScale, Vec<BarSpec>) {
    let categories = category_order(x);
    let counts = stats::count_by(x.values().filter(|v| !v.is_null()));

    let bars = categories
        .iter()
        .enumerate()
        .map(|(i, cat)| BarSpec {
            center: i as f64,
            height: counts
                .iter()
                .find(|(k, _)| *k == cat)
                .map(|(_, n)| *n as f64)
                .unwrap_or(0.0),
            width,
            label: cat.to_string(),
        })
        .collect();

    (AxisScale::Categorical(labels(&categories)), bars)
}
