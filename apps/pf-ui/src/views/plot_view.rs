//! Interactive plots of the control points and curves.

use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoint, PlotPoints, PlotUi, Points};
use pf_engine::{CurveKind, CurveStyle, DashPattern, PlotOrientation};
use pf_fit::{Domain, Point};

use super::{EditAction, color32};
use crate::curve_cache::CurveCache;

/// Grab radius around a control point, in screen pixels.
const PICK_RADIUS_PX: f32 = 12.0;

#[derive(Debug, Clone, Copy)]
struct DragState {
    index: usize,
    at: Point,
}

/// One plot panel. The primary panel edits points; the swapped panel only
/// shows the smooth curve with its axes exchanged.
pub struct CurvePlot {
    id: &'static str,
    orientation: PlotOrientation,
    editable: bool,
    drag: Option<DragState>,
}

impl CurvePlot {
    pub fn primary() -> Self {
        Self {
            id: "primary_plot",
            orientation: PlotOrientation::Primary,
            editable: true,
            drag: None,
        }
    }

    pub fn swapped() -> Self {
        Self {
            id: "swapped_plot",
            orientation: PlotOrientation::Swapped,
            editable: false,
            drag: None,
        }
    }

    /// Draw the panel. Returns an edit only when one is committed: a finished
    /// drag, a click on empty space, or a right click on a point.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        cache: &CurveCache,
        domain: Domain,
        points: &[Point],
    ) -> Option<EditAction> {
        let (x_label, y_label) = self.orientation.axis_labels();
        let orientation = self.orientation;
        let editable = self.editable;
        let drag = &mut self.drag;

        let mut plot = Plot::new(self.id)
            .legend(Legend::default())
            .x_axis_label(x_label)
            .y_axis_label(y_label)
            .allow_drag(!editable)
            .allow_double_click_reset(!editable);
        plot = match orientation {
            PlotOrientation::Primary => plot.include_x(domain.min()).include_x(domain.max()),
            PlotOrientation::Swapped => plot.include_y(domain.min()).include_y(domain.max()),
        };

        plot.show(ui, |plot_ui| {
            if editable {
                let rough = cache.project(CurveKind::Rough, orientation);
                plot_ui.line(styled_line(rough, "rough", CurveStyle::ROUGH, 1.5));
            }

            let smooth = cache.project(CurveKind::Smooth, orientation);
            let width = if editable { 2.0 } else { 5.0 };
            plot_ui.line(styled_line(
                smooth,
                "smooth",
                cache.style(CurveKind::Smooth),
                width,
            ));

            if !editable {
                return None;
            }

            let shown: Vec<[f64; 2]> = points
                .iter()
                .enumerate()
                .map(|(i, &p)| match *drag {
                    Some(d) if d.index == i => orientation.project_point(d.at),
                    _ => orientation.project_point(p),
                })
                .collect();
            plot_ui.points(
                Points::new(PlotPoints::from(shown.clone()))
                    .name("points")
                    .radius(5.0)
                    .color(egui::Color32::BLACK),
            );

            interact(plot_ui, orientation, &shown, drag)
        })
        .inner
    }
}

fn interact(
    plot_ui: &mut PlotUi,
    orientation: PlotOrientation,
    shown: &[[f64; 2]],
    drag: &mut Option<DragState>,
) -> Option<EditAction> {
    let response = plot_ui.response().clone();
    let pointer = plot_ui.pointer_coordinate();

    if response.drag_started() {
        *drag = pointer
            .and_then(|p| nearest(plot_ui, shown, p))
            .map(|index| DragState {
                index,
                at: orientation.unproject(shown[index]),
            });
    }

    if response.dragged() {
        if let (Some(d), Some(p)) = (drag.as_mut(), pointer) {
            d.at = orientation.unproject([p.x, p.y]);
        }
    }

    // A drag that leaves the plot still commits its last position.
    if response.drag_stopped() {
        return drag.take().map(|d| EditAction::Move {
            index: d.index,
            to: d.at,
        });
    }

    let p = pointer?;
    if response.secondary_clicked() {
        return nearest(plot_ui, shown, p).map(EditAction::Remove);
    }
    if response.clicked() && nearest(plot_ui, shown, p).is_none() {
        return Some(EditAction::Add(orientation.unproject([p.x, p.y])));
    }
    None
}

/// Index of the point within grab range of `target`, closest first.
fn nearest(plot_ui: &PlotUi, shown: &[[f64; 2]], target: PlotPoint) -> Option<usize> {
    let pointer = plot_ui.screen_from_plot(target);
    shown
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let screen = plot_ui.screen_from_plot(PlotPoint::new(p[0], p[1]));
            (i, screen.distance(pointer))
        })
        .filter(|&(_, d)| d <= PICK_RADIUS_PX)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

fn styled_line(points: Vec<[f64; 2]>, name: &str, style: CurveStyle, width: f32) -> Line {
    Line::new(PlotPoints::from(points))
        .name(name)
        .color(color32(style.color))
        .style(line_style(style.dash))
        .width(width)
}

fn line_style(dash: DashPattern) -> LineStyle {
    let [on, off] = dash.segments();
    match dash {
        DashPattern::Solid => LineStyle::Solid,
        DashPattern::Dashed => LineStyle::Dashed { length: on + off },
        DashPattern::Dotted => LineStyle::Dotted { spacing: on + off },
    }
}
