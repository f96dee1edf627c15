use egui_extras::{Column, TableBuilder};
use pf_fit::{ControlPoint, FIT_POINTS, Point, PointId, TruncationNotice};

use super::EditAction;

/// Table of control points in fitting order.
#[derive(Default)]
pub struct PointsView {
    /// Point being edited and its uncommitted value.
    pending: Option<(PointId, Point)>,
}

impl PointsView {
    pub fn show(&mut self, ui: &mut egui::Ui, points: &[ControlPoint]) -> Option<EditAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.heading("Points");
            if ui.button("+ Point").clicked() {
                let next = points
                    .last()
                    .map(|cp| Point::new(cp.point.x + 1.0, cp.point.y))
                    .unwrap_or(Point::new(0.0, 0.0));
                action = Some(EditAction::Add(next));
            }
        });

        if points.len() > FIT_POINTS {
            let notice = TruncationNotice {
                supplied: points.len(),
            };
            ui.colored_label(egui::Color32::from_rgb(200, 120, 0), notice.to_string());
        }
        ui.separator();

        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(24.0))
            .column(Column::initial(80.0).at_least(60.0))
            .column(Column::initial(80.0).at_least(60.0))
            .column(Column::exact(28.0))
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("#");
                });
                header.col(|ui| {
                    ui.strong("x");
                });
                header.col(|ui| {
                    ui.strong("y");
                });
                header.col(|ui| {
                    ui.strong("");
                });
            })
            .body(|mut body| {
                for (index, cp) in points.iter().enumerate() {
                    body.row(24.0, |mut row| {
                        if let Some(a) = self.show_row(&mut row, index, cp) {
                            action = Some(a);
                        }
                    });
                }
            });

        action
    }

    fn show_row(
        &mut self,
        row: &mut egui_extras::TableRow,
        index: usize,
        cp: &ControlPoint,
    ) -> Option<EditAction> {
        let mut value = self.value_of(cp);
        let mut committed = false;
        let mut removed = false;

        // Greyed rows are past the truncation cut and do not affect the fit.
        let used = index < FIT_POINTS;

        row.col(|ui| {
            let text = egui::RichText::new(index.to_string());
            ui.label(if used { text } else { text.weak() });
        });
        row.col(|ui| {
            ui.push_id((cp.id.index(), 'x'), |ui| {
                let r = ui.add(egui::DragValue::new(&mut value.x).speed(0.05));
                committed |= r.drag_stopped() || r.lost_focus();
            });
        });
        row.col(|ui| {
            ui.push_id((cp.id.index(), 'y'), |ui| {
                let r = ui.add(egui::DragValue::new(&mut value.y).speed(0.05));
                committed |= r.drag_stopped() || r.lost_focus();
            });
        });
        row.col(|ui| {
            removed = ui.small_button("✕").on_hover_text("Remove point").clicked();
        });

        if removed {
            self.discard(cp.id);
            return Some(EditAction::Remove(index));
        }

        self.stage(cp, value);
        if committed {
            return self.commit(index, cp);
        }
        None
    }

    /// Value shown for `cp`: the uncommitted edit if there is one.
    fn value_of(&self, cp: &ControlPoint) -> Point {
        match self.pending {
            Some((id, p)) if id == cp.id => p,
            _ => cp.point,
        }
    }

    fn stage(&mut self, cp: &ControlPoint, value: Point) {
        if value != self.value_of(cp) {
            self.pending = Some((cp.id, value));
        }
    }

    /// Turn the uncommitted edit of `cp`, now at `index`, into a move.
    fn commit(&mut self, index: usize, cp: &ControlPoint) -> Option<EditAction> {
        match self.pending {
            Some((id, to)) if id == cp.id => {
                self.pending = None;
                (to != cp.point).then_some(EditAction::Move { index, to })
            }
            _ => None,
        }
    }

    /// Drop the uncommitted edit of a removed point; edits of other points
    /// survive.
    fn discard(&mut self, id: PointId) {
        if matches!(self.pending, Some((pending, _)) if pending == id) {
            self.pending = None;
        }
    }
}
