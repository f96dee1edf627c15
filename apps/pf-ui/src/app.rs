use pf_app::{AppResult, Session};
use pf_engine::{CurveKind, Freshness, RecomputeOutcome};
use pf_fit::Point;
use tracing::{info, warn};

use crate::curve_cache::CurveCache;
use crate::views::{CurvePlot, EditAction, PointsView, color32};

enum Status {
    Info(String),
    Error(String),
}

pub struct ParafitApp {
    session: Session,
    cache: CurveCache,
    primary: CurvePlot,
    swapped: CurvePlot,
    points_view: PointsView,
    status: Option<Status>,
}

impl ParafitApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, mut session: Session) -> Self {
        let cache = CurveCache::seeded(session.controller());
        session.subscribe(cache.clone());

        Self {
            session,
            cache,
            primary: CurvePlot::primary(),
            swapped: CurvePlot::swapped(),
            points_view: PointsView::default(),
            status: None,
        }
    }

    fn apply(&mut self, action: EditAction) {
        let result = self.session.apply(&action.into_command());
        self.report(result);
    }

    fn recompute(&mut self) {
        info!("recompute requested");
        let result = self.session.recompute();
        self.report(result);
    }

    fn undo(&mut self) {
        if let Some(result) = self.session.undo().transpose() {
            self.report(result);
        }
    }

    fn redo(&mut self) {
        if let Some(result) = self.session.redo().transpose() {
            self.report(result);
        }
    }

    fn report(&mut self, result: AppResult<RecomputeOutcome>) {
        self.status = match result {
            Ok(outcome) => outcome.notice.map(|n| Status::Info(n.to_string())),
            Err(e) => {
                warn!(error = %e, "edit not fitted");
                Some(Status::Error(e.to_string()))
            }
        };
    }

    fn show_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Recompute").clicked() {
                self.recompute();
            }
            ui.separator();
            if ui
                .add_enabled(self.session.editor().can_undo(), egui::Button::new("Undo"))
                .clicked()
            {
                self.undo();
            }
            if ui
                .add_enabled(self.session.editor().can_redo(), egui::Button::new("Redo"))
                .clicked()
            {
                self.redo();
            }
            ui.separator();

            let style = self.cache.style(CurveKind::Smooth);
            let label = match self.cache.smooth_state().freshness() {
                Freshness::Fresh => "smooth: fresh",
                Freshness::Stale => "smooth: stale",
            };
            ui.colored_label(color32(style.color), label);
            ui.separator();

            let k = self.session.controller().coefficients();
            ui.monospace(format!(
                "y = {:.4} x² + {:.4} x + {:.4}",
                k.a, k.b, k.c
            ));
        });
    }
}

impl eframe::App for ParafitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.show_toolbar(ui);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| match &self.status {
            Some(Status::Info(msg)) => {
                ui.label(msg);
            }
            Some(Status::Error(msg)) => {
                ui.colored_label(egui::Color32::RED, msg);
            }
            None => {
                ui.label(format!("{} points", self.session.points().len()));
            }
        });

        let mut pending = None;

        egui::SidePanel::right("points_panel")
            .default_width(260.0)
            .show(ctx, |ui| {
                pending = self
                    .points_view
                    .show(ui, self.session.points().control_points());
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let points: Vec<Point> = self.session.points().points();
            let domain = self.session.controller().config().domain;
            ui.columns(2, |cols| {
                if let Some(a) = self.primary.show(&mut cols[0], &self.cache, domain, &points) {
                    pending = Some(a);
                }
                self.swapped.show(&mut cols[1], &self.cache, domain, &points);
            });
        });

        if let Some(action) = pending {
            self.apply(action);
        }
    }
}
