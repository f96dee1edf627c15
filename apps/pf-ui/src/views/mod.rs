pub mod plot_view;
pub mod points_view;

pub use plot_view::CurvePlot;
pub use points_view::PointsView;

use pf_app::EditCommand;
use pf_fit::Point;

/// A committed edit coming out of a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditAction {
    Add(Point),
    Move { index: usize, to: Point },
    Remove(usize),
}

impl EditAction {
    pub fn into_command(self) -> EditCommand {
        match self {
            EditAction::Add(p) => EditCommand::Add { x: p.x, y: p.y },
            EditAction::Move { index, to } => EditCommand::Move {
                index,
                x: to.x,
                y: to.y,
            },
            EditAction::Remove(index) => EditCommand::Remove { index },
        }
    }
}

/// Egui color for a named curve color.
pub fn color32(color: pf_engine::CurveColor) -> egui::Color32 {
    let [r, g, b] = color.rgb();
    egui::Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_map_to_commands() {
        assert_eq!(
            EditAction::Move {
                index: 2,
                to: Point::new(1.0, -1.0)
            }
            .into_command(),
            EditCommand::Move {
                index: 2,
                x: 1.0,
                y: -1.0
            }
        );
        assert_eq!(
            EditAction::Remove(0).into_command(),
            EditCommand::Remove { index: 0 }
        );
    }
}
