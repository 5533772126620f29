use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use osc_sim::Trajectory;

/// Position-versus-time plot with a marker on the current frame.
///
/// Axis bounds cover the whole trajectory so they stay fixed while playing.
#[derive(Default)]
pub struct PlotView {
    show_full_path: bool,
}

impl PlotView {
    pub fn show(&mut self, ui: &mut egui::Ui, trajectory: &Trajectory, frame: usize, trail: bool) {
        ui.checkbox(&mut self.show_full_path, "Show full path");

        let Some((t_start, _)) = trajectory.first() else {
            return;
        };
        let Some((t_end, _)) = trajectory.last() else {
            return;
        };
        let peak = trajectory
            .states()
            .iter()
            .map(|s| s.position.abs())
            .fold(0.0_f64, f64::max)
            .max(1e-9);

        let points: Vec<[f64; 2]> = trajectory
            .iter()
            .map(|(t, s)| [t, s.position])
            .collect();
        let current = frame.min(points.len() - 1);

        Plot::new("position_plot")
            .legend(Legend::default())
            .x_axis_label("Time (s)")
            .y_axis_label("Position (m)")
            .include_x(t_start)
            .include_x(t_end)
            .include_y(-1.1 * peak)
            .include_y(1.1 * peak)
            .allow_drag(false)
            .allow_zoom(false)
            .show(ui, |plot_ui| {
                if self.show_full_path {
                    let full: PlotPoints = points.clone().into();
                    plot_ui.line(
                        Line::new(full)
                            .name("trajectory")
                            .color(egui::Color32::from_gray(120)),
                    );
                }
                if trail {
                    let drawn: PlotPoints = points[..=current].to_vec().into();
                    plot_ui.line(Line::new(drawn).name("x(t)"));
                }
                plot_ui.points(
                    Points::new(vec![points[current]])
                        .radius(6.0)
                        .name("mass"),
                );
            });
    }
}
