use crate::plot_view::PlotView;
use osc_app::{FrameSchedule, RunResponse, run_file, run_scenario};
use osc_project::Scenario;
use osc_sim::energy;
use std::path::PathBuf;

/// A solved scenario ready to animate.
struct LoadedRun {
    scenario: Scenario,
    response: RunResponse,
    schedule: FrameSchedule,
}

pub struct OscillatorApp {
    scenario_path: Option<PathBuf>,
    run: Option<LoadedRun>,
    error: Option<String>,
    playing: bool,
    elapsed_s: f64,
    frame: usize,
    plot_view: PlotView,
}

impl OscillatorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, scenario_path: Option<PathBuf>) -> Self {
        let mut app = Self {
            scenario_path,
            run: None,
            error: None,
            playing: true,
            elapsed_s: 0.0,
            frame: 0,
            plot_view: PlotView::default(),
        };
        app.reload();
        app
    }

    fn reload(&mut self) {
        let loaded = match &self.scenario_path {
            Some(path) => run_file(path),
            None => {
                let scenario = Scenario::default();
                run_scenario(&scenario).map(|response| (scenario, response))
            }
        }
        .and_then(|(scenario, response)| {
            let schedule =
                FrameSchedule::new(&response.trajectory, scenario.animation.playback_speed)?;
            Ok(LoadedRun {
                scenario,
                response,
                schedule,
            })
        });

        match loaded {
            Ok(run) => {
                tracing::info!(
                    name = %run.scenario.name,
                    frames = run.schedule.frame_count(),
                    "loaded scenario"
                );
                self.run = Some(run);
                self.error = None;
            }
            Err(e) => {
                tracing::error!("failed to load scenario: {e}");
                self.run = None;
                self.error = Some(e.to_string());
            }
        }
        self.restart();
    }

    fn restart(&mut self) {
        self.elapsed_s = 0.0;
        self.frame = 0;
    }

    /// Advance the playback clock and pick the frame it lands on.
    fn tick(&mut self, dt: f64) {
        let Some(run) = &self.run else {
            return;
        };
        if self.playing {
            self.elapsed_s += dt;
            self.frame = run.schedule.frame_at_elapsed(self.elapsed_s);
            if self.elapsed_s >= run.schedule.duration_s() {
                self.playing = false;
            }
        }
    }

    /// Keep the playback clock consistent after the user scrubs to a frame.
    fn seek(&mut self, frame: usize) {
        if let Some(run) = &self.run {
            if let Some((t, _)) = run.response.trajectory.get(frame) {
                let t0 = run.response.trajectory.times()[0];
                self.elapsed_s = (t - t0) / run.schedule.playback_speed();
                self.frame = frame;
            }
        }
    }
}

impl eframe::App for OscillatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.stable_dt) as f64;
        self.tick(dt);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let label = if self.playing { "Pause" } else { "Play" };
                if ui.button(label).clicked() {
                    if !self.playing
                        && self
                            .run
                            .as_ref()
                            .is_some_and(|r| self.elapsed_s >= r.schedule.duration_s())
                    {
                        self.restart();
                    }
                    self.playing = !self.playing;
                }
                if ui.button("Restart").clicked() {
                    self.restart();
                    self.playing = true;
                }
                if ui.button("Reload").clicked() {
                    self.reload();
                }

                ui.separator();

                if let Some(run) = &self.run {
                    let last = run.schedule.frame_count() - 1;
                    let mut frame = self.frame;
                    let slider = ui.add(egui::Slider::new(&mut frame, 0..=last).text("frame"));
                    if slider.changed() {
                        self.playing = false;
                        self.seek(frame);
                    }
                }
            });
        });

        egui::SidePanel::right("readout")
            .min_width(220.0)
            .show(ctx, |ui| {
                ui.heading("State");
                ui.separator();

                if let Some(err) = &self.error {
                    ui.colored_label(egui::Color32::RED, err);
                    return;
                }
                let Some(run) = &self.run else {
                    return;
                };

                ui.label(format!("Scenario: {}", run.scenario.name));
                if let Some((t, state)) = run.response.trajectory.get(self.frame) {
                    ui.label(format!("t = {:.3} s", t));
                    ui.label(format!("x = {:.4} m", state.position));
                    ui.label(format!("v = {:.4} m/s", state.velocity));
                    ui.label(format!(
                        "E = {:.3} J",
                        energy(&run.response.params, &state)
                    ));
                }

                ui.separator();
                let summary = &run.response.summary;
                ui.label(format!("ω = {:.4} rad/s", summary.natural_frequency_rad_s));
                ui.label(format!(
                    "ζ = {:.4} ({})",
                    summary.damping_ratio,
                    summary.regime.label()
                ));
                ui.label(format!(
                    "Frame interval: {:.1} ms",
                    run.schedule.interval_ms()
                ));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(run) = &self.run {
                self.plot_view.show(
                    ui,
                    &run.response.trajectory,
                    self.frame,
                    run.scenario.animation.show_trail,
                );
            } else {
                ui.label("No trajectory loaded");
            }
        });

        if self.playing {
            ctx.request_repaint();
        }
    }
}
