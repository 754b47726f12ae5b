//! Interactive viewer for Euler spiral road segments: centerline, lateral
//! edges, and the analytic bounding box.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui::{self, DragValue};
use egui_plot::{Legend, Line, LineStyle, PlotPoints};
use road_geom::Spiral;

fn main() -> Result<(), eframe::Error> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "RoadGeomPlot",
        options,
        Box::new(|_cc| Box::<PlotSpiral>::default()),
    )
}

struct PlotSpiral {
    s0: f64,
    x0: f64,
    y0: f64,
    hdg0: f64,
    length: f64,
    curv_start: f64,
    curv_end: f64,
    road_width: f64,
}

impl Default for PlotSpiral {
    fn default() -> Self {
        Self {
            s0: 0.0,
            x0: 0.0,
            y0: 0.0,
            hdg0: 0.0,
            length: 10.0,
            curv_start: 0.0,
            curv_end: 0.1,
            road_width: 7.0,
        }
    }
}

impl eframe::App for PlotSpiral {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        egui::SidePanel::left("options").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    DragValue::new(&mut self.s0)
                        .clamp_range(-100.0..=100.0)
                        .speed(0.1),
                );
                ui.label("s0").on_hover_text("arclength where the segment starts");
            });

            ui.horizontal(|ui| {
                ui.add(
                    DragValue::new(&mut self.x0)
                        .clamp_range(-100.0..=100.0)
                        .speed(0.1),
                );
                ui.label("x0").on_hover_text("x of the start point");
            });

            ui.horizontal(|ui| {
                ui.add(
                    DragValue::new(&mut self.y0)
                        .clamp_range(-100.0..=100.0)
                        .speed(0.1),
                );
                ui.label("y0").on_hover_text("y of the start point");
            });

            ui.horizontal(|ui| {
                ui.add(
                    DragValue::new(&mut self.hdg0)
                        .clamp_range(-6.3..=6.3)
                        .speed(0.05),
                );
                ui.label("hdg0").on_hover_text("heading at the start point, radians");
            });

            ui.horizontal(|ui| {
                ui.add(
                    DragValue::new(&mut self.length)
                        .clamp_range(0.1..=1000.0)
                        .speed(0.1),
                );
                ui.label("length").on_hover_text("arclength extent of the segment");
            });

            ui.horizontal(|ui| {
                ui.add(
                    DragValue::new(&mut self.curv_start)
                        .clamp_range(-2.0..=2.0)
                        .speed(0.005),
                );
                ui.label("curv_start").on_hover_text("signed curvature at s0");
            });

            ui.horizontal(|ui| {
                ui.add(
                    DragValue::new(&mut self.curv_end)
                        .clamp_range(-2.0..=2.0)
                        .speed(0.005),
                );
                ui.label("curv_end").on_hover_text("signed curvature at s0 + length");
            });

            ui.horizontal(|ui| {
                ui.add(
                    DragValue::new(&mut self.road_width)
                        .clamp_range(0.0..=20.0)
                        .speed(0.1),
                );
                ui.label("width").on_hover_text("road width drawn around the centerline");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let spiral = match Spiral::create(
                self.s0,
                self.x0,
                self.y0,
                self.hdg0,
                self.length,
                self.curv_start,
                self.curv_end,
            ) {
                Ok(spiral) => spiral,
                Err(err) => {
                    ui.colored_label(egui::Color32::RED, format!("{err}"));
                    return;
                }
            };

            let bbox = spiral.get_bbox();
            ui.label(format!(
                "c_dot {:.4} | bbox {:.2} x {:.2}",
                spiral.c_dot(),
                bbox.width(),
                bbox.height(),
            ));

            egui_plot::Plot::new("plot")
                .data_aspect(1.0)
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    let centerline = spiral.get_points_num(200);
                    plot_ui.line(Line::new(PlotPoints::new(centerline)).name("centerline"));

                    let samples = 200;
                    for (name, side) in [("left edge", 1.0), ("right edge", -1.0)] {
                        let t = side * self.road_width / 2.0;
                        let edge: Vec<[f64; 2]> = (0..=samples)
                            .map(|i| {
                                let s = spiral.s0()
                                    + spiral.length() * i as f64 / samples as f64;
                                spiral.get_point(s, t).as_array()
                            })
                            .collect();
                        plot_ui.line(Line::new(PlotPoints::new(edge)).name(name));
                    }

                    let outline = vec![
                        [bbox.min.x, bbox.min.y],
                        [bbox.max.x, bbox.min.y],
                        [bbox.max.x, bbox.max.y],
                        [bbox.min.x, bbox.max.y],
                        [bbox.min.x, bbox.min.y],
                    ];
                    plot_ui.line(
                        Line::new(PlotPoints::new(outline))
                            .name("bbox")
                            .style(LineStyle::dashed_dense()),
                    );
                });
        });
    }
}
