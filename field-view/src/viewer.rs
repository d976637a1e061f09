//! Interactive particle constellation viewer built with eframe/egui.
//!
//! The window plays the part of the host page: [`WindowPage`] offers one
//! drawing surface and a randomize control, and [`Viewer`] implements
//! [`eframe::App`] to forward pointer events and drive one step per repaint.

use eframe::App;
use field_core::{
    FieldConfig,
    config::{Palette, Rgb},
    frame::{DrawCommand, Frame},
    mount::{Mounted, Page, Surface, mount},
};
use glam::Vec2;

/// Id of the drawing surface the window offers.
pub const SURFACE_ID: &str = "constellation";
/// Id of the randomize button in the top panel.
pub const RANDOMIZE_ID: &str = "randomize";

/// The window as the field sees it when mounting.
pub struct WindowPage {
    palette: Palette,
}

impl Page for WindowPage {
    type Surface = PainterSurface;

    fn surface(&mut self, id: &str) -> Option<PainterSurface> {
        (id == SURFACE_ID).then(|| PainterSurface::new(self.palette))
    }

    fn has_control(&self, id: &str) -> bool {
        id == RANDOMIZE_ID
    }
}

/// Keeps the latest presented frame and paints it with egui on every repaint.
#[derive(Debug, Default)]
pub struct PainterSurface {
    frame: Frame,
    palette: Palette,
}

impl PainterSurface {
    pub fn new(palette: Palette) -> Self {
        Self {
            frame: Frame::default(),
            palette,
        }
    }

    /// Paints the retained frame into `rect`, which shows a canvas of size `canvas`.
    fn paint(&self, painter: &egui::Painter, rect: egui::Rect, canvas: Vec2) {
        let scale = rect.width() / canvas.x;
        let to_screen = |p: Vec2| egui::pos2(rect.min.x + p.x * scale, rect.min.y + p.y * scale);
        let p = &self.palette;

        for cmd in &self.frame.commands {
            match *cmd {
                DrawCommand::Background { size } => {
                    let bg = egui::Rect::from_min_max(to_screen(Vec2::ZERO), to_screen(size));
                    painter.rect_filled(bg, egui::CornerRadius::ZERO, color(p.background, 1.0));
                }
                DrawCommand::Line { from, to, opacity } => {
                    painter.line_segment(
                        [to_screen(from), to_screen(to)],
                        egui::Stroke::new(p.link_width * scale, color(p.link, opacity)),
                    );
                }
                DrawCommand::Circle { center, radius } => {
                    painter.circle_filled(to_screen(center), radius * scale, color(p.dot, 1.0));
                }
            }
        }
    }
}

impl Surface for PainterSurface {
    fn present(&mut self, frame: &Frame) {
        self.frame.clone_from(frame);
    }
}

fn color([r, g, b]: Rgb, opacity: f32) -> egui::Color32 {
    let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Largest rect with the canvas aspect ratio that fits in `avail`, centred.
fn fit_canvas(avail: egui::Rect, canvas: Vec2) -> egui::Rect {
    let scale = (avail.width() / canvas.x).min(avail.height() / canvas.y);
    egui::Rect::from_center_size(avail.center(), egui::vec2(canvas.x * scale, canvas.y * scale))
}

/// Main application state for the viewer.
///
/// ### Fields
/// - `mounted` - The field and its surface, or `None` if the configured
///   surface id is not one the window offers (the panel stays blank).
/// - `canvas` - Canvas size in field units.
/// - `hovering` - Whether the pointer was over the surface last frame.
pub struct Viewer {
    mounted: Option<Mounted<PainterSurface>>,
    canvas: Vec2,
    hovering: bool,
}

impl Viewer {
    pub fn new(cfg: FieldConfig) -> Self {
        let canvas = Vec2::new(cfg.width, cfg.height);
        let mut page = WindowPage {
            palette: cfg.palette,
        };
        let mounted = mount(&mut page, cfg);

        Self {
            mounted,
            canvas,
            hovering: false,
        }
    }

    /// Forwards this frame's pointer state to the field.
    ///
    /// `hover` is the pointer position when it is over the surface `rect`.
    /// Leaving is reported once, on the first frame without a hover.
    fn pointer(&mut self, hover: Option<egui::Pos2>, rect: egui::Rect) {
        let Some(m) = self.mounted.as_mut() else {
            return;
        };
        match hover {
            Some(p) => {
                m.pointer_moved(
                    Vec2::new(p.x, p.y),
                    Vec2::new(rect.min.x, rect.min.y),
                    Vec2::new(rect.width(), rect.height()),
                );
                self.hovering = true;
            }
            None if self.hovering => {
                m.pointer_left();
                self.hovering = false;
            }
            None => {}
        }
    }

    /// Builds the top panel with the randomize control.
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let Some(m) = self.mounted.as_mut() else {
                    ui.label("no drawing surface");
                    return;
                };
                if m.has_randomize() && ui.button("🎲 Randomize").clicked() {
                    m.control_activated(RANDOMIZE_ID);
                }
            });
        });
    }

    /// Builds the bottom status bar (particle count, generation, attraction).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        let Some(m) = self.mounted.as_ref() else {
            return;
        };
        let field = m.field();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("strength = {:.2}", field.target().strength));
                ui.separator();
                ui.label(format!("generation = {}", field.particles().generation()));
                ui.label(format!("particles = {}", field.particles().len()));
            });
        });
    }

    /// Builds the central panel: input, one step, paint, and a repaint request.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
            let rect = fit_canvas(response.rect, self.canvas);

            let hover = response.hover_pos().filter(|p| rect.contains(*p));
            self.pointer(hover, rect);

            let Some(m) = self.mounted.as_mut() else {
                return;
            };
            m.frame();
            m.surface().paint(&ui.painter_at(rect), rect, self.canvas);

            ctx.request_repaint();
        });
    }
}

impl App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}
