// src/ui.rs
use egui;
use rand::Rng;

use geometric_shapes::ShapeScene;

fn to_color32(color: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

pub fn build_ui<R: Rng>(ctx: &egui::Context, scene: &ShapeScene<R>) {
    egui::Window::new("Shapes")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .resizable(false)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.label(format!("Live shapes: {}", scene.len()));
                ui.separator();
                for instance in scene.instances() {
                    ui.colored_label(
                        to_color32(instance.color),
                        format!("#{} {}", instance.id, instance.shape.kind.name()),
                    );
                }
            });
        });
}
