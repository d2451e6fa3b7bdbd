use eframe::egui;
use simon_core::Color;

pub const BUTTON_SIZE: f32 = 150.0;
const SHINE_AMOUNT: f32 = 0.6;
const DIM_AMOUNT: f32 = 0.35;

pub fn base_color(color: Color) -> egui::Color32 {
    match color {
        Color::Yellow => egui::Color32::from_rgb(0xc9, 0xa2, 0x27),
        Color::Green => egui::Color32::from_rgb(0x2e, 0x8b, 0x3e),
        Color::Red => egui::Color32::from_rgb(0xb8, 0x2e, 0x2e),
        Color::Blue => egui::Color32::from_rgb(0x2e, 0x5c, 0xb8),
    }
}

pub fn lighten_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

fn darken_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = 1.0 - t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 { (channel as f32 * t).round().clamp(0.0, 255.0) as u8 };
    egui::Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

/// Fill for a game button: bright while shining, dimmed otherwise.
pub fn button_fill(color: Color, shining: bool) -> egui::Color32 {
    let base = base_color(color);
    if shining {
        lighten_color(base, SHINE_AMOUNT)
    } else {
        darken_color(base, DIM_AMOUNT)
    }
}
