//! egui visuals for the light and dark themes and the status bar palette.

use eframe::egui;
use shared::domain::Theme;

use crate::ui::presentation::StatusKind;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(99, 102, 241);

pub fn visuals_for_theme(theme: Theme) -> egui::Visuals {
    let mut visuals = match theme {
        Theme::Light => {
            let mut v = egui::Visuals::light();
            v.panel_fill = egui::Color32::from_rgb(248, 250, 252);
            v.window_fill = egui::Color32::WHITE;
            v.extreme_bg_color = egui::Color32::WHITE;
            v.faint_bg_color = egui::Color32::from_rgb(241, 245, 249);
            v
        }
        Theme::Dark => {
            let mut v = egui::Visuals::dark();
            v.panel_fill = egui::Color32::from_rgb(15, 23, 42);
            v.window_fill = egui::Color32::from_rgb(30, 41, 59);
            v.extreme_bg_color = egui::Color32::from_rgb(30, 41, 59);
            v.faint_bg_color = egui::Color32::from_rgb(51, 65, 85);
            v
        }
    };

    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT;
    visuals.window_corner_radius = egui::CornerRadius::same(10);
    visuals.menu_corner_radius = egui::CornerRadius::same(10);
    visuals
}

/// Fill and outline for the status bar.
pub fn status_colors(kind: StatusKind) -> (egui::Color32, egui::Stroke) {
    match kind {
        StatusKind::Info => (
            egui::Color32::from_rgb(30, 64, 120),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(96, 139, 205)),
        ),
        StatusKind::Success => (
            egui::Color32::from_rgb(22, 101, 52),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(74, 170, 110)),
        ),
        StatusKind::Error => (
            egui::Color32::from_rgb(111, 53, 53),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_theme_uses_dark_visuals() {
        assert!(visuals_for_theme(Theme::Dark).dark_mode);
        assert!(!visuals_for_theme(Theme::Light).dark_mode);
    }

    #[test]
    fn each_status_kind_has_its_own_fill() {
        let fills: Vec<_> = StatusKind::ALL
            .into_iter()
            .map(|kind| status_colors(kind).0)
            .collect();
        assert_ne!(fills[0], fills[1]);
        assert_ne!(fills[1], fills[2]);
    }
}
