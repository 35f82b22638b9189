//! Color and avatar utilities.

use eframe::egui::{self, Color32};

/// Deterministic avatar background color for a username.
pub fn avatar_color(name: &str) -> Color32 {
    const COLORS: [Color32; 12] = [
        Color32::from_rgb(0xFF, 0x66, 0x66),
        Color32::from_rgb(0x66, 0xCC, 0xFF),
        Color32::from_rgb(0xFF, 0xCC, 0x66),
        Color32::from_rgb(0x99, 0xCC, 0x99),
        Color32::from_rgb(0xCC, 0x99, 0xFF),
        Color32::from_rgb(0xFF, 0x99, 0xCC),
        Color32::from_rgb(0x66, 0x99, 0xFF),
        Color32::from_rgb(0xFF, 0x99, 0x66),
        Color32::from_rgb(0x99, 0xFF, 0x99),
        Color32::from_rgb(0xFF, 0xCC, 0x99),
        Color32::from_rgb(0xCC, 0xFF, 0xFF),
        Color32::from_rgb(0xCC, 0xCC, 0xFF),
    ];
    let idx = (fnv1a(name) as usize) % COLORS.len();
    COLORS[idx]
}

/// 15-bit pattern for a 5x5 vertically symmetric identicon (3 columns
/// mirrored to 5).
pub fn identicon_pattern(name: &str) -> u16 {
    (fnv1a(name) >> 8) as u16 & 0x7FFF
}

fn fnv1a(s: &str) -> u64 {
    let mut hash: u64 = 1469598103934665603;
    for b in s.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(1099511628211);
    }
    hash
}

/// Render a circular identicon avatar derived from the username hash.
pub fn render_avatar(ui: &mut egui::Ui, name: &str, size: f32) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());

    let bg_color = avatar_color(name);
    let painter = ui.painter();

    // Background circle
    painter.circle_filled(rect.center(), size / 2.0, bg_color);

    // 5x5 symmetric pattern, clipped to the circle
    let pattern = identicon_pattern(name);
    let fg_color = Color32::from_white_alpha(200);
    let cell_size = size / 6.0;
    let offset = cell_size * 0.5;

    for row in 0..5 {
        for col in 0..5 {
            // Mirror left to right
            let pattern_col = if col < 3 { col } else { 4 - col };
            let bit_index = row * 3 + pattern_col;

            if pattern & (1 << bit_index) != 0 {
                let cell_x = rect.left() + offset + (col as f32 * cell_size);
                let cell_y = rect.top() + offset + (row as f32 * cell_size);
                let center =
                    egui::pos2(cell_x + cell_size / 2.0, cell_y + cell_size / 2.0);

                let dist = (center - rect.center()).length();
                if dist < size / 2.0 - cell_size * 0.3 {
                    painter.rect_filled(
                        egui::Rect::from_min_size(
                            egui::pos2(cell_x, cell_y),
                            egui::vec2(cell_size * 0.85, cell_size * 0.85),
                        ),
                        cell_size * 0.2,
                        fg_color,
                    );
                }
            }
        }
    }

    painter.circle_stroke(
        rect.center(),
        size / 2.0,
        egui::Stroke::new(1.5, Color32::from_white_alpha(15)),
    );

    response
}

/// Apply the named theme to the egui context.
pub fn apply_theme(ctx: &egui::Context, theme: &str) {
    match theme {
        "light" => ctx.set_visuals(egui::Visuals::light()),
        _ => ctx.set_visuals(egui::Visuals::dark()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_color_is_deterministic() {
        assert_eq!(avatar_color("alice"), avatar_color("alice"));
        assert_eq!(identicon_pattern("alice"), identicon_pattern("alice"));
    }

    #[test]
    fn test_different_names_usually_differ() {
        // Not guaranteed for the 12-color palette, but these two do differ
        // and the pattern space is 15 bits.
        assert_ne!(identicon_pattern("alice"), identicon_pattern("bob"));
    }
}
