use eframe::egui::Color32;

/// Used when a section's color token cannot be parsed.
const FALLBACK_ACCENT: Color32 = Color32::from_rgb(0xB0, 0xB8, 0xC0);

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub foreground: Color32,
    pub heading_color: Color32,
    pub muted: Color32,
    pub hero_start: Color32,
    pub hero_end: Color32,
    pub footer_background: Color32,
    pub footer_foreground: Color32,
    pub card_title: Color32,
    pub card_body: Color32,
    pub backdrop: Color32,
    pub hero_size: f32,
    pub h2_size: f32,
    pub body_size: f32,
    pub small_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x15, 0x1C, 0x24),
            foreground: Color32::from_rgb(0xC8, 0xD0, 0xD8),
            heading_color: Color32::WHITE,
            muted: Color32::from_rgb(0x8A, 0x94, 0x9E),
            hero_start: Color32::from_rgb(0x0E, 0x4F, 0x5F),
            hero_end: Color32::from_rgb(0x1E, 0x3A, 0x8A),
            footer_background: Color32::from_rgb(0x0B, 0x0F, 0x14),
            footer_foreground: Color32::from_rgb(0xA0, 0xA8, 0xB0),
            card_title: Color32::from_rgb(0x37, 0x41, 0x51),
            card_body: Color32::from_rgb(0x4B, 0x55, 0x63),
            backdrop: Color32::from_rgba_unmultiplied(0, 0, 0, 190),
            hero_size: 56.0,
            h2_size: 24.0,
            body_size: 16.0,
            small_size: 13.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(0xF0, 0xF9, 0xFF),
            foreground: Color32::from_rgb(0x1F, 0x29, 0x37),
            heading_color: Color32::from_rgb(0x1F, 0x29, 0x37),
            muted: Color32::from_rgb(0x6B, 0x72, 0x80),
            hero_start: Color32::from_rgb(0x08, 0x91, 0xB2),
            hero_end: Color32::from_rgb(0x25, 0x63, 0xEB),
            footer_background: Color32::from_rgb(0x1F, 0x29, 0x37),
            footer_foreground: Color32::from_rgb(0xD1, 0xD5, 0xDB),
            card_title: Color32::from_rgb(0x37, 0x41, 0x51),
            card_body: Color32::from_rgb(0x4B, 0x55, 0x63),
            backdrop: Color32::from_rgba_unmultiplied(0, 0, 0, 153),
            hero_size: 56.0,
            h2_size: 24.0,
            body_size: 16.0,
            small_size: 13.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        let alpha = (color.a() as f32 * opacity.clamp(0.0, 1.0)) as u8;
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
    }

    /// Section accent color, falling back to a neutral grey for bad tokens.
    pub fn accent(token: &str) -> Color32 {
        parse_hex(token).unwrap_or(FALLBACK_ACCENT)
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` is optional).
pub fn parse_hex(token: &str) -> Option<Color32> {
    let hex = token.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, c) in rgb.iter_mut().zip(hex.chars()) {
                let v = c.to_digit(16)? as u8;
                *slot = v * 17;
            }
            Some(Color32::from_rgb(rgb[0], rgb[1], rgb[2]))
        }
        6 => Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color32::from_rgba_unmultiplied(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            channel(6)?,
        )),
        _ => None,
    }
}

/// Mix `amount` of `color` into white, like CSS `color-mix(in srgb, c N%, white)`.
pub fn tint(color: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let mix = |c: u8| (c as f32 * amount + 255.0 * (1.0 - amount)).round() as u8;
    Color32::from_rgb(mix(color.r()), mix(color.g()), mix(color.b()))
}

/// Linear blend between two colors, `t` in 0..=1.
pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_long() {
        assert_eq!(
            parse_hex("#7eb8c9"),
            Some(Color32::from_rgb(0x7E, 0xB8, 0xC9))
        );
        assert_eq!(
            parse_hex("C9A87E"),
            Some(Color32::from_rgb(0xC9, 0xA8, 0x7E))
        );
    }

    #[test]
    fn test_parse_hex_short() {
        assert_eq!(parse_hex("#fff"), Some(Color32::WHITE));
        assert_eq!(parse_hex("#000"), Some(Color32::from_rgb(0, 0, 0)));
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert_eq!(parse_hex("teal"), None);
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("#ééé"), None);
        assert_eq!(Theme::accent("nope"), FALLBACK_ACCENT);
    }

    #[test]
    fn test_tint() {
        let c = Color32::from_rgb(0, 100, 200);
        assert_eq!(tint(c, 0.0), Color32::from_rgb(255, 255, 255));
        assert_eq!(tint(c, 1.0), c);
        assert_eq!(tint(c, 0.2), Color32::from_rgb(204, 224, 244));
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::light().toggled().name, "dark");
        assert_eq!(Theme::dark().toggled().name, "light");
        assert_eq!(Theme::from_name("unknown").name, "light");
    }
}
