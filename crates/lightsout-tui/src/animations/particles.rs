use crossterm::style::Color;
use rand::Rng;

/// A single particle in the celebration
#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub char: char,
    pub color: Color,
    pub lifetime: f32,
}

impl Particle {
    pub fn is_visible(&self, width: u16, height: u16) -> bool {
        self.x >= 0.0
            && self.x < width as f32
            && self.y >= 0.0
            && self.y < height as f32
            && self.lifetime > 0.0
    }

    /// Advance one frame under gravity; returns false once the particle is spent
    pub fn step(&mut self, gravity: f32, floor: f32) -> bool {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += gravity;
        self.lifetime -= 0.016;
        self.lifetime > 0.0 && self.y < floor
    }
}

/// Effect types for the win screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectType {
    /// Bulbs drifting down like snow
    Bulbs,
    Fireworks,
    Sparkles,
}

impl EffectType {
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        match rng.gen_range(0..3) {
            0 => EffectType::Bulbs,
            1 => EffectType::Fireworks,
            _ => EffectType::Sparkles,
        }
    }
}

/// Generate a random warm light color
pub fn random_glow_color() -> Color {
    let mut rng = rand::thread_rng();
    match rng.gen_range(0..5) {
        0 => Color::Yellow,
        1 => Color::White,
        2 => Color::Rgb { r: 255, g: 200, b: 90 },
        3 => Color::Rgb { r: 255, g: 240, b: 180 },
        _ => Color::Rgb { r: 255, g: 160, b: 60 },
    }
}

/// Convert hue (0.0-1.0) to RGB color
pub fn hue_to_rgb(hue: f32) -> Color {
    let h = hue.rem_euclid(1.0) * 6.0;
    let x = (1.0 - (h % 2.0 - 1.0).abs()) * 255.0;

    let (r, g, b) = match h as i32 % 6 {
        0 => (255, x as u8, 0),
        1 => (x as u8, 255, 0),
        2 => (0, 255, x as u8),
        3 => (0, x as u8, 255),
        4 => (x as u8, 0, 255),
        _ => (255, 0, x as u8),
    };

    Color::Rgb { r, g, b }
}

/// Light bulb characters
pub const BULB_CHARS: &[char] = &['○', '◌', '◎', '●', '◯'];

/// Sparkle characters
pub const SPARKLE_CHARS: &[char] = &['✦', '✧', '★', '☆', '✫', '✬', '*'];
