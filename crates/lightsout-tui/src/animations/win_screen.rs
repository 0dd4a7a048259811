use crossterm::style::Color;
use rand::prelude::SliceRandom;
use rand::Rng;

use super::particles::{
    hue_to_rgb, random_glow_color, EffectType, Particle, BULB_CHARS, SPARKLE_CHARS,
};

/// Shown on every win, above the rotating flourish
pub const WIN_TITLE: &str = "Congratulations! You've won!";

const WIN_MESSAGES: [&str; 7] = [
    "Every light is out!",
    "Lights out, well done!",
    "Darkness achieved!",
    "Perfectly dark!",
    "Not a single bulb left!",
    "Brilliant... and now dark!",
    "The board sleeps tonight!",
];

const ASCII_BANNERS: [&str; 2] = [
    r#"
 _     ___ ____ _   _ _____ ____     ___  _   _ _____ _
| |   |_ _/ ___| | | |_   _/ ___|   / _ \| | | |_   _| |
| |    | | |  _| |_| | | | \___ \  | | | | | | | | | | |
| |___ | | |_| |  _  | | |  ___) | | |_| | |_| | | | |_|
|_____|___\____|_| |_| |_| |____/   \___/ \___/  |_| (_)
"#,
    r#"
 ██╗    ██╗██╗███╗   ██╗
 ██║    ██║██║████╗  ██║
 ██║ █╗ ██║██║██╔██╗ ██║
 ██║███╗██║██║██║╚██╗██║
 ╚███╔███╔╝██║██║ ╚████║
  ╚══╝╚══╝ ╚═╝╚═╝  ╚═══╝
"#,
];

/// The animated win screen
pub struct WinScreen {
    particles: Vec<Particle>,
    effect_type: EffectType,
    frame_count: u32,
    rainbow_offset: f32,
    message_index: usize,
    banner_index: usize,
    firework_cooldown: u32,
    pub width: u16,
    pub height: u16,
}

impl WinScreen {
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            particles: Vec::new(),
            effect_type: EffectType::random(),
            frame_count: 0,
            rainbow_offset: 0.0,
            message_index: rng.gen_range(0..WIN_MESSAGES.len()),
            banner_index: rng.gen_range(0..ASCII_BANNERS.len()),
            firework_cooldown: 0,
            width: 80,
            height: 24,
        }
    }

    /// Start a fresh celebration
    pub fn reset(&mut self) {
        let mut rng = rand::thread_rng();
        self.particles.clear();
        self.frame_count = 0;
        self.rainbow_offset = 0.0;
        self.effect_type = EffectType::random();
        self.message_index = rng.gen_range(0..WIN_MESSAGES.len());
        self.banner_index = rng.gen_range(0..ASCII_BANNERS.len());
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn update(&mut self) {
        self.frame_count += 1;
        self.rainbow_offset += 0.05;

        // Switch effects periodically
        if self.frame_count % 300 == 0 {
            self.effect_type = EffectType::random();
        }

        let floor = self.height as f32 + 5.0;
        let gravity = match self.effect_type {
            EffectType::Bulbs => 0.02,
            EffectType::Fireworks => 0.15,
            EffectType::Sparkles => 0.0,
        };
        self.particles.retain_mut(|p| p.step(gravity, floor));

        match self.effect_type {
            EffectType::Bulbs => self.spawn_bulbs(),
            EffectType::Fireworks => self.spawn_fireworks(),
            EffectType::Sparkles => self.spawn_sparkles(),
        }
    }

    fn spawn_bulbs(&mut self) {
        let mut rng = rand::thread_rng();
        for _ in 0..2 {
            self.particles.push(Particle {
                x: rng.gen_range(0.0..self.width.max(1) as f32),
                y: -1.0,
                vx: rng.gen_range(-0.2..0.2),
                vy: rng.gen_range(0.2..0.6),
                char: *BULB_CHARS.choose(&mut rng).unwrap_or(&'●'),
                color: random_glow_color(),
                lifetime: rng.gen_range(4.0..8.0),
            });
        }
    }

    fn spawn_fireworks(&mut self) {
        if self.firework_cooldown > 0 {
            self.firework_cooldown -= 1;
            return;
        }

        // Narrow terminals have no room for a burst
        if self.width < 24 || self.height < 12 {
            return;
        }

        let mut rng = rand::thread_rng();
        if rng.gen_bool(0.08) {
            let x = rng.gen_range(10.0..(self.width as f32 - 10.0));
            let y = rng.gen_range(5.0..(self.height as f32 / 2.0));
            let color = hue_to_rgb(rng.gen_range(0.0..1.0));

            for _ in 0..25 {
                let angle = rng.gen_range(0.0..std::f32::consts::TAU);
                let speed = rng.gen_range(0.5..2.0);
                self.particles.push(Particle {
                    x,
                    y,
                    vx: angle.cos() * speed,
                    vy: angle.sin() * speed,
                    char: '●',
                    color,
                    lifetime: rng.gen_range(1.0..2.5),
                });
            }
            self.firework_cooldown = 15;
        }
    }

    fn spawn_sparkles(&mut self) {
        let mut rng = rand::thread_rng();
        for _ in 0..4 {
            self.particles.push(Particle {
                x: rng.gen_range(0.0..self.width.max(1) as f32),
                y: rng.gen_range(0.0..self.height.max(1) as f32),
                vx: rng.gen_range(-0.2..0.2),
                vy: rng.gen_range(-0.2..0.2),
                char: *SPARKLE_CHARS.choose(&mut rng).unwrap_or(&'*'),
                color: Color::Rgb {
                    r: 255,
                    g: 255,
                    b: rng.gen_range(150..255),
                },
                lifetime: rng.gen_range(0.5..1.5),
            });
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn current_message(&self) -> &str {
        WIN_MESSAGES[self.message_index]
    }

    pub fn current_banner(&self) -> &str {
        ASCII_BANNERS[self.banner_index]
    }

    pub fn rainbow_offset(&self) -> f32 {
        self.rainbow_offset
    }
}

impl Default for WinScreen {
    fn default() -> Self {
        Self::new()
    }
}
