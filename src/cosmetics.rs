//! Purely presentational state rebuilt from engine events: particle bursts,
//! floating score text, the combo banner. Nothing here feeds back into play.

use rand::Rng;

use crate::engine::GameEvent;
use crate::food::{Effect, FoodKind};

const BURST_SIZE: usize = 12;
const PARTICLE_LIFE: f32 = 0.6; // seconds
const TEXT_LIFE: f32 = 0.9;
const TEXT_RISE: f32 = 1.5; // cells per second
const BANNER_LIFE: f32 = 1.2;
/// Velocity kept after one 60 Hz frame.
const DAMPING: f32 = 0.92;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    /// Position in grid units.
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub age: f32,
    pub kind: FoodKind,
}

impl Particle {
    /// 1.0 when spawned, fading to 0.0.
    pub fn alpha(&self) -> f32 {
        (1.0 - self.age / PARTICLE_LIFE).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatingText {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub age: f32,
}

impl FloatingText {
    pub fn alpha(&self) -> f32 {
        (1.0 - self.age / TEXT_LIFE).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Banner {
    Combo(u32),
    ComboEnded,
    Effect(Effect),
    EffectEnded(Effect),
    NewHighScore(u32),
}

#[derive(Clone, Debug, Default)]
pub struct Cosmetics {
    particles: Vec<Particle>,
    texts: Vec<FloatingText>,
    banner: Option<(Banner, f32)>,
}

impl Cosmetics {
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn texts(&self) -> &[FloatingText] {
        &self.texts
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref().map(|(b, _)| b)
    }

    pub fn observe<R: Rng + ?Sized>(&mut self, event: &GameEvent, rng: &mut R) {
        match event {
            GameEvent::FoodEaten { cell, kind, points, combo } => {
                let (cx, cy) = (cell.x as f32 + 0.5, cell.y as f32 + 0.5);
                for _ in 0..BURST_SIZE {
                    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
                    let speed: f32 = rng.gen_range(2.0..6.0);
                    self.particles.push(Particle {
                        x: cx,
                        y: cy,
                        vx: angle.cos() * speed,
                        vy: angle.sin() * speed,
                        age: 0.0,
                        kind: *kind,
                    });
                }
                self.texts.push(FloatingText { text: format!("+{points}"), x: cx, y: cy, age: 0.0 });
                if *combo > 1 {
                    self.show(Banner::Combo(*combo));
                }
            }
            GameEvent::ComboEnded => self.show(Banner::ComboEnded),
            GameEvent::EffectStarted(e) => self.show(Banner::Effect(*e)),
            GameEvent::EffectExpired(e) => self.show(Banner::EffectEnded(*e)),
            GameEvent::NewHighScore(s) => {
                // a combo banner already on screen wins
                if !matches!(self.banner(), Some(Banner::Combo(_))) {
                    self.show(Banner::NewHighScore(*s));
                }
            }
            GameEvent::GameOver { .. } => {}
        }
    }

    fn show(&mut self, banner: Banner) {
        self.banner = Some((banner, 0.0));
    }

    /// Advances every animation by `dt` seconds and drops finished ones.
    pub fn update(&mut self, dt: f32) {
        let damping = DAMPING.powf(dt * 60.0);
        for p in &mut self.particles {
            p.x += p.vx * dt;
            p.y += p.vy * dt;
            p.vx *= damping;
            p.vy *= damping;
            p.age += dt;
        }
        self.particles.retain(|p| p.age < PARTICLE_LIFE);

        for t in &mut self.texts {
            t.y -= TEXT_RISE * dt;
            t.age += dt;
        }
        self.texts.retain(|t| t.age < TEXT_LIFE);

        if let Some((_, age)) = &mut self.banner {
            *age += dt;
            if *age >= BANNER_LIFE {
                self.banner = None;
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Cosmetics::default();
    }
}
