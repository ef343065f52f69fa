//! Intro starfield
//!
//! A field of twinkling stars shown before the session check. Positions are
//! normalised to `0.0..1.0` so the field scales with the window.

use std::f32::consts::TAU;
use std::time::{Duration, Instant};

use rand::Rng;

pub const STAR_COUNT: usize = 180;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    /// Radius in points
    pub size: f32,
    /// Seconds per twinkle
    pub period: f32,
    /// Seconds
    pub phase: f32,
    pub opacity: f32,
}

impl Star {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(0.0..1.0),
            y: rng.gen_range(0.0..1.0),
            size: rng.gen_range(0.5..=3.0),
            period: rng.gen_range(2.0..=6.0),
            phase: rng.gen_range(0.0..=5.0),
            opacity: rng.gen_range(0.1..=0.6),
        }
    }

    /// Opacity at `elapsed` seconds, oscillating between the base opacity
    /// and full brightness
    pub fn brightness(&self, elapsed: f32) -> f32 {
        let wave = (((elapsed + self.phase) / self.period) * TAU).sin() * 0.5 + 0.5;
        self.opacity + (1.0 - self.opacity) * wave
    }
}

pub struct Intro {
    stars: Vec<Star>,
    started: Instant,
    duration: Duration,
}

impl Intro {
    pub fn new(duration: Duration) -> Self {
        Self::with_rng(duration, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(duration: Duration, rng: &mut R) -> Self {
        let stars = (0..STAR_COUNT).map(|_| Star::random(rng)).collect();
        Self {
            stars,
            started: Instant::now(),
            duration,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed() >= self.duration
    }

    /// Title opacity: fades in over the first second and out over the last
    pub fn title_alpha(&self) -> f32 {
        let elapsed = self.elapsed().as_secs_f32();
        let remaining = self.duration.as_secs_f32() - elapsed;
        elapsed.min(remaining).clamp(0.0, 1.0)
    }
}
