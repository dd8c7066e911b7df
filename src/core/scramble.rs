//! Hover "decrypt" effect: random glyphs resolve left to right into the real text.

use crate::config::ScrambleConfig;
use crate::prng::Prng;

/// Declared glyph alphabet.
pub const SCRAMBLE_GLYPHS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()";

/// The shipped site only ever samples the leading letters of the alphabet.
pub const LETTER_GLYPHS: usize = 26;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleFrame {
    pub text: String,
    /// Last frame of the run; the timer should stop.
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct Scramble {
    target: String,
    target_chars: Vec<char>,
    glyphs: Vec<char>,
    step: f64,
    iterations: f64,
    running: bool,
}

impl Scramble {
    pub fn new(target: &str, cfg: &ScrambleConfig) -> Self {
        let all: Vec<char> = SCRAMBLE_GLYPHS.chars().collect();
        let glyphs = if cfg.full_alphabet {
            all
        } else {
            all[..LETTER_GLYPHS].to_vec()
        };
        Self {
            target: target.to_string(),
            target_chars: target.chars().collect(),
            glyphs,
            step: cfg.step,
            iterations: 0.0,
            running: false,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Glyphs random positions are drawn from.
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn iterations(&self) -> f64 {
        self.iterations
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin a fresh run, dropping any progress from an earlier one.
    pub fn restart(&mut self) {
        self.iterations = 0.0;
        self.running = true;
    }

    /// Render one timer tick. `None` once the run is over or was cancelled.
    pub fn tick(&mut self, rng: &mut Prng) -> Option<ScrambleFrame> {
        if !self.running {
            return None;
        }

        let text: String = self
            .target_chars
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if (i as f64) < self.iterations {
                    c
                } else {
                    self.glyphs[rng.gen_range_usize(0, self.glyphs.len())]
                }
            })
            .collect();

        let finished = self.iterations >= self.target_chars.len() as f64;
        if finished {
            self.running = false;
        }
        self.iterations += self.step;

        Some(ScrambleFrame { text, finished })
    }

    /// Abort the run. Returns the text the element must show right now.
    pub fn cancel(&mut self) -> &str {
        self.running = false;
        &self.target
    }
}
