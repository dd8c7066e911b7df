// Minimal PRNG (no external crates).
//
// This is NOT cryptographically secure.
// It drives node placement, flicker and scramble glyphs, and keeps tests reproducible.

#[derive(Debug, Clone)]
pub struct Prng {
    state: u64,
}

impl Prng {
    pub fn new(seed: u64) -> Self {
        // Avoid a zero state.
        let seed = if seed == 0 { 0x9E3779B97F4A7C15 } else { seed };
        Self { state: seed }
    }

    /// Seed from a float in `[0, 1)`, e.g. `Math.random()` on the browser side.
    pub fn from_unit_f64(r: f64) -> Self {
        let r = if r.is_finite() { r.clamp(0.0, 1.0) } else { 0.0 };
        Self::new((r * (u64::MAX as f64)) as u64)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        // xorshift64*
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform in `[0, 1)` with 53 bits of precision.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    #[inline]
    pub fn gen_range_f64(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }

    #[inline]
    pub fn gen_range_usize(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        let span = (high - low) as u64;
        low + (self.next_u64() % span) as usize
    }

    /// `true` when a uniform draw exceeds `threshold`, i.e. `random() > threshold`.
    #[inline]
    pub fn exceeds(&mut self, threshold: f64) -> bool {
        self.next_f64() > threshold
    }
}
