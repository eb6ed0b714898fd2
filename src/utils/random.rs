use rand::RngCore;

const MODULUS: u64 = 2_147_483_647;
const MULTIPLIER: u64 = 16_807;

/// Seed used when none is given
pub const DEFAULT_SEED: u64 = 13_597;

/// Multiplicative congruential generator, `seed = seed * 16807 mod (2^31 - 1)`.
///
/// The whole state is the seed, so two generators created from the same seed
/// produce the same stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    seed: u64,
}
impl Lcg {
    /// Create a generator. The seed is reduced modulo `2^31 - 1`; a seed of
    /// zero would be a fixed point and is replaced by 1.
    pub fn new(seed: u64) -> Self {
        let seed = match seed % MODULUS {
            0 => 1,
            s => s,
        };
        Self { seed }
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Next draw, uniform in `[0, 1)`
    pub fn rand_r(&mut self) -> f64 {
        self.seed = self.seed * MULTIPLIER % MODULUS;
        self.seed as f64 / MODULUS as f64
    }
}
impl Default for Lcg {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

// Lets the generator drive `rand_distr` distributions
impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        (self.rand_r() * 4_294_967_296.0) as u32
    }
    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_u32());
        let hi = u64::from(self.next_u32());
        (hi << 32) | lo
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Isotropic unit vector.
///
/// Rejection-samples `(x, y)` in the unit disk, then maps the point onto the
/// sphere: `z = 1 - 2s`, `(x, y)` scaled by `2 sqrt(1 - s)` where `s = x^2 + y^2`.
pub fn rand_vec3(rng: &mut Lcg) -> [f64; 3] {
    let (mut x, mut y, mut s) = (0.0, 0.0, 2.0);
    while s > 1.0 {
        x = 2.0 * rng.rand_r() - 1.0;
        y = 2.0 * rng.rand_r() - 1.0;
        s = x * x + y * y;
    }
    let scale = 2.0 * (1.0 - s).sqrt();
    [scale * x, scale * y, 1.0 - 2.0 * s]
}
