//! Key hashing and the pseudo-random sequence behind placeholder images.
//!
//! Not cryptographic. The only requirement is that one key always yields one
//! sequence.

/// Fold-multiply-rotate string hash (xmur3 family).
///
/// Each call to [`StringHash::next_u32`] yields another well-mixed 32-bit value.
#[derive(Debug, Clone)]
pub struct StringHash(u32);

impl StringHash {
    pub fn new(key: &str) -> Self {
        let units: Vec<u16> = key.encode_utf16().collect();
        #[allow(clippy::cast_possible_truncation)]
        let mut h = 1_779_033_703_u32 ^ units.len() as u32;
        for unit in units {
            h = (h ^ u32::from(unit)).wrapping_mul(3_432_918_353);
            h = h.rotate_left(13);
        }
        Self(h)
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut h = self.0;
        h = (h ^ (h >> 16)).wrapping_mul(2_246_822_507);
        h = (h ^ (h >> 13)).wrapping_mul(3_266_489_909);
        h ^= h >> 16;
        self.0 = h;
        h
    }
}

/// Seed for a key; an empty key gets a random seed.
pub fn seed_for(key: &str) -> u32 {
    if key.is_empty() {
        rand::random()
    } else {
        StringHash::new(key).next_u32()
    }
}

/// Small-state generator (mulberry32 family).
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6d2b_79f5);
        let a = self.state;
        let mut t = (a ^ (a >> 15)).wrapping_mul(1 | a);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        t ^ (t >> 14)
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn next_index(&mut self, len: usize) -> usize {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (self.next_f64() * len as f64) as usize;
        index.min(len - 1)
    }

    pub fn next_bool(&mut self) -> bool {
        self.next_f64() < 0.5
    }
}
