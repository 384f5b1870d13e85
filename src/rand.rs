//! Seeded pseudo-random numbers for reproducible question banks.
//!
//! The hash and generator step are fixed (FNV-1a over UTF-16 code units and a 32-bit linear
//! congruential step) so that the same seed string yields the same sequence on every run.

const FNV_OFFSET_BASIS: u32 = 2166136261;
const FNV_PRIME: u32 = 16777619;

const LCG_MULTIPLIER: u32 = 1664525;
const LCG_INCREMENT: u32 = 1013904223;

/// Hashes a string to an unsigned 32-bit value with FNV-1a.
pub fn hash_str(s: &str) -> u32 {
    s.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

pub struct Rng {
    state: u32,
}

impl Rng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn from_seed_str(seed: &str) -> Self {
        Self::new(hash_str(seed))
    }

    /// Advances the generator and returns a value in `[0, 1]`.
    ///
    /// The upper bound is only reached when the state is `u32::MAX`; the range helpers below
    /// clamp for that case.
    pub fn next(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);

        f64::from(self.state) / f64::from(u32::MAX)
    }

    /// Returns an integer in `min..=max`. A reversed range yields `min`.
    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        if max < min {
            return min;
        }

        let span = (max - min + 1) as f64;
        let n = (self.next() * span).floor() as i64 + min;

        n.min(max)
    }

    /// Returns an index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        assert!(len > 0);

        ((self.next() * len as f64).floor() as usize).min(len - 1)
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }

        let i = self.index(items.len());
        items.get(i)
    }

    /// Fisher-Yates shuffle into a new vector, leaving `items` untouched.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();

        for i in (1..out.len()).rev() {
            let j = self.index(i + 1);
            out.swap(i, j);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv1a() {
        assert_eq!(hash_str(""), 2166136261);
        assert_eq!(hash_str("a"), 3826002220);
        assert_eq!(hash_str("abc"), 440920331);
        assert_eq!(hash_str("LÄS"), 3574238890);
    }

    #[test]
    fn lcg_step() {
        let mut rng = Rng::new(1);

        rng.next();
        assert_eq!(rng.state, 1015568748);
        rng.next();
        assert_eq!(rng.state, 1586005467);
        rng.next();
        assert_eq!(rng.state, 2165703038);
    }

    #[test]
    fn next_in_unit_range() {
        let mut rng = Rng::new(0);

        assert_eq!(rng.next(), f64::from(LCG_INCREMENT) / f64::from(u32::MAX));

        for _ in 0..1000 {
            let x = rng.next();
            assert!((0.0..=1.0).contains(&x), "{x}");
        }
    }

    #[test]
    fn int() {
        let mut rng = Rng::new(42);

        let rolls: Vec<_> = (0..10).map(|_| rng.int(1, 6)).collect();

        assert_eq!(rolls, &[2, 1, 4, 2, 3, 1, 3, 1, 6, 6]);
    }

    #[test]
    fn int_reversed_range() {
        let mut rng = Rng::new(42);

        assert_eq!(rng.int(5, 2), 5);
    }

    #[test]
    fn int_at_top_of_range() {
        let mut rng = Rng::new(0);
        // The state after this step is u32::MAX, so next() returns exactly 1.0.
        rng.state = u32::MAX
            .wrapping_sub(LCG_INCREMENT)
            .wrapping_mul(modular_inverse(LCG_MULTIPLIER));

        assert_eq!(rng.int(1, 6), 6);
    }

    #[test]
    fn shuffle() {
        let mut rng = Rng::new(7);

        let items = (0..10).collect::<Vec<_>>();
        let shuffled = rng.shuffle(&items);

        assert_eq!(shuffled, &[3, 9, 5, 1, 7, 0, 6, 4, 8, 2]);
        assert_eq!(items, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Rng::from_seed_str("prov-2024");
        let mut b = Rng::from_seed_str("prov-2024");

        for _ in 0..100 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn pick_empty() {
        let mut rng = Rng::new(3);
        let empty: [u8; 0] = [];

        assert_eq!(rng.pick(&empty), None);
        assert_eq!(rng.pick(&["ord"]), Some(&"ord"));
    }

    fn modular_inverse(a: u32) -> u32 {
        // Newton iteration for the inverse of an odd number mod 2^32.
        let mut x = a;
        for _ in 0..5 {
            x = x.wrapping_mul(2u32.wrapping_sub(a.wrapping_mul(x)));
        }
        x
    }
}
