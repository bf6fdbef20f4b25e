//! Input generators. All return `len` elements.

use std::env;
use std::fmt;
use std::ops::RangeInclusive;

use once_cell::sync::OnceCell;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// The input distributions a sort is reported against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    Random,
    Front,
    Middle,
    Back,
    Reversed,
    Bitonic,
    Rotated,
}

impl Pattern {
    pub const ALL: [Pattern; 7] = [
        Pattern::Random,
        Pattern::Front,
        Pattern::Middle,
        Pattern::Back,
        Pattern::Reversed,
        Pattern::Bitonic,
        Pattern::Rotated,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Pattern::Random => "Randomized Vector",
            Pattern::Front => "Almost Sorted (Front) Vector",
            Pattern::Middle => "Almost Sorted (Middle) Vector",
            Pattern::Back => "Almost Sorted (Back) Vector",
            Pattern::Reversed => "Reversed Vector",
            Pattern::Bitonic => "Bitonic Vector",
            Pattern::Rotated => "Rotated Vector",
        }
    }

    /// Short lowercase name, usable in file and benchmark names.
    pub fn short_name(self) -> &'static str {
        match self {
            Pattern::Random => "random",
            Pattern::Front => "front_anomaly",
            Pattern::Middle => "middle_anomaly",
            Pattern::Back => "back_anomaly",
            Pattern::Reversed => "descending",
            Pattern::Bitonic => "bitonic",
            Pattern::Rotated => "rotated",
        }
    }

    /// Generates the pattern, `Random` draws from `seed`.
    pub fn generate(self, len: usize, seed: u64) -> Vec<i32> {
        match self {
            Pattern::Random => random_seeded(len, seed),
            Pattern::Front => front_anomaly(len),
            Pattern::Middle => middle_anomaly(len),
            Pattern::Back => back_anomaly(len),
            Pattern::Reversed => descending(len),
            Pattern::Bitonic => bitonic(len),
            Pattern::Rotated => rotated(len),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

static SEED: OnceCell<u64> = OnceCell::new();

/// Seed shared by every random pattern in this process. Set `OVERRIDE_SEED` to reproduce a run.
pub fn random_init_seed() -> u64 {
    *SEED.get_or_init(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .and_then(|seed| seed.parse().ok())
            .unwrap_or_else(|| thread_rng().gen())
    })
}

fn rng_for(len: usize) -> StdRng {
    StdRng::seed_from_u64(random_init_seed() ^ (len as u64).rotate_left(32))
}

/// Uniformly distributed values in `0..=10 * len`.
pub fn random(len: usize) -> Vec<i32> {
    random_uniform(len, 0..=upper_bound(len))
}

/// Like [`random`] with an explicit seed.
pub fn random_seeded(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let upper = upper_bound(len);
    (0..len).map(|_| rng.gen_range(0..=upper)).collect()
}

fn upper_bound(len: usize) -> i32 {
    len.saturating_mul(10).min(i32::MAX as usize) as i32
}

pub fn random_uniform(len: usize, range: RangeInclusive<i32>) -> Vec<i32> {
    let mut rng = rng_for(len);
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Values in `1..=len` following a zipfian distribution, many duplicates of the small ones.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = rng_for(len);
    let dist = ZipfDistribution::new(len, exponent).expect("zipf exponent must be positive");
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

/// `[n - 1, n - 2, ..., 0]`
pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

/// `[n, 1, 2, ..., n - 1]`
pub fn front_anomaly(len: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut v = Vec::with_capacity(len);
    v.push(len as i32);
    v.extend(1..len as i32);
    v
}

/// `[0, 1, ..., n/2 - 1, n, n/2, ..., n - 2]`
pub fn middle_anomaly(len: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let half = (len / 2) as i32;
    let mut v = Vec::with_capacity(len);
    v.extend(0..half);
    v.push(len as i32);
    v.extend(half..(len as i32 - 1));
    v
}

/// Ascending with the last two elements swapped.
pub fn back_anomaly(len: usize) -> Vec<i32> {
    let mut v = ascending(len);
    if len >= 2 {
        v.swap(len - 2, len - 1);
    }
    v
}

/// Ascending up to the middle, then descending: `[0, 1, 2, 3, 4, 5, 4, 3, 2, 1]`.
pub fn bitonic(len: usize) -> Vec<i32> {
    let mid = len / 2;
    (0..len)
        .map(|i| if i < mid { i as i32 } else { (len - i) as i32 })
        .collect()
}

/// Low and high values interleaved: `[0, 9, 2, 8, 4, 7, 6, 6, 8, 5]`.
pub fn rotated(len: usize) -> Vec<i32> {
    let mut high = len as i32;
    (0..len)
        .map(|i| {
            if i % 2 == 0 {
                i as i32
            } else {
                high -= 1;
                high
            }
        })
        .collect()
}
