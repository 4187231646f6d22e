//! Deterministic seeding for record synthesis.
//!
//! Every fabricated record stream derives its RNG seed from a stable xxh64
//! hash of the normalized drug name plus a per-stream salt, so repeated runs
//! for the same drug produce the same records while the individual streams
//! (articles, trials, motifs, ...) stay decorrelated.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use xxhash_rust::xxh64::xxh64;

/// Per-stream salts. Two streams seeded from the same drug name must never
/// share a salt.
pub mod stream {
    pub const ARTICLES: u64 = 0x41_52_54;
    pub const GRAY_LITERATURE: u64 = 0x47_52_41_59;
    pub const CLINICAL_TRIALS: u64 = 0x54_52_49;
    pub const ANNOTATIONS: u64 = 0x41_4e_4e;
    pub const MOTIFS: u64 = 0x4d_4f_54;
    pub const MARKET: u64 = 0x4d_4b_54;
    pub const INNOVATION: u64 = 0x49_4e_4e;
    pub const COMBINATIONS: u64 = 0x43_4d_42;
    pub const REPORT: u64 = 0x52_50_54;
}

/// Calendar year the fabricated corpus treats as current. Pinned so report
/// bytes never drift with the wall clock.
pub const ANCHOR_YEAR: i32 = 2026;

/// First instant of [`ANCHOR_YEAR`] as a unix timestamp.
const ANCHOR_EPOCH_SECS: i64 = 1_767_225_600;

const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Stable 64-bit seed for a drug name within one generation stream.
///
/// Names are trimmed and lowercased first, so "Atorvastatin" and
/// "atorvastatin " seed identical streams.
pub fn stable_seed(name: &str, salt: u64) -> u64 {
    xxh64(name.trim().to_lowercase().as_bytes(), salt)
}

/// RNG for a generation stream keyed on the drug name.
pub fn seeded_rng(name: &str, salt: u64) -> StdRng {
    StdRng::seed_from_u64(stable_seed(name, salt))
}

/// Report timestamp for a drug name, somewhere inside the anchor year.
///
/// Wall-clock time never reaches the reports; identical inputs have to
/// serialize to identical bytes.
pub fn stable_datetime(name: &str) -> DateTime<Utc> {
    let offset = (stable_seed(name, stream::REPORT) % SECONDS_PER_YEAR) as i64;
    DateTime::from_timestamp(ANCHOR_EPOCH_SECS + offset, 0).unwrap_or_default()
}
