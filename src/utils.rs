//! Note Utilities
//!
//! Id, rotation and date helpers used when creating and rendering notes.

use chrono::{DateTime, Local, TimeZone, Utc};
use rand::Rng;

/// Length of a generated note id
const ID_LEN: usize = 7;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Largest tilt applied to a note, in degrees
pub const MAX_ROTATION: f64 = 3.0;

/// Random base-36 id, unique enough for a single board
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Random tilt in [-MAX_ROTATION, MAX_ROTATION]
pub fn random_rotation() -> f64 {
    rand::thread_rng().gen_range(-MAX_ROTATION..=MAX_ROTATION)
}

/// Current time in epoch milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a timestamp in the viewer's local time, e.g. `10/19 14:05`
pub fn format_date(timestamp_ms: i64) -> String {
    format_date_in(timestamp_ms, &Local)
}

/// Same as [`format_date`] with an explicit offset
pub fn format_date_in<Tz: TimeZone>(timestamp_ms: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::<Utc>::from_timestamp_millis(timestamp_ms) {
        Some(utc) => utc.with_timezone(tz).format("%-m/%-d %H:%M").to_string(),
        None => String::new(),
    }
}
