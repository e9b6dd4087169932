//! Human-readable byte counts
//!
//! Binary (1024-based) units with short names: `B`, `KB`, `MB`, `GB`, `TB`,
//! `PB`, `EB`. Sizes below 1 KB print as a whole byte count.

/// Unit prefixes above plain bytes, in order of magnitude
const UNIT_PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Bytes per step between units
const STEP: u64 = 1024;

/// Format a byte count, e.g. `500 B`, `10.00 KB`, `1.50 GB`
///
/// Picks the largest unit for which the scaled value is at least 1 and
/// prints it with two decimal places.
pub fn format_size(bytes: u64) -> String {
    if bytes < STEP {
        return format!("{} B", bytes);
    }

    let mut exponent = 0;
    let mut threshold = STEP;
    while exponent + 1 < UNIT_PREFIXES.len() && bytes / threshold >= STEP {
        threshold *= STEP;
        exponent += 1;
    }

    let scaled = bytes as f64 / threshold as f64;
    format!("{:.2} {}B", scaled, UNIT_PREFIXES[exponent])
}
