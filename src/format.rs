use crate::config::UNIT_SUFFIXES;

/// Format a byte count with binary units (e.g. `1.50 MB`)
///
/// Counts below 1024 are shown exactly. Larger counts are scaled by 1024
/// until they drop below 1024 or the units run out, so exact powers of 1024
/// land on the next unit (`1024` is `1.00 KB`, never `1024.00 B`).
pub fn format_bytes(size: u64) -> String {
    if size < 1024 {
        return format!("{} B", size);
    }

    let mut value = size as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNIT_SUFFIXES.len() {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}B", value, UNIT_SUFFIXES[unit])
}
