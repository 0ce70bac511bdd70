//! Filename and file size helpers

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Format a byte count for display (`512 B`, `1.5 KB`, `2.4 MB`)
pub fn format_file_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

/// Lowercase extension of a filename, or an empty string when there is none
pub fn get_file_type(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => String::new(),
    }
}

/// Convert a fractional MiB count to bytes, rounding to the nearest byte
pub fn mebibytes(amount: f64) -> u64 {
    (amount * MIB as f64).round() as u64
}
