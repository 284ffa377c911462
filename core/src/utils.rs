/// Inclusive range check: `low <= value <= high`.
pub fn is_between<T: PartialOrd>(value: T, low: T, high: T) -> bool {
    value >= low && value <= high
}

/// Short hex preview of a byte slice for log lines.
pub fn hex_preview(bytes: &[u8], max: usize) -> String {
    let mut s: String = bytes
        .iter()
        .take(max)
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ");
    if bytes.len() > max {
        s.push_str(" ..");
    }
    s
}
