/// Format a distance for display, e.g. `1234.5` -> `"1,234.5 km"`.
///
/// Uses thousands separators and at most two fraction digits, trailing
/// zeros dropped.
pub fn format_distance(km: f64) -> String {
    if !km.is_finite() {
        return format!("{} km", km);
    }

    let fixed = format!("{:.2}", km.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if km < 0.0 && fixed != "0.00" { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{}{} km", sign, grouped)
    } else {
        format!("{}{}.{} km", sign, grouped, frac_part)
    }
}
