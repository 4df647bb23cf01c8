/// Attendance percentage at or above which a student is eligible.
pub const ELIGIBILITY_THRESHOLD: u32 = 75;

/// `attended / total * 100`. Callers validate `total > 0` first.
pub fn percentage(attended: u128, total: u128) -> f64 {
    attended as f64 / total as f64 * 100.0
}

/// Whether `attended / total` reaches the eligibility threshold, decided on
/// the exact counts rather than a rounded percentage.
pub fn is_eligible(attended: u128, total: u128) -> bool {
    meets_target(attended, total, ELIGIBILITY_THRESHOLD)
}

fn meets_target(attended: u128, total: u128, target: u32) -> bool {
    attended * 100 >= total * u128::from(target)
}

/// Minimum number of additional lectures, all attended, needed to reach
/// `target` percent.
///
/// Solves `(attended + x) / (total + x) >= t` for `x`, which gives
/// `x >= (t * total - attended) / (1 - t)`, then rounds up and clamps at 0.
/// With `t = target / 100` this is
/// `x = ceil((target * total - 100 * attended) / (100 - target))`, done in
/// integers so it stays exact for any `u64` counts. A target of 100% or
/// more can only be met if nothing was missed, so `None` is returned when
/// it is out of reach.
pub fn required_lectures(total: u64, attended: u64, target: u32) -> Option<u128> {
    let (total, attended) = (u128::from(total), u128::from(attended));
    if target == 0 || meets_target(attended, total, target) {
        return Some(0);
    }
    if target >= 100 {
        return None;
    }

    let target = u128::from(target);
    let numerator = target * total - 100 * attended;
    let denominator = 100 - target;

    Some(numerator.div_ceil(denominator))
}

/// Lectures still needed to reach the eligibility threshold.
pub fn lectures_to_eligibility(total: u64, attended: u64) -> u128 {
    required_lectures(total, attended, ELIGIBILITY_THRESHOLD).unwrap_or_default()
}

pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.1}")
}
