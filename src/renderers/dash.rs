//! Dash arrays that tile a path exactly
//!
//! A nominal dash/gap pattern almost never divides a path's length, which
//! leaves a clipped dash at the end. The pattern is instead repeated a whole
//! number of times, chosen as the nearest count to what a dash stretched to
//! 1.2x nominal would need, and the dash length absorbs the difference. Gaps
//! keep their nominal length.

use crate::models::DashStyle;

/// Nominal dash stretch used to pick the repeat count
const DASH_STRETCH: f32 = 1.2;

/// Shortest ungrouped path, in dash lengths past one gap, worth dashing
const MIN_DASH_FACTOR: f32 = 1.6;

/// On/off pattern for a stroke of `width` along a path of `length`
///
/// Lengths are returned in multiples of the stroke width. An empty pattern
/// means the path is too short to dash and should be drawn solid.
pub fn dash_array(length: f32, style: &DashStyle, width: f32) -> Vec<f64> {
    if width <= 0.0 {
        return Vec::new();
    }

    if style.is_grouped() {
        grouped_dash_array(length, style, width)
    } else {
        single_dash_array(length, style, width)
    }
}

fn single_dash_array(length: f32, style: &DashStyle, width: f32) -> Vec<f64> {
    let dash = style.dash_length;
    let gap = style.gap_length;

    let min_length = gap + MIN_DASH_FACTOR * dash;
    if length < min_length {
        return Vec::new();
    }

    let length = length + gap;
    let period = gap + DASH_STRETCH * dash;
    let Some(count) = repeat_count(length, period) else {
        return Vec::new();
    };

    let combined = length / count;
    let actual_dash = combined - gap;

    vec![(actual_dash / width) as f64, (gap / width) as f64]
}

fn grouped_dash_array(length: f32, style: &DashStyle, width: f32) -> Vec<f64> {
    let dash = style.dash_length;
    let gap = style.gap_length;
    let group_gap = style.group_gap_length;
    let n = style.group_size as f32;

    let min_length = ((dash + gap) * n) - gap + group_gap;
    if length < min_length {
        return Vec::new();
    }

    let length = length + group_gap;
    let period = (((DASH_STRETCH * dash) + gap) * n) - gap + group_gap;
    let Some(count) = repeat_count(length, period) else {
        return Vec::new();
    };

    let combined_group = length / count;
    let combined_dash = combined_group - group_gap;
    let individual_dash = (combined_dash + gap) / n;
    let actual_dash = individual_dash - gap;

    let mut pattern = Vec::with_capacity(2 * style.group_size as usize);
    for _ in 1..style.group_size {
        pattern.push((actual_dash / width) as f64);
        pattern.push((gap / width) as f64);
    }
    pattern.push((actual_dash / width) as f64);
    pattern.push((group_gap / width) as f64);
    pattern
}

/// Nearest whole number of periods, ties to even; `None` when degenerate
fn repeat_count(length: f32, period: f32) -> Option<f32> {
    if period <= 0.0 {
        return None;
    }
    let count = (length / period).round_ties_even();
    (count >= 1.0).then_some(count)
}
