//! Item layout math: slot centers, snapped handle widths, nearest-item
//! resolution and mid-drag width interpolation.

use tracing::warn;

use crate::{geometry::TrackBounds, prop::TextMeasure};

use super::{HANDLE_PADDING, MIN_HANDLE_WIDTH, SelectorError};

/// One discrete labeled position along the track.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSlot {
    /// Position in the item sequence.
    pub index: usize,
    /// Label rendered at this position.
    pub label: String,
    /// Horizontal center of the item's equal-width slot.
    pub center_x: f32,
    /// Handle width used when a handle snaps to this item.
    pub snapped_width: f32,
}

/// Width of a handle parked over `label`: measured text plus fixed padding,
/// clamped to the minimum handle width.
pub(super) fn snapped_width_for(label: &str, measure: &TextMeasure) -> f32 {
    (measure.measure(label) + HANDLE_PADDING).max(MIN_HANDLE_WIDTH)
}

/// Lays out `labels` into equal-width slots across `track`.
pub(super) fn layout_items(
    labels: &[String],
    measure: &TextMeasure,
    track: TrackBounds,
) -> Result<Vec<ItemSlot>, SelectorError> {
    if labels.is_empty() {
        return Err(SelectorError::EmptyItems);
    }
    let count = labels.len();
    Ok(labels
        .iter()
        .enumerate()
        .map(|(index, label)| ItemSlot {
            index,
            label: label.clone(),
            center_x: track.slot_center(index, count),
            snapped_width: snapped_width_for(label, measure),
        })
        .collect())
}

/// Replaces label text in place for a count-preserving relabel.
///
/// Slot centers depend only on the item count and track, so they are kept;
/// snapped widths follow the new text.
pub(super) fn refresh_labels(items: &mut [ItemSlot], labels: &[String], measure: &TextMeasure) {
    for (item, label) in items.iter_mut().zip(labels) {
        item.label = label.clone();
        item.snapped_width = snapped_width_for(label, measure);
    }
}

/// Recomputes slot centers after the track moved or resized.
pub(super) fn recenter_items(items: &mut [ItemSlot], track: TrackBounds) {
    let count = items.len();
    for item in items.iter_mut() {
        item.center_x = track.slot_center(item.index, count);
    }
}

/// Item whose center is closest to `x`; distance ties go to the lowest
/// index.
pub(super) fn nearest_item(x: f32, items: &[ItemSlot]) -> Result<&ItemSlot, SelectorError> {
    let Some(mut best) = items.first() else {
        warn!("nearest-item query against an empty layout");
        return Err(SelectorError::EmptyLayout);
    };
    for item in &items[1..] {
        if (item.center_x - x).abs() < (best.center_x - x).abs() {
            best = item;
        }
    }
    Ok(best)
}

/// Handle width at a continuous, possibly un-snapped position.
///
/// Takes the two items whose centers are closest to `x` overall (distance
/// ties keep the lower index), orders the pair by center, and interpolates
/// linearly between their snapped widths. The factor is not clamped:
/// positions beyond the nearest pair extrapolate during a free drag, before
/// the final snap.
pub(super) fn interpolated_width(x: f32, items: &[ItemSlot]) -> f32 {
    let [first, rest @ ..] = items else {
        return MIN_HANDLE_WIDTH;
    };
    let [second, rest @ ..] = rest else {
        return first.snapped_width;
    };

    let distance = |item: &ItemSlot| (item.center_x - x).abs();
    let (mut closest, mut runner_up) = if distance(second) < distance(first) {
        (second, first)
    } else {
        (first, second)
    };
    for item in rest {
        if distance(item) < distance(runner_up) {
            if distance(item) < distance(closest) {
                runner_up = closest;
                closest = item;
            } else {
                runner_up = item;
            }
        }
    }

    let (left, right) = if closest.center_x <= runner_up.center_x {
        (closest, runner_up)
    } else {
        (runner_up, closest)
    };

    if left.snapped_width == right.snapped_width {
        return left.snapped_width;
    }
    let t = (x - left.center_x) / (right.center_x - left.center_x);
    left.snapped_width + t * (right.snapped_width - left.snapped_width)
}
