//! Gesture resolution and selection state.
//!
//! [`RangeSelectorController`] consumes the host's pointer events (tap, pan
//! step, pan end), resolves them against the item layout and produces the
//! new selection plus the directives a renderer applies. It owns the
//! selection exclusively; the host never mutates indices directly.

use std::cmp::Ordering;

use smallvec::{SmallVec, smallvec};
use tracing::{debug, trace};

use crate::{
    geometry::{HandleFrame, RangeFrame, TrackBounds},
    prop::{CallbackWith, TextMeasure},
};

use super::{
    SelectorArgs, SelectorError,
    layout::{self, ItemSlot},
};

/// The two physical draggable handles, named for the order the host created
/// them.
///
/// Which one is the range's min or max end is not fixed: the user can drag
/// one handle past the other, and the roles swap seamlessly. Gesture events
/// address physical handles; query [`RangeSelectorController::role_of`] for
/// the role one currently plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleId {
    /// The first handle the host created.
    First,
    /// The second handle the host created.
    Second,
}

impl HandleId {
    /// The sibling handle.
    pub fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    fn slot(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// Logical end of the range a physical handle currently represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleRole {
    /// The lower end of the selected range.
    Min,
    /// The upper end of the selected range.
    Max,
}

/// Committed selection over the current item sequence.
///
/// Invariant: `min_index <= max_index < item_count`. A point selection
/// (`min_index == max_index`) is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    /// Number of items in the sequence.
    pub item_count: usize,
    /// Lower selected index.
    pub min_index: usize,
    /// Upper selected index.
    pub max_index: usize,
}

/// One handle's placement for the renderer to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleDirective {
    /// Physical handle to move and resize.
    pub handle: HandleId,
    /// Role the handle plays after this event.
    pub role: HandleRole,
    /// New horizontal center.
    pub center_x: f32,
    /// New width.
    pub width: f32,
    /// Whether the move should animate.
    pub animated: bool,
}

/// Everything the renderer applies after one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Directives {
    /// Placement for both handles, min role first.
    pub handles: SmallVec<[HandleDirective; 2]>,
    /// Indices whose labels sit under a handle and render inverted. The
    /// list is exhaustive: every index not in it renders in resting style.
    pub active_indices: SmallVec<[usize; 2]>,
    /// Connecting bar between the two handle centers.
    pub range: RangeFrame,
}

/// A committed event's result: the new selection plus render directives.
#[derive(Debug, Clone, PartialEq)]
pub struct EventOutput {
    /// Selection after the event.
    pub state: SelectionState,
    /// Directives to apply.
    pub directives: Directives,
}

/// Controller for a dual-handle labeled range selector.
///
/// Owns the item layout, the selection state and the two physical handle
/// frames. All methods run to completion on the caller's thread; the
/// controller holds no locks and spawns nothing, so it is safe to drive
/// from any single event loop.
pub struct RangeSelectorController {
    items: Vec<ItemSlot>,
    track: TrackBounds,
    state: SelectionState,
    handles: [HandleFrame; 2],
    dragging: Option<HandleId>,
    measure: TextMeasure,
    on_select: CallbackWith<(usize, usize)>,
}

impl RangeSelectorController {
    /// Builds a controller and lays out the initial items.
    ///
    /// Fails when `args.labels` is empty or either selected index is out of
    /// bounds. The committed-change callback is not invoked for the initial
    /// placement.
    pub fn new(args: SelectorArgs) -> Result<Self, SelectorError> {
        let SelectorArgs {
            labels,
            track,
            min_index,
            max_index,
            animated,
            measure,
            on_select,
        } = args;
        let mut selector = Self {
            items: Vec::new(),
            track,
            state: SelectionState {
                item_count: 0,
                min_index: 0,
                max_index: 0,
            },
            handles: [HandleFrame::default(); 2],
            dragging: None,
            measure,
            on_select,
        };
        selector.set(&labels, min_index, max_index, animated)?;
        Ok(selector)
    }

    /// Replaces the item sequence and selection, relaying out from scratch.
    ///
    /// A descending index pair is normalized by swapping: roles are
    /// positional, so the pair describes the same geometry either way. Does
    /// not invoke the committed-change callback.
    pub fn set(
        &mut self,
        labels: &[String],
        min_index: usize,
        max_index: usize,
        animated: bool,
    ) -> Result<EventOutput, SelectorError> {
        let items = layout::layout_items(labels, &self.measure, self.track)?;
        let count = items.len();
        for index in [min_index, max_index] {
            if index >= count {
                return Err(SelectorError::IndexOutOfBounds { index, count });
            }
        }
        let (min_index, max_index) = if min_index <= max_index {
            (min_index, max_index)
        } else {
            (max_index, min_index)
        };
        self.items = items;
        self.state = SelectionState {
            item_count: count,
            min_index,
            max_index,
        };
        self.dragging = None;
        self.snap_selection();
        Ok(self.output(animated))
    }

    /// Replaces label text while keeping the current selection.
    ///
    /// A count-preserving relabel reuses the existing slot centers and only
    /// refreshes handle widths; a count change relays out fully and clamps
    /// the selection into the new bounds.
    pub fn set_labels(
        &mut self,
        labels: &[String],
        animated: bool,
    ) -> Result<EventOutput, SelectorError> {
        if labels.len() == self.items.len() {
            layout::refresh_labels(&mut self.items, labels, &self.measure);
        } else {
            self.items = layout::layout_items(labels, &self.measure, self.track)?;
            let last = self.items.len() - 1;
            self.state.item_count = self.items.len();
            self.state.min_index = self.state.min_index.min(last);
            self.state.max_index = self.state.max_index.min(last);
        }
        self.dragging = None;
        self.snap_selection();
        Ok(self.output(animated))
    }

    /// Adopts new track bounds (the host surface moved or resized) and
    /// re-snaps both handles to their items.
    pub fn set_track(&mut self, track: TrackBounds, animated: bool) -> Directives {
        self.track = track;
        layout::recenter_items(&mut self.items, track);
        self.dragging = None;
        self.snap_selection();
        self.directives(animated)
    }

    /// Resolves a tap at `x`.
    ///
    /// The tapped position resolves to its nearest item, and the selection
    /// moves by the distance of that item from the current endpoints:
    /// tapping an endpoint (or inside the range) collapses the selection
    /// onto the tapped item, tapping outside extends the nearer endpoint to
    /// it. Always invokes the committed-change callback, even when the
    /// indices did not change.
    pub fn tap(&mut self, x: f32) -> Result<EventOutput, SelectorError> {
        let target = layout::nearest_item(x, &self.items)?.index;
        let SelectionState {
            min_index: old_min,
            max_index: old_max,
            ..
        } = self.state;

        let (new_min, new_max) = match (target.cmp(&old_min), target.cmp(&old_max)) {
            (Ordering::Equal, _) | (_, Ordering::Equal) => {
                // Tapping an endpoint collapses the range onto it; the
                // opposite endpoint's handle travels to the tapped item.
                let travels = if target == old_max {
                    HandleRole::Min
                } else {
                    HandleRole::Max
                };
                self.snap_role(travels, target);
                (target, target)
            }
            (Ordering::Less, _) => {
                self.snap_role(HandleRole::Min, target);
                (target, old_max)
            }
            (Ordering::Greater, Ordering::Less) => {
                self.snap_role(HandleRole::Min, target);
                self.snap_role(HandleRole::Max, target);
                (target, target)
            }
            (Ordering::Greater, Ordering::Greater) => {
                self.snap_role(HandleRole::Max, target);
                (old_min, target)
            }
        };

        self.state.min_index = new_min;
        self.state.max_index = new_max;
        debug!(min = new_min, max = new_max, "tap committed selection");
        self.on_select.call((new_min, new_max));
        Ok(self.output(true))
    }

    /// Resolves one step of an in-progress drag.
    ///
    /// The handle's center follows the pointer, clamped to the span between
    /// the first and last item centers; its width is interpolated between
    /// the two nearest items. When both handles resolve to the same nearest
    /// item (crossed or collided) the selection collapses onto it; otherwise
    /// only the dragged handle's current role moves. Not a committed change:
    /// the callback is not invoked.
    pub fn pan_move(&mut self, handle: HandleId, x: f32) -> Result<Directives, SelectorError> {
        let span = match (self.items.first(), self.items.last()) {
            (Some(first), Some(last)) => (first.center_x, last.center_x),
            _ => return Err(SelectorError::EmptyLayout),
        };
        let clamped = x.clamp(span.0, span.1);
        self.dragging = Some(handle);
        self.handles[handle.slot()].center_x = clamped;

        let moved_nearest = layout::nearest_item(clamped, &self.items)?.index;
        let other_center = self.handles[handle.other().slot()].center_x;
        let other_nearest = layout::nearest_item(other_center, &self.items)?.index;
        if moved_nearest == other_nearest {
            self.state.min_index = moved_nearest;
            self.state.max_index = moved_nearest;
        } else {
            match self.role_of(handle) {
                HandleRole::Min => self.state.min_index = moved_nearest,
                HandleRole::Max => self.state.max_index = moved_nearest,
            }
        }

        // Purely visual: the width follows the continuous position, the
        // selection above follows the snapped nearest item.
        self.handles[handle.slot()].width = layout::interpolated_width(clamped, &self.items);
        trace!(
            ?handle,
            x = clamped,
            min = self.state.min_index,
            max = self.state.max_index,
            "pan step"
        );
        Ok(self.directives(false))
    }

    /// Ends a drag: snaps the handle to its nearest item and commits.
    ///
    /// Always invokes the committed-change callback with the resulting
    /// selection.
    pub fn pan_end(&mut self, handle: HandleId, x: f32) -> Result<EventOutput, SelectorError> {
        let (index, center_x, width) = {
            let item = layout::nearest_item(x, &self.items)?;
            (item.index, item.center_x, item.snapped_width)
        };
        self.handles[handle.slot()] = HandleFrame { center_x, width };
        self.dragging = None;
        match self.role_of(handle) {
            HandleRole::Min => self.state.min_index = index,
            HandleRole::Max => self.state.max_index = index,
        }

        let (min, max) = (self.state.min_index, self.state.max_index);
        debug!(?handle, min, max, "pan committed selection");
        self.on_select.call((min, max));
        Ok(self.output(true))
    }

    /// Physical handle a pointer-down at `x` should grab: the nearer one.
    ///
    /// Exact distance ties go to the handle playing Min, matching the
    /// hit-test order a collapsed pair resolves in.
    pub fn grab_target(&self, x: f32) -> HandleId {
        let min_handle = self.handle_in_role(HandleRole::Min);
        let max_handle = min_handle.other();
        let min_distance = (self.handles[min_handle.slot()].center_x - x).abs();
        let max_distance = (self.handles[max_handle.slot()].center_x - x).abs();
        if min_distance <= max_distance {
            min_handle
        } else {
            max_handle
        }
    }

    /// Role `handle` currently plays, derived from position: the handle
    /// with the larger center is Max. Ties resolve to [`HandleId::First`]
    /// as Max.
    pub fn role_of(&self, handle: HandleId) -> HandleRole {
        if self.max_role_handle() == handle {
            HandleRole::Max
        } else {
            HandleRole::Min
        }
    }

    /// Physical handle currently playing `role`.
    pub fn handle_in_role(&self, role: HandleRole) -> HandleId {
        match role {
            HandleRole::Max => self.max_role_handle(),
            HandleRole::Min => self.max_role_handle().other(),
        }
    }

    /// Current committed selection as `(min_index, max_index)`.
    pub fn selection(&self) -> (usize, usize) {
        (self.state.min_index, self.state.max_index)
    }

    /// Current selection state.
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// The laid-out items, in track order.
    pub fn items(&self) -> &[ItemSlot] {
        &self.items
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    /// Current frame of a physical handle.
    pub fn handle_frame(&self, handle: HandleId) -> HandleFrame {
        self.handles[handle.slot()]
    }

    /// Connecting bar between the current handle centers.
    pub fn range_frame(&self) -> RangeFrame {
        let min_handle = self.handle_in_role(HandleRole::Min);
        RangeFrame::between(
            self.handles[min_handle.slot()].center_x,
            self.handles[min_handle.other().slot()].center_x,
        )
    }

    /// Render snapshot of the current state, for a full (re)draw.
    pub fn directives(&self, animated: bool) -> Directives {
        let min_handle = self.handle_in_role(HandleRole::Min);
        let max_handle = min_handle.other();
        let min_frame = self.handles[min_handle.slot()];
        let max_frame = self.handles[max_handle.slot()];
        let mut active_indices: SmallVec<[usize; 2]> = smallvec![self.state.min_index];
        if self.state.max_index != self.state.min_index {
            active_indices.push(self.state.max_index);
        }
        Directives {
            handles: smallvec![
                HandleDirective {
                    handle: min_handle,
                    role: HandleRole::Min,
                    center_x: min_frame.center_x,
                    width: min_frame.width,
                    animated,
                },
                HandleDirective {
                    handle: max_handle,
                    role: HandleRole::Max,
                    center_x: max_frame.center_x,
                    width: max_frame.width,
                    animated,
                },
            ],
            active_indices,
            range: RangeFrame::between(min_frame.center_x, max_frame.center_x),
        }
    }

    fn max_role_handle(&self) -> HandleId {
        if self.handles[HandleId::First.slot()].center_x
            >= self.handles[HandleId::Second.slot()].center_x
        {
            HandleId::First
        } else {
            HandleId::Second
        }
    }

    /// Snaps the physical handle currently playing `role` onto an item.
    fn snap_role(&mut self, role: HandleRole, index: usize) {
        let handle = self.handle_in_role(role);
        let item = &self.items[index];
        self.handles[handle.slot()] = HandleFrame {
            center_x: item.center_x,
            width: item.snapped_width,
        };
    }

    /// Snaps both handles onto the selected endpoints.
    ///
    /// Roles are resolved once up front so the first write cannot flip them
    /// under the second.
    fn snap_selection(&mut self) {
        let min_handle = self.handle_in_role(HandleRole::Min);
        let max_handle = min_handle.other();
        let min_item = &self.items[self.state.min_index];
        let max_item = &self.items[self.state.max_index];
        self.handles[min_handle.slot()] = HandleFrame {
            center_x: min_item.center_x,
            width: min_item.snapped_width,
        };
        self.handles[max_handle.slot()] = HandleFrame {
            center_x: max_item.center_x,
            width: max_item.snapped_width,
        };
    }

    fn output(&self, animated: bool) -> EventOutput {
        EventOutput {
            state: self.state,
            directives: self.directives(animated),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn init_logs() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("rangeline=trace")
            .with_test_writer()
            .try_init();
    }

    fn args(labels: &[&str], min: usize, max: usize) -> SelectorArgs {
        SelectorArgs::new(
            labels.iter().copied(),
            TrackBounds::new(0.0, labels.len() as f32 * 100.0),
        )
        .measure(TextMeasure::new(|text| text.chars().count() as f32 * 10.0))
        .selection(min, max)
    }

    fn selector(labels: &[&str], min: usize, max: usize) -> RangeSelectorController {
        RangeSelectorController::new(args(labels, min, max)).unwrap()
    }

    fn center_of(selector: &RangeSelectorController, index: usize) -> f32 {
        selector.items()[index].center_x
    }

    fn assert_invariant(selector: &RangeSelectorController) {
        let state = selector.state();
        assert!(state.min_index <= state.max_index);
        assert!(state.max_index < state.item_count);
    }

    #[test]
    fn empty_labels_fail_construction() {
        let result = RangeSelectorController::new(args(&[], 0, 0));
        assert_eq!(result.err(), Some(SelectorError::EmptyItems));
    }

    #[test]
    fn out_of_bounds_index_fails_construction() {
        let result = RangeSelectorController::new(args(&["a", "b"], 0, 2));
        assert_eq!(
            result.err(),
            Some(SelectorError::IndexOutOfBounds { index: 2, count: 2 })
        );
    }

    #[test]
    fn descending_indices_are_normalized() {
        let selector = selector(&["a", "b", "c", "d"], 3, 1);
        assert_eq!(selector.selection(), (1, 3));
        assert_invariant(&selector);
    }

    #[test]
    fn initial_placement_snaps_both_handles() {
        let selector = selector(&["a", "b", "c"], 0, 2);
        let directives = selector.directives(false);
        assert_eq!(directives.handles.len(), 2);
        assert_eq!(directives.handles[0].role, HandleRole::Min);
        assert_eq!(directives.handles[0].center_x, center_of(&selector, 0));
        assert_eq!(directives.handles[1].role, HandleRole::Max);
        assert_eq!(directives.handles[1].center_x, center_of(&selector, 2));
        assert_eq!(directives.active_indices.as_slice(), &[0, 2]);
    }

    #[test]
    fn tap_between_endpoints_collapses_to_the_tapped_item() {
        // (0, 2) over three items, tap the middle one.
        let mut selector = selector(&["a", "b", "c"], 0, 2);
        let output = selector.tap(center_of(&selector, 1)).unwrap();
        assert_eq!(output.state.min_index, 1);
        assert_eq!(output.state.max_index, 1);
        assert_invariant(&selector);
    }

    #[test]
    fn tap_above_both_endpoints_extends_max() {
        let mut selector = selector(&["a", "b", "c", "d", "e"], 1, 1);
        let output = selector.tap(center_of(&selector, 3)).unwrap();
        assert_eq!((output.state.min_index, output.state.max_index), (1, 3));
    }

    #[test]
    fn tap_below_both_endpoints_extends_min() {
        let mut selector = selector(&["a", "b", "c", "d", "e"], 2, 4);
        let output = selector.tap(center_of(&selector, 0)).unwrap();
        assert_eq!((output.state.min_index, output.state.max_index), (0, 4));
    }

    #[test]
    fn tap_on_an_endpoint_collapses_the_range_onto_it() {
        let mut selector = selector(&["a", "b", "c", "d"], 1, 3);
        let output = selector.tap(center_of(&selector, 3)).unwrap();
        assert_eq!((output.state.min_index, output.state.max_index), (3, 3));
    }

    #[test]
    fn tap_is_idempotent_on_a_point_selection() {
        let mut selector = selector(&["a", "b", "c"], 1, 1);
        let x = center_of(&selector, 1);
        for _ in 0..3 {
            let output = selector.tap(x).unwrap();
            assert_eq!((output.state.min_index, output.state.max_index), (1, 1));
        }
    }

    #[test]
    fn tap_notifies_even_when_the_selection_is_unchanged() {
        let committed: Arc<Mutex<Vec<(usize, usize)>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&committed);
        let mut selector = RangeSelectorController::new(
            args(&["a", "b", "c"], 1, 1).on_select(move |selection| {
                sink.lock().unwrap().push(selection);
            }),
        )
        .unwrap();

        let x = center_of(&selector, 1);
        selector.tap(x).unwrap();
        selector.tap(x).unwrap();
        assert_eq!(committed.lock().unwrap().as_slice(), &[(1, 1), (1, 1)]);
    }

    #[test]
    fn tap_directives_are_animated_and_snapped() {
        let mut selector = selector(&["abcdef", "ab", "c"], 0, 2);
        let output = selector.tap(center_of(&selector, 1)).unwrap();
        for directive in &output.directives.handles {
            assert!(directive.animated);
            assert_eq!(directive.center_x, center_of(&selector, 1));
            assert_eq!(directive.width, selector.items()[1].snapped_width);
        }
        assert_eq!(output.directives.active_indices.as_slice(), &[1]);
        assert_eq!(output.directives.range.width, 0.0);
    }

    #[test]
    fn tap_round_trips_through_nearest_item() {
        let mut selector = selector(&["a", "b", "c", "d"], 0, 3);
        let output = selector.tap(center_of(&selector, 2) + 12.0).unwrap();
        let committed_center = output.directives.handles[0].center_x;
        let resolved = layout::nearest_item(committed_center, selector.items()).unwrap();
        assert_eq!(resolved.index, output.state.min_index);
    }

    #[test]
    fn pan_move_tracks_the_pointer_without_committing() {
        let committed: Arc<Mutex<Vec<(usize, usize)>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&committed);
        let mut selector = RangeSelectorController::new(
            args(&["a", "b", "c", "d"], 0, 3).on_select(move |selection| {
                sink.lock().unwrap().push(selection);
            }),
        )
        .unwrap();

        let handle = selector.handle_in_role(HandleRole::Min);
        let x = center_of(&selector, 1) + 7.0;
        let directives = selector.pan_move(handle, x).unwrap();

        assert!(selector.is_dragging());
        assert!(committed.lock().unwrap().is_empty());
        assert_eq!(selector.selection(), (1, 3));
        let moved = directives
            .handles
            .iter()
            .find(|directive| directive.handle == handle)
            .unwrap();
        assert_eq!(moved.center_x, x);
        assert!(!moved.animated);
    }

    #[test]
    fn pan_move_clamps_to_the_outer_item_centers() {
        let mut selector = selector(&["a", "b", "c"], 0, 2);
        let handle = selector.handle_in_role(HandleRole::Min);
        selector.pan_move(handle, -500.0).unwrap();
        assert_eq!(
            selector.handle_frame(handle).center_x,
            center_of(&selector, 0)
        );
    }

    #[test]
    fn pan_move_interpolates_the_dragged_width() {
        // Widths 80 ("abcdef") and 55 ("ab"), centers 50 and 150.
        let mut selector = selector(&["abcdef", "ab"], 0, 1);
        let handle = selector.handle_in_role(HandleRole::Min);
        selector.pan_move(handle, 100.0).unwrap();
        assert_eq!(selector.handle_frame(handle).width, 67.5);
    }

    #[test]
    fn pan_collision_collapses_both_endpoints() {
        let mut selector = selector(&["a", "b", "c", "d"], 0, 3);
        let handle = selector.handle_in_role(HandleRole::Min);
        // Drag the min handle onto the max handle's item.
        selector
            .pan_move(handle, center_of(&selector, 3) - 2.0)
            .unwrap();
        assert_eq!(selector.selection(), (3, 3));
        assert_invariant(&selector);
    }

    #[test]
    fn dragging_past_the_sibling_swaps_roles_mid_gesture() {
        init_logs();
        // (0, 3) over six items, min handle dragged beyond item 4's
        // center. Stepping through the crossing first collapses both
        // endpoints onto the sibling's item, then the handle continues
        // as Max.
        let labels = ["uptech", "1", "2", "3", "4", "5"];
        let mut selector = selector(&labels, 0, 3);
        let handle = selector.handle_in_role(HandleRole::Min);

        selector
            .pan_move(handle, center_of(&selector, 3) + 1.0)
            .unwrap();
        assert_eq!(selector.selection(), (3, 3));

        let x = center_of(&selector, 4) + 10.0;
        selector.pan_move(handle, x).unwrap();
        assert_eq!(selector.role_of(handle), HandleRole::Max);
        assert_eq!(selector.selection(), (3, 4));

        let output = selector.pan_end(handle, x).unwrap();
        assert_eq!((output.state.min_index, output.state.max_index), (3, 4));
        assert_eq!(
            selector.handle_frame(handle).center_x,
            center_of(&selector, 4)
        );
        assert!(!selector.is_dragging());
        assert_invariant(&selector);
    }

    #[test]
    fn pan_end_snaps_and_notifies() {
        let committed: Arc<Mutex<Vec<(usize, usize)>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&committed);
        let mut selector = RangeSelectorController::new(
            args(&["a", "b", "c", "d"], 0, 3).on_select(move |selection| {
                sink.lock().unwrap().push(selection);
            }),
        )
        .unwrap();

        let handle = selector.handle_in_role(HandleRole::Min);
        let x = center_of(&selector, 1) + 20.0;
        selector.pan_move(handle, x).unwrap();
        let output = selector.pan_end(handle, x).unwrap();

        assert_eq!((output.state.min_index, output.state.max_index), (1, 3));
        assert_eq!(
            selector.handle_frame(handle),
            HandleFrame {
                center_x: center_of(&selector, 1),
                width: selector.items()[1].snapped_width,
            }
        );
        assert_eq!(committed.lock().unwrap().as_slice(), &[(1, 3)]);
    }

    #[test]
    fn grab_target_picks_the_nearer_handle() {
        let selector = selector(&["a", "b", "c", "d"], 0, 3);
        let min_handle = selector.handle_in_role(HandleRole::Min);
        let max_handle = min_handle.other();
        assert_eq!(selector.grab_target(center_of(&selector, 0)), min_handle);
        assert_eq!(selector.grab_target(center_of(&selector, 3)), max_handle);
    }

    #[test]
    fn grab_target_tie_prefers_the_min_handle() {
        let selector = selector(&["a", "b", "c"], 1, 1);
        let grabbed = selector.grab_target(center_of(&selector, 1));
        assert_eq!(selector.role_of(grabbed), HandleRole::Min);
    }

    #[test]
    fn coincident_handles_resolve_first_as_max() {
        let selector = selector(&["a", "b", "c"], 1, 1);
        assert_eq!(selector.role_of(HandleId::First), HandleRole::Max);
        assert_eq!(selector.role_of(HandleId::Second), HandleRole::Min);
    }

    #[test]
    fn set_labels_with_same_count_keeps_centers() {
        let mut selector = selector(&["a", "b", "c"], 0, 2);
        let centers: Vec<f32> = selector.items().iter().map(|item| item.center_x).collect();
        let relabeled: Vec<String> = ["aaaaaaaa", "b", "c"]
            .iter()
            .map(|text| (*text).to_string())
            .collect();

        selector.set_labels(&relabeled, false).unwrap();

        let after: Vec<f32> = selector.items().iter().map(|item| item.center_x).collect();
        assert_eq!(centers, after);
        assert_eq!(selector.items()[0].snapped_width, 100.0);
        assert_eq!(selector.selection(), (0, 2));
    }

    #[test]
    fn set_labels_with_fewer_items_clamps_the_selection() {
        let mut selector = selector(&["a", "b", "c", "d", "e"], 1, 4);
        let shorter: Vec<String> = ["a", "b", "c"].iter().map(|text| (*text).to_string()).collect();

        let output = selector.set_labels(&shorter, false).unwrap();

        assert_eq!((output.state.min_index, output.state.max_index), (1, 2));
        assert_eq!(output.state.item_count, 3);
        assert_invariant(&selector);
    }

    #[test]
    fn set_track_recenters_items_and_handles() {
        let mut selector = selector(&["a", "b"], 0, 1);
        let directives = selector.set_track(TrackBounds::new(100.0, 400.0), false);

        assert_eq!(center_of(&selector, 0), 200.0);
        assert_eq!(center_of(&selector, 1), 400.0);
        assert_eq!(directives.handles[0].center_x, 200.0);
        assert_eq!(directives.handles[1].center_x, 400.0);
        assert_eq!(directives.range, RangeFrame::between(200.0, 400.0));
    }

    #[test]
    fn invariant_holds_across_a_gesture_storm() {
        // Deterministic pseudo-random walk over taps and drags.
        let labels = ["one", "two", "three", "four", "five", "six", "seven"];
        let mut selector = selector(&labels, 2, 5);
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        let track_width = labels.len() as f32 * 100.0;

        for _ in 0..500 {
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let x = (seed >> 33) as f32 % track_width;
            match seed % 3 {
                0 => {
                    selector.tap(x).unwrap();
                }
                1 => {
                    let handle = selector.grab_target(x);
                    selector.pan_move(handle, x).unwrap();
                }
                _ => {
                    let handle = selector.grab_target(x);
                    selector.pan_move(handle, x).unwrap();
                    selector.pan_end(handle, x).unwrap();
                }
            }
            assert_invariant(&selector);
        }
    }
}
