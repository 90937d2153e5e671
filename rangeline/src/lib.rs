//! rangeline is the interaction and layout core of a dual-handle labeled
//! range selector.
//!
//! A horizontal row of discrete labeled items carries two draggable handles
//! selecting a contiguous index range. This crate resolves pointer gestures
//! (tap, pan step, pan end) and item geometry into selection state and
//! per-event visual directives; rendering, gesture recognition and
//! animation playback belong to the host.
//!
//! # Overview
//!
//! - [`selector::RangeSelectorController`] owns the selection and consumes
//!   gesture events.
//! - [`geometry`] holds the track/handle/range-bar primitives.
//! - [`prop`] holds the callable handles a host plugs in: a text-width
//!   measurer and a committed-selection observer.
//!
//! # Example
//!
//! ```
//! use rangeline::selector::{HandleRole, RangeSelectorController, SelectorArgs};
//! use rangeline::{TextMeasure, TrackBounds};
//!
//! let args = SelectorArgs::new(["XS", "S", "M", "L"], TrackBounds::new(0.0, 480.0))
//!     .measure(TextMeasure::new(|text| text.chars().count() as f32 * 9.0))
//!     .selection(1, 2);
//! let mut selector = RangeSelectorController::new(args).expect("non-empty items");
//!
//! // Drag the max handle one slot to the right and release.
//! let handle = selector.handle_in_role(HandleRole::Max);
//! let target = selector.items()[3].center_x;
//! selector.pan_move(handle, target - 14.0).expect("laid out");
//! let output = selector.pan_end(handle, target - 14.0).expect("laid out");
//! assert_eq!((output.state.min_index, output.state.max_index), (1, 3));
//! ```
//!
//! The host applies each [`selector::Directives`] bundle on its UI thread:
//! move and resize the two handle views, recolor the labels listed in
//! `active_indices`, and reposition the connecting range bar.

#![deny(missing_docs, clippy::unwrap_used)]

pub mod geometry;
pub mod prop;
pub mod selector;

pub use geometry::{HandleFrame, RangeFrame, TrackBounds};
pub use prop::{CallbackWith, Slot, TextMeasure};
pub use selector::{
    Directives, EventOutput, HandleDirective, HandleId, HandleRole, ItemSlot,
    RangeSelectorController, SelectionState, SelectorArgs, SelectorError,
};
