//! Dual-handle labeled range selector core.
//!
//! A horizontal row of discrete labeled items with two draggable handles
//! selecting a contiguous index range. This module owns the public surface:
//! the argument struct a host builds the controller from, the error type,
//! and the directive types a renderer applies.
//!
//! ## Usage
//!
//! Build a [`RangeSelectorController`] from [`SelectorArgs`], forward the
//! host's gesture events to it, and apply the returned directives to the
//! rendering surface.
//!
//! ```
//! use rangeline::selector::{RangeSelectorController, SelectorArgs};
//! use rangeline::{TextMeasure, TrackBounds};
//!
//! let args = SelectorArgs::new(["S", "M", "L", "XL"], TrackBounds::new(0.0, 400.0))
//!     .measure(TextMeasure::new(|text| text.chars().count() as f32 * 9.0))
//!     .selection(0, 3)
//!     .on_select(|(min, max)| {
//!         println!("selected {min}..={max}");
//!     });
//!
//! let mut selector = RangeSelectorController::new(args).expect("valid items");
//!
//! // A tap between the endpoints collapses the range onto the tapped item.
//! let output = selector.tap(150.0).expect("layout is non-empty");
//! assert_eq!(output.state.min_index, output.state.max_index);
//! ```

use thiserror::Error;

use crate::{
    geometry::TrackBounds,
    prop::{CallbackWith, TextMeasure},
};

pub use interaction::{
    Directives, EventOutput, HandleDirective, HandleId, HandleRole, RangeSelectorController,
    SelectionState,
};
pub use layout::ItemSlot;

mod interaction;
mod layout;

/// Horizontal padding added around a measured label before sizing a handle.
const HANDLE_PADDING: f32 = 20.0;
/// Narrowest a handle is allowed to get, whatever the label measures.
const MIN_HANDLE_WIDTH: f32 = 55.0;

/// Errors surfaced at the selector boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A selector needs at least one item to have a valid range.
    #[error("item list must not be empty")]
    EmptyItems,
    /// A selected index points outside the item list.
    #[error("selected index {index} is out of bounds for {count} item(s)")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of items in the list.
        count: usize,
    },
    /// Geometry was queried before any items were laid out. Unreachable
    /// after a successful [`RangeSelectorController::new`]; treated as an
    /// internal invariant failure if it ever fires.
    #[error("item layout is empty")]
    EmptyLayout,
}

/// Arguments for building a [`RangeSelectorController`].
#[derive(Clone, PartialEq)]
pub struct SelectorArgs {
    /// Labels of the selectable items, in track order.
    pub labels: Vec<String>,
    /// Host-reported origin and width of the item track.
    pub track: TrackBounds,
    /// Initially selected min index.
    pub min_index: usize,
    /// Initially selected max index.
    pub max_index: usize,
    /// Whether the initial handle placement should animate.
    pub animated: bool,
    /// Text-width measurement backend.
    pub measure: TextMeasure,
    /// Invoked with `(min_index, max_index)` on every committed change.
    pub on_select: CallbackWith<(usize, usize)>,
}

impl SelectorArgs {
    /// Creates arguments selecting the full range over `labels`.
    ///
    /// The measurer defaults to the fixed-width fallback; hosts that render
    /// real text should supply one via [`SelectorArgs::measure`].
    pub fn new<I, S>(labels: I, track: TrackBounds) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let max_index = labels.len().saturating_sub(1);
        Self {
            labels,
            track,
            min_index: 0,
            max_index,
            animated: false,
            measure: TextMeasure::default(),
            on_select: CallbackWith::new(|_| {}),
        }
    }

    /// Sets the text-width measurement backend.
    pub fn measure(mut self, measure: TextMeasure) -> Self {
        self.measure = measure;
        self
    }

    /// Sets the initially selected index pair.
    pub fn selection(mut self, min_index: usize, max_index: usize) -> Self {
        self.min_index = min_index;
        self.max_index = max_index;
        self
    }

    /// Sets whether the initial handle placement should animate.
    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Sets the committed-change handler.
    pub fn on_select<F>(mut self, on_select: F) -> Self
    where
        F: Fn((usize, usize)) + Send + Sync + 'static,
    {
        self.on_select = CallbackWith::new(on_select);
        self
    }

    /// Sets the committed-change handler using a shared callback.
    pub fn on_select_shared(mut self, on_select: impl Into<CallbackWith<(usize, usize)>>) -> Self {
        self.on_select = on_select.into();
        self
    }
}
