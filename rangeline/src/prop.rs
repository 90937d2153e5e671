//! Callable handles shared between the selector core and its host.
//!
//! The host hands the selector two closures: an observer for committed
//! selection changes and a text-width measurer for handle sizing. Both are
//! wrapped in [`Slot`], which shares the closure behind an `Arc` and
//! compares by identity, so argument structs holding them stay cheap to
//! clone and compare.

use std::sync::Arc;

/// Stable, comparable slot handle for any shared callable trait object.
///
/// `Slot` compares by identity (`Arc::ptr_eq`) so it can be embedded in
/// argument structs without forcing deep closure comparisons.
pub struct Slot<F: ?Sized> {
    inner: Arc<F>,
}

impl<F: ?Sized> Slot<F> {
    /// Create a slot from a shared callable trait object.
    pub fn from_shared(handler: Arc<F>) -> Self {
        Self { inner: handler }
    }

    /// Read the current callable.
    pub fn shared(&self) -> Arc<F> {
        Arc::clone(&self.inner)
    }
}

impl<F: ?Sized> Clone for Slot<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: ?Sized> PartialEq for Slot<F> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<F: ?Sized> Eq for Slot<F> {}

/// Stable, comparable callback handle for `Fn(T) -> R`.
///
/// Used for the committed-selection observer
/// (`CallbackWith<(usize, usize)>`) and any other one-argument handler a
/// host wires up.
pub struct CallbackWith<T, R = ()> {
    slot: Slot<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> CallbackWith<T, R> {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            slot: Slot::from_shared(Arc::new(handler)),
        }
    }

    /// Invoke the callback with an argument.
    pub fn call(&self, value: T) -> R {
        let handler = self.slot.shared();
        handler(value)
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

impl<T, R> std::fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackWith").finish_non_exhaustive()
    }
}

/// Pluggable text-width measurement supplied by the host.
///
/// Handle widths adapt to the label text under them, but the core cannot
/// rasterize text; the host provides the measurement backend (a font
/// metrics query, a glyph cache lookup, a test stub).
#[derive(Clone, PartialEq, Eq)]
pub struct TextMeasure {
    slot: Slot<dyn Fn(&str) -> f32 + Send + Sync>,
}

impl TextMeasure {
    /// Create a measurer from a closure returning the rendered width of
    /// `text` in track units.
    pub fn new<F>(measure: F) -> Self
    where
        F: Fn(&str) -> f32 + Send + Sync + 'static,
    {
        Self {
            slot: Slot::from_shared(Arc::new(measure)),
        }
    }

    /// Measured width of `text`.
    pub fn measure(&self, text: &str) -> f32 {
        let measure = self.slot.shared();
        measure(text)
    }
}

impl Default for TextMeasure {
    /// Fixed-width fallback: every label measures as zero, so every handle
    /// falls back to the minimum handle width.
    fn default() -> Self {
        Self::new(|_| 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callbacks_compare_by_identity() {
        let a = CallbackWith::<u32>::new(|_| {});
        let b = a.clone();
        let c = CallbackWith::<u32>::new(|_| {});

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn callback_forwards_argument_and_result() {
        let double = CallbackWith::<u32, u32>::new(|value| value * 2);
        assert_eq!(double.call(21), 42);
    }

    #[test]
    fn default_measure_reports_zero_width() {
        let measure = TextMeasure::default();
        assert_eq!(measure.measure("anything"), 0.0);
    }

    #[test]
    fn measure_uses_the_supplied_closure() {
        let per_char = TextMeasure::new(|text| text.chars().count() as f32 * 8.0);
        assert_eq!(per_char.measure("abcd"), 32.0);
    }
}
