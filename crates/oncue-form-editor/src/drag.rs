//! Drag gestures
//!
//! A drag in progress is transient UI state kept outside the schema. Its
//! resolution is a value-level [`DropResult`]; only that value reaches the
//! editor, through [`FormEditor::apply_drop`](crate::FormEditor::apply_drop).

/// Resolved drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropResult {
    /// Index the field was picked up from
    pub source: usize,
    /// Index it was dropped at; `None` when the drag was cancelled
    pub destination: Option<usize>,
}

impl DropResult {
    #[inline]
    #[must_use]
    pub fn moved(source: usize, destination: usize) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    #[inline]
    #[must_use]
    pub fn cancelled(source: usize) -> Self {
        Self {
            source,
            destination: None,
        }
    }
}

/// Result of a reorder request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// Field moved from one index to another
    Moved { from: usize, to: usize },
    /// Source and destination were the same index
    Unchanged,
    /// Gesture resolved without a destination
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragState {
    source: usize,
    over: Option<usize>,
}

/// Tracks one drag gesture from pick-up to release
#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    state: Option<DragState>,
}

impl DragGesture {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick up the field at `source`, replacing any gesture in progress
    pub fn begin(&mut self, source: usize) {
        self.state = Some(DragState {
            source,
            over: Some(source),
        });
    }

    /// Pointer moved over slot `index`, or left the list (`None`)
    pub fn hover(&mut self, index: Option<usize>) {
        if let Some(state) = &mut self.state {
            state.over = index;
        }
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Index being dragged
    #[inline]
    #[must_use]
    pub fn source(&self) -> Option<usize> {
        self.state.map(|s| s.source)
    }

    /// Release over the current slot; `None` if no gesture was active
    pub fn release(&mut self) -> Option<DropResult> {
        self.state.take().map(|s| DropResult {
            source: s.source,
            destination: s.over,
        })
    }

    /// Abort the gesture; resolves with no destination
    pub fn cancel(&mut self) -> Option<DropResult> {
        self.state.take().map(|s| DropResult::cancelled(s.source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_over_slot() {
        let mut drag = DragGesture::new();
        drag.begin(2);
        drag.hover(Some(0));
        assert_eq!(drag.release(), Some(DropResult::moved(2, 0)));
        assert!(!drag.is_active());
    }

    #[test]
    fn release_outside_list_has_no_destination() {
        let mut drag = DragGesture::new();
        drag.begin(1);
        drag.hover(None);
        assert_eq!(drag.release(), Some(DropResult::cancelled(1)));
    }

    #[test]
    fn cancel_and_idle_release() {
        let mut drag = DragGesture::new();
        assert_eq!(drag.release(), None);

        drag.begin(3);
        drag.hover(Some(1));
        assert_eq!(drag.cancel(), Some(DropResult::cancelled(3)));
        assert_eq!(drag.source(), None);
    }
}
