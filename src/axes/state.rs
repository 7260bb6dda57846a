use indexmap::IndexMap;

use crate::axes::{Axis, AxisId};

/// Immutable registry of the axes of one chart dimension.
///
/// Adding an axis returns a new state; existing states (and references into
/// them) are never changed. Lookups for unknown ids fall back to the axis that
/// was registered first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxesState {
    axes: IndexMap<AxisId, Axis>,
}

impl AxesState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this state with `axis` stored under `id`.
    ///
    /// Re-adding an existing id replaces the axis but keeps its registration
    /// order, so the default axis only changes if the first id is replaced.
    #[must_use]
    pub fn add_axis(&self, axis: Axis, id: impl Into<AxisId>) -> Self {
        let mut axes = self.axes.clone();
        axes.insert(id.into(), axis);
        Self { axes }
    }

    /// The axis stored under `id`, or the default axis when `id` is unknown.
    ///
    /// `None` only when no axis has been registered yet.
    #[must_use]
    pub fn axis_for(&self, id: &str) -> Option<&Axis> {
        self.axes.get(id).or_else(|| self.default_axis())
    }

    pub fn axis_for_mut(&mut self, id: &str) -> Option<&mut Axis> {
        let index = self.resolve_index(id)?;
        self.axes.get_index_mut(index).map(|(_, axis)| axis)
    }

    /// Id the lookup for `id` resolves to, after fallback.
    #[must_use]
    pub fn resolve_id(&self, id: &str) -> Option<&AxisId> {
        let index = self.resolve_index(id)?;
        self.axes.get_index(index).map(|(id, _)| id)
    }

    /// First registered axis.
    #[must_use]
    pub fn default_axis(&self) -> Option<&Axis> {
        self.axes.first().map(|(_, axis)| axis)
    }

    #[must_use]
    pub fn axis_default_id(&self) -> Option<&AxisId> {
        self.axes.first().map(|(id, _)| id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.axes.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &AxisId> {
        self.axes.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AxisId, &Axis)> {
        self.axes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&AxisId, &mut Axis)> {
        self.axes.iter_mut()
    }

    fn resolve_index(&self, id: &str) -> Option<usize> {
        match self.axes.get_index_of(id) {
            Some(index) => Some(index),
            None if self.axes.is_empty() => None,
            None => Some(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::AxesState;
    use crate::axes::{Axis, AxisOptions, add_continuous_numeric_axis};
    use crate::core::{AxisLocation, Dimensions, Margin};

    fn axis(id: &str, location: AxisLocation) -> Axis {
        add_continuous_numeric_axis(
            1,
            id,
            location,
            (0.0, 1.0),
            AxisOptions::new(id),
            Dimensions::new(200.0, 100.0),
            Margin::default(),
        )
        .expect("axis")
        .into()
    }

    #[test]
    fn unknown_id_falls_back_to_first_registered_axis() {
        let state = AxesState::new()
            .add_axis(axis("a", AxisLocation::Bottom), "a")
            .add_axis(axis("b", AxisLocation::Top), "b");

        let fallback = state.axis_for("missing").expect("fallback");
        let first = state.axis_for("a").expect("a");
        assert!(ptr::eq(fallback, first));
        assert_eq!(state.axis_default_id().map(|id| id.as_str()), Some("a"));
        assert_eq!(state.resolve_id("missing").map(|id| id.as_str()), Some("a"));
        assert_eq!(state.axis_for("b").map(|axis| axis.id().as_str()), Some("b"));
    }

    #[test]
    fn add_axis_leaves_previous_state_untouched() {
        let empty = AxesState::new();
        let one = empty.add_axis(axis("a", AxisLocation::Bottom), "a");
        let two = one.add_axis(axis("b", AxisLocation::Top), "b");

        assert!(empty.is_empty());
        assert!(empty.axis_for("a").is_none());
        assert_eq!(one.len(), 1);
        assert!(!one.contains("b"));
        assert_eq!(two.len(), 2);
        assert_eq!(
            two.ids().map(|id| id.as_str()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn replacing_axis_keeps_registration_order() {
        let state = AxesState::new()
            .add_axis(axis("a", AxisLocation::Bottom), "a")
            .add_axis(axis("b", AxisLocation::Top), "b")
            .add_axis(axis("a", AxisLocation::Top), "a");
        assert_eq!(state.len(), 2);
        assert_eq!(state.axis_default_id().map(|id| id.as_str()), Some("a"));
        assert_eq!(
            state.default_axis().map(Axis::location),
            Some(AxisLocation::Top)
        );
    }
}
