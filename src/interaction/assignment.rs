use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::axes::{AxesState, AxisId};
use crate::core::AxisDimension;

/// Axes a series is drawn against. `None` means the dimension's default axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisAssignment {
    #[serde(default)]
    pub x_axis_id: Option<AxisId>,
    #[serde(default)]
    pub y_axis_id: Option<AxisId>,
}

impl AxisAssignment {
    #[must_use]
    pub fn new(x_axis_id: impl Into<AxisId>, y_axis_id: impl Into<AxisId>) -> Self {
        Self {
            x_axis_id: Some(x_axis_id.into()),
            y_axis_id: Some(y_axis_id.into()),
        }
    }

    #[must_use]
    pub fn axis_id(&self, dimension: AxisDimension) -> Option<&AxisId> {
        match dimension {
            AxisDimension::X => self.x_axis_id.as_ref(),
            AxisDimension::Y => self.y_axis_id.as_ref(),
        }
    }
}

/// Series name to axis assignment, in registration order.
pub type AxisAssignments = IndexMap<String, AxisAssignment>;

/// Distinct axes of `dimension` reached by a gesture over `series`.
///
/// Each series maps to its assigned axis or, when unassigned or assigned to
/// an unknown id, to the first registered axis. The result is deduplicated
/// and keeps first-seen order. With no series at all, the gesture reaches
/// the default axis alone.
pub fn axes_for_series<'a>(
    series: impl IntoIterator<Item = &'a str>,
    assignments: &AxisAssignments,
    dimension: AxisDimension,
    axes: &AxesState,
) -> SmallVec<[AxisId; 4]> {
    let mut resolved: SmallVec<[AxisId; 4]> = SmallVec::new();
    let mut push = |id: Option<&AxisId>| {
        if let Some(id) = id {
            if !resolved.contains(id) {
                resolved.push(id.clone());
            }
        }
    };

    let mut any_series = false;
    for name in series {
        any_series = true;
        let requested = assignments
            .get(name)
            .and_then(|assignment| assignment.axis_id(dimension));
        let id = match requested {
            Some(requested) => axes.resolve_id(requested.as_str()),
            None => axes.axis_default_id(),
        };
        push(id);
    }
    if !any_series {
        push(axes.axis_default_id());
    }
    resolved
}
