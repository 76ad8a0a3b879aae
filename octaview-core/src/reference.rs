//! Reference view table

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Angular spacing of the default reference views
pub const REFERENCE_SPACING_DEGREES: u16 = 45;

const DEFAULT_LABELS: [&str; 8] = [
    "Front",
    "Front Right",
    "Right",
    "Back Right",
    "Back",
    "Back Left",
    "Left",
    "Front Left",
];

/// One captured viewpoint around the subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceView {
    pub angle_degrees: u16,
    pub label: String,
}

impl ReferenceView {
    pub fn new(angle_degrees: u16, label: impl Into<String>) -> Self {
        Self {
            angle_degrees,
            label: label.into(),
        }
    }
}

/// Reference views sorted by strictly ascending angle in `[0, 360)`.
///
/// The table is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReferenceViewTable {
    views: Vec<ReferenceView>,
}

impl ReferenceViewTable {
    /// Build a table, rejecting empty, unsorted, duplicate or out-of-range angles
    pub fn new(views: Vec<ReferenceView>) -> Result<Self> {
        if views.is_empty() {
            return Err(Error::InvalidData(
                "reference view table must not be empty".to_string(),
            ));
        }

        if let Some(view) = views.iter().find(|v| v.angle_degrees >= 360) {
            return Err(Error::InvalidData(format!(
                "reference angle {} is outside [0, 360)",
                view.angle_degrees
            )));
        }

        if let Some(pair) = views
            .windows(2)
            .find(|pair| pair[0].angle_degrees >= pair[1].angle_degrees)
        {
            return Err(Error::InvalidData(format!(
                "reference angles must be strictly ascending, found {} before {}",
                pair[0].angle_degrees, pair[1].angle_degrees
            )));
        }

        Ok(Self { views })
    }

    /// The eight views at 45 degree spacing, starting with "Front" at 0
    pub fn eight_views() -> Self {
        let views = DEFAULT_LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| ReferenceView::new(i as u16 * REFERENCE_SPACING_DEGREES, *label))
            .collect();
        Self { views }
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Never true for a table built through `new` or `eight_views`
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ReferenceView> {
        self.views.get(index)
    }

    pub fn views(&self) -> &[ReferenceView] {
        &self.views
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReferenceView> {
        self.views.iter()
    }
}

impl Default for ReferenceViewTable {
    fn default() -> Self {
        Self::eight_views()
    }
}

impl<'de> Deserialize<'de> for ReferenceViewTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let views = Vec::<ReferenceView>::deserialize(deserializer)?;
        ReferenceViewTable::new(views).map_err(serde::de::Error::custom)
    }
}

impl std::ops::Index<usize> for ReferenceViewTable {
    type Output = ReferenceView;

    fn index(&self, index: usize) -> &Self::Output {
        &self.views[index]
    }
}
