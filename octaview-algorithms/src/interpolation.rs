//! Angular bracketing between reference views
//!
//! Finds the pair of reference views on either side of the camera azimuth and
//! the fractional position between them. The factor is metadata for the
//! presentation layer; no image blending happens here.

use octaview_core::{normalize_azimuth, ReferenceView, ReferenceViewTable};

/// The reference views surrounding an azimuth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBracket {
    pub lower_index: usize,
    pub upper_index: usize,
    /// Position between the lower and upper view, in `[0, 1)`
    pub t: f32,
}

impl ViewBracket {
    pub fn lower<'a>(&self, table: &'a ReferenceViewTable) -> &'a ReferenceView {
        &table[self.lower_index]
    }

    pub fn upper<'a>(&self, table: &'a ReferenceViewTable) -> &'a ReferenceView {
        &table[self.upper_index]
    }

    /// True when the bracket crosses the 360 to 0 seam
    pub fn wraps(&self) -> bool {
        self.upper_index <= self.lower_index
    }
}

/// Find the bracketing reference views for `azimuth_degrees`.
///
/// The azimuth is first reduced to `[0, 360)`. The lower view is the last one
/// whose angle is `<=` the azimuth and the upper view is the next entry. Past
/// the last entry the bracket wraps to index 0 with its angle read as
/// `angle + 360`. An azimuth below the first entry (only possible when the
/// table does not start at 0) wraps the other way, from the last entry.
///
/// `t` is 0 when the bracketing span is empty.
pub fn bracket(azimuth_degrees: f32, table: &ReferenceViewTable) -> ViewBracket {
    let azimuth = normalize_azimuth(azimuth_degrees);
    let views = table.views();
    let last = views.len() - 1;

    let below = views.partition_point(|v| f32::from(v.angle_degrees) <= azimuth);

    let (lower_index, lower_angle, upper_index, upper_angle) = if below == 0 {
        // Azimuth sits before the first entry; measure from the last one, a turn earlier
        let lower_angle = f32::from(views[last].angle_degrees) - 360.0;
        (last, lower_angle, 0, f32::from(views[0].angle_degrees))
    } else {
        let lower_index = below - 1;
        let lower_angle = f32::from(views[lower_index].angle_degrees);
        if lower_index == last {
            (lower_index, lower_angle, 0, f32::from(views[0].angle_degrees) + 360.0)
        } else {
            (
                lower_index,
                lower_angle,
                lower_index + 1,
                f32::from(views[lower_index + 1].angle_degrees),
            )
        }
    };

    let span = upper_angle - lower_angle;
    let t = if span > 0.0 {
        ((azimuth - lower_angle) / span).clamp(0.0, 1.0 - f32::EPSILON)
    } else {
        0.0
    };

    ViewBracket {
        lower_index,
        upper_index,
        t,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn eight() -> ReferenceViewTable {
        ReferenceViewTable::eight_views()
    }

    #[test]
    fn test_exact_reference_angles() {
        let table = eight();
        for (i, view) in table.iter().enumerate() {
            let b = bracket(f32::from(view.angle_degrees), &table);
            assert_eq!(b.lower_index, i);
            assert_eq!(b.upper_index, (i + 1) % 8);
            assert_eq!(b.t, 0.0);
        }
    }

    #[test]
    fn test_known_values() {
        let table = eight();

        let b = bracket(0.0, &table);
        assert_eq!((b.lower_index, b.upper_index, b.t), (0, 1, 0.0));

        let b = bracket(44.9, &table);
        assert_eq!((b.lower_index, b.upper_index), (0, 1));
        assert_relative_eq!(b.t, 0.99778, epsilon = 1e-4);

        let b = bracket(315.0, &table);
        assert_eq!((b.lower_index, b.upper_index, b.t), (7, 0, 0.0));

        let b = bracket(350.0, &table);
        assert_eq!((b.lower_index, b.upper_index), (7, 0));
        assert_relative_eq!(b.t, 0.77778, epsilon = 1e-4);
        assert!(b.wraps());
    }

    #[test]
    fn test_out_of_range_azimuth_is_reduced() {
        let table = eight();
        assert_eq!(bracket(360.0, &table), bracket(0.0, &table));
        assert_eq!(bracket(-10.0, &table), bracket(350.0, &table));
        assert_eq!(bracket(f32::NAN, &table), bracket(0.0, &table));
    }

    #[test]
    fn test_labels_resolve() {
        let table = eight();
        let b = bracket(100.0, &table);
        assert_eq!(b.lower(&table).label, "Right");
        assert_eq!(b.upper(&table).label, "Back Right");
    }

    #[test]
    fn test_table_not_starting_at_zero() {
        let table = ReferenceViewTable::new(vec![
            ReferenceView::new(90, "a"),
            ReferenceView::new(270, "b"),
        ])
        .unwrap();

        let b = bracket(45.0, &table);
        assert_eq!((b.lower_index, b.upper_index), (1, 0));
        assert_relative_eq!(b.t, 0.75, epsilon = 1e-6);

        let b = bracket(300.0, &table);
        assert_eq!((b.lower_index, b.upper_index), (1, 0));
        assert_relative_eq!(b.t, 30.0 / 180.0, epsilon = 1e-6);
    }

    #[test]
    fn test_single_entry_table_spans_full_turn() {
        let table = ReferenceViewTable::new(vec![ReferenceView::new(0, "only")]).unwrap();
        let b = bracket(90.0, &table);
        assert_eq!((b.lower_index, b.upper_index), (0, 0));
        assert_relative_eq!(b.t, 0.25, epsilon = 1e-6);
    }
}
