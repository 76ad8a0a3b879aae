//! Core traits for octaview

use crate::{point::*, point_cloud::PointCloud, primitive::ProjectedPrimitive};

/// Anything with a position in world space
pub trait Positioned {
    fn position(&self) -> Point3f;
}

impl Positioned for Point3f {
    fn position(&self) -> Point3f {
        *self
    }
}

impl Positioned for ScenePoint {
    fn position(&self) -> Point3f {
        self.position
    }
}

/// Trait for objects with a spatial extent
pub trait Bounded {
    /// Axis-aligned bounding box as `(min, max)`; both corners are the origin when empty
    fn bounding_box(&self) -> (Point3f, Point3f);

    fn center(&self) -> Point3f {
        let (min, max) = self.bounding_box();
        nalgebra::center(&min, &max)
    }
}

impl<T: Positioned> Bounded for PointCloud<T> {
    fn bounding_box(&self) -> (Point3f, Point3f) {
        let mut positions = self.iter().map(Positioned::position);
        let Some(first) = positions.next() else {
            return (Point3f::origin(), Point3f::origin());
        };

        positions.fold((first, first), |(min, max), p| {
            (min.inf(&p), max.sup(&p))
        })
    }
}

/// A 2D drawing target that consumes projected primitives.
///
/// Primitives arrive back-to-front; a surface draws them in call order so
/// nearer circles overlay farther ones.
pub trait RenderSurface {
    /// Called once before the primitives of a frame
    fn begin_frame(&mut self) {}

    fn draw_circle(&mut self, primitive: &ProjectedPrimitive);

    /// Called once after the last primitive of a frame
    fn end_frame(&mut self) {}
}
