//! Display attributes for renderers.
//!
//! The engine never draws anything. Renderers read each point's position and
//! label and use these helpers to pick an outline colour and the circle to
//! draw. Nothing here feeds back into clustering.

use std::fmt;

use glam::DVec2;

use crate::constants::POINT_RADIUS;
use crate::point::{Label, Point};

/// Outline colour of a point marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    /// Unprocessed points.
    Green,
    /// Core points.
    Black,
    /// Reachable border points.
    Red,
    /// Noise.
    Orange,
}

impl Colour {
    /// Lower-case colour name as understood by common drawing toolkits.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Black => "black",
            Self::Red => "red",
            Self::Orange => "orange",
        }
    }

}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Colour used for points carrying `label`.
///
/// # Examples
/// ```
/// use swarmscan::{presentation::{label_colour, Colour}, Label};
/// assert_eq!(label_colour(Label::Core), Colour::Black);
/// ```
#[must_use]
pub const fn label_colour(label: Label) -> Colour {
    match label {
        Label::Unprocessed => Colour::Green,
        Label::Core => Colour::Black,
        Label::Reachable => Colour::Red,
        Label::Noise => Colour::Orange,
    }
}

/// Circle drawn for one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Centre of the circle.
    pub centre: DVec2,
    /// Circle radius.
    pub radius: f64,
    /// Outline colour.
    pub colour: Colour,
}

impl Marker {
    /// Marker of the default radius for `point`.
    #[must_use]
    pub fn for_point(point: &Point) -> Self {
        Self::with_radius(point, POINT_RADIUS)
    }

    /// Marker of `radius` for `point`.
    #[must_use]
    pub fn with_radius(point: &Point, radius: f64) -> Self {
        Self {
            centre: point.position(),
            radius,
            colour: label_colour(point.label()),
        }
    }

    /// Top-left and bottom-right corners of the circle's bounding box.
    #[must_use]
    pub fn bounds(&self) -> (DVec2, DVec2) {
        let extent = DVec2::splat(self.radius);
        (self.centre - extent, self.centre + extent)
    }
}
