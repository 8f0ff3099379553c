use super::track::{Rail, TrackSpan};
use super::Heading;
use std::fmt;

/// Named position of a rail in the fixed diamond topology.
///
/// Two entry rails fan out into three parallel side paths each; everything
/// funnels through the single-track `Trunk` in the middle. Roles replace the
/// raw array indices the layout is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RailRole {
    EntryWest,
    WestTop,
    WestMain,
    WestBottom,
    Trunk,
    EastTop,
    EastMain,
    EastBottom,
    EntryEast,
}

impl RailRole {
    pub const COUNT: usize = 9;

    pub const ALL: [RailRole; RailRole::COUNT] = [
        RailRole::EntryWest,
        RailRole::WestTop,
        RailRole::WestMain,
        RailRole::WestBottom,
        RailRole::Trunk,
        RailRole::EastTop,
        RailRole::EastMain,
        RailRole::EastBottom,
        RailRole::EntryEast,
    ];

    /// Position in the layout's rail array, west to east, top to bottom.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Entry rail where trains with the given heading spawn.
    #[must_use]
    pub fn spawn_entry(heading: Heading) -> RailRole {
        match heading {
            Heading::East => RailRole::EntryWest,
            Heading::West => RailRole::EntryEast,
        }
    }

    /// Entry rail on the far side, where trains with the given heading leave.
    #[must_use]
    pub fn exit_entry(heading: Heading) -> RailRole {
        match heading {
            Heading::East => RailRole::EntryEast,
            Heading::West => RailRole::EntryWest,
        }
    }

    /// The three side paths a train fans into right after its spawn entry.
    #[must_use]
    pub fn approach_paths(heading: Heading) -> [RailRole; 3] {
        match heading {
            Heading::East => [RailRole::WestTop, RailRole::WestMain, RailRole::WestBottom],
            Heading::West => [RailRole::EastTop, RailRole::EastMain, RailRole::EastBottom],
        }
    }

    /// The three side paths on the far side of the trunk.
    #[must_use]
    pub fn departure_paths(heading: Heading) -> [RailRole; 3] {
        match heading {
            Heading::East => RailRole::approach_paths(Heading::West),
            Heading::West => RailRole::approach_paths(Heading::East),
        }
    }

    /// Spawn entry plus its three side paths: the capacity set checked
    /// before a new train is admitted on that side.
    #[must_use]
    pub fn spawn_side(heading: Heading) -> [RailRole; 4] {
        let [a, b, c] = RailRole::approach_paths(heading);
        [RailRole::spawn_entry(heading), a, b, c]
    }
}

/// The yard cannot be drawn or simulated without valid geometry, so layout
/// construction is the one fatal failure class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutError {
    DegenerateViewport { width: f64, height: f64 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::DegenerateViewport { width, height } => {
                write!(f, "degenerate viewport {width}x{height}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// The fixed 9-rail diamond, scaled once to the viewport.
///
/// Immutable after construction; a viewport resize replaces the whole layout
/// (and the simulation built on it) rather than migrating anything.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackLayout {
    width: f64,
    height: f64,
    rails: Vec<Rail>,
}

impl TrackLayout {
    /// Builds the diamond for a viewport. Horizontal ninths set the junction
    /// columns; side paths ride at one third and two thirds of the height.
    pub fn new(width: f64, height: f64) -> Result<Self, LayoutError> {
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(LayoutError::DegenerateViewport { width, height });
        }

        let col = |n: f64| width * n / 9.0;
        let mid = height / 2.0;
        let top = height / 3.0;
        let bottom = height * 2.0 / 3.0;

        let rise = |y: f64| -> Rail {
            Rail::new(vec![
                TrackSpan::new(col(1.0), mid, col(2.0), y),
                TrackSpan::new(col(2.0), y, col(3.0), y),
                TrackSpan::new(col(3.0), y, col(4.0), mid),
            ])
        };
        let fall = |y: f64| -> Rail {
            Rail::new(vec![
                TrackSpan::new(col(5.0), mid, col(6.0), y),
                TrackSpan::new(col(6.0), y, col(7.0), y),
                TrackSpan::new(col(7.0), y, col(8.0), mid),
            ])
        };

        // Order must match RailRole::index.
        let rails = vec![
            Rail::new(vec![TrackSpan::new(0.0, mid, col(1.0), mid)]),
            rise(top),
            Rail::new(vec![TrackSpan::new(col(1.0), mid, col(4.0), mid)]),
            rise(bottom),
            Rail::new(vec![TrackSpan::new(col(4.0), mid, col(5.0), mid)]),
            fall(top),
            Rail::new(vec![TrackSpan::new(col(5.0), mid, col(8.0), mid)]),
            fall(bottom),
            Rail::new(vec![TrackSpan::new(col(8.0), mid, width, mid)]),
        ];

        Ok(Self {
            width,
            height,
            rails,
        })
    }

    #[must_use]
    pub fn rail(&self, role: RailRole) -> &Rail {
        &self.rails[role.index()]
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> TrackLayout {
        TrackLayout::new(900.0, 600.0).expect("valid viewport")
    }

    #[test]
    fn rejects_degenerate_viewports() {
        assert!(TrackLayout::new(0.0, 600.0).is_err());
        assert!(TrackLayout::new(900.0, -1.0).is_err());
        assert!(TrackLayout::new(f64::NAN, 600.0).is_err());
    }

    #[test]
    fn entry_rails_sit_on_the_outer_ninths() {
        let layout = layout();
        let west = layout.rail(RailRole::EntryWest);
        assert_eq!(west.left(), 0.0);
        assert_eq!(west.right(), 100.0);
        let east = layout.rail(RailRole::EntryEast);
        assert_eq!(east.left(), 800.0);
        assert_eq!(east.right(), 900.0);
    }

    #[test]
    fn trunk_spans_the_middle_ninth() {
        let layout = layout();
        let trunk = layout.rail(RailRole::Trunk);
        assert_eq!(trunk.left(), 400.0);
        assert_eq!(trunk.right(), 500.0);
    }

    #[test]
    fn side_paths_share_junction_columns() {
        let layout = layout();
        for role in [RailRole::WestTop, RailRole::WestMain, RailRole::WestBottom] {
            assert_eq!(layout.rail(role).left(), 100.0);
            assert_eq!(layout.rail(role).right(), 400.0);
        }
        for role in [RailRole::EastTop, RailRole::EastMain, RailRole::EastBottom] {
            assert_eq!(layout.rail(role).left(), 500.0);
            assert_eq!(layout.rail(role).right(), 800.0);
        }
    }

    #[test]
    fn every_rail_has_spans() {
        let layout = layout();
        for role in RailRole::ALL {
            assert!(!layout.rail(role).spans().is_empty(), "{role:?}");
        }
    }

    #[test]
    fn role_helpers_resolve_per_heading() {
        assert_eq!(RailRole::spawn_entry(Heading::East), RailRole::EntryWest);
        assert_eq!(RailRole::exit_entry(Heading::East), RailRole::EntryEast);
        assert_eq!(
            RailRole::approach_paths(Heading::West),
            [RailRole::EastTop, RailRole::EastMain, RailRole::EastBottom]
        );
        assert_eq!(
            RailRole::departure_paths(Heading::West),
            [RailRole::WestTop, RailRole::WestMain, RailRole::WestBottom]
        );
        assert_eq!(RailRole::spawn_side(Heading::East)[0], RailRole::EntryWest);
    }
}
