mod layout;
mod reservation;
mod track;
mod train;

pub use layout::{LayoutError, RailRole, TrackLayout};
pub use reservation::ReservationLedger;
pub use track::{Rail, TrackSpan};
pub use train::{Car, MovementState, Train, TrainId};

/// Travel direction across the yard. The sign of a train's speed encodes it:
/// positive speed runs east, negative runs west.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    East,
    West,
}
