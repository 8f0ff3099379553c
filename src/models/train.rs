use super::layout::{RailRole, TrackLayout};
use super::Heading;
use crate::constants::CAR_SLOT;

/// Monotonically increasing train identifier, unique for the lifetime of
/// one simulation.
pub type TrainId = u32;

/// A train's position in its traversal of the yard.
///
/// `Moving` covers every in-motion stretch; the other variants are decision
/// points the dispatcher handles once the train arrives at its destination
/// x. A train that cannot take its transition (no free rail, trunk not yet
/// granted) simply stays in its current state and is re-evaluated next
/// frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementState {
    Moving,
    FirstTurn,
    WaitingForMiddle,
    GoIntoMiddle,
    PickWayOut,
    GoToExit,
    Exit,
}

/// One car of a consist. The first car of every train is the locomotive.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Train {
    pub id: TrainId,
    pub rail: RailRole,
    /// Rail the train came from; trailing cars that have not yet cleared
    /// the junction are still drawn on it.
    pub previous_rail: RailRole,
    /// Pixels per tick; the sign encodes the heading.
    pub speed: f64,
    /// Lead-car anchor position along the x axis.
    pub x: f64,
    pub cars: Vec<Car>,
    pub destination_x: f64,
    pub state: MovementState,
    /// State to adopt once `destination_x` is reached.
    pub reached_state: MovementState,
}

impl Train {
    #[must_use]
    pub fn new(
        id: TrainId,
        rail: RailRole,
        x: f64,
        speed: f64,
        cars: Vec<Car>,
        destination_x: f64,
        reached_state: MovementState,
    ) -> Self {
        Self {
            id,
            rail,
            previous_rail: rail,
            speed,
            x,
            cars,
            destination_x,
            state: MovementState::Moving,
            reached_state,
        }
    }

    #[must_use]
    pub fn heading(&self) -> Heading {
        if self.speed > 0.0 {
            Heading::East
        } else {
            Heading::West
        }
    }

    /// One tick of motion.
    ///
    /// Arrival is approximate: the position advances the full tick and may
    /// end up past the destination by less than one tick's movement before
    /// the recorded reached-state takes over. No snapping to the exact
    /// destination.
    pub fn advance(&mut self, animation_speed: u32) {
        if self.state != MovementState::Moving {
            return;
        }
        self.x += self.speed * f64::from(animation_speed);
        let arrived = if self.speed > 0.0 {
            self.x >= self.destination_x
        } else {
            self.x <= self.destination_x
        };
        if arrived {
            self.state = self.reached_state;
        }
    }

    /// Total rendered length of the consist, used for true off-screen exit
    /// thresholds.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.cars.len() as f64 * CAR_SLOT
    }

    /// X anchor of the car at `index`: the lead car sits at the train's
    /// position, each trailing car one slot behind it (behind meaning
    /// opposite the travel direction).
    #[must_use]
    pub fn car_x(&self, index: usize) -> f64 {
        let back = if self.speed > 0.0 { -1.0 } else { 1.0 };
        self.x + back * (index as f64) * CAR_SLOT
    }

    /// Rail a car anchored at `car_x` is drawn on. Cars behind the lead car
    /// that have not yet crossed onto the current rail straddle the
    /// boundary and stay on the previous one.
    #[must_use]
    pub fn car_rail(&self, car_x: f64, layout: &TrackLayout) -> RailRole {
        let rail = layout.rail(self.rail);
        match self.heading() {
            Heading::East if car_x < rail.left() => self.previous_rail,
            Heading::West if car_x >= rail.right() => self.previous_rail,
            _ => self.rail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cars(n: usize) -> Vec<Car> {
        (0..n)
            .map(|_| Car {
                color: "brown".to_string(),
            })
            .collect()
    }

    fn eastbound(x: f64, speed: f64, destination: f64) -> Train {
        Train::new(
            7,
            RailRole::EntryWest,
            x,
            speed,
            cars(3),
            destination,
            MovementState::FirstTurn,
        )
    }

    #[test]
    fn arrival_allows_overshoot_without_snapping() {
        let mut train = eastbound(98.0, 2.0, 100.0);
        train.advance(1);
        assert_eq!(train.state, MovementState::FirstTurn);
        assert!(train.x >= 100.0);
        // Overshoot is bounded by one tick's movement.
        assert!(train.x < 100.0 + 2.0);
    }

    #[test]
    fn arrival_works_westbound() {
        let mut train = Train::new(
            8,
            RailRole::EntryEast,
            803.0,
            -1.0,
            cars(2),
            800.0,
            MovementState::FirstTurn,
        );
        train.advance(2);
        assert_eq!(train.state, MovementState::Moving);
        train.advance(2);
        assert_eq!(train.state, MovementState::FirstTurn);
        assert!(train.x <= 800.0);
    }

    #[test]
    fn advance_is_a_no_op_outside_moving() {
        let mut train = eastbound(50.0, 1.0, 100.0);
        train.state = MovementState::PickWayOut;
        train.advance(3);
        assert_eq!(train.x, 50.0);
        assert_eq!(train.state, MovementState::PickWayOut);
    }

    #[test]
    fn speed_multiplier_scales_motion() {
        let mut train = eastbound(0.0, 1.0, 1000.0);
        train.advance(3);
        assert_eq!(train.x, 3.0);
    }

    #[test]
    fn car_offsets_trail_behind_the_lead() {
        let mut train = eastbound(500.0, 1.0, 1000.0);
        assert_eq!(train.car_x(0), 500.0);
        assert_eq!(train.car_x(1), 482.0);
        assert_eq!(train.car_x(2), 464.0);

        train.speed = -1.0;
        assert_eq!(train.car_x(1), 518.0);
    }

    #[test]
    fn consist_length_counts_car_slots() {
        let train = eastbound(0.0, 1.0, 100.0);
        assert_eq!(train.length(), 3.0 * CAR_SLOT);
    }

    #[test]
    fn straddling_cars_stay_on_the_previous_rail() {
        let layout = TrackLayout::new(900.0, 600.0).expect("valid viewport");
        let mut train = eastbound(110.0, 1.0, 250.0);
        train.previous_rail = RailRole::EntryWest;
        train.rail = RailRole::WestMain;

        // Lead car is past the junction at x=100, second car is not.
        assert_eq!(train.car_rail(train.car_x(0), &layout), RailRole::WestMain);
        assert_eq!(train.car_rail(train.car_x(1), &layout), RailRole::EntryWest);
    }

    #[test]
    fn straddling_rule_mirrors_westbound() {
        let layout = TrackLayout::new(900.0, 600.0).expect("valid viewport");
        let mut train = Train::new(
            9,
            RailRole::EastMain,
            790.0,
            -1.0,
            cars(3),
            650.0,
            MovementState::WaitingForMiddle,
        );
        train.previous_rail = RailRole::EntryEast;

        assert_eq!(train.car_rail(train.car_x(0), &layout), RailRole::EastMain);
        // Trailing car at x=808 has not crossed the junction at x=800 yet.
        assert_eq!(train.car_rail(train.car_x(1), &layout), RailRole::EntryEast);
    }
}
