//! The dispatcher driving one frame of the yard per tick.
//!
//! All mutation of shared state (ledger, live trains) happens inside `step`,
//! sequentially per train, so release-then-reserve inside one transition is
//! atomic with respect to every other train's transition that frame.

use crate::constants::{CAR_SLOT, DEFAULT_ANIMATION_SPEED, DEFAULT_SPAWN_CYCLE};
use crate::models::{
    Car, Heading, LayoutError, MovementState, RailRole, ReservationLedger, TrackLayout, Train,
    TrainId,
};
use crate::random::{choose, RandomSource};
use crate::theme;

/// Dispatcher knobs, read fresh every frame.
///
/// The control panel edits these; the dispatcher uses them as-is without
/// further validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimKnobs {
    /// Speed multiplier applied to every train's motion.
    pub animation_speed: u32,
    /// Frames between spawn attempts on the west entry.
    pub west_cycle: u32,
    /// Frames between spawn attempts on the east entry.
    pub east_cycle: u32,
    pub show_train_ids: bool,
}

impl Default for SimKnobs {
    fn default() -> Self {
        Self {
            animation_speed: DEFAULT_ANIMATION_SPEED,
            west_cycle: DEFAULT_SPAWN_CYCLE,
            east_cycle: DEFAULT_SPAWN_CYCLE,
            show_train_ids: true,
        }
    }
}

/// The simulation context: layout, reservation ledger and live trains.
///
/// Built once at startup and replaced wholesale when the viewport changes;
/// in-flight trains are not migrated across a resize.
#[derive(Debug, Clone)]
pub struct Yard {
    layout: TrackLayout,
    ledger: ReservationLedger,
    trains: Vec<Train>,
    next_id: TrainId,
    // Both counters start at -1, so each side's first spawn attempt lands
    // on the second frame rather than frame zero.
    west_tick: i64,
    east_tick: i64,
    max_extra_cars: usize,
}

impl Yard {
    /// Fails only on degenerate viewport geometry, which is fatal: nothing
    /// can be drawn or simulated without a valid layout.
    pub fn new(width: f64, height: f64) -> Result<Self, LayoutError> {
        let layout = TrackLayout::new(width, height)?;
        // A spawned train must fit on the entry rail (one ninth of the
        // viewport) with room to spare.
        #[allow(clippy::cast_possible_truncation)]
        let max_extra_cars = (((width / 9.0 / CAR_SLOT).floor() as i64) - 2).max(0);
        #[allow(clippy::cast_sign_loss)]
        let max_extra_cars = max_extra_cars as usize;
        Ok(Self {
            layout,
            ledger: ReservationLedger::new(),
            trains: Vec::new(),
            next_id: 0,
            west_tick: -1,
            east_tick: -1,
            max_extra_cars,
        })
    }

    #[must_use]
    pub fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    #[must_use]
    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    #[must_use]
    pub fn ledger(&self) -> &ReservationLedger {
        &self.ledger
    }

    /// Trunk queue, holder first: the control tower's schedule board.
    pub fn trunk_schedule(&self) -> impl Iterator<Item = TrainId> + '_ {
        self.ledger.queue(RailRole::Trunk)
    }

    /// Runs one animation frame: spawn attempts on both sides, then one
    /// advance plus at most one state transition per train, in live-list
    /// order, then removal of exited trains.
    pub fn step(&mut self, knobs: &SimKnobs, rng: &mut dyn RandomSource) {
        self.try_spawn(Heading::East, knobs.west_cycle, rng);
        self.try_spawn(Heading::West, knobs.east_cycle, rng);

        for i in 0..self.trains.len() {
            self.trains[i].advance(knobs.animation_speed);
            match self.trains[i].state {
                MovementState::Moving => {}
                MovementState::FirstTurn => self.first_turn(i, rng),
                MovementState::WaitingForMiddle => self.poll_trunk(i),
                MovementState::GoIntoMiddle => self.enter_trunk(i),
                MovementState::PickWayOut => self.pick_way_out(i, rng),
                MovementState::GoToExit => self.go_to_exit(i),
                MovementState::Exit => self.finish_exit(i),
            }
        }

        // Exited trains leave in one compacting pass after the sweep; every
        // train was processed exactly once this frame regardless of how
        // many exited.
        self.trains.retain(|train| train.state != MovementState::Exit);
    }

    /// Spawn gate: the side's counter must wrap, the entry rail must be
    /// free, and at least three of the side's four rails must be free. A
    /// failed attempt is skipped, not deferred. A cycle of zero disables
    /// spawning on that side.
    fn try_spawn(&mut self, heading: Heading, cycle: u32, rng: &mut dyn RandomSource) {
        let counter = match heading {
            Heading::East => &mut self.west_tick,
            Heading::West => &mut self.east_tick,
        };
        let tick = *counter;
        *counter += 1;
        if cycle == 0 || tick.rem_euclid(i64::from(cycle)) != 0 {
            return;
        }

        let entry = RailRole::spawn_entry(heading);
        let free = self.ledger.free_subset(&RailRole::spawn_side(heading));
        if free.len() <= 2 || !self.ledger.is_free(entry) {
            return;
        }

        let car_count = 1 + rng.pick_below(self.max_extra_cars.max(1));
        let body_color = theme::random_car_color(rng);
        let cars = (0..car_count)
            .map(|i| Car {
                color: if i == 0 {
                    theme::LOCOMOTIVE_COLOR.to_string()
                } else {
                    body_color.clone()
                },
            })
            .collect();

        let rail = self.layout.rail(entry);
        let (x, speed, destination) = match heading {
            Heading::East => (rail.left(), 1.0, rail.right()),
            Heading::West => (rail.right(), -1.0, rail.left()),
        };

        let id = self.next_id;
        self.next_id += 1;
        self.ledger.reserve(entry, id);
        self.trains.push(Train::new(
            id,
            entry,
            x,
            speed,
            cars,
            destination,
            MovementState::FirstTurn,
        ));
    }

    /// End of the entry rail: pick a free side path, move onto it, give the
    /// entry back and queue for the trunk. The trunk reservation is
    /// speculative; the train holds a waiting slot long before it gets
    /// there. With no free side path the train stalls on the entry rail.
    fn first_turn(&mut self, i: usize, rng: &mut dyn RandomSource) {
        let (id, heading, entry) = {
            let train = &self.trains[i];
            (train.id, train.heading(), train.rail)
        };
        let free = self.ledger.free_subset(&RailRole::approach_paths(heading));
        let Some(&pick) = choose(rng, &free) else {
            return;
        };

        let destination = self.layout.rail(pick).midpoint();
        self.ledger.reserve(pick, id);
        self.ledger.release_head(entry);
        self.ledger.reserve(RailRole::Trunk, id);

        let train = &mut self.trains[i];
        train.previous_rail = entry;
        train.rail = pick;
        train.destination_x = destination;
        train.state = MovementState::Moving;
        train.reached_state = MovementState::WaitingForMiddle;
    }

    /// Holding point at the side-path midpoint: proceed only once this
    /// train heads the trunk queue. Re-polled every frame.
    fn poll_trunk(&mut self, i: usize) {
        let id = self.trains[i].id;
        if self.ledger.head_holder(RailRole::Trunk) != Some(id) {
            return;
        }

        let heading = self.trains[i].heading();
        let rail = self.layout.rail(self.trains[i].rail);
        let destination = match heading {
            Heading::East => rail.right(),
            Heading::West => rail.left(),
        };

        let train = &mut self.trains[i];
        train.previous_rail = train.rail;
        train.destination_x = destination;
        train.state = MovementState::Moving;
        train.reached_state = MovementState::GoIntoMiddle;
    }

    /// End of the side path, trunk already granted: release the side path
    /// and cross the trunk.
    fn enter_trunk(&mut self, i: usize) {
        let heading = self.trains[i].heading();
        let trunk = self.layout.rail(RailRole::Trunk);
        let destination = match heading {
            Heading::East => trunk.right(),
            Heading::West => trunk.left(),
        };
        let side_path = self.trains[i].rail;
        self.ledger.release_head(side_path);

        let train = &mut self.trains[i];
        train.previous_rail = side_path;
        train.rail = RailRole::Trunk;
        train.destination_x = destination;
        train.state = MovementState::Moving;
        train.reached_state = MovementState::PickWayOut;
    }

    /// Far end of the trunk: pick a free departure path, release the trunk
    /// and pre-reserve the far entry rail. With no free path the train
    /// stalls on the trunk and the whole yard waits behind it.
    fn pick_way_out(&mut self, i: usize, rng: &mut dyn RandomSource) {
        let (id, heading) = {
            let train = &self.trains[i];
            (train.id, train.heading())
        };
        let free = self.ledger.free_subset(&RailRole::departure_paths(heading));
        let Some(&pick) = choose(rng, &free) else {
            return;
        };

        let rail = self.layout.rail(pick);
        let destination = match heading {
            Heading::East => rail.right(),
            Heading::West => rail.left(),
        };
        self.ledger.release_head(RailRole::Trunk);
        self.ledger.reserve(pick, id);
        self.ledger.reserve(RailRole::exit_entry(heading), id);

        let train = &mut self.trains[i];
        train.previous_rail = RailRole::Trunk;
        train.rail = pick;
        train.destination_x = destination;
        train.state = MovementState::Moving;
        train.reached_state = MovementState::GoToExit;
    }

    /// End of the departure path: release it and run for the viewport edge,
    /// far enough that the last car clears the screen.
    fn go_to_exit(&mut self, i: usize) {
        let (heading, length, way_out) = {
            let train = &self.trains[i];
            (train.heading(), train.length(), train.rail)
        };
        let destination = match heading {
            Heading::East => self.layout.width() + length,
            Heading::West => -length,
        };
        self.ledger.release_head(way_out);

        let train = &mut self.trains[i];
        train.previous_rail = way_out;
        train.rail = RailRole::exit_entry(heading);
        train.destination_x = destination;
        train.state = MovementState::Moving;
        train.reached_state = MovementState::Exit;
    }

    /// Fully off-screen: give back the far entry rail. The compacting pass
    /// at the end of the frame removes the train.
    fn finish_exit(&mut self, i: usize) {
        let heading = self.trains[i].heading();
        self.ledger.release_head(RailRole::exit_entry(heading));
    }
}
