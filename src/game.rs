//! Turn orchestration: a `Placement → Playing → GameOver` state machine
//! over two combatants.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use rand::Rng;

use crate::board::VesselId;
use crate::combatant::Combatant;
use crate::common::{AttackOutcome, GameError};
use crate::coord::{Coordinate, Orientation};
use crate::fleet;
use crate::vessel::Vessel;

/// One of the two positions at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// Current stage of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Placement,
    Playing,
    GameOver { winner: Seat },
}

/// What happened during one successful turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub attacker: Seat,
    pub target: Coordinate,
    pub outcome: AttackOutcome,
    /// Name of the vessel this attack sank, if any.
    pub sunk: Option<String>,
    pub game_over: bool,
}

/// Two combatants and whose turn it is.
#[derive(Debug)]
pub struct Game {
    combatants: [Combatant; 2],
    phase: Phase,
    current: Seat,
    turns: usize,
}

impl Game {
    /// Start a game in the placement phase; `first` moves first.
    pub fn new(first: Combatant, second: Combatant) -> Self {
        Self {
            combatants: [first, second],
            phase: Phase::Placement,
            current: Seat::First,
            turns: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seat whose turn it is.
    pub fn current(&self) -> Seat {
        self.current
    }

    pub fn winner(&self) -> Option<Seat> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Number of turns that resolved successfully.
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn combatant(&self, seat: Seat) -> &Combatant {
        match seat {
            Seat::First => &self.combatants[0],
            Seat::Second => &self.combatants[1],
        }
    }

    pub fn combatant_mut(&mut self, seat: Seat) -> &mut Combatant {
        match seat {
            Seat::First => &mut self.combatants[0],
            Seat::Second => &mut self.combatants[1],
        }
    }

    /// Borrow attacker and defender together. Fails with
    /// [`GameError::InvalidOpponent`] when both seats are the same.
    pub fn pair_mut(
        &mut self,
        attacker: Seat,
        defender: Seat,
    ) -> Result<(&mut Combatant, &mut Combatant), GameError> {
        let [first, second] = &mut self.combatants;
        match (attacker, defender) {
            (Seat::First, Seat::Second) => Ok((first, second)),
            (Seat::Second, Seat::First) => Ok((second, first)),
            _ => Err(GameError::InvalidOpponent),
        }
    }

    /// Place a vessel for `seat`. Only allowed during placement.
    pub fn place_vessel(
        &mut self,
        seat: Seat,
        vessel: Vessel,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<VesselId, GameError> {
        self.require(Phase::Placement)?;
        self.combatant_mut(seat)
            .place_vessel(vessel, origin, orientation)
    }

    /// Place the standard fleet for `seat` at random positions.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(
        &mut self,
        seat: Seat,
        rng: &mut R,
    ) -> Result<Vec<VesselId>, GameError> {
        self.require(Phase::Placement)?;
        let vessels = fleet::standard_fleet()?;
        fleet::place_fleet_randomly(self.combatant_mut(seat), vessels, rng)
    }

    /// Leave the placement phase. Both seats need at least one vessel.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.require(Phase::Placement)?;
        for seat in [Seat::First, Seat::Second] {
            if self.combatant(seat).board().vessels().is_empty() {
                return Err(GameError::FleetIncomplete(seat));
            }
        }
        self.phase = Phase::Playing;
        log::info!(
            "{} vs {}: battle begins",
            self.combatants[0].name(),
            self.combatants[1].name()
        );
        Ok(())
    }

    /// Let the current seat attack the other one.
    ///
    /// `target` is required for controlled combatants and ignored for
    /// autonomous ones. A failed attack leaves the turn with the same seat.
    pub fn play_turn(&mut self, target: Option<Coordinate>) -> Result<TurnReport, GameError> {
        self.require(Phase::Playing)?;
        let seat = self.current;
        let (attacker, defender) = self.pair_mut(seat, seat.other())?;
        let shot = attacker.attack(Some(defender), target)?;

        let board = defender.board();
        let sunk = match shot.outcome {
            AttackOutcome::Hit => board
                .ship_at(shot.target)
                .filter(|v| v.is_sunk())
                .map(|v| v.name().to_string()),
            AttackOutcome::Miss => None,
        };
        let game_over = board.all_vessels_sunk();

        self.turns += 1;
        if game_over {
            self.phase = Phase::GameOver { winner: seat };
            log::info!(
                "{} wins after {} turns",
                self.combatant(seat).name(),
                self.turns
            );
        } else {
            self.current = seat.other();
        }

        Ok(TurnReport {
            attacker: seat,
            target: shot.target,
            outcome: shot.outcome,
            sunk,
            game_over,
        })
    }

    fn require(&self, phase: Phase) -> Result<(), GameError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(GameError::WrongPhase)
        }
    }
}
