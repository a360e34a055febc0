//! Participants in a game: board ownership and attack dispatch.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{Board, VesselId};
use crate::cellset::CellSet;
use crate::common::{AttackOutcome, GameError};
use crate::coord::{Coordinate, Orientation};
use crate::targeting::{pick_untargeted, TargetSource};
use crate::vessel::Vessel;

/// How a combatant chooses its targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatantKind {
    /// Targets are supplied by the caller on every attack.
    Controlled,
    /// Targets are drawn from the combatant's own [`TargetSource`].
    Autonomous,
}

impl FromStr for CombatantKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("controlled") || s.eq_ignore_ascii_case("human") {
            Ok(CombatantKind::Controlled)
        } else if s.eq_ignore_ascii_case("autonomous") || s.eq_ignore_ascii_case("computer") {
            Ok(CombatantKind::Autonomous)
        } else {
            Err(GameError::InvalidKind)
        }
    }
}

/// The coordinate an attack resolved at, with its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub target: Coordinate,
    pub outcome: AttackOutcome,
}

/// A player: owns one board and remembers where it has fired.
pub struct Combatant {
    name: String,
    kind: CombatantKind,
    board: Board,
    targeted: CellSet,
    source: Box<dyn TargetSource>,
}

impl Combatant {
    /// Create a combatant whose target source is seeded from OS entropy.
    #[cfg(feature = "std")]
    pub fn new(name: impl Into<String>, kind: CombatantKind) -> Result<Self, GameError> {
        let rng = SmallRng::from_rng(&mut rand::rng());
        Self::with_source(name, kind, rng)
    }

    /// Create a combatant with a reproducible target source.
    pub fn with_seed(
        name: impl Into<String>,
        kind: CombatantKind,
        seed: u64,
    ) -> Result<Self, GameError> {
        Self::with_source(name, kind, SmallRng::seed_from_u64(seed))
    }

    /// Create a combatant drawing autonomous targets from `source`.
    pub fn with_source(
        name: impl Into<String>,
        kind: CombatantKind,
        source: impl TargetSource + 'static,
    ) -> Result<Self, GameError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GameError::InvalidName);
        }
        Ok(Self {
            name,
            kind,
            board: Board::new(),
            targeted: CellSet::new(),
            source: Box::new(source),
        })
    }

    /// Create a combatant from textual arguments, e.g. `("Ada", "human")`.
    ///
    /// The name is validated before the kind.
    #[cfg(feature = "std")]
    pub fn from_parts(name: &str, kind: &str) -> Result<Self, GameError> {
        if name.trim().is_empty() {
            return Err(GameError::InvalidName);
        }
        Self::new(name, kind.parse()?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CombatantKind {
        self.kind
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Place a vessel on this combatant's own board.
    pub fn place_vessel(
        &mut self,
        vessel: Vessel,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<VesselId, GameError> {
        self.board.place_vessel(vessel, origin, orientation)
    }

    /// Attack `opponent`'s board.
    ///
    /// `Controlled` combatants must pass `target`; `Autonomous` ones ignore
    /// it and pick a cell they have not fired at before. The chosen cell is
    /// remembered before the attack resolves.
    pub fn attack(
        &mut self,
        opponent: Option<&mut Combatant>,
        target: Option<Coordinate>,
    ) -> Result<Shot, GameError> {
        let opponent = opponent.ok_or(GameError::InvalidOpponent)?;
        let target = match self.kind {
            CombatantKind::Controlled => target.ok_or(GameError::InvalidCoordinate)?,
            CombatantKind::Autonomous => pick_untargeted(&mut *self.source, &self.targeted)?,
        };
        self.targeted.insert(target);

        let outcome = opponent.board.receive_attack(target)?;
        log::debug!(
            "{} attacked {} at {}: {}",
            self.name,
            opponent.name,
            target,
            outcome
        );
        Ok(Shot { target, outcome })
    }

    /// Whether this combatant has already fired at `coord`.
    pub fn has_targeted(&self, coord: Coordinate) -> bool {
        self.targeted.contains(coord)
    }

    pub fn targeted_count(&self) -> usize {
        self.targeted.len()
    }

    /// Every cell this combatant has fired at.
    pub fn targeted(&self) -> &CellSet {
        &self.targeted
    }
}

impl fmt::Debug for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combatant")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("board", &self.board)
            .field("targeted", &self.targeted.len())
            .finish()
    }
}
