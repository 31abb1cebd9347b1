use serde::de::Error;
use serde::de::{Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;

use crate::constants::BOARD_SIZE;

/// An agent's move: place a piece of the side to move at a linear board
/// position.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Action {
    Place(usize),
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let position: usize = s.parse()?;

        if position >= BOARD_SIZE {
            return Err(anyhow!(
                "Position must be between 0 and {}",
                BOARD_SIZE - 1
            ));
        }

        Ok(Action::Place(position))
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Action::Place(position) = self;
        write!(f, "{}", position)
    }
}

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(match self {
            Action::Place(position) => *position as u64,
        })
    }
}

struct ActionVisitor {}

impl ActionVisitor {
    fn new() -> Self {
        Self {}
    }
}

impl<'de> Visitor<'de> for ActionVisitor {
    type Value = Action;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "Expecting an integer board position between 0 and {} where a piece was placed.",
            BOARD_SIZE - 1
        )
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        if v >= BOARD_SIZE as u64 {
            return Err(E::custom(format!("position {} is outside the board", v)));
        }

        Ok(Action::Place(v as usize))
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_u64(ActionVisitor::new())
    }
}
