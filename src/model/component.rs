use std::fmt;

use serde::{Deserialize, Serialize};

use super::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Generator,
    Vent,
}

impl ComponentKind {
    pub fn will_take_heat(self) -> bool {
        match self {
            Self::Generator => false,
            Self::Vent => true,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generator => f.write_str("generator"),
            Self::Vent => f.write_str("vent"),
        }
    }
}

/// Behavior attached to a single cell.
///
/// Amounts are taken as given; zero and negative values are not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Generator {
        #[serde(rename = "heat")]
        heat_generated: f64,
        #[serde(rename = "power")]
        power_generated: f64,
    },
    Vent {
        #[serde(rename = "heat")]
        heat_vented: f64,
    },
}

impl Component {
    pub fn generator(heat_generated: f64, power_generated: f64) -> Self {
        Self::Generator {
            heat_generated,
            power_generated,
        }
    }

    pub fn vent(heat_vented: f64) -> Self {
        Self::Vent { heat_vented }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Generator { .. } => ComponentKind::Generator,
            Self::Vent { .. } => ComponentKind::Vent,
        }
    }

    pub fn is_generator(&self) -> bool {
        self.kind() == ComponentKind::Generator
    }

    /// Whether neighbors may push heat into this component's cell.
    pub fn will_take_heat(&self) -> bool {
        self.kind().will_take_heat()
    }

    /// Applies one tick of this component to its own cell. Neighbors are
    /// read-only; heat transfer between cells belongs to the reactor.
    pub fn update(&self, cell: &mut Cell, _neighbors: &[Cell]) {
        match *self {
            Self::Generator {
                heat_generated,
                power_generated,
            } => {
                cell.heat += heat_generated;
                cell.power += power_generated;
            }
            Self::Vent { heat_vented } => {
                cell.heat = (cell.heat - heat_vented).max(0.0);
            }
        }
    }
}
