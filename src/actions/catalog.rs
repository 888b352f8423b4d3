//! Action definitions and catalog

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::PlantError;
use crate::entity::plant::Stat;

/// A care action the player can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Water,
    Fertilize,
    Sun,
    Prune,
    Mist,
    Inspect,
}

impl Action {
    /// Display order, also the order of the numeric key bindings
    pub const ALL: [Action; 6] = [
        Action::Water,
        Action::Fertilize,
        Action::Sun,
        Action::Prune,
        Action::Mist,
        Action::Inspect,
    ];

    /// Fixed stat deltas applied when a living plant receives this action
    pub fn deltas(&self) -> &'static [(Stat, f32)] {
        match self {
            Action::Water => &[(Stat::Water, 25.0)],
            Action::Fertilize => &[(Stat::Nutrients, 20.0)],
            Action::Sun => &[(Stat::Health, 5.0), (Stat::Growth, 1.0), (Stat::Water, -5.0)],
            Action::Prune => &[(Stat::Growth, -5.0), (Stat::Health, 5.0)],
            Action::Mist => &[(Stat::Water, 10.0), (Stat::Health, 2.0)],
            Action::Inspect => &[],
        }
    }

    /// Whether the action gets rid of an infestation
    pub fn clears_pests(&self) -> bool {
        matches!(self, Action::Prune)
    }

    /// Lowercase identifier used on the command line and in reports
    pub fn id(&self) -> &'static str {
        match self {
            Action::Water => "water",
            Action::Fertilize => "fertilize",
            Action::Sun => "sun",
            Action::Prune => "prune",
            Action::Mist => "mist",
            Action::Inspect => "inspect",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Action::Water => "Water",
            Action::Fertilize => "Fertilize",
            Action::Sun => "Sun",
            Action::Prune => "Prune",
            Action::Mist => "Mist",
            Action::Inspect => "Inspect",
        }
    }

    /// Letter key bound to this action
    pub fn hotkey(&self) -> char {
        match self {
            Action::Water => 'w',
            Action::Fertilize => 'f',
            Action::Sun => 's',
            Action::Prune => 'p',
            Action::Mist => 'm',
            Action::Inspect => 'i',
        }
    }

    /// Look up the action bound to a key, letter or digit 1-6
    pub fn from_key(key: char) -> Option<Action> {
        let key = key.to_ascii_lowercase();
        if let Some(digit) = key.to_digit(10) {
            return (digit as usize)
                .checked_sub(1)
                .and_then(|idx| Action::ALL.get(idx).copied());
        }
        Action::ALL.into_iter().find(|a| a.hotkey() == key)
    }
}

impl FromStr for Action {
    type Err = PlantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Action::ALL
            .into_iter()
            .find(|a| a.id() == wanted)
            .ok_or_else(|| PlantError::UnknownAction(s.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action_ids() {
        assert_eq!("water".parse::<Action>().unwrap(), Action::Water);
        assert_eq!(" Mist ".parse::<Action>().unwrap(), Action::Mist);
        assert_eq!("INSPECT".parse::<Action>().unwrap(), Action::Inspect);
    }

    #[test]
    fn test_parse_unknown_action() {
        let err = "dance".parse::<Action>().unwrap_err();
        assert!(matches!(err, PlantError::UnknownAction(ref s) if s == "dance"));
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(Action::from_key('w'), Some(Action::Water));
        assert_eq!(Action::from_key('F'), Some(Action::Fertilize));
        assert_eq!(Action::from_key('1'), Some(Action::Water));
        assert_eq!(Action::from_key('6'), Some(Action::Inspect));
        assert_eq!(Action::from_key('0'), None);
        assert_eq!(Action::from_key('7'), None);
        assert_eq!(Action::from_key('x'), None);
    }

    #[test]
    fn test_water_adds_twenty_five() {
        assert_eq!(Action::Water.deltas(), &[(Stat::Water, 25.0)]);
    }

    #[test]
    fn test_inspect_changes_nothing() {
        assert!(Action::Inspect.deltas().is_empty());
        assert!(!Action::Inspect.clears_pests());
    }

    #[test]
    fn test_hotkeys_are_unique() {
        let mut keys: Vec<char> = Action::ALL.iter().map(|a| a.hotkey()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Action::ALL.len());
    }
}
