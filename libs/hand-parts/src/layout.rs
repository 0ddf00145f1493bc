//! # Placement Layout
//!
//! External JSON placement configuration plus built-in placement
//! defaults for the right-hand assembly.
//!
//! Resolution is two-tier and wholesale: a layout entry for a part
//! identifier replaces the built-in placement entirely; there is no
//! field-level merging.

use hand_mesh::{Placement, ShellParams};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::params::PartKind;

/// One layout entry: either a single placement or an explicit copy list.
///
/// Untagged, so JSON stays shaped the way the layout files are written:
/// `{"translate": [...]}` or `{"copies": [{...}, {...}]}`. The copies
/// form is tried first because every placement field is defaulted and
/// an empty object would otherwise always match the single form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlacementEntry {
    /// Multiple instances of the part, one per placement.
    Copies {
        /// Placement per instance, in instantiation order.
        copies: Vec<Placement>,
    },
    /// A single placed instance.
    Single(Placement),
}

impl PlacementEntry {
    /// The entry's placements, in instantiation order.
    pub fn placements(&self) -> Vec<Placement> {
        match self {
            PlacementEntry::Copies { copies } => copies.clone(),
            PlacementEntry::Single(placement) => vec![*placement],
        }
    }
}

/// External placement configuration keyed by part identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Placement overrides by part identifier.
    #[serde(default)]
    pub placements: HashMap<String, PlacementEntry>,
}

impl Layout {
    /// Loads a layout from a JSON file.
    ///
    /// A missing or malformed file resolves to an empty layout so the
    /// built-in defaults apply; layout problems never abort a request.
    pub fn load(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default()
    }

    /// Looks up the entry for a part identifier.
    pub fn get(&self, id: &str) -> Option<&PlacementEntry> {
        self.placements.get(id)
    }
}

/// Built-in right-hand placements for a part kind.
///
/// The finger offset is derived from the cuff geometry so the finger
/// clears the cuff's outer surface.
pub fn default_placements(kind: PartKind, cuff: &ShellParams) -> Vec<Placement> {
    match kind {
        PartKind::Cuff | PartKind::Palm => vec![Placement::IDENTITY],
        PartKind::Finger => vec![Placement::offset(
            cuff.inner_radius_mm + cuff.thickness_mm + 35.0,
            0.0,
            0.0,
        )],
        PartKind::Gauntlet => vec![Placement::offset(0.0, 0.0, -70.0)],
        PartKind::ProximalFinger => [-22.0, -7.0, 7.0, 22.0]
            .into_iter()
            .map(|x| Placement::offset(x, 35.0, 10.0))
            .collect(),
        PartKind::ProximalThumb => vec![Placement::new([-35.0, 15.0, 5.0], -20.0)],
        PartKind::FingerTip => vec![Placement::offset(22.0, 55.0, 12.0)],
        PartKind::Pins => vec![Placement::offset(0.0, -35.0, 8.0)],
        PartKind::ThreePinTensioner => vec![Placement::offset(0.0, -50.0, 8.0)],
    }
}
