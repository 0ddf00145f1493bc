//! # Part Catalog and Parameters
//!
//! Closed catalog of printable parts, per-kind parameter defaults, and
//! the clamping boundary that turns raw user numbers into validated
//! parameter records.
//!
//! Clamping happens here, once, at the boundary; the geometry kernel
//! only rejects structurally impossible values. Anything that survives
//! `PartParams::for_kind` is inside the supported envelope.

use config::constants::{
    ARC_DEG_RANGE, GRID_U_RANGE, GRID_V_RANGE, HOLE_SIZE_RANGE, HOLE_STRIDE_RANGE, MAX_NAME_LEN,
    SCALE_RANGE, TAPER_RATIO_RANGE, THICKNESS_MM_RANGE,
};
use hand_mesh::ShellParams;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==============================================================================
// PART KIND
// ==============================================================================

/// The closed set of parts a hand assembly is composed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartKind {
    /// Forearm cuff shell.
    Cuff,
    /// Single finger shell.
    Finger,
    /// Palm plate proxy.
    Palm,
    /// Wrist gauntlet shell.
    Gauntlet,
    /// Proximal finger segment shell (four copies in the assembly).
    ProximalFinger,
    /// Proximal thumb segment shell.
    ProximalThumb,
    /// Finger tip proxy.
    FingerTip,
    /// Hinge pin trio proxy.
    Pins,
    /// Tensioner block proxy.
    ThreePinTensioner,
}

impl PartKind {
    /// All parts in assembly composition order.
    pub const ALL: [PartKind; 9] = [
        PartKind::Cuff,
        PartKind::Finger,
        PartKind::Palm,
        PartKind::Gauntlet,
        PartKind::ProximalFinger,
        PartKind::ProximalThumb,
        PartKind::FingerTip,
        PartKind::Pins,
        PartKind::ThreePinTensioner,
    ];

    /// The stable snake_case identifier used in layouts and asset names.
    pub fn as_str(self) -> &'static str {
        match self {
            PartKind::Cuff => "cuff",
            PartKind::Finger => "finger",
            PartKind::Palm => "palm",
            PartKind::Gauntlet => "gauntlet",
            PartKind::ProximalFinger => "proximal_finger",
            PartKind::ProximalThumb => "proximal_thumb",
            PartKind::FingerTip => "finger_tip",
            PartKind::Pins => "pins",
            PartKind::ThreePinTensioner => "three_pin_tensioner",
        }
    }

    /// Parses a part identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == id)
    }

    /// Whether the part is a parametric shell (as opposed to a proxy
    /// primitive).
    pub fn is_shell(self) -> bool {
        matches!(
            self,
            PartKind::Cuff
                | PartKind::Finger
                | PartKind::Gauntlet
                | PartKind::ProximalFinger
                | PartKind::ProximalThumb
        )
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==============================================================================
// PARAMETERS
// ==============================================================================

/// Validated parameters for one part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PartParams {
    /// Parameters for a parametric shell part.
    Shell {
        /// Display name embedded in serialized output.
        name: String,
        /// Shell surface parameters.
        shell: ShellParams,
        /// Uniform scale applied to the finished mesh.
        scale: f64,
    },
    /// Parameters for a fixed-size proxy part.
    Proxy {
        /// Display name embedded in serialized output.
        name: String,
        /// Uniform scale applied to the finished mesh.
        scale: f64,
    },
}

impl PartParams {
    /// The part's display name.
    pub fn name(&self) -> &str {
        match self {
            PartParams::Shell { name, .. } | PartParams::Proxy { name, .. } => name,
        }
    }

    /// The part's uniform scale factor.
    pub fn scale(&self) -> f64 {
        match self {
            PartParams::Shell { scale, .. } | PartParams::Proxy { scale, .. } => *scale,
        }
    }

    /// The shell parameters, when this is a shell part.
    pub fn shell(&self) -> Option<&ShellParams> {
        match self {
            PartParams::Shell { shell, .. } => Some(shell),
            PartParams::Proxy { .. } => None,
        }
    }

    /// Built-in defaults for a part kind.
    pub fn defaults(kind: PartKind) -> Self {
        let shell = |r, l, arc, t, gu, gv, stride, size, taper| PartParams::Shell {
            name: kind.as_str().to_owned(),
            shell: ShellParams {
                inner_radius_mm: r,
                length_mm: l,
                arc_deg: arc,
                thickness_mm: t,
                grid_u: gu,
                grid_v: gv,
                hole_every_n: stride,
                hole_size_cells: size,
                taper_ratio: taper,
            },
            scale: 1.0,
        };
        match kind {
            PartKind::Cuff => PartParams::Shell {
                name: kind.as_str().to_owned(),
                shell: default_cuff_shell(),
                scale: 1.0,
            },
            PartKind::Finger => shell(10.0, 55.0, 220.0, 2.2, 28, 48, 4, 1, 0.2),
            PartKind::Gauntlet => shell(40.0, 90.0, 220.0, 3.0, 36, 56, 5, 2, 0.0),
            PartKind::ProximalFinger => shell(11.0, 30.0, 230.0, 2.5, 20, 36, 3, 1, 0.1),
            PartKind::ProximalThumb => shell(13.0, 25.0, 240.0, 2.5, 18, 34, 3, 1, 0.1),
            PartKind::Palm
            | PartKind::FingerTip
            | PartKind::Pins
            | PartKind::ThreePinTensioner => PartParams::Proxy {
                name: kind.as_str().to_owned(),
                scale: 1.0,
            },
        }
    }

    /// Builds validated parameters for `kind` from raw user input.
    ///
    /// Absent fields keep the kind's defaults. Present numeric fields
    /// are clamped to the configured bounds, except the length scales
    /// (radius, length), which pass through and are rejected by the
    /// kernel if non-positive. Names are truncated to the cap.
    pub fn for_kind(kind: PartKind, raw: &RawParams) -> Self {
        let mut params = Self::defaults(kind);

        let name = match &raw.name {
            Some(given) => truncate_name(given),
            None => kind.as_str().to_owned(),
        };

        match &mut params {
            PartParams::Shell { name: n, shell, scale } => {
                *n = name;
                if let Some(r) = raw.inner_radius_mm {
                    shell.inner_radius_mm = r;
                }
                if let Some(l) = raw.length_mm {
                    shell.length_mm = l;
                }
                if let Some(arc) = raw.arc_deg {
                    shell.arc_deg = clamp_f64(arc, ARC_DEG_RANGE);
                }
                if let Some(t) = raw.thickness_mm {
                    shell.thickness_mm = clamp_f64(t, THICKNESS_MM_RANGE);
                }
                if let Some(gu) = raw.grid_u {
                    shell.grid_u = clamp_u32(gu, GRID_U_RANGE);
                }
                if let Some(gv) = raw.grid_v {
                    shell.grid_v = clamp_u32(gv, GRID_V_RANGE);
                }
                if let Some(stride) = raw.hole_every_n {
                    shell.hole_every_n = clamp_u32(stride, HOLE_STRIDE_RANGE);
                }
                if let Some(size) = raw.hole_size_cells {
                    shell.hole_size_cells = clamp_u32(size, HOLE_SIZE_RANGE);
                }
                if let Some(taper) = raw.taper_ratio {
                    shell.taper_ratio = clamp_f64(taper, TAPER_RATIO_RANGE);
                }
                if let Some(s) = raw.scale {
                    *scale = clamp_f64(s, SCALE_RANGE);
                }
            }
            PartParams::Proxy { name: n, scale } => {
                *n = name;
                if let Some(s) = raw.scale {
                    *scale = clamp_f64(s, SCALE_RANGE);
                }
            }
        }
        params
    }
}

/// Raw, unvalidated user input for one part.
///
/// Absent fields fall back to the part kind's defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawParams {
    /// Display name.
    pub name: Option<String>,
    /// Inner radius (mm).
    pub inner_radius_mm: Option<f64>,
    /// Length (mm).
    pub length_mm: Option<f64>,
    /// Arc sweep (degrees).
    pub arc_deg: Option<f64>,
    /// Wall thickness (mm).
    pub thickness_mm: Option<f64>,
    /// Longitudinal grid resolution.
    pub grid_u: Option<u32>,
    /// Angular grid resolution.
    pub grid_v: Option<u32>,
    /// Perforation stride in cells.
    pub hole_every_n: Option<u32>,
    /// Perforation block edge length in cells.
    pub hole_size_cells: Option<u32>,
    /// Linear taper ratio.
    pub taper_ratio: Option<f64>,
    /// Uniform part scale.
    pub scale: Option<f64>,
}

/// Default cuff geometry, also the reference shape the derived
/// placements (finger offset) are computed from.
pub fn default_cuff_shell() -> ShellParams {
    ShellParams {
        inner_radius_mm: 38.0,
        length_mm: 120.0,
        arc_deg: 200.0,
        thickness_mm: 3.0,
        grid_u: 40,
        grid_v: 60,
        hole_every_n: 5,
        hole_size_cells: 2,
        taper_ratio: 0.0,
    }
}

fn clamp_f64(value: f64, (lo, hi): (f64, f64)) -> f64 {
    value.clamp(lo, hi)
}

fn clamp_u32(value: u32, (lo, hi): (u32, u32)) -> u32 {
    value.clamp(lo, hi)
}

fn truncate_name(name: &str) -> String {
    name.chars().take(MAX_NAME_LEN).collect()
}
