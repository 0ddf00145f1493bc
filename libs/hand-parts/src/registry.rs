//! # Part Generation Registry
//!
//! Dispatches each part kind to its generator through one closed match,
//! and substitutes externally supplied STL assets when present.

use crate::error::PartError;
use crate::params::{PartKind, PartParams};
use config::constants::PIN_SEGMENTS;
use glam::DVec3;
use hand_io::load_stl;
use hand_mesh::primitives::{create_box, create_cylinder};
use hand_mesh::transform::{scale_uniform, translate};
use hand_mesh::{build_shell, Mesh};
use std::path::Path;

/// The asset file a part may be substituted from, by part identifier.
///
/// The cuff and finger are always generated parametrically; every other
/// part can be replaced by a curated STL in the asset directory.
pub fn asset_filename(kind: PartKind) -> Option<String> {
    match kind {
        PartKind::Cuff | PartKind::Finger => None,
        _ => Some(format!("{}.stl", kind.as_str())),
    }
}

/// Generates a part mesh from its parameters, with the uniform scale
/// applied.
///
/// # Errors
///
/// Returns [`PartError::ParameterMismatch`] when the payload family
/// does not match the part kind, or a [`PartError::Mesh`] from the
/// geometry kernel.
pub fn generate_part(kind: PartKind, params: &PartParams) -> Result<Mesh, PartError> {
    let mesh = generate_raw(kind, params)?;
    Ok(scale_uniform(&mesh, params.scale()))
}

/// Resolves a part mesh: an asset-directory substitute when one loads,
/// otherwise generated geometry. The uniform scale applies either way.
///
/// Substitute load failures of any kind (missing file, malformed
/// content) are recovered by falling back to generation; they never
/// abort composition.
///
/// # Errors
///
/// Same as [`generate_part`]; asset problems are not errors.
pub fn resolve_part(
    kind: PartKind,
    params: &PartParams,
    asset_dir: Option<&Path>,
) -> Result<Mesh, PartError> {
    if let (Some(dir), Some(file)) = (asset_dir, asset_filename(kind)) {
        if let Ok(mesh) = load_stl(&dir.join(file)) {
            return Ok(scale_uniform(&mesh, params.scale()));
        }
    }
    generate_part(kind, params)
}

fn generate_raw(kind: PartKind, params: &PartParams) -> Result<Mesh, PartError> {
    if kind.is_shell() {
        let Some(shell) = params.shell() else {
            return Err(PartError::mismatch(kind, "expected shell parameters"));
        };
        return Ok(build_shell(shell)?);
    }
    if params.shell().is_some() {
        return Err(PartError::mismatch(kind, "expected proxy parameters"));
    }

    let mesh = match kind {
        PartKind::Palm => create_box(60.0, 8.0, 80.0)?,
        PartKind::ThreePinTensioner => create_box(18.0, 8.0, 30.0)?,
        PartKind::FingerTip => create_box(16.0, 10.0, 12.0)?,
        PartKind::Pins => {
            let pin = create_cylinder(2.5, 12.0, PIN_SEGMENTS)?;
            let mut mesh = Mesh::with_capacity(3 * pin.triangle_count());
            for x in [-6.0, 0.0, 6.0] {
                mesh.merge(&translate(&pin, DVec3::new(x, 0.0, 0.0)));
            }
            mesh
        }
        PartKind::Cuff
        | PartKind::Finger
        | PartKind::Gauntlet
        | PartKind::ProximalFinger
        | PartKind::ProximalThumb => {
            return Err(PartError::mismatch(kind, "expected shell parameters"));
        }
    };
    Ok(mesh)
}
