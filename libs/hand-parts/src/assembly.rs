//! # Assembly Composer
//!
//! Runs the uniform per-part pipeline over the whole catalog and
//! assembles the hand: generate (or substitute) → scale → place →
//! append, with a final mirror for left hands.

use crate::error::PartError;
use crate::layout::{default_placements, Layout};
use crate::params::{PartKind, PartParams};
use crate::registry::resolve_part;
use hand_mesh::transform::{mirror, place_copies};
use hand_mesh::{Axis, Mesh, ShellParams};
use std::path::PathBuf;

/// Which hand the assembly is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Right,
    Left,
}

impl Hand {
    /// Parses a hand selector: anything starting with `l` or `L` is the
    /// left hand, everything else the right.
    pub fn parse(value: &str) -> Self {
        if value.trim_start().starts_with(['l', 'L']) {
            Hand::Left
        } else {
            Hand::Right
        }
    }
}

/// A complete assembly request: one parameter record per part, the hand
/// side, and the optional external collaborators.
#[derive(Debug, Clone)]
pub struct AssemblyRequest {
    /// Parts to compose, in composition order.
    pub parts: Vec<(PartKind, PartParams)>,
    /// Which hand to build.
    pub hand: Hand,
    /// Directory holding substitute STL assets, when present.
    pub asset_dir: Option<PathBuf>,
    /// Path to a JSON placement layout, when present.
    pub layout_path: Option<PathBuf>,
}

impl AssemblyRequest {
    /// A request covering the full catalog with default parameters.
    pub fn with_defaults(hand: Hand) -> Self {
        Self {
            parts: PartKind::ALL
                .into_iter()
                .map(|kind| (kind, PartParams::defaults(kind)))
                .collect(),
            hand,
            asset_dir: None,
            layout_path: None,
        }
    }
}

/// A composed hand assembly.
#[derive(Debug, Clone)]
pub struct Assembly {
    parts: Vec<(PartKind, Mesh)>,
    combined: Mesh,
}

impl Assembly {
    /// The placed per-part meshes, in composition order.
    pub fn parts(&self) -> &[(PartKind, Mesh)] {
        &self.parts
    }

    /// The placed mesh for one part kind, when the request included it.
    pub fn part(&self, kind: PartKind) -> Option<&Mesh> {
        self.parts
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, mesh)| mesh)
    }

    /// All parts merged into one mesh, in composition order.
    pub fn combined(&self) -> &Mesh {
        &self.combined
    }
}

/// Composes an assembly from the request.
///
/// Placement resolution is two-tier: a layout entry for the part's
/// identifier wins wholesale, otherwise the built-in default placement
/// applies. For a left hand every placed part is mirrored about Y with
/// windings corrected.
///
/// # Errors
///
/// Propagates generation errors ([`PartError`]); asset and layout
/// problems fall back silently per their collaborators' contracts.
pub fn compose(request: &AssemblyRequest) -> Result<Assembly, PartError> {
    let layout = request
        .layout_path
        .as_deref()
        .map(Layout::load)
        .unwrap_or_default();
    let cuff = cuff_shell(request);

    let mut parts = Vec::with_capacity(request.parts.len());
    let mut combined = Mesh::new();

    for (kind, params) in &request.parts {
        let mesh = resolve_part(*kind, params, request.asset_dir.as_deref())?;
        let placements = match layout.get(kind.as_str()) {
            Some(entry) => entry.placements(),
            None => default_placements(*kind, &cuff),
        };
        let mut placed = place_copies(&mesh, &placements);
        if request.hand == Hand::Left {
            placed = mirror(&placed, Axis::Y);
        }
        combined.merge(&placed);
        parts.push((*kind, placed));
    }

    Ok(Assembly { parts, combined })
}

/// The cuff geometry the placement defaults are derived from; falls
/// back to the catalog default when the request carries no cuff.
fn cuff_shell(request: &AssemblyRequest) -> ShellParams {
    request
        .parts
        .iter()
        .find(|(kind, _)| *kind == PartKind::Cuff)
        .and_then(|(_, params)| params.shell().cloned())
        .unwrap_or_else(crate::params::default_cuff_shell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::RawParams;
    use glam::DVec3;
    use tempfile::tempdir;

    /// A full-catalog request with coarse grids so tests stay fast.
    fn small_request(hand: Hand) -> AssemblyRequest {
        let coarse = RawParams {
            grid_u: Some(6),
            grid_v: Some(6),
            hole_every_n: Some(3),
            hole_size_cells: Some(1),
            ..RawParams::default()
        };
        AssemblyRequest {
            parts: PartKind::ALL
                .into_iter()
                .map(|kind| (kind, PartParams::for_kind(kind, &coarse)))
                .collect(),
            hand,
            asset_dir: None,
            layout_path: None,
        }
    }

    #[test]
    fn test_with_defaults_covers_catalog() {
        let request = AssemblyRequest::with_defaults(Hand::Right);
        assert_eq!(request.parts.len(), PartKind::ALL.len());
        assert_eq!(request.parts[0].0, PartKind::Cuff);
    }

    #[test]
    fn test_hand_parse() {
        assert_eq!(Hand::parse("left"), Hand::Left);
        assert_eq!(Hand::parse("Left"), Hand::Left);
        assert_eq!(Hand::parse("lh"), Hand::Left);
        assert_eq!(Hand::parse("right"), Hand::Right);
        assert_eq!(Hand::parse(""), Hand::Right);
    }

    #[test]
    fn test_compose_preserves_catalog_order() {
        let assembly = compose(&small_request(Hand::Right)).unwrap();
        let kinds: Vec<PartKind> = assembly.parts().iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, PartKind::ALL);

        let total: usize = assembly
            .parts()
            .iter()
            .map(|(_, mesh)| mesh.triangle_count())
            .sum();
        assert_eq!(assembly.combined().triangle_count(), total);
    }

    #[test]
    fn test_proximal_finger_is_instantiated_four_times() {
        let assembly = compose(&small_request(Hand::Right)).unwrap();
        let placed = assembly.part(PartKind::ProximalFinger).unwrap();

        let params = PartParams::for_kind(
            PartKind::ProximalFinger,
            &RawParams {
                grid_u: Some(6),
                grid_v: Some(6),
                hole_every_n: Some(3),
                hole_size_cells: Some(1),
                ..RawParams::default()
            },
        );
        let single = crate::registry::generate_part(PartKind::ProximalFinger, &params).unwrap();
        assert_eq!(placed.triangle_count(), 4 * single.triangle_count());
    }

    #[test]
    fn test_left_hand_mirrors_about_y() {
        let right = compose(&small_request(Hand::Right)).unwrap();
        let left = compose(&small_request(Hand::Left)).unwrap();

        let reflect = |p: DVec3| DVec3::new(p.x, -p.y, p.z);
        assert_eq!(
            right.combined().triangle_count(),
            left.combined().triangle_count()
        );
        for (r, l) in right
            .combined()
            .triangles()
            .iter()
            .zip(left.combined().triangles())
        {
            // Mirroring negates Y and swaps the second/third vertices to
            // keep normals outward.
            assert_eq!(l.a, reflect(r.a));
            assert_eq!(l.b, reflect(r.c));
            assert_eq!(l.c, reflect(r.b));
        }
    }

    #[test]
    fn test_layout_overrides_default_placement() {
        let dir = tempdir().unwrap();
        let layout_path = dir.path().join("layout.json");
        std::fs::write(
            &layout_path,
            r#"{"placements": {"palm": {"translate": [100.0, 0.0, 0.0]}}}"#,
        )
        .unwrap();

        let mut request = small_request(Hand::Right);
        request.layout_path = Some(layout_path);
        let assembly = compose(&request).unwrap();

        let palm = assembly.part(PartKind::Palm).unwrap();
        let (min, max) = palm.bounding_box();
        assert_eq!((min.x + max.x) / 2.0, 100.0);

        // Parts without a layout entry keep their built-in placement.
        let gauntlet = assembly.part(PartKind::Gauntlet).unwrap();
        let (gmin, _) = gauntlet.bounding_box();
        assert!(gmin.z < -60.0);
    }

    #[test]
    fn test_finger_placement_follows_cuff_geometry() {
        let assembly = compose(&small_request(Hand::Right)).unwrap();
        let finger = assembly.part(PartKind::Finger).unwrap();
        let (min, max) = finger.bounding_box();
        // Centered on x = cuff radius + thickness + 35 = 76
        assert!(min.x > 60.0);
        assert!(max.x < 92.0);
    }

    #[test]
    fn test_asset_substitution_feeds_the_assembly() {
        let dir = tempdir().unwrap();
        let substitute = hand_mesh::primitives::create_box(2.0, 2.0, 2.0).unwrap();
        hand_io::save_stl(&substitute, "palm", &dir.path().join("palm.stl")).unwrap();

        let mut request = small_request(Hand::Right);
        request.asset_dir = Some(dir.path().to_path_buf());
        let assembly = compose(&request).unwrap();
        assert_eq!(assembly.part(PartKind::Palm).unwrap().triangle_count(), 12);

        let (min, max) = assembly.part(PartKind::Palm).unwrap().bounding_box();
        assert_eq!(max - min, DVec3::new(2.0, 2.0, 2.0));
    }
}
