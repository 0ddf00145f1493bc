//! # STL Serialization
//!
//! Deterministic ASCII STL writer for generated parts and a loader for
//! external part assets that accepts both binary and ASCII STL.
//!
//! The writer formats every number with a fixed six-digit scientific
//! notation so identical meshes always produce byte-identical files.

use crate::error::{IoError, IoResult};
use config::constants::{STL_HEADER_BYTES, STL_TRIANGLE_RECORD_BYTES};
use glam::DVec3;
use hand_mesh::{Mesh, Triangle};
use std::path::Path;

// ==============================================================================
// WRITER
// ==============================================================================

/// Formats a number as C-style `%.6e`: six fractional digits and a
/// signed, zero-padded, at-least-two-digit exponent.
fn fmt_e(value: f64) -> String {
    let formatted = format!("{value:.6e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(rest) => ('-', rest),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        // `{:e}` always yields an exponent; kept for totality.
        None => formatted,
    }
}

/// Serializes a mesh as ASCII STL.
///
/// Normals are derived from the winding; degenerate triangles report a
/// zero normal. Triangle order is preserved, so equal meshes serialize
/// to byte-identical output.
pub fn write_stl(mesh: &Mesh, name: &str) -> Vec<u8> {
    let mut out = String::with_capacity(mesh.triangle_count() * 256 + 64);
    out.push_str(&format!("solid {name}\n"));
    for tri in mesh.triangles() {
        let n = tri.normal();
        out.push_str(&format!(
            "  facet normal {} {} {}\n",
            fmt_e(n.x),
            fmt_e(n.y),
            fmt_e(n.z)
        ));
        out.push_str("    outer loop\n");
        for v in [tri.a, tri.b, tri.c] {
            out.push_str(&format!(
                "      vertex {} {} {}\n",
                fmt_e(v.x),
                fmt_e(v.y),
                fmt_e(v.z)
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }
    out.push_str(&format!("endsolid {name}\n"));
    out.into_bytes()
}

/// Serializes a mesh as ASCII STL and writes it to `path`.
///
/// # Errors
///
/// Returns [`IoError::Io`] when the file cannot be written.
pub fn save_stl(mesh: &Mesh, name: &str, path: &Path) -> IoResult<()> {
    std::fs::write(path, write_stl(mesh, name))?;
    Ok(())
}

// ==============================================================================
// LOADER
// ==============================================================================

/// Loads a mesh from a binary or ASCII STL file.
///
/// The file is binary when its size is exactly
/// `84 + 50 * count` bytes for the little-endian face count stored at
/// offset 80 and its head is not the ASCII `solid` keyword. Everything
/// else is parsed as ASCII by scanning `vertex x y z` lines and
/// grouping them in threes; facet normals in the file are ignored and
/// re-derived from the winding on demand.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] when `path` does not exist
/// - [`IoError::InvalidFaceCount`] for a binary file whose payload size
///   disagrees with its declared face count
/// - [`IoError::InvalidContent`] for malformed ASCII content
/// - [`IoError::Io`] for other filesystem failures
pub fn load_stl(path: &Path) -> IoResult<Mesh> {
    let data = std::fs::read(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => IoError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IoError::Io(err),
    })?;

    let head_is_solid = data.len() >= 5 && data[..5].eq_ignore_ascii_case(b"solid");
    if !head_is_solid && data.len() >= STL_HEADER_BYTES + 4 {
        let mut count_bytes = [0u8; 4];
        count_bytes.copy_from_slice(&data[STL_HEADER_BYTES..STL_HEADER_BYTES + 4]);
        let count = u32::from_le_bytes(count_bytes) as usize;

        let expected_len = STL_HEADER_BYTES + 4 + count * STL_TRIANGLE_RECORD_BYTES;
        if data.len() == expected_len {
            return parse_binary(&data, count);
        }
        return Err(IoError::InvalidFaceCount {
            expected: count,
            got: (data.len() - STL_HEADER_BYTES - 4) / STL_TRIANGLE_RECORD_BYTES,
        });
    }

    parse_ascii(&data)
}

fn read_f32(data: &[u8], pos: &mut usize) -> IoResult<f32> {
    let end = *pos + 4;
    let bytes = data
        .get(*pos..end)
        .ok_or(IoError::UnexpectedEof { position: *pos })?;
    let mut buf = [0u8; 4];
    buf.copy_from_slice(bytes);
    *pos = end;
    Ok(f32::from_le_bytes(buf))
}

fn parse_binary(data: &[u8], count: usize) -> IoResult<Mesh> {
    let mut mesh = Mesh::with_capacity(count);
    let mut pos = STL_HEADER_BYTES + 4;
    for _ in 0..count {
        // Stored normal is ignored; windings are authoritative.
        pos += 12;
        let mut verts = [DVec3::ZERO; 3];
        for vert in &mut verts {
            let x = read_f32(data, &mut pos)?;
            let y = read_f32(data, &mut pos)?;
            let z = read_f32(data, &mut pos)?;
            *vert = DVec3::new(f64::from(x), f64::from(y), f64::from(z));
        }
        // Attribute byte count
        pos += 2;
        mesh.push(Triangle::new(verts[0], verts[1], verts[2]));
    }
    Ok(mesh)
}

fn parse_ascii(data: &[u8]) -> IoResult<Mesh> {
    let text = String::from_utf8_lossy(data);
    let mut verts: Vec<DVec3> = Vec::new();

    for line in text.lines() {
        let Some(rest) = line.trim_start().strip_prefix("vertex") else {
            continue;
        };
        let coords: Vec<f64> = rest
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| IoError::invalid_content(format!("malformed vertex line: {line}")))?;
        if coords.len() != 3 {
            return Err(IoError::invalid_content(format!(
                "expected 3 coordinates, got {}: {line}",
                coords.len()
            )));
        }
        verts.push(DVec3::new(coords[0], coords[1], coords[2]));
    }

    if verts.len() % 3 != 0 {
        return Err(IoError::invalid_content(format!(
            "vertex count {} is not a multiple of three",
            verts.len()
        )));
    }

    Ok(verts
        .chunks_exact(3)
        .map(|v| Triangle::new(v[0], v[1], v[2]))
        .collect())
}
