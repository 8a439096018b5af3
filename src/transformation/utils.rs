//! Low-level utilities for mesh generation.
//!
//! The generators of this crate are `z`-up: circles lie in planes of constant `z` and
//! angles are measured counter-clockwise around the `z` axis, starting from the `x` axis.

use crate::math::{Point, Point2, Real, Vector};
use crate::shape::{PolyFace, PolyMesh};

/// Pushes a discretized circle of radius `radius` at height `z`, starting at angle 0.
#[inline]
pub fn push_circle(radius: Real, nsubdiv: u32, dtheta: Real, z: Real, out: &mut Vec<Point<Real>>) {
    for i in 0..nsubdiv {
        let (sin, cos) = (i as Real * dtheta).sin_cos();
        out.push(Point::new(cos * radius, sin * radius, z));
    }
}

/// Pushes the unit normals of a band of revolution: `radial` along the circle direction
/// and `axial` along `z`.
#[inline]
pub fn push_circle_normals(
    radial: Real,
    axial: Real,
    nsubdiv: u32,
    dtheta: Real,
    out: &mut Vec<Vector<Real>>,
) {
    for i in 0..nsubdiv {
        let (sin, cos) = (i as Real * dtheta).sin_cos();
        out.push(Vector::new(cos * radial, sin * radial, axial));
    }
}

/// Pushes `nsubdiv + 1` texture coordinates along the horizontal line `t`. The first and
/// last ones are on the texture seam (`s = 0` and `s = 1`).
#[inline]
pub fn push_uv_line(t: Real, nsubdiv: u32, out: &mut Vec<Point2<Real>>) {
    for i in 0..=nsubdiv {
        out.push(Point2::new(i as Real / nsubdiv as Real, t));
    }
}

/// Pushes the quads joining two circles of `nsubdiv` vertices each, where `upper` is above
/// `lower`. The quads are counter-clockwise when seen from outside.
///
/// The `base_*_uvs` lines must have `nsubdiv + 1` texture coordinates (see [`push_uv_line`]).
#[inline]
pub fn push_ring_quads(
    base_upper: u32,
    base_lower: u32,
    base_upper_uvs: u32,
    base_lower_uvs: u32,
    base_upper_normals: u32,
    base_lower_normals: u32,
    nsubdiv: u32,
    out: &mut Vec<PolyFace>,
) {
    for j in 0..nsubdiv {
        let jn = (j + 1) % nsubdiv;
        out.push(PolyFace::quad(
            [
                base_upper + j,
                base_lower + j,
                base_lower + jn,
                base_upper + jn,
            ],
            [
                base_upper_uvs + j,
                base_lower_uvs + j,
                base_lower_uvs + j + 1,
                base_upper_uvs + j + 1,
            ],
            [
                base_upper_normals + j,
                base_lower_normals + j,
                base_lower_normals + jn,
                base_upper_normals + jn,
            ],
        ));
    }
}

/// Reverses the winding of all the faces of a mesh.
#[inline]
pub fn reverse_clockwising(faces: &mut [PolyFace]) {
    for face in faces {
        face.positions.reverse();
        face.uvs.reverse();
        face.normals.reverse();
    }
}

/// One circle of a surface of revolution generated by [`revolve`].
#[derive(Copy, Clone, Debug)]
pub(crate) struct RevolutionRing {
    /// Distance to the `z` axis.
    pub radius: Real,
    /// Height of the circle.
    pub z: Real,
    /// Index (in the normal-ring list given to [`revolve`]) of the normals of this circle.
    pub normal_ring: u32,
    /// Texture `t` coordinate of this circle.
    pub t: Real,
}

/// Builds a closed surface of revolution around `z`: a north pole fan, quad bands between
/// consecutive `rings` (ordered from north to south), and a south pole fan.
///
/// `normal_rings` are `(radial, axial)` normal components, shared by every ring pointing to
/// them. Pole normals are `±z`. Pole texture coordinates are one per fan triangle, at the
/// middle of its `s` range. `rings` must not be empty.
pub(crate) fn revolve(
    nsubdiv: u32,
    north_z: Real,
    south_z: Real,
    rings: &[RevolutionRing],
    normal_rings: &[(Real, Real)],
) -> PolyMesh {
    let nrings = rings.len() as u32;
    let nnrings = normal_rings.len() as u32;
    let dtheta = core::f64::consts::TAU / nsubdiv as Real;

    let mut positions = Vec::with_capacity((nsubdiv * nrings + 2) as usize);
    let mut normals = Vec::with_capacity((nsubdiv * nnrings + 2) as usize);
    let mut uvs = Vec::with_capacity((2 * nsubdiv + (nsubdiv + 1) * nrings) as usize);
    let mut faces = Vec::with_capacity((nsubdiv * (nrings + 1)) as usize);

    // Positions.
    positions.push(Point::new(0.0, 0.0, north_z));
    for ring in rings {
        push_circle(ring.radius, nsubdiv, dtheta, ring.z, &mut positions);
    }
    positions.push(Point::new(0.0, 0.0, south_z));

    // Normals.
    normals.push(Vector::z());
    for (radial, axial) in normal_rings {
        push_circle_normals(*radial, *axial, nsubdiv, dtheta, &mut normals);
    }
    normals.push(-Vector::z());

    // Texture coordinates.
    for j in 0..nsubdiv {
        uvs.push(Point2::new((j as Real + 0.5) / nsubdiv as Real, 1.0));
    }
    for ring in rings {
        push_uv_line(ring.t, nsubdiv, &mut uvs);
    }
    for j in 0..nsubdiv {
        uvs.push(Point2::new((j as Real + 0.5) / nsubdiv as Real, 0.0));
    }

    let ring_base = |k: u32| 1 + k * nsubdiv;
    let ring_uv_base = |k: u32| nsubdiv + k * (nsubdiv + 1);
    let normal_base = |k: u32| 1 + rings[k as usize].normal_ring * nsubdiv;

    let south_pole = 1 + nrings * nsubdiv;
    let south_pole_normal = 1 + nnrings * nsubdiv;
    let south_pole_uvs = nsubdiv + nrings * (nsubdiv + 1);

    // North pole fan.
    for j in 0..nsubdiv {
        let jn = (j + 1) % nsubdiv;
        faces.push(PolyFace::triangle(
            [0, ring_base(0) + j, ring_base(0) + jn],
            [j, ring_uv_base(0) + j, ring_uv_base(0) + j + 1],
            [0, normal_base(0) + j, normal_base(0) + jn],
        ));
    }

    // Bands.
    for k in 0..nrings - 1 {
        push_ring_quads(
            ring_base(k),
            ring_base(k + 1),
            ring_uv_base(k),
            ring_uv_base(k + 1),
            normal_base(k),
            normal_base(k + 1),
            nsubdiv,
            &mut faces,
        );
    }

    // South pole fan.
    let last = nrings - 1;
    for j in 0..nsubdiv {
        let jn = (j + 1) % nsubdiv;
        faces.push(PolyFace::triangle(
            [south_pole, ring_base(last) + jn, ring_base(last) + j],
            [
                south_pole_uvs + j,
                ring_uv_base(last) + j + 1,
                ring_uv_base(last) + j,
            ],
            [
                south_pole_normal,
                normal_base(last) + jn,
                normal_base(last) + j,
            ],
        ));
    }

    PolyMesh {
        positions,
        uvs,
        normals,
        faces,
    }
}
