//! Deterministic 3D gradient noise.
//!
//! Classic "improved" Perlin noise over Ken Perlin's reference permutation table.
//! All functions are pure: the tables are compile-time constants and no call mutates
//! anything, so identical inputs always produce bit-identical outputs.
//!
//! Two lookup variants exist:
//! - [`perlin`]: canonical form, indexes a 512-entry table (the reference table
//!   repeated twice) so hash chains never need wrapping.
//! - [`perlin_masked`]: convenience form over the 256-entry table, wrapping every
//!   hash index with `& 255`.
//!
//! Sketch-facing [`noise`] / [`noise_masked`] scale their inputs by [`NOISE_SCALE`]
//! and remap the raw `[-1, 1]` output into `[0, 1]`.

/// Input scale applied by [`noise`] and [`noise_masked`].
///
/// Sketches pass pixel-ish coordinates and frame counters; scaling by 0.01 turns
/// them into lattice-sized steps.
pub const NOISE_SCALE: f32 = 0.01;

/// Ken Perlin's reference permutation of `0..=255`.
pub const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// [`PERMUTATION`] repeated twice.
static PERM: [u8; 512] = {
    let mut out = [0u8; 512];
    let mut i = 0;
    while i < 512 {
        out[i] = PERMUTATION[i & 255];
        i += 1;
    }
    out
};

/// Noise in `[0, 1]` at `(x, y, z) * NOISE_SCALE`, canonical 512-table lookup.
///
/// Use `y = 0.0` / `z = 0.0` for 1D and 2D noise.
#[inline]
pub fn noise(x: f32, y: f32, z: f32) -> f32 {
    to_unit(perlin(x * NOISE_SCALE, y * NOISE_SCALE, z * NOISE_SCALE))
}

/// Noise in `[0, 1]` at `(x, y, z) * NOISE_SCALE`, masked 256-table lookup.
#[inline]
pub fn noise_masked(x: f32, y: f32, z: f32) -> f32 {
    to_unit(perlin_masked(x * NOISE_SCALE, y * NOISE_SCALE, z * NOISE_SCALE))
}

/// Raw gradient noise in roughly `[-1, 1]`. Zero on every integer lattice point.
pub fn perlin(x: f32, y: f32, z: f32) -> f32 {
    let (xi, xf) = split(x);
    let (yi, yf) = split(y);
    let (zi, zf) = split(z);

    let p = |i: usize| PERM[i] as usize;

    let a = p(xi) + yi;
    let aa = p(a) + zi;
    let ab = p(a + 1) + zi;
    let b = p(xi + 1) + yi;
    let ba = p(b) + zi;
    let bb = p(b + 1) + zi;

    blend(
        [
            p(aa),
            p(ba),
            p(ab),
            p(bb),
            p(aa + 1),
            p(ba + 1),
            p(ab + 1),
            p(bb + 1),
        ],
        xf,
        yf,
        zf,
    )
}

/// [`perlin`] computed against the un-duplicated table with wrapped indices.
pub fn perlin_masked(x: f32, y: f32, z: f32) -> f32 {
    let (xi, xf) = split(x);
    let (yi, yf) = split(y);
    let (zi, zf) = split(z);

    let p = |i: usize| PERMUTATION[i & 255] as usize;

    let a = p(xi) + yi;
    let aa = p(a) + zi;
    let ab = p(a + 1) + zi;
    let b = p(xi + 1) + yi;
    let ba = p(b) + zi;
    let bb = p(b + 1) + zi;

    blend(
        [
            p(aa),
            p(ba),
            p(ab),
            p(bb),
            p(aa + 1),
            p(ba + 1),
            p(ab + 1),
            p(bb + 1),
        ],
        xf,
        yf,
        zf,
    )
}

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`.
#[inline]
pub fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

#[inline]
fn to_unit(raw: f32) -> f32 {
    ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
}

/// Lattice cell (wrapped to `0..=255`) and fractional offset within it.
#[inline]
fn split(v: f32) -> (usize, f32) {
    let floor = v.floor();
    ((floor as i32 & 255) as usize, v - floor)
}

/// Dot product of the offset vector with one of 12 edge gradients picked by `hash`.
#[inline]
fn grad(hash: usize, x: f32, y: f32, z: f32) -> f32 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

/// Trilinear blend of the 8 corner contributions.
///
/// Corner hash order: `[aa, ba, ab, bb]` for `z`, then the same for `z + 1`.
#[inline]
fn blend(h: [usize; 8], x: f32, y: f32, z: f32) -> f32 {
    let u = fade(x);
    let v = fade(y);
    let w = fade(z);

    let near = lerp(
        lerp(grad(h[0], x, y, z), grad(h[1], x - 1.0, y, z), u),
        lerp(grad(h[2], x, y - 1.0, z), grad(h[3], x - 1.0, y - 1.0, z), u),
        v,
    );
    let far = lerp(
        lerp(grad(h[4], x, y, z - 1.0), grad(h[5], x - 1.0, y, z - 1.0), u),
        lerp(
            grad(h[6], x, y - 1.0, z - 1.0),
            grad(h[7], x - 1.0, y - 1.0, z - 1.0),
            u,
        ),
        v,
    );
    lerp(near, far, w)
}
