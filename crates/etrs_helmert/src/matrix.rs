//! Fixed-size 3-vector and 3×3 matrix arithmetic.
//!
//! Operands are plain arrays so the size-3 invariant is carried by the type.

/// A 3-vector.
pub type Vec3 = [f64; 3];

/// A row-major 3×3 matrix.
pub type Mat3 = [[f64; 3]; 3];

/// Skew-symmetric matrix of `w = [wx, wy, wz]`.
///
/// ```text
/// [[  0, -wz,  wy],
///  [ wz,   0, -wx],
///  [-wy,  wx,   0]]
/// ```
///
/// `skew_symmetric(w) · v` equals the cross product `w × v`.
pub fn skew_symmetric(w: &Vec3) -> Mat3 {
    let [wx, wy, wz] = *w;
    [[0.0, -wz, wy], [wz, 0.0, -wx], [-wy, wx, 0.0]]
}

/// Matrix-vector product `m · v`.
#[inline]
pub fn mat3_mul_vec3(m: &Mat3, v: &Vec3) -> Vec3 {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

#[inline]
pub fn vec3_add(a: &Vec3, b: &Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn vec3_scale(v: &Vec3, s: f64) -> Vec3 {
    [v[0] * s, v[1] * s, v[2] * s]
}

/// Element-wise map, used for unit conversion of parameter triples.
#[inline]
pub fn vec3_map(v: &Vec3, f: impl Fn(f64) -> f64) -> Vec3 {
    [f(v[0]), f(v[1]), f(v[2])]
}

#[inline]
pub fn is_finite3(v: &Vec3) -> bool {
    v.iter().all(|c| c.is_finite())
}
