use glam::Vec3;

/// Unit direction for a latitude/longitude pair in degrees.
///
/// (0, 0) faces +Z, the north pole is +Y and longitude 90 is +X, so a camera
/// on the +Z axis sees north up and east to the right.
pub fn lat_lng_to_dir(lat: f32, lng: f32) -> Vec3 {
    let phi = (90.0 - lat).to_radians();
    let theta = (90.0 - lng).to_radians();
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.cos(),
        phi.sin() * theta.sin(),
    )
}

/// Great-circle angle between two unit vectors, in radians.
pub fn angular_distance(a: Vec3, b: Vec3) -> f32 {
    a.dot(b).clamp(-1.0, 1.0).acos()
}
