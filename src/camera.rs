//! Orbit camera
//!
//! Rotates around a fixed target on pointer drag. Pan and zoom are disabled,
//! so the distance to the target never changes.

use glam::{Mat4, Vec3};

use crate::scene::CameraRig;

/// Keep the eye above the field and short of straight down
pub const MIN_PITCH: f32 = 0.05;
pub const MAX_PITCH: f32 = 1.5;

#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    /// Angle around the y axis, 0 looking down -z
    pub yaw: f32,
    /// Elevation above the target's horizontal plane
    pub pitch: f32,
    /// Vertical field of view (radians)
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl OrbitCamera {
    pub fn from_rig(rig: &CameraRig, width: u32, height: u32) -> Self {
        let offset = rig.eye - rig.target;
        let distance = offset.length().max(f32::EPSILON);
        let mut camera = Self {
            target: rig.target,
            distance,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).clamp(-1.0, 1.0).asin(),
            fov_y: rig.fov_y_degrees.to_radians(),
            aspect: 1.0,
            near: rig.near,
            far: rig.far,
        };
        camera.set_viewport(width, height);
        camera
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.distance
    }

    /// Orbit by a pointer drag in pixels
    pub fn rotate(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.yaw -= dx * sensitivity;
        self.pitch = (self.pitch + dy * sensitivity).clamp(MIN_PITCH, MAX_PITCH);
    }

    /// Recompute aspect after a resize; zero-sized viewports are ignored
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;
    use crate::settings::Settings;

    fn camera() -> OrbitCamera {
        let scene = Scene::build(&Settings::default());
        OrbitCamera::from_rig(&scene.camera, 1600, 900)
    }

    #[test]
    fn test_eye_matches_rig() {
        let cam = camera();
        let eye = cam.eye();
        assert!((eye - Vec3::new(-2.0, 4.0, 10.0)).length() < 1e-4);
        assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotate_keeps_distance() {
        let mut cam = camera();
        cam.rotate(120.0, -40.0, 0.005);
        assert!(((cam.eye() - cam.target).length() - cam.distance).abs() < 1e-4);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut cam = camera();
        cam.rotate(0.0, 10_000.0, 0.01);
        assert_eq!(cam.pitch, MAX_PITCH);
        cam.rotate(0.0, -10_000.0, 0.01);
        assert_eq!(cam.pitch, MIN_PITCH);
    }

    #[test]
    fn test_zero_height_resize_ignored() {
        let mut cam = camera();
        let aspect = cam.aspect;
        cam.set_viewport(800, 0);
        assert_eq!(cam.aspect, aspect);
        cam.set_viewport(800, 800);
        assert_eq!(cam.aspect, 1.0);
    }

    #[test]
    fn test_target_projects_to_screen_centre() {
        let cam = camera();
        let clip = cam.view_proj() * cam.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-4);
        assert!(ndc.y.abs() < 1e-4);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}
