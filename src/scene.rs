//! Static scene description
//!
//! Everything that does not move: the oval, goal and behind posts, optional
//! post padding, football shape, light and initial camera. The renderer turns
//! this into meshes once at start-up.

use glam::Vec3;

use crate::settings::Settings;
use crate::sim::Side;

/// Convert a `0xRRGGBB` sRGB colour to linear RGBA
pub fn srgb_hex(hex: u32) -> [f32; 4] {
    fn channel(byte: u32) -> f32 {
        let c = byte as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    [
        channel((hex >> 16) & 0xff),
        channel((hex >> 8) & 0xff),
        channel(hex & 0xff),
        1.0,
    ]
}

pub const BACKGROUND: u32 = 0xd3d3d3;
pub const FIELD_GREEN: u32 = 0x228b22;
pub const POST_WHITE: u32 = 0xffffff;
pub const PADDING_NAVY: u32 = 0x1b2a6b;
pub const PLAYER_RED: u32 = 0xff0000;
pub const COMPUTER_YELLOW: u32 = 0xffff00;

/// Goal line distance from the centre (both ends)
pub const GOAL_LINE_X: f32 = 5.1;
/// Lateral position of the goal posts
pub const GOAL_POST_Z: f32 = 0.5;
/// Lateral position of the behind posts
pub const BEHIND_POST_Z: f32 = 1.5;

/// The playing oval: an extruded ellipse whose top face sits at y = 0
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub radius_x: f32,
    pub radius_z: f32,
    pub depth: f32,
    pub color: [f32; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostKind {
    Goal,
    Behind,
    Padding,
}

/// A vertical cylinder
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub kind: PostKind,
    /// Centre of the cylinder
    pub center: Vec3,
    pub radius: f32,
    pub height: f32,
    pub color: [f32; 4],
}

/// Football shape: a capsule along its local y axis
#[derive(Debug, Clone, PartialEq)]
pub struct Football {
    pub radius: f32,
    /// Length of the straight section between the caps
    pub length: f32,
    pub player_color: [f32; 4],
    pub computer_color: [f32; 4],
}

impl Football {
    pub fn color(&self, side: Side) -> [f32; 4] {
        match side {
            Side::Player => self.player_color,
            Side::Computer => self.computer_color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: [f32; 4],
    pub intensity: f32,
    /// Flat fill so faces away from the light are not black
    pub ambient: f32,
}

impl Light {
    /// Unit direction the light travels (towards the origin)
    pub fn direction(&self) -> Vec3 {
        (-self.position).normalize_or_zero()
    }
}

/// Initial camera placement
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: [f32; 4],
    pub field: Field,
    pub posts: Vec<Post>,
    pub football: Football,
    pub light: Light,
    pub camera: CameraRig,
}

impl Scene {
    pub fn build(settings: &Settings) -> Self {
        let post_color = srgb_hex(POST_WHITE);
        // Padded variant uses slightly thicker goal posts
        let goal_radius = if settings.post_padding { 0.06 } else { 0.05 };

        let mut posts = Vec::with_capacity(12);
        for x in [GOAL_LINE_X, -GOAL_LINE_X] {
            for z in [GOAL_POST_Z, -GOAL_POST_Z] {
                posts.push(Post {
                    kind: PostKind::Goal,
                    center: Vec3::new(x, 1.0, z),
                    radius: goal_radius,
                    height: 3.0,
                    color: post_color,
                });
            }
            for z in [BEHIND_POST_Z, -BEHIND_POST_Z] {
                posts.push(Post {
                    kind: PostKind::Behind,
                    center: Vec3::new(x, 1.0, z),
                    radius: 0.05,
                    height: 2.0,
                    color: post_color,
                });
            }
        }

        if settings.post_padding {
            let pads: Vec<Post> = posts
                .iter()
                .filter(|p| p.kind == PostKind::Goal)
                .map(|p| Post {
                    kind: PostKind::Padding,
                    center: Vec3::new(p.center.x, 0.4, p.center.z),
                    radius: p.radius * 2.0,
                    height: 0.8,
                    color: srgb_hex(PADDING_NAVY),
                })
                .collect();
            posts.extend(pads);
        }

        Self {
            background: srgb_hex(BACKGROUND),
            field: Field {
                radius_x: 6.0,
                radius_z: 3.5,
                depth: 0.7,
                color: srgb_hex(FIELD_GREEN),
            },
            posts,
            football: Football {
                radius: 0.1,
                length: 0.1,
                player_color: srgb_hex(PLAYER_RED),
                computer_color: srgb_hex(COMPUTER_YELLOW),
            },
            light: Light {
                position: Vec3::new(-4.0, 5.0, 10.0),
                color: srgb_hex(0xffffff),
                intensity: 1.0,
                ambient: 0.3,
            },
            camera: CameraRig {
                eye: Vec3::new(-2.0, 4.0, 10.0),
                target: Vec3::ZERO,
                fov_y_degrees: 45.0,
                near: 0.1,
                far: 100.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BEHIND_HALF_WIDTH, GOAL_HALF_WIDTH};

    #[test]
    fn test_srgb_hex() {
        assert_eq!(srgb_hex(0xffffff), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(srgb_hex(0x000000), [0.0, 0.0, 0.0, 1.0]);
        let green = srgb_hex(FIELD_GREEN);
        assert!(green[1] > green[0] && green[1] > green[2]);
        // Mid grey is darker in linear space
        assert!(srgb_hex(0x808080)[0] < 0.25);
    }

    #[test]
    fn test_posts_without_padding() {
        let scene = Scene::build(&Settings::default());
        assert_eq!(scene.posts.len(), 8);
        let goals = scene.posts.iter().filter(|p| p.kind == PostKind::Goal).count();
        assert_eq!(goals, 4);
        assert!(scene.posts.iter().all(|p| p.center.x.abs() == GOAL_LINE_X));
    }

    #[test]
    fn test_padding_variant() {
        let settings = Settings {
            post_padding: true,
            ..Settings::default()
        };
        let scene = Scene::build(&settings);
        let pads: Vec<_> = scene
            .posts
            .iter()
            .filter(|p| p.kind == PostKind::Padding)
            .collect();
        assert_eq!(pads.len(), 4);
        assert!(pads.iter().all(|p| p.radius > 0.1));
    }

    #[test]
    fn test_scoring_bands_sit_between_posts() {
        // Goal band ends inside the goal posts, behind band inside the behind posts
        assert!(GOAL_HALF_WIDTH < GOAL_POST_Z);
        assert!(BEHIND_HALF_WIDTH < BEHIND_POST_Z);
        assert!(BEHIND_HALF_WIDTH > GOAL_POST_Z);
    }

    #[test]
    fn test_light_points_at_field() {
        let scene = Scene::build(&Settings::default());
        let dir = scene.light.direction();
        assert!((dir.length() - 1.0).abs() < 1e-5);
        assert!(dir.y < 0.0);
    }
}
