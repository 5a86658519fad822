//! Data-driven gameplay balance
//!
//! Every gameplay constant of the toy lives here so variants can be tried
//! without recompiling. Defaults are the shipped scene.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Gameplay balance parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Per-frame ease factor pulling the player toward the cursor X
    pub ease_out_factor: f32,
    /// Per-frame blend factor for the facing angle
    pub aim_smoothing: f32,
    /// Player body radius; also bounds the horizontal clamp and the muzzle offset
    pub player_radius: f32,
    /// Where the player drops into the scene
    pub player_spawn: Vec2,

    // === Beams ===
    pub beam_radius: f32,
    pub beam_speed: f32,
    /// Frames of cooldown after each shot
    pub cooldown_frames: u32,

    // === Bouncy balls ===
    pub initial_ball_radius: f32,
    pub initial_ball_spawn: Vec2,
    pub initial_ball_vel: Vec2,
    /// Hits a ball absorbs before it is removed and split
    pub hit_threshold: u32,
    /// Children below this radius are never spawned; the parent just vanishes
    pub min_split_radius: f32,
    /// Horizontal speed of split children (negated for the first child)
    pub split_speed_x: f32,
    /// Base vertical speed of split children, offset by the parent's height
    pub split_base_speed_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ease_out_factor: 0.025,
            aim_smoothing: 0.15,
            player_radius: 30.0,
            player_spawn: Vec2::new(-50.0, -150.0),

            beam_radius: 5.0,
            beam_speed: 1000.0,
            cooldown_frames: 2,

            initial_ball_radius: 80.0,
            initial_ball_spawn: Vec2::new(100.0, 100.0),
            initial_ball_vel: Vec2::new(150.0, -200.0),
            hit_threshold: 10,
            min_split_radius: 10.0,
            split_speed_x: 150.0,
            split_base_speed_y: -200.0,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults.
    ///
    /// Missing fields in the file keep their default values, so a file can
    /// override a single parameter.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {path}");
                    tuning
                }
                Err(err) => {
                    log::warn!("Ignoring malformed tuning file {path}: {err}");
                    Self::default()
                }
            },
            Err(err) => {
                log::info!("No tuning file at {path} ({err}), using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_overrides_single_field() {
        let tuning: Tuning = serde_json::from_str(r#"{"hit_threshold": 3}"#).unwrap();
        assert_eq!(tuning.hit_threshold, 3);
        // Everything else keeps its default
        assert_eq!(tuning.cooldown_frames, Tuning::default().cooldown_frames);
        assert_eq!(tuning.beam_speed, Tuning::default().beam_speed);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let tuning = Tuning::load_or_default("/nonexistent/tuning.json");
        assert_eq!(tuning.hit_threshold, 10);
    }
}
