//! Tunable game configuration.
//!
//! Every field has a default from `constants`, so a partial JSON document
//! only needs the values it overrides. Call `validate` (or `from_json`,
//! which validates) before building a simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// Enemy and projectile tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub asteroid_speed: f32,
    /// Seconds between asteroid spawns, drawn from `[min, max)`.
    pub asteroid_spawn_secs: [f32; 2],
    pub asteroid_reward: u32,
    pub ufo_speed: f32,
    pub ufo_spawn_secs: [f32; 2],
    pub ufo_reward: u32,
    pub bullet_speed: f32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            asteroid_speed: ASTEROID_SPEED,
            asteroid_spawn_secs: [ASTEROID_SPAWN_MIN_SECS, ASTEROID_SPAWN_MAX_SECS],
            asteroid_reward: ASTEROID_REWARD,
            ufo_speed: UFO_SPEED,
            ufo_spawn_secs: [UFO_SPAWN_MIN_SECS, UFO_SPAWN_MAX_SECS],
            ufo_reward: UFO_REWARD,
            bullet_speed: BULLET_SPEED,
        }
    }
}

/// Player ship tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Turn rate at full stick (degrees per second).
    pub sensitivity: f32,
    pub speed: f32,
    pub fire_cooldown: f32,
    pub laser_count: u32,
    pub laser_cooldown: f32,
    pub laser_duration: f32,
    pub muzzle_offset: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            sensitivity: PLAYER_SENSITIVITY,
            speed: PLAYER_SPEED,
            fire_cooldown: PLAYER_FIRE_COOLDOWN,
            laser_count: PLAYER_LASER_COUNT,
            laser_cooldown: PLAYER_LASER_COOLDOWN,
            laser_duration: PLAYER_LASER_DURATION,
            muzzle_offset: PLAYER_MUZZLE_OFFSET,
        }
    }
}

/// Complete tunable configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub gameplay: GameplayConfig,
    pub player: PlayerConfig,
}

impl GameConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gameplay.validate()?;
        self.player.validate()
    }
}

impl GameplayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("gameplay.asteroid_speed", self.asteroid_speed)?;
        positive("gameplay.ufo_speed", self.ufo_speed)?;
        positive("gameplay.bullet_speed", self.bullet_speed)?;
        spawn_range("gameplay.asteroid_spawn_secs", self.asteroid_spawn_secs)?;
        spawn_range("gameplay.ufo_spawn_secs", self.ufo_spawn_secs)?;
        if self.asteroid_reward == 0 {
            return Err(ConfigError::ZeroReward {
                field: "gameplay.asteroid_reward",
            });
        }
        if self.ufo_reward == 0 {
            return Err(ConfigError::ZeroReward {
                field: "gameplay.ufo_reward",
            });
        }
        Ok(())
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("player.sensitivity", self.sensitivity)?;
        positive("player.speed", self.speed)?;
        positive("player.fire_cooldown", self.fire_cooldown)?;
        positive("player.laser_cooldown", self.laser_cooldown)?;
        positive("player.laser_duration", self.laser_duration)?;
        if !self.muzzle_offset.is_finite() || self.muzzle_offset < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "player.muzzle_offset",
                value: self.muzzle_offset,
            });
        }
        if self.laser_count == 0 {
            return Err(ConfigError::ZeroCount {
                field: "player.laser_count",
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn spawn_range(field: &'static str, [min, max]: [f32; 2]) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min >= 0.0 && max >= min {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange { field, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "gameplay": { "asteroid_reward": 25 } }"#).unwrap();
        assert_eq!(config.gameplay.asteroid_reward, 25);
        assert_eq!(config.gameplay.ufo_reward, UFO_REWARD);
        assert_eq!(config.player, PlayerConfig::default());
    }

    #[test]
    fn inverted_spawn_range_rejected() {
        let err = GameConfig::from_json(r#"{ "gameplay": { "ufo_spawn_secs": [4.0, 2.0] } }"#)
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidRange {
                field: "gameplay.ufo_spawn_secs",
                min: 4.0,
                max: 2.0,
            }
        );
    }

    #[test]
    fn zero_speed_rejected() {
        let mut config = GameConfig::default();
        config.gameplay.bullet_speed = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "gameplay.bullet_speed",
                ..
            })
        ));
    }

    #[test]
    fn nan_speed_rejected() {
        let mut config = GameConfig::default();
        config.player.speed = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn zero_laser_count_rejected() {
        let mut config = GameConfig::default();
        config.player.laser_count = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroCount {
                field: "player.laser_count"
            })
        );
    }
}
