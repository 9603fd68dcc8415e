/// Fixed game configuration.
///
/// Nothing here is read from disk or the command line; the values mirror the
/// window contract and asset layout the game ships with.
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::game::animation::AnimSet;

pub const MAX_LIVES: u8 = 6;

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub sprite: SpriteConfig,
    pub animation: AnimationConfig,
    pub assets: AssetPaths,
    /// Sleep between frames to cap CPU usage.
    pub frame_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: &'static str,
    pub width: i32,
    pub height: i32,
    pub panel_width: i32,
}

#[derive(Debug, Clone)]
pub struct SpriteConfig {
    pub frame_width: u32,
    pub frame_height: u32,
    pub scale: u32,
}

#[derive(Debug, Clone)]
pub struct AnimationConfig {
    /// Seconds per frame, indexed by `AnimSet as usize`.
    pub frame_times: [f32; AnimSet::COUNT],
    /// Seconds before rotating to the next idle/tail/run set.
    pub switch_interval: f32,
}

#[derive(Debug, Clone)]
pub struct AssetPaths {
    pub sheets: [PathBuf; AnimSet::COUNT],
    pub heart_full: PathBuf,
    pub heart_empty: PathBuf,
    pub font: PathBuf,
}

impl AssetPaths {
    /// Standard layout rooted at `root`.
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            sheets: [
                root.join("sprites/dog_idle.txt"),
                root.join("sprites/dog_tail.txt"),
                root.join("sprites/dog_run.txt"),
                root.join("sprites/dog_death.txt"),
            ],
            heart_full: root.join("ui/heart_full.txt"),
            heart_empty: root.join("ui/heart_empty.txt"),
            font: root.join("font.json"),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig {
                title: "Save the Dog - Guess Game",
                width: 800,
                height: 480,
                panel_width: 320,
            },
            sprite: SpriteConfig {
                frame_width: 64,
                frame_height: 64,
                scale: 3,
            },
            animation: AnimationConfig {
                frame_times: [0.35, 0.25, 0.25, 0.30],
                switch_interval: 2.5,
            },
            assets: AssetPaths::under("assets"),
            frame_delay: Duration::from_millis(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_window_contract() {
        let cfg = GameConfig::default();
        assert_eq!((cfg.window.width, cfg.window.height), (800, 480));
        assert_eq!(cfg.window.panel_width, 320);
        assert_eq!(cfg.sprite.frame_width * cfg.sprite.scale, 192);
        assert_eq!(
            cfg.assets.sheets[AnimSet::Death as usize],
            PathBuf::from("assets/sprites/dog_death.txt")
        );
    }
}
