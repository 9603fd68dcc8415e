/// Sprite sheets, heart icons and the font face, loaded once at startup.
///
/// Every asset is optional. A failed load is logged and the matching draw is
/// skipped for the rest of the run; the game itself keeps working.
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{AnimationConfig, AssetPaths, SpriteConfig};
use crate::core::raster::{Raster, RasterError};
use crate::game::animation::{AnimSet, AnimTimings, SetTiming};

#[derive(Debug, Error)]
pub enum AssetError {
    #[error(transparent)]
    Raster(#[from] RasterError),
    #[error("{path} is narrower than one {frame_width}px frame")]
    SheetTooSmall { path: PathBuf, frame_width: u32 },
    #[error("failed to read font {path}: {source}")]
    FontIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid font description {path}: {source}")]
    FontFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Text face used for every HUD string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FontFace {
    pub family: String,
    pub size: u16,
    pub bold: bool,
}

impl Default for FontFace {
    fn default() -> Self {
        Self {
            family: "monospace".to_string(),
            size: 20,
            bold: false,
        }
    }
}

impl FontFace {
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let text = std::fs::read_to_string(path).map_err(|source| AssetError::FontIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| AssetError::FontFormat {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// One animation's sheet: frames laid out left to right.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    pub raster: Raster,
    pub frames: u32,
}

impl SpriteSheet {
    pub fn load(path: &Path, frame_width: u32) -> Result<Self, AssetError> {
        let raster = Raster::load(path)?;
        if frame_width == 0 {
            return Err(AssetError::SheetTooSmall {
                path: path.to_path_buf(),
                frame_width,
            });
        }
        let frames = raster.width().div_ceil(frame_width);
        Ok(Self { raster, frames })
    }
}

#[derive(Debug, Default)]
pub struct AssetRegistry {
    sheets: [Option<SpriteSheet>; AnimSet::COUNT],
    heart_full: Option<Raster>,
    heart_empty: Option<Raster>,
    font: Option<FontFace>,
}

fn optional<T>(what: &str, path: &Path, loaded: Result<T, AssetError>) -> Option<T> {
    match loaded {
        Ok(v) => {
            debug!(what, path = %path.display(), "asset loaded");
            Some(v)
        }
        Err(e) => {
            warn!(what, path = %path.display(), error = %e, "asset unavailable, skipping");
            None
        }
    }
}

impl AssetRegistry {
    pub fn load(paths: &AssetPaths, sprite: &SpriteConfig) -> Self {
        let sheets = AnimSet::ALL.map(|set| {
            let path = &paths.sheets[set as usize];
            optional(
                set.name(),
                path,
                SpriteSheet::load(path, sprite.frame_width),
            )
        });
        let heart_full = optional(
            "heart_full",
            &paths.heart_full,
            Raster::load(&paths.heart_full).map_err(AssetError::from),
        );
        let heart_empty = optional(
            "heart_empty",
            &paths.heart_empty,
            Raster::load(&paths.heart_empty).map_err(AssetError::from),
        );
        let font = optional("font", &paths.font, FontFace::load(&paths.font));

        let registry = Self {
            sheets,
            heart_full,
            heart_empty,
            font,
        };
        info!(loaded = registry.loaded_count(), total = Self::TOTAL, "assets ready");
        registry
    }

    const TOTAL: usize = AnimSet::COUNT + 3;

    pub fn loaded_count(&self) -> usize {
        self.sheets.iter().filter(|s| s.is_some()).count()
            + usize::from(self.heart_full.is_some())
            + usize::from(self.heart_empty.is_some())
            + usize::from(self.font.is_some())
    }

    pub fn sheet(&self, set: AnimSet) -> Option<&SpriteSheet> {
        self.sheets[set as usize].as_ref()
    }

    pub fn heart(&self, full: bool) -> Option<&Raster> {
        if full {
            self.heart_full.as_ref()
        } else {
            self.heart_empty.as_ref()
        }
    }

    pub fn font(&self) -> Option<&FontFace> {
        self.font.as_ref()
    }

    /// Frame timing per set. A missing sheet animates as a single frame.
    pub fn timings(&self, anim: &AnimationConfig) -> AnimTimings {
        AnimTimings {
            sets: AnimSet::ALL.map(|set| SetTiming {
                frames: self.sheet(set).map_or(1, |s| s.frames),
                frame_time: anim.frame_times[set as usize],
            }),
            switch_interval: anim.switch_interval,
        }
    }
}

impl Drop for AssetRegistry {
    fn drop(&mut self) {
        debug!(count = self.loaded_count(), "releasing assets");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use std::fs;

    fn write(root: &Path, rel: &str, body: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn frame_count_rounds_up() {
        let dir = tempfile::tempdir().unwrap();
        // 10 pixels wide with 4px frames: 3 frames, the last one partial.
        write(dir.path(), "sheet.txt", "kkkkkkkkkk\nkkkkkkkkkk\n");
        let sheet = SpriteSheet::load(&dir.path().join("sheet.txt"), 4).unwrap();
        assert_eq!(sheet.frames, 3);
    }

    #[test]
    fn zero_frame_width_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "sheet.txt", "kk\n");
        let err = SpriteSheet::load(&dir.path().join("sheet.txt"), 0).unwrap_err();
        assert!(matches!(err, AssetError::SheetTooSmall { .. }));
    }

    #[test]
    fn font_fields_default() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "font.json", r#"{ "bold": true }"#);
        let face = FontFace::load(&dir.path().join("font.json")).unwrap();
        assert!(face.bold);
        assert_eq!(face.size, 20);

        write(dir.path(), "bad.json", "not json");
        assert!(matches!(
            FontFace::load(&dir.path().join("bad.json")),
            Err(AssetError::FontFormat { .. })
        ));
    }

    #[test]
    fn missing_assets_degrade_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = GameConfig::default();
        write(dir.path(), "sprites/dog_run.txt", &"k".repeat(256));
        write(dir.path(), "ui/heart_full.txt", "rr\nrr\n");

        let reg = AssetRegistry::load(&AssetPaths::under(dir.path()), &cfg.sprite);
        assert_eq!(reg.loaded_count(), 2);
        assert!(reg.sheet(AnimSet::Idle).is_none());
        assert_eq!(reg.sheet(AnimSet::Run).unwrap().frames, 4);
        assert!(reg.heart(true).is_some());
        assert!(reg.heart(false).is_none());
        assert!(reg.font().is_none());

        let t = reg.timings(&cfg.animation);
        assert_eq!(t.get(AnimSet::Idle).frames, 1);
        assert_eq!(t.get(AnimSet::Run).frames, 4);
        assert_eq!(t.get(AnimSet::Death).frame_time, 0.30);
        assert_eq!(t.switch_interval, 2.5);
    }
}
