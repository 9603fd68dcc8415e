/// Text pixmaps: the image format for sprite sheets and icons.
///
/// One line per pixel row, one character per pixel. `.` and space are
/// transparent, every other character must be in the palette.
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::surface::Rgb;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} contains no pixels")]
    Empty { path: PathBuf },
    #[error("{path}:{line}: unknown palette character {ch:?}")]
    UnknownColor { path: PathBuf, line: usize, ch: char },
}

fn palette(ch: char) -> Option<Option<Rgb>> {
    let color = match ch {
        '.' | ' ' => return Some(None),
        'k' => Rgb(0, 0, 0),
        'w' => Rgb(255, 255, 255),
        'd' => Rgb(60, 60, 60),
        'g' => Rgb(140, 140, 140),
        'b' => Rgb(139, 90, 43),
        't' => Rgb(210, 170, 110),
        'p' => Rgb(255, 150, 170),
        'r' => Rgb(220, 40, 40),
        'y' => Rgb(240, 210, 60),
        'o' => Rgb(235, 130, 40),
        _ => return None,
    };
    Some(Some(color))
}

/// A decoded image held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Option<Rgb>>,
}

impl Raster {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RasterError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| RasterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Decode pixmap text. `origin` is only used in error messages.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, RasterError> {
        let rows: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        // Trailing blank lines are not pixel rows.
        let used = rows.iter().rposition(|r| !r.is_empty()).map_or(0, |i| i + 1);
        let rows = &rows[..used];

        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        if width == 0 {
            return Err(RasterError::Empty {
                path: origin.to_path_buf(),
            });
        }

        let mut pixels = Vec::with_capacity(width * rows.len());
        for (line, row) in rows.iter().enumerate() {
            let mut n = 0;
            for ch in row.chars() {
                let px = palette(ch).ok_or_else(|| RasterError::UnknownColor {
                    path: origin.to_path_buf(),
                    line: line + 1,
                    ch,
                })?;
                pixels.push(px);
                n += 1;
            }
            pixels.extend(std::iter::repeat(None).take(width - n));
        }

        Ok(Self {
            width: width as u32,
            height: rows.len() as u32,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (x, y); `None` when transparent or out of bounds.
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgb> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        self.pixels[(y as u32 * self.width + x as u32) as usize]
    }
}
