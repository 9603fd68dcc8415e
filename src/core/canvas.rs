/// Terminal implementation of [`Surface`].
///
/// The logical canvas is sampled onto a grid of half-block "pixels": every
/// terminal cell carries two of them, top in the foreground colour of `▀` and
/// bottom in the background. Text is laid over the pixels after they are
/// written, the same order the HUD draws in.
use std::ops::Range;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::core::raster::Raster;
use crate::core::surface::{Point, PxRect, Rgb, Surface, TextStyle};

const HALF_BLOCK: &str = "▀";

#[derive(Debug, Clone)]
struct TextOp {
    col: u16,
    row: u16,
    wrap_cols: Option<u16>,
    text: String,
    style: TextStyle,
}

#[derive(Debug, Clone)]
pub struct PixelCanvas {
    logical_w: i32,
    logical_h: i32,
    cols: u16,
    rows: u16,
    pixels: Vec<Rgb>,
    texts: Vec<TextOp>,
}

impl PixelCanvas {
    pub fn new(logical_w: i32, logical_h: i32, cols: u16, rows: u16) -> Self {
        let mut canvas = Self {
            logical_w: logical_w.max(1),
            logical_h: logical_h.max(1),
            cols: 0,
            rows: 0,
            pixels: Vec::new(),
            texts: Vec::new(),
        };
        canvas.resize(cols, rows);
        canvas
    }

    /// Match the terminal area. Drops the current contents if the size changed.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if cols == self.cols && rows == self.rows {
            return;
        }
        self.cols = cols;
        self.rows = rows;
        self.pixels = vec![Rgb::BLACK; self.px_w() * self.px_h()];
        self.texts.clear();
    }

    fn px_w(&self) -> usize {
        self.cols as usize
    }

    fn px_h(&self) -> usize {
        self.rows as usize * 2
    }

    #[cfg(test)]
    fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        (x < self.px_w() && y < self.px_h()).then(|| self.pixels[y * self.px_w() + x])
    }

    /// Grid pixels whose centres fall in `[start, start + len)` logical units.
    fn span(start: i32, len: u32, logical: i32, count: usize) -> Range<usize> {
        let scale = count as f32 / logical as f32;
        let edge = |v: f32| ((v * scale - 0.5).ceil().max(0.0) as usize).min(count);
        edge(start as f32)..edge(start as f32 + len as f32)
    }

    fn center(&self, x: usize, y: usize) -> (f32, f32) {
        (
            (x as f32 + 0.5) * self.logical_w as f32 / self.px_w() as f32,
            (y as f32 + 0.5) * self.logical_h as f32 / self.px_h() as f32,
        )
    }

    fn cell_at(&self, at: Point) -> Option<(u16, u16)> {
        if at.x < 0 || at.y < 0 {
            return None;
        }
        let col = (at.x as i64 * self.cols as i64 / self.logical_w as i64) as u16;
        let row = (at.y as i64 * self.rows as i64 / self.logical_h as i64) as u16;
        (col < self.cols && row < self.rows).then_some((col, row))
    }
}

impl Surface for PixelCanvas {
    fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
        self.texts.clear();
    }

    fn fill_rect(&mut self, rect: PxRect, color: Rgb) {
        let xs = Self::span(rect.x, rect.w, self.logical_w, self.px_w());
        let ys = Self::span(rect.y, rect.h, self.logical_h, self.px_h());
        let width = self.px_w();
        for y in ys {
            self.pixels[y * width + xs.start..y * width + xs.end].fill(color);
        }
    }

    fn draw(&mut self, raster: &Raster, src: Option<PxRect>, dst: PxRect) {
        if dst.w == 0 || dst.h == 0 {
            return;
        }
        let src = src.unwrap_or(PxRect::new(0, 0, raster.width(), raster.height()));
        let xs = Self::span(dst.x, dst.w, self.logical_w, self.px_w());
        let ys = Self::span(dst.y, dst.h, self.logical_h, self.px_h());
        let width = self.px_w();

        for y in ys {
            for x in xs.clone() {
                let (lx, ly) = self.center(x, y);
                let u = src.x as f32 + (lx - dst.x as f32) * src.w as f32 / dst.w as f32;
                let v = src.y as f32 + (ly - dst.y as f32) * src.h as f32 / dst.h as f32;
                if let Some(color) = raster.pixel(u.floor() as i64, v.floor() as i64) {
                    self.pixels[y * width + x] = color;
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle) {
        if let Some((col, row)) = self.cell_at(at) {
            self.texts.push(TextOp {
                col,
                row,
                wrap_cols: None,
                text: text.to_string(),
                style,
            });
        }
    }

    fn draw_text_wrapped(&mut self, text: &str, at: Point, wrap_width: u32, style: TextStyle) {
        if let Some((col, row)) = self.cell_at(at) {
            let cols = (wrap_width as i64 * self.cols as i64 / self.logical_w as i64).max(1);
            self.texts.push(TextOp {
                col,
                row,
                wrap_cols: Some(cols.min(u16::MAX as i64) as u16),
                text: text.to_string(),
                style,
            });
        }
    }
}

/// Greedy word wrap. Words longer than `width` are split.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        if !current.is_empty() && current.chars().count() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn text_style(style: TextStyle) -> Style {
    let s = Style::default().fg(style.color.into());
    if style.bold {
        s.add_modifier(Modifier::BOLD)
    } else {
        s
    }
}

impl Widget for &PixelCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = self.px_w();
        for row in 0..self.rows.min(area.height) {
            for col in 0..self.cols.min(area.width) {
                let top = self.pixels[(row as usize * 2) * width + col as usize];
                let bottom = self.pixels[(row as usize * 2 + 1) * width + col as usize];
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(HALF_BLOCK).set_fg(top.into()).set_bg(bottom.into());
                }
            }
        }

        for op in &self.texts {
            if op.col >= area.width || op.row >= area.height {
                continue;
            }
            let x = area.x + op.col;
            let y = area.y + op.row;
            let style = text_style(op.style);
            match op.wrap_cols {
                None => {
                    let max = (area.width - op.col) as usize;
                    buf.set_stringn(x, y, &op.text, max, style);
                }
                Some(cols) => {
                    let lines = wrap_words(&op.text, cols as usize);
                    let max = (area.width - op.col) as usize;
                    for (i, line) in lines.iter().enumerate() {
                        let Some(row) = y.checked_add(i as u16) else {
                            break;
                        };
                        if row >= area.y + area.height {
                            break;
                        }
                        buf.set_stringn(x, row, line, max, style);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use std::path::Path;

    const RED: Rgb = Rgb(220, 40, 40);

    fn white() -> TextStyle {
        TextStyle {
            color: Rgb::WHITE,
            bold: false,
        }
    }

    #[test]
    fn fill_covers_matching_pixels_only() {
        // 8x4 cells -> 8x8 pixel grid, 100 logical units per pixel.
        let mut c = PixelCanvas::new(800, 800, 8, 4);
        c.fill_rect(PxRect::new(400, 0, 400, 200), RED);
        assert_eq!(c.pixel(3, 0), Some(Rgb::BLACK));
        assert_eq!(c.pixel(4, 0), Some(RED));
        assert_eq!(c.pixel(7, 1), Some(RED));
        assert_eq!(c.pixel(7, 2), Some(Rgb::BLACK));
    }

    #[test]
    fn draw_samples_source_rect_and_skips_transparency() {
        let sheet = Raster::parse("kr\n.r", Path::new("sheet")).unwrap();
        let mut c = PixelCanvas::new(4, 4, 4, 2);
        c.clear(Rgb::WHITE);
        // Second column of the sheet, stretched over the left half.
        c.draw(&sheet, Some(PxRect::new(1, 0, 1, 2)), PxRect::new(0, 0, 2, 4));
        assert_eq!(c.pixel(0, 0), Some(RED));
        assert_eq!(c.pixel(1, 3), Some(RED));
        assert_eq!(c.pixel(2, 0), Some(Rgb::WHITE));

        // Whole sheet: the transparent pixel keeps the background.
        c.clear(Rgb::WHITE);
        c.draw(&sheet, None, PxRect::new(0, 0, 4, 4));
        assert_eq!(c.pixel(0, 0), Some(Rgb::BLACK));
        assert_eq!(c.pixel(0, 3), Some(Rgb::WHITE));
        assert_eq!(c.pixel(3, 3), Some(RED));
    }

    #[test]
    fn renders_half_blocks_then_text() {
        let mut c = PixelCanvas::new(80, 40, 8, 2);
        c.clear(Rgb::BLACK);
        c.fill_rect(PxRect::new(0, 10, 80, 10), RED);
        c.draw_text("Hi", Point::new(20, 20), white());

        let area = Rect::new(0, 0, 8, 2);
        let mut buf = Buffer::empty(area);
        (&c).render(area, &mut buf);

        let cell = &buf[(0, 0)];
        assert_eq!(cell.symbol(), HALF_BLOCK);
        assert_eq!(cell.fg, Color::Rgb(0, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(220, 40, 40));
        assert_eq!(buf[(2, 1)].symbol(), "H");
        assert_eq!(buf[(3, 1)].symbol(), "i");
        assert_eq!(buf[(3, 1)].fg, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn wrapped_text_breaks_within_width() {
        let mut c = PixelCanvas::new(100, 100, 10, 10);
        c.clear(Rgb::BLACK);
        c.draw_text_wrapped("aaa bbb", Point::new(0, 0), 40, white());

        let area = Rect::new(0, 0, 10, 10);
        let mut buf = Buffer::empty(area);
        (&c).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "a");
        assert_eq!(buf[(0, 1)].symbol(), "b");
    }

    #[test]
    fn wrap_words_splits_greedily() {
        assert_eq!(wrap_words("a bb ccc dd", 5), vec!["a bb", "ccc", "dd"]);
        assert_eq!(wrap_words("abcdefg", 3), vec!["abc", "def", "g"]);
        assert!(wrap_words("   ", 4).is_empty());
    }

    #[test]
    fn wrapped_text_leaves_pixels_below_untouched() {
        let mut c = PixelCanvas::new(100, 100, 10, 10);
        c.clear(Rgb(26, 26, 26));
        c.draw_text_wrapped("aaa bbb", Point::new(0, 0), 40, white());

        let area = Rect::new(0, 0, 10, 10);
        let mut buf = Buffer::empty(area);
        (&c).render(area, &mut buf);
        assert_eq!(buf[(0, 2)].symbol(), HALF_BLOCK);
        assert_eq!(buf[(0, 2)].fg, Color::Rgb(26, 26, 26));
    }

    #[test]
    fn text_outside_canvas_is_dropped() {
        let mut c = PixelCanvas::new(100, 100, 10, 10);
        c.draw_text("x", Point::new(-5, 0), white());
        c.draw_text("x", Point::new(100, 0), white());
        assert!(c.texts.is_empty());
    }
}
