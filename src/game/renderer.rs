/// Paints composed draw commands onto a surface, resolving asset handles.
///
/// Commands whose asset failed to load are skipped; without a font no text
/// is drawn at all.
use crate::core::surface::{Surface, TextStyle};
use crate::game::assets::AssetRegistry;
use crate::game::hud::{DrawCmd, Image};

pub fn paint(cmds: &[DrawCmd], assets: &AssetRegistry, surface: &mut impl Surface) {
    for cmd in cmds {
        match cmd {
            DrawCmd::Clear(color) => surface.clear(*color),
            DrawCmd::Fill { rect, color } => surface.fill_rect(*rect, *color),
            DrawCmd::Image { image, src, dst } => {
                let raster = match image {
                    Image::Sheet(set) => assets.sheet(*set).map(|s| &s.raster),
                    Image::Heart { full } => assets.heart(*full),
                };
                if let Some(raster) = raster {
                    surface.draw(raster, *src, *dst);
                }
            }
            DrawCmd::Text {
                text,
                at,
                color,
                wrap,
            } => {
                let Some(font) = assets.font() else {
                    continue;
                };
                let style = TextStyle {
                    color: *color,
                    bold: font.bold,
                };
                match wrap {
                    Some(width) => surface.draw_text_wrapped(text, *at, *width, style),
                    None => surface.draw_text(text, *at, style),
                }
            }
        }
    }
}
