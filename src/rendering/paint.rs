/// Colours and the ordered display list for the book glyph

use image::Rgba;

use super::layout::{BookLayout, Rect};

/// Front cover
pub const COVER_BLUE: Rgba<u8> = Rgba([74, 144, 226, 255]);
/// Spine, a darker shade of the cover
pub const SPINE_BLUE: Rgba<u8> = Rgba([54, 124, 206, 255]);
/// Page edge and title lines
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Untouched canvas
pub const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    SolidRect {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        rgba: Rgba<u8>,
    },
}

impl PaintCommand {
    pub fn fill(rect: Rect, rgba: Rgba<u8>) -> Self {
        PaintCommand::SolidRect {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            rgba,
        }
    }
}

/// Emit the glyph back to front: cover, spine, page edge, then both title
/// lines. Later commands occlude earlier ones.
pub fn paint_book(layout: &BookLayout) -> Vec<PaintCommand> {
    vec![
        PaintCommand::fill(layout.cover, COVER_BLUE),
        PaintCommand::fill(layout.spine, SPINE_BLUE),
        PaintCommand::fill(layout.page_edge, WHITE),
        PaintCommand::fill(layout.title_bars[0], WHITE),
        PaintCommand::fill(layout.title_bars[1], WHITE),
    ]
}
