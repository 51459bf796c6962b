/// Book glyph geometry, derived from the icon size with integer arithmetic only

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Build a rect from two inclusive corners. A far corner that lies before
    /// the near one yields an empty rect.
    pub fn from_corners(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        let width = if x1 >= x0 { x1 - x0 + 1 } else { 0 };
        let height = if y1 >= y0 { y1 - y0 + 1 } else { 0 };
        Rect { x: x0, y: y0, width, height }
    }

    /// Exclusive right edge
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// The five rectangles making up the book glyph for one icon size.
///
/// Offsets are only guaranteed to stay on the canvas for the shipped sizes
/// (16, 48 and 128). Below 8 px the margin truncates to zero and the cover
/// touches the far canvas edge; the rasterizer clips whatever falls outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookLayout {
    pub size: u32,
    pub cover: Rect,
    pub spine: Rect,
    pub page_edge: Rect,
    /// Long title line first, shorter one below it
    pub title_bars: [Rect; 2],
}

impl BookLayout {
    pub fn new(size: u32) -> Self {
        let margin = size / 8;
        let book_width = size.saturating_sub(2 * margin);
        // floor(book_width * 0.8) without going through floats
        let book_height = book_width * 4 / 5;

        let x = margin;
        let y = (size - book_height) / 2;
        let right = x + book_width;
        let bottom = y + book_height;

        let cover = Rect::from_corners(x, y, right, bottom);

        let spine_width = size / 20;
        let spine = Rect::from_corners(x, y, x + spine_width, bottom);

        let page_width = size / 30;
        let page_inset = size / 10;
        let page_x = right.saturating_sub(page_width);
        let page_edge = Rect::from_corners(
            page_x,
            y + page_inset,
            page_x + page_width,
            bottom.saturating_sub(page_inset),
        );

        let line_height = size / 40;
        let line_top = y + size / 4;
        let line_spacing = size / 15;
        let indent = size / 6;
        let title = Rect::from_corners(
            x + indent,
            line_top,
            right.saturating_sub(indent),
            line_top + line_height,
        );
        let second_top = line_top + line_spacing;
        let subtitle = Rect::from_corners(
            x + indent,
            second_top,
            right.saturating_sub(size / 3),
            second_top + line_height,
        );

        BookLayout {
            size,
            cover,
            spine,
            page_edge,
            title_bars: [title, subtitle],
        }
    }

    /// Whether every rect lies fully on the canvas
    pub fn fits_canvas(&self) -> bool {
        let canvas = Rect { x: 0, y: 0, width: self.size, height: self.size };
        self.rects().iter().all(|r| canvas.contains_rect(r))
    }

    /// All rects in draw order
    pub fn rects(&self) -> [Rect; 5] {
        [
            self.cover,
            self.spine,
            self.page_edge,
            self.title_bars[0],
            self.title_bars[1],
        ]
    }

    /// Whether (px, py) is on the cover but not under any accent
    pub fn is_bare_cover(&self, px: u32, py: u32) -> bool {
        self.cover.contains(px, py)
            && !self.spine.contains(px, py)
            && !self.page_edge.contains(px, py)
            && !self.title_bars.iter().any(|r| r.contains(px, py))
    }
}
