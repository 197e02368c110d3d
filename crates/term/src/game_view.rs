//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{decimal_len, CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Session facts shown next to the board that are not part of the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusView {
    pub best_score: Option<u64>,
    pub seed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Tile size used when the preferred one does not fit the viewport.
const COMPACT_TILE: (u16, u16) = (5, 1);

/// Minimum free columns right of the board before the side panel is drawn.
const PANEL_MIN_WIDTH: u16 = 12;

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_TILE_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square with typical terminal glyphs.
        Self {
            tile_w: 7,
            tile_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    tile_w: u16,
    tile_h: u16,
}

impl Layout {
    fn tile_origin(&self, row: usize, col: usize) -> (u16, u16) {
        let step = |i: usize, len: u16| u16::try_from(i).unwrap_or(u16::MAX).saturating_mul(len + 1);
        let x = (self.start_x + 1).saturating_add(step(col, self.tile_w));
        let y = (self.start_y + 1).saturating_add(step(row, self.tile_h));
        (x, y)
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully repainted.
    pub fn render_into_with_status(
        &self,
        snap: &GameSnapshot,
        status: Option<&StatusView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(snap.dimension, viewport);

        fb.fill_rect(
            layout.start_x,
            layout.start_y,
            layout.frame_w,
            layout.frame_h,
            ' ',
            CellStyle::new(DARK_TEXT, BOARD_BG),
        );
        draw_border(fb, &layout);

        for row in 0..snap.dimension {
            for col in 0..snap.dimension {
                self.draw_tile(fb, &layout, row, col, snap.value(row, col));
            }
        }

        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if viewport.width.saturating_sub(panel_x) >= PANEL_MIN_WIDTH {
            draw_side_panel(fb, snap, status, viewport, panel_x, layout.start_y);
        } else if layout.start_y > 0 {
            // No room on the right: keep at least the score visible above the board.
            let label = CellStyle::default().bold();
            let x = fb.put_str(layout.start_x, layout.start_y - 1, "SCORE ", label);
            fb.put_u64(x, layout.start_y - 1, snap.score, CellStyle::default());
        }

        if snap.game_over {
            draw_overlay_text(fb, &layout, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        self.render_with_status(snap, None, viewport)
    }

    pub fn render_with_status(
        &self,
        snap: &GameSnapshot,
        status: Option<&StatusView>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_status(snap, status, viewport, &mut fb);
        fb
    }

    /// Pick tile metrics that fit the viewport and position the frame.
    fn layout(&self, dimension: usize, viewport: Viewport) -> Layout {
        let d = u16::try_from(dimension).unwrap_or(u16::MAX);
        let frame = |(tw, th): (u16, u16)| {
            (
                d.saturating_mul(tw + 1).saturating_add(1),
                d.saturating_mul(th + 1).saturating_add(1),
            )
        };

        let preferred = (self.tile_w, self.tile_h);
        let (fw, fh) = frame(preferred);
        let (tile_w, tile_h) = if fw <= viewport.width && fh <= viewport.height {
            preferred
        } else {
            COMPACT_TILE
        };
        let (frame_w, frame_h) = frame((tile_w, tile_h));

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        Layout {
            start_x,
            start_y,
            frame_w,
            frame_h,
            tile_w,
            tile_h,
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, layout: &Layout, row: usize, col: usize, value: u64) {
        let (x, y) = layout.tile_origin(row, col);
        let style = tile_style(value);
        fb.fill_rect(x, y, layout.tile_w, layout.tile_h, ' ', style);
        if value == 0 {
            return;
        }

        let label_y = y + layout.tile_h / 2;
        let (shown, suffix) = tile_label(value, layout.tile_w);
        let label_w = decimal_len(shown) + u16::from(suffix.is_some());
        let label_x = x + layout.tile_w.saturating_sub(label_w) / 2;
        let end = fb.put_u64(label_x, label_y, shown, style);
        if let Some(ch) = suffix {
            fb.put_char(end, label_y, ch, style);
        }
    }
}

/// Number to print for a tile and an optional unit suffix.
///
/// Values too wide for the tile are shown in multiples of 1024 ("64k").
fn tile_label(value: u64, tile_w: u16) -> (u64, Option<char>) {
    if decimal_len(value) <= tile_w || value < 1024 {
        (value, None)
    } else {
        (value / 1024, Some('k'))
    }
}

/// Colors per tile value, following the familiar 2048 palette.
pub fn tile_style(value: u64) -> CellStyle {
    let (bg, fg) = match value {
        0 => (EMPTY_TILE_BG, EMPTY_TILE_BG),
        2 => (Rgb::new(238, 228, 218), DARK_TEXT),
        4 => (Rgb::new(237, 224, 200), DARK_TEXT),
        8 => (Rgb::new(242, 177, 121), LIGHT_TEXT),
        16 => (Rgb::new(245, 149, 99), LIGHT_TEXT),
        32 => (Rgb::new(246, 124, 95), LIGHT_TEXT),
        64 => (Rgb::new(246, 94, 59), LIGHT_TEXT),
        128 => (Rgb::new(237, 207, 114), LIGHT_TEXT),
        256 => (Rgb::new(237, 204, 97), LIGHT_TEXT),
        512 => (Rgb::new(237, 200, 80), LIGHT_TEXT),
        1024 => (Rgb::new(237, 197, 63), LIGHT_TEXT),
        2048 => (Rgb::new(237, 194, 46), LIGHT_TEXT),
        _ => (Rgb::new(60, 58, 50), LIGHT_TEXT),
    };
    CellStyle::new(fg, bg).bold()
}

fn draw_border(fb: &mut FrameBuffer, layout: &Layout) {
    let (x, y, w, h) = (layout.start_x, layout.start_y, layout.frame_w, layout.frame_h);
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(x + w - 1, y, '┐', BORDER);
    fb.put_char(x, y + h - 1, '└', BORDER);
    fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', BORDER);
        fb.put_char(x + dx, y + h - 1, '─', BORDER);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', BORDER);
        fb.put_char(x + w - 1, y + dy, '│', BORDER);
    }
}

fn draw_side_panel(
    fb: &mut FrameBuffer,
    snap: &GameSnapshot,
    status: Option<&StatusView>,
    viewport: Viewport,
    panel_x: u16,
    start_y: u16,
) {
    let label = CellStyle::default().bold();
    let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
    let dim = value.dim();

    let mut y = start_y;
    let mut field = |fb: &mut FrameBuffer, name: &str, n: Option<u64>| {
        if y.saturating_add(1) >= viewport.height {
            return;
        }
        fb.put_str(panel_x, y, name, label);
        match n {
            Some(n) => {
                fb.put_u64(panel_x, y + 1, n, value);
            }
            None => {
                fb.put_str(panel_x, y + 1, "-", value);
            }
        }
        y = y.saturating_add(3);
    };

    field(fb, "SCORE", Some(snap.score));
    field(fb, "BEST", status.and_then(|s| s.best_score));
    field(fb, "MOVES", Some(u64::from(snap.moves)));
    field(fb, "MAX TILE", Some(snap.max_tile));
    if let Some(st) = status {
        field(fb, "SEED", Some(st.seed));
    }

    let help_y = viewport.height.saturating_sub(2);
    if help_y > start_y {
        fb.put_str(panel_x, help_y, "arrows/hjkl/wasd", dim);
        fb.put_str(panel_x, help_y + 1, "q/esc quit", dim);
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, layout: &Layout, text: &str) {
    let mid_y = layout.start_y.saturating_add(layout.frame_h / 2);
    let text_w = text.chars().count() as u16;
    let x = layout
        .start_x
        .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    fb.put_str(x, mid_y, text, style);
}
