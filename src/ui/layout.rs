use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Size of the text area inside the quiz box.
pub const CONTENT_WIDTH: u16 = 45;
pub const CONTENT_HEIGHT: u16 = 12;
pub const PADDING_X: u16 = 3;
pub const PADDING_Y: u16 = 1;

/// Outer size of the box, border included.
pub const BOX_WIDTH: u16 = CONTENT_WIDTH + 2 * PADDING_X + 2;
pub const BOX_HEIGHT: u16 = CONTENT_HEIGHT + 2 * PADDING_Y + 2;

/// Places the fixed-size box: centered when full-screen, top-left otherwise.
/// Shrinks to the available area on small terminals.
pub fn box_area(area: Rect, fullscreen: bool) -> Rect {
    let width = BOX_WIDTH.min(area.width);
    let height = BOX_HEIGHT.min(area.height);
    if !fullscreen {
        return Rect::new(area.x, area.y, width, height);
    }
    let left = area.x + (area.width - width) / 2;
    let top = area.y + (area.height - height) / 2;
    Rect::new(left, top, width, height)
}

pub struct BoxLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

impl BoxLayout {
    /// Splits the box's inner area into a header, body and help rows.
    pub fn new(inner: Rect, footer_height: u16) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(footer_height),
            ])
            .split(inner);

        Self {
            header: rows[0],
            body: rows[1],
            footer: rows[2],
        }
    }
}
