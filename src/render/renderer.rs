use ratatui::{
    Frame,
    buffer::{Buffer, Cell},
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::canvas::{self, Canvas, Font, Rgb};
use crate::game::{GameConfig, GameState};

/// Terminal columns used by one grid cell. Terminal glyphs are roughly twice
/// as tall as they are wide, so two columns make a square.
const COLUMNS_PER_CELL: i32 = 2;

/// A [`Canvas`] backed by a ratatui buffer region.
///
/// One grid cell of `unit` pixels maps to two columns and one row; one text
/// character is half a cell wide. Anything outside `area` is clipped.
pub struct TerminalCanvas<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    unit: i32,
}

impl<'a> TerminalCanvas<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect, unit: i32) -> Self {
        Self { buf, area, unit }
    }

    fn column(&self, x: i32) -> i32 {
        (x * COLUMNS_PER_CELL).div_euclid(self.unit)
    }

    fn row(&self, y: i32) -> i32 {
        y.div_euclid(self.unit)
    }

    fn cell_mut(&mut self, column: i32, row: i32) -> Option<&mut Cell> {
        if column < 0
            || row < 0
            || column >= i32::from(self.area.width)
            || row >= i32::from(self.area.height)
        {
            return None;
        }
        self.buf
            .cell_mut((self.area.x + column as u16, self.area.y + row as u16))
    }

    /// Paint the cells covered by a pixel rectangle; `glyph` picks the symbol
    /// from the column offset and the covered width
    fn fill(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Rgb,
        glyph: impl Fn(i32, i32) -> &'static str,
    ) {
        let left = self.column(x);
        let top = self.row(y);
        let columns = (width * COLUMNS_PER_CELL / self.unit).max(1);
        let rows = (height / self.unit).max(1);

        for row in top..top + rows {
            for offset in 0..columns {
                if let Some(cell) = self.cell_mut(left + offset, row) {
                    cell.set_symbol(glyph(offset, columns))
                        .set_fg(to_color(color));
                }
            }
        }
    }
}

impl Canvas for TerminalCanvas<'_> {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb) {
        self.fill(x, y, width, height, color, |_, _| "█");
    }

    fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb) {
        self.fill(x, y, width, height, color, |offset, columns| {
            if offset == 0 {
                "◖"
            } else if offset == columns - 1 {
                "◗"
            } else {
                "█"
            }
        });
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font: Font, color: Rgb) {
        let left = self.column(x);
        let row = self.row(y);
        let mut style = Style::default().fg(to_color(color));
        if font.bold {
            style = style.add_modifier(Modifier::BOLD);
        }

        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.cell_mut(left + i as i32, row) {
                cell.set_char(ch).set_style(style);
            }
        }
    }

    fn text_width(&self, text: &str, _font: Font) -> i32 {
        text.chars().count() as i32 * self.unit / COLUMNS_PER_CELL
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Size of the bordered playfield in terminal cells
    pub fn playfield_size(config: &GameConfig) -> (u16, u16) {
        let width = config.columns() * COLUMNS_PER_CELL + 2;
        let height = config.rows() + 2;
        (width as u16, height as u16)
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, config: &GameConfig) {
        let area = frame.area();
        let (width, height) = Self::playfield_size(config);

        // Playfield plus one footer line
        if area.width < width || area.height < height + 1 {
            let notice = self.render_too_small(width, height + 1);
            frame.render_widget(notice, area);
            return;
        }

        let outer = centered(area, width, height + 1);
        let board = Rect { height, ..outer };
        let footer = Rect {
            y: board.y + height,
            height: 1,
            ..outer
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(" Snake ");
        let inner = block.inner(board);
        frame.render_widget(block, board);

        let buf = frame.buffer_mut();
        buf.set_style(inner, Style::default().bg(to_color(Rgb::BLACK)));
        let mut canvas = TerminalCanvas::new(buf, inner, config.unit_size);
        canvas::paint(&mut canvas, state, config);

        frame.render_widget(self.render_controls(), footer);
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_too_small(&self, width: u16, height: u16) -> Paragraph<'_> {
        let text = vec![
            Line::from(Span::styled(
                "Terminal too small",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("need at least {width}x{height}")),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
