use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
};

/// A pop-up shown over the board while the game is paused
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Paused;

impl Paused {
    /// The size that should be used for the `Rect` passed to
    /// `Paused::render()`
    pub(super) const SIZE: Size = Size {
        width: 18,
        height: 4,
    };
}

impl Widget for Paused {
    /*
     * ┌──── PAUSED ────┐
     * │ Resume (Space) │
     * │ Quit (q)       │
     * └────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" PAUSED ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        let lines = [
            Line::from_iter([
                Span::raw("Resume ("),
                Span::styled("Space", consts::KEY_STYLE),
                Span::raw(")"),
            ]),
            Line::from_iter([
                Span::raw("Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ]),
        ];
        for (line, row) in lines.into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let area = Rect::new(0, 0, Paused::SIZE.width, Paused::SIZE.height);
        let mut buffer = Buffer::empty(area);
        Paused.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "┌──── PAUSED ────┐",
            "│ Resume (Space) │",
            "│ Quit (q)       │",
            "└────────────────┘",
        ]);
        expected.set_style(area, Style::reset());
        expected.set_style(Rect::new(10, 1, 5, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(8, 2, 1, 1), consts::KEY_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
