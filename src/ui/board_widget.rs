use crate::game::{Coord, GameState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the board grid with file letters, rank numbers, piece glyphs, and
/// the cursor/selection highlights.
pub fn render_board(
    frame: &mut Frame,
    state: &GameState,
    cursor: Coord,
    selected: Option<Coord>,
    area: Rect,
) {
    let dim = state.dim();
    let roster = state.roster();
    let mut lines = Vec::with_capacity(dim + 2);

    lines.push(file_letters(dim));

    for row in 1..=dim {
        let mut spans = vec![Span::styled(
            format!("{row:>2} "),
            Style::default().fg(Color::DarkGray),
        )];
        for col in 0..dim {
            let square = Coord::new(col, row);
            let (glyph, color) = if roster.fox() == square {
                (" F ", Color::Red)
            } else if roster.hound_at(square) {
                (" H ", Color::Blue)
            } else {
                (" . ", Color::DarkGray)
            };

            let mut style = Style::default().fg(color);
            if selected == Some(square) {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            if cursor == square {
                style = style.bg(Color::Cyan).fg(Color::Black);
            }
            spans.push(Span::styled(glyph, style));
        }
        spans.push(Span::styled(
            format!(" {row}"),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(spans));
    }

    lines.push(file_letters(dim));

    let widget = Paragraph::new(lines);
    frame.render_widget(widget, area);
}

fn file_letters(dim: usize) -> Line<'static> {
    let mut header = String::from("   ");
    for col in 0..dim {
        header.push(' ');
        header.push((b'A' + col as u8) as char);
        header.push(' ');
    }
    Line::from(Span::styled(header, Style::default().fg(Color::DarkGray)))
}
