use crate::game::{Coord, GameOutcome, GameState, Side};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    state: &GameState,
    cursor: Coord,
    selected: Option<Coord>,
    message: &Option<String>,
) {
    let board_height = state.dim() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(4),            // Controls
        ])
        .split(frame.area());

    render_header(frame, state, chunks[0]);
    super::board_widget::render_board(frame, state, cursor, selected, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, state: &GameState, area: ratatui::layout::Rect) {
    let (status, color) = match state.outcome() {
        Some(GameOutcome::FoxWin) => ("The Fox wins!".to_string(), Color::Red),
        Some(GameOutcome::HoundWin) => ("The Hounds win!".to_string(), Color::Blue),
        None => {
            let color = match state.turn() {
                Side::Fox => Color::Red,
                Side::Hound => Color::Blue,
            };
            (format!("{} to move", state.turn().name()), color)
        }
    };

    let title = format!("Fox and Hounds {}x{}", state.dim(), state.dim());
    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let text = "Arrows: move cursor | Enter: select piece / move | Esc: cancel\n\
                s: save | l: load | r: new game | q: quit";
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(widget, area);
}
