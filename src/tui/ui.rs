//! Stateless UI rendering.

use super::app::App;
use super::grid::{BOARD_HEIGHT, BOARD_WIDTH, CELL_HEIGHT, CELL_WIDTH, cell_rect, centered};
use gridlock_engine::{Cell, Coord, GameController, Phase, SIZE, Seat};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP: &str = "Arrows move | Enter/Space or click to play | r new round | q quit";

/// Renders the whole screen and returns where the board was drawn.
///
/// The returned area is empty when the terminal is too small for the board.
pub fn draw(frame: &mut Frame, app: &App) -> Rect {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Score
            Constraint::Length(3),            // Status
            Constraint::Length(1),            // Help
        ])
        .split(area);

    let title = Paragraph::new("Gridlock - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let board_area = draw_board(frame, chunks[1], app);

    draw_score(frame, chunks[2], app.game());

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    board_area
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> Rect {
    if area.width < BOARD_WIDTH || area.height < BOARD_HEIGHT {
        let warning = Paragraph::new("Terminal too small")
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(warning, area);
        return Rect::default();
    }

    let board_area = centered(area, BOARD_WIDTH, BOARD_HEIGHT);
    draw_separators(frame, board_area);

    let game = app.game();
    let show_cursor = !game.is_game_over();
    for coord in Coord::all() {
        let style = cell_style(game, coord, show_cursor && coord == app.cursor());
        draw_cell(frame, cell_rect(board_area, coord), game.board().get(coord), style);
    }

    board_area
}

fn cell_style(game: &GameController, coord: Coord, under_cursor: bool) -> Style {
    let cell = game.board().get(coord);
    let base = match cell.mark() {
        None => Style::default().fg(Color::DarkGray),
        Some(mark) if mark == *game.player(Seat::First).mark() => {
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        }
        Some(_) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    match game.phase() {
        Phase::Won { line, .. } if line.contains(coord) => base.bg(Color::Green).fg(Color::Black),
        _ if under_cursor => base.bg(Color::White).fg(Color::Black),
        _ => base,
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, style: Style) {
    let symbol = match cell {
        Cell::Empty => " ".to_string(),
        Cell::Marked(mark) => mark.to_string(),
    };
    let mut lines = vec![Line::from(""); usize::from(CELL_HEIGHT)];
    lines[usize::from(CELL_HEIGHT / 2)] = Line::from(Span::styled(symbol, style));

    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separators(frame: &mut Frame, board: Rect) {
    let style = Style::default().fg(Color::DarkGray);

    let cross = "─".repeat(usize::from(CELL_WIDTH));
    let horizontal = vec![cross; SIZE].join("┼");
    for k in 1..SIZE as u16 {
        let y = board.y + k * (CELL_HEIGHT + 1) - 1;
        let row = Rect::new(board.x, y, BOARD_WIDTH, 1);
        frame.render_widget(Paragraph::new(horizontal.as_str()).style(style), row);
    }

    let vertical: Vec<Line> = (0..CELL_HEIGHT).map(|_| Line::from("│")).collect();
    for row in 0..SIZE as u16 {
        for k in 1..SIZE as u16 {
            let x = board.x + k * (CELL_WIDTH + 1) - 1;
            let y = board.y + row * (CELL_HEIGHT + 1);
            let column = Rect::new(x, y, 1, CELL_HEIGHT);
            frame.render_widget(Paragraph::new(vertical.clone()).style(style), column);
        }
    }
}

fn draw_score(frame: &mut Frame, area: Rect, game: &GameController) {
    let score = game.score();
    let [first, second] = game.players();
    let line = Line::from(vec![
        Span::styled(
            format!("{} ({}): {}", first.name(), first.mark(), score.wins_a()),
            Style::default().fg(Color::Blue),
        ),
        Span::raw(format!("   Draws: {}   ", score.draws())),
        Span::styled(
            format!("{} ({}): {}", second.name(), second.mark(), score.wins_b()),
            Style::default().fg(Color::Red),
        ),
    ]);

    let panel = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Score "));
    frame.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use gridlock_engine::{Mark, Player};
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        App::new(Player::new("Ada", Mark::X), Player::new("Grace", Mark::O)).unwrap()
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draw_places_board_and_marks() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);

        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let mut board_area = Rect::default();
        terminal
            .draw(|frame| board_area = draw(frame, &app))
            .unwrap();

        assert_eq!(board_area.width, BOARD_WIDTH);
        assert_eq!(board_area.height, BOARD_HEIGHT);

        let center = cell_rect(board_area, Coord::CENTER);
        let buffer = terminal.backend().buffer();
        let x = center.x + CELL_WIDTH / 2;
        let y = center.y + CELL_HEIGHT / 2;
        assert_eq!(buffer[(x, y)].symbol(), "X");

        let text = screen(&terminal);
        assert!(text.contains("Gridlock - Tic Tac Toe"));
        assert!(text.contains("Grace's turn (O)"));
        assert!(text.contains("Ada (X): 0"));
    }

    #[test]
    fn test_small_terminal_skips_board() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(20, 12)).unwrap();
        let mut board_area = Rect::new(1, 1, 1, 1);
        terminal
            .draw(|frame| board_area = draw(frame, &app))
            .unwrap();
        assert_eq!(board_area, Rect::default());
    }
}
