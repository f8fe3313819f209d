//! Rendering of the board, status line, and game-over box.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::App;
use mousetoe_core::{Cell, Opponent, Player, Position};

/// Renders the whole screen and records where the board landed.
pub fn draw<O: Opponent>(frame: &mut Frame, app: &mut App<O>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(3),    // Board
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Mousetoe - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let geometry = app.geometry();
    let board_area = center_rect(chunks[1], geometry.board_width(), geometry.board_height());
    app.set_board_area(board_area);
    draw_board(frame, board_area, app);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    if let Some(lines) = app.game_over_lines() {
        draw_game_over(frame, board_area, lines);
    }
}

fn draw_board<O: Opponent>(frame: &mut Frame, area: Rect, app: &App<O>) {
    let geometry = app.geometry();
    let board = app.engine().board();

    for pos in Position::ALL {
        let (x, y) = geometry.cell_origin(pos.row() as u16, pos.col() as u16);
        let cell_area = Rect::new(
            area.x.saturating_add(x),
            area.y.saturating_add(y),
            geometry.square_width(),
            geometry.square_height(),
        )
        .intersection(area);
        if cell_area.is_empty() {
            continue;
        }
        draw_cell(frame, cell_area, board.get(pos));
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell) {
    let (symbol, style) = match cell {
        Cell::Empty => (" ", Style::default()),
        Cell::Occupied(player @ Player::One) => (
            player.mark(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(player @ Player::Two) => (
            player.mark(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Vertically center the mark inside the border.
    let pad = inner.height.saturating_sub(1) / 2;
    let mark_area = Rect::new(inner.x, inner.y + pad, inner.width, inner.height.min(1));
    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, mark_area);
}

fn draw_game_over(frame: &mut Frame, board_area: Rect, lines: Vec<String>) {
    let width = lines
        .iter()
        .map(|l| l.chars().count() as u16)
        .max()
        .unwrap_or(0)
        .saturating_add(4);
    let height = lines.len() as u16 + 2;
    let area = center_rect(board_area, width, height).intersection(frame.area());

    let text: Vec<Line> = lines
        .into_iter()
        .enumerate()
        .map(|(i, l)| {
            if i == 0 {
                Line::from(Span::styled(
                    l,
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(l)
            }
        })
        .collect();

    let overlay = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().bg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(Clear, area);
    frame.render_widget(overlay, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
