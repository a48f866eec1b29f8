use cluegrid_core::Board;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table};

use crate::app::{App, Status};

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub(crate) fn draw(frame: &mut Frame, app: &App) {
    let [board_area, status_area, help_area] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    match app.session().board() {
        Some(board) => draw_board(frame, board, app.cursor(), board_area),
        None => draw_placeholder(frame, app, board_area),
    }
    draw_status(frame, app, status_area);
    draw_help(frame, help_area);
}

fn draw_board(frame: &mut Frame, board: &Board, cursor: (usize, usize), area: Rect) {
    let header = Row::new(
        board
            .categories()
            .iter()
            .map(|category| {
                Cell::from(category.title().to_owned())
                    .style(Style::new().add_modifier(Modifier::BOLD))
            })
            .collect::<Vec<_>>(),
    )
    .height(2);

    let rows = (0..board.rows()).map(|row| {
        let cells = (0..board.columns()).map(|column| {
            let text = board
                .clue_at(column, row)
                .and_then(|clue| clue.visible_text())
                .unwrap_or("?")
                .to_owned();
            let mut style = Style::new();
            if (column, row) == cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Cell::from(text).style(style)
        });
        Row::new(cells.collect::<Vec<_>>()).height(2)
    });

    let columns = board.columns().max(1) as u32;
    let widths = (0..columns).map(|_| Constraint::Ratio(1, columns));

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(Block::bordered().title("cluegrid"));
    frame.render_widget(table, area);
}

fn draw_placeholder(frame: &mut Frame, app: &App, area: Rect) {
    let text = match app.status() {
        Status::Loading => "assembling the board...",
        Status::Failed(_) => "no board; press r to retry",
        Status::Ready => "",
    };
    let paragraph = Paragraph::new(text).block(Block::bordered().title("cluegrid"));
    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = match app.status() {
        Status::Loading => {
            let spinner = SPINNER_FRAMES[app.spinner_frame() % SPINNER_FRAMES.len()];
            Line::from(vec![
                Span::raw(spinner),
                Span::raw(" loading categories..."),
            ])
        }
        Status::Ready => Line::from("pick a clue"),
        Status::Failed(message) => Line::from(Span::styled(
            format!("load failed: {message}"),
            Style::new().fg(Color::Red),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("arrows/hjkl move | enter reveal | r restart | q quit")
        .style(Style::new().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
