use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use ct_mechanics::{Attribute, CardKind};
use ct_session::Session;

use super::app::{App, COLUMNS};

const HINT: &str = "\u{2190}\u{2191}\u{2193}\u{2192}/1-6:select  Enter:draw  x:hide/show  r:reshuffle  R:all  +:allocate  L:level up  ?:help  q:quit";

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Board
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app.table.session(), chunks[0]);
    draw_board(frame, app, chunks[1]);
    draw_status(frame, app, chunks[2]);

    if app.show_help {
        draw_help_popup(frame);
    }
}

fn draw_header(frame: &mut Frame, session: &Session, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" Clock Tan-Tan ", Style::default().fg(Color::Black).bg(Color::Yellow).bold()),
        Span::raw("  Level: "),
        Span::styled(session.level().to_string(), Style::default().bold()),
        Span::raw("  Points to allocate: "),
        Span::styled(
            session.unspent_points().to_string(),
            Style::default().fg(Color::Green).bold(),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_board(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Attribute::ALL.len().div_ceil(COLUMNS);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(*row_area);
        for (col, cell) in cells.iter().enumerate() {
            if let Some(&attr) = Attribute::ALL.get(row * COLUMNS + col) {
                draw_panel(frame, app.table.session(), attr, attr == app.selected, *cell);
            }
        }
    }
}

fn attribute_color(attr: Attribute) -> Color {
    match attr {
        Attribute::Strength => Color::Red,
        Attribute::Dexterity => Color::Green,
        Attribute::Constitution => Color::Yellow,
        Attribute::Intelligence => Color::Blue,
        Attribute::Wisdom => Color::Magenta,
        Attribute::Charisma => Color::LightYellow,
    }
}

fn card_style(kind: CardKind) -> Style {
    match kind {
        CardKind::CriticalSuccess => Style::default().fg(Color::Yellow).bold(),
        CardKind::Success => Style::default().fg(Color::Green).bold(),
        CardKind::Failure => Style::default().fg(Color::Red).bold(),
        CardKind::CriticalFailure => Style::default().fg(Color::White).bg(Color::Red).bold(),
    }
}

fn draw_panel(frame: &mut Frame, session: &Session, attr: Attribute, selected: bool, area: Rect) {
    let color = attribute_color(attr);
    let border = if selected {
        Style::default().fg(color).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(format!(" {} ({}) ", attr.name(), attr.native_name()))
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let stats = session.deck(attr).stats();
    let mut lines: Vec<Line<'static>> = vec![Line::from(vec![
        Span::styled(format!("+{} ", stats.successes_left), Style::default().fg(Color::Green)),
        Span::styled(format!("-{} ", stats.failures_left), Style::default().fg(Color::Red)),
        Span::styled(
            format!("[{} cards]", stats.total),
            Style::default().fg(Color::DarkGray),
        ),
    ])];

    for stat in session.bonus(attr).stats {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", stat.label), Style::default().fg(Color::DarkGray)),
            Span::styled(stat.formatted_value(), Style::default().fg(color).bold()),
        ]));
    }
    lines.push(Line::from(Span::styled(
        format!("Deck: {}", session.composition(attr)),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    let result = match session.last_result(attr) {
        Some(card) if session.is_revealed(attr) => Line::from(Span::styled(
            format!(" {} ", card.kind.native_name()),
            card_style(card.kind),
        )),
        Some(_) => Line::from(Span::styled(
            "(result hidden)",
            Style::default().fg(Color::DarkGray),
        )),
        None if stats.total == 0 => Line::from(Span::styled(
            "Deck empty, reshuffle",
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled(
            "No card drawn",
            Style::default().fg(Color::DarkGray),
        )),
    };
    lines.push(result);

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let status = match &app.message {
        Some(msg) if msg.is_error => Paragraph::new(msg.text.clone())
            .style(Style::default().fg(Color::Black).bg(Color::Yellow)),
        Some(msg) => Paragraph::new(msg.text.clone())
            .style(Style::default().fg(Color::Black).bg(Color::White)),
        None => Paragraph::new(HINT).style(Style::default().fg(Color::Black).bg(Color::White)),
    };
    frame.render_widget(status, area);
}

/// Create a centered rectangle as a percentage of the given area.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("  h/l, \u{2190}/\u{2192}  Previous / next attribute"),
        Line::from("  k/j, \u{2191}/\u{2193}  Row up / down"),
        Line::from("  1-6         Jump to attribute"),
        Line::from(""),
        Line::from("  Enter, d    Draw a card"),
        Line::from("  x, Esc      Hide / show last result"),
        Line::from("  r           Reshuffle selected deck"),
        Line::from("  R           Reshuffle all decks"),
        Line::from("  +, a        Allocate a point"),
        Line::from("  L, u        Level up (+2 points)"),
        Line::from(""),
        Line::from("  ?           Toggle this help"),
        Line::from("  q, Ctrl+C   Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
