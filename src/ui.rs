use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Genre, LoginField, RecommendItem, Screen};

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.size();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // header
            Constraint::Min(0),     // body
            Constraint::Length(3),  // footer
        ])
        .split(area);

    // ── Header ──────────────────────────────────────────────────────────────
    let header = Paragraph::new(Line::from(vec![
        Span::styled("reel", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::styled("pick", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::raw("  ·  Movie Recommender System"),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, outer[0]);

    // ── Body ─────────────────────────────────────────────────────────────────
    let body = outer[1].inner(Margin { horizontal: 2, vertical: 1 });
    match app.screen {
        Screen::Login => draw_login(frame, app, body),
        Screen::Recommend => draw_recommend(frame, app, body),
    }

    // ── Footer ───────────────────────────────────────────────────────────────
    let hints: &[(&str, &str)] = match app.screen {
        Screen::Login => &[
            (" Tab ", "switch field   "),
            (" Enter ", "login   "),
            (" Esc ", "quit"),
        ],
        Screen::Recommend => &[
            (" Tab/↑↓ ", "move   "),
            (" ←→ ", "genre   "),
            (" Enter ", "activate   "),
            (" PgUp/PgDn ", "scroll"),
        ],
    };
    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(*action));
    }
    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Plain)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(footer, outer[2]);
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { Color::Yellow } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", title))
}

fn draw_login(frame: &mut Frame, app: &App, area: Rect) {
    // Narrow centered column for the form
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(44),
            Constraint::Min(0),
        ])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // username
            Constraint::Length(3),  // password
            Constraint::Length(2),  // status line
            Constraint::Min(0),
        ])
        .split(columns[1]);

    let username = Paragraph::new(app.username_input.as_str())
        .block(field_block("Username", app.login_field == LoginField::Username));
    frame.render_widget(username, rows[0]);

    // Echo one '*' per typed character
    let masked = "*".repeat(app.password_input.chars().count());
    let password = Paragraph::new(masked)
        .block(field_block("Password", app.login_field == LoginField::Password));
    frame.render_widget(password, rows[1]);

    let status = Paragraph::new(app.login_message.as_str())
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);
    frame.render_widget(status, rows[2]);
}

fn draw_recommend(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // user id
            Constraint::Length(3),  // genre selector
            Constraint::Length(3),  // action buttons
            Constraint::Min(0),     // result area
        ])
        .split(area);

    let user_id = Paragraph::new(app.user_id_input.as_str()).block(field_block(
        RecommendItem::UserId.label(),
        app.focused_item() == RecommendItem::UserId,
    ));
    frame.render_widget(user_id, rows[0]);

    let mut genre_spans = Vec::new();
    for (idx, genre) in Genre::ALL.iter().enumerate() {
        let style = if idx == app.genre_selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        genre_spans.push(Span::styled(format!("  {}  ", genre.label()), style));
    }
    let genres = Paragraph::new(Line::from(genre_spans)).block(field_block(
        RecommendItem::Genre.label(),
        app.focused_item() == RecommendItem::Genre,
    ));
    frame.render_widget(genres, rows[1]);

    let buttons: &[RecommendItem] = &[
        RecommendItem::Recommend,
        RecommendItem::AddToHistory,
        RecommendItem::ViewHistory,
        RecommendItem::Logout,
    ];
    let mut button_spans = Vec::new();
    for item in buttons {
        let style = if app.focused_item() == *item {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        button_spans.push(Span::styled(format!("[ {} ]", item.label()), style));
        button_spans.push(Span::raw("  "));
    }
    let actions = Paragraph::new(Line::from(button_spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(actions, rows[2]);

    let result = Paragraph::new(app.result.as_str())
        .wrap(Wrap { trim: false })
        .scroll((app.result_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Results "),
        );
    frame.render_widget(result, rows[3]);
}
