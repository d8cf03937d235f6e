// envoy: Modal environment variable editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Drawing a [`Session`] into a ratatui frame.
//!
//! ```text
//! +-------------------------------------+
//! | KEY        | VALUE                  |  table, modified rows yellow
//! | ...        | ...                    |
//! +-------------------------------------+
//! | :w out.env                          |  minibuffer
//! |  NORMAL | 12 vars | hints           |  status line
//! +-------------------------------------+
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table, TableState};

use crate::ui::controller::{Field, Form, Session};
use crate::ui::input::LineInput;

const FORM_WIDTH: u16 = 80;
const FORM_HEIGHT: u16 = 6;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame<'_>, session: &Session) {
    let [table_area, prompt_area, status_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_table(frame, table_area, session);
    draw_prompt(frame, prompt_area, session);

    let status = Paragraph::new(format!(" {}", session.status_line()))
        .style(Style::new().fg(Color::White).bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    if let Some(form) = session.controller().form() {
        draw_form(frame, centered(frame.area(), FORM_WIDTH, FORM_HEIGHT), form);
    }
}

fn draw_table(frame: &mut Frame<'_>, area: Rect, session: &Session) {
    let controller = session.controller();
    let rows: Vec<Row<'_>> = controller
        .store()
        .visible()
        .into_iter()
        .map(|var| {
            let row = Row::new([var.key, var.value]);
            if var.modified {
                row.style(Style::new().fg(Color::Yellow))
            } else {
                row
            }
        })
        .collect();
    let selectable = !rows.is_empty();

    let header = Row::new(["KEY", "VALUE"]).style(
        Style::new()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(rows, [Constraint::Ratio(1, 4), Constraint::Ratio(3, 4)])
        .header(header)
        .row_highlight_style(Style::new().add_modifier(Modifier::BOLD))
        .cell_highlight_style(Style::new().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    if selectable {
        let (row, col) = controller.selection();
        state.select(Some(row));
        state.select_column(Some(col));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_prompt(frame: &mut Frame<'_>, area: Rect, session: &Session) {
    let Some(prompt) = session.controller().prompt() else {
        return;
    };
    let line = format!("{}{}", prompt.label(), prompt.input().text());
    frame.render_widget(Paragraph::new(line), area);
    place_cursor(frame, area.x + 1, area.y, prompt.input());
}

fn draw_form(frame: &mut Frame<'_>, area: Rect, form: &Form) {
    frame.render_widget(Clear, area);

    let block = Block::default().borders(Borders::ALL).title(form.title());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = |field: Field, name: &'static str| {
        let style = if form.focus() == field {
            Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::new()
        };
        Span::styled(name, style)
    };
    let lines = vec![
        Line::from(vec![label(Field::Key, "Key:   "), Span::raw(form.key().text())]),
        Line::from(vec![
            label(Field::Value, "Value: "),
            Span::raw(form.value().text()),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Enter save  Esc cancel  Tab switch field",
            Style::new().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    let (row, input) = match form.focus() {
        Field::Key => (inner.y, form.key()),
        Field::Value => (inner.y + 1, form.value()),
    };
    place_cursor(frame, inner.x + 7, row, input);
}

fn place_cursor(frame: &mut Frame<'_>, x: u16, y: u16, input: &LineInput) {
    let offset = u16::try_from(input.cursor()).unwrap_or(u16::MAX);
    frame.set_cursor_position((x.saturating_add(offset), y));
}

/// A `width` x `height` rectangle centred in `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
