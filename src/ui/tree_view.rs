use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use agent_org::app::{App, FocusPanel, ViewMode, ViewRow};

use super::colors;

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.focus == FocusPanel::View {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(view_tabs(app.view))
        .borders(Borders::ALL)
        .border_style(border_style);

    let items: Vec<ListItem> = app
        .rows
        .iter()
        .map(|row| ListItem::new(row_line(row, app.view)))
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.selected_index));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(colors::HIGHLIGHT_BG)
                .fg(colors::HIGHLIGHT_FG)
                .add_modifier(Modifier::BOLD),
        );

    f.render_stateful_widget(list, area, &mut state);
}

/// Block title listing every view with its number key; the active one is lit.
pub fn view_tabs(active: ViewMode) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (i, view) in ViewMode::ALL.into_iter().enumerate() {
        let style = if view == active {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{} {} ", i + 1, view.title()), style));
    }
    Line::from(spans)
}

fn row_line(row: &ViewRow, view: ViewMode) -> Line<'_> {
    let team_color = row.team.map(colors::team).unwrap_or(colors::FALLBACK);

    if row.is_header {
        let color = if row.visible { team_color } else { colors::DIMMED };
        return Line::from(vec![
            Span::styled(
                &row.display_name,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", row.label), Style::default().fg(Color::DarkGray)),
        ]);
    }

    let indent = "  ".repeat(row.depth);
    let toggle = if row.has_children {
        if row.is_expanded { "▾ " } else { "▸ " }
    } else {
        "  "
    };

    let name_style = if !row.visible {
        Style::default().fg(colors::DIMMED)
    } else if row.highlighted {
        Style::default().fg(colors::PATH).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::TEXT)
    };

    let mut spans = vec![Span::raw(indent)];
    match view {
        ViewMode::Pipeline => {
            spans.push(Span::styled(
                format!("{} ", row.label),
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::styled(
                if row.parallel { "║ " } else { "│ " },
                Style::default().fg(if row.parallel { colors::ACCENT_MUTED } else { Color::DarkGray }),
            ));
        }
        _ => spans.push(Span::styled(toggle, Style::default().fg(Color::DarkGray))),
    }
    spans.push(Span::raw(format!("{} ", row.icon)));
    spans.push(Span::styled(&row.display_name, name_style));

    if view != ViewMode::Pipeline && !row.label.is_empty() {
        spans.push(Span::styled(
            format!("  {}", row.label),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let dot = if row.visible { team_color } else { colors::DIMMED };
    spans.push(Span::styled("  ●", Style::default().fg(dot)));

    Line::from(spans)
}
