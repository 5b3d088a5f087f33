use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use agent_org::app::App;

use super::colors;

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.search_mode {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let suggestions = app.suggestions();

    let lines: Vec<Line> = if app.query.search.is_empty() {
        vec![Line::from(Span::styled(
            "  Press / to search agents by name or role",
            Style::default().fg(Color::DarkGray),
        ))]
    } else if suggestions.is_empty() {
        vec![Line::from(Span::styled(
            format!("  No agents match \"{}\"", app.query.search),
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        suggestions
            .iter()
            .enumerate()
            .map(|(i, agent)| {
                // Enter jumps to the first suggestion.
                let marker = if i == 0 { " ▸ " } else { "   " };
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Yellow)),
                    Span::raw(format!("{} ", agent.icon)),
                    Span::styled(&agent.name, Style::default().fg(colors::TEXT)),
                    Span::styled(
                        format!("  {}", agent.team.display_name()),
                        Style::default().fg(colors::team(agent.team)),
                    ),
                ])
            })
            .collect()
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}
