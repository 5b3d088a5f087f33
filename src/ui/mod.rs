pub mod colors;
pub mod detail;
pub mod graph;
pub mod search;
pub mod tree_view;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use agent_org::app::{App, ViewMode};
use agent_org::org::Team;

pub fn render(f: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),       // top: view + details
            Constraint::Length(7),     // bottom: search suggestions
            Constraint::Length(1),     // status bar
        ])
        .split(f.area());

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(62),  // active view
            Constraint::Percentage(38),  // details
        ])
        .split(outer[0]);

    match app.view {
        ViewMode::Graph => graph::render(f, app, top[0]),
        _ => tree_view::render(f, app, top[0]),
    }
    detail::render(f, app, top[1]);
    search::render(f, app, outer[1]);
    render_status_bar(f, app, outer[2]);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status = if app.search_mode {
        Line::from(vec![
            Span::styled(" /", Style::default().fg(Color::Yellow)),
            Span::raw(&app.query.search),
            Span::styled("_", Style::default().fg(Color::Yellow)),
        ])
    } else {
        let mut spans = vec![
            Span::styled(" [q]", Style::default().fg(Color::Gray)),
            Span::raw("uit "),
            Span::styled("[j/k]", Style::default().fg(Color::Gray)),
            Span::raw("nav "),
            Span::styled("[h/l]", Style::default().fg(Color::Gray)),
            Span::raw("expand "),
            Span::styled("[1-4/v]", Style::default().fg(Color::Gray)),
            Span::raw("view "),
            Span::styled("[/]", Style::default().fg(Color::Gray)),
            Span::raw("search "),
            Span::styled("[c]", Style::default().fg(Color::Gray)),
            Span::raw("lear "),
            Span::styled("[tab]", Style::default().fg(Color::Gray)),
            Span::raw("focus  "),
        ];
        // Team filter toggles; active ones light up in their team color.
        for team in Team::ALL {
            let style = if app.query.teams.contains(&team) {
                Style::default().fg(colors::team(team)).bg(Color::Black)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!("{} ", team.filter_key()), style));
        }
        if !app.query.search.is_empty() {
            spans.push(Span::styled(
                format!(" search: {}", app.query.search),
                Style::default().fg(Color::Yellow),
            ));
        }
        Line::from(spans)
    };

    f.render_widget(
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use agent_org::layout::LayoutConfig;
    use agent_org::org::OrgModel;

    fn screen(app: &App) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buf = terminal.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn full_screen_renders_every_view() {
        let mut app = App::new(OrgModel::fixture().unwrap(), LayoutConfig::default());
        for view in ViewMode::ALL {
            app.set_view(view);
            let text = screen(&app);
            assert!(text.contains("Agent Details"));
            assert!(text.contains("Search"));
            assert!(text.contains("[tab]"));
        }
    }

    #[test]
    fn search_prompt_replaces_hints() {
        let mut app = App::new(OrgModel::fixture().unwrap(), LayoutConfig::default());
        app.search_mode = true;
        app.query.search = "dev".into();
        let text = screen(&app);
        let last = text.lines().last().unwrap();
        assert!(last.starts_with(" /dev_"));
        assert!(!last.contains("[tab]"));
    }
}
