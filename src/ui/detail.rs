use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use agent_org::app::{App, FocusPanel};
use agent_org::org::Agent;

use super::colors;

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.focus == FocusPanel::Detail {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Agent Details ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines = match app.selected_agent() {
        Some(agent) => agent_lines(app, agent),
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Select an agent to view details",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));
    f.render_widget(paragraph, area);
}

fn agent_lines<'a>(app: &'a App, agent: &'a Agent) -> Vec<Line<'a>> {
    let team_color = colors::team(agent.team);
    let label = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw(format!("  {} ", agent.icon)),
            Span::styled(
                &agent.name,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(agent.team.display_name(), Style::default().fg(team_color)),
            Span::styled(
                agent.phase.as_deref().map(|p| format!("  {p}")).unwrap_or_default(),
                label,
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(format!("  {}", agent.role), Style::default().fg(colors::TEXT))),
        Line::from(""),
    ];

    if let Some(manager) = agent.reports_to.as_deref().and_then(|id| app.model.get(id)) {
        lines.push(Line::from(vec![
            Span::styled("  Reports to: ", label),
            Span::styled(&manager.name, Style::default().fg(colors::team(manager.team))),
        ]));
    }
    let reports = app.model.children_of(&agent.id).len();
    if reports > 0 {
        lines.push(Line::from(vec![
            Span::styled("  Direct reports: ", label),
            Span::styled(reports.to_string(), Style::default().fg(Color::White)),
        ]));
    }

    if let Some(autonomy) = &agent.autonomy {
        lines.push(Line::from(vec![
            Span::styled("  Autonomy: ", label),
            Span::styled(
                autonomy.level.to_string(),
                Style::default()
                    .fg(colors::autonomy(autonomy.level))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", autonomy.description), label),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Responsibilities", label)));
    for item in &agent.responsibilities {
        lines.push(Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(colors::CHECK)),
            Span::styled(item.as_str(), Style::default().fg(colors::TEXT)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Tools", label)));
    lines.push(Line::from(Span::styled(
        format!("  {}", agent.tools.join(", ")),
        Style::default().fg(colors::ACCENT_MUTED),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use agent_org::layout::LayoutConfig;
    use agent_org::org::{AutonomyLevel, OrgModel, Team};

    fn test_app() -> App {
        App::new(OrgModel::fixture().unwrap(), LayoutConfig::default())
    }

    fn draw(app: &App) -> Terminal<TestBackend> {
        let backend = TestBackend::new(70, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app, f.area())).unwrap();
        terminal
    }

    /// Find the foreground color of the first cell where `text` starts, anywhere in the buffer.
    fn fg_color_of(backend: &TestBackend, text: &str) -> Option<Color> {
        let buf = backend.buffer();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                let rest: String = (x..buf.area.width)
                    .map(|i| buf[(i, y)].symbol().to_string())
                    .collect();
                if rest.starts_with(text) {
                    return Some(buf[(x, y)].fg);
                }
            }
        }
        None
    }

    #[test]
    fn placeholder_without_selection() {
        let app = test_app();
        let terminal = draw(&app);
        assert!(fg_color_of(terminal.backend(), "Select an agent to view details").is_some());
    }

    #[test]
    fn shows_team_autonomy_and_checks() {
        let mut app = test_app();
        app.select(Some("developer"));
        let terminal = draw(&app);
        let backend = terminal.backend();

        assert_eq!(
            fg_color_of(backend, "VP Engineering Team"),
            Some(colors::team(Team::Engineering))
        );
        assert_eq!(fg_color_of(backend, "Phase 5A"), Some(Color::DarkGray));
        assert_eq!(fg_color_of(backend, "L0"), Some(colors::autonomy(AutonomyLevel::L0)));
        assert_eq!(fg_color_of(backend, "✓"), Some(colors::CHECK));
        assert_eq!(fg_color_of(backend, "Reports to: "), Some(Color::DarkGray));
        assert!(fg_color_of(backend, "Select an agent").is_none());
    }

    #[test]
    fn root_has_no_manager_line() {
        let mut app = test_app();
        app.select(Some("ceo"));
        let terminal = draw(&app);
        let backend = terminal.backend();
        assert!(fg_color_of(backend, "Reports to").is_none());
        assert!(fg_color_of(backend, "Direct reports: ").is_some());
        assert!(fg_color_of(backend, "Autonomy").is_none());
    }

    #[test]
    fn scroll_hides_header() {
        let mut app = test_app();
        app.select(Some("developer"));
        app.detail_scroll = 4;
        let terminal = draw(&app);
        assert!(fg_color_of(terminal.backend(), "Developer").is_none());
    }
}
