//! Canvas rendering of the computed chart layout.
//!
//! Layout coordinates grow downward; the canvas grows upward, so every y is
//! negated on the way in.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Rectangle};
use ratatui::widgets::{Block, Borders};

use agent_org::app::{App, FocusPanel};
use agent_org::query::{edge_visible, visibility};

use super::{colors, tree_view};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.focus == FocusPanel::View {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(tree_view::view_tabs(app.view))
        .borders(Borders::ALL)
        .border_style(border_style);

    let config = &app.layout_config;
    let chart = &app.chart;
    let bounds = chart.bounds(config);
    let visible = visibility(&app.model, &app.query.search, &app.query.teams);
    let half_w = config.node_width / 2.0;
    let half_h = config.node_height / 2.0;

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([bounds.min_x, bounds.max_x])
        .y_bounds([-bounds.max_y, -bounds.min_y])
        .paint(|ctx| {
            for group in &chart.groups {
                ctx.draw(&Rectangle {
                    x: group.x,
                    y: -(group.y + group.height),
                    width: group.width,
                    height: group.height,
                    color: colors::ACCENT_MUTED,
                });
            }
            ctx.layer();

            for edge in &chart.edges {
                let (Some(from), Some(to)) = (chart.node(&edge.source), chart.node(&edge.target))
                else {
                    continue;
                };
                let color = if app.highlight.contains_edge(&edge.id) {
                    colors::PATH
                } else if edge_visible(edge, &visible) {
                    colors::EDGE
                } else {
                    colors::EDGE_FADED
                };
                ctx.draw(&CanvasLine {
                    x1: from.x,
                    y1: -(from.y + half_h),
                    x2: to.x,
                    y2: -(to.y - half_h),
                    color,
                });
            }
            ctx.layer();

            for node in &chart.nodes {
                let Some(agent) = app.model.get(&node.id) else {
                    continue;
                };
                let shown = visible.get(&node.id).copied().unwrap_or(false);
                let lit = app.highlight.contains_node(&node.id);
                let color = if !shown {
                    colors::DIMMED
                } else if lit {
                    colors::PATH
                } else {
                    colors::team(agent.team)
                };
                ctx.draw(&Rectangle {
                    x: node.x - half_w,
                    y: -(node.y + half_h),
                    width: config.node_width,
                    height: config.node_height,
                    color,
                });

                let text = if !shown {
                    colors::DIMMED
                } else if lit {
                    colors::PATH
                } else {
                    colors::TEXT
                };
                let mut style = Style::default().fg(text);
                if app.query.selected.as_deref() == Some(node.id.as_str()) {
                    style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                }
                ctx.print(
                    node.x - half_w + config.node_width * 0.05,
                    -node.y,
                    Span::styled(agent.short_name().to_string(), style),
                );
            }

            for group in &chart.groups {
                ctx.print(
                    group.x + config.group_padding,
                    -group.y,
                    Span::styled(
                        format!(" {} ", group.label),
                        Style::default().fg(colors::team(group.team)),
                    ),
                );
            }
        });

    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use agent_org::app::ViewMode;
    use agent_org::layout::LayoutConfig;
    use agent_org::org::{OrgModel, Team};

    fn test_app() -> App {
        let mut app = App::new(OrgModel::fixture().unwrap(), LayoutConfig::default());
        app.set_view(ViewMode::Graph);
        app
    }

    fn draw(app: &App) -> Terminal<TestBackend> {
        let backend = TestBackend::new(140, 48);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app, f.area())).unwrap();
        terminal
    }

    /// Foreground color where `text` first starts, scanning rows top to bottom.
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
    fn every_tier_is_labeled() {
        let app = test_app();
        let terminal = draw(&app);
        let backend = terminal.backend();
        assert_eq!(fg_color_of(backend, "CEO"), Some(colors::TEXT));
        assert_eq!(fg_color_of(backend, "VP Product"), Some(colors::TEXT));
        assert_eq!(fg_color_of(backend, "Developer"), Some(colors::TEXT));
    }

    #[test]
    fn path_and_filter_colors() {
        let mut app = test_app();
        app.select(Some("developer"));
        app.toggle_team_filter(Team::Engineering);
        let terminal = draw(&app);
        let backend = terminal.backend();
        assert_eq!(fg_color_of(backend, "VP Engineering"), Some(colors::PATH));
        assert_eq!(fg_color_of(backend, "Chief of Staff"), Some(colors::DIMMED));
        // Leadership root is filtered out even though it is on the path.
        assert_eq!(fg_color_of(backend, "CEO"), Some(colors::DIMMED));
    }
}
