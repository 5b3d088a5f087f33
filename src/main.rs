mod ui;

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use clap::{Parser as ClapParser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::Level;

use agent_org::app::{App, ViewMode};
use agent_org::events::{self, AppEvent};
use agent_org::layout::LayoutConfig;
use agent_org::logging;
use agent_org::org::{OrgModel, Team};
use agent_org::pipeline::{validate_pipeline, PIPELINE};
use agent_org::query::ChartQuery;
use agent_org::report::{
    ChartReport, JsonFormatter, PipelineFormatter, ReportFormatter, TextFormatter,
};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DumpFormat {
    /// Indented hierarchy and team counts.
    Text,
    /// Pipeline steps in order.
    Pipeline,
    /// Full report, layout included.
    Json,
}

#[derive(ClapParser, Debug)]
#[command(name = "agent-org", about = "Browse the agent org chart in the terminal")]
struct Cli {
    /// Initial view: hierarchy, pipeline, teams or graph.
    #[arg(long, default_value = "hierarchy")]
    view: ViewMode,

    /// Agent id to select on startup.
    #[arg(short, long)]
    select: Option<String>,

    /// Initial search text (matches name or role).
    #[arg(long)]
    search: Option<String>,

    /// Show only these teams (repeatable).
    #[arg(short, long = "team")]
    teams: Vec<Team>,

    /// Print a report to stdout instead of launching the TUI.
    #[arg(long, value_enum)]
    dump: Option<DumpFormat>,

    /// Write the dump report to this file instead of stdout.
    #[arg(short, long, requires = "dump")]
    output: Option<PathBuf>,

    /// Node box width in layout units.
    #[arg(long, value_parser = positive_dimension)]
    node_width: Option<f64>,

    /// Node box height in layout units.
    #[arg(long, value_parser = positive_dimension)]
    node_height: Option<f64>,

    /// Append diagnostics to this file.
    #[arg(long)]
    log: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    log_level: Level,
}

/// Layout sizes must be finite and strictly positive.
fn positive_dimension(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("`{s}` is not a number: {e}"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("`{s}` must be a positive, finite size"))
    }
}

impl Cli {
    fn layout_config(&self) -> LayoutConfig {
        let mut config = LayoutConfig::default();
        if let Some(w) = self.node_width {
            config.node_width = w;
        }
        if let Some(h) = self.node_height {
            config.node_height = h;
        }
        config
    }

    fn query(&self, model: &OrgModel) -> ChartQuery {
        let selected = self.select.as_deref().and_then(|id| {
            if model.contains(id) {
                Some(id.to_string())
            } else {
                tracing::warn!(id, "ignoring unknown --select id");
                None
            }
        });
        ChartQuery {
            search: self.search.clone().unwrap_or_default(),
            teams: self.teams.iter().copied().collect::<BTreeSet<_>>(),
            selected,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = &cli.log {
        logging::init(path, cli.log_level)?;
    }

    let model = OrgModel::fixture().wrap_err("Built-in roster is invalid")?;
    validate_pipeline(&model, PIPELINE).wrap_err("Built-in pipeline is invalid")?;
    tracing::info!(agents = model.len(), "roster loaded");

    let config = cli.layout_config();
    let query = cli.query(&model);

    if let Some(format) = cli.dump {
        let report = ChartReport::build(&model, &query, &config);
        let formatter: Box<dyn ReportFormatter> = match format {
            DumpFormat::Text => Box::new(TextFormatter::default()),
            DumpFormat::Pipeline => Box::new(PipelineFormatter),
            DumpFormat::Json => Box::new(JsonFormatter),
        };
        let output = formatter.format(&report)?;
        match &cli.output {
            Some(path) => fs::write(path, output)
                .wrap_err_with(|| format!("Failed to write report to {}", path.display()))?,
            None => print!("{output}"),
        }
        return Ok(());
    }

    let mut app = App::new(model, config);
    app.query.search = query.search;
    app.query.teams = query.teams;
    app.rebuild_rows();
    app.set_view(cli.view);
    app.select(query.selected.as_deref());
    app.focus_selected_row();

    // Launch TUI.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_tui(&mut terminal, &mut app);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn run_tui(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let (tx, rx) = mpsc::channel::<AppEvent>();

    events::spawn_input_reader(tx.clone());
    events::spawn_tick_timer(tx, Duration::from_millis(250));

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        match rx.recv_timeout(Duration::from_millis(50)) {
            Ok(AppEvent::Key(key)) => app.handle_key(key),
            Ok(AppEvent::Mouse(mouse)) => app.handle_mouse(mouse),
            // Both just trigger the redraw at the top of the loop.
            Ok(AppEvent::Resize) | Ok(AppEvent::Tick) => {}
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!("exiting");
    Ok(())
}
