//! `fountain render` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use fountain_config::{CliSettings, Config};
use fountain_renderer::{Mode, RenderResult, Renderer, RendererConfig, RuleSet, ScriptDocument};

use crate::error::CliError;
use crate::output::Output;

/// Rendering mode as accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum ModeArg {
    /// Plain screenplay rendering.
    Base,
    /// Component directives enabled.
    Extended,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Base => Self::Base,
            ModeArg::Extended => Self::Extended,
        }
    }
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Parsed screenplay document (JSON).
    document: PathBuf,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stylesheet to link from the page (overrides config).
    #[arg(long, env = "FOUNTAIN_CSS")]
    css: Option<String>,

    /// Directory holding component definitions (overrides config).
    #[arg(long)]
    component_parent: Option<String>,

    /// Rendering mode (overrides config).
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Path to configuration file (default: auto-discover fountain.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, the document file, or the output
    /// file cannot be read, parsed or written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            css_file: self.css,
            component_parent: self.component_parent,
            mode: self.mode.map(Mode::from),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }

        let source = std::fs::read_to_string(&self.document)?;
        let result = render_document(&source, &self.document, config.renderer_config())?;

        output.render_warnings(&result.warnings);

        match &self.output {
            Some(path) => {
                std::fs::write(path, &result.html)?;
                output.rendered(path, &result.components);
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(result.html.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

/// Parse a JSON screenplay document and render it.
fn render_document(
    source: &str,
    path: &Path,
    config: RendererConfig,
) -> Result<RenderResult, CliError> {
    let document: ScriptDocument =
        serde_json::from_str(source).map_err(|source| CliError::Document {
            path: path.display().to_string(),
            source,
        })?;
    tracing::info!(
        elements = document.elements.len(),
        mode = ?config.mode,
        "Rendering screenplay"
    );
    let rules = RuleSet::for_mode(config.mode);
    let renderer = Renderer::with_rules(config, rules)?;
    Ok(renderer.render(&document))
}
