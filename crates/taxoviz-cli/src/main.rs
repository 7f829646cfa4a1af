use std::io::{Read, Write};
use std::path::PathBuf;
use std::str::FromStr;
use taxoviz::render::raster::{self, RasterError, RasterOptions};
use taxoviz::render::{HeadlessError, HeadlessRenderer};
use taxoviz::{DocumentFormat, Taxonomy, VizConfig, parse_taxonomy};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Document(taxoviz::Error),
    Headless(HeadlessError),
    Raster(RasterError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Document(err) => write!(f, "{err}"),
            CliError::Headless(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<taxoviz::Error> for CliError {
    fn from(value: taxoviz::Error) -> Self {
        Self::Document(value)
    }
}

impl From<HeadlessError> for CliError {
    fn from(value: HeadlessError) -> Self {
        Self::Headless(value)
    }
}

impl From<RasterError> for CliError {
    fn from(value: RasterError) -> Self {
        Self::Raster(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Render,
    Layout,
}

#[derive(Debug, Clone, Copy, Default)]
enum RenderFormat {
    #[default]
    Svg,
    Png,
    Jpeg,
    Pdf,
}

impl RenderFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Pdf => "pdf",
        }
    }
}

impl FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "pdf" => Ok(Self::Pdf),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    input_format: Option<DocumentFormat>,
    pretty: bool,
    width: f64,
    height: f64,
    selected: Option<String>,
    config: Option<String>,
    overrides: Vec<String>,
    render_format: RenderFormat,
    render_scale: f32,
    background: Option<String>,
    diagram_id: Option<String>,
    title: Option<String>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "taxoviz-cli\n\
\n\
USAGE:\n\
  taxoviz-cli layout [--pretty] [COMMON] [<path>|-]\n\
  taxoviz-cli [render] [--format svg|png|jpg|pdf] [--scale <n>] [--background <css-color>] [--id <diagram-id>] [--title <text>] [--out <path>] [COMMON] [<path>|-]\n\
\n\
COMMON:\n\
  --width <w> --height <h>       surface size (default 800x600)\n\
  --selected <id>                highlight a top-level node and fan out its children\n\
  --config <path>                JSON/JSON5/YAML config document\n\
  --set <key=value>              config override, repeatable (e.g. radial.hubRadius=60)\n\
  --input-format json|json5|yaml taxonomy syntax (default: from extension, else JSON)\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - layout prints the computed geometry as JSON (`null` for a zero-sized surface).\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - PNG/JPG/PDF output defaults to writing next to the input file (or ./out.<ext> for stdin).\n\
  - Set TAXOVIZ_LOG (e.g. TAXOVIZ_LOG=debug) for diagnostics on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        command: Command::Render,
        render_format: RenderFormat::Svg,
        render_scale: 1.0,
        width: 800.0,
        height: 600.0,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "--pretty" => args.pretty = true,
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.render_format = fmt
                    .parse::<RenderFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--input-format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.input_format = Some(
                    fmt.parse::<DocumentFormat>()
                        .map_err(|_| CliError::Usage(usage()))?,
                );
            }
            "--scale" => {
                let Some(scale) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.render_scale = scale.parse::<f32>().map_err(|_| CliError::Usage(usage()))?;
                if !(args.render_scale.is_finite() && args.render_scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--background" => {
                let Some(bg) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--width" => {
                let Some(w) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.width = w.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--height" => {
                let Some(h) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.height = h.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--selected" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.selected = Some(id.clone());
            }
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--set" => {
                let Some(kv) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.overrides.push(kv.clone());
            }
            "--id" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.diagram_id = Some(id.clone());
            }
            "--title" => {
                let Some(title) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.title = Some(title.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn input_format(args: &Args) -> DocumentFormat {
    if let Some(format) = args.input_format {
        return format;
    }
    match args.input.as_deref() {
        None | Some("-") => DocumentFormat::Json,
        Some(path) => DocumentFormat::from_path(path),
    }
}

fn load_config(args: &Args) -> Result<VizConfig, CliError> {
    let mut config = match args.config.as_deref() {
        None => VizConfig::default(),
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            VizConfig::from_document(&text, DocumentFormat::from_path(path))?
        }
    };
    for raw in &args.overrides {
        config.apply_override(raw)?;
    }
    Ok(config)
}

fn write_json(value: &impl serde::Serialize, pretty: bool) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    } else {
        serde_json::to_writer(&mut stdout, value)?;
    }
    writeln!(stdout)?;
    Ok(())
}

fn write_bytes(bytes: &[u8], out: &str) -> Result<(), CliError> {
    if out == "-" {
        std::io::stdout().lock().write_all(bytes)?;
    } else {
        std::fs::write(out, bytes)?;
    }
    Ok(())
}

fn default_raster_out_path(input: Option<&str>, ext: &str) -> PathBuf {
    match input {
        Some(path) if path != "-" => PathBuf::from(path).with_extension(ext),
        _ => PathBuf::from(format!("out.{ext}")),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TAXOVIZ_LOG")
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    // A subscriber can only be installed once per process; losing logs is not fatal.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let taxonomy: Taxonomy = parse_taxonomy(&text, input_format(&args))?;
    let config = load_config(&args)?;

    let mut renderer = HeadlessRenderer::from_config(&config)?;
    if let Some(id) = args.diagram_id.as_deref() {
        renderer = renderer.with_diagram_id(id);
    }
    if let Some(title) = args.title.clone() {
        renderer = renderer.with_title(title);
    }

    let selected = args.selected.as_deref();
    if let Some(id) = selected {
        if taxonomy.find_top_level(id).is_none() {
            tracing::warn!(id, "selected id is not a top-level node; nothing will be emphasized");
        }
    }
    tracing::debug!(
        nodes = taxonomy.len(),
        width = args.width,
        height = args.height,
        "loaded taxonomy"
    );

    match args.command {
        Command::Layout => {
            let layout = renderer.layout(&taxonomy, selected, args.width, args.height);
            if layout.is_none() {
                tracing::debug!("surface has no drawable area; layout skipped");
            }
            write_json(&layout, args.pretty)?;
            Ok(())
        }
        Command::Render => {
            let raster_options = RasterOptions {
                scale: args.render_scale,
                background: args.background.clone(),
                ..Default::default()
            };
            let bytes = match args.render_format {
                RenderFormat::Svg => renderer
                    .render_svg(&taxonomy, selected, args.width, args.height)
                    .map(String::into_bytes),
                RenderFormat::Png => raster::render_png(
                    &renderer,
                    &taxonomy,
                    selected,
                    args.width,
                    args.height,
                    &raster_options,
                )?,
                RenderFormat::Jpeg => raster::render_jpeg(
                    &renderer,
                    &taxonomy,
                    selected,
                    args.width,
                    args.height,
                    &raster_options,
                )?,
                RenderFormat::Pdf => {
                    raster::render_pdf(&renderer, &taxonomy, selected, args.width, args.height)?
                }
            };
            let Some(bytes) = bytes else {
                tracing::debug!("surface has no drawable area; nothing rendered");
                return Ok(());
            };

            let out = match (args.render_format, args.out.clone()) {
                (_, Some(out)) => out,
                (RenderFormat::Svg, None) => "-".to_string(),
                (format, None) => default_raster_out_path(args.input.as_deref(), format.extension())
                    .to_string_lossy()
                    .to_string(),
            };
            write_bytes(&bytes, &out)
        }
    }
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
