use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use vecdraw::config::Config;
use vecdraw::document::ShapeListModel;
use vecdraw::draw::{Color, ShapeKind};
use vecdraw::export::compute_crop_rect;
use vecdraw::input::{ColorStatus, Key, ListSelection, MouseButton};
use vecdraw::session::{EditorSession, with_drawing_extension};
use vecdraw::util::Point;

#[derive(Parser, Debug)]
#[command(name = "vecdraw")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VECDRAW_GIT_HASH"), ")"),
    about = "Vector drawing editor for lines, circles and filled circles"
)]
struct Cli {
    /// Use this config file instead of ~/.config/vecdraw/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the shapes of a drawing and the export crop rectangle
    Info {
        /// Drawing file (.jvd)
        file: PathBuf,
    },
    /// Add a shape with a two-click gesture, creating the drawing if needed
    Add {
        /// Drawing file (.jvd is appended when missing)
        file: PathBuf,
        /// Shape to draw: line, circle or filled-circle
        #[arg(long, value_parser = parse_tool)]
        tool: ShapeKind,
        /// First click (line start or circle center) as X,Y
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: Point,
        /// Second click (line end or a point on the rim) as X,Y
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: Point,
        /// Stroke color: a name or r,g,b (defaults to the configured foreground)
        #[arg(long)]
        color: Option<Color>,
        /// Fill color for filled circles (defaults to the configured fill)
        #[arg(long)]
        fill: Option<Color>,
    },
    /// Edit fields of a shape, e.g. --set radius=12 --set strokeColor=red
    Edit {
        file: PathBuf,
        /// Zero-based position in the shape list
        #[arg(long)]
        index: usize,
        /// FIELD=VALUE assignments
        #[arg(long = "set", value_name = "FIELD=VALUE", required = true)]
        assignments: Vec<String>,
    },
    /// Delete a shape
    Remove {
        file: PathBuf,
        /// Zero-based position in the shape list
        #[arg(long)]
        index: usize,
    },
    /// Export the drawing as a PNG, JPEG or GIF cropped to its content
    Export {
        file: PathBuf,
        /// Output image; the extension selects the format
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Write a commented default config file
    InitConfig,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Command::Info { file } => info(config, &file),
        Command::Add {
            file,
            tool,
            from,
            to,
            color,
            fill,
        } => add(config, &file, tool, from, to, color, fill),
        Command::Edit {
            file,
            index,
            assignments,
        } => edit(config, &file, index, &assignments),
        Command::Remove { file, index } => remove(config, &file, index),
        Command::Export { file, output } => {
            let mut session = EditorSession::new(config);
            open(&mut session, &file)?;
            let written = session.export(output.as_deref())?;
            println!("Exported {}", written.display());
            Ok(())
        }
        Command::InitConfig => {
            let path = Config::create_default_file()?;
            println!("Created {}", path.display());
            Ok(())
        }
    }
}

fn open(session: &mut EditorSession, file: &Path) -> Result<()> {
    let report = session
        .open(file)
        .with_context(|| format!("Cannot open drawing {}", file.display()))?;
    for skipped in &report.skipped {
        log::warn!("{}:{}: skipped ({})", file.display(), skipped.line, skipped.error);
    }
    Ok(())
}

fn info(config: Config, file: &Path) -> Result<()> {
    let mut session = EditorSession::new(config);
    let list = Rc::new(RefCell::new(ShapeListModel::new()));
    session.document_mut().add_listener(&list);
    open(&mut session, file)?;

    let document = session.document();
    println!("{}: {} shapes", file.display(), document.size());
    for (index, (label, shape)) in list
        .borrow()
        .labels()
        .iter()
        .zip(document.shapes())
        .enumerate()
    {
        println!("{index:>4}  {label:<20} {}", shape.to_record());
    }

    let canvas = session.config().canvas_settings();
    match compute_crop_rect(document.shapes(), canvas.width, canvas.height) {
        Some(rect) => println!(
            "crop: {},{} {}x{} (canvas {}x{})",
            rect.x, rect.y, rect.width, rect.height, canvas.width, canvas.height
        ),
        None => println!("crop: none (canvas {}x{})", canvas.width, canvas.height),
    }
    Ok(())
}

fn add(
    config: Config,
    file: &Path,
    tool: ShapeKind,
    from: Point,
    to: Point,
    color: Option<Color>,
    fill: Option<Color>,
) -> Result<()> {
    let file = with_drawing_extension(file);
    let mut session = EditorSession::new(config);
    if file.exists() {
        open(&mut session, &file)?;
    }

    let mut controller = session.controller();
    let status = Rc::new(RefCell::new(ColorStatus::for_palette(&controller.palette)));
    controller.palette.add_listener(&status);
    if let Some(color) = color {
        controller.palette.foreground.select(color);
    }
    if let Some(fill) = fill {
        controller.palette.background.select(fill);
    }
    controller.select_tool(Some(tool));

    let before = session.document().size();
    let document = session.document_mut();
    controller.on_mouse_press(MouseButton::Left, from, document);
    controller.on_mouse_motion(to);
    controller.on_mouse_press(MouseButton::Left, to, document);
    let Some(shape) = document.get(before) else {
        bail!("No shape was created");
    };
    println!("Added {}: {}", shape, shape.to_record());
    println!("{}", status.borrow().text());

    session.save_as(&file)?;
    Ok(())
}

fn edit(config: Config, file: &Path, index: usize, assignments: &[String]) -> Result<()> {
    let mut session = EditorSession::new(config);
    open(&mut session, file)?;

    let mut selection = ListSelection::default();
    selection.select(Some(index));
    let mut pending = selection
        .activate(session.document())
        .ok_or_else(|| anyhow!("No shape at index {index}"))?;

    for assignment in assignments {
        let (field, value) = assignment
            .split_once('=')
            .ok_or_else(|| anyhow!("Expected FIELD=VALUE, got '{assignment}'"))?;
        pending
            .set(field.trim(), value)
            .with_context(|| format!("Invalid assignment '{assignment}'"))?;
    }
    pending
        .confirm(session.document_mut())
        .with_context(|| format!("Edit of {} rejected", pending.target()))?;

    let edited = &session.document().shapes()[index];
    println!("Edited {}: {}", edited, edited.to_record());
    session.save()?;
    Ok(())
}

fn remove(config: Config, file: &Path, index: usize) -> Result<()> {
    let mut session = EditorSession::new(config);
    open(&mut session, file)?;

    let mut selection = ListSelection::default();
    selection.select(Some(index));
    let removed = selection
        .on_key_press(Key::Delete, session.document_mut())
        .ok_or_else(|| anyhow!("No shape at index {index}"))?;
    println!("Removed {}", removed);
    session.save()?;
    Ok(())
}

fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{value}'"))?;
    let coordinate = |part: &str| {
        part.trim()
            .parse::<i32>()
            .map_err(|_| format!("'{}' is not an integer coordinate", part.trim()))
    };
    Ok(Point::new(coordinate(x)?, coordinate(y)?))
}

fn parse_tool(value: &str) -> Result<ShapeKind, String> {
    match value.to_ascii_lowercase().as_str() {
        "line" => Ok(ShapeKind::Line),
        "circle" => Ok(ShapeKind::Circle),
        "filled-circle" | "fcircle" => Ok(ShapeKind::FilledCircle),
        _ => Err(format!(
            "unknown tool '{value}' (expected line, circle or filled-circle)"
        )),
    }
}
