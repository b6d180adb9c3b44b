//! Line-oriented command parsing for the console front end

use thiserror::Error;
use tube_core::TubeParams;

use crate::actions::EditorAction;

/// Console input errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid number for {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("Expected on/off, got: {0}")]
    InvalidToggle(String),

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),
}

/// Tube dimensions given on an `add` line; missing values fall back to config defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddArgs {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub thickness: Option<f32>,
    pub length: Option<f32>,
    pub angle_deg: Option<f32>,
    pub kind: Option<String>,
}

impl AddArgs {
    /// Overlay the given values on `defaults`, keeping its id
    pub fn into_params(self, defaults: TubeParams) -> TubeParams {
        let angle_deg = self.angle_deg.unwrap_or(defaults.angle_deg);
        TubeParams {
            kind: self.kind.unwrap_or(defaults.kind),
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            thickness: self.thickness.unwrap_or(defaults.thickness),
            length: self.length.unwrap_or(defaults.length),
            ..defaults
        }
        .with_angle(angle_deg)
    }
}

/// A parsed console line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a tube; the id is assigned by the session
    Add(AddArgs),
    /// Any other editor action
    Action(EditorAction),
    List,
    Joints,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  add [width height thickness length [angle [type]]]
  angle <id> <degrees>
  select <id>
  rotate <degrees>          rotate the selected tube
  clear
  undo | redo
  wireframe on|off
  highlight on|off
  snap on|off
  list | joints
  help | quit";

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match head.to_ascii_lowercase().as_str() {
        "add" => Command::Add(parse_add(&args)?),
        "angle" => {
            let id = args.first().ok_or(ParseError::MissingArgument("id"))?;
            let angle = number("angle", args.get(1).copied())?;
            no_more(&args, 2)?;
            Command::Action(EditorAction::SetAngle {
                id: id.to_string(),
                angle_deg: angle,
            })
        }
        "select" => {
            let id = args.first().ok_or(ParseError::MissingArgument("id"))?;
            no_more(&args, 1)?;
            Command::Action(EditorAction::Select(id.to_string()))
        }
        "rotate" => {
            let angle = number("angle", args.first().copied())?;
            no_more(&args, 1)?;
            Command::Action(EditorAction::SetSelectedAngle(angle))
        }
        "clear" => simple(&args, Command::Action(EditorAction::Clear))?,
        "undo" => simple(&args, Command::Action(EditorAction::Undo))?,
        "redo" => simple(&args, Command::Action(EditorAction::Redo))?,
        "wireframe" => Command::Action(EditorAction::SetWireframe(toggle(&args)?)),
        "highlight" => Command::Action(EditorAction::SetHighlightMode(toggle(&args)?)),
        "snap" => Command::Action(EditorAction::SetSnap(toggle(&args)?)),
        "list" => simple(&args, Command::List)?,
        "joints" => simple(&args, Command::Joints)?,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_add(args: &[&str]) -> Result<AddArgs, ParseError> {
    if args.is_empty() {
        return Ok(AddArgs::default());
    }
    if args.len() < 4 {
        let missing = ["width", "height", "thickness", "length"][args.len()];
        return Err(ParseError::MissingArgument(missing));
    }
    no_more(args, 6)?;

    Ok(AddArgs {
        width: Some(number("width", Some(args[0]))?),
        height: Some(number("height", Some(args[1]))?),
        thickness: Some(number("thickness", Some(args[2]))?),
        length: Some(number("length", Some(args[3]))?),
        angle_deg: args.get(4).copied().map(|v| number("angle", Some(v))).transpose()?,
        kind: args.get(5).map(|v| v.to_string()),
    })
}

fn number(name: &'static str, value: Option<&str>) -> Result<f32, ParseError> {
    let value = value.ok_or(ParseError::MissingArgument(name))?;
    match value.parse::<f32>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ParseError::InvalidNumber {
            name,
            value: value.to_string(),
        }),
    }
}

fn toggle(args: &[&str]) -> Result<bool, ParseError> {
    let value = args.first().ok_or(ParseError::MissingArgument("on|off"))?;
    no_more(args, 1)?;
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        _ => Err(ParseError::InvalidToggle(value.to_string())),
    }
}

fn simple(args: &[&str], command: Command) -> Result<Command, ParseError> {
    no_more(args, 0)?;
    Ok(command)
}

fn no_more(args: &[&str], expected: usize) -> Result<(), ParseError> {
    match args.get(expected) {
        Some(extra) => Err(ParseError::UnexpectedArgument(extra.to_string())),
        None => Ok(()),
    }
}
