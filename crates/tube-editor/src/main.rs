//! Tube Editor main entry point

use std::io::{BufRead, Write};
use std::time::Instant;

use tube_editor::console::{self, Command};
use tube_editor::{ConfigManager, ConsolePresenter, EditorSession, Outcome};

fn main() -> std::io::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tube_editor=info,tube_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Tube Editor");

    let mut config = ConfigManager::new();
    tracing::debug!("Config file: {:?}", config.config_file_path());
    let mut session = EditorSession::new(&config.config().editor);
    session.add_presenter(Box::new(ConsolePresenter::new(std::io::stdout())));

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        session.tick(Instant::now());

        let command = match console::parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(stdout, "error: {e}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(stdout, "{}", console::HELP)?,
            Command::List => {
                for tube in session.tubes() {
                    writeln!(stdout, "{}: angle {}°", tube.id, tube.angle_deg)?;
                }
            }
            Command::Joints => {
                for joint in session.joints() {
                    writeln!(stdout, "{} x {}", joint.id_a, joint.id_b)?;
                }
            }
            Command::Add(args) => {
                let defaults = config.config().tube_defaults.params(session.next_tube_id());
                let params = args.into_params(defaults);
                if let Err(e) = session.add_tube(params) {
                    writeln!(stdout, "error: {e}")?;
                }
            }
            Command::Action(action) => {
                let description = action.description();
                match session.dispatch(action) {
                    Ok(Outcome::Applied) => {}
                    Ok(Outcome::NoOp) => writeln!(stdout, "{description}: nothing to do")?,
                    Err(e) => writeln!(stdout, "error: {e}")?,
                }
            }
        }
    }

    remember_toggles(&mut config, &session);
    if let Err(e) = config.save() {
        tracing::warn!("Failed to save config: {}", e);
    }

    tracing::info!("Tube Editor exiting");
    Ok(())
}

/// Persist display toggles changed during the session.
fn remember_toggles(config: &mut ConfigManager, session: &EditorSession) {
    let display = session.display();
    let editor = &config.config().editor;
    if editor.snap_angles == display.snap_angles
        && editor.highlight_joints == display.highlight_joints
        && editor.wireframe == display.wireframe
    {
        return;
    }

    let editor = &mut config.config_mut().editor;
    editor.snap_angles = display.snap_angles;
    editor.highlight_joints = display.highlight_joints;
    editor.wireframe = display.wireframe;
}
