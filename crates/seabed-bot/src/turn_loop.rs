//! Turn loop — blocks on the next turn, decides, answers, repeats.
//!
//! Single-threaded and lockstep: the only suspension point is waiting for
//! input. Runs until the input ends.

use std::io::{BufRead, Write};

use tracing::{error, info, warn};

use seabed_core::error::{Result, SeabedError};
use seabed_drone_ai::config::BehaviorConfig;

use crate::engine::DecisionEngine;
use crate::protocol::{write_commands, ProtocolReader};

/// Play a whole match over `input`/`output`.
///
/// A turn that cannot be parsed is answered with fallback commands so every
/// known drone still gets its line. End of input between turns ends the
/// match; end of input inside a turn is an error.
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W, config: BehaviorConfig) -> Result<()> {
    let mut reader = ProtocolReader::new(input);
    let catalog = reader.read_catalog()?;
    info!(
        creatures = catalog.len(),
        hostiles = catalog.hostile_ids().len(),
        strategy = %config.strategy,
        "match started"
    );

    let mut engine = DecisionEngine::new(catalog, config);
    loop {
        match reader.read_turn() {
            Ok(None) => break,
            Ok(Some(turn)) => {
                for err in &turn.dropped {
                    warn!("dropped record: {err}");
                }
                let commands = engine.tick(&turn.input);
                write_commands(output, &commands)?;
            }
            Err(err @ (SeabedError::Io(_) | SeabedError::UnexpectedEof(_))) => return Err(err),
            Err(err) => {
                error!("turn {} unreadable: {err}", engine.turn() + 1);
                write_commands(output, &engine.fallback_commands())?;
            }
        }
    }

    info!(turns = engine.turn(), "input closed");
    Ok(())
}
