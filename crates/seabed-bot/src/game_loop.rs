//! Read-decide-print loop, one iteration per referee turn.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use seabed_agent::TurnEngine;

use crate::protocol::{format_intent, ProtocolReader};

/// Run until the referee closes the input. Returns the number of turns played.
pub fn run<R: BufRead, W: Write>(
    engine: &mut TurnEngine,
    reader: &mut ProtocolReader<R>,
    out: &mut W,
) -> Result<u64> {
    let map_size = engine.config().map_size;

    while let Some(snapshot) = reader
        .read_turn()
        .with_context(|| format!("failed to read turn {}", engine.turn() + 1))?
    {
        // 1. Decide
        let report = engine.decide(&snapshot);
        for event in &report.events {
            tracing::trace!(turn = report.turn, ?event, "decision event");
        }

        // 2. One command per drone, in input order
        for (_, intent) in &report.intents {
            writeln!(out, "{}", format_intent(intent, map_size))
                .context("failed to write command")?;
        }
        out.flush().context("failed to flush commands")?;

        tracing::debug!(
            turn = report.turn,
            my_score = snapshot.my_score,
            foe_score = snapshot.foe_score,
            scanned = engine.ledger().len(),
            "turn complete"
        );
    }

    Ok(engine.turn())
}
