//! Draw command: one in-process draw session

use std::io::IsTerminal;

use anyhow::Result;

use super::output::Output;
use super::spin;
use crate::domain::{DrawEngine, NameList};
use crate::storage::DrawConfig;

/// Flags for a draw session
#[derive(Debug, Clone)]
pub struct DrawOptions {
    pub count: usize,
    pub allow_repeat: bool,
    pub spin: bool,
    pub seed: Option<u64>,
}

/// Draw `count` winners in a row from one engine
///
/// Stops at the first failed draw; the winners so far are still printed.
pub fn run(output: &Output, config: &DrawConfig, names: NameList, options: &DrawOptions) -> Result<()> {
    let mut engine = match options.seed {
        Some(seed) => DrawEngine::seeded(names, seed),
        None => DrawEngine::new(names),
    };
    engine.set_allow_repeat(options.allow_repeat);

    let animate = options.spin && output.is_text() && std::io::stdout().is_terminal();
    if options.spin && !animate {
        output.verbose_ctx("draw", "Not a terminal, skipping spin animation");
    }

    output.verbose_ctx(
        "draw",
        &format!(
            "Drawing {} from {} eligible (repeat {})",
            options.count,
            engine.pool_size(),
            if options.allow_repeat { "on" } else { "off" }
        ),
    );

    let mut winners = Vec::with_capacity(options.count);
    let mut failure = None;

    for round in 1..=options.count {
        let drawn = if animate {
            spin::animate(&mut engine, config)?
        } else {
            engine.draw()
        };

        match drawn {
            Ok(winner) => {
                output.verbose_ctx(
                    "draw",
                    &format!("Round {}: {} ({} left)", round, winner, engine.pool_size()),
                );
                if output.is_text() {
                    println!("Winner #{}: {}", round, winner);
                }
                winners.push(winner);
            }
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
    }

    if output.is_json() {
        output.data(&serde_json::json!({
            "winners": winners,
            "history": engine.history(),
            "remaining": engine.pool_size(),
            "allow_repeat": engine.allow_repeat(),
        }));
    }

    match failure {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
