//! Group command: random partition into fixed-size groups

use anyhow::Result;

use super::output::Output;
use crate::domain::{coerce_group_size, GroupEngine, NameList};
use crate::storage::GroupConfig;

/// Shuffle `names` into groups and print them
pub fn run(
    output: &Output,
    config: &GroupConfig,
    names: &NameList,
    size_arg: Option<&str>,
    seed: Option<u64>,
) -> Result<()> {
    let group_size = match size_arg {
        Some(raw) => {
            let size = coerce_group_size(raw);
            if raw.trim() != size.to_string() {
                output.verbose_ctx("group", &format!("Group size {:?} read as {}", raw, size));
            }
            size
        }
        None => config.size,
    };

    let mut engine = match seed {
        Some(seed) => GroupEngine::seeded(seed),
        None => GroupEngine::new(),
    };

    output.verbose_ctx(
        "group",
        &format!("Partitioning {} names into groups of {}", names.len(), group_size),
    );
    let partition = engine.partition(names, group_size)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "group_size": group_size,
            "count": partition.len(),
            "groups": partition,
        }));
    } else if partition.is_empty() {
        println!("No names to group.");
    } else {
        for (idx, group) in partition.iter().enumerate() {
            println!("Group {} ({}): {}", idx + 1, group.len(), group.join(", "));
        }
    }

    Ok(())
}
