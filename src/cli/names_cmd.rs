//! Names command: prints the normalized list

use anyhow::Result;

use super::output::Output;
use crate::domain::NameList;

/// Print the names one per line (text) or as a JSON array
pub fn show(output: &Output, names: &NameList) -> Result<()> {
    if output.is_json() {
        output.data(&serde_json::json!({
            "count": names.len(),
            "names": names,
        }));
    } else if names.is_empty() {
        eprintln!("No names found.");
    } else {
        println!("{}", names.to_text());
        output.verbose_ctx("names", &format!("{} names", names.len()));
    }

    Ok(())
}
