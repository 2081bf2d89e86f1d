use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::input::InputError;
use crate::input::roster_file::parse_roster_names;
use crate::roster::Roster;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RosterLoad {
    pub registered: usize,
    pub duplicates: Vec<String>,
}

pub fn load_roster(roster: &Roster, path: &Path) -> Result<RosterLoad, InputError> {
    let names = parse_roster_names(path)?;
    let out = register_all(roster, names);
    info!(
        file = %path.display(),
        registered = out.registered,
        duplicates = out.duplicates.len(),
        "roster loaded"
    );
    Ok(out)
}

pub fn register_all<I, S>(roster: &Roster, names: I) -> RosterLoad
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = RosterLoad::default();
    for name in names {
        let name = name.as_ref();
        if name.is_empty() {
            continue;
        }
        if roster.register(name) {
            out.registered += 1;
        } else {
            warn!(student = name, "duplicate roster entry; keeping first");
            out.duplicates.push(name.to_string());
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_roster.rs"]
mod tests;
