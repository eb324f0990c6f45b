//! References command: dump the indexed link targets.

use std::path::Path;

use linkaudit_core::audit::build_reference_set;

use super::output::print_json;
use super::{load_config, open_vault};
use crate::ReferencesArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: ReferencesArgs) {
    let rc = load_config(config, profile);
    let vault = open_vault(&rc);

    let set = match build_reference_set(&vault) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("Error indexing links: {}", e);
            std::process::exit(1);
        }
    };

    let mut targets: Vec<&str> = set.iter().collect();
    targets.sort_unstable();

    if args.json {
        print_json(&targets);
    } else {
        for target in targets {
            println!("{}", target);
        }
    }
}
