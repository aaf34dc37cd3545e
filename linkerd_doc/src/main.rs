//! `linkerd` entry point: parse the command line and run the `doc` command.

use std::io;

use linkerd_doc::cli::{DOC_COMMAND, ROOT_NAME, root_command, run_doc};
use linkerd_doc::config::DocConfig;
use linkerd_doc::error::DocError;
use linkerd_doc::logging::init_logging;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    run().map_err(color_eyre::eyre::Report::from)
}

fn run() -> Result<(), DocError> {
    let config = DocConfig::load()?;
    init_logging(&config)?;

    let matches = root_command().get_matches();
    match matches.subcommand_name() {
        Some(DOC_COMMAND) => {
            let root = root_command();
            let mut stdout = io::stdout().lock();
            run_doc(&root, &mut stdout)
        }
        Some(other) => Err(DocError::NoHandler(other.to_owned())),
        None => Err(DocError::NoHandler(ROOT_NAME.to_owned())),
    }
}
