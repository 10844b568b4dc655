use std::io;
use std::sync::Arc;
use term_fractal_explorer::{
    CrosstermSizeProbe, Explorer, ExplorerConfig, PngFilePresenter, StepOutcome, TerminalSession,
    default_key_source, logging,
};

/// Exit status for a session ended by Ctrl-C or a closed input stream.
const INTERRUPTED_EXIT_CODE: i32 = 130;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ExplorerConfig::from_env();
    logging::init(config.log_file.as_deref())?;

    let outcome = {
        let _session = TerminalSession::enter()?;
        let keys = default_key_source(config.escape_window);
        let mut explorer = Explorer::new(
            config,
            keys,
            io::stdout(),
            Arc::new(PngFilePresenter::new()),
            CrosstermSizeProbe::default(),
        );

        explorer.run()?
    };

    if outcome == StepOutcome::Interrupted {
        std::process::exit(INTERRUPTED_EXIT_CODE);
    }

    Ok(())
}
