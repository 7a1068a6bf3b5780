use anyhow::Context;
use clap::Parser;
use people_counter::cli::Cli;
use people_counter::counter::CounterStore;
use people_counter::logging::init_tracing;
use people_counter::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.resolve_config().context("failed to load config")?;
    let backend = cli
        .open_backend(&config)
        .context("failed to open counter storage")?;
    let store = CounterStore::load(backend);

    if cli.print {
        let state = store.state();
        println!("current={} total={}", state.current, state.total);
        return Ok(());
    }

    runtime::run(store).context("terminal UI failed")?;
    Ok(())
}
