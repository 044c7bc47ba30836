use clap::Parser;
use miette::Result;
use tracing_subscriber::EnvFilter;

use coffee::cli::{Cli, Commands, GlobalOpts};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    init_tracing(&global);

    match cli.command {
        Commands::Init => coffee::cli::commands::init::run(&global),
        Commands::List(args) => coffee::cli::commands::list::run(args, &global),
        Commands::Show(args) => coffee::cli::commands::show::run(args, &global),
        Commands::Add(args) => coffee::cli::commands::add::run(args, &global),
        Commands::Edit(args) => coffee::cli::commands::edit::run(args, &global),
        Commands::Delete(args) => coffee::cli::commands::delete::run(args, &global),
        Commands::Browse => coffee::cli::commands::browse::run(&global),
        Commands::Completions(args) => coffee::cli::commands::completions::run(args),
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(global: &GlobalOpts) {
    let default_level = if global.verbose { "coffee=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
