use clap::Parser;
use miette::Result;
use inventory::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) so `inventory list | head`
    // does not panic on a closed pipe.
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
    inventory::cli::logging::init(global.verbose, global.quiet);

    match cli.command {
        None => inventory::cli::commands::session::run(cli.no_import, &global),
        Some(Commands::Import(args)) => inventory::cli::commands::import::run(args, &global),
        Some(Commands::List(args)) => inventory::cli::commands::list::run(args, &global),
        Some(Commands::Show(args)) => inventory::cli::commands::show::run(args, &global),
        Some(Commands::Add(args)) => inventory::cli::commands::add::run(args, &global),
        Some(Commands::Backup(args)) => inventory::cli::commands::backup::run(args, &global),
    }
}
