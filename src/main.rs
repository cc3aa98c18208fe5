use blackjack_cli::session;
use blackjack_cli::ui::Terminal;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Shuffle seed; a random one is used when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Disable colored output
    #[arg(long)]
    no_color: bool,
    /// Skip the pacing delays between beats of play
    #[arg(long)]
    fast: bool,
}

fn main() -> std::io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("session base seed {seed}");

    let mut term = Terminal::new(args.fast);
    session::run(&mut term, seed)
}
