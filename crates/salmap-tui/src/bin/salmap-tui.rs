use std::io::IsTerminal;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print!("{}", salmap_tui::usage());
        return;
    }
    let mut app = match salmap_tui::build_app(&args) {
        Ok(app) => app,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    };

    let interactive = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
    if interactive {
        if let Err(message) = salmap_tui::runtime::run(&mut app) {
            eprintln!("{message}");
            std::process::exit(1);
        }
    } else {
        print!("{}", app.snapshot_text());
    }
}
