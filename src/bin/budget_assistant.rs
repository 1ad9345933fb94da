use budget_assistant::{cli::run_cli, init};

const INTERRUPTED_EXIT_CODE: i32 = 130;

fn main() {
    init();

    if let Err(err) = run_cli() {
        if err.is_interrupt() {
            println!();
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
