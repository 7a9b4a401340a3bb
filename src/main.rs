//! sounddesk entrypoint.

use sounddesk::run;
use sounddesk::ui::messages::error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("SOUNDDESK_LOG", "warn"))
        .format_timestamp(None)
        .init();

    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
