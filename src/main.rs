use log::debug;
use translate_check::{Config, Error, USAGE};

use std::env;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    // parse config from arguments
    let config = Config::new(&args).unwrap_or_else(|err| {
        if let Error::Usage(reason) = &err {
            eprintln!("Error parsing arguments: {}.", reason);
        }
        print!("{}", USAGE);
        process::exit(1);
    });
    debug!("{:?}", config);

    // compare key sets
    match translate_check::run(&config) {
        Ok(delta) if config.strict() && !delta.is_empty() => process::exit(2),
        Ok(_) => {}
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
