use std::{io::stdout, process::exit, sync::mpsc};

use clampgol::{ClearRegistry, Clearer, Config, Driver};
use log::error;

pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::default();
    let clearer = Clearer::host(ClearRegistry::standard());
    // the sender is kept alive so the loop only ends with the process
    let (_sender, receiver) = mpsc::channel();

    let result = Driver::new(config, clearer, stdout()).and_then(|mut driver| driver.run(&receiver));
    if let Err(err) = result {
        error!("{err}");
        exit(1);
    }
}
