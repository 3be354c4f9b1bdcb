#[macro_use]
extern crate lazy_static;

mod prelude;

mod app;
mod chart;
mod config;
mod error;
mod input;
mod render;
mod report;

use crate::{app::Outcome, prelude::*, report::diagnostic};
use std::{io, process};

fn main() {
  env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or("warn"),
  )
  .init();

  let mut renderer = render::for_config(&CONFIG.output);
  let stdin = io::stdin();

  match app::run(
    stdin.lock(),
    &mut io::stdout(),
    &CONFIG.style,
    renderer.as_mut(),
  ) {
    Ok(Outcome::Rendered(solution)) => {
      debug!("Plot closed, intersection {:?}", solution.intersection)
    }
    Ok(Outcome::Degenerate(err)) => debug!("Nothing plotted: {}", err),
    Err(err) => match err.downcast_ref::<InputError>() {
      Some(input_err) => {
        warn!("{}", input_err);
        println!("{}", diagnostic(&"Please enter valid numeric values."));
        process::exit(1);
      }
      None => {
        eprintln!("{}", diagnostic(&format!("{:#}", err)));
        process::exit(2);
      }
    },
  }
}
