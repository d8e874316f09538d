//! Greedy graph coloring with a clique lower bound and a bounded exact search stage


// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

use clap::{App, load_yaml};
use env_logger::Env;
use log::error;

use bounded_color::util::{read_params, solve_file, export_results};


/**
reads an instance, solves it and prints the solution on the standard output
(logs are written on the standard error).
*/
pub fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    // parse arguments
    let yaml = load_yaml!("main_args.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args);
    // solve it
    let res = solve_file(&params)
        .and_then(|(output, stats)| {
            print!("{}", output);
            export_results(&params, &output, &stats)
        });
    if let Err(e) = res {
        error!("{}", e);
        std::process::exit(1);
    }
}
