use std::fs;
use std::rc::Rc;
use std::time::Instant;

use clap::{ArgMatches, value_t};
use serde_json::{Value, json};

use crate::{
    color::ColoringInstance,
    compact_instance::CompactInstance,
    edge_list::solution_to_string,
    error::Result,
    pipeline::solve,
    search::clique_bound::common_neighbor_hint,
    search::exact::{DsaturBacktracking, EchoSolver, ExactSolver},
};

/// default number of nodes expanded by the exact search
pub const DEFAULT_BUDGET:usize = 1_000_000;

/// parameters of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    /// instance filename
    pub inst_filename: String,
    /// node budget of the exact search (0: greedy only)
    pub budget: usize,
    /// if any: file where the solution is written
    pub sol_file: Option<String>,
    /// if any: file where the statistics are written
    pub perf_file: Option<String>,
}

impl Params {
    /// default parameters for an instance
    pub fn new(inst_filename:&str) -> Self {
        Self {
            inst_filename: inst_filename.to_string(),
            budget: DEFAULT_BUDGET,
            sol_file: None,
            perf_file: None,
        }
    }
}

/** reads command line input and returns the run parameters (exits on invalid values) */
pub fn read_params(main_args:&ArgMatches) -> Params {
    let inst_filename = main_args.value_of("instance").unwrap_or_default();
    let budget = if main_args.is_present("budget") {
        value_t!(main_args, "budget", usize).unwrap_or_else(|e| e.exit())
    } else {
        DEFAULT_BUDGET
    };
    Params {
        inst_filename: inst_filename.to_string(),
        budget,
        sol_file: main_args.value_of("solution").map(|e| e.to_string()),
        perf_file: main_args.value_of("perf").map(|e| e.to_string()),
    }
}

/**
reads the instance, solves it and returns (output text, statistics).

# Errors
 - if the instance cannot be read or is invalid (nothing is solved in this case)
*/
pub fn solve_file(params:&Params) -> Result<(String, Value)> {
    let t_start = Instant::now();
    let instance:Rc<dyn ColoringInstance> = Rc::new(
        CompactInstance::from_file(params.inst_filename.as_str())?
    );
    instance.display_statistics();
    let mut solver:Box<dyn ExactSolver> = if params.budget == 0 {
        Box::new(EchoSolver)
    } else {
        Box::new(DsaturBacktracking::new(params.budget))
    };
    let res = solve(instance.clone(), solver.as_mut());
    let duration = t_start.elapsed().as_secs_f32();
    let hint = instance.vertices()
        .map(|v| common_neighbor_hint(instance.as_ref(), v))
        .max().unwrap_or(0);
    let output = solution_to_string(res.objective(), res.colors());
    let stats = json!({
        "inst_name": params.inst_filename,
        "nb_vertices": instance.nb_vertices(),
        "nb_edges": instance.nb_edges(),
        "lower_bound": res.lower_bound,
        "common_neighbor_hint": hint,
        "greedy_objective": res.greedy.objective,
        "bounds": res.bounds,
        "objective": res.objective(),
        "nb_expanded": res.exact.nb_expanded,
        "proven_optimal": res.exact.proven_optimal,
        "time_searched": duration,
    });
    Ok((output, stats))
}

/// exports the statistics and the solution to files (if asked)
pub fn export_results(params:&Params, output:&str, stats:&Value) -> Result<()> {
    if let Some(filename) = &params.perf_file {
        fs::write(filename, stats.to_string())?;
    }
    if let Some(filename) = &params.sol_file {
        fs::write(filename, output)?;
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use clap::{App, ErrorKind, load_yaml};

    use crate::error::InstanceError;

    #[test]
    fn test_read_params() {
        let yaml = load_yaml!("main_args.yml");
        let matches = App::from_yaml(yaml).get_matches_from(vec![
            "bounded_color", "insts/gc_4_1", "--budget", "12", "-p", "perf.json"
        ]);
        let params = read_params(&matches);
        assert_eq!(params.inst_filename, "insts/gc_4_1");
        assert_eq!(params.budget, 12);
        assert_eq!(params.perf_file, Some("perf.json".to_string()));
        assert_eq!(params.sol_file, None);
        let matches = App::from_yaml(yaml).get_matches_from(vec![
            "bounded_color", "-s", "sol.txt", "insts/gc_4_1", "-b", "0"
        ]);
        let params = read_params(&matches);
        assert_eq!(params.sol_file, Some("sol.txt".to_string()));
        assert_eq!(params.budget, 0);
        let default_matches = App::from_yaml(yaml).get_matches_from(vec!["bounded_color", "insts/gc_4_1"]);
        assert_eq!(read_params(&default_matches), Params::new("insts/gc_4_1"));
    }

    #[test]
    fn test_missing_instance() {
        let yaml = load_yaml!("main_args.yml");
        let res = App::from_yaml(yaml).get_matches_from_safe(vec!["bounded_color"]);
        assert_eq!(res.unwrap_err().kind, ErrorKind::MissingRequiredArgument);
        let res = App::from_yaml(yaml).get_matches_from_safe(vec!["bounded_color", "-b", "12"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_solve_file() {
        let (output, stats) = solve_file(&Params::new("insts/gc_4_1")).unwrap();
        assert_eq!(output, "2 0\n1 0 1 1\n");
        assert_eq!(stats["objective"], 2);
        assert_eq!(stats["lower_bound"], 2);
        assert_eq!(stats["common_neighbor_hint"], 1);
        assert_eq!(stats["proven_optimal"], true);
    }

    #[test]
    fn test_solve_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "3 1\n0 3\n").unwrap();
        let params = Params::new(file.path().to_str().unwrap());
        assert!(matches!(
            solve_file(&params),
            Err(InstanceError::VertexOutOfRange { edge:0, vertex:3, n:3 })
        ));
        assert!(matches!(
            solve_file(&Params::new("insts/does_not_exist")),
            Err(InstanceError::Io(_))
        ));
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{} 0\n", usize::MAX).unwrap();
        let params = Params::new(file.path().to_str().unwrap());
        assert!(matches!(solve_file(&params), Err(InstanceError::TooManyVertices(usize::MAX))));
    }

    #[test]
    fn test_export_results() {
        let dir = tempfile::tempdir().unwrap();
        let perf = dir.path().join("perf.json");
        let sol = dir.path().join("sol.txt");
        let mut params = Params::new("insts/petersen");
        params.perf_file = Some(perf.to_str().unwrap().to_string());
        params.sol_file = Some(sol.to_str().unwrap().to_string());
        let (output, stats) = solve_file(&params).unwrap();
        export_results(&params, &output, &stats).unwrap();
        assert_eq!(fs::read_to_string(&sol).unwrap(), output);
        let perf_json:Value = serde_json::from_str(&fs::read_to_string(&perf).unwrap()).unwrap();
        assert_eq!(perf_json["objective"], 3);
        assert_eq!(perf_json["nb_vertices"], 10);
        assert_eq!(perf_json["common_neighbor_hint"], 1); // triangle-free
        assert_eq!(perf_json["bounds"]["upper"], stats["greedy_objective"]);
    }
}
