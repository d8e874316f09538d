use std::rc::Rc;

use bounded_color::color::{CheckerResult, ColoringInstance, VertexId, checker, nb_colors};
use bounded_color::compact_instance::CompactInstance;
use bounded_color::edge_list::{read_from_str, solution_to_string};
use bounded_color::pipeline::solve;
use bounded_color::search::exact::{DsaturBacktracking, EchoSolver};
use bounded_color::util::{Params, solve_file};

/// builds an instance from the edge list format
fn instance(s:&str) -> Rc<CompactInstance> {
    let (n, starts, ends) = read_from_str(s).unwrap();
    Rc::new(CompactInstance::from_edges(n, &starts, &ends).unwrap())
}

/// random graph in the edge list format
fn random_instance_str(rng:&fastrand::Rng, n:usize, p:f64) -> String {
    let mut edges:Vec<(VertexId,VertexId)> = Vec::new();
    for u in 0..n {
        for v in u+1..n {
            if rng.f64() < p {
                // random orientation, sometimes duplicated
                if rng.bool() { edges.push((u,v)); } else { edges.push((v,u)); }
                if rng.f64() < 0.05 { edges.push((v,u)); }
            }
        }
    }
    let mut res = format!("{} {}\n", n, edges.len());
    for (u,v) in edges {
        res += format!("{} {}\n", u, v).as_str();
    }
    res
}

#[test]
fn test_no_edges() {
    for n in 1..10 {
        let inst = instance(format!("{} 0\n", n).as_str());
        let res = solve(inst, &mut EchoSolver);
        assert_eq!(res.objective(), 1);
        assert_eq!(res.colors(), vec![0 ; n].as_slice());
        assert_eq!(res.lower_bound, 1);
    }
}

#[test]
fn test_triangle() {
    let res = solve(instance("3 3\n0 1\n1 2\n0 2\n"), &mut EchoSolver);
    assert_eq!(res.objective(), 3);
    assert_eq!(res.lower_bound, 3);
}

#[test]
fn test_star() {
    let res = solve(instance("4 3\n0 1\n1 2\n1 3\n"), &mut EchoSolver);
    assert_eq!(res.objective(), 2);
    let colors = res.colors();
    for leaf in &[0,2,3] {
        assert_ne!(colors[1], colors[*leaf]);
    }
}

#[test]
fn test_random_graphs() {
    let rng = fastrand::Rng::with_seed(2021);
    for _ in 0..40 {
        let n = rng.usize(1..30);
        let p = rng.f64();
        let inst = instance(random_instance_str(&rng, n, p).as_str());
        let greedy_only = solve(inst.clone(), &mut EchoSolver);
        let with_search = solve(inst.clone(), &mut DsaturBacktracking::new(20_000));
        for res in &[&greedy_only, &with_search] {
            // proper coloring, objective = distinct colors
            assert_eq!(checker(inst.as_ref(), res.colors()), CheckerResult::Ok(res.objective()));
            assert_eq!(res.objective(), nb_colors(res.colors()));
            assert!(res.lower_bound <= res.greedy.objective);
            assert!(res.lower_bound <= res.objective());
        }
        // first-fit colors are contiguous
        let greedy_colors = &greedy_only.greedy.colors;
        assert_eq!(greedy_only.greedy.objective, greedy_colors.iter().max().unwrap() + 1);
        assert!(with_search.objective() <= greedy_only.objective());
        assert_eq!(greedy_only.greedy, with_search.greedy);
    }
}

#[test]
fn test_deterministic() {
    let rng = fastrand::Rng::with_seed(5);
    let s = random_instance_str(&rng, 40, 0.3);
    let outputs:Vec<String> = (0..2).map(|_| {
        let inst = instance(s.as_str());
        assert_eq!(inst.nb_vertices(), 40);
        let res = solve(inst, &mut DsaturBacktracking::new(5_000));
        solution_to_string(res.objective(), res.colors())
    }).collect();
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn test_solve_file_deterministic() {
    let params = Params::new("insts/gc_20_1");
    let (output1, _) = solve_file(&params).unwrap();
    let (output2, _) = solve_file(&params).unwrap();
    assert_eq!(output1, output2);
    let first_line = output1.lines().next().unwrap();
    let objective:usize = first_line.split(' ').next().unwrap().parse().unwrap();
    assert!(objective >= 3); // contains a triangle
    assert!(first_line.ends_with(" 0"));
    assert_eq!(output1.lines().nth(1).unwrap().split(' ').count(), 20);
}
