use crate::color::{ColoringInstance, VertexId};

/**
returns the vertices sorted by decreasing degree (largest first).
Vertices of equal degree keep their id order. Vertices without neighbors are appended at the end
(their color does not depend on the order).
*/
pub fn degree_order(inst:&dyn ColoringInstance) -> Vec<VertexId> {
    let mut res:Vec<VertexId> = inst.vertices()
        .filter(|v| inst.degree(*v) > 0)
        .collect();
    // sort_by is stable: ids are already in increasing order
    res.sort_by(|a,b| inst.degree(*b).cmp(&inst.degree(*a)));
    res.extend(inst.vertices().filter(|v| inst.degree(*v) == 0));
    res
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::compact_instance::CompactInstance;

    #[test]
    fn test_star() {
        let inst = CompactInstance::from_file("insts/gc_4_1").unwrap();
        assert_eq!(degree_order(&inst), vec![1,0,2,3]);
    }

    #[test]
    fn test_ties_and_isolated() {
        // 0 isolated, 1-2-3-4 path, 5 isolated
        let inst = CompactInstance::from_edges(6, &[1, 2, 3], &[2, 3, 4]).unwrap();
        assert_eq!(degree_order(&inst), vec![2,3,1,4,0,5]);
    }

    #[test]
    fn test_permutation() {
        let inst = CompactInstance::from_file("insts/gc_20_1").unwrap();
        let mut order = degree_order(&inst);
        for w in order.windows(2) {
            if inst.degree(w[1]) > 0 {
                assert!(inst.degree(w[0]) >= inst.degree(w[1]));
            }
        }
        order.sort_unstable();
        assert_eq!(order, (0..20).collect::<Vec<_>>());
    }
}
