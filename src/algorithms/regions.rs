use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use tracing::trace;

use crate::model::{Line, RegionObject, Vertex, REGION_FILL};

/// Undirected edge set: every consecutive id pair of every polyline,
/// deduplicated by unordered pair. Discovery order is line-id order, then
/// position in the sequence, which keeps the downstream first-seen-wins
/// choice deterministic.
fn collect_edges(lines: &BTreeMap<u32, Line>) -> Vec<(u32, u32)> {
    let mut edges: Vec<(u32, u32)> = Vec::new();
    let mut seen: BTreeSet<(u32, u32)> = BTreeSet::new();
    for line in lines.values() {
        for pair in line.vertices.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a == b {
                continue;
            }
            let key = if a < b { (a, b) } else { (b, a) };
            if seen.insert(key) {
                edges.push((a, b));
            }
        }
    }
    edges
}

fn adjacency(edges: &[(u32, u32)]) -> BTreeMap<u32, BTreeSet<u32>> {
    let mut adj: BTreeMap<u32, BTreeSet<u32>> = BTreeMap::new();
    for &(a, b) in edges {
        adj.entry(a).or_default().insert(b);
        adj.entry(b).or_default().insert(a);
    }
    adj
}

/// BFS shortest path from `start` to `goal` with one edge excluded.
/// Unweighted, so the result is shortest by edge count; neighbors expand in
/// ascending vertex id, which fixes the tie-break between equal-length
/// paths.
fn shortest_path_excluding(
    adj: &BTreeMap<u32, BTreeSet<u32>>,
    start: u32,
    goal: u32,
    blocked: (u32, u32),
) -> Option<Vec<u32>> {
    let mut prev: HashMap<u32, Option<u32>> = HashMap::new();
    prev.insert(start, None);
    let mut queue: VecDeque<u32> = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            break;
        }
        let Some(neighbors) = adj.get(&current) else {
            continue;
        };
        for &next in neighbors {
            if (current == blocked.0 && next == blocked.1)
                || (current == blocked.1 && next == blocked.0)
            {
                continue;
            }
            if !prev.contains_key(&next) {
                prev.insert(next, Some(current));
                queue.push_back(next);
            }
        }
    }

    if !prev.contains_key(&goal) {
        return None;
    }
    let mut path = vec![goal];
    let mut cur = goal;
    while let Some(Some(p)) = prev.get(&cur) {
        path.push(*p);
        cur = *p;
    }
    path.reverse();
    Some(path)
}

/// Canonical form of a cycle: the lexicographically smallest rotation of
/// the sequence and of its reversal, then the smaller of the two. Invariant
/// to start point and traversal direction.
pub fn canonical_cycle(cycle: &[u32]) -> Vec<u32> {
    fn min_rotation(seq: &[u32]) -> Vec<u32> {
        let n = seq.len();
        let mut best: Option<Vec<u32>> = None;
        for s in 0..n {
            let mut rot = Vec::with_capacity(n);
            for k in 0..n {
                rot.push(seq[(s + k) % n]);
            }
            if best.as_ref().map_or(true, |b| rot < *b) {
                best = Some(rot);
            }
        }
        best.unwrap_or_default()
    }
    let mut rev = cycle.to_vec();
    rev.reverse();
    let fwd = min_rotation(cycle);
    let bwd = min_rotation(&rev);
    if fwd <= bwd {
        fwd
    } else {
        bwd
    }
}

/// FNV-1a over the canonical id sequence; the same physical region always
/// hashes to the same key across recomputations.
pub fn region_key(canon: &[u32]) -> u32 {
    let mut hash: u32 = 0x811C_9DC5;
    for id in canon {
        for b in id.to_le_bytes() {
            hash ^= b as u32;
            hash = hash.wrapping_mul(0x0100_0193);
        }
    }
    hash
}

/// Derive the minimal enclosed cycles of the current graph: for every
/// deduplicated edge, the shortest alternative path between its endpoints
/// closes a candidate cycle; candidates shorter than 3 vertices are
/// dropped and the first cycle per canonical key wins.
pub fn detect_regions(
    vertices: &BTreeMap<u32, Vertex>,
    lines: &BTreeMap<u32, Line>,
) -> BTreeMap<u32, RegionObject> {
    let edges = collect_edges(lines);
    let adj = adjacency(&edges);

    let mut objects: BTreeMap<u32, RegionObject> = BTreeMap::new();
    let mut seen: BTreeSet<Vec<u32>> = BTreeSet::new();
    for &(a, b) in &edges {
        let Some(cycle) = shortest_path_excluding(&adj, a, b, (a, b)) else {
            continue;
        };
        if cycle.len() < 3 {
            continue;
        }
        if cycle.iter().any(|id| !vertices.contains_key(id)) {
            continue;
        }
        let canon = canonical_cycle(&cycle);
        if !seen.insert(canon.clone()) {
            continue;
        }
        objects.entry(region_key(&canon)).or_insert(RegionObject {
            cycle,
            fill: REGION_FILL,
            label: String::new(),
        });
    }
    trace!(count = objects.len(), "regions recomputed");
    objects
}
