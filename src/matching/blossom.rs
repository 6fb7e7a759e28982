//! Maximum-weight matching in general graphs.
//!
//! # Algorithm
//!
//! Edmonds' blossom method for augmenting paths combined with the primal-dual
//! method for weights. Each stage grows alternating trees from the single
//! vertices, shrinking odd cycles into blossoms, until it finds an augmenting
//! path; when no tight edge can extend the trees, the dual variables are
//! adjusted by the smallest of four deltas. Vertex duals, slacks, and deltas
//! are stored pre-multiplied by two.
//!
//! # Complexity
//!
//! O(n³) for n vertices.
//!
//! # Reference
//!
//! Galil, Z. (1986). "Efficient algorithms for finding maximum matching in
//! graphs", *ACM Computing Surveys* 18(1), 23-38.

/// Marks an absent vertex, endpoint, edge, or blossom.
const NONE: usize = usize::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    Free,
    /// S-vertex/blossom: even distance from a tree root.
    Outer,
    /// T-vertex/blossom: odd distance from a tree root.
    Inner,
    /// Outer blossom visited while tracing back for a new blossom.
    Crumb,
}

/// Computes a maximum-weight matching of an undirected graph.
///
/// `edges` holds `(i, j, weight)` triples over vertices `0..num_vertices`,
/// at most one edge per pair. With `max_cardinality`, only matchings of
/// maximum size are considered, and the heaviest of those is returned.
///
/// Returns `mate`, where `mate[v]` is the partner of `v` or `None` if `v` is
/// single.
///
/// # Panics
///
/// Panics if an edge is a self-loop or references a vertex outside
/// `0..num_vertices`.
///
/// # Examples
///
/// ```
/// use u_postman::matching::max_weight_matching;
///
/// // Path 0 - 1 - 2 - 3 with a heavy middle edge.
/// let edges = [(0, 1, 5.0), (1, 2, 11.0), (2, 3, 5.0)];
/// assert_eq!(max_weight_matching(4, &edges, false), vec![None, Some(2), Some(1), None]);
/// assert_eq!(
///     max_weight_matching(4, &edges, true),
///     vec![Some(1), Some(0), Some(3), Some(2)]
/// );
/// ```
pub fn max_weight_matching(
    num_vertices: usize,
    edges: &[(usize, usize, f64)],
    max_cardinality: bool,
) -> Vec<Option<usize>> {
    for &(i, j, _) in edges {
        assert!(i != j, "self-loop on vertex {i}");
        assert!(
            i < num_vertices && j < num_vertices,
            "edge ({i}, {j}) out of range"
        );
    }
    if edges.is_empty() {
        return vec![None; num_vertices];
    }
    let mut solver = Blossom::new(num_vertices, edges, max_cardinality);
    solver.solve();
    solver
        .mate
        .iter()
        .map(|&p| (p != NONE).then(|| solver.endpoint[p]))
        .collect()
}

struct Blossom<'a> {
    nvertex: usize,
    edges: &'a [(usize, usize, f64)],
    max_cardinality: bool,
    /// `endpoint[p]` is the vertex at edge endpoint `p`; endpoints `2k` and
    /// `2k + 1` belong to edge `k`.
    endpoint: Vec<usize>,
    /// Remote endpoints of the edges incident to each vertex.
    neighbend: Vec<Vec<usize>>,
    /// Remote endpoint of each vertex's matched edge, or `NONE`.
    mate: Vec<usize>,
    label: Vec<Label>,
    /// Remote endpoint of the edge through which a blossom got its label.
    labelend: Vec<usize>,
    /// Top-level blossom containing each vertex.
    inblossom: Vec<usize>,
    blossomparent: Vec<usize>,
    /// Sub-blossoms, starting at the base and going round the cycle.
    blossomchilds: Vec<Vec<usize>>,
    blossombase: Vec<usize>,
    /// `blossomendps[b][i]` is the local endpoint of `blossomchilds[b][i]` on
    /// the edge to the next sub-blossom.
    blossomendps: Vec<Vec<usize>>,
    /// Least-slack edge to an S-blossom (per free vertex) or to a different
    /// S-blossom (per top-level S-blossom).
    bestedge: Vec<usize>,
    /// Least-slack edges to neighbouring S-blossoms, per non-trivial
    /// S-blossom, once computed.
    blossombestedges: Vec<Option<Vec<usize>>>,
    unusedblossoms: Vec<usize>,
    dualvar: Vec<f64>,
    /// Edges known to have zero slack.
    allowedge: Vec<bool>,
    queue: Vec<usize>,
}

impl<'a> Blossom<'a> {
    fn new(nvertex: usize, edges: &'a [(usize, usize, f64)], max_cardinality: bool) -> Self {
        let nedge = edges.len();
        let maxweight = edges.iter().map(|e| e.2).fold(0.0_f64, f64::max);

        let endpoint = (0..2 * nedge)
            .map(|p| {
                let (i, j, _) = edges[p / 2];
                if p % 2 == 0 {
                    i
                } else {
                    j
                }
            })
            .collect();

        let mut neighbend = vec![Vec::new(); nvertex];
        for (k, &(i, j, _)) in edges.iter().enumerate() {
            neighbend[i].push(2 * k + 1);
            neighbend[j].push(2 * k);
        }

        let mut blossombase: Vec<usize> = (0..nvertex).collect();
        blossombase.extend(std::iter::repeat(NONE).take(nvertex));

        let mut dualvar = vec![maxweight; nvertex];
        dualvar.extend(std::iter::repeat(0.0).take(nvertex));

        Self {
            nvertex,
            edges,
            max_cardinality,
            endpoint,
            neighbend,
            mate: vec![NONE; nvertex],
            label: vec![Label::Free; 2 * nvertex],
            labelend: vec![NONE; 2 * nvertex],
            inblossom: (0..nvertex).collect(),
            blossomparent: vec![NONE; 2 * nvertex],
            blossomchilds: vec![Vec::new(); 2 * nvertex],
            blossombase,
            blossomendps: vec![Vec::new(); 2 * nvertex],
            bestedge: vec![NONE; 2 * nvertex],
            blossombestedges: vec![None; 2 * nvertex],
            unusedblossoms: (nvertex..2 * nvertex).collect(),
            dualvar,
            allowedge: vec![false; nedge],
            queue: Vec::new(),
        }
    }

    /// Twice the slack of edge `k` (not valid inside blossoms).
    fn slack(&self, k: usize) -> f64 {
        let (i, j, wt) = self.edges[k];
        self.dualvar[i] + self.dualvar[j] - 2.0 * wt
    }

    fn blossom_leaves(&self, b: usize) -> Vec<usize> {
        if b < self.nvertex {
            return vec![b];
        }
        let mut leaves = Vec::new();
        for &t in &self.blossomchilds[b] {
            if t < self.nvertex {
                leaves.push(t);
            } else {
                leaves.extend(self.blossom_leaves(t));
            }
        }
        leaves
    }

    /// Labels the top-level blossom containing `w`, reached through the edge
    /// with remote endpoint `p`.
    fn assign_label(&mut self, w: usize, t: Label, p: usize) {
        let b = self.inblossom[w];
        debug_assert!(self.label[w] == Label::Free && self.label[b] == Label::Free);
        self.label[w] = t;
        self.label[b] = t;
        self.labelend[w] = p;
        self.labelend[b] = p;
        self.bestedge[w] = NONE;
        self.bestedge[b] = NONE;
        match t {
            Label::Outer => {
                let leaves = self.blossom_leaves(b);
                self.queue.extend(leaves);
            }
            Label::Inner => {
                // The base is the only vertex of b with an external mate.
                let base = self.blossombase[b];
                let mbase = self.mate[base];
                debug_assert!(mbase != NONE);
                self.assign_label(self.endpoint[mbase], Label::Outer, mbase ^ 1);
            }
            Label::Free | Label::Crumb => {}
        }
    }

    /// Traces back from `v` and `w` to find either a new blossom or an
    /// augmenting path. Returns the base of the new blossom, or `NONE`.
    fn scan_blossom(&mut self, mut v: usize, mut w: usize) -> usize {
        let mut path = Vec::new();
        let mut base = NONE;
        while v != NONE || w != NONE {
            let mut b = self.inblossom[v];
            if self.label[b] == Label::Crumb {
                base = self.blossombase[b];
                break;
            }
            debug_assert_eq!(self.label[b], Label::Outer);
            path.push(b);
            self.label[b] = Label::Crumb;
            if self.labelend[b] == NONE {
                // Base of b is single; this side of the trace ends here.
                v = NONE;
            } else {
                v = self.endpoint[self.labelend[b]];
                b = self.inblossom[v];
                debug_assert_eq!(self.label[b], Label::Inner);
                v = self.endpoint[self.labelend[b]];
            }
            if w != NONE {
                std::mem::swap(&mut v, &mut w);
            }
        }
        for b in path {
            self.label[b] = Label::Outer;
        }
        base
    }

    /// Builds a new S-blossom with the given base, closed by edge `k` between
    /// two S-vertices.
    fn add_blossom(&mut self, base: usize, k: usize) {
        let (mut v, mut w, _) = self.edges[k];
        let bb = self.inblossom[base];
        let mut bv = self.inblossom[v];
        let mut bw = self.inblossom[w];

        let Some(b) = self.unusedblossoms.pop() else {
            unreachable!("at most n/2 non-trivial blossoms exist at once");
        };
        self.blossombase[b] = base;
        self.blossomparent[b] = NONE;
        self.blossomparent[bb] = b;

        let mut path = Vec::new();
        let mut endps = Vec::new();
        while bv != bb {
            self.blossomparent[bv] = b;
            path.push(bv);
            endps.push(self.labelend[bv]);
            v = self.endpoint[self.labelend[bv]];
            bv = self.inblossom[v];
        }
        path.push(bb);
        path.reverse();
        endps.reverse();
        endps.push(2 * k);
        while bw != bb {
            self.blossomparent[bw] = b;
            path.push(bw);
            endps.push(self.labelend[bw] ^ 1);
            w = self.endpoint[self.labelend[bw]];
            bw = self.inblossom[w];
        }
        self.blossomchilds[b] = path;
        self.blossomendps[b] = endps;

        debug_assert_eq!(self.label[bb], Label::Outer);
        self.label[b] = Label::Outer;
        self.labelend[b] = self.labelend[bb];
        self.dualvar[b] = 0.0;

        for leaf in self.blossom_leaves(b) {
            if self.label[self.inblossom[leaf]] == Label::Inner {
                // T-vertices become S-vertices inside the new blossom.
                self.queue.push(leaf);
            }
            self.inblossom[leaf] = b;
        }

        let mut bestedgeto = vec![NONE; 2 * self.nvertex];
        for bv in self.blossomchilds[b].clone() {
            let nblists: Vec<Vec<usize>> = match self.blossombestedges[bv].take() {
                Some(list) => vec![list],
                None => self
                    .blossom_leaves(bv)
                    .into_iter()
                    .map(|leaf| self.neighbend[leaf].iter().map(|p| p / 2).collect())
                    .collect(),
            };
            for k in nblists.into_iter().flatten() {
                let (mut i, mut j, _) = self.edges[k];
                if self.inblossom[j] == b {
                    std::mem::swap(&mut i, &mut j);
                }
                let bj = self.inblossom[j];
                if bj != b
                    && self.label[bj] == Label::Outer
                    && (bestedgeto[bj] == NONE || self.slack(k) < self.slack(bestedgeto[bj]))
                {
                    bestedgeto[bj] = k;
                }
            }
            self.bestedge[bv] = NONE;
        }
        let best: Vec<usize> = bestedgeto.into_iter().filter(|&k| k != NONE).collect();

        self.bestedge[b] = NONE;
        for &k in &best {
            if self.bestedge[b] == NONE || self.slack(k) < self.slack(self.bestedge[b]) {
                self.bestedge[b] = k;
            }
        }
        self.blossombestedges[b] = Some(best);
    }

    /// Expands a top-level blossom into its sub-blossoms.
    fn expand_blossom(&mut self, b: usize, endstage: bool) {
        for s in self.blossomchilds[b].clone() {
            self.blossomparent[s] = NONE;
            if s < self.nvertex {
                self.inblossom[s] = s;
            } else if endstage && self.dualvar[s] == 0.0 {
                self.expand_blossom(s, endstage);
            } else {
                for leaf in self.blossom_leaves(s) {
                    self.inblossom[leaf] = s;
                }
            }
        }

        // An inner blossom expanded mid-stage: relabel its sub-blossoms.
        if !endstage && self.label[b] == Label::Inner {
            let childs = self.blossomchilds[b].clone();
            let endps = self.blossomendps[b].clone();
            let len = childs.len() as isize;
            let at = |list: &[usize], j: isize| list[j.rem_euclid(len) as usize];

            let entrychild = self.inblossom[self.endpoint[self.labelend[b] ^ 1]];
            let mut j = position(&childs, entrychild) as isize;
            let (jstep, endptrick): (isize, usize) = if j & 1 == 1 {
                j -= len;
                (1, 0)
            } else {
                (-1, 1)
            };
            let trick = endptrick as isize;

            // Walk from the entry child to the base, relabelling as we go.
            let mut p = self.labelend[b];
            while j != 0 {
                self.label[self.endpoint[p ^ 1]] = Label::Free;
                let q = at(&endps, j - trick);
                self.label[self.endpoint[q ^ endptrick ^ 1]] = Label::Free;
                self.assign_label(self.endpoint[p ^ 1], Label::Inner, p);
                self.allowedge[q / 2] = true;
                j += jstep;
                p = at(&endps, j - trick) ^ endptrick;
                self.allowedge[p / 2] = true;
                j += jstep;
            }

            // The base sub-blossom is relabelled without stepping to its mate.
            let bv = at(&childs, j);
            let ep = self.endpoint[p ^ 1];
            self.label[ep] = Label::Inner;
            self.label[bv] = Label::Inner;
            self.labelend[ep] = p;
            self.labelend[bv] = p;
            self.bestedge[bv] = NONE;

            j += jstep;
            while at(&childs, j) != entrychild {
                let bv = at(&childs, j);
                if self.label[bv] == Label::Outer {
                    // Labelled S through a neighbour since the expansion began.
                    j += jstep;
                    continue;
                }
                // A reachable leaf makes the whole sub-blossom a T-blossom.
                let reached = self
                    .blossom_leaves(bv)
                    .into_iter()
                    .find(|&v| self.label[v] != Label::Free);
                if let Some(v) = reached {
                    debug_assert_eq!(self.label[v], Label::Inner);
                    debug_assert_eq!(self.inblossom[v], bv);
                    self.label[v] = Label::Free;
                    let mate_ep = self.endpoint[self.mate[self.blossombase[bv]]];
                    self.label[mate_ep] = Label::Free;
                    self.assign_label(v, Label::Inner, self.labelend[v]);
                }
                j += jstep;
            }
        }

        self.label[b] = Label::Free;
        self.labelend[b] = NONE;
        self.blossomchilds[b].clear();
        self.blossomendps[b].clear();
        self.blossombase[b] = NONE;
        self.blossombestedges[b] = None;
        self.bestedge[b] = NONE;
        self.unusedblossoms.push(b);
    }

    /// Swaps matched and unmatched edges along the path inside blossom `b`
    /// from vertex `v` to the base, making `v` the new base.
    fn augment_blossom(&mut self, b: usize, v: usize) {
        let mut t = v;
        while self.blossomparent[t] != b {
            t = self.blossomparent[t];
        }
        if t >= self.nvertex {
            self.augment_blossom(t, v);
        }

        let len = self.blossomchilds[b].len() as isize;
        let i = position(&self.blossomchilds[b], t);
        let mut j = i as isize;
        let (jstep, endptrick): (isize, usize) = if i & 1 == 1 {
            j -= len;
            (1, 0)
        } else {
            (-1, 1)
        };
        let trick = endptrick as isize;

        while j != 0 {
            j += jstep;
            let t = self.blossomchilds[b][j.rem_euclid(len) as usize];
            let p = self.blossomendps[b][(j - trick).rem_euclid(len) as usize] ^ endptrick;
            if t >= self.nvertex {
                self.augment_blossom(t, self.endpoint[p]);
            }
            j += jstep;
            let t = self.blossomchilds[b][j.rem_euclid(len) as usize];
            if t >= self.nvertex {
                self.augment_blossom(t, self.endpoint[p ^ 1]);
            }
            self.mate[self.endpoint[p]] = p ^ 1;
            self.mate[self.endpoint[p ^ 1]] = p;
        }

        self.blossomchilds[b].rotate_left(i);
        self.blossomendps[b].rotate_left(i);
        self.blossombase[b] = self.blossombase[self.blossomchilds[b][0]];
        debug_assert_eq!(self.blossombase[b], v);
    }

    /// Augments the matching along the path through edge `k`, which joins two
    /// S-vertices in different trees.
    fn augment_matching(&mut self, k: usize) {
        let (v, w, _) = self.edges[k];
        for (mut s, mut p) in [(v, 2 * k + 1), (w, 2 * k)] {
            loop {
                let bs = self.inblossom[s];
                debug_assert_eq!(self.label[bs], Label::Outer);
                if bs >= self.nvertex {
                    self.augment_blossom(bs, s);
                }
                self.mate[s] = p;
                if self.labelend[bs] == NONE {
                    // Reached a single vertex.
                    break;
                }
                let t = self.endpoint[self.labelend[bs]];
                let bt = self.inblossom[t];
                debug_assert_eq!(self.label[bt], Label::Inner);
                s = self.endpoint[self.labelend[bt]];
                let j = self.endpoint[self.labelend[bt] ^ 1];
                if bt >= self.nvertex {
                    self.augment_blossom(bt, j);
                }
                self.mate[j] = self.labelend[bt];
                p = self.labelend[bt] ^ 1;
            }
        }
    }

    /// Scans the neighbours of S-vertex `v`. Returns `true` on augmentation.
    fn scan_vertex(&mut self, v: usize) -> bool {
        for p in self.neighbend[v].clone() {
            let k = p / 2;
            let w = self.endpoint[p];
            if self.inblossom[v] == self.inblossom[w] {
                continue;
            }
            let mut kslack = 0.0;
            if !self.allowedge[k] {
                kslack = self.slack(k);
                if kslack <= 0.0 {
                    self.allowedge[k] = true;
                }
            }
            let bw = self.inblossom[w];
            if self.allowedge[k] {
                match self.label[bw] {
                    Label::Free => self.assign_label(w, Label::Inner, p ^ 1),
                    Label::Outer => {
                        let base = self.scan_blossom(v, w);
                        if base != NONE {
                            self.add_blossom(base, k);
                        } else {
                            self.augment_matching(k);
                            return true;
                        }
                    }
                    _ if self.label[w] == Label::Free => {
                        // w sits inside a T-blossom without being reached from
                        // outside yet; remember how it is reachable.
                        self.label[w] = Label::Inner;
                        self.labelend[w] = p ^ 1;
                    }
                    _ => {}
                }
            } else if self.label[bw] == Label::Outer {
                let b = self.inblossom[v];
                if self.bestedge[b] == NONE || kslack < self.slack(self.bestedge[b]) {
                    self.bestedge[b] = k;
                }
            } else if self.label[w] == Label::Free
                && (self.bestedge[w] == NONE || kslack < self.slack(self.bestedge[w]))
            {
                self.bestedge[w] = k;
            }
        }
        false
    }

    fn solve(&mut self) {
        let n = self.nvertex;
        for _stage in 0..n {
            self.label.fill(Label::Free);
            self.bestedge.fill(NONE);
            for b in n..2 * n {
                self.blossombestedges[b] = None;
            }
            self.allowedge.fill(false);
            self.queue.clear();

            for v in 0..n {
                if self.mate[v] == NONE && self.label[self.inblossom[v]] == Label::Free {
                    self.assign_label(v, Label::Outer, NONE);
                }
            }

            let mut augmented = false;
            loop {
                while !augmented {
                    let Some(v) = self.queue.pop() else {
                        break;
                    };
                    debug_assert_eq!(self.label[self.inblossom[v]], Label::Outer);
                    augmented = self.scan_vertex(v);
                }
                if augmented {
                    break;
                }

                // No augmenting path on tight edges: pick the dual update.
                let mut delta = Delta::None;
                if !self.max_cardinality {
                    let d = self.dualvar[..n].iter().copied().fold(f64::INFINITY, f64::min);
                    delta = Delta::Single(d);
                }
                // delta2: least slack between an S-vertex and a free vertex.
                for v in 0..n {
                    if self.label[self.inblossom[v]] == Label::Free && self.bestedge[v] != NONE {
                        let d = self.slack(self.bestedge[v]);
                        if delta.improves(d) {
                            delta = Delta::Grow(d, self.bestedge[v]);
                        }
                    }
                }
                // delta3: half the least slack between two S-blossoms.
                for b in 0..2 * n {
                    if self.blossomparent[b] == NONE
                        && self.label[b] == Label::Outer
                        && self.bestedge[b] != NONE
                    {
                        let d = self.slack(self.bestedge[b]) / 2.0;
                        if delta.improves(d) {
                            delta = Delta::Join(d, self.bestedge[b]);
                        }
                    }
                }
                // delta4: least dual of a T-blossom.
                for b in n..2 * n {
                    if self.blossombase[b] != NONE
                        && self.blossomparent[b] == NONE
                        && self.label[b] == Label::Inner
                        && delta.improves(self.dualvar[b])
                    {
                        delta = Delta::Expand(self.dualvar[b], b);
                    }
                }
                if delta == Delta::None {
                    // Maximum cardinality reached; a last update keeps duals
                    // consistent.
                    debug_assert!(self.max_cardinality);
                    let d = self.dualvar[..n].iter().copied().fold(f64::INFINITY, f64::min);
                    delta = Delta::Single(d.max(0.0));
                }

                let d = delta.value();
                for v in 0..n {
                    match self.label[self.inblossom[v]] {
                        Label::Outer => self.dualvar[v] -= d,
                        Label::Inner => self.dualvar[v] += d,
                        _ => {}
                    }
                }
                for b in n..2 * n {
                    if self.blossombase[b] != NONE && self.blossomparent[b] == NONE {
                        match self.label[b] {
                            Label::Outer => self.dualvar[b] += d,
                            Label::Inner => self.dualvar[b] -= d,
                            _ => {}
                        }
                    }
                }

                match delta {
                    Delta::None | Delta::Single(_) => break,
                    Delta::Grow(_, k) => {
                        self.allowedge[k] = true;
                        let (i, j, _) = self.edges[k];
                        let s = if self.label[self.inblossom[i]] == Label::Free {
                            j
                        } else {
                            i
                        };
                        debug_assert_eq!(self.label[self.inblossom[s]], Label::Outer);
                        self.queue.push(s);
                    }
                    Delta::Join(_, k) => {
                        self.allowedge[k] = true;
                        let (i, _, _) = self.edges[k];
                        debug_assert_eq!(self.label[self.inblossom[i]], Label::Outer);
                        self.queue.push(i);
                    }
                    Delta::Expand(_, b) => self.expand_blossom(b, false),
                }
            }

            if !augmented {
                break;
            }

            // End of stage: expand S-blossoms whose dual reached zero.
            for b in n..2 * n {
                if self.blossomparent[b] == NONE
                    && self.blossombase[b] != NONE
                    && self.label[b] == Label::Outer
                    && self.dualvar[b] == 0.0
                {
                    self.expand_blossom(b, true);
                }
            }
        }
    }
}

/// The dual update chosen in a substage, with its amount.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Delta {
    None,
    /// Optimum reached once a vertex dual drops to zero.
    Single(f64),
    /// Tighten an S-to-free edge.
    Grow(f64, usize),
    /// Tighten an S-to-S edge.
    Join(f64, usize),
    /// Expand a T-blossom whose dual reaches zero.
    Expand(f64, usize),
}

impl Delta {
    fn value(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Single(d) | Self::Grow(d, _) | Self::Join(d, _) | Self::Expand(d, _) => d,
        }
    }

    fn improves(self, d: f64) -> bool {
        self == Self::None || d < self.value()
    }
}

fn position(list: &[usize], item: usize) -> usize {
    match list.iter().position(|&x| x == item) {
        Some(i) => i,
        None => unreachable!("sub-blossom {item} missing from its parent"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mates(n: usize, edges: &[(usize, usize, f64)], max_cardinality: bool) -> Vec<Option<usize>> {
        max_weight_matching(n, edges, max_cardinality)
    }

    fn partners(list: &[usize]) -> Vec<Option<usize>> {
        list.iter()
            .map(|&x| if x == NONE { None } else { Some(x) })
            .collect()
    }

    const X: usize = NONE;

    #[test]
    fn test_no_edges() {
        assert_eq!(mates(3, &[], false), vec![None, None, None]);
    }

    #[test]
    fn test_single_edge() {
        assert_eq!(mates(2, &[(0, 1, 1.0)], false), vec![Some(1), Some(0)]);
    }

    #[test]
    fn test_picks_heavier_edge() {
        assert_eq!(
            mates(4, &[(1, 2, 10.0), (2, 3, 11.0)], false),
            partners(&[X, X, 3, 2])
        );
    }

    #[test]
    fn test_max_cardinality() {
        let edges = [(1, 2, 5.0), (2, 3, 11.0), (3, 4, 5.0)];
        assert_eq!(mates(5, &edges, false), partners(&[X, X, 3, 2, X]));
        assert_eq!(mates(5, &edges, true), partners(&[X, 2, 1, 4, 3]));
    }

    #[test]
    fn test_fractional_weights() {
        let edges = [(1, 2, 3.1415), (2, 3, 2.7183), (1, 3, 3.0), (1, 4, 1.4142)];
        assert_eq!(mates(5, &edges, false), partners(&[X, 4, 3, 2, 1]));
    }

    #[test]
    fn test_s_blossom_augmentation() {
        let edges = [(1, 2, 8.0), (1, 3, 9.0), (2, 3, 10.0), (3, 4, 7.0)];
        assert_eq!(mates(5, &edges, false), partners(&[X, 2, 1, 4, 3]));
        let edges = [
            (1, 2, 8.0),
            (1, 3, 9.0),
            (2, 3, 10.0),
            (3, 4, 7.0),
            (1, 6, 5.0),
            (4, 5, 6.0),
        ];
        assert_eq!(mates(7, &edges, false), partners(&[X, 6, 3, 2, 5, 4, 1]));
    }

    #[test]
    fn test_s_t_relabel_augmentation() {
        let edges = [(1, 2, 9.0), (1, 3, 8.0), (2, 3, 10.0), (1, 4, 5.0), (4, 5, 4.0), (1, 6, 3.0)];
        assert_eq!(mates(7, &edges, false), partners(&[X, 6, 3, 2, 5, 4, 1]));
        let edges = [(1, 2, 9.0), (1, 3, 8.0), (2, 3, 10.0), (1, 4, 5.0), (4, 5, 3.0), (3, 6, 4.0)];
        assert_eq!(mates(7, &edges, false), partners(&[X, 2, 1, 6, 5, 4, 3]));
    }

    #[test]
    fn test_nested_s_blossom() {
        let edges = [
            (1, 2, 9.0),
            (1, 3, 9.0),
            (2, 3, 10.0),
            (2, 4, 8.0),
            (3, 5, 8.0),
            (4, 5, 10.0),
            (5, 6, 6.0),
        ];
        assert_eq!(mates(7, &edges, false), partners(&[X, 3, 4, 1, 2, 6, 5]));
    }

    #[test]
    fn test_nested_s_blossom_expand_recursively() {
        let edges = [
            (1, 2, 8.0),
            (1, 3, 8.0),
            (2, 3, 10.0),
            (2, 4, 12.0),
            (3, 5, 12.0),
            (4, 5, 14.0),
            (4, 6, 12.0),
            (5, 7, 12.0),
            (6, 7, 14.0),
            (7, 8, 12.0),
        ];
        assert_eq!(mates(9, &edges, false), partners(&[X, 2, 1, 5, 6, 3, 4, 8, 7]));
    }

    #[test]
    fn test_s_blossom_relabel_t_expand() {
        let edges = [
            (1, 2, 23.0),
            (1, 5, 22.0),
            (1, 6, 15.0),
            (2, 3, 25.0),
            (3, 4, 22.0),
            (4, 5, 25.0),
            (4, 8, 14.0),
            (5, 7, 13.0),
        ];
        assert_eq!(mates(9, &edges, false), partners(&[X, 6, 3, 2, 8, 7, 1, 5, 4]));
    }

    #[test]
    fn test_t_blossom_nasty_expand() {
        let edges = [
            (1, 2, 45.0),
            (1, 5, 45.0),
            (2, 3, 50.0),
            (3, 4, 45.0),
            (4, 5, 50.0),
            (1, 6, 30.0),
            (3, 9, 35.0),
            (4, 8, 35.0),
            (5, 7, 26.0),
            (9, 10, 5.0),
        ];
        assert_eq!(
            mates(11, &edges, false),
            partners(&[X, 6, 3, 2, 8, 7, 1, 5, 4, 10, 9])
        );
    }

    #[test]
    fn test_nested_t_blossom_on_augmenting_path() {
        let edges = [
            (1, 2, 45.0),
            (1, 7, 45.0),
            (2, 3, 50.0),
            (3, 4, 45.0),
            (4, 5, 95.0),
            (4, 6, 94.0),
            (5, 6, 94.0),
            (6, 7, 50.0),
            (1, 8, 30.0),
            (3, 11, 35.0),
            (5, 9, 36.0),
            (7, 10, 26.0),
            (11, 12, 5.0),
        ];
        assert_eq!(
            mates(13, &edges, false),
            partners(&[X, 8, 3, 2, 6, 9, 4, 10, 1, 5, 7, 12, 11])
        );
    }

    #[test]
    fn test_nested_relabel_expand_recursively() {
        let edges = [
            (1, 2, 40.0),
            (1, 3, 40.0),
            (2, 3, 60.0),
            (2, 4, 55.0),
            (3, 5, 55.0),
            (4, 5, 50.0),
            (1, 8, 15.0),
            (5, 7, 30.0),
            (7, 6, 10.0),
            (8, 10, 10.0),
            (4, 9, 30.0),
        ];
        assert_eq!(
            mates(11, &edges, false),
            partners(&[X, 2, 1, 5, 9, 3, 7, 6, 10, 4, 8])
        );
    }

    #[test]
    #[should_panic(expected = "self-loop")]
    fn test_rejects_self_loop() {
        mates(2, &[(1, 1, 1.0)], false);
    }
}
