//! Finite combinatorial producers used by the evaluators.
//!
//! Subsets come out in lexicographic index order, which fixes the
//! enumeration order that best-hand ties resolve against.

/// All `k`-element subsets of `items`, each in the input order.
pub fn k_subsets<T: Copy>(items: &[T], k: usize) -> Vec<Vec<T>> {
    if k == 0 {
        return vec![vec![]];
    }
    if items.len() < k {
        return vec![];
    }

    let mut result = Vec::with_capacity(binomial(items.len(), k) as usize);
    let first = items[0];
    let rest = &items[1..];

    for mut combo in k_subsets(rest, k - 1) {
        combo.insert(0, first);
        result.push(combo);
    }
    result.extend(k_subsets(rest, k));

    result
}

/// Every unordered pair drawn from `items`.
pub fn pairs<T: Copy>(items: &[T]) -> Vec<(T, T)> {
    let mut out = Vec::with_capacity(binomial(items.len(), 2) as usize);
    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            out.push((items[i], items[j]));
        }
    }
    out
}

/// Cartesian product, left-major.
pub fn cartesian<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(A, B)> {
    let mut out = Vec::with_capacity(left.len() * right.len());
    for a in left {
        for b in right {
            out.push((a.clone(), b.clone()));
        }
    }
    out
}

/// `n` choose `k`.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u64 = 1;
    for i in 0..k {
        acc = acc * (n - i) as u64 / (i + 1) as u64;
    }
    acc
}
