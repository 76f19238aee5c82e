/*!
An iterator over the *k* element subsets of [0..*n*), as sorted index vectors in lexicographic order.

```rust
# use belief_base::generic::combinations::Combinations;
let pairs = Combinations::new(4, 2).collect::<Vec<_>>();

assert_eq!(
    pairs,
    vec![vec![0, 1], vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3], vec![2, 3]]
);
```

The order is fixed, and so any choice made by taking the first of some subsets is deterministic.
*/

/// Foundation of the iterator.
pub struct Combinations {
    n: usize,
    indicies: Vec<usize>,
    exhausted: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Combinations {
            n,
            indicies: (0..k).collect(),
            exhausted: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let current = self.indicies.clone();

        // Advance the rightmost index which has room to move, and reset those after it.
        let k = self.indicies.len();
        let mut position = k;
        loop {
            if position == 0 {
                self.exhausted = true;
                break;
            }
            position -= 1;
            if self.indicies[position] < self.n - k + position {
                self.indicies[position] += 1;
                for later in position + 1..k {
                    self.indicies[later] = self.indicies[later - 1] + 1;
                }
                break;
            }
        }

        Some(current)
    }
}
