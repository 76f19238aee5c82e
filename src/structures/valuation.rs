/*!
A (partial) function from atoms to truth values.

If all atoms are assigned a value the valuation is 'full', otherwise the valuation is 'partial'.

The canonical representation of a valuation is a vector of optional booleans, where each index of the vector is interpreted as an atom.
In other words, the canonical representation of a valuation 𝐯 is a vector *v* such that:
-  *v*\[a\] = Some(true) *if any only if* 𝐯(𝐚) = true.
-  *v*\[a\] = Some(false) *if any only if* 𝐯(𝐚) = false.
-  *v*\[a\] = None *if any only if* 𝐯(𝐚) is undefined.

Atoms outside of the vector are undefined.

```rust
# use belief_base::structures::valuation::Valuation;
let valuation = vec![Some(true), None, Some(false)];

assert_eq!(valuation.value_of(0), Some(true));
assert_eq!(valuation.value_of(1), None);
assert_eq!(valuation.value_of(7), None);
```
*/

use super::atom::Atom;

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of a atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// The value of an atom under the valuation, if any.
    fn value_of(&self, atom: Atom) -> Option<bool>;
}

impl Valuation for [Option<bool>] {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied().flatten()
    }
}

impl Valuation for CValuation {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.as_slice().value_of(atom)
    }
}
