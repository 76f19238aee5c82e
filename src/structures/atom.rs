/*!
(The internal representation of) an atom, aka. a 'proposition'.

Broadly, atoms are things with a name to which assigning a (boolean) value (true or false) is of interest.
- 'Internal' atoms are used within clauses, and so during CNF conversion and resolution.
- 'External' atoms are the names used in [formulas](crate::structures::formula). \
  External atoms are a letter or underscore followed by letters, digits, or underscores. \
  Examples: `p`, `Rain`, `atom_one`, `q2`.

Each internal atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

```rust
# use belief_base::structures::atom::Atom;
let m = 97;
let atoms = (0..m).collect::<Vec<Atom>>();

assert_eq!(atoms[96], 96);
```

This representation allows atoms to be used as the indicies of a structure, e.g. a [valuation](crate::structures::valuation), without taking too much space.

# Notes
- The map between internal and external atoms is stored in the [atom database](crate::db::atom).
- Two literals are equal just in case their atoms and polarities are equal, and as the map is a bijection this is equality of names and polarities.
*/

/// An atom, aka. a 'proposition'.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = Atom::MAX - 1;
