/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

For the moment, this is the (bijective) map between the external names of atoms and internal [Atom]s.
- Internal atoms are handed out in order of first appearance, from 0.
- An atom, once named, is never forgotten. So, the internal representation of a clause is stable across revisions of a base.

```rust
# use belief_base::db::atom::AtomDB;
let mut atom_db = AtomDB::default();

let p = atom_db.atom_or_fresh("p").unwrap();
let q = atom_db.atom_or_fresh("q").unwrap();

assert_eq!(atom_db.atom_or_fresh("p"), Ok(p));
assert_eq!(atom_db.atom_of("q"), Some(q));
assert_eq!(atom_db.name_of(p), Some("p"));
assert_eq!(atom_db.count(), 2);
```
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The atom database.
#[derive(Clone, Debug, Default)]
pub struct AtomDB {
    /// External names, indexed by internal atoms.
    names: Vec<String>,

    /// Internal atoms, indexed by external names.
    atoms: HashMap<String, Atom>,
}

impl AtomDB {
    /// A count of atoms in the [AtomDB].
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// The internal atom for `name`, if `name` has been seen.
    pub fn atom_of(&self, name: &str) -> Option<Atom> {
        self.atoms.get(name).copied()
    }

    /// The external name of `atom`, if `atom` is known.
    pub fn name_of(&self, atom: Atom) -> Option<&str> {
        self.names.get(atom as usize).map(|name| name.as_str())
    }

    /// The internal atom for `name`, with a fresh atom made for `name` if `name` has not been seen.
    pub fn atom_or_fresh(&mut self, name: &str) -> Result<Atom, err::AtomDBError> {
        if let Some(atom) = self.atoms.get(name) {
            return Ok(*atom);
        }

        let atom = match Atom::try_from(self.names.len()) {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => return Err(err::AtomDBError::AtomsExhausted),
        };

        log::trace!(target: targets::BELIEF_BASE, "Fresh atom {atom} for {name}");
        self.names.push(name.to_owned());
        self.atoms.insert(name.to_owned(), atom);
        Ok(atom)
    }

    /// A string representation of `literal` using the external name of the atom of the literal.
    pub fn literal_string(&self, literal: CLiteral) -> String {
        let name = match self.name_of(literal.atom()) {
            Some(name) => name.to_owned(),
            None => format!("#{}", literal.atom()),
        };
        match literal.polarity() {
            true => name,
            false => format!("¬{name}"),
        }
    }

    /// A string representation of `clause` using external names, with `⊥` for the empty clause.
    ///
    /// ```rust
    /// # use belief_base::db::atom::AtomDB;
    /// # use belief_base::structures::literal::{CLiteral, Literal};
    /// let mut atom_db = AtomDB::default();
    /// let p = atom_db.atom_or_fresh("p").unwrap();
    /// let q = atom_db.atom_or_fresh("q").unwrap();
    ///
    /// let clause = vec![CLiteral::new(p, false), CLiteral::new(q, true)];
    /// assert_eq!(atom_db.clause_string(&clause), "¬p ∨ q");
    /// assert_eq!(atom_db.clause_string(&vec![]), "⊥");
    /// ```
    pub fn clause_string(&self, clause: &CClause) -> String {
        match clause.is_empty() {
            true => "⊥".to_owned(),
            false => clause
                .iter()
                .map(|literal| self.literal_string(*literal))
                .collect::<Vec<_>>()
                .join(" ∨ "),
        }
    }
}
