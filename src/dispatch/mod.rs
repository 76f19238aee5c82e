/*!
Dispatches for external observers.

Dispatches have two uses:
- Communication after some procedure, e.g. whether a formula was entailed.
- Optional observation of the revision of a base, e.g. which formulas were kept after a contraction.

Each dispatch is a small message of some pre-determined type, and is sent through the (optional) dispatcher given to a [belief base](crate::base::BeliefBase).
Dispatches are structured, and any human readable rendering of a dispatch is left to the receiver.

- [library] contains all dispatch types, arranged in a fixed heirarchy.

Dispatches come in a variety of types;

- [Deltas](crate::dispatch::library::delta), on some change to a base.
  - For example:
    - Addition and removal of formulas.
    - The remainder kept after a contraction.
- [Reports](crate::dispatch::library::report), on the result of some procedure.
  - For example, whether a formula is entailed.
- [Stats](crate::dispatch::library::stat), regarding various things.
  - For example, the number of resolvents derived while checking entailment.
  - Stats are sent once, at the end of an operation on a base, rather than for each saturation made during the operation.

As the name of a type of dispatch may conflict with, e.g., the name of the structure the dispatch is related to, dispatch creation is designed to be made relative to the module of the type of dispatch.

```ignore
let delta = delta::BeliefBase::Added(formula, priority);
dispatcher(Dispatch::Delta(Delta::BeliefBase(delta)));
```

# Examples

Collecting every dispatch from a base.

```rust
# use belief_base::base::BeliefBase;
# use belief_base::config::Config;
# use belief_base::dispatch::{Dispatch, library::delta::{self, Delta}};
# use belief_base::structures::formula::Formula;
# use std::{cell::RefCell, rc::Rc};
let dispatches = Rc::new(RefCell::new(Vec::new()));
let sink = dispatches.clone();

let mut base = BeliefBase::from_config(
    Config::default(),
    Some(Rc::new(move |dispatch: Dispatch| sink.borrow_mut().push(dispatch))),
);

let p: Formula = "p".parse().unwrap();
assert!(base.expansion(&p).is_ok());
assert!(base.expansion(&p).is_ok());

let received = dispatches.borrow();
assert!(matches!(
    received.last(),
    Some(Dispatch::Delta(Delta::BeliefBase(delta::BeliefBase::Duplicate(_))))
));
```
*/

pub mod library;

use library::{delta::Delta, report::Report, stat::Stat};

/// Dispatch types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// A delta. E.g. that a formula was added to the base.
    Delta(Delta),

    /// A report. E.g. that a formula is entailed.
    Report(Report),

    /// A stat. E.g. the count of subsets examined during a contraction.
    Stat(Stat),
}
