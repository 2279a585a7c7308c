/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

So, the atoms of a context are [0..*m*) for the count *m* of atoms fixed when the context is made.

```rust
# use otter_kernel::structures::atom::Atom;
let m = 97;
let atoms = (0..m).collect::<Vec<Atom>>();
assert_eq!(atoms.len(), 97);
```

This representation allows atoms to be used as the indicies of a structure, e.g. the value of atom *a* is `valuation[a]`.

# Notes
- In DIMACS input atoms are written from 1, and so DIMACS variable *n* is atom *n - 1*.
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// A context has at most `ATOM_MAX + 1` atoms, so the DIMACS integer of any literal of a context fits an [i32].
pub const ATOM_MAX: Atom = u32::MAX >> 1;
