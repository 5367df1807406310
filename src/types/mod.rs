// src/types/mod.rs
//
// Value types. `Fraction` is the only one: a non-negative rational number
// that is always reduced.
//
// | construction     | stored | rendered |
// |------------------|--------|----------|
// | new(2, 6)        | 1/3    | 1/3      |
// | from_integer(3)  | 3/1    | 3/1      |
// | new(0, 9)        | 0/1    | 0/1      |
// | new(1, 0)        | error: zero denominator |

pub mod fraction;
pub mod display;
