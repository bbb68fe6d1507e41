//! Workload generation for growarray benchmarks.
//!
//! Provides deterministic operation streams so every benchmark run (and
//! every test) sees the same sequence for a given seed:
//!
//! - [`mixed_workload`]: push/pop/insert/remove mix driven by a seeded LCG
//! - [`apply`]: replay a stream against a [`GrowableArray`]

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use growarray::GrowableArray;

/// One step of a generated workload.
///
/// Positions are stored as raw draws and reduced against the array length
/// at replay time, so every step is valid whatever came before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Append the value.
    Push(u64),
    /// Remove the last element (skipped when empty).
    Pop,
    /// Insert the value at `draw % (len + 1)`.
    Insert {
        /// Raw position draw.
        draw: u64,
        /// Value to insert.
        value: u64,
    },
    /// Remove at `draw % len` (skipped when empty).
    Remove {
        /// Raw position draw.
        draw: u64,
    },
}

/// Knuth MMIX LCG step.
fn next(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state >> 33
}

/// Generate `n` operations from `seed`.
///
/// Roughly half the operations are pushes so the array tends to grow over
/// the run; the rest split evenly between pop, insert and remove.
pub fn mixed_workload(seed: u64, n: usize) -> Vec<Op> {
    let mut state = seed;
    let mut ops = Vec::with_capacity(n);
    for _ in 0..n {
        let op = match next(&mut state) % 6 {
            0..=2 => Op::Push(next(&mut state)),
            3 => Op::Pop,
            4 => Op::Insert {
                draw: next(&mut state),
                value: next(&mut state),
            },
            _ => Op::Remove {
                draw: next(&mut state),
            },
        };
        ops.push(op);
    }
    ops
}

/// Replay `ops` against `arr`.
pub fn apply(arr: &mut GrowableArray<u64>, ops: &[Op]) {
    for op in ops {
        match *op {
            Op::Push(value) => arr.push(value),
            Op::Pop => {
                if !arr.is_empty() {
                    arr.pop();
                }
            }
            Op::Insert { draw, value } => {
                let index = (draw % (arr.len() as u64 + 1)) as usize;
                arr.insert(index, value);
            }
            Op::Remove { draw } => {
                if !arr.is_empty() {
                    let index = (draw % arr.len() as u64) as usize;
                    arr.remove(index);
                }
            }
        }
    }
}

/// Build an array holding `0..n` by repeated push from capacity 1.
pub fn filled(n: u64) -> GrowableArray<u64> {
    (0..n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workload_is_deterministic() {
        assert_eq!(mixed_workload(42, 500), mixed_workload(42, 500));
        assert_ne!(mixed_workload(42, 500), mixed_workload(43, 500));
    }

    #[test]
    fn replay_matches_vec_model() {
        let ops = mixed_workload(7, 2_000);
        let mut arr = GrowableArray::new();
        apply(&mut arr, &ops);

        let mut model: Vec<u64> = Vec::new();
        for op in &ops {
            match *op {
                Op::Push(v) => model.push(v),
                Op::Pop => {
                    model.pop();
                }
                Op::Insert { draw, value } => {
                    let i = (draw % (model.len() as u64 + 1)) as usize;
                    model.insert(i, value);
                }
                Op::Remove { draw } => {
                    if !model.is_empty() {
                        let i = (draw % model.len() as u64) as usize;
                        model.remove(i);
                    }
                }
            }
        }
        assert_eq!(arr.as_slice(), model.as_slice());
        assert!(arr.capacity().is_power_of_two());
        assert!(arr.capacity() >= arr.len());
    }

    #[test]
    fn filled_has_power_of_two_capacity() {
        let arr = filled(1_000);
        assert_eq!(arr.len(), 1_000);
        assert_eq!(arr.capacity(), 1_024);
    }
}
