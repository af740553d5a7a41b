use recursion_schemes::{Collapsible, Either, Expandable, PartiallyApplied};

/// Natural number, taken apart as `Some(n - 1)` down to `None` at zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Nat(pub u64);

impl Collapsible for Nat {
    type FrameToken = Option<PartiallyApplied>;

    #[inline(always)]
    fn into_frame(self) -> Option<Self> {
        self.0.checked_sub(1).map(Nat)
    }
}

impl Expandable for Nat {
    type FrameToken = Option<PartiallyApplied>;

    fn from_frame(val: Option<Self>) -> Self {
        match val {
            Some(Nat(n)) => Nat(n + 1),
            None => Nat(0),
        }
    }
}

/// algebra: count the layers, ie recover the number
pub fn count(frame: Option<u64>) -> u64 {
    match frame {
        Some(n) => n + 1,
        None => 0,
    }
}

/// r-algebra: `n! = n * (n - 1)!`, with `n - 1` read off the original child
pub fn factorial(frame: Option<(Nat, u64)>) -> u64 {
    match frame {
        Some((Nat(pred), acc)) => (pred + 1) * acc,
        None => 1,
    }
}

/// Result of a linear search over the naturals: each layer records the value it
/// visited and passes the eventual answer through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Found(pub u64);

impl Expandable for Found {
    type FrameToken = (u64, PartiallyApplied);

    fn from_frame((_visited, found): (u64, Self)) -> Self {
        found
    }
}

/// r-coalgebra: visit `seed`, then either stop at `seed + 1` if it satisfies `stop`
/// or continue searching from it
pub fn find_nat(stop: impl Fn(u64) -> bool) -> impl Fn(u64) -> (u64, Either<Found, u64>) {
    move |seed| {
        let next = seed + 1;
        if stop(next) {
            (seed, Either::Left(Found(next)))
        } else {
            (seed, Either::Right(next))
        }
    }
}

pub fn is_perfect_square(n: u64) -> bool {
    let root = (n as f64).sqrt() as u64;
    (root.saturating_sub(1)..=root.saturating_add(1)).any(|r| r.checked_mul(r) == Some(n))
}
