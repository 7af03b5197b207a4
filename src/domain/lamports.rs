use serde::Serialize;
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use std::fmt;

/// Native balance in lamports. The integer is the only value used for computation;
/// `Display` renders SOL for humans without going through floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Lamports(pub u64);

impl Lamports {
    pub fn as_u64(self) -> u64 {
        self.0
    }

    pub fn to_sol_string(self) -> String {
        format!(
            "{}.{:09}",
            self.0 / LAMPORTS_PER_SOL,
            self.0 % LAMPORTS_PER_SOL
        )
    }
}

impl fmt::Display for Lamports {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} SOL", self.to_sol_string())
    }
}
