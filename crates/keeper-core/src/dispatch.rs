//! Host-facing invocation surface
//!
//! A hosting dispatcher selects an operation by name and supplies
//! positional string arguments. Both invoke entry points route through the
//! same function table, argument counts are validated before any ledger
//! access, and outcomes are encoded to their wire form only here: a single
//! status byte (`0x01` found/mutated, `0x00` not-found/no-op), or an empty
//! payload for operations with no meaningful return.

use crate::error::{RegistryError, Result};
use crate::ledger::Ledger;
use crate::registry::{MembershipRegistry, MembershipResult};

/// Wire encoding of a membership outcome.
fn payload(result: MembershipResult) -> Vec<u8> {
    match result {
        MembershipResult::Added | MembershipResult::Found => vec![1],
        MembershipResult::NoOp | MembershipResult::NotFound => vec![0],
    }
}

fn expect_one(args: &[String]) -> Result<&str> {
    match args {
        [a] => Ok(a.as_str()),
        _ => Err(RegistryError::ArgumentCount {
            expected: 1,
            actual: args.len(),
        }),
    }
}

fn expect_two(args: &[String]) -> Result<(&str, &str)> {
    match args {
        [a, b] => Ok((a.as_str(), b.as_str())),
        _ => Err(RegistryError::ArgumentCount {
            expected: 2,
            actual: args.len(),
        }),
    }
}

impl<L: Ledger> MembershipRegistry<L> {
    /// Deployment entry point: writes the empty record.
    ///
    /// The function name and arguments are ignored; the legacy
    /// single-argument form is accepted but has no effect.
    pub fn init(&self, _function: &str, _args: &[String]) -> Result<Vec<u8>> {
        self.initialize()?;
        Ok(Vec::new())
    }

    /// Primary invocation entry point.
    pub fn invoke(&self, function: &str, args: &[String]) -> Result<Vec<u8>> {
        self.route(function, args)
    }

    /// Legacy invocation entry point, kept for older hosts.
    ///
    /// Identical to [`invoke`](Self::invoke): both delegate to the same
    /// routing function.
    pub fn run(&self, function: &str, args: &[String]) -> Result<Vec<u8>> {
        self.route(function, args)
    }

    /// Query entry point. The function selector must be `"query"`.
    pub fn query(&self, function: &str, args: &[String]) -> Result<Vec<u8>> {
        if function != "query" {
            return Err(RegistryError::InvalidFunction(function.to_string()));
        }
        let (hash, user) = expect_two(args)?;
        Ok(payload(self.query_membership(hash, user)?))
    }

    /// Route an invocation by exact function name.
    fn route(&self, function: &str, args: &[String]) -> Result<Vec<u8>> {
        match function {
            "invoke" => {
                let (hash, user) = expect_two(args)?;
                Ok(payload(self.record_membership(hash, user)?))
            }
            "init" => {
                self.initialize()?;
                Ok(Vec::new())
            }
            "delete" => {
                let key = expect_one(args)?;
                self.delete_key(key)?;
                Ok(Vec::new())
            }
            other => Err(RegistryError::UnknownFunction(other.to_string())),
        }
    }
}
