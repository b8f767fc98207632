//! This module contains configuration options. In general, the configuration
//! options impact presentation only; arithmetic is unaffected. The default
//! configuration matches the canonical textual format of polynomials.
//!
//! Configuration options can also be set via environment variables.
//! Generally, the environment variables take precedence over the options set
//! in this module.

use std::cell::RefCell;

use arbitrary::Arbitrary;

thread_local! {
    static CONFIG: RefCell<Config> = RefCell::new(Config::new());
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
struct Config {
    pub indeterminate: Indeterminate,
}

impl Config {
    fn new() -> Self {
        let indeterminate = Indeterminate::new(None);

        Self { indeterminate }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
struct Indeterminate(char);

impl Indeterminate {
    const ENV_VAR: &'static str = "POLYRING_INDETERMINATE";
    const DEFAULT: char = 'x';

    /// Creates a new `Indeterminate` with the given symbol.
    /// Respects the precedence of the environment variable if set. Uses the
    /// default if no symbol is provided.
    fn new(config_value: Option<char>) -> Self {
        let symbol = std::env::var(Self::ENV_VAR)
            .ok()
            .and_then(|s| s.chars().next())
            .or(config_value)
            .unwrap_or(Self::DEFAULT);

        Self(symbol)
    }
}

/// Sets the symbol used for the indeterminate when displaying a
/// [`Polynomial`](crate::prelude::Polynomial).
///
/// Can also be set via the environment variable `POLYRING_INDETERMINATE`; only
/// its first character is used. The environment variable has higher precedence
/// than this function.
///
/// The default is `x`. The setting is local to the current thread.
pub fn set_indeterminate(symbol: char) {
    let indeterminate = Indeterminate::new(Some(symbol));
    CONFIG.with(|c| c.borrow_mut().indeterminate = indeterminate);
}

pub(crate) fn indeterminate() -> char {
    CONFIG.with(|c| c.borrow().indeterminate).0
}
