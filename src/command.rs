use std::sync::LazyLock;

use strum::{EnumString, IntoStaticStr, VariantNames};

/// The code paths a debugger can drive the inferior down.
///
/// Parsing is case-sensitive and only accepts the exact lowercase names.
#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumString, IntoStaticStr, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum Command {
    /// Sleep for [`crate::dispatch::SLEEP_DURATION`] and exit.
    Sleep,
    /// Spin forever; must be killed from the outside.
    Loop,
    /// Call `test_function` and exit.
    Function,
    /// Load through a null pointer.
    Crash,
}

impl Command {
    /// Line printed right before the command does its thing.
    pub fn marker(&self) -> &'static str {
        match self {
            Command::Sleep => "*** Sleeping for 5 seconds",
            Command::Loop => "*** Looping forever()",
            Command::Function => "*** Calling test_function()",
            Command::Crash => "*** Crashing",
        }
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// `Usage: inferior < sleep | loop | function | crash >`
pub static USAGE: LazyLock<String> =
    LazyLock::new(|| format!("Usage: inferior < {} >", Command::VARIANTS.join(" | ")));
