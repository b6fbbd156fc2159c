//! The execution collaborator boundary.

use crate::command::ParsedInvocation;
use crate::error::ExecError;

/// Carries out a recognized command.
///
/// The interpreter stops at grammar recognition; everything that
/// actually touches the networking subsystem lives behind this trait.
/// Implementations receive the full invocation (command plus family
/// filter) and return whatever output should reach the user.
pub trait Execute {
    fn execute(&mut self, invocation: &ParsedInvocation) -> Result<String, ExecError>;
}

impl<F> Execute for F
where
    F: FnMut(&ParsedInvocation) -> Result<String, ExecError>,
{
    fn execute(&mut self, invocation: &ParsedInvocation) -> Result<String, ExecError> {
        self(invocation)
    }
}
