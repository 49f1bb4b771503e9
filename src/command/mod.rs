//! Command registry, dispatch pipeline and the built-in commands.
//!
//! A message flows through `Dispatcher::dispatch`: settings lookup, message
//! filters, prefix match, registry lookup, policy checks, then the handler.
//! Policy failures are `Rejection` values answered with a short reply;
//! handler failures are logged and answered with a generic notice.

pub mod context;
pub mod descriptor;
pub mod dispatcher;
pub mod filter;
pub mod general;
pub mod owner;
pub mod patron;
pub mod policy;
pub mod registry;
pub mod settings;

use crate::error::registry::RegistryError;

pub use context::{CommandContext, CommandHandler, Embed, MessageSink, OutboundFile};
pub use descriptor::{CommandCategory, CommandDescriptor, PermissionLevel};
pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use registry::CommandRegistry;

/// Builds the registry holding every built-in command.
pub fn builtin_registry() -> Result<CommandRegistry, RegistryError> {
    let mut registry = CommandRegistry::new();

    let descriptors = general::commands()
        .into_iter()
        .chain(settings::commands())
        .chain(patron::commands())
        .chain(owner::commands());

    for descriptor in descriptors {
        registry.register(descriptor)?;
    }

    Ok(registry)
}

#[cfg(test)]
mod test;
