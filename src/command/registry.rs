use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use crate::{command::descriptor::CommandDescriptor, error::registry::RegistryError};

/// Lookup table from every command name and alias to its descriptor.
///
/// Built once before the gateway connects, then shared behind an `Arc`.
/// Nothing can be registered through a shared reference, so the table is
/// read without locking.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    /// Descriptors in registration order, for help listings.
    commands: Vec<Arc<CommandDescriptor>>,
    lookup: HashMap<String, Arc<CommandDescriptor>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a command under its name and every alias.
    ///
    /// Nothing is added when any of those keys is already taken, including by
    /// the descriptor's own name or another of its aliases.
    ///
    /// # Returns
    /// - `Ok(())` - Every key was free and is now mapped to the descriptor
    /// - `Err(RegistryError::DuplicateName)` - A key is already registered
    pub fn register(&mut self, descriptor: CommandDescriptor) -> Result<(), RegistryError> {
        let mut keys = HashSet::new();

        let names = std::iter::once(descriptor.name())
            .chain(descriptor.aliases().iter().map(String::as_str));

        for key in names {
            if let Some(existing) = self.lookup.get(key) {
                return Err(RegistryError::DuplicateName {
                    name: key.to_string(),
                    existing: existing.name().to_string(),
                });
            }
            if !keys.insert(key.to_string()) {
                return Err(RegistryError::DuplicateName {
                    name: key.to_string(),
                    existing: descriptor.name().to_string(),
                });
            }
        }

        let descriptor = Arc::new(descriptor);
        for key in keys {
            self.lookup.insert(key, descriptor.clone());
        }
        self.commands.push(descriptor);

        Ok(())
    }

    /// Finds the command for a name or alias, ignoring case.
    pub fn resolve(&self, token: &str) -> Option<&Arc<CommandDescriptor>> {
        match self.lookup.get(token) {
            Some(descriptor) => Some(descriptor),
            None => self.lookup.get(&token.to_lowercase()),
        }
    }

    pub fn commands(&self) -> &[Arc<CommandDescriptor>] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
