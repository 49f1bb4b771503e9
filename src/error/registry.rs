use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    /// A command name or alias is already claimed by another command.
    #[error("Command name '{name}' is already registered by '{existing}'")]
    DuplicateName { name: String, existing: String },
}
