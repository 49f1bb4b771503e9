use std::{
    collections::{HashMap, HashSet},
    sync::RwLock,
};

use sea_orm::DatabaseConnection;

use crate::{data::patron::PatronRepository, error::store::StoreError, model::patron::PatronParam};

#[derive(Debug, Default)]
struct Patrons {
    global: HashSet<u64>,
    /// One-guild patrons: user ID to the guild they support.
    guild: HashMap<u64, u64>,
}

/// In-memory view of the patron table.
///
/// Lookups happen on every patron-gated command, reloads every few minutes,
/// so a plain `RwLock` is enough. The lock is never held across an await.
#[derive(Debug, Default)]
pub struct PatronRegistry {
    inner: RwLock<Patrons>,
}

impl PatronRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every entry with `patrons`.
    pub fn replace_all(&self, patrons: Vec<PatronParam>) {
        let mut next = Patrons::default();
        for patron in patrons {
            match patron.guild_id {
                Some(guild_id) => {
                    next.guild.insert(patron.user_id, guild_id);
                }
                None => {
                    next.global.insert(patron.user_id);
                }
            }
        }

        match self.inner.write() {
            Ok(mut inner) => *inner = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }

    pub fn insert(&self, patron: PatronParam) {
        let mut inner = match self.inner.write() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };

        inner.global.remove(&patron.user_id);
        inner.guild.remove(&patron.user_id);
        match patron.guild_id {
            Some(guild_id) => {
                inner.guild.insert(patron.user_id, guild_id);
            }
            None => {
                inner.global.insert(patron.user_id);
            }
        }
    }

    pub fn remove(&self, user_id: u64) {
        let mut inner = match self.inner.write() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };

        inner.global.remove(&user_id);
        inner.guild.remove(&user_id);
    }

    /// Whether the user is a global patron or any patron supports this guild.
    pub fn is_user_or_guild_patron(&self, user_id: u64, guild_id: u64) -> bool {
        let inner = match self.inner.read() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };

        inner.global.contains(&user_id) || inner.guild.values().any(|g| *g == guild_id)
    }

    pub fn len(&self) -> usize {
        let inner = match self.inner.read() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };

        inner.global.len() + inner.guild.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keeps the patron table and the in-memory registry in step.
pub struct PatronService<'a> {
    db: &'a DatabaseConnection,
    patrons: &'a PatronRegistry,
}

impl<'a> PatronService<'a> {
    pub fn new(db: &'a DatabaseConnection, patrons: &'a PatronRegistry) -> Self {
        Self { db, patrons }
    }

    /// Reloads the registry from the database, returning the patron count.
    pub async fn reload(&self) -> Result<usize, StoreError> {
        let patrons = PatronRepository::new(self.db).get_all().await?;
        let count = patrons.len();

        self.patrons.replace_all(patrons);

        Ok(count)
    }

    /// Stores a patron, then makes it visible to lookups.
    pub async fn add(&self, patron: PatronParam) -> Result<(), StoreError> {
        PatronRepository::new(self.db).upsert(patron).await?;
        self.patrons.insert(patron);

        Ok(())
    }

    /// Removes a patron, returning whether one was stored.
    pub async fn remove(&self, user_id: u64) -> Result<bool, StoreError> {
        let removed = PatronRepository::new(self.db).delete(user_id).await?;
        self.patrons.remove(user_id);

        Ok(removed)
    }
}
