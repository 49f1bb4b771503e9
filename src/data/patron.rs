use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::{error::store::StoreError, model::patron::PatronParam};

pub struct PatronRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PatronRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all patrons.
    ///
    /// # Returns
    /// - `Ok(Vec<PatronParam>)`: Every stored patron
    /// - `Err(StoreError::Unavailable)`: Database error during query
    /// - `Err(StoreError::Corrupt)`: A stored ID could not be parsed
    pub async fn get_all(&self) -> Result<Vec<PatronParam>, StoreError> {
        entity::prelude::Patron::find()
            .all(self.db)
            .await?
            .into_iter()
            .map(PatronParam::from_entity)
            .collect()
    }

    /// Adds a patron or moves an existing one to a different guild scope.
    pub async fn upsert(&self, patron: PatronParam) -> Result<(), DbErr> {
        entity::prelude::Patron::insert(entity::patron::ActiveModel {
            user_id: ActiveValue::Set(patron.user_id.to_string()),
            guild_id: ActiveValue::Set(patron.guild_id.map(|id| id.to_string())),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::patron::Column::UserId)
                .update_column(entity::patron::Column::GuildId)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Deletes a patron, returning whether a row was removed.
    pub async fn delete(&self, user_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::Patron::delete_many()
            .filter(entity::patron::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
