use crate::{data::patron::PatronRepository, error::store::StoreError, model::patron::PatronParam};
use test_utils::{builder::TestBuilder, factory::patron::PatronFactory};

mod delete;
mod get_all;
mod upsert;
