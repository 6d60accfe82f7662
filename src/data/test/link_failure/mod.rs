use crate::{
    data::{link_failure::LinkFailureRepository, test::at_minute},
    model::link_failure::LinkFailure,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_excluded;
mod get_failures;
mod promote_to_dead;
