use crate::{
    data::{bookmark::BookmarkRepository, test::at_minute},
    error::AppError,
    model::bookmark::UpsertBookmarkParam,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_by_user;

fn param(user_id: u64, vlink: &str, minute: i64) -> UpsertBookmarkParam {
    UpsertBookmarkParam {
        user_id,
        vlink: vlink.to_string(),
        bookmarked_at: at_minute(minute),
    }
}
