use crate::{
    error::AppError,
    model::song::SongFilter,
    service::{catalog::SongCatalogService, link_failure::LinkFailureService},
};
use test_utils::{builder::TestBuilder, factory};
