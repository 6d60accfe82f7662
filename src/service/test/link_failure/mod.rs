use crate::{error::AppError, service::link_failure::LinkFailureService};
use test_utils::{builder::TestBuilder, factory};

mod exclusion;
mod record_dead;
