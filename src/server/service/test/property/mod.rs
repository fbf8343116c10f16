use crate::server::{error::AppError, service::property::PropertyService};
use test_utils::{builder::TestBuilder, factory};
