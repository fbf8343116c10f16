use crate::server::{
    data::booking::BookingRepository,
    error::{booking::BookingError, AppError},
    model::booking::{BookingStatus, CreateBookingParams, StayRange},
};
use chrono::{Days, NaiveDate, Utc};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod cancel_if_active;
mod find_by_id_and_user;
mod get_active_ranges_by_property;
mod get_past_by_user;
mod get_upcoming_by_user;
mod unknown_status;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn stay(check_in: NaiveDate, check_out: NaiveDate) -> StayRange {
    StayRange::new(check_in, check_out).unwrap()
}
