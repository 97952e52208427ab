use crate::data::vehicle::VehicleRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
