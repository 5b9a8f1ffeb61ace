use crate::server::{data::registry::ServerRegistry, error::registry::RegistryError};
use test_utils::{builder::TestBuilder, fixture};

mod all;
mod contains;
mod load;
