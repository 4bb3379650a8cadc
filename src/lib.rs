pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod pickups;
pub mod routes;
pub mod state;
pub mod views;

#[cfg(test)]
pub(crate) mod test_utils;
