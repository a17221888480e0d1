pub mod config;
pub mod gantt;
pub mod main_module;
pub mod metrics;
pub mod schema;
pub mod shared;
pub mod tasks;
pub mod todos;
pub mod users;

use diesel_migrations::{embed_migrations, EmbeddedMigrations};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");
