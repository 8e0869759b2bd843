//! Because loads of use statements is messy.

pub use std::collections::HashMap;
pub use std::sync::Arc;

pub use chrono::{DateTime, Utc};

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{json, Value};

pub use tracing::{debug, error, info, instrument, trace, warn};
pub use uuid::Uuid;

pub(crate) use crate::catalog::{ServiceKind, ServiceTemplate};
pub(crate) use crate::config::Configuration;
pub(crate) use crate::db::entities;
pub(crate) use crate::errors::Error;

pub(crate) use sea_orm::entity::prelude::*;
pub(crate) use sea_orm::DatabaseConnection;
pub(crate) use sea_orm::IntoActiveModel;

pub(crate) use schemars::JsonSchema;
