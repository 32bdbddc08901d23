//! Domain types and logic shared by the stipend dashboards.
//!
//! Everything here is free of browser dependencies so it can be unit tested
//! natively; the `frontend` crate only renders what these modules compute.

pub mod config;
pub mod format;
pub mod gateway;
pub mod navigation;
pub mod notification;
pub mod progress;
pub mod repository;
pub mod samples;
pub mod stipend;
pub mod totals;
pub mod validation;
pub mod wallet;
pub mod workflow;

pub use config::DashboardConfig;
pub use format::{format_amount, format_date_time, format_relative, truncate_address};
pub use gateway::{GatewayError, StipendGateway};
pub use navigation::{is_active, NavItem, NAV_ITEMS};
pub use notification::{Notification, NotificationKind};
pub use progress::{ProgressLabel, ProgressReading};
pub use repository::{InMemoryStipendRepository, StipendRepository};
pub use stipend::{StipendRecord, StipendStatus, UNSPECIFIED_CATEGORY};
pub use totals::StipendTotals;
pub use validation::{AssignForm, AssignRequest, AssignValidationError};
pub use wallet::{WalletConnectResponse, WalletConnection, WalletError, WalletSession};
pub use workflow::{StipendWorkflow, WorkflowError};

/// Board type used by both dashboards
pub type StipendBoard = StipendWorkflow<InMemoryStipendRepository>;
