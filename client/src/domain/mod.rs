//! Domain model for the reporting client.
//!
//! Purpose: define the issue model, the report workflow and the supporting
//! views (map, squads, leaderboards, wallet) without binding to any platform.
//! External collaborators are reached through the traits in [`ports`].

pub mod intro_gate;
pub mod issue;
pub mod issue_store;
pub mod leaderboard;
pub mod map;
pub mod ports;
pub mod relative_time;
pub mod report_workflow;
pub mod squads;
pub mod wallet;

pub use self::intro_gate::IntroGate;
pub use self::issue::{
    Category, CategoryDetails, CategoryParseError, Coordinates, CoordinatesValidationError, Issue,
    IssueDraft, IssueId, IssueStatus, LOCAL_REPORTER, Photo, PhotoError, PhotoPayload,
};
pub use self::issue_store::{IssueFilter, IssueStore};
pub use self::leaderboard::{Leaderboard, LeaderboardEntry, Ranked, SquadStanding, Standing};
pub use self::map::{DEFAULT_ZOOM, MapController, MapError, MapMarker, markers};
pub use self::relative_time::time_ago;
pub use self::report_workflow::{
    FALLBACK_LOCATION_NOTICE, ReportReceipt, ReportWorkflow, WorkflowAction, WorkflowError,
    WorkflowStage,
};
pub use self::squads::{Squad, SquadError, SquadId, SquadRoster};
pub use self::wallet::{
    AccountAddress, BalanceDisplay, ConnectionStatus, LAMPORTS_PER_SOL, Lamports, WalletMessage,
};
