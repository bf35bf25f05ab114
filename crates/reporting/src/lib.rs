//! `facturas-reporting` — the invoice report pipeline.
//!
//! Turns the stored invoice sequence into a paginated PDF, persists the
//! rendered artifact, and hands the exact persisted bytes to the delivery
//! boundary. Split into:
//! - [`layout`]: pure pagination model (no rendering dependencies),
//! - [`renderer`]: PDF emission from the layout,
//! - [`writer`]: artifact persistence,
//! - [`orchestrator`]: fetch → render → persist → deliver sequencing and
//!   unified failure handling.

pub mod error;
pub mod layout;
pub mod orchestrator;
mod pdf;
pub mod renderer;
pub mod writer;

pub use error::{PersistError, RenderError, ReportError};
pub use layout::{HorizontalAlignment, LayoutOptions, ReportLayout};
pub use orchestrator::{ReportDelivery, ReportOrchestrator, ReportStage, REPORT_DOWNLOAD_FILENAME};
pub use renderer::{DocumentRenderer, RenderedReport};
pub use writer::{PersistedArtifact, ReportWriter};
