//! Decision logic for the admin web shell, kept free of any DOM or network
//! access so the browser glue crate stays thin and this crate tests natively.
//!
//! The shell crate feeds these types with decoded responses and DOM events
//! and applies the returned directives; nothing here schedules, fetches, or
//! mutates anything.

pub mod config;
pub mod fragment;
pub mod navbar;
pub mod poller;
pub mod registry;
pub mod selection;
pub mod spinner;
pub mod toast;

pub use config::{AttributePollerSpec, MenuSpec, PollerConfigError, ShellConfig};
pub use fragment::{FragmentCache, FragmentDirective, FragmentPayload};
pub use poller::{AttributeDirective, PollError, attribute_directive};
pub use registry::{CallbackRegistry, RegistryError};
pub use selection::{SelectionState, SelectionUpdate, merge_multi_object_fields};
pub use spinner::SpinnerState;
pub use toast::{ServerMessage, ToastSeverity, decode_messages, display_timeout_ms};
