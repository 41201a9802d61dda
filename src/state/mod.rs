//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `forms`, `menus`) so individual
//! components can depend on small focused models. The session store is
//! application-wide and provided via context; form and menu state is
//! owned by the component that mounts it.

pub mod forms;
pub mod menus;
pub mod session;
