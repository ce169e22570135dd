//! models — user-facing graphical-lasso model API.
//!
//! Wraps the core solver in a configure-fit-inspect surface; see
//! [`graphical_lasso::GraphicalLassoModel`].

pub mod graphical_lasso;

pub use self::graphical_lasso::GraphicalLassoModel;
