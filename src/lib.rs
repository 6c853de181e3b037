//! # create-mern
//!
//! Command-line tool that scaffolds MERN-stack projects.
//!
//! `create-mern <project-name> [mode]` creates the project directory and
//! generates one or both halves of the stack:
//!
//! | Mode | Result |
//! |------|--------|
//! | `backend` | Express + Mongoose API skeleton under `backend/` |
//! | `frontend` | React/Vite app with Tailwind under `frontend/` |
//! | `full` (default) | Both, backend first |
//!
//! ## Architecture
//!
//! - [`commands::new_project`] — argument validation, collision check, mode dispatch
//! - [`commands::backend`] — Express/Mongoose generator
//! - [`commands::frontend`] — Vite/React/Tailwind generator
//! - [`commands::templates`] — contents of the generated files
//! - [`exec`] — subprocess capability ([`exec::CommandRunner`]) and the real runner
//! - [`error`] — error taxonomy and exit-code mapping

pub mod commands;
pub mod error;
pub mod exec;
