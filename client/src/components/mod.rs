//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, dialogs, and notifications for the pages. They
//! receive state signals and callbacks as props; only `NoticeTray` reads
//! shared context.

pub mod appointment_card;
pub mod confirm_dialog;
pub mod notice_tray;
pub mod reschedule_dialog;
pub mod treatment_list;
