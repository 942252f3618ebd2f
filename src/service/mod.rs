//! Game logic.
//!
//! - **Roll** (`roll`) - Random draws and running highest/lowest tracking
//! - **Table** (`table`) - Standings table rendering
//! - **Game** (`game/`) - Session state machine, effects and their interpreter

pub mod game;
pub mod roll;
pub mod table;
