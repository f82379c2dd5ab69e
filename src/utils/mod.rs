pub mod colors;
pub mod date;
pub mod formatting;
pub mod table;
pub mod time;

// Re-export per compatibilità con il vecchio codice
pub use formatting::describe_window;
