//! CLI Exit Code Registry
//!
//! Single source of truth for all exit codes. Exit codes are part of the
//! shell contract — scripts rely on them.
//!
//! # Exit Codes
//!
//! | Code | Description                                          |
//! |------|------------------------------------------------------|
//! | 0    | Success (including an empty report)                  |
//! | 1    | General error (unspecified)                          |
//! | 2    | Usage error (bad args; clap uses this too)           |
//! | 3    | IO error (cannot read input / write output)          |
//! | 4    | Document parse error (unreadable/corrupt PDF)        |
//! | 5    | Schema validation error (catalog columns missing)    |
//! | 6    | Format decode error (malformed CSV/workbook)         |

/// Success - command completed without errors. An empty report is success.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// IO error - cannot read an input file or write the report.
pub const EXIT_IO: u8 = 3;

/// The PDF input is unreadable or corrupt.
pub const EXIT_DOCUMENT: u8 = 4;

/// The catalog lacks one or more required columns.
pub const EXIT_SCHEMA: u8 = 5;

/// The catalog file content does not match its extension.
pub const EXIT_FORMAT: u8 = 6;
