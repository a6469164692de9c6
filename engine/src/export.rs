//! CSV export of the spin history.
//!
//! Columns: timestamp, reels, bet, win, balance_after, message. Rows are
//! most recent first, timestamps rendered as "YYYY-MM-DD HH:MM:SS" in UTC,
//! output is UTF-8 with a header row.

use std::io;

use thiserror::Error;

use reelhouse_types::SessionState;

/// Timestamp layout used in exports and history listings.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("flush failed: {0}")]
    Io(#[from] io::Error),
}

/// Write the session history as CSV, header first, most recent spin first.
pub fn write_history_csv<W: io::Write>(
    session: &SessionState,
    writer: W,
) -> Result<(), ExportError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["timestamp", "reels", "bet", "win", "balance_after", "message"])?;
    for record in &session.history {
        let timestamp = record.timestamp.format(TIMESTAMP_FORMAT).to_string();
        let reels = record.reels.to_string();
        out.write_record([
            timestamp.as_str(),
            reels.as_str(),
            record.bet.to_string().as_str(),
            record.win.to_string().as_str(),
            record.balance_after.to_string().as_str(),
            record.message.as_str(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Render the export in memory, for front-ends that offer it as a download.
pub fn history_csv_string(session: &SessionState) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_history_csv(session, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
