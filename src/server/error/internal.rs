use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A booking row carries a status outside `active`, `completed`, `cancelled`.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Booking {booking_id} has unknown status '{value}'")]
    UnknownBookingStatus {
        /// The booking row id
        booking_id: i32,
        /// The stored status value
        value: String,
    },

    /// A stored booking has check-out before check-in.
    #[error("Booking {booking_id} has check-out before check-in")]
    InvertedBookingRange {
        /// The booking row id
        booking_id: i32,
    },
}
