use fractic_server_error::{define_client_error, define_internal_error};

use crate::entities::{TeacherId, WizardStep};

// Parsing-related.
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidAmount, "Invalid payment amount: {amount}.", { amount: f64 });

// Roster-related.
define_client_error!(TeacherNotFound, "No teacher found with id {id}.", { id: &TeacherId });

// Payment-related.
define_client_error!(
    WizardStepMismatch,
    "Payment wizard is at the '{actual}' step, but this action requires the '{expected}' step.",
    { expected: &WizardStep, actual: &WizardStep }
);
define_internal_error!(
    ClockBeforeEpoch,
    "System clock reports a time before the Unix epoch; cannot generate a transaction id."
);
