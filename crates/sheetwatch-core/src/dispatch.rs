//! The send decision table.
//!
//! `plan_sends` is pure data-in data-out; the binary executes the returned
//! plan against the push transport, one send at a time.

use crate::message::error_notice_body;
use crate::pipeline::RunOutcome;

/// Who a planned notification goes to. The executor maps this to the
/// matching access credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    Primary,
    Admin,
}

/// One notification the dispatcher decided to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedSend {
    pub recipient: Recipient,
    pub title: String,
    pub body: String,
}

/// Maps one run's outcome to the set of notifications to deliver, in
/// precedence order:
///
/// 1. any recorded stage error: exactly one admin send enumerating every
///    error, all other variants suppressed;
/// 2. a detection: the combined message to the primary recipient, mirrored
///    to the admin (title marked `ADMIN COPY`) when `admin_copy_msg` is set;
/// 3. nothing detected: the placeholder body to the admin (title marked
///    `ADMIN MESSAGE`) when `admin_all_copy_mode` is set;
/// 4. otherwise nothing.
#[must_use]
pub fn plan_sends(
    outcome: &RunOutcome,
    admin_copy_msg: bool,
    admin_all_copy_mode: bool,
) -> Vec<PlannedSend> {
    if outcome.error_detected() {
        return vec![PlannedSend {
            recipient: Recipient::Admin,
            title: outcome.title.clone(),
            body: error_notice_body(&outcome.errors),
        }];
    }

    if outcome.message_exists() {
        let mut sends = vec![PlannedSend {
            recipient: Recipient::Primary,
            title: outcome.title.clone(),
            body: outcome.body.clone(),
        }];
        if admin_copy_msg {
            sends.push(PlannedSend {
                recipient: Recipient::Admin,
                title: format!("{} | ADMIN COPY", outcome.title),
                body: outcome.body.clone(),
            });
        }
        return sends;
    }

    if admin_all_copy_mode {
        // Nothing was detected, so the composed body is already the
        // nothing-to-notify placeholder.
        return vec![PlannedSend {
            recipient: Recipient::Admin,
            title: format!("{} | ADMIN MESSAGE", outcome.title),
            body: outcome.body.clone(),
        }];
    }

    Vec::new()
}
