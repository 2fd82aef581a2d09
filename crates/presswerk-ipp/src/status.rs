// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// IPP status codes (RFC 8011 SS4.1.8).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::message::Code;

/// An IPP status code, carried in the code field of a response.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Status(pub u16);

impl Status {
    pub const OK: Status = Status(0x0000);
    pub const OK_IGNORED_OR_SUBSTITUTED: Status = Status(0x0001);
    pub const OK_CONFLICTING: Status = Status(0x0002);
    pub const OK_IGNORED_SUBSCRIPTIONS: Status = Status(0x0003);
    pub const OK_IGNORED_NOTIFICATIONS: Status = Status(0x0004);
    pub const OK_TOO_MANY_EVENTS: Status = Status(0x0005);
    pub const OK_BUT_CANCEL_SUBSCRIPTION: Status = Status(0x0006);
    pub const OK_EVENTS_COMPLETE: Status = Status(0x0007);

    pub const REDIRECTION_OTHER_SITE: Status = Status(0x0200);
    pub const CUPS_SEE_OTHER: Status = Status(0x0280);

    pub const ERROR_BAD_REQUEST: Status = Status(0x0400);
    pub const ERROR_FORBIDDEN: Status = Status(0x0401);
    pub const ERROR_NOT_AUTHENTICATED: Status = Status(0x0402);
    pub const ERROR_NOT_AUTHORIZED: Status = Status(0x0403);
    pub const ERROR_NOT_POSSIBLE: Status = Status(0x0404);
    pub const ERROR_TIMEOUT: Status = Status(0x0405);
    pub const ERROR_NOT_FOUND: Status = Status(0x0406);
    pub const ERROR_GONE: Status = Status(0x0407);
    pub const ERROR_REQUEST_ENTITY: Status = Status(0x0408);
    pub const ERROR_REQUEST_VALUE: Status = Status(0x0409);
    pub const ERROR_DOCUMENT_FORMAT_NOT_SUPPORTED: Status = Status(0x040a);
    pub const ERROR_ATTRIBUTES_OR_VALUES: Status = Status(0x040b);
    pub const ERROR_URI_SCHEME: Status = Status(0x040c);
    pub const ERROR_CHARSET: Status = Status(0x040d);
    pub const ERROR_CONFLICTING: Status = Status(0x040e);
    pub const ERROR_COMPRESSION_NOT_SUPPORTED: Status = Status(0x040f);
    pub const ERROR_COMPRESSION_ERROR: Status = Status(0x0410);
    pub const ERROR_DOCUMENT_FORMAT_ERROR: Status = Status(0x0411);
    pub const ERROR_DOCUMENT_ACCESS: Status = Status(0x0412);
    pub const ERROR_ATTRIBUTES_NOT_SETTABLE: Status = Status(0x0413);
    pub const ERROR_IGNORED_ALL_SUBSCRIPTIONS: Status = Status(0x0414);
    pub const ERROR_TOO_MANY_SUBSCRIPTIONS: Status = Status(0x0415);
    pub const ERROR_IGNORED_ALL_NOTIFICATIONS: Status = Status(0x0416);
    pub const ERROR_PRINT_SUPPORT_FILE_NOT_FOUND: Status = Status(0x0417);
    pub const ERROR_DOCUMENT_PASSWORD: Status = Status(0x0418);
    pub const ERROR_DOCUMENT_PERMISSION: Status = Status(0x0419);
    pub const ERROR_DOCUMENT_SECURITY: Status = Status(0x041a);
    pub const ERROR_DOCUMENT_UNPRINTABLE: Status = Status(0x041b);
    pub const ERROR_ACCOUNT_INFO_NEEDED: Status = Status(0x041c);
    pub const ERROR_ACCOUNT_CLOSED: Status = Status(0x041d);
    pub const ERROR_ACCOUNT_LIMIT_REACHED: Status = Status(0x041e);
    pub const ERROR_ACCOUNT_AUTHORIZATION_FAILED: Status = Status(0x041f);
    pub const ERROR_NOT_FETCHABLE: Status = Status(0x0420);

    pub const ERROR_INTERNAL: Status = Status(0x0500);
    pub const ERROR_OPERATION_NOT_SUPPORTED: Status = Status(0x0501);
    pub const ERROR_SERVICE_UNAVAILABLE: Status = Status(0x0502);
    pub const ERROR_VERSION_NOT_SUPPORTED: Status = Status(0x0503);
    pub const ERROR_DEVICE: Status = Status(0x0504);
    pub const ERROR_TEMPORARY: Status = Status(0x0505);
    pub const ERROR_NOT_ACCEPTING_JOBS: Status = Status(0x0506);
    pub const ERROR_BUSY: Status = Status(0x0507);
    pub const ERROR_JOB_CANCELED: Status = Status(0x0508);
    pub const ERROR_MULTIPLE_JOBS_NOT_SUPPORTED: Status = Status(0x0509);
    pub const ERROR_PRINTER_IS_DEACTIVATED: Status = Status(0x050a);
    pub const ERROR_TOO_MANY_JOBS: Status = Status(0x050b);
    pub const ERROR_TOO_MANY_DOCUMENTS: Status = Status(0x050c);

    /// True for the successful-ok family (0x0000..=0x00ff).
    pub fn is_success(self) -> bool {
        self.0 < 0x0100
    }

    /// The registered status keyword, if any.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Status::OK => "successful-ok",
            Status::OK_IGNORED_OR_SUBSTITUTED => {
                "successful-ok-ignored-or-substituted-attributes"
            }
            Status::OK_CONFLICTING => "successful-ok-conflicting-attributes",
            Status::OK_IGNORED_SUBSCRIPTIONS => "successful-ok-ignored-subscriptions",
            Status::OK_IGNORED_NOTIFICATIONS => "successful-ok-ignored-notifications",
            Status::OK_TOO_MANY_EVENTS => "successful-ok-too-many-events",
            Status::OK_BUT_CANCEL_SUBSCRIPTION => "successful-ok-but-cancel-subscription",
            Status::OK_EVENTS_COMPLETE => "successful-ok-events-complete",
            Status::REDIRECTION_OTHER_SITE => "redirection-other-site",
            Status::CUPS_SEE_OTHER => "cups-see-other",
            Status::ERROR_BAD_REQUEST => "client-error-bad-request",
            Status::ERROR_FORBIDDEN => "client-error-forbidden",
            Status::ERROR_NOT_AUTHENTICATED => "client-error-not-authenticated",
            Status::ERROR_NOT_AUTHORIZED => "client-error-not-authorized",
            Status::ERROR_NOT_POSSIBLE => "client-error-not-possible",
            Status::ERROR_TIMEOUT => "client-error-timeout",
            Status::ERROR_NOT_FOUND => "client-error-not-found",
            Status::ERROR_GONE => "client-error-gone",
            Status::ERROR_REQUEST_ENTITY => "client-error-request-entity-too-large",
            Status::ERROR_REQUEST_VALUE => "client-error-request-value-too-long",
            Status::ERROR_DOCUMENT_FORMAT_NOT_SUPPORTED => {
                "client-error-document-format-not-supported"
            }
            Status::ERROR_ATTRIBUTES_OR_VALUES => {
                "client-error-attributes-or-values-not-supported"
            }
            Status::ERROR_URI_SCHEME => "client-error-uri-scheme-not-supported",
            Status::ERROR_CHARSET => "client-error-charset-not-supported",
            Status::ERROR_CONFLICTING => "client-error-conflicting-attributes",
            Status::ERROR_COMPRESSION_NOT_SUPPORTED => {
                "client-error-compression-not-supported"
            }
            Status::ERROR_COMPRESSION_ERROR => "client-error-compression-error",
            Status::ERROR_DOCUMENT_FORMAT_ERROR => "client-error-document-format-error",
            Status::ERROR_DOCUMENT_ACCESS => "client-error-document-access-error",
            Status::ERROR_ATTRIBUTES_NOT_SETTABLE => "client-error-attributes-not-settable",
            Status::ERROR_IGNORED_ALL_SUBSCRIPTIONS => {
                "client-error-ignored-all-subscriptions"
            }
            Status::ERROR_TOO_MANY_SUBSCRIPTIONS => "client-error-too-many-subscriptions",
            Status::ERROR_IGNORED_ALL_NOTIFICATIONS => {
                "client-error-ignored-all-notifications"
            }
            Status::ERROR_PRINT_SUPPORT_FILE_NOT_FOUND => {
                "client-error-print-support-file-not-found"
            }
            Status::ERROR_DOCUMENT_PASSWORD => "client-error-document-password-error",
            Status::ERROR_DOCUMENT_PERMISSION => "client-error-document-permission-error",
            Status::ERROR_DOCUMENT_SECURITY => "client-error-document-security-error",
            Status::ERROR_DOCUMENT_UNPRINTABLE => "client-error-document-unprintable-error",
            Status::ERROR_ACCOUNT_INFO_NEEDED => "client-error-account-info-needed",
            Status::ERROR_ACCOUNT_CLOSED => "client-error-account-closed",
            Status::ERROR_ACCOUNT_LIMIT_REACHED => "client-error-account-limit-reached",
            Status::ERROR_ACCOUNT_AUTHORIZATION_FAILED => {
                "client-error-account-authorization-failed"
            }
            Status::ERROR_NOT_FETCHABLE => "client-error-not-fetchable",
            Status::ERROR_INTERNAL => "server-error-internal-error",
            Status::ERROR_OPERATION_NOT_SUPPORTED => "server-error-operation-not-supported",
            Status::ERROR_SERVICE_UNAVAILABLE => "server-error-service-unavailable",
            Status::ERROR_VERSION_NOT_SUPPORTED => "server-error-version-not-supported",
            Status::ERROR_DEVICE => "server-error-device-error",
            Status::ERROR_TEMPORARY => "server-error-temporary-error",
            Status::ERROR_NOT_ACCEPTING_JOBS => "server-error-not-accepting-jobs",
            Status::ERROR_BUSY => "server-error-busy",
            Status::ERROR_JOB_CANCELED => "server-error-job-canceled",
            Status::ERROR_MULTIPLE_JOBS_NOT_SUPPORTED => {
                "server-error-multiple-document-jobs-not-supported"
            }
            Status::ERROR_PRINTER_IS_DEACTIVATED => "server-error-printer-is-deactivated",
            Status::ERROR_TOO_MANY_JOBS => "server-error-too-many-jobs",
            Status::ERROR_TOO_MANY_DOCUMENTS => "server-error-too-many-documents",
            _ => return None,
        };
        Some(name)
    }
}

impl From<Code> for Status {
    fn from(code: Code) -> Status {
        Status(code.0)
    }
}

impl fmt::Display for Status {
    /// The status keyword, or `0x%04x` where none is registered.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:04x}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_names() {
        assert_eq!(Status::OK.to_string(), "successful-ok");
        assert_eq!(Status::ERROR_NOT_FOUND.to_string(), "client-error-not-found");
        assert_eq!(
            Status::ERROR_OPERATION_NOT_SUPPORTED.to_string(),
            "server-error-operation-not-supported"
        );
    }

    #[test]
    fn unregistered_codes_render_as_hex() {
        assert_eq!(Status(0x0123).to_string(), "0x0123");
    }

    #[test]
    fn success_family() {
        assert!(Status::OK.is_success());
        assert!(Status::OK_EVENTS_COMPLETE.is_success());
        assert!(!Status::ERROR_BAD_REQUEST.is_success());
        assert!(!Status::REDIRECTION_OTHER_SITE.is_success());
    }
}
