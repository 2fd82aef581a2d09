// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// IPP operation codes (RFC 8011 SS4, PWG 5100.x, CUPS extensions).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::message::Code;

/// An IPP operation code, carried in the code field of a request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Op(pub u16);

impl Op {
    pub const PRINT_JOB: Op = Op(0x0002);
    pub const PRINT_URI: Op = Op(0x0003);
    pub const VALIDATE_JOB: Op = Op(0x0004);
    pub const CREATE_JOB: Op = Op(0x0005);
    pub const SEND_DOCUMENT: Op = Op(0x0006);
    pub const SEND_URI: Op = Op(0x0007);
    pub const CANCEL_JOB: Op = Op(0x0008);
    pub const GET_JOB_ATTRIBUTES: Op = Op(0x0009);
    pub const GET_JOBS: Op = Op(0x000a);
    pub const GET_PRINTER_ATTRIBUTES: Op = Op(0x000b);
    pub const HOLD_JOB: Op = Op(0x000c);
    pub const RELEASE_JOB: Op = Op(0x000d);
    pub const RESTART_JOB: Op = Op(0x000e);

    pub const PAUSE_PRINTER: Op = Op(0x0010);
    pub const RESUME_PRINTER: Op = Op(0x0011);
    pub const PURGE_JOBS: Op = Op(0x0012);
    pub const SET_PRINTER_ATTRIBUTES: Op = Op(0x0013);
    pub const SET_JOB_ATTRIBUTES: Op = Op(0x0014);
    pub const GET_PRINTER_SUPPORTED_VALUES: Op = Op(0x0015);
    pub const CREATE_PRINTER_SUBSCRIPTIONS: Op = Op(0x0016);
    pub const CREATE_JOB_SUBSCRIPTIONS: Op = Op(0x0017);
    pub const GET_SUBSCRIPTION_ATTRIBUTES: Op = Op(0x0018);
    pub const GET_SUBSCRIPTIONS: Op = Op(0x0019);
    pub const RENEW_SUBSCRIPTION: Op = Op(0x001a);
    pub const CANCEL_SUBSCRIPTION: Op = Op(0x001b);
    pub const GET_NOTIFICATIONS: Op = Op(0x001c);
    pub const SEND_NOTIFICATIONS: Op = Op(0x001d);
    pub const GET_RESOURCE_ATTRIBUTES: Op = Op(0x001e);
    pub const GET_RESOURCE_DATA: Op = Op(0x001f);

    pub const GET_RESOURCES: Op = Op(0x0020);
    pub const GET_PRINT_SUPPORT_FILES: Op = Op(0x0021);
    pub const ENABLE_PRINTER: Op = Op(0x0022);
    pub const DISABLE_PRINTER: Op = Op(0x0023);
    pub const PAUSE_PRINTER_AFTER_CURRENT_JOB: Op = Op(0x0024);
    pub const HOLD_NEW_JOBS: Op = Op(0x0025);
    pub const RELEASE_HELD_NEW_JOBS: Op = Op(0x0026);
    pub const DEACTIVATE_PRINTER: Op = Op(0x0027);
    pub const ACTIVATE_PRINTER: Op = Op(0x0028);
    pub const RESTART_PRINTER: Op = Op(0x0029);
    pub const SHUTDOWN_PRINTER: Op = Op(0x002a);
    pub const STARTUP_PRINTER: Op = Op(0x002b);
    pub const REPROCESS_JOB: Op = Op(0x002c);
    pub const CANCEL_CURRENT_JOB: Op = Op(0x002d);
    pub const SUSPEND_CURRENT_JOB: Op = Op(0x002e);
    pub const RESUME_JOB: Op = Op(0x002f);

    pub const PROMOTE_JOB: Op = Op(0x0030);
    pub const SCHEDULE_JOB_AFTER: Op = Op(0x0031);
    pub const CANCEL_DOCUMENT: Op = Op(0x0033);
    pub const GET_DOCUMENT_ATTRIBUTES: Op = Op(0x0034);
    pub const GET_DOCUMENTS: Op = Op(0x0035);
    pub const DELETE_DOCUMENT: Op = Op(0x0036);
    pub const SET_DOCUMENT_ATTRIBUTES: Op = Op(0x0037);
    pub const CANCEL_JOBS: Op = Op(0x0038);
    pub const CANCEL_MY_JOBS: Op = Op(0x0039);
    pub const RESUBMIT_JOB: Op = Op(0x003a);
    pub const CLOSE_JOB: Op = Op(0x003b);
    pub const IDENTIFY_PRINTER: Op = Op(0x003c);
    pub const VALIDATE_DOCUMENT: Op = Op(0x003d);
    pub const ADD_DOCUMENT_IMAGES: Op = Op(0x003e);
    pub const ACKNOWLEDGE_DOCUMENT: Op = Op(0x003f);

    pub const ACKNOWLEDGE_IDENTIFY_PRINTER: Op = Op(0x0040);
    pub const ACKNOWLEDGE_JOB: Op = Op(0x0041);
    pub const FETCH_DOCUMENT: Op = Op(0x0042);
    pub const FETCH_JOB: Op = Op(0x0043);
    pub const GET_OUTPUT_DEVICE_ATTRIBUTES: Op = Op(0x0044);
    pub const UPDATE_ACTIVE_JOBS: Op = Op(0x0045);
    pub const DEREGISTER_OUTPUT_DEVICE: Op = Op(0x0046);
    pub const UPDATE_DOCUMENT_STATUS: Op = Op(0x0047);
    pub const UPDATE_JOB_STATUS: Op = Op(0x0048);
    pub const UPDATE_OUTPUT_DEVICE_ATTRIBUTES: Op = Op(0x0049);
    pub const GET_NEXT_DOCUMENT_DATA: Op = Op(0x004a);
    pub const ALLOCATE_PRINTER_RESOURCES: Op = Op(0x004b);
    pub const CREATE_PRINTER: Op = Op(0x004c);
    pub const DEALLOCATE_PRINTER_RESOURCES: Op = Op(0x004d);
    pub const DELETE_PRINTER: Op = Op(0x004e);
    pub const GET_PRINTERS: Op = Op(0x004f);

    pub const SHUTDOWN_ONE_PRINTER: Op = Op(0x0050);
    pub const STARTUP_ONE_PRINTER: Op = Op(0x0051);
    pub const CANCEL_RESOURCE: Op = Op(0x0052);
    pub const CREATE_RESOURCE: Op = Op(0x0053);
    pub const INSTALL_RESOURCE: Op = Op(0x0054);
    pub const SEND_RESOURCE_DATA: Op = Op(0x0055);
    pub const SET_RESOURCE_ATTRIBUTES: Op = Op(0x0056);
    pub const CREATE_RESOURCE_SUBSCRIPTIONS: Op = Op(0x0057);
    pub const CREATE_SYSTEM_SUBSCRIPTIONS: Op = Op(0x0058);
    pub const DISABLE_ALL_PRINTERS: Op = Op(0x0059);
    pub const ENABLE_ALL_PRINTERS: Op = Op(0x005a);
    pub const GET_SYSTEM_ATTRIBUTES: Op = Op(0x005b);
    pub const GET_SYSTEM_SUPPORTED_VALUES: Op = Op(0x005c);
    pub const PAUSE_ALL_PRINTERS: Op = Op(0x005d);
    pub const PAUSE_ALL_PRINTERS_AFTER_CURRENT_JOB: Op = Op(0x005e);
    pub const REGISTER_OUTPUT_DEVICE: Op = Op(0x005f);

    pub const RESTART_SYSTEM: Op = Op(0x0060);
    pub const RESUME_ALL_PRINTERS: Op = Op(0x0061);
    pub const SET_SYSTEM_ATTRIBUTES: Op = Op(0x0062);
    pub const SHUTDOWN_ALL_PRINTERS: Op = Op(0x0063);
    pub const STARTUP_ALL_PRINTERS: Op = Op(0x0064);

    pub const CUPS_GET_DEFAULT: Op = Op(0x4001);
    pub const CUPS_GET_PRINTERS: Op = Op(0x4002);
    pub const CUPS_ADD_MODIFY_PRINTER: Op = Op(0x4003);
    pub const CUPS_DELETE_PRINTER: Op = Op(0x4004);
    pub const CUPS_GET_CLASSES: Op = Op(0x4005);
    pub const CUPS_ADD_MODIFY_CLASS: Op = Op(0x4006);
    pub const CUPS_DELETE_CLASS: Op = Op(0x4007);
    pub const CUPS_ACCEPT_JOBS: Op = Op(0x4008);
    pub const CUPS_REJECT_JOBS: Op = Op(0x4009);
    pub const CUPS_SET_DEFAULT: Op = Op(0x400a);
    pub const CUPS_GET_DEVICES: Op = Op(0x400b);
    pub const CUPS_GET_PPDS: Op = Op(0x400c);
    pub const CUPS_MOVE_JOB: Op = Op(0x400d);
    pub const CUPS_AUTHENTICATE_JOB: Op = Op(0x400e);
    pub const CUPS_GET_PPD: Op = Op(0x400f);
    pub const CUPS_GET_DOCUMENT: Op = Op(0x4027);
    pub const CUPS_CREATE_LOCAL_PRINTER: Op = Op(0x4028);

    /// The registered operation name, if any.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Op::PRINT_JOB => "Print-Job",
            Op::PRINT_URI => "Print-URI",
            Op::VALIDATE_JOB => "Validate-Job",
            Op::CREATE_JOB => "Create-Job",
            Op::SEND_DOCUMENT => "Send-Document",
            Op::SEND_URI => "Send-URI",
            Op::CANCEL_JOB => "Cancel-Job",
            Op::GET_JOB_ATTRIBUTES => "Get-Job-Attributes",
            Op::GET_JOBS => "Get-Jobs",
            Op::GET_PRINTER_ATTRIBUTES => "Get-Printer-Attributes",
            Op::HOLD_JOB => "Hold-Job",
            Op::RELEASE_JOB => "Release-Job",
            Op::RESTART_JOB => "Restart-Job",
            Op::PAUSE_PRINTER => "Pause-Printer",
            Op::RESUME_PRINTER => "Resume-Printer",
            Op::PURGE_JOBS => "Purge-Jobs",
            Op::SET_PRINTER_ATTRIBUTES => "Set-Printer-Attributes",
            Op::SET_JOB_ATTRIBUTES => "Set-Job-Attributes",
            Op::GET_PRINTER_SUPPORTED_VALUES => "Get-Printer-Supported-Values",
            Op::CREATE_PRINTER_SUBSCRIPTIONS => "Create-Printer-Subscriptions",
            Op::CREATE_JOB_SUBSCRIPTIONS => "Create-Job-Subscriptions",
            Op::GET_SUBSCRIPTION_ATTRIBUTES => "Get-Subscription-Attributes",
            Op::GET_SUBSCRIPTIONS => "Get-Subscriptions",
            Op::RENEW_SUBSCRIPTION => "Renew-Subscription",
            Op::CANCEL_SUBSCRIPTION => "Cancel-Subscription",
            Op::GET_NOTIFICATIONS => "Get-Notifications",
            Op::SEND_NOTIFICATIONS => "Send-Notifications",
            Op::GET_RESOURCE_ATTRIBUTES => "Get-Resource-Attributes",
            Op::GET_RESOURCE_DATA => "Get-Resource-Data",
            Op::GET_RESOURCES => "Get-Resources",
            Op::GET_PRINT_SUPPORT_FILES => "Get-Printer-Support-Files",
            Op::ENABLE_PRINTER => "Enable-Printer",
            Op::DISABLE_PRINTER => "Disable-Printer",
            Op::PAUSE_PRINTER_AFTER_CURRENT_JOB => "Pause-Printer-After-Current-Job",
            Op::HOLD_NEW_JOBS => "Hold-New-Jobs",
            Op::RELEASE_HELD_NEW_JOBS => "Release-Held-New-Jobs",
            Op::DEACTIVATE_PRINTER => "Deactivate-Printer",
            Op::ACTIVATE_PRINTER => "Activate-Printer",
            Op::RESTART_PRINTER => "Restart-Printer",
            Op::SHUTDOWN_PRINTER => "Shutdown-Printer",
            Op::STARTUP_PRINTER => "Startup-Printer",
            Op::REPROCESS_JOB => "Reprocess-Job",
            Op::CANCEL_CURRENT_JOB => "Cancel-Current-Job",
            Op::SUSPEND_CURRENT_JOB => "Suspend-Current-Job",
            Op::RESUME_JOB => "Resume-Job",
            Op::PROMOTE_JOB => "Promote-Job",
            Op::SCHEDULE_JOB_AFTER => "Schedule-Job-After",
            Op::CANCEL_DOCUMENT => "Cancel-Document",
            Op::GET_DOCUMENT_ATTRIBUTES => "Get-Document-Attributes",
            Op::GET_DOCUMENTS => "Get-Documents",
            Op::DELETE_DOCUMENT => "Delete-Document",
            Op::SET_DOCUMENT_ATTRIBUTES => "Set-Document-Attributes",
            Op::CANCEL_JOBS => "Cancel-Jobs",
            Op::CANCEL_MY_JOBS => "Cancel-My-Jobs",
            Op::RESUBMIT_JOB => "Resubmit-Job",
            Op::CLOSE_JOB => "Close-Job",
            Op::IDENTIFY_PRINTER => "Identify-Printer",
            Op::VALIDATE_DOCUMENT => "Validate-Document",
            Op::ADD_DOCUMENT_IMAGES => "Add-Document-Images",
            Op::ACKNOWLEDGE_DOCUMENT => "Acknowledge-Document",
            Op::ACKNOWLEDGE_IDENTIFY_PRINTER => "Acknowledge-Identify-Printer",
            Op::ACKNOWLEDGE_JOB => "Acknowledge-Job",
            Op::FETCH_DOCUMENT => "Fetch-Document",
            Op::FETCH_JOB => "Fetch-Job",
            Op::GET_OUTPUT_DEVICE_ATTRIBUTES => "Get-Output-Device-Attributes",
            Op::UPDATE_ACTIVE_JOBS => "Update-Active-Jobs",
            Op::DEREGISTER_OUTPUT_DEVICE => "Deregister-Output-Device",
            Op::UPDATE_DOCUMENT_STATUS => "Update-Document-Status",
            Op::UPDATE_JOB_STATUS => "Update-Job-Status",
            Op::UPDATE_OUTPUT_DEVICE_ATTRIBUTES => "Update-Output-Device-Attributes",
            Op::GET_NEXT_DOCUMENT_DATA => "Get-Next-Document-Data",
            Op::ALLOCATE_PRINTER_RESOURCES => "Allocate-Printer-Resources",
            Op::CREATE_PRINTER => "Create-Printer",
            Op::DEALLOCATE_PRINTER_RESOURCES => "Deallocate-Printer-Resources",
            Op::DELETE_PRINTER => "Delete-Printer",
            Op::GET_PRINTERS => "Get-Printers",
            Op::SHUTDOWN_ONE_PRINTER => "Shutdown-One-Printer",
            Op::STARTUP_ONE_PRINTER => "Startup-One-Printer",
            Op::CANCEL_RESOURCE => "Cancel-Resource",
            Op::CREATE_RESOURCE => "Create-Resource",
            Op::INSTALL_RESOURCE => "Install-Resource",
            Op::SEND_RESOURCE_DATA => "Send-Resource-Data",
            Op::SET_RESOURCE_ATTRIBUTES => "Set-Resource-Attributes",
            Op::CREATE_RESOURCE_SUBSCRIPTIONS => "Create-Resource-Subscriptions",
            Op::CREATE_SYSTEM_SUBSCRIPTIONS => "Create-System-Subscriptions",
            Op::DISABLE_ALL_PRINTERS => "Disable-All-Printers",
            Op::ENABLE_ALL_PRINTERS => "Enable-All-Printers",
            Op::GET_SYSTEM_ATTRIBUTES => "Get-System-Attributes",
            Op::GET_SYSTEM_SUPPORTED_VALUES => "Get-System-Supported-Values",
            Op::PAUSE_ALL_PRINTERS => "Pause-All-Printers",
            Op::PAUSE_ALL_PRINTERS_AFTER_CURRENT_JOB => {
                "Pause-All-Printers-After-Current-Job"
            }
            Op::REGISTER_OUTPUT_DEVICE => "Register-Output-Device",
            Op::RESTART_SYSTEM => "Restart-System",
            Op::RESUME_ALL_PRINTERS => "Resume-All-Printers",
            Op::SET_SYSTEM_ATTRIBUTES => "Set-System-Attributes",
            Op::SHUTDOWN_ALL_PRINTERS => "Shutdown-All-Printers",
            Op::STARTUP_ALL_PRINTERS => "Startup-All-Printers",
            Op::CUPS_GET_DEFAULT => "CUPS-Get-Default",
            Op::CUPS_GET_PRINTERS => "CUPS-Get-Printers",
            Op::CUPS_ADD_MODIFY_PRINTER => "CUPS-Add-Modify-Printer",
            Op::CUPS_DELETE_PRINTER => "CUPS-Delete-Printer",
            Op::CUPS_GET_CLASSES => "CUPS-Get-Classes",
            Op::CUPS_ADD_MODIFY_CLASS => "CUPS-Add-Modify-Class",
            Op::CUPS_DELETE_CLASS => "CUPS-Delete-Class",
            Op::CUPS_ACCEPT_JOBS => "CUPS-Accept-Jobs",
            Op::CUPS_REJECT_JOBS => "CUPS-Reject-Jobs",
            Op::CUPS_SET_DEFAULT => "CUPS-Set-Default",
            Op::CUPS_GET_DEVICES => "CUPS-Get-Devices",
            Op::CUPS_GET_PPDS => "CUPS-Get-PPDs",
            Op::CUPS_MOVE_JOB => "CUPS-Move-Job",
            Op::CUPS_AUTHENTICATE_JOB => "CUPS-Authenticate-Job",
            Op::CUPS_GET_PPD => "CUPS-Get-PPD",
            Op::CUPS_GET_DOCUMENT => "CUPS-Get-Document",
            Op::CUPS_CREATE_LOCAL_PRINTER => "CUPS-Create-Local-Printer",
            _ => return None,
        };
        Some(name)
    }
}

impl From<Code> for Op {
    fn from(code: Code) -> Op {
        Op(code.0)
    }
}

impl fmt::Display for Op {
    /// The operation name, or `0x%04x` where none is registered.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:04x}", self.0),
        }
    }
}
